use crate::cell::Cell;
use crate::format;
use crossterm::{
    cursor::Hide,
    execute,
    style::{Color, Print, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::io::{stdout, Write};
use std::path::Path;

/// A fixed-size toroidal Game of Life grid.
/// Main entry point for running the simulation.
///
/// The grid owns every cell for the lifetime of the simulation; cells are
/// never added, removed or reallocated, only their state fields change.
pub struct Grid {
    rows: usize,
    cols: usize,
    running: bool,
    generation: u64,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a new grid with every cell dead.
    ///
    /// Each cell's 8 toroidal Moore neighbors are computed here, once, with
    /// modular wraparound; the adjacency never changes afterwards.
    ///
    /// # Arguments
    /// * `rows` - The number of rows.
    /// * `cols` - The number of columns.
    ///
    /// # Panics
    /// Panics if either dimension is zero; there is no empty-grid mode.
    pub fn new(rows: usize, cols: usize) -> Grid {
        if rows == 0 || cols == 0 {
            panic!("Grid dimensions must be positive! Got {}x{}.", rows, cols);
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                cells.push(Cell::new(i, j, Self::neighbors_of(i, j, rows, cols)));
            }
        }

        Grid {
            rows,
            cols,
            running: false,
            generation: 0,
            cells,
        }
    }

    /// Advances the simulation by exactly one generation.
    ///
    /// The update runs in two strict phases. The evaluate phase applies the
    /// life rule to every cell using only the previous generation's
    /// snapshot, so the outcome is independent of evaluation order and the
    /// whole generation is simultaneous. The commit phase then promotes
    /// every cell's new state to be the next snapshot; it starts only after
    /// evaluation has finished for all cells.
    ///
    /// Returns true iff at least one cell changed state; a driver typically
    /// stops stepping when this returns false.
    pub fn update(&mut self) -> bool {
        let counts: Vec<usize> = self
            .cells
            .iter()
            .map(|cell| {
                cell.neighbors()
                    .iter()
                    .filter(|&&neighbor| self.cells[neighbor].was_alive())
                    .count()
            })
            .collect();

        for (index, count) in counts.into_iter().enumerate() {
            self.cells[index].apply_rule(count);
        }

        let changed = self
            .cells
            .iter()
            .any(|cell| cell.is_alive() != cell.was_alive());

        for cell in &mut self.cells {
            cell.commit();
        }

        self.generation += 1;
        changed
    }

    /// Forces every cell dead, regardless of its prior state.
    ///
    /// The death signal fires for every cell, including cells that were
    /// already dead. Resets the generation counter.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.force_die();
        }

        self.generation = 0;
    }

    /// Seeds the grid with a reproducible random pattern.
    ///
    /// Every cell goes through a forced transition, so a birth or death
    /// signal fires for each one. The same seed always produces the same
    /// pattern. Resets the generation counter.
    ///
    /// # Arguments
    /// * `density` - The probability for each cell to come up alive, in `[0, 1]`.
    /// * `seed` - The seed for the random number generator.
    pub fn randomize(&mut self, density: f64, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);

        for cell in &mut self.cells {
            if rng.gen_bool(density) {
                cell.force_born();
            } else {
                cell.force_die();
            }
        }

        self.generation = 0;
    }

    /// Loads a pattern from a file.
    ///
    /// # Arguments
    /// * `path` - The path to the file containing the pattern.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn load(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();

        match fs::read_to_string(path) {
            Ok(contents) => self.load_str(&contents),
            Err(e) => panic!("Could not read pattern file {} due to {}", path.display(), e),
        }
    }

    /// Loads a pattern from its textual representation.
    ///
    /// The whole source is validated before anything is mutated: on any
    /// format violation this returns false and the grid is left completely
    /// unchanged. On success the pattern replaces both the current state and
    /// the previous-generation snapshot of every cell, in row-major order,
    /// without firing any signals; views derived from notifications must be
    /// refreshed by the driver. Resets the generation counter.
    pub fn load_str(&mut self, contents: &str) -> bool {
        let states = match format::parse(contents, self.rows, self.cols) {
            Some(states) => states,
            None => return false,
        };

        for (cell, alive) in self.cells.iter_mut().zip(states) {
            cell.set_state(alive);
        }

        self.generation = 0;
        true
    }

    /// Saves the current pattern to a file.
    ///
    /// # Arguments
    /// * `path` - The path to write the pattern to.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();

        if let Err(e) = fs::write(path, self.pattern()) {
            panic!("Could not write pattern file {} due to {}", path.display(), e);
        }
    }

    /// Renders the current pattern in the row-based text format.
    pub fn pattern(&self) -> String {
        format::render(&self.cells, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> &Cell {
        &self.cells[self.index(row, col)]
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        let index = self.index(row, col);
        &mut self.cells[index]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The number of generations completed since the current pattern was
    /// established by construction, `clear`, `randomize` or a load.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// The coordinates of every live cell, in row-major order.
    pub fn alive_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .filter(|cell| cell.is_alive())
            .map(|cell| (cell.row(), cell.col()))
            .collect()
    }

    /// Whether the driving loop considers the simulation running.
    ///
    /// The flag belongs to the driver; `update` never touches it.
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Draws the grid to the console.
    pub fn draw(&self) {
        let mut stdout = stdout();

        // Display information about the simulation
        execute!(
            stdout,
            Clear(ClearType::All),
            Hide,
            Print("Generation: "),
            Print(self.generation.to_string()),
            Print(", Population: "),
            Print(self.population().to_string()),
            Print(", Running: "),
            Print(self.running.to_string()),
            Print("\n\n")
        )
        .unwrap();

        // Display the grid
        for row in 0..self.rows {
            for col in 0..self.cols {
                let alive = self.get(row, col).is_alive();
                execute!(
                    stdout,
                    SetForegroundColor(if alive { Color::Yellow } else { Color::DarkGrey }),
                    Print(if alive { '#' } else { '.' }),
                    SetForegroundColor(Color::Reset)
                )
                .unwrap();
            }
            execute!(stdout, Print("\n")).unwrap();
        }

        stdout.flush().unwrap();
    }

    fn neighbors_of(i: usize, j: usize, rows: usize, cols: usize) -> [usize; 8] {
        // Toroidal Moore neighborhood: both axes wrap with modular
        // arithmetic. On degenerate dimensions (1 or 2 on an axis) several
        // slots resolve to the same cell; that is expected and each slot is
        // counted independently.
        let up = (i + rows - 1) % rows;
        let down = (i + 1) % rows;
        let left = (j + cols - 1) % cols;
        let right = (j + 1) % cols;

        [
            up * cols + j,
            down * cols + j,
            i * cols + right,
            i * cols + left,
            up * cols + right,
            up * cols + left,
            down * cols + right,
            down * cols + left,
        ]
    }

    fn index(&self, row: usize, col: usize) -> usize {
        if row >= self.rows || col >= self.cols {
            panic!(
                "Cell ({}, {}) is out of bounds for a {}x{} grid!",
                row, col, self.rows, self.cols
            );
        }

        row * self.cols + col
    }
}
