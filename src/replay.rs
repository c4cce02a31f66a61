use crate::grid::Grid;
use serde::Serialize;
use std::cell::RefCell;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::rc::Rc;

/// One recorded generation: the population after the update and every birth
/// and death announced during it, in notification order.
#[derive(Serialize)]
struct Generation {
    generation: u64,
    population: usize,
    born: Vec<(usize, usize)>,
    died: Vec<(usize, usize)>,
}

#[derive(Serialize)]
struct Replay {
    rows: usize,
    cols: usize,
    seed: String,
    generations: Vec<Generation>,
}

#[derive(Default)]
struct PendingEvents {
    born: Vec<(usize, usize)>,
    died: Vec<(usize, usize)>,
}

/// Records a run for later playback.
///
/// The recorder subscribes to every cell's birth and death channels and
/// groups what it observes into generation entries. The driver closes each
/// entry by calling [`Recorder::mark_generation`] after `Grid::update`, and
/// finally writes the whole run as JSON with [`Recorder::save`].
pub struct Recorder {
    pending: Rc<RefCell<PendingEvents>>,
    replay: Replay,
}

impl Recorder {
    /// Attaches a recorder to every cell of the grid and snapshots the
    /// current pattern as the replay seed.
    ///
    /// Attach after seeding the grid. Bulk loads fire no signals and are
    /// therefore invisible to the recorder; call [`Recorder::clear`] after a
    /// load, the same way any other derived view is refreshed.
    pub fn attach(grid: &mut Grid) -> Recorder {
        let pending = Rc::new(RefCell::new(PendingEvents::default()));

        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let born = Rc::clone(&pending);
                grid.get_mut(row, col)
                    .on_born(move |event| born.borrow_mut().born.push((event.row, event.col)));

                let died = Rc::clone(&pending);
                grid.get_mut(row, col)
                    .on_died(move |event| died.borrow_mut().died.push((event.row, event.col)));
            }
        }

        Recorder {
            pending,
            replay: Replay {
                rows: grid.rows(),
                cols: grid.cols(),
                seed: grid.pattern(),
                generations: Vec::new(),
            },
        }
    }

    /// Closes the current generation: everything observed since the previous
    /// mark becomes one entry. Call once after each `Grid::update`.
    pub fn mark_generation(&mut self, grid: &Grid) {
        let mut pending = self.pending.borrow_mut();

        self.replay.generations.push(Generation {
            generation: grid.generation(),
            population: grid.population(),
            born: std::mem::take(&mut pending.born),
            died: std::mem::take(&mut pending.died),
        });
    }

    /// Discards the recording, drops unmarked events, and re-snapshots the
    /// grid's current pattern as the seed.
    pub fn clear(&mut self, grid: &Grid) {
        self.replay.generations.clear();
        self.replay.seed = grid.pattern();

        let mut pending = self.pending.borrow_mut();
        pending.born.clear();
        pending.died.clear();
    }

    /// Saves the replay as pretty-printed JSON.
    ///
    /// # Arguments
    /// * `path` - The path to write the replay to.
    ///
    /// # Panics
    /// Panics if the file cannot be created.
    pub fn save(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();

        let file = match File::create(path) {
            Ok(file) => file,
            Err(e) => panic!("Could not create replay file {} due to {}", path.display(), e),
        };

        let mut writer = BufWriter::new(&file);
        serde_json::to_writer_pretty(&mut writer, &self.replay).unwrap();
    }
}
