use life_engine::{Grid, Recorder};
use std::env;

fn main() {
    let mut grid = Grid::new(5, 5);

    // Seed a small pattern with direct user edits
    for (row, col) in [(1, 1), (1, 2), (1, 3), (2, 3), (3, 2)] {
        grid.get_mut(row, col).switch();
    }

    // Print every transition as the simulation announces it
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            grid.get_mut(row, col)
                .on_born(|event| println!("born: ({}, {})", event.row, event.col));
            grid.get_mut(row, col)
                .on_died(|event| println!("died: ({}, {})", event.row, event.col));
        }
    }

    let mut recorder = Recorder::attach(&mut grid);

    // Step until the grid settles, with a cap in case the pattern oscillates
    while grid.update() && grid.generation() < 100 {
        recorder.mark_generation(&grid);
    }

    let replay_file = env::temp_dir().join("tutorial_replay.json");
    let pattern_file = env::temp_dir().join("tutorial_final.life");
    recorder.save(&replay_file);
    grid.save(&pattern_file);

    println!("\nSimulated {} generations.", grid.generation());
    println!("Replay saved to {}", replay_file.display());
    println!("Final pattern saved to {}", pattern_file.display());
}
