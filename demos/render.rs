use life_engine::Grid;
use std::path::Path;
use std::thread;
use std::time::Duration;

fn main() {
    let pattern_file = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/patterns/glider.life");
    let mut grid = Grid::new(12, 12);

    if !grid.load(&pattern_file) {
        panic!(
            "Pattern file {} does not describe a {}x{} grid!",
            pattern_file.display(),
            grid.rows(),
            grid.cols()
        );
    }

    grid.set_running(true);

    // Step the glider across the torus; stop early if the grid ever settles
    while grid.is_running() && grid.generation() < 60 {
        grid.draw();
        thread::sleep(Duration::from_millis(100));

        if !grid.update() {
            grid.set_running(false);
        }
    }

    grid.draw();
}
