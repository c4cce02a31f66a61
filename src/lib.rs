//! # life_engine
//!
//! The core engine for Conway's Game of Life on a fixed-size toroidal grid.
//!
//! The engine owns every cell, advances the simulation one synchronous
//! generation at a time, and announces each birth and death through per-cell
//! notification channels. A driver (a UI, a terminal loop) consumes the
//! public operations (`update`, `clear`, `switch`, `load`, `save`) and
//! subscribes to the notifications; pacing and input handling stay outside
//! the engine.

pub mod grid;
pub use grid::Grid;

mod cell;
pub use cell::Cell;
pub use cell::CellEvent;

mod signal;
pub use signal::Signal;
pub use signal::Subscription;

mod replay;
pub use replay::Recorder;

mod format;
