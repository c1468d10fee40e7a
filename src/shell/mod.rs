//! Terminal front end: board rendering, move parsing and the game loop.
//!
//! Nothing here is needed to use the engine; it is the thin layer the
//! `purble-pairs` binary runs on stdin/stdout.

pub mod render;
pub mod input;
pub mod controller;

pub use render::write_board;
pub use input::{parse_coord, InputError};
pub use controller::{Controller, ShellError};
