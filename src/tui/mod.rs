pub mod app;
pub mod input;
pub mod keys;
pub mod render;
pub mod router;
pub mod surface;
pub mod theme;

pub use app::{App, run, run_with};
