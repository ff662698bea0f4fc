pub mod app;
pub mod board;
pub mod canvas;
pub mod snapshot;
pub mod theme;
