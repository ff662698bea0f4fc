pub mod config;
pub mod error;
pub mod frame;
pub mod gui;
mod macros;

pub use error::ConfigurationError;
