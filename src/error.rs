use thiserror::Error;

/// Invalid board configuration. Raised once while building the board at startup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Expected {expected} board labels, found {found}")]
    LabelCount { expected: usize, found: usize },
    #[error("Board label {0} appears more than once")]
    DuplicateLabel(u32),
    #[error("Radius `{outer}` ({outer_value}) must be greater than `{inner}` ({inner_value})")]
    RadiiNotDecreasing {
        outer: &'static str,
        outer_value: f64,
        inner: &'static str,
        inner_value: f64,
    },
    #[error("Multiplier ring width must be positive, got {0}")]
    MultiplierWidth(f64),
    #[error("Label offset {offset} must lie between the double ring ({double}) and the board edge ({board})")]
    NumberOffset { offset: f64, double: f64, board: f64 },
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Alternating {0} colors must be distinct")]
    IdenticalAlternates(&'static str),
    #[error("Invalid font: {0}")]
    InvalidFont(String),
}
