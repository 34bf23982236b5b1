use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadoutError {
    #[error("target weight {target} lbs is less than the bar alone ({bar} lbs)")]
    InvalidTarget { target: f64, bar: f64 },
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}
