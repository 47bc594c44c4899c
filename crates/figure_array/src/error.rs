use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FigureArrayError {
    /// The container is left exactly as it was.
    #[error("{operation}: index {index} is out of range for length {len}")]
    OutOfRange {
        operation: &'static str,
        index: usize,
        len: usize,
    },
}
