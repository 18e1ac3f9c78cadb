use thiserror::Error;

/// Errors surfaced by the display map.
///
/// Only configuration can fail. Positions, ranges and decoration ids are
/// clamped, normalized or ignored instead, so a render pass always produces a
/// frame.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Fixed-column wrapping needs room for at least one character per line.
    #[error("Invalid wrap column {column}: fixed-column wrapping requires a column of at least 1")]
    InvalidWrapColumn { column: u32 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
