//! Error types and handling for usaddress-rs.
//!
//! Malformed addresses are *not* errors: the parser is best-effort and
//! signals an unrecognized field by leaving it empty. The only failure
//! worth signaling is structurally invalid input.

/// Result type alias for address operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for address operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input was empty (or whitespace-only) after trimming.
    #[error("empty address input")]
    EmptyInput,
}
