use thiserror::Error;

/// Why an encode call could not append its code units.
///
/// Decoding has no error type: a codec that cannot produce a character from
/// some code units reports no character and the iterator steps past them.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    #[error("output has no room for {needed} more code unit(s)")]
    OutputFull { needed: usize },
    #[error("character cannot be represented in this encoding")]
    Unrepresentable,
}
