use std::{error, fmt, io};

/// Errors surfaced by the [`Scanner`](crate::scan::Scanner).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ScanError {
    /// A byte was inadmissible in the scanner's current state.
    Syntax,
    /// The end of input was marked while a token was still underway.
    UnexpectedEndOfInput,
    /// No unread bytes are available; feed more input and call again.
    BufferUnderrun,
    /// A decimal literal exceeded the magnitude accumulator.
    Overflow,
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScanError::Syntax => write!(f, "byte not admissible in current scanner state"),
            ScanError::UnexpectedEndOfInput => write!(f, "input ended in the middle of a token"),
            ScanError::BufferUnderrun => write!(f, "scanner is out of bytes; feed more input"),
            ScanError::Overflow => write!(f, "decimal literal does not fit in 64 bits"),
        }
    }
}

impl error::Error for ScanError {}

/// Errors surfaced while decoding, from either wire format.
#[derive(Debug)]
pub enum Error {
    /// Malformed input byte.
    Syntax,
    /// The byte source ran dry while more input was needed.
    UnexpectedEndOfInput,
    /// An integer did not fit the accumulator.
    Overflow,
    /// A float width or integer range did not match the target type.
    IllFit,
    /// A string or symbol payload was not valid UTF-8.
    InvalidUtf8,
    /// A token arrived that the current plan cannot accept.
    UnexpectedToken,
    /// A struct plan expected `{`.
    ExpectedDictionaryStart,
    /// A struct plan expected `}`.
    ExpectedDictionaryEnd,
    /// A struct key appeared twice.
    KeyFoundBefore(String),
    /// A struct key is not part of the target type.
    UnknownKey(String),
    /// The dictionary closed before this field arrived.
    MissingKey(&'static str),
    /// The byte source failed.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Syntax => write!(f, "malformed input"),
            Error::UnexpectedEndOfInput => write!(f, "unexpected end of input"),
            Error::Overflow => write!(f, "integer too large"),
            Error::IllFit => write!(f, "value does not fit the target type"),
            Error::InvalidUtf8 => write!(f, "string payload is not valid UTF-8"),
            Error::UnexpectedToken => write!(f, "unexpected token"),
            Error::ExpectedDictionaryStart => write!(f, "expected start of dictionary"),
            Error::ExpectedDictionaryEnd => write!(f, "expected end of dictionary"),
            Error::KeyFoundBefore(k) => write!(f, "key `{}` appeared twice", k),
            Error::UnknownKey(k) => write!(f, "key `{}` is not known", k),
            Error::MissingKey(k) => write!(f, "key `{}` is missing", k),
            Error::Io(e) => write!(f, "byte source failed: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Error { Error::Io(e) }
}

impl From<ScanError> for Error {
    fn from(e: ScanError) -> Error {
        match e {
            ScanError::Syntax => Error::Syntax,
            ScanError::UnexpectedEndOfInput => Error::UnexpectedEndOfInput,
            // the parse driver refills on underruns; one leaking through means
            // the caller stopped feeding, which reads as truncated input
            ScanError::BufferUnderrun => Error::UnexpectedEndOfInput,
            ScanError::Overflow => Error::Overflow,
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Error converting a [`Syrup`](crate::Syrup) tree into a host value.
pub struct ConversionError(pub String);

impl ConversionError {
    pub fn new(s: &str) -> Self { ConversionError(s.to_string()) }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "conversion failed: {}", self.0)
    }
}

impl error::Error for ConversionError {}
