use thiserror::Error;

/// A field-level validation failure raised while decoding wire data.
///
/// These are emitted by the [`codec`](crate::codec) functions and by the
/// deserialize impls of the bundle types, and surface to callers of
/// [`Bundle::from_wire`](crate::Bundle::from_wire) inside a [`WireError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Malformed hex or otherwise undecodable text.
    #[error("{0}")]
    Decode(String),
    /// A fixed-size field decoded to the wrong number of bytes.
    #[error("invalid length: expected {expected} bytes, got {got}")]
    Length {
        /// The required byte length.
        expected: usize,
        /// The length the input actually decoded to.
        got: usize,
    },
    /// An integer outside its permitted range.
    #[error("value {value} out of range {min}..={max}")]
    Range {
        /// The offending value.
        value: i128,
        /// Lowest permitted value.
        min: i128,
        /// Highest permitted value.
        max: i128,
    },
    /// A bundle body item that matches none of the known shapes, or carries
    /// fields from more than one.
    #[error("cannot resolve bundle item: {0}")]
    VariantResolution(&'static str),
    /// A required field is absent.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    /// A protocol version or privacy hint outside the known set.
    #[error("unknown enum value `{0}`")]
    UnknownEnumValue(String),
}

/// Error returned when wire-format JSON fails to decode into a
/// [`Bundle`](crate::Bundle).
///
/// Decoding is all-or-nothing: no partially populated bundle is ever
/// produced. The error names the field that failed, e.g. `body[2].tx`.
#[derive(Debug, Error)]
#[error("invalid bundle field `{path}`: {message}")]
pub struct WireError {
    path: String,
    message: String,
}

impl WireError {
    pub(crate) fn from_serde(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        Self { path: err.path().to_string(), message: err.into_inner().to_string() }
    }

    pub(crate) fn at_document(err: serde_json::Error) -> Self {
        Self { path: ".".to_string(), message: err.to_string() }
    }

    /// Path of the field that failed to decode, e.g. `body[2].tx`.
    ///
    /// `.` refers to the document itself (not valid JSON, trailing input).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Description of the failure.
    pub fn message(&self) -> &str {
        &self.message
    }
}
