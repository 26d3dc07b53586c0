//! Error types for framing, row codecs, and stream orchestration.

use thiserror::Error;

/// Errors raised by the frame codec.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("payload too large for frame encoding: {size} bytes (max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    #[error("corrupt length prefix: unrecognized tier in byte {byte:#04x}")]
    CorruptTier { byte: u8 },
}

/// Errors raised by row codecs (the contract, the schema-typed default,
/// and the wire engine underneath it).
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("unknown field type: {0:?}")]
    UnknownFieldType(String),

    #[error("enum field {field:?} requires an `enum` value list in its attributes")]
    InvalidEnumConfig { field: String },

    #[error("tried to set undeclared enum value {value:?} on field {field:?}")]
    UndeclaredEnumValue { field: String, value: String },

    #[error("decoded enum index {index} out of range for field {field:?}")]
    EnumIndexOutOfRange { field: String, index: i32 },

    #[error("row sets field {0:?} which is not declared in the schema")]
    UndeclaredField(String),

    #[error("duplicate field name in schema: {0:?}")]
    DuplicateField(String),

    #[error("value for field {field:?} does not match declared type (expected {expected})")]
    TypeMismatch { field: String, expected: &'static str },

    #[error("codec has no schema yet: serialize or deserialize a header first")]
    SchemaNotReady,

    #[error("this codec does not carry a schema header")]
    HeaderUnsupported,

    #[error("record truncated mid-field")]
    Truncated,

    #[error("malformed varint (more than 10 bytes)")]
    MalformedVarint,

    #[error("invalid wire type: {0}")]
    InvalidWireType(u8),

    #[error("invalid UTF-8 in string field")]
    InvalidUtf8,

    #[error("malformed header record: {0}")]
    MalformedHeader(String),

    #[error("unsupported header version: {0}")]
    UnsupportedHeaderVersion(u32),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors surfaced by the stream reader and writer.
#[derive(Debug, Error)]
pub enum LogError {
    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("stream previously failed and can no longer be fed")]
    Poisoned,
}
