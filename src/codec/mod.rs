//! Pluggable row codecs.
//!
//! A [`RowCodec`] turns rows into record payloads and back; the framing
//! and orchestration layers treat payloads as opaque bytes. The default
//! implementation is the schema-typed [`TypedCodec`]; [`JsonCodec`] is a
//! header-less alternative for schemaless streams.

use crate::error::CodecError;
use crate::schema::Schema;
use crate::value::Row;
use bytes::Bytes;

pub mod json;
pub mod typed;

pub use json::JsonCodec;
pub use typed::TypedCodec;

/// The capability set every pluggable row codec provides.
///
/// Codec instances are stateful per stream: once a header has been
/// serialized or deserialized the schema is fixed, and an instance must
/// not be shared across streams with different schemas.
pub trait RowCodec {
    /// Encodes one row into a record payload.
    fn encode_row(&mut self, row: &Row) -> Result<Bytes, CodecError>;

    /// Decodes one record payload into a row.
    fn decode_row(&mut self, buf: &[u8]) -> Result<Row, CodecError>;

    /// Whether this codec embeds a schema header as the first record of
    /// a stream. Codecs returning `false` treat the first frame as an
    /// ordinary row.
    fn has_header(&self) -> bool {
        false
    }

    /// Serializes the schema into a header record payload, fixing this
    /// instance's schema in the process.
    fn serialize_header(&mut self, _schema: &Schema) -> Result<Bytes, CodecError> {
        Err(CodecError::HeaderUnsupported)
    }

    /// Reconstructs the schema from a header record payload, returning
    /// any metadata it carried.
    fn deserialize_header(
        &mut self,
        _buf: &[u8],
    ) -> Result<Option<serde_json::Value>, CodecError> {
        Err(CodecError::HeaderUnsupported)
    }
}
