//! Header-less JSON row codec.
//!
//! Each record payload is one JSON object; no schema header is embedded,
//! so the first frame of a stream is an ordinary row. Useful for debug
//! streams and schemaless producers.
//!
//! Decoded numbers map to the widest matching variant (`Uint64`, `Int64`,
//! or `Double`), so a row does not necessarily decode to the exact
//! variants it was built from; under JSON equality it round-trips.

use crate::codec::RowCodec;
use crate::error::CodecError;
use crate::value::{Row, Value};
use bytes::Bytes;

/// A row codec writing one JSON object per record.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    pub fn new() -> Self {
        Self
    }
}

impl RowCodec for JsonCodec {
    fn encode_row(&mut self, row: &Row) -> Result<Bytes, CodecError> {
        let object: serde_json::Map<String, serde_json::Value> = row
            .iter()
            .map(|(name, value)| (name.clone(), value.to_json()))
            .collect();
        Ok(Bytes::from(serde_json::to_vec(&object)?))
    }

    fn decode_row(&mut self, buf: &[u8]) -> Result<Row, CodecError> {
        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(buf)?;
        Ok(object
            .iter()
            .map(|(name, value)| (name.clone(), Value::from_json(value)))
            .collect())
    }
}
