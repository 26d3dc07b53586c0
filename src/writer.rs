//! Write side of a row log: header emission, row encoding, framing.

use crate::codec::{RowCodec, TypedCodec};
use crate::error::LogError;
use crate::frame;
use crate::schema::Schema;
use crate::value::Row;
use bytes::BytesMut;

/// Sequential writer producing a framed byte stream from rows.
///
/// On the first write only, if the codec carries a header protocol, the
/// schema is serialized and framed ahead of the row. The writer produces
/// bytes only when asked, so downstream backpressure is simply the
/// caller deferring the next [`write`](LogWriter::write).
#[derive(Debug)]
pub struct LogWriter<C> {
    codec: C,
    schema: Schema,
    wrote_header: bool,
    bytes_written: u64,
}

impl LogWriter<TypedCodec> {
    /// A writer using the default schema-typed codec.
    pub fn typed(schema: Schema) -> Self {
        Self::new(schema, TypedCodec::new())
    }
}

impl<C: RowCodec> LogWriter<C> {
    pub fn new(schema: Schema, codec: C) -> Self {
        Self {
            codec,
            schema,
            wrote_header: false,
            bytes_written: 0,
        }
    }

    /// Encodes and frames one row, returning the bytes to hand to the
    /// transport. The first call also emits the framed header record
    /// when the codec has one.
    pub fn write(&mut self, row: &Row) -> Result<BytesMut, LogError> {
        let mut out = BytesMut::new();
        if !self.wrote_header && self.codec.has_header() {
            let header = self.codec.serialize_header(&self.schema)?;
            let framed = frame::encode_frame(&header)?;
            tracing::debug!(
                bytes = framed.len(),
                fields = self.schema.fields().len(),
                "stream header written"
            );
            out.extend_from_slice(&framed);
        }
        let body = self.codec.encode_row(row)?;
        out.extend_from_slice(&frame::encode_frame(&body)?);
        // Marked only on success: a rejected first row must not swallow
        // the header, which has not reached the transport yet.
        self.wrote_header = true;
        self.bytes_written += out.len() as u64;
        Ok(out)
    }

    /// Cumulative framed bytes produced so far, header included.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::JsonCodec;
    use crate::schema::FieldType;
    use crate::value::Value;

    fn row(entries: &[(&str, Value)]) -> Row {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_header_written_exactly_once() {
        let schema = Schema::new().field("n", FieldType::Uint32);
        let mut writer = LogWriter::typed(schema);

        let first = writer.write(&row(&[("n", Value::Uint32(1))])).unwrap();
        let second = writer.write(&row(&[("n", Value::Uint32(2))])).unwrap();

        let mut first_frames = 0;
        frame::process_chunk(&first, |_| first_frames += 1).unwrap();
        assert_eq!(first_frames, 2); // header + row

        let mut second_frames = 0;
        frame::process_chunk(&second, |_| second_frames += 1).unwrap();
        assert_eq!(second_frames, 1);
    }

    #[test]
    fn test_bytes_written_accumulates() {
        let schema = Schema::new().field("n", FieldType::Uint32);
        let mut writer = LogWriter::typed(schema);
        assert_eq!(writer.bytes_written(), 0);

        let mut total = 0u64;
        for n in 0..5u32 {
            total += writer.write(&row(&[("n", Value::Uint32(n))])).unwrap().len() as u64;
        }
        assert_eq!(writer.bytes_written(), total);
    }

    #[test]
    fn test_headerless_writer_emits_no_header() {
        let mut writer = LogWriter::new(Schema::new(), JsonCodec::new());
        let out = writer.write(&row(&[("a", Value::Uint64(1))])).unwrap();

        let mut frames = 0;
        frame::process_chunk(&out, |_| frames += 1).unwrap();
        assert_eq!(frames, 1);
    }

    #[test]
    fn test_encode_error_does_not_count_bytes() {
        let schema = Schema::new().enum_field("state", ["only"]);
        let mut writer = LogWriter::typed(schema);

        let result = writer.write(&row(&[("state", Value::Str("other".into()))]));
        assert!(result.is_err());
        assert_eq!(writer.bytes_written(), 0);

        // The header still goes out with the next accepted row.
        let out = writer.write(&row(&[("state", Value::Str("only".into()))])).unwrap();
        let mut frames = 0;
        frame::process_chunk(&out, |_| frames += 1).unwrap();
        assert_eq!(frames, 2);
    }
}
