//! Primitive record engine: a dynamic, id-keyed wire encoding for flat
//! typed records.
//!
//! Uses the protobuf wire format: each present field is written as a
//! varint key `(field_id << 3) | wire_type` followed by its value.
//! Repeated scalars are written unpacked (one key per element); the
//! decoder additionally accepts packed repeated scalars. Unknown field
//! ids are skipped by wire type, so a decoder with a narrower schema
//! still reads records written under a wider one.
//!
//! This layer knows nothing about composite field types, adapters, or
//! headers; the schema-typed codec sits on top of it.

use crate::error::CodecError;
use crate::value::{Row, Value};
use bytes::{Buf, BufMut, BytesMut};
use std::collections::btree_map::Entry;

const WIRE_VARINT: u8 = 0;
const WIRE_BITS64: u8 = 1;
const WIRE_LEN: u8 = 2;
const WIRE_BITS32: u8 = 5;

/// Primitive wire types supported by the record engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    Double,
    Float,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Bool,
    String,
}

impl ScalarType {
    fn wire_type(&self) -> u8 {
        match self {
            ScalarType::Double => WIRE_BITS64,
            ScalarType::Float => WIRE_BITS32,
            ScalarType::String => WIRE_LEN,
            _ => WIRE_VARINT,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ScalarType::Double => "double",
            ScalarType::Float => "float",
            ScalarType::Int32 => "int32",
            ScalarType::Uint32 => "uint32",
            ScalarType::Int64 => "int64",
            ScalarType::Uint64 => "uint64",
            ScalarType::Bool => "bool",
            ScalarType::String => "string",
        }
    }
}

/// One field of a wire schema.
#[derive(Debug, Clone)]
pub struct WireField {
    pub id: u32,
    pub name: String,
    pub scalar: ScalarType,
    pub repeated: bool,
}

/// The primitive-typed, id-keyed field layout consumed by the engine.
///
/// Field ids are the only identifier used on the wire; names exist so
/// encoded rows can be keyed by field name.
#[derive(Debug, Clone, Default)]
pub struct WireSchema {
    fields: Vec<WireField>,
}

impl WireSchema {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn push(&mut self, field: WireField) {
        self.fields.push(field);
    }

    pub fn fields(&self) -> &[WireField] {
        &self.fields
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    fn by_id(&self, id: u32) -> Option<&WireField> {
        self.fields.iter().find(|f| f.id == id)
    }
}

/// Encodes a row against a wire schema.
///
/// Fields are written in schema order; fields absent from the row are
/// skipped (sparse rows are valid). Fields present in the row but not in
/// the schema are ignored here; declaration checks belong to the layer
/// above.
pub fn encode_record(schema: &WireSchema, row: &Row) -> Result<BytesMut, CodecError> {
    let mut buf = BytesMut::new();
    for field in &schema.fields {
        let value = match row.get(&field.name) {
            Some(value) => value,
            None => continue,
        };
        if field.repeated {
            let items = match value {
                Value::Array(items) => items,
                _ => return Err(mismatch(field, "array")),
            };
            for item in items {
                put_value(&mut buf, field, item)?;
            }
        } else {
            if matches!(value, Value::Array(_)) {
                return Err(mismatch(field, field.scalar.name()));
            }
            put_value(&mut buf, field, value)?;
        }
    }
    Ok(buf)
}

/// Decodes a record into a row keyed by field name.
pub fn decode_record(schema: &WireSchema, mut buf: &[u8]) -> Result<Row, CodecError> {
    let mut row = Row::new();
    while buf.has_remaining() {
        let key = get_varint(&mut buf)?;
        let wire = (key & 7) as u8;
        let id = (key >> 3) as u32;
        let field = match schema.by_id(id) {
            Some(field) => field,
            None => {
                skip_value(&mut buf, wire)?;
                continue;
            }
        };
        if field.repeated && wire == WIRE_LEN && field.scalar.wire_type() != WIRE_LEN {
            // Packed repeated scalars.
            let len = get_varint(&mut buf)? as usize;
            if buf.remaining() < len {
                return Err(CodecError::Truncated);
            }
            let mut packed = &buf[..len];
            buf.advance(len);
            while packed.has_remaining() {
                let item = get_value(&mut packed, field.scalar, field.scalar.wire_type())?;
                push_repeated(&mut row, field, item);
            }
            continue;
        }
        let value = get_value(&mut buf, field.scalar, wire)?;
        if field.repeated {
            push_repeated(&mut row, field, value);
        } else {
            // Last occurrence wins for non-repeated fields.
            row.insert(field.name.clone(), value);
        }
    }
    Ok(row)
}

fn push_repeated(row: &mut Row, field: &WireField, value: Value) {
    match row.entry(field.name.clone()) {
        Entry::Vacant(slot) => {
            slot.insert(Value::Array(vec![value]));
        }
        Entry::Occupied(mut slot) => {
            if let Value::Array(items) = slot.get_mut() {
                items.push(value);
            }
        }
    }
}

fn mismatch(field: &WireField, expected: &'static str) -> CodecError {
    CodecError::TypeMismatch {
        field: field.name.clone(),
        expected,
    }
}

fn put_value(buf: &mut BytesMut, field: &WireField, value: &Value) -> Result<(), CodecError> {
    let key = (u64::from(field.id) << 3) | u64::from(field.scalar.wire_type());
    match (field.scalar, value) {
        (ScalarType::Double, Value::Double(v)) => {
            put_varint(buf, key);
            buf.put_f64_le(*v);
        }
        (ScalarType::Float, Value::Float(v)) => {
            put_varint(buf, key);
            buf.put_f32_le(*v);
        }
        (ScalarType::Int32, Value::Int32(v)) => {
            put_varint(buf, key);
            // Negative int32 is sign-extended to a 64-bit varint.
            put_varint(buf, i64::from(*v) as u64);
        }
        (ScalarType::Uint32, Value::Uint32(v)) => {
            put_varint(buf, key);
            put_varint(buf, u64::from(*v));
        }
        (ScalarType::Int64, Value::Int64(v)) => {
            put_varint(buf, key);
            put_varint(buf, *v as u64);
        }
        (ScalarType::Uint64, Value::Uint64(v)) => {
            put_varint(buf, key);
            put_varint(buf, *v);
        }
        (ScalarType::Bool, Value::Bool(v)) => {
            put_varint(buf, key);
            put_varint(buf, u64::from(*v));
        }
        (ScalarType::String, Value::Str(v)) => {
            put_varint(buf, key);
            put_varint(buf, v.len() as u64);
            buf.put_slice(v.as_bytes());
        }
        _ => return Err(mismatch(field, field.scalar.name())),
    }
    Ok(())
}

fn get_value(buf: &mut &[u8], scalar: ScalarType, wire: u8) -> Result<Value, CodecError> {
    if wire != scalar.wire_type() {
        return Err(CodecError::InvalidWireType(wire));
    }
    match scalar {
        ScalarType::Double => {
            if buf.remaining() < 8 {
                return Err(CodecError::Truncated);
            }
            Ok(Value::Double(buf.get_f64_le()))
        }
        ScalarType::Float => {
            if buf.remaining() < 4 {
                return Err(CodecError::Truncated);
            }
            Ok(Value::Float(buf.get_f32_le()))
        }
        ScalarType::Int32 => Ok(Value::Int32(get_varint(buf)? as i64 as i32)),
        ScalarType::Uint32 => Ok(Value::Uint32(get_varint(buf)? as u32)),
        ScalarType::Int64 => Ok(Value::Int64(get_varint(buf)? as i64)),
        ScalarType::Uint64 => Ok(Value::Uint64(get_varint(buf)?)),
        ScalarType::Bool => Ok(Value::Bool(get_varint(buf)? != 0)),
        ScalarType::String => {
            let len = get_varint(buf)? as usize;
            if buf.remaining() < len {
                return Err(CodecError::Truncated);
            }
            let text = std::str::from_utf8(&buf[..len])
                .map_err(|_| CodecError::InvalidUtf8)?
                .to_string();
            buf.advance(len);
            Ok(Value::Str(text))
        }
    }
}

fn skip_value(buf: &mut &[u8], wire: u8) -> Result<(), CodecError> {
    match wire {
        WIRE_VARINT => {
            get_varint(buf)?;
        }
        WIRE_BITS64 => {
            if buf.remaining() < 8 {
                return Err(CodecError::Truncated);
            }
            buf.advance(8);
        }
        WIRE_LEN => {
            let len = get_varint(buf)? as usize;
            if buf.remaining() < len {
                return Err(CodecError::Truncated);
            }
            buf.advance(len);
        }
        WIRE_BITS32 => {
            if buf.remaining() < 4 {
                return Err(CodecError::Truncated);
            }
            buf.advance(4);
        }
        other => return Err(CodecError::InvalidWireType(other)),
    }
    Ok(())
}

fn put_varint(buf: &mut BytesMut, mut value: u64) {
    while value >= 0x80 {
        buf.put_u8((value as u8) | 0x80);
        value >>= 7;
    }
    buf.put_u8(value as u8);
}

fn get_varint(buf: &mut &[u8]) -> Result<u64, CodecError> {
    let mut value = 0u64;
    let mut shift = 0u32;
    loop {
        if !buf.has_remaining() {
            return Err(CodecError::Truncated);
        }
        if shift >= 64 {
            return Err(CodecError::MalformedVarint);
        }
        let byte = buf.get_u8();
        value |= u64::from(byte & 0x7F) << shift;
        if byte & 0x80 == 0 {
            return Ok(value);
        }
        shift += 7;
    }
}
