//! The default schema-typed row codec.
//!
//! Serializes the declared schema as the stream's header record, builds
//! the wire schema the primitive record engine consumes, and bridges
//! composite field types (`enum`, `object`, and their array variants)
//! onto primitive wire types with per-field adapters.

use crate::codec::RowCodec;
use crate::error::CodecError;
use crate::schema::{FieldAttrs, FieldType, Schema};
use crate::value::{Row, Value};
use crate::wire::{self, ScalarType, WireField, WireSchema};
use bytes::Bytes;
use std::collections::HashSet;

/// Header record version written by this codec.
pub const HEADER_VERSION: u32 = 1;

/// Fixed field ids of the header record. Part of the wire contract.
mod header_ids {
    pub const VERSION: u32 = 1;
    pub const PROPERTY_NAMES: u32 = 2;
    pub const PROPERTY_TYPES: u32 = 3;
    pub const PROPERTY_IDS: u32 = 4;
    pub const PROPERTY_ATTRS: u32 = 5;
    pub const METADATA: u32 = 9;
}

fn header_schema() -> WireSchema {
    let mut schema = WireSchema::new();
    let fields = [
        (header_ids::VERSION, "version", ScalarType::Uint32, false),
        (
            header_ids::PROPERTY_NAMES,
            "property_names",
            ScalarType::String,
            true,
        ),
        (
            header_ids::PROPERTY_TYPES,
            "property_types",
            ScalarType::String,
            true,
        ),
        (
            header_ids::PROPERTY_IDS,
            "property_ids",
            ScalarType::Uint32,
            true,
        ),
        (
            header_ids::PROPERTY_ATTRS,
            "property_attrs",
            ScalarType::String,
            true,
        ),
        (header_ids::METADATA, "metadata", ScalarType::String, false),
    ];
    for (id, name, scalar, repeated) in fields {
        schema.push(WireField {
            id,
            name: name.to_string(),
            scalar,
            repeated,
        });
    }
    schema
}

/// A pure, order-independent transform bridging one composite field onto
/// its primitive wire representation. Applied to a row copy before wire
/// encoding and after wire decoding; a no-op for rows that do not set
/// the field.
#[derive(Debug, Clone)]
enum Adapter {
    Enum { field: String, values: Vec<String> },
    EnumArr { field: String, values: Vec<String> },
    Object { field: String },
    ObjectArr { field: String },
}

impl Adapter {
    fn for_field(
        name: &str,
        field_type: FieldType,
        attrs: Option<&FieldAttrs>,
    ) -> Result<Option<Adapter>, CodecError> {
        match field_type {
            FieldType::Enum | FieldType::EnumArr => {
                let values = attrs
                    .and_then(|a| a.enum_values.clone())
                    .filter(|v| !v.is_empty())
                    .ok_or_else(|| CodecError::InvalidEnumConfig {
                        field: name.to_string(),
                    })?;
                Ok(Some(if field_type == FieldType::Enum {
                    Adapter::Enum {
                        field: name.to_string(),
                        values,
                    }
                } else {
                    Adapter::EnumArr {
                        field: name.to_string(),
                        values,
                    }
                }))
            }
            FieldType::Object => Ok(Some(Adapter::Object {
                field: name.to_string(),
            })),
            FieldType::ObjectArr => Ok(Some(Adapter::ObjectArr {
                field: name.to_string(),
            })),
            _ => Ok(None),
        }
    }

    fn field(&self) -> &str {
        match self {
            Adapter::Enum { field, .. }
            | Adapter::EnumArr { field, .. }
            | Adapter::Object { field }
            | Adapter::ObjectArr { field } => field,
        }
    }

    fn encode(&self, row: &mut Row) -> Result<(), CodecError> {
        self.apply(row, true)
    }

    fn decode(&self, row: &mut Row) -> Result<(), CodecError> {
        self.apply(row, false)
    }

    fn apply(&self, row: &mut Row, encoding: bool) -> Result<(), CodecError> {
        let value = match row.get(self.field()) {
            Some(value) => value,
            None => return Ok(()),
        };
        let replaced = match self {
            Adapter::Enum { field, values } => {
                if encoding {
                    enum_to_index(field, values, value)?
                } else {
                    index_to_enum(field, values, value)?
                }
            }
            Adapter::EnumArr { field, values } => map_array(field, value, |item| {
                if encoding {
                    enum_to_index(field, values, item)
                } else {
                    index_to_enum(field, values, item)
                }
            })?,
            Adapter::Object { field } => {
                if encoding {
                    object_to_text(field, value)?
                } else {
                    text_to_object(field, value)?
                }
            }
            Adapter::ObjectArr { field } => map_array(field, value, |item| {
                if encoding {
                    object_to_text(field, item)
                } else {
                    text_to_object(field, item)
                }
            })?,
        };
        row.insert(self.field().to_string(), replaced);
        Ok(())
    }
}

fn map_array<F>(field: &str, value: &Value, mut map: F) -> Result<Value, CodecError>
where
    F: FnMut(&Value) -> Result<Value, CodecError>,
{
    let items = match value {
        Value::Array(items) => items,
        _ => {
            return Err(CodecError::TypeMismatch {
                field: field.to_string(),
                expected: "array",
            })
        }
    };
    Ok(Value::Array(
        items.iter().map(|item| map(item)).collect::<Result<_, _>>()?,
    ))
}

fn enum_to_index(field: &str, values: &[String], value: &Value) -> Result<Value, CodecError> {
    let symbol = match value {
        Value::Str(symbol) => symbol,
        _ => {
            return Err(CodecError::TypeMismatch {
                field: field.to_string(),
                expected: "enum symbol string",
            })
        }
    };
    match values.iter().position(|v| v == symbol) {
        Some(index) => Ok(Value::Int32(index as i32)),
        None => Err(CodecError::UndeclaredEnumValue {
            field: field.to_string(),
            value: symbol.clone(),
        }),
    }
}

fn index_to_enum(field: &str, values: &[String], value: &Value) -> Result<Value, CodecError> {
    let index = match value {
        Value::Int32(index) => *index,
        _ => {
            return Err(CodecError::TypeMismatch {
                field: field.to_string(),
                expected: "enum index",
            })
        }
    };
    usize::try_from(index)
        .ok()
        .and_then(|i| values.get(i))
        .map(|symbol| Value::Str(symbol.clone()))
        .ok_or_else(|| CodecError::EnumIndexOutOfRange {
            field: field.to_string(),
            index,
        })
}

fn object_to_text(field: &str, value: &Value) -> Result<Value, CodecError> {
    match value {
        Value::Json(json) => Ok(Value::Str(serde_json::to_string(json)?)),
        _ => Err(CodecError::TypeMismatch {
            field: field.to_string(),
            expected: "json object value",
        }),
    }
}

fn text_to_object(field: &str, value: &Value) -> Result<Value, CodecError> {
    match value {
        Value::Str(text) => Ok(Value::Json(serde_json::from_str(text)?)),
        _ => Err(CodecError::TypeMismatch {
            field: field.to_string(),
            expected: "serialized object string",
        }),
    }
}

/// The default row codec: schema-typed, header-carrying.
#[derive(Debug, Default)]
pub struct TypedCodec {
    wire: Option<WireSchema>,
    adapters: Vec<Adapter>,
    metadata: Option<serde_json::Value>,
}

impl TypedCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata recovered from (or written into) the header, if any.
    pub fn metadata(&self) -> Option<&serde_json::Value> {
        self.metadata.as_ref()
    }

    fn wire(&self) -> Result<&WireSchema, CodecError> {
        self.wire.as_ref().ok_or(CodecError::SchemaNotReady)
    }
}

impl RowCodec for TypedCodec {
    fn has_header(&self) -> bool {
        true
    }

    fn serialize_header(&mut self, schema: &Schema) -> Result<Bytes, CodecError> {
        let mut wire = WireSchema::new();
        let mut adapters = Vec::new();
        let mut names = Vec::new();
        let mut types = Vec::new();
        let mut ids = Vec::new();
        let mut attr_blobs = Vec::new();
        let mut seen = HashSet::new();

        for (index, spec) in schema.fields().iter().enumerate() {
            // Ids start at 1 and follow declaration order; they are the
            // only identifier used on the wire.
            let id = index as u32 + 1;
            if !seen.insert(spec.name.as_str()) {
                return Err(CodecError::DuplicateField(spec.name.clone()));
            }
            wire.push(WireField {
                id,
                name: spec.name.clone(),
                scalar: spec.field_type.scalar(),
                repeated: spec.field_type.is_array(),
            });
            names.push(Value::Str(spec.name.clone()));
            types.push(Value::Str(spec.field_type.as_str().to_string()));
            ids.push(Value::Uint32(id));
            attr_blobs.push(Value::Str(match &spec.attrs {
                Some(attrs) => serde_json::to_string(attrs)?,
                None => String::new(),
            }));
            if let Some(adapter) =
                Adapter::for_field(&spec.name, spec.field_type, spec.attrs.as_ref())?
            {
                adapters.push(adapter);
            }
        }

        let mut header = Row::new();
        header.insert("version".to_string(), Value::Uint32(HEADER_VERSION));
        header.insert("property_names".to_string(), Value::Array(names));
        header.insert("property_types".to_string(), Value::Array(types));
        header.insert("property_ids".to_string(), Value::Array(ids));
        header.insert("property_attrs".to_string(), Value::Array(attr_blobs));
        if let Some(metadata) = schema.metadata() {
            header.insert(
                "metadata".to_string(),
                Value::Str(serde_json::to_string(metadata)?),
            );
            self.metadata = Some(metadata.clone());
        }

        let buf = wire::encode_record(&header_schema(), &header)?;
        self.wire = Some(wire);
        self.adapters = adapters;
        Ok(buf.freeze())
    }

    fn deserialize_header(&mut self, buf: &[u8]) -> Result<Option<serde_json::Value>, CodecError> {
        let header = wire::decode_record(&header_schema(), buf)?;

        match header.get("version") {
            Some(Value::Uint32(HEADER_VERSION)) => {}
            Some(Value::Uint32(other)) => {
                return Err(CodecError::UnsupportedHeaderVersion(*other))
            }
            _ => {
                return Err(CodecError::MalformedHeader(
                    "missing version field".to_string(),
                ))
            }
        }

        let names = str_column(&header, "property_names")?;
        let types = str_column(&header, "property_types")?;
        let ids = id_column(&header)?;
        let attr_blobs = str_column(&header, "property_attrs")?;
        if names.len() != types.len() || names.len() != ids.len() || names.len() != attr_blobs.len()
        {
            return Err(CodecError::MalformedHeader(
                "property columns have mismatched lengths".to_string(),
            ));
        }

        let mut wire = WireSchema::new();
        let mut adapters = Vec::new();
        let mut seen_names = HashSet::new();
        let mut seen_ids = HashSet::new();
        for (((name, tag), id), blob) in names
            .into_iter()
            .zip(types)
            .zip(ids)
            .zip(attr_blobs)
        {
            // A crafted header could alias fields; hold it to the same
            // uniqueness rules the write side enforces.
            if !seen_names.insert(name.clone()) {
                return Err(CodecError::DuplicateField(name));
            }
            if !seen_ids.insert(id) {
                return Err(CodecError::MalformedHeader(format!(
                    "duplicate field id: {id}"
                )));
            }
            let field_type: FieldType = tag.parse()?;
            let attrs: Option<FieldAttrs> = if blob.is_empty() {
                None
            } else {
                Some(serde_json::from_str(&blob)?)
            };
            wire.push(WireField {
                id,
                name: name.clone(),
                scalar: field_type.scalar(),
                repeated: field_type.is_array(),
            });
            if let Some(adapter) = Adapter::for_field(&name, field_type, attrs.as_ref())? {
                adapters.push(adapter);
            }
        }

        let metadata = match header.get("metadata") {
            Some(Value::Str(text)) => Some(serde_json::from_str(text)?),
            _ => None,
        };
        self.wire = Some(wire);
        self.adapters = adapters;
        self.metadata = metadata.clone();
        Ok(metadata)
    }

    fn encode_row(&mut self, row: &Row) -> Result<Bytes, CodecError> {
        let wire_schema = self.wire()?;
        for name in row.keys() {
            if !wire_schema.contains(name) {
                return Err(CodecError::UndeclaredField(name.clone()));
            }
        }
        let mut adapted = row.clone();
        for adapter in &self.adapters {
            adapter.encode(&mut adapted)?;
        }
        Ok(wire::encode_record(wire_schema, &adapted)?.freeze())
    }

    fn decode_row(&mut self, buf: &[u8]) -> Result<Row, CodecError> {
        let mut row = wire::decode_record(self.wire()?, buf)?;
        for adapter in &self.adapters {
            adapter.decode(&mut row)?;
        }
        Ok(row)
    }
}

fn str_column(header: &Row, name: &str) -> Result<Vec<String>, CodecError> {
    match header.get(name) {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Str(text) => Ok(text.clone()),
                _ => Err(CodecError::MalformedHeader(format!(
                    "{name} contains a non-string element"
                ))),
            })
            .collect(),
        Some(_) => Err(CodecError::MalformedHeader(format!(
            "{name} is not an array"
        ))),
    }
}

fn id_column(header: &Row) -> Result<Vec<u32>, CodecError> {
    match header.get("property_ids") {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Uint32(id) => Ok(*id),
                _ => Err(CodecError::MalformedHeader(
                    "property_ids contains a non-integer element".to_string(),
                )),
            })
            .collect(),
        Some(_) => Err(CodecError::MalformedHeader(
            "property_ids is not an array".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_schema() -> Schema {
        Schema::new()
            .field("count", FieldType::Uint32)
            .field("ratio", FieldType::Double)
            .field("label", FieldType::String)
            .field("flags", FieldType::BoolArr)
            .enum_field("state", ["new", "active", "done"])
            .field_with_attrs(
                "tags",
                FieldType::EnumArr,
                FieldAttrs::enumeration(["red", "green", "blue"]),
            )
            .field("extra", FieldType::Object)
            .field("points", FieldType::ObjectArr)
    }

    fn sample_row() -> Row {
        let mut row = Row::new();
        row.insert("count".into(), Value::Uint32(7));
        row.insert("ratio".into(), Value::Double(0.25));
        row.insert("label".into(), Value::Str("first".into()));
        row.insert(
            "flags".into(),
            Value::Array(vec![Value::Bool(true), Value::Bool(false)]),
        );
        row.insert("state".into(), Value::Str("active".into()));
        row.insert(
            "tags".into(),
            Value::Array(vec![Value::Str("blue".into()), Value::Str("red".into())]),
        );
        row.insert("extra".into(), Value::Json(json!({"nested": [1, 2, 3]})));
        row.insert(
            "points".into(),
            Value::Array(vec![
                Value::Json(json!({"x": 1})),
                Value::Json(json!({"x": 2})),
            ]),
        );
        row
    }

    #[test]
    fn test_row_roundtrip_through_header() {
        let mut writer = TypedCodec::new();
        let header = writer
            .serialize_header(&sample_schema().with_metadata(json!({"v": 1})))
            .unwrap();

        let mut reader = TypedCodec::new();
        let metadata = reader.deserialize_header(&header).unwrap();
        assert_eq!(metadata, Some(json!({"v": 1})));

        let row = sample_row();
        let encoded = writer.encode_row(&row).unwrap();
        let decoded = reader.decode_row(&encoded).unwrap();
        assert_eq!(decoded, row);
    }

    #[test]
    fn test_header_roundtrip_without_metadata() {
        let mut writer = TypedCodec::new();
        let header = writer.serialize_header(&sample_schema()).unwrap();

        let mut reader = TypedCodec::new();
        assert_eq!(reader.deserialize_header(&header).unwrap(), None);
        assert!(reader.metadata().is_none());
    }

    #[test]
    fn test_enum_fidelity() {
        let schema = Schema::new().enum_field("state", ["open", "closed"]);
        let mut codec = TypedCodec::new();
        codec.serialize_header(&schema).unwrap();

        let mut row = Row::new();
        row.insert("state".into(), Value::Str("closed".into()));
        let encoded = codec.encode_row(&row).unwrap();
        let decoded = codec.decode_row(&encoded).unwrap();
        assert_eq!(decoded.get("state"), Some(&Value::Str("closed".into())));
    }

    #[test]
    fn test_undeclared_enum_value() {
        let schema = Schema::new().enum_field("state", ["open", "closed"]);
        let mut codec = TypedCodec::new();
        codec.serialize_header(&schema).unwrap();

        let mut row = Row::new();
        row.insert("state".into(), Value::Str("ajar".into()));
        let result = codec.encode_row(&row);
        assert!(matches!(
            result,
            Err(CodecError::UndeclaredEnumValue { .. })
        ));
    }

    #[test]
    fn test_enum_index_out_of_range() {
        let schema = Schema::new().enum_field("state", ["only"]);
        let mut codec = TypedCodec::new();
        codec.serialize_header(&schema).unwrap();

        // Wire-encode an index the declared list cannot resolve.
        let mut raw = WireSchema::new();
        raw.push(WireField {
            id: 1,
            name: "state".to_string(),
            scalar: ScalarType::Int32,
            repeated: false,
        });
        let mut row = Row::new();
        row.insert("state".into(), Value::Int32(5));
        let buf = wire::encode_record(&raw, &row).unwrap();

        let result = codec.decode_row(&buf);
        assert!(matches!(
            result,
            Err(CodecError::EnumIndexOutOfRange { index: 5, .. })
        ));
    }

    #[test]
    fn test_sparse_row_skips_adapters() {
        let schema = Schema::new()
            .field("n", FieldType::Uint32)
            .enum_field("state", ["a", "b"]);
        let mut codec = TypedCodec::new();
        codec.serialize_header(&schema).unwrap();

        let mut row = Row::new();
        row.insert("n".into(), Value::Uint32(1));
        let encoded = codec.encode_row(&row).unwrap();
        let decoded = codec.decode_row(&encoded).unwrap();
        assert_eq!(decoded, row);
    }

    #[test]
    fn test_undeclared_field_rejected() {
        let schema = Schema::new().field("n", FieldType::Uint32);
        let mut codec = TypedCodec::new();
        codec.serialize_header(&schema).unwrap();

        let mut row = Row::new();
        row.insert("other".into(), Value::Uint32(1));
        let result = codec.encode_row(&row);
        assert!(matches!(result, Err(CodecError::UndeclaredField(_))));
    }

    #[test]
    fn test_schema_not_ready() {
        let mut codec = TypedCodec::new();
        let result = codec.encode_row(&Row::new());
        assert!(matches!(result, Err(CodecError::SchemaNotReady)));
        let result = codec.decode_row(&[]);
        assert!(matches!(result, Err(CodecError::SchemaNotReady)));
    }

    #[test]
    fn test_enum_without_values_fails_serialize() {
        let schema = Schema::new().field("state", FieldType::Enum);
        let mut codec = TypedCodec::new();
        let result = codec.serialize_header(&schema);
        assert!(matches!(result, Err(CodecError::InvalidEnumConfig { .. })));
    }

    #[test]
    fn test_enum_without_values_fails_deserialize() {
        let mut header = Row::new();
        header.insert("version".into(), Value::Uint32(HEADER_VERSION));
        header.insert(
            "property_names".into(),
            Value::Array(vec![Value::Str("state".into())]),
        );
        header.insert(
            "property_types".into(),
            Value::Array(vec![Value::Str("enum".into())]),
        );
        header.insert("property_ids".into(), Value::Array(vec![Value::Uint32(1)]));
        header.insert(
            "property_attrs".into(),
            Value::Array(vec![Value::Str(String::new())]),
        );
        let buf = wire::encode_record(&header_schema(), &header).unwrap();

        let mut codec = TypedCodec::new();
        let result = codec.deserialize_header(&buf);
        assert!(matches!(result, Err(CodecError::InvalidEnumConfig { .. })));
    }

    #[test]
    fn test_unknown_field_type_in_header() {
        let mut header = Row::new();
        header.insert("version".into(), Value::Uint32(HEADER_VERSION));
        header.insert(
            "property_names".into(),
            Value::Array(vec![Value::Str("x".into())]),
        );
        header.insert(
            "property_types".into(),
            Value::Array(vec![Value::Str("decimal128".into())]),
        );
        header.insert("property_ids".into(), Value::Array(vec![Value::Uint32(1)]));
        header.insert(
            "property_attrs".into(),
            Value::Array(vec![Value::Str(String::new())]),
        );
        let buf = wire::encode_record(&header_schema(), &header).unwrap();

        let mut codec = TypedCodec::new();
        let result = codec.deserialize_header(&buf);
        assert!(matches!(result, Err(CodecError::UnknownFieldType(_))));
    }

    #[test]
    fn test_unsupported_header_version() {
        let mut header = Row::new();
        header.insert("version".into(), Value::Uint32(99));
        let buf = wire::encode_record(&header_schema(), &header).unwrap();

        let mut codec = TypedCodec::new();
        let result = codec.deserialize_header(&buf);
        assert!(matches!(
            result,
            Err(CodecError::UnsupportedHeaderVersion(99))
        ));
    }

    #[test]
    fn test_duplicate_names_in_header_rejected() {
        let mut header = Row::new();
        header.insert("version".into(), Value::Uint32(HEADER_VERSION));
        header.insert(
            "property_names".into(),
            Value::Array(vec![Value::Str("x".into()), Value::Str("x".into())]),
        );
        header.insert(
            "property_types".into(),
            Value::Array(vec![
                Value::Str("uint32".into()),
                Value::Str("string".into()),
            ]),
        );
        header.insert(
            "property_ids".into(),
            Value::Array(vec![Value::Uint32(1), Value::Uint32(2)]),
        );
        header.insert(
            "property_attrs".into(),
            Value::Array(vec![Value::Str(String::new()), Value::Str(String::new())]),
        );
        let buf = wire::encode_record(&header_schema(), &header).unwrap();

        let mut codec = TypedCodec::new();
        let result = codec.deserialize_header(&buf);
        assert!(matches!(result, Err(CodecError::DuplicateField(_))));
    }

    #[test]
    fn test_duplicate_ids_in_header_rejected() {
        let mut header = Row::new();
        header.insert("version".into(), Value::Uint32(HEADER_VERSION));
        header.insert(
            "property_names".into(),
            Value::Array(vec![Value::Str("a".into()), Value::Str("b".into())]),
        );
        header.insert(
            "property_types".into(),
            Value::Array(vec![
                Value::Str("uint32".into()),
                Value::Str("uint32".into()),
            ]),
        );
        header.insert(
            "property_ids".into(),
            Value::Array(vec![Value::Uint32(1), Value::Uint32(1)]),
        );
        header.insert(
            "property_attrs".into(),
            Value::Array(vec![Value::Str(String::new()), Value::Str(String::new())]),
        );
        let buf = wire::encode_record(&header_schema(), &header).unwrap();

        let mut codec = TypedCodec::new();
        let result = codec.deserialize_header(&buf);
        assert!(matches!(result, Err(CodecError::MalformedHeader(_))));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let schema = Schema::new()
            .field("n", FieldType::Uint32)
            .field("n", FieldType::String);
        let mut codec = TypedCodec::new();
        let result = codec.serialize_header(&schema);
        assert!(matches!(result, Err(CodecError::DuplicateField(_))));
    }

    #[test]
    fn test_attrs_blob_roundtrips_extra_keys() {
        let mut attrs = FieldAttrs::enumeration(["a", "b"]);
        attrs
            .extra
            .insert("doc".to_string(), json!("state of the thing"));
        let schema = Schema::new().field_with_attrs("state", FieldType::Enum, attrs.clone());

        let mut writer = TypedCodec::new();
        let header = writer.serialize_header(&schema).unwrap();

        // The reader sees the same attribute blob the writer declared.
        let decoded = wire::decode_record(&header_schema(), &header).unwrap();
        let blobs = str_column(&decoded, "property_attrs").unwrap();
        let parsed: FieldAttrs = serde_json::from_str(&blobs[0]).unwrap();
        assert_eq!(parsed, attrs);
    }

    #[test]
    fn test_field_ids_sequential_from_one() {
        let mut codec = TypedCodec::new();
        let header = codec
            .serialize_header(
                &Schema::new()
                    .field("a", FieldType::Uint32)
                    .field("b", FieldType::String)
                    .field("c", FieldType::Bool),
            )
            .unwrap();

        let decoded = wire::decode_record(&header_schema(), &header).unwrap();
        let ids = id_column(&decoded).unwrap();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
