//! Declared field types, attributes, and the row schema.

use crate::error::CodecError;
use crate::wire::ScalarType;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Type tag of a declared field.
///
/// Primitive tags map 1:1 onto wire types; `*Arr` variants set the
/// repeated wire modifier; `Enum`/`Object` (and their array variants)
/// are composite types bridged onto primitives by per-field adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Double,
    Float,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Bool,
    String,
    DoubleArr,
    FloatArr,
    Int32Arr,
    Uint32Arr,
    Int64Arr,
    Uint64Arr,
    BoolArr,
    StringArr,
    Enum,
    EnumArr,
    Object,
    ObjectArr,
}

impl FieldType {
    /// The wire tag string, as carried in header records.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Double => "double",
            FieldType::Float => "float",
            FieldType::Int32 => "int32",
            FieldType::Uint32 => "uint32",
            FieldType::Int64 => "int64",
            FieldType::Uint64 => "uint64",
            FieldType::Bool => "bool",
            FieldType::String => "string",
            FieldType::DoubleArr => "double_arr",
            FieldType::FloatArr => "float_arr",
            FieldType::Int32Arr => "int32_arr",
            FieldType::Uint32Arr => "uint32_arr",
            FieldType::Int64Arr => "int64_arr",
            FieldType::Uint64Arr => "uint64_arr",
            FieldType::BoolArr => "bool_arr",
            FieldType::StringArr => "string_arr",
            FieldType::Enum => "enum",
            FieldType::EnumArr => "enum_arr",
            FieldType::Object => "object",
            FieldType::ObjectArr => "object_arr",
        }
    }

    /// Whether values of this type are repeated on the wire.
    pub fn is_array(&self) -> bool {
        matches!(
            self,
            FieldType::DoubleArr
                | FieldType::FloatArr
                | FieldType::Int32Arr
                | FieldType::Uint32Arr
                | FieldType::Int64Arr
                | FieldType::Uint64Arr
                | FieldType::BoolArr
                | FieldType::StringArr
                | FieldType::EnumArr
                | FieldType::ObjectArr
        )
    }

    /// The primitive wire type this tag encodes as.
    pub fn scalar(&self) -> ScalarType {
        match self {
            FieldType::Double | FieldType::DoubleArr => ScalarType::Double,
            FieldType::Float | FieldType::FloatArr => ScalarType::Float,
            FieldType::Int32 | FieldType::Int32Arr => ScalarType::Int32,
            FieldType::Uint32 | FieldType::Uint32Arr => ScalarType::Uint32,
            FieldType::Int64 | FieldType::Int64Arr => ScalarType::Int64,
            FieldType::Uint64 | FieldType::Uint64Arr => ScalarType::Uint64,
            FieldType::Bool | FieldType::BoolArr => ScalarType::Bool,
            FieldType::String | FieldType::StringArr => ScalarType::String,
            // Enums wire as their index, objects as serialized text.
            FieldType::Enum | FieldType::EnumArr => ScalarType::Int32,
            FieldType::Object | FieldType::ObjectArr => ScalarType::String,
        }
    }

    /// Whether a type adapter bridges this tag onto its wire type.
    pub fn needs_adapter(&self) -> bool {
        matches!(
            self,
            FieldType::Enum | FieldType::EnumArr | FieldType::Object | FieldType::ObjectArr
        )
    }
}

impl FromStr for FieldType {
    type Err = CodecError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "double" => Ok(FieldType::Double),
            "float" => Ok(FieldType::Float),
            "int32" => Ok(FieldType::Int32),
            "uint32" => Ok(FieldType::Uint32),
            "int64" => Ok(FieldType::Int64),
            "uint64" => Ok(FieldType::Uint64),
            "bool" => Ok(FieldType::Bool),
            "string" => Ok(FieldType::String),
            "double_arr" => Ok(FieldType::DoubleArr),
            "float_arr" => Ok(FieldType::FloatArr),
            "int32_arr" => Ok(FieldType::Int32Arr),
            "uint32_arr" => Ok(FieldType::Uint32Arr),
            "int64_arr" => Ok(FieldType::Int64Arr),
            "uint64_arr" => Ok(FieldType::Uint64Arr),
            "bool_arr" => Ok(FieldType::BoolArr),
            "string_arr" => Ok(FieldType::StringArr),
            "enum" => Ok(FieldType::Enum),
            "enum_arr" => Ok(FieldType::EnumArr),
            "object" => Ok(FieldType::Object),
            "object_arr" => Ok(FieldType::ObjectArr),
            other => Err(CodecError::UnknownFieldType(other.to_string())),
        }
    }
}

/// Type-specific field configuration.
///
/// `enum_values` carries the declared symbol list for `enum`/`enum_arr`
/// fields; any other keys round-trip verbatim through the header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldAttrs {
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl FieldAttrs {
    /// Attributes declaring an enumerated value list.
    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enum_values: Some(values.into_iter().map(Into::into).collect()),
            extra: serde_json::Map::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.enum_values.is_none() && self.extra.is_empty()
    }
}

/// One declared field: name, type tag, optional attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub field_type: FieldType,
    pub attrs: Option<FieldAttrs>,
}

/// An ordered field declaration list plus optional free-form metadata.
///
/// Field ids are not stored here: they are assigned sequentially from 1
/// in declaration order when the schema is serialized into a header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: Vec<FieldSpec>,
    metadata: Option<serde_json::Value>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field declaration.
    pub fn field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.fields.push(FieldSpec {
            name: name.into(),
            field_type,
            attrs: None,
        });
        self
    }

    /// Appends a field declaration with attributes.
    pub fn field_with_attrs(
        mut self,
        name: impl Into<String>,
        field_type: FieldType,
        attrs: FieldAttrs,
    ) -> Self {
        self.fields.push(FieldSpec {
            name: name.into(),
            field_type,
            attrs: Some(attrs),
        });
        self
    }

    /// Appends an `enum` field with its declared value list.
    pub fn enum_field<I, S>(self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field_with_attrs(name, FieldType::Enum, FieldAttrs::enumeration(values))
    }

    /// Attaches free-form metadata, round-tripped verbatim through the
    /// header record.
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn metadata(&self) -> Option<&serde_json::Value> {
        self.metadata.as_ref()
    }
}
