//! # rowlog
//!
//! An append-oriented row log: a stream of length-prefixed records with
//! a pluggable per-record encoding layer that maps structured rows to
//! and from bytes via a declared schema.
//!
//! This crate provides:
//! - Variable-width length-prefix framing that survives arbitrary chunk
//!   fragmentation ([`frame`])
//! - A pluggable row codec contract ([`RowCodec`]) with a schema-typed
//!   default ([`TypedCodec`]) and a header-less JSON alternative
//!   ([`JsonCodec`])
//! - Stream orchestration: [`LogWriter`] emits the schema header once
//!   and frames each row; [`LogReader`] reassembles frames from
//!   arbitrarily split chunks and emits decoded rows in order
//!
//! Transports, random access, indexing, and multi-writer coordination
//! are out of scope: the output is a plain byte stream to pipe wherever
//! bytes go.
//!
//! ```
//! use rowlog::{FieldType, LogEvent, LogReader, LogWriter, Schema, Value};
//!
//! let schema = Schema::new()
//!     .field("seq", FieldType::Uint32)
//!     .enum_field("state", ["new", "done"]);
//! let mut writer = LogWriter::typed(schema);
//!
//! let mut row = rowlog::Row::new();
//! row.insert("seq".to_string(), Value::Uint32(1));
//! row.insert("state".to_string(), Value::Str("new".to_string()));
//! let bytes = writer.write(&row).unwrap();
//!
//! let mut reader = LogReader::typed();
//! let mut events = Vec::new();
//! reader.push(&bytes, |e| events.push(e)).unwrap();
//! assert!(matches!(events[0], LogEvent::Ready { .. }));
//! assert_eq!(events[1], LogEvent::Row(row));
//! ```

pub mod codec;
pub mod error;
pub mod frame;
pub mod reader;
pub mod schema;
pub mod value;
pub mod wire;
pub mod writer;

pub use codec::{JsonCodec, RowCodec, TypedCodec};
pub use error::{CodecError, FrameError, LogError};
pub use frame::{decode_frame, encode_frame, process_chunk, MAX_PAYLOAD_SIZE};
pub use reader::{LogEvent, LogReader};
pub use schema::{FieldAttrs, FieldSpec, FieldType, Schema};
pub use value::{Row, Value};
pub use writer::LogWriter;

/// Version of the header record written by the default codec.
pub use codec::typed::HEADER_VERSION;
