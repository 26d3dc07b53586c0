//! Read side of a row log: chunk ingestion, frame reassembly, row
//! emission.
//!
//! The reader makes no assumption about chunk size or alignment: frames
//! split across chunk boundaries are buffered and completed when later
//! bytes arrive. One chunk in, zero or more events out.

use crate::codec::{RowCodec, TypedCodec};
use crate::error::LogError;
use crate::frame;
use crate::value::Row;
use bytes::BytesMut;

/// Events emitted by [`LogReader::push`], in stream order.
#[derive(Debug, Clone, PartialEq)]
pub enum LogEvent {
    /// Emitted exactly once, after the stream's header (or lack of one)
    /// has been processed, carrying any recovered metadata.
    Ready {
        metadata: Option<serde_json::Value>,
    },
    /// One decoded row.
    Row(Row),
}

/// Incremental reader over an unbounded byte stream of framed records.
///
/// The reader learns its schema from the header record when the codec
/// carries one; it is never constructed from a schema directly.
#[derive(Debug)]
pub struct LogReader<C> {
    codec: C,
    buffer: BytesMut,
    started: bool,
    poisoned: bool,
}

impl LogReader<TypedCodec> {
    /// A reader using the default schema-typed codec.
    pub fn typed() -> Self {
        Self::new(TypedCodec::new())
    }
}

impl<C: RowCodec> LogReader<C> {
    pub fn new(codec: C) -> Self {
        Self {
            codec,
            buffer: BytesMut::new(),
            started: false,
            poisoned: false,
        }
    }

    /// Feeds one chunk of bytes, invoking `on_event` once per completed
    /// event in stream order.
    ///
    /// Events are delivered as they are recovered, so frames decoded
    /// before a fatal framing or decode error still reach the caller;
    /// nothing already delivered is retracted. The error poisons the
    /// reader and further pushes fail with [`LogError::Poisoned`].
    pub fn push<F>(&mut self, chunk: &[u8], mut on_event: F) -> Result<(), LogError>
    where
        F: FnMut(LogEvent),
    {
        if self.poisoned {
            return Err(LogError::Poisoned);
        }
        self.buffer.extend_from_slice(chunk);
        if let Err(err) = self.drain(&mut on_event) {
            self.poisoned = true;
            return Err(err);
        }
        tracing::trace!(
            chunk = chunk.len(),
            buffered = self.buffer.len(),
            "processed chunk"
        );
        Ok(())
    }

    fn drain<F>(&mut self, on_event: &mut F) -> Result<(), LogError>
    where
        F: FnMut(LogEvent),
    {
        while let Some(payload) = frame::decode_frame(&mut self.buffer)? {
            if !self.started {
                self.started = true;
                if self.codec.has_header() {
                    let metadata = self.codec.deserialize_header(&payload)?;
                    tracing::debug!(has_metadata = metadata.is_some(), "stream header decoded");
                    on_event(LogEvent::Ready { metadata });
                    continue;
                }
                // No header protocol: the first frame is already a row.
                on_event(LogEvent::Ready { metadata: None });
            }
            on_event(LogEvent::Row(self.codec.decode_row(&payload)?));
        }
        Ok(())
    }

    /// Bytes of unconsumed partial tail currently buffered.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the one-time ready event has been emitted.
    pub fn is_ready(&self) -> bool {
        self.started
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }
}
