//! Variable-width length-prefix framing.
//!
//! Each record is a length prefix followed by exactly that many payload
//! bytes. The prefix width is chosen by payload size, and the width is
//! self-describing: the top 3 bits of the first byte are a tier tag.
//!
//! ```text
//! tier 0: payload < 2^5    1 byte    000xxxxx                 value = length
//! tier 1: payload < 2^13   2 bytes   001xxxxx xxxxxxxx (BE)   value = prefix - 2^13
//! tier 2: payload < 2^29   4 bytes   010xxxxx ... (BE)        value = prefix - 2*2^29
//! ```
//!
//! Tier tags 3-7 are invalid and indicate stream corruption.

use crate::error::FrameError;
use bytes::{Buf, BufMut, Bytes, BytesMut};

/// Payloads below this length take a 1-byte prefix.
pub const TIER0_LIMIT: usize = 1 << 5;

/// Payloads below this length take a 2-byte prefix.
pub const TIER1_LIMIT: usize = 1 << 13;

/// Payloads below this length take a 4-byte prefix; nothing larger fits.
pub const TIER2_LIMIT: usize = 1 << 29;

/// Largest payload representable by the widest prefix tier.
pub const MAX_PAYLOAD_SIZE: usize = TIER2_LIMIT - 1;

/// Computes the length prefix for a payload of `len` bytes.
///
/// Returns the prefix width and the prefix bytes (first `width` bytes of
/// the array are significant).
fn prefix_for(len: usize) -> Result<(usize, [u8; 4]), FrameError> {
    if len < TIER0_LIMIT {
        Ok((1, [len as u8, 0, 0, 0]))
    } else if len < TIER1_LIMIT {
        let raw = ((TIER1_LIMIT + len) as u16).to_be_bytes();
        Ok((2, [raw[0], raw[1], 0, 0]))
    } else if len < TIER2_LIMIT {
        Ok((4, ((2 * TIER2_LIMIT + len) as u32).to_be_bytes()))
    } else {
        Err(FrameError::PayloadTooLarge {
            size: len,
            max: MAX_PAYLOAD_SIZE,
        })
    }
}

/// Encodes a payload into a framed record (prefix + payload).
pub fn encode_frame(payload: &[u8]) -> Result<BytesMut, FrameError> {
    let (width, prefix) = prefix_for(payload.len())?;
    let mut buf = BytesMut::with_capacity(width + payload.len());
    buf.put_slice(&prefix[..width]);
    buf.put_slice(payload);
    Ok(buf)
}

/// Reads the length prefix at the head of `buf` without consuming it.
///
/// Returns `Ok(Some((prefix_width, payload_len)))` when a full prefix is
/// visible, `Ok(None)` when the prefix itself is split across a chunk
/// boundary, or `FrameError::CorruptTier` for an unrecognized tier tag.
fn peek_frame(buf: &[u8]) -> Result<Option<(usize, usize)>, FrameError> {
    let first = match buf.first() {
        Some(b) => *b,
        None => return Ok(None),
    };
    match first >> 5 {
        0 => Ok(Some((1, first as usize))),
        1 => {
            if buf.len() < 2 {
                return Ok(None);
            }
            let raw = u16::from_be_bytes([buf[0], buf[1]]) as usize;
            Ok(Some((2, raw - TIER1_LIMIT)))
        }
        2 => {
            if buf.len() < 4 {
                return Ok(None);
            }
            let raw = u32::from_be_bytes([buf[0], buf[1], buf[2], buf[3]]) as usize;
            Ok(Some((4, raw - 2 * TIER2_LIMIT)))
        }
        _ => Err(FrameError::CorruptTier { byte: first }),
    }
}

/// Scans `chunk` for as many complete frames as are present, invoking
/// `on_record` once per payload in stream order.
///
/// Returns the number of bytes fully consumed. A partially present
/// trailing frame is not an error: scanning stops before its prefix
/// (even when the prefix itself was readable) so the caller can retain
/// the unconsumed tail and re-feed it once more bytes arrive.
pub fn process_chunk<F>(chunk: &[u8], mut on_record: F) -> Result<usize, FrameError>
where
    F: FnMut(&[u8]),
{
    let mut consumed = 0;
    loop {
        let rest = &chunk[consumed..];
        let (width, len) = match peek_frame(rest)? {
            Some(parsed) => parsed,
            None => return Ok(consumed),
        };
        if rest.len() < width + len {
            return Ok(consumed);
        }
        on_record(&rest[width..width + len]);
        consumed += width + len;
    }
}

/// Attempts to decode one frame from the head of `buf`.
///
/// Returns `Ok(Some(payload))` and consumes prefix + payload when a
/// complete frame is present, `Ok(None)` without consuming anything when
/// more data is needed.
pub fn decode_frame(buf: &mut BytesMut) -> Result<Option<Bytes>, FrameError> {
    let (width, len) = match peek_frame(buf)? {
        Some(parsed) => parsed,
        None => return Ok(None),
    };
    if buf.len() < width + len {
        return Ok(None);
    }
    buf.advance(width);
    Ok(Some(buf.split_to(len).freeze()))
}
