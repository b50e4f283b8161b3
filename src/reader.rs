//! Stream reassembly of slot frames.
//!
//! The link driver hands over received bytes in whatever chunks it happens to
//! produce - a frame may arrive split across several callbacks, or glued to
//! the tail of a corrupted one. [`FrameReader`] buffers the stream and scans
//! it for valid frames: as long as a full frame's worth of bytes is buffered,
//! the oldest candidate is validated and either dispatched and consumed whole,
//! or the read cursor slides forward a single byte to re-align on the next
//! possible frame start. Corruption therefore costs rescanning, never the
//! stream.
//!
//! Everything runs synchronously inside the receive callback, so handlers
//! must not block.

use crate::frame::{self, SlotType, FRAME_LENGTH};
use crate::ring::RingBuffer;
use crate::Error;

/// Receive buffer length used by the stock Tileio builds, enough for a burst
/// of 16 frames between reassembly passes.
pub const DEFAULT_RX_BUFFER_LENGTH: usize = 4096;

/// Receiver of decoded messages, invoked from within
/// [`FrameReader::process_bytes`].
///
/// Both methods default to no-ops, so an implementation only overrides the
/// updates it cares about; `()` is the handler that ignores everything.
pub trait SlotEventHandler {
    /// Called for every valid signal or metric frame
    fn on_slot_update(&mut self, slot: u8, slot_type: SlotType, payload: &[u8]) {
        let _ = (slot, slot_type, payload);
    }

    /// Called for every valid generic I/O state frame
    fn on_io_update(&mut self, payload: &[u8]) {
        let _ = payload;
    }
}

impl SlotEventHandler for () {}

/// Stateful reassembler turning a chunked byte stream into dispatched
/// [`frame::SlotMessage`]s. `C` is the receive buffer capacity and must hold
/// at least one frame.
pub struct FrameReader<const C: usize> {
    ring: RingBuffer<C>,
}

impl<const C: usize> FrameReader<C> {
    pub const fn new() -> Self {
        Self {
            ring: RingBuffer::new(),
        }
    }

    /// Bytes currently buffered and not yet consumed by frame extraction.
    pub fn buffered(&self) -> usize {
        self.ring.len()
    }

    /// Drops all buffered bytes, used at transport re-initialization.
    pub fn flush(&mut self) {
        self.ring.flush();
    }

    /// Feeds one received chunk and dispatches every frame that can be
    /// extracted, returning how many messages were dispatched.
    ///
    /// A chunk that does not fit into the remaining buffer space fails with
    /// [`Error::CapacityExceeded`] and is dropped whole; already buffered
    /// bytes are kept and stay decodable.
    pub fn process_bytes<H: SlotEventHandler>(
        &mut self,
        bytes: &[u8],
        handler: &mut H,
    ) -> Result<usize, Error> {
        self.ring.push(bytes)?;
        let mut dispatched = 0;
        let mut candidate = [0u8; FRAME_LENGTH];
        while self.ring.len() >= FRAME_LENGTH {
            self.ring.peek(&mut candidate)?;
            match frame::decode(&candidate) {
                Ok(message) => {
                    match message.slot_type {
                        SlotType::Signal | SlotType::Metric => {
                            handler.on_slot_update(message.slot, message.slot_type, message.payload)
                        }
                        SlotType::GenericIo => handler.on_io_update(message.payload),
                    }
                    self.ring.seek(FRAME_LENGTH)?;
                    dispatched += 1;
                }
                // resync: slide the search window forward one byte
                Err(_) => self.ring.seek(1)?,
            }
        }
        Ok(dispatched)
    }
}

impl<const C: usize> Default for FrameReader<C> {
    fn default() -> Self {
        Self::new()
    }
}
