//! Transmit path.
//!
//! The actual link (USB vendor device, BLE characteristic, UART) lives
//! outside this crate and is abstracted as a [`FrameSink`]. Sending never
//! blocks or retries: if the link is down or short on write buffer space the
//! send fails with [`Error::LinkUnavailable`] and the caller decides when to
//! try again.

use crate::frame::{self, RawFrame, SlotType};
use crate::Error;

/// Slot id carried by outgoing generic I/O state frames
pub const IO_STATE_SLOT: u8 = 0;

/// Byte sink supplied by the link collaborator.
pub trait FrameSink {
    /// Whether the link is mounted and can take one full frame without
    /// blocking.
    fn can_transmit(&self) -> bool;

    /// Writes one full frame in a single call. Partial writes are not a
    /// modeled failure mode at this layer.
    fn transmit(&mut self, frame: &RawFrame) -> Result<(), Error>;
}

/// Encodes one message and hands it to the link.
pub fn send_slot_data<L: FrameSink>(
    link: &mut L,
    slot: u8,
    slot_type: SlotType,
    payload: &[u8],
) -> Result<(), Error> {
    let frame = frame::encode(slot, slot_type, payload)?;
    if !link.can_transmit() {
        return Err(Error::LinkUnavailable);
    }
    link.transmit(&frame)
}

/// Sends the shared generic I/O state, expected to be
/// [`frame::IO_STATE_LENGTH`] bytes.
pub fn send_io_state<L: FrameSink>(link: &mut L, payload: &[u8]) -> Result<(), Error> {
    send_slot_data(link, IO_STATE_SLOT, SlotType::GenericIo, payload)
}
