//! Slot frame wire format.
//!
//! Every message travels in one fixed-size 256 B frame:
//!
//! ```ignore - field layout, not a test
//!   START: 1 byte      [0x55]
//!    SLOT: 1 byte      [0 - ch0, 1 - ch1, 2 - ch2, 3 - ch3]
//!   STYPE: 1 byte      [0 - signal, 1 - metric, 2 - generic I/O]
//!  LENGTH: 2 bytes     [0 - 248, little endian]
//!    DATA: 248 bytes   [zero padded beyond LENGTH]
//!     CRC: 2 bytes     [crc::checksum over LENGTH + declared DATA, little endian]
//!    STOP: 1 byte      [0xAA]
//! ```
use crate::crc;
use crate::Error;

pub const FRAME_LENGTH: usize = 256;
pub const MAX_PAYLOAD_LENGTH: usize = 248;
/// Generic I/O state frames always carry exactly this many payload bytes
pub const IO_STATE_LENGTH: usize = 8;

pub const FRAME_START: u8 = 0x55;
pub const FRAME_STOP: u8 = 0xAA;

const START_IDX: usize = 0;
const SLOT_IDX: usize = 1;
const TYPE_IDX: usize = 2;
const DLEN_IDX: usize = 3;
const DLEN_LEN: usize = 2;
const DATA_IDX: usize = 5;
const CRC_IDX: usize = 253;
const STOP_IDX: usize = 255;

/// One encoded frame as it goes over the wire
pub type RawFrame = [u8; FRAME_LENGTH];

/// Message category carried in the slot type field
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Debug))]
#[repr(u8)]
pub enum SlotType {
    Signal = 0,
    Metric = 1,
    GenericIo = 2,
}

impl TryFrom<u8> for SlotType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        match value {
            0 => Ok(SlotType::Signal),
            1 => Ok(SlotType::Metric),
            2 => Ok(SlotType::GenericIo),
            _ => Err(Error::InvalidFrame),
        }
    }
}

/// Decoded frame content, borrowing the declared-length payload out of the
/// frame buffer it was validated from. Padding bytes are never exposed.
#[derive(Clone, PartialEq, Eq)]
pub struct SlotMessage<'a> {
    /// Logical channel 0-3. Not validated here - fan-out is the handler's call.
    pub slot: u8,
    pub slot_type: SlotType,
    pub payload: &'a [u8],
}

#[cfg(feature = "std")]
impl<'a> core::fmt::Debug for SlotMessage<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "SlotMessage {{ slot: {}, slot_type: {:?}, payload: {:02x?} }}",
            self.slot, self.slot_type, self.payload
        )
    }
}

/// Why a candidate frame was rejected. Only used for diagnostics - callers
/// always see the coarse [`Error::InvalidFrame`].
#[cfg_attr(feature = "std", derive(Debug))]
pub(crate) enum InvalidReason {
    Markers,
    Checksum,
    DataLength,
    IoDataLength,
    UnknownSlotType,
}

/// Encodes one message into a freshly zeroed frame buffer, so the padding
/// beyond the declared length is deterministic.
pub fn encode(slot: u8, slot_type: SlotType, payload: &[u8]) -> Result<RawFrame, Error> {
    if payload.len() > MAX_PAYLOAD_LENGTH {
        return Err(Error::PayloadTooLarge);
    }
    let mut frame = [0u8; FRAME_LENGTH];
    frame[START_IDX] = FRAME_START;
    frame[SLOT_IDX] = slot;
    frame[TYPE_IDX] = slot_type as u8;
    frame[DLEN_IDX..DLEN_IDX + DLEN_LEN].copy_from_slice(&(payload.len() as u16).to_le_bytes());
    frame[DATA_IDX..DATA_IDX + payload.len()].copy_from_slice(payload);
    let crc = crc::checksum(&frame[DLEN_IDX..DATA_IDX + payload.len()]);
    frame[CRC_IDX..CRC_IDX + 2].copy_from_slice(&crc.to_le_bytes());
    frame[STOP_IDX] = FRAME_STOP;
    Ok(frame)
}

/// Validates one candidate frame and decodes it into a [`SlotMessage`].
///
/// All validation failures collapse into [`Error::InvalidFrame`]; the precise
/// reason is only reported through defmt when the `defmt-impl` feature is on.
pub fn decode(frame: &RawFrame) -> Result<SlotMessage<'_>, Error> {
    match validate(frame) {
        Ok(message) => Ok(message),
        Err(_reason) => {
            #[cfg(feature = "defmt-impl")]
            defmt::warn!("dropping invalid frame: {}", _reason);
            Err(Error::InvalidFrame)
        }
    }
}

fn validate(frame: &RawFrame) -> Result<SlotMessage<'_>, InvalidReason> {
    if frame[START_IDX] != FRAME_START || frame[STOP_IDX] != FRAME_STOP {
        return Err(InvalidReason::Markers);
    }
    let dlen = u16::from_le_bytes([frame[DLEN_IDX], frame[DLEN_IDX + 1]]) as usize;
    // bounds the checksummed region before slicing it
    if dlen > MAX_PAYLOAD_LENGTH {
        return Err(InvalidReason::DataLength);
    }
    let embedded = u16::from_le_bytes([frame[CRC_IDX], frame[CRC_IDX + 1]]);
    if crc::checksum(&frame[DLEN_IDX..DATA_IDX + dlen]) != embedded {
        return Err(InvalidReason::Checksum);
    }
    let slot_type =
        SlotType::try_from(frame[TYPE_IDX]).map_err(|_| InvalidReason::UnknownSlotType)?;
    if slot_type == SlotType::GenericIo && dlen != IO_STATE_LENGTH {
        return Err(InvalidReason::IoDataLength);
    }
    Ok(SlotMessage {
        slot: frame[SLOT_IDX],
        slot_type,
        payload: &frame[DATA_IDX..DATA_IDX + dlen],
    })
}
