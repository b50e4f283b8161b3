//! Slot frame transport protocol used between a Tileio device and a host
//! connected over USB or BLE serial.
//!
//! The device exchanges fixed-size, CRC-protected frames carrying signal data,
//! metric data or generic I/O state for one of four logical slots. This crate
//! implements the wire format ([`frame`]), the checksum ([`crc`]), the receive
//! side that reassembles frames out of an arbitrarily chunked byte stream
//! ([`reader`]) and the transmit side ([`link`]). The underlying link (USB
//! vendor device, BLE characteristic, UART) only has to deliver raw bytes in
//! and accept raw bytes out.

#![cfg_attr(any(not(feature = "std"), not(test)), no_std)]

pub mod crc;
pub mod frame;
pub mod ident;
pub mod link;
pub mod reader;
pub mod ring;

// include defmt::Format implementations
// we don't want them derive()d in the modules unless defmt-impl feature is set
#[cfg(feature = "defmt-impl")]
pub mod defmt;

// reexport heapless
pub use heapless;

/// Errors produced by the transport layer.
///
/// Frame corruption ([`Error::InvalidFrame`]) is recovered internally by the
/// reader and never reaches application code; the remaining variants are
/// surfaced to callers.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Debug))]
pub enum Error {
    /// Payload does not fit into the data region of a single frame
    PayloadTooLarge,
    /// Candidate frame failed structural or checksum validation
    InvalidFrame,
    /// Link is not mounted or cannot take a full frame right now
    LinkUnavailable,
    /// Receive buffer cannot take the pushed chunk; the chunk is dropped whole
    CapacityExceeded,
    /// More bytes requested than currently buffered
    LengthNotSufficient,
}
