use defmt::Formatter;

use crate::frame::{InvalidReason, SlotMessage, SlotType};
use crate::Error;

impl defmt::Format for Error {
    fn format(&self, fmt: Formatter<'_>) {
        match self {
            Error::PayloadTooLarge => defmt::write!(fmt, "Error::PayloadTooLarge"),
            Error::InvalidFrame => defmt::write!(fmt, "Error::InvalidFrame"),
            Error::LinkUnavailable => defmt::write!(fmt, "Error::LinkUnavailable"),
            Error::CapacityExceeded => defmt::write!(fmt, "Error::CapacityExceeded"),
            Error::LengthNotSufficient => defmt::write!(fmt, "Error::LengthNotSufficient"),
        }
    }
}

impl defmt::Format for SlotType {
    fn format(&self, fmt: Formatter<'_>) {
        match self {
            SlotType::Signal => defmt::write!(fmt, "Signal"),
            SlotType::Metric => defmt::write!(fmt, "Metric"),
            SlotType::GenericIo => defmt::write!(fmt, "GenericIo"),
        }
    }
}

impl<'a> defmt::Format for SlotMessage<'a> {
    fn format(&self, fmt: Formatter<'_>) {
        defmt::write!(
            fmt,
            "SlotMessage {{ slot: {=u8}, slot_type: {}, payload: {=[u8]:02x} }}",
            self.slot,
            self.slot_type,
            self.payload
        )
    }
}

impl defmt::Format for InvalidReason {
    fn format(&self, fmt: Formatter<'_>) {
        match self {
            InvalidReason::Markers => defmt::write!(fmt, "bad start/stop byte"),
            InvalidReason::Checksum => defmt::write!(fmt, "bad CRC"),
            InvalidReason::DataLength => defmt::write!(fmt, "bad data length"),
            InvalidReason::IoDataLength => defmt::write!(fmt, "bad data length for I/O state"),
            InvalidReason::UnknownSlotType => defmt::write!(fmt, "unknown slot type"),
        }
    }
}
