use std::env;

use tileio_serial::frame::{self, SlotType};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 4 {
        return Err("usage: output <slot 0-3> <slot type 0-2> <payload hex>".into());
    }

    let slot: u8 = args[1].parse()?;
    let slot_type = SlotType::try_from(args[2].parse::<u8>()?)
        .map_err(|_| format!("unknown slot type: {}", args[2]))?;

    let hex = args[3].trim_start_matches("0x").trim_start_matches("0X");
    if hex.len() > 2 * frame::MAX_PAYLOAD_LENGTH {
        return Err("payload too large".into());
    }
    let mut payload = [0u8; frame::MAX_PAYLOAD_LENGTH];
    let length = base16::decode_slice(hex.as_bytes(), &mut payload)
        .map_err(|e| format!("could not decode payload hex: {:?}", e))?;

    let encoded = frame::encode(slot, slot_type, &payload[..length])
        .map_err(|e| format!("could not encode frame: {:?}", e))?;

    println!(
        "slot: {}, slot_type: {:?}, payload: {:02x?}\nframe: {:02x?}",
        slot,
        slot_type,
        &payload[..length],
        &encoded[..]
    );
    Ok(())
}
