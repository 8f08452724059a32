//! ArtDmx packet encoding (Art-Net 4).
//!
//! Art-Net carries DMX512 universes in UDP datagrams. Driving fixtures
//! only needs the OpDmx packet type.

use crate::channels::CHANNEL_COUNT;

/// Default Art-Net UDP port.
pub const PORT: u16 = 6454;

/// ArtDmx is a fixed 18 byte header followed by one full universe.
pub const PACKET_SIZE: usize = 18 + CHANNEL_COUNT;

const ID: &[u8; 8] = b"Art-Net\0";
const OP_DMX: u16 = 0x5000;
const PROTOCOL_VERSION: u16 = 14;

/// Encode one ArtDmx packet from a universe snapshot.
///
/// The sequence byte stays 0: frames go out as single bursts, so
/// receiver-side reordering protection has nothing to reorder.
pub fn encode_dmx(values: &[u8; CHANNEL_COUNT], physical: u8, universe: u8) -> [u8; PACKET_SIZE] {
    let mut packet = [0u8; PACKET_SIZE];

    packet[0..8].copy_from_slice(ID);
    packet[8..10].copy_from_slice(&OP_DMX.to_le_bytes());
    packet[10..12].copy_from_slice(&PROTOCOL_VERSION.to_be_bytes());
    packet[12] = 0; // sequence
    packet[13] = physical;
    packet[14] = universe;
    packet[15] = 0; // net
    packet[16..18].copy_from_slice(&(CHANNEL_COUNT as u16).to_be_bytes());
    packet[18..].copy_from_slice(values);

    packet
}
