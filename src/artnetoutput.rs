use std::net::{SocketAddr, UdpSocket};
use std::str::FromStr;

use palette::Srgb;

use crate::artnet;
use crate::channels::{ChannelBuffer, CHANNEL_COUNT};
use crate::color;
use crate::error::Result;
use crate::fader::{Fade, FRAME_RATE};
use crate::intervaltimer::IntervalTimer;

/// Drives one Art-Net universe: owns the socket, the target node
/// address and the live channel state.
///
/// Single writer, no locking. A running fade blocks its caller, and
/// nothing else may touch the buffer until it returns.
pub struct ArtNetOutput {
    sock: UdpSocket,
    target_addr: SocketAddr,
    buffer: ChannelBuffer,
    universe: u8,
    physical: u8,
}

impl ArtNetOutput {
    pub fn new(target_addr: SocketAddr, universe: u8, physical: u8) -> Result<ArtNetOutput> {
        let our_addr = SocketAddr::from_str("0.0.0.0:0").unwrap();
        let sock = UdpSocket::bind(our_addr)?;
        log::info!("Sending universe {} to {}", universe, target_addr);

        Ok(ArtNetOutput::from_socket(
            sock,
            target_addr,
            universe,
            physical,
        ))
    }

    /// Build on an existing socket. Lets tests substitute a loopback
    /// socket for the one `new` binds.
    pub fn from_socket(
        sock: UdpSocket,
        target_addr: SocketAddr,
        universe: u8,
        physical: u8,
    ) -> ArtNetOutput {
        ArtNetOutput {
            sock,
            target_addr,
            buffer: ChannelBuffer::new(),
            universe,
            physical,
        }
    }

    pub fn set(&mut self, channel: u16, value: u8) -> Result<()> {
        self.buffer.set(channel, value)
    }

    /// Gamma corrected RGB write to three consecutive channels.
    pub fn set_rgb(&mut self, start_channel: u16, color: Srgb<u8>) -> Result<()> {
        color::write_rgb(&mut self.buffer, start_channel, color)
    }

    /// Parse a hex color, normalize it to full brightness and write it
    /// to three consecutive channels.
    pub fn set_hex(&mut self, start_channel: u16, hex: &str) -> Result<()> {
        color::write_hex(&mut self.buffer, start_channel, hex)
    }

    pub fn snapshot(&self) -> [u8; CHANNEL_COUNT] {
        self.buffer.snapshot()
    }

    /// Encode the live buffer and send it as one ArtDmx datagram. Fire
    /// and forget: the node does not acknowledge, nothing is retried.
    pub fn flush(&self) -> Result<()> {
        let packet = artnet::encode_dmx(self.buffer.values(), self.physical, self.universe);
        self.sock.send_to(&packet, self.target_addr)?;
        Ok(())
    }

    /// Zero the whole universe and push it out.
    pub fn blackout(&mut self) -> Result<()> {
        self.buffer.clear();
        self.flush()
    }

    /// Blocking linear fade from the current state to `destination`,
    /// interpolating and transmitting at the DMX frame rate. Returns
    /// once the last frame has been sent; there is no cancellation.
    ///
    /// A zero duration jumps straight to the destination instead of
    /// dividing by zero in the progress formula.
    pub fn fade(&mut self, destination: [u8; CHANNEL_COUNT], duration_secs: f32) -> Result<()> {
        if duration_secs <= 0.0 {
            self.buffer.load(destination);
            return self.flush();
        }

        let fade = Fade::new(self.buffer.snapshot(), destination, duration_secs);
        let mut timer = IntervalTimer::new(FRAME_RATE as f32, false);
        for index in 0..fade.frame_count() {
            self.buffer.load(fade.frame(index));
            self.flush()?;
            timer.sleep_until_next_tick();
        }

        Ok(())
    }
}
