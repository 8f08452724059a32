use crate::error::{Error, Result};

/// Number of channels in one DMX universe.
pub const CHANNEL_COUNT: usize = 512;

/// One universe worth of channel state.
///
/// DMX addresses channels 1..=512; slot 0 of the backing array is
/// channel 1.
pub struct ChannelBuffer {
    values: [u8; CHANNEL_COUNT],
}

impl ChannelBuffer {
    pub fn new() -> ChannelBuffer {
        ChannelBuffer {
            values: [0; CHANNEL_COUNT],
        }
    }

    fn slot(channel: u16) -> Result<usize> {
        if channel < 1 || channel as usize > CHANNEL_COUNT {
            return Err(Error::ChannelOutOfRange(channel));
        }

        Ok(channel as usize - 1)
    }

    pub fn set(&mut self, channel: u16, value: u8) -> Result<()> {
        self.values[Self::slot(channel)?] = value;
        Ok(())
    }

    /// Independent copy of the current state. Fades interpolate from a
    /// snapshot so later writes to the live buffer cannot shift their
    /// starting point.
    pub fn snapshot(&self) -> [u8; CHANNEL_COUNT] {
        self.values
    }

    pub fn values(&self) -> &[u8; CHANNEL_COUNT] {
        &self.values
    }

    /// Replace the whole universe at once.
    pub fn load(&mut self, values: [u8; CHANNEL_COUNT]) {
        self.values = values;
    }

    pub fn clear(&mut self) {
        self.values = [0; CHANNEL_COUNT];
    }
}
