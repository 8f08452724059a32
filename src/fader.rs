use crate::channels::CHANNEL_COUNT;

/// Refresh rate all fades run at, in frames per second.
pub const FRAME_RATE: u32 = 30;

/// One fade in flight: an immutable snapshot of the state it started
/// from, the destination state and the wall clock duration.
///
/// The interpolation is pure math, kept apart from the frame timer so
/// it can be stepped (and tested) without sleeping.
pub struct Fade {
    start: [u8; CHANNEL_COUNT],
    destination: [u8; CHANNEL_COUNT],
    duration_secs: f32,
}

impl Fade {
    pub fn new(
        start: [u8; CHANNEL_COUNT],
        destination: [u8; CHANNEL_COUNT],
        duration_secs: f32,
    ) -> Fade {
        Fade {
            start,
            destination,
            duration_secs,
        }
    }

    /// Frames needed to cover the duration at [`FRAME_RATE`]. Always at
    /// least one, so frame 0 (the unchanged start state) gets shown.
    pub fn frame_count(&self) -> u32 {
        (self.duration_secs * FRAME_RATE as f32).floor() as u32 + 1
    }

    /// Channel state for frame `index`.
    ///
    /// Frame 0 reproduces the start state exactly; the final frame may
    /// stop just short of the destination when the duration is not a
    /// whole number of frames.
    pub fn frame(&self, index: u32) -> [u8; CHANNEL_COUNT] {
        let progress = index as f32 / FRAME_RATE as f32 / self.duration_secs;

        let mut values = [0u8; CHANNEL_COUNT];
        for (slot, value) in values.iter_mut().enumerate() {
            let from = self.start[slot] as f32;
            let to = self.destination[slot] as f32;
            *value = (from * (1.0 - progress) + to * progress).round() as u8;
        }

        values
    }
}
