use std::thread;
use std::time::{Duration, Instant};

/// Paces a loop at a fixed frame rate. Sleeps the remainder of each
/// frame; when a frame overruns its slot the cadence is reset instead
/// of trying to catch up.
pub struct IntervalTimer {
    interval: Duration,
    last_tick: Instant,
    measure_fps: bool,
    last_fps_report: Instant,
    frames: u32,
}

impl IntervalTimer {
    pub fn new(freq_hz: f32, measure_fps: bool) -> IntervalTimer {
        let frame_duration_microsec = 1000.0 / freq_hz * 1000.0;

        IntervalTimer {
            interval: Duration::from_micros(frame_duration_microsec as u64),
            last_tick: Instant::now(),
            measure_fps,
            last_fps_report: Instant::now(),
            frames: 0,
        }
    }

    pub fn sleep_until_next_tick(&mut self) {
        if self.measure_fps {
            self.update_fps();
        }

        let next_tick = if self.last_tick + self.interval > Instant::now() {
            self.last_tick + self.interval
        } else {
            log::warn!("Frame deadline missed, resetting cadence");
            Instant::now() + self.interval
        };

        thread::sleep(next_tick.saturating_duration_since(Instant::now()));
        self.last_tick = next_tick
    }

    fn update_fps(&mut self) {
        self.frames += 1;

        if Instant::now() - self.last_fps_report > Duration::from_secs(1) {
            log::debug!("{} FPS", self.frames);
            self.frames = 0;
            self.last_fps_report = Instant::now();
        }
    }
}
