//! Frame pacing
//!
//! The loop runs one simulation tick per frame; the limiter sleeps until the
//! next frame boundary. If a frame overruns, the schedule restarts from now
//! instead of trying to catch up.

use std::time::{Duration, Instant};

/// Sleep-based fixed-rate limiter
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    period: Duration,
    next: Instant,
}

impl FrameLimiter {
    pub fn new(rate_hz: u32) -> Self {
        let period = Duration::from_secs(1) / rate_hz.max(1);
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Block until the next frame boundary
    pub fn wait(&mut self) {
        let now = Instant::now();
        if now < self.next {
            std::thread::sleep(self.next - now);
            self.next += self.period;
        } else {
            self.next = now + self.period;
        }
    }
}

/// Rolling frame-rate estimate over the last 60 frames
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [Option<Instant>; 60],
    frame_index: usize,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            frame_times: [None; 60],
            frame_index: 0,
            fps: 0,
        }
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame finishing at `time`
    pub fn record(&mut self, time: Instant) {
        self.frame_times[self.frame_index] = Some(time);
        self.frame_index = (self.frame_index + 1) % self.frame_times.len();

        // Oldest slot is the one we will overwrite next
        if let Some(oldest) = self.frame_times[self.frame_index] {
            let elapsed = time.duration_since(oldest).as_secs_f64();
            if elapsed > 0.0 {
                let frames = (self.frame_times.len() - 1) as f64;
                self.fps = (frames / elapsed).round() as u32;
            }
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limiter_period() {
        let limiter = FrameLimiter::new(60);
        assert_eq!(limiter.period(), Duration::from_secs(1) / 60);
    }

    #[test]
    fn test_limiter_waits_roughly_one_period() {
        let mut limiter = FrameLimiter::new(100);
        let start = Instant::now();
        limiter.wait();
        limiter.wait();
        assert!(start.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn test_fps_counter_steady_rate() {
        let mut fps = FpsCounter::new();
        let start = Instant::now();
        for i in 0..120u32 {
            fps.record(start + Duration::from_millis(10) * i);
        }
        assert_eq!(fps.fps(), 100);
    }

    #[test]
    fn test_fps_counter_needs_full_window() {
        let mut fps = FpsCounter::new();
        let start = Instant::now();
        for i in 0..10u32 {
            fps.record(start + Duration::from_millis(16) * i);
        }
        assert_eq!(fps.fps(), 0);
    }
}
