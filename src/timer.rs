/// CORRIDOR Project
/// `File` timer.rs
/// `Description` Frame timer and fixed update step module
/// `Author` TioT2
/// `Last changed` 19.10.2026

use std::time::{Duration, Instant};

/// Timer representation structure
pub struct Timer {
    time_point: Instant,
    fps_time_point: Instant,
    fps: f32,
    fps_counter: u32,
    fps_duration: f32,

    /// Fixed update step
    time_step: Duration,
    /// Time not yet consumed by updates
    lag: Duration,
} // struct Timer

impl Timer {
    /// Timer constructor.
    /// * `time_step` - fixed update step
    /// * Returns newly created timer with count, starting from creation moment
    pub fn new(time_step: Duration) -> Self {
        let now = Instant::now();
        Self {
            time_point: now,
            fps_time_point: now,
            fps: 30.0,
            fps_counter: 0,
            fps_duration: 1.0,
            time_step: time_step.max(Duration::from_millis(1)),
            lag: Duration::ZERO,
        }
    } // fn new

    /// Timer duration update function. Call once per loop iteration.
    pub fn response(&mut self) {
        let now = Instant::now();

        self.accumulate(now - self.time_point);
        self.fps_counter += 1;

        let fps_duration = (now - self.fps_time_point).as_secs_f32();
        if fps_duration >= self.fps_duration {
            self.fps = self.fps_counter as f32 / fps_duration;
            self.fps_time_point = now;
            self.fps_counter = 0;
            log::trace!("fps: {}", self.fps);
        }

        self.time_point = now;
    } // fn response

    /// Elapsed time adding function
    pub fn accumulate(&mut self, elapsed: Duration) {
        self.lag += elapsed;
    } // fn accumulate

    /// Fixed step consuming function
    /// * Returns true if one more update step should run
    pub fn next_update(&mut self) -> bool {
        if self.lag >= self.time_step {
            self.lag -= self.time_step;
            true
        } else {
            false
        }
    } // fn next_update
} // impl Timer


// file timer.rs
