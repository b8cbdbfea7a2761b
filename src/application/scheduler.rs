//! Host-driven tasks with an explicit start/stop lifecycle.
//!
//! The frame loop feeds elapsed time in; tasks only decide whether work is
//! due. Stopping a task is the only cancellation there is.

/// Most ticks an interval task reports for a single frame
pub const MAX_CATCH_UP_TICKS: u32 = 5;

/// Fires every `interval` seconds of accumulated frame time
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalTask {
    interval: f32,
    accumulator: f32,
    running: bool,
}

impl IntervalTask {
    /// New stopped task; `interval_ms` is clamped to at least 1 ms
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval: interval_ms.max(1) as f32 / 1000.0,
            accumulator: 0.0,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop and forget any partially accumulated interval
    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Interval in seconds
    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Feed frame time and return how many ticks are due
    pub fn advance(&mut self, delta_time: f32) -> u32 {
        if !self.running {
            return 0;
        }

        self.accumulator += delta_time.max(0.0);
        let due = (self.accumulator / self.interval) as u32;
        if due > MAX_CATCH_UP_TICKS {
            // a long stall (window drag, breakpoint) should not fast-forward
            self.accumulator = 0.0;
            return MAX_CATCH_UP_TICKS;
        }
        self.accumulator -= due as f32 * self.interval;
        due
    }
}

/// Fires once per rendered frame while running
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameTask {
    running: bool,
}

impl FrameTask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether this frame should do work
    pub fn advance(&mut self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_task_never_fires() {
        let mut task = IntervalTask::new(200);
        assert_eq!(task.advance(10.0), 0);
    }

    #[test]
    fn test_fires_on_interval_and_keeps_remainder() {
        let mut task = IntervalTask::new(200);
        task.start();
        assert_eq!(task.advance(0.15), 0);
        assert_eq!(task.advance(0.1), 1);
        // 0.05 carried over
        assert_eq!(task.advance(0.16), 1);
        assert_eq!(task.advance(0.4), 2);
    }

    #[test]
    fn test_catch_up_is_capped() {
        let mut task = IntervalTask::new(100);
        task.start();
        assert_eq!(task.advance(60.0), MAX_CATCH_UP_TICKS);
        assert_eq!(task.advance(0.05), 0);
    }

    #[test]
    fn test_stop_clears_accumulator() {
        let mut task = IntervalTask::new(200);
        task.start();
        task.advance(0.19);
        task.stop();
        task.start();
        assert_eq!(task.advance(0.02), 0);
        assert!(task.is_running());
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let task = IntervalTask::new(0);
        assert_eq!(task.interval(), 0.001);
    }

    #[test]
    fn test_frame_task_lifecycle() {
        let mut task = FrameTask::new();
        assert!(!task.advance());
        task.start();
        assert!(task.advance());
        task.stop();
        assert!(!task.is_running());
    }
}
