//! Animated metric counters for the landing page.
//!
//! The ramp is a pure function of the step index, and the trigger takes the
//! viewport visibility as an injected boolean, so neither needs a rendering
//! surface to test.

use std::time::Duration;

use serde::Serialize;

/// Fraction of the metrics section that must be on screen to count as visible.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Final value of the satisfaction counter (percent).
pub const SATISFACTION_TARGET: u32 = 100;

/// Final value of the productivity counter (multiplier).
pub const PRODUCTIVITY_TARGET: u32 = 10;

/// Whether an intersection ratio counts as visible.
#[must_use]
pub fn is_visible(intersection_ratio: f64) -> bool {
    intersection_ratio >= VISIBILITY_THRESHOLD
}

/// Counter values shown at one step of the ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricFrame {
    pub step: u32,
    pub satisfaction: u32,
    pub productivity: u32,
}

/// A linear ramp from zero to each target over a fixed number of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricRamp {
    duration: Duration,
    steps: u32,
}

impl Default for MetricRamp {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(2000),
            steps: 60,
        }
    }
}

impl MetricRamp {
    /// Build a ramp; `steps` is clamped to at least one.
    #[must_use]
    pub fn new(duration: Duration, steps: u32) -> Self {
        Self {
            duration,
            steps: steps.max(1),
        }
    }

    #[must_use]
    pub const fn steps(&self) -> u32 {
        self.steps
    }

    /// Time between two consecutive steps.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.duration / self.steps
    }

    /// `floor(target * step / steps)`, holding at `target` once the ramp ends.
    #[must_use]
    pub fn value_at(&self, step: u32, target: u32) -> u32 {
        let step = u64::from(step.min(self.steps));
        let value = u64::from(target) * step / u64::from(self.steps);
        u32::try_from(value).unwrap_or(target)
    }

    /// Step reached after `elapsed` time since the ramp started.
    #[must_use]
    pub fn step_after(&self, elapsed: Duration) -> u32 {
        let tick = self.tick_interval().as_nanos().max(1);
        let step = elapsed.as_nanos() / tick;
        u32::try_from(step).unwrap_or(u32::MAX).min(self.steps)
    }

    #[must_use]
    pub fn is_complete(&self, step: u32) -> bool {
        step >= self.steps
    }

    #[must_use]
    pub fn frame(&self, step: u32) -> MetricFrame {
        MetricFrame {
            step: step.min(self.steps),
            satisfaction: self.value_at(step, SATISFACTION_TARGET),
            productivity: self.value_at(step, PRODUCTIVITY_TARGET),
        }
    }

    /// Every frame from step 1 through the final step.
    pub fn frames(&self) -> impl Iterator<Item = MetricFrame> + '_ {
        (1..=self.steps).map(|step| self.frame(step))
    }
}

/// Starts the ramp the first time the section becomes visible, and never again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterTrigger {
    fired: bool,
}

impl CounterTrigger {
    /// Feed one visibility observation. Returns `true` exactly once: on the
    /// first observation where `visible` is set.
    pub const fn observe(&mut self, visible: bool) -> bool {
        if self.fired || !visible {
            return false;
        }
        self.fired = true;
        true
    }

    #[must_use]
    pub const fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ramp_timing() {
        let ramp = MetricRamp::default();
        assert_eq!(ramp.steps(), 60);
        assert_eq!(ramp.tick_interval(), Duration::from_nanos(33_333_333));
    }

    #[test]
    fn values_floor_along_the_ramp() {
        let ramp = MetricRamp::default();
        assert_eq!(ramp.frame(0).satisfaction, 0);
        assert_eq!(ramp.frame(1).satisfaction, 1);
        assert_eq!(ramp.frame(5).productivity, 0);
        assert_eq!(ramp.frame(6).productivity, 1);
        assert_eq!(ramp.frame(30).satisfaction, 50);
        assert_eq!(ramp.frame(59).satisfaction, 98);
    }

    #[test]
    fn ramp_ends_exactly_on_target_and_holds() {
        let ramp = MetricRamp::default();
        let last = ramp.frames().last().unwrap();
        assert_eq!(last.satisfaction, SATISFACTION_TARGET);
        assert_eq!(last.productivity, PRODUCTIVITY_TARGET);
        assert_eq!(ramp.frame(500), last);
        assert!(ramp.is_complete(60));
    }

    #[test]
    fn frames_are_monotonic() {
        let frames: Vec<_> = MetricRamp::default().frames().collect();
        assert_eq!(frames.len(), 60);
        assert!(frames.windows(2).all(|w| w[0].satisfaction <= w[1].satisfaction));
        assert!(frames.windows(2).all(|w| w[0].productivity <= w[1].productivity));
    }

    #[test]
    fn step_after_elapsed_time() {
        let ramp = MetricRamp::new(Duration::from_millis(1000), 10);
        assert_eq!(ramp.step_after(Duration::ZERO), 0);
        assert_eq!(ramp.step_after(Duration::from_millis(250)), 2);
        assert_eq!(ramp.step_after(Duration::from_secs(5)), 10);
    }

    #[test]
    fn zero_steps_is_clamped() {
        let ramp = MetricRamp::new(Duration::from_millis(100), 0);
        assert_eq!(ramp.steps(), 1);
        assert_eq!(ramp.value_at(1, 10), 10);
    }

    #[test]
    fn trigger_fires_once_on_first_visibility() {
        let mut trigger = CounterTrigger::default();
        assert!(!trigger.observe(false));
        assert!(trigger.observe(true));
        assert!(!trigger.observe(true));
        assert!(!trigger.observe(false));
        assert!(trigger.has_fired());
    }

    #[test]
    fn visibility_threshold_is_half() {
        assert!(!is_visible(0.49));
        assert!(is_visible(0.5));
    }
}
