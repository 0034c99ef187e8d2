//! Fixed timestep accumulator
//!
//! Real elapsed time is banked in an accumulator and spent in constant
//! `step`-sized chunks, so physics never sees a variable delta. Leftover
//! time carries to the next frame.

use super::state::{Outcome, World};
use super::tick::{TickInput, apply_input, tick};

/// What happened during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Fixed sub-steps run this frame
    pub steps: u32,
    /// Set if a sub-step this frame ended the run
    pub outcome: Option<Outcome>,
}

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: f32,
    accumulator: f32,
    last_tick: f64,
}

impl FixedTimestep {
    /// Clock starting at time zero
    pub fn new(step: f32) -> Self {
        Self::starting_at(step, 0.0)
    }

    pub fn starting_at(step: f32, now: f64) -> Self {
        debug_assert!(step > 0.0);
        Self {
            step,
            accumulator: 0.0,
            last_tick: now,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Unconsumed time, always in `[0, step)` between frames
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Bank the time elapsed since the previous frame
    fn accumulate(&mut self, now: f64) {
        let mut elapsed = (now - self.last_tick) as f32;
        self.last_tick = now;
        if elapsed < 0.0 {
            log::warn!("Clock went backwards by {:.4}s, ignoring", -elapsed);
            elapsed = 0.0;
        }
        self.accumulator += elapsed;
    }

    /// Spend banked time on as many whole steps as it covers
    ///
    /// `on_step` runs once per step; returns the number of steps taken.
    pub fn advance(&mut self, now: f64, mut on_step: impl FnMut(f32)) -> u32 {
        self.accumulate(now);

        let mut steps = 0;
        while self.accumulator >= self.step {
            on_step(self.step);
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }

    /// Run one frame: apply input once, then every due sub-step
    pub fn run_frame(&mut self, world: &mut World, input: &TickInput, now: f64) -> FrameReport {
        apply_input(world, input);

        let mut outcome = None;
        let steps = self.advance(now, |dt| {
            if let Some(reached) = tick(world, dt) {
                outcome = Some(reached);
            }
        });

        if steps > 1 {
            log::debug!("Caught up {} sub-steps in one frame", steps);
        }

        FrameReport { steps, outcome }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FIXED_STEP;
    use proptest::prelude::*;

    #[test]
    fn test_short_frame_banks_time() {
        let mut clock = FixedTimestep::new(FIXED_STEP);
        assert_eq!(clock.advance(0.01, |_| {}), 0);
        assert!((clock.accumulator() - 0.01).abs() < 1e-6);
        // The banked time completes a step on the next frame
        assert_eq!(clock.advance(0.02, |_| {}), 1);
        assert!(clock.accumulator() < FIXED_STEP);
    }

    #[test]
    fn test_every_step_uses_fixed_delta() {
        let mut clock = FixedTimestep::new(FIXED_STEP);
        let mut deltas = Vec::new();
        clock.advance(0.1, |dt| deltas.push(dt));
        assert!(!deltas.is_empty());
        assert!(deltas.iter().all(|&dt| dt == FIXED_STEP));
    }

    #[test]
    fn test_stall_catches_up_all_steps() {
        let mut world = World::with_default_level();
        let mut clock = FixedTimestep::new(FIXED_STEP);

        let report = clock.run_frame(&mut world, &TickInput::default(), 1.0);

        assert!((59..=60).contains(&report.steps), "steps = {}", report.steps);
        assert_eq!(world.time_ticks, u64::from(report.steps));
        assert!(clock.accumulator() >= 0.0 && clock.accumulator() < FIXED_STEP);
    }

    #[test]
    fn test_stall_matches_many_small_frames() {
        let mut stalled = World::with_default_level();
        let mut smooth = World::with_default_level();
        let input = TickInput::left();

        let mut clock = FixedTimestep::new(FIXED_STEP);
        let steps = clock.run_frame(&mut stalled, &input, 1.0).steps;

        apply_input(&mut smooth, &input);
        for _ in 0..steps {
            tick(&mut smooth, FIXED_STEP);
        }

        assert_eq!(stalled, smooth);
    }

    #[test]
    fn test_backwards_clock_is_ignored() {
        let mut clock = FixedTimestep::starting_at(FIXED_STEP, 10.0);
        assert_eq!(clock.advance(9.0, |_| {}), 0);
        assert_eq!(clock.accumulator(), 0.0);
        assert_eq!(clock.advance(9.0 + f64::from(FIXED_STEP) * 2.5, |_| {}), 2);
    }

    #[test]
    fn test_run_frame_reports_outcome_once() {
        let mut world = World::with_default_level();
        let mut clock = FixedTimestep::new(FIXED_STEP);

        let mut reached = Vec::new();
        let mut now = 0.0;
        for _ in 0..3_000 {
            now += 1.0 / 30.0;
            if let Some(outcome) = clock.run_frame(&mut world, &TickInput::default(), now).outcome {
                reached.push(outcome);
            }
        }

        assert_eq!(reached, vec![Outcome::Lost]);
        assert_eq!(world.outcome, Outcome::Lost);
    }

    proptest! {
        #[test]
        fn prop_accumulator_stays_below_step(
            frames in proptest::collection::vec(0.0f64..0.25, 1..100),
        ) {
            let mut clock = FixedTimestep::new(FIXED_STEP);
            let mut now = 0.0;
            for frame in frames {
                now += frame;
                clock.advance(now, |_| {});
                prop_assert!(clock.accumulator() >= 0.0);
                prop_assert!(clock.accumulator() < FIXED_STEP);
            }
        }

        #[test]
        fn prop_same_frames_same_world(
            frames in proptest::collection::vec(0.0f64..0.1, 1..60),
            thrust in -1.0f32..1.0,
        ) {
            let run = || {
                let mut world = World::with_default_level();
                let mut clock = FixedTimestep::new(FIXED_STEP);
                let mut now = 0.0;
                for frame in &frames {
                    now += frame;
                    clock.run_frame(&mut world, &TickInput { thrust }, now);
                }
                world
            };
            prop_assert_eq!(run(), run());
        }
    }
}
