use std::time::Instant;

use crate::error::TickError;
use crate::event::GameEvent;
use crate::input::InputEvents;

pub struct FixedTimestep {
    tick_rate: u32,
    dt: f64,
    accumulator: f64,
}

impl FixedTimestep {
    pub const MAX_FRAME: f64 = 0.25;

    pub fn new(tick_rate: u32) -> Self {
        let tick_rate = tick_rate.max(1);
        Self {
            tick_rate,
            dt: 1.0 / tick_rate as f64,
            accumulator: 0.0,
        }
    }

    pub fn tick_rate(&self) -> u32 {
        self.tick_rate
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn accumulate(&mut self, delta: f64) {
        self.accumulator += delta.min(Self::MAX_FRAME);
    }

    pub fn consume_tick(&mut self) -> bool {
        if self.accumulator >= self.dt {
            self.accumulator -= self.dt;
            true
        } else {
            false
        }
    }
}

/// Everything an entity may read or emit during one tick.
///
/// `dt` drives the physics; `now` is wall-clock time and only drives
/// behaviour that is meant to run in real time, such as target relocation.
#[derive(Debug)]
pub struct TickContext {
    pub dt: f64,
    pub now: Instant,
    pub input: InputEvents,
    pub events: Vec<GameEvent>,
}

impl TickContext {
    pub fn new(dt: f64, now: Instant) -> Self {
        Self {
            dt,
            now,
            input: InputEvents::empty(),
            events: Vec::new(),
        }
    }

    pub fn with_input(mut self, input: InputEvents) -> Self {
        self.input = input;
        self
    }

    pub fn validate(&self) -> Result<(), TickError> {
        if self.dt.is_finite() && self.dt >= 0.0 {
            Ok(())
        } else {
            Err(TickError::InvalidTimestep(self.dt))
        }
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(ts: &mut FixedTimestep) -> u32 {
        let mut ticks = 0;
        while ts.consume_tick() {
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn trail_period_takes_thirty_ticks_at_default_rate() {
        let mut ts = FixedTimestep::new(crate::DEFAULT_TICK_RATE);
        let period = crate::TrailConfig::default().sample_period;

        let mut ticks = 0;
        for _ in 0..10 {
            ts.accumulate(period / 10.0 + 1e-9);
            ticks += drain(&mut ts);
        }
        assert_eq!(ticks, 30);
        assert!((f64::from(ticks) * ts.dt() - period).abs() < 1e-9);
    }

    #[test]
    fn short_frames_carry_over_until_a_tick_fits() {
        let mut ts = FixedTimestep::new(60);

        ts.accumulate(0.01);
        assert_eq!(drain(&mut ts), 0);
        ts.accumulate(0.01);
        assert_eq!(drain(&mut ts), 1);
    }

    #[test]
    fn stalled_frames_release_at_most_a_quarter_second() {
        let mut ts = FixedTimestep::new(60);
        ts.accumulate(5.0);
        assert!(drain(&mut ts) <= 15);
    }

    #[test]
    fn zero_tick_rate_still_ticks() {
        let ts = FixedTimestep::new(0);
        assert_eq!(ts.tick_rate(), 1);
        assert_eq!(ts.dt(), 1.0);
    }

    #[test]
    fn rejects_bad_timesteps() {
        let now = Instant::now();
        assert!(TickContext::new(0.0, now).validate().is_ok());
        assert!(TickContext::new(f64::NAN, now).validate().is_err());
        assert!(TickContext::new(-0.1, now).validate().is_err());
        assert!(TickContext::new(f64::INFINITY, now).validate().is_err());
    }
}
