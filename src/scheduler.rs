use std::time::Duration;

use crate::config::TimerConfig;

/// Fixed-interval timer driven by frame time.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    interval: Duration,
    elapsed: Duration,
    running: bool,
}

impl IntervalTimer {
    pub fn new(interval: Duration) -> Self {
        IntervalTimer {
            interval,
            elapsed: Duration::ZERO,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stops the timer and drops any partially accumulated interval.
    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed = Duration::ZERO;
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Adds `delta` and returns how many times the timer fired.
    pub fn advance(&mut self, delta: Duration) -> u32 {
        if !self.running || self.interval.is_zero() {
            return 0;
        }

        self.elapsed += delta;
        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fired += 1;
        }
        fired
    }
}

/// How often each timer fired during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Firings {
    pub ticks: u32,
    pub phases: u32,
    pub vehicle_spawns: u32,
    pub pedestrian_spawns: u32,
}

pub struct Scheduler {
    tick: IntervalTimer,
    phase: IntervalTimer,
    vehicle_spawn: IntervalTimer,
    pedestrian_spawn: IntervalTimer,
}

impl Scheduler {
    pub fn new(timers: &TimerConfig) -> Self {
        Scheduler {
            tick: IntervalTimer::new(timers.tick()),
            phase: IntervalTimer::new(timers.phase()),
            vehicle_spawn: IntervalTimer::new(timers.vehicle_spawn()),
            pedestrian_spawn: IntervalTimer::new(timers.pedestrian_spawn()),
        }
    }

    /// Starts every timer. The phase timer stays off in manual mode.
    pub fn start_all(&mut self, manual: bool) {
        self.tick.start();
        self.vehicle_spawn.start();
        self.pedestrian_spawn.start();
        if !manual {
            self.phase.start();
        }
        tracing::debug!(manual, "Timers started");
    }

    pub fn stop_all(&mut self) {
        self.tick.stop();
        self.phase.stop();
        self.vehicle_spawn.stop();
        self.pedestrian_spawn.stop();
        tracing::debug!("Timers stopped");
    }

    /// Manual mode freezes the automatic light cycle only.
    pub fn set_manual(&mut self, manual: bool, running: bool) {
        if manual {
            self.phase.stop();
        } else if running {
            self.phase.start();
        }
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.tick.is_running()
    }

    #[cfg(test)]
    pub fn is_phase_running(&self) -> bool {
        self.phase.is_running()
    }

    pub fn advance(&mut self, delta: Duration) -> Firings {
        Firings {
            ticks: self.tick.advance(delta),
            phases: self.phase.advance(delta),
            vehicle_spawns: self.vehicle_spawn.advance(delta),
            pedestrian_spawns: self.pedestrian_spawn.advance(delta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn stopped_timer_never_fires() {
        let mut timer = IntervalTimer::new(ms(100));
        assert_eq!(timer.advance(ms(1000)), 0);
    }

    #[test]
    fn timer_accumulates_partial_frames() {
        let mut timer = IntervalTimer::new(ms(100));
        timer.start();
        assert_eq!(timer.advance(ms(60)), 0);
        assert_eq!(timer.advance(ms(60)), 1);
        assert_eq!(timer.advance(ms(80)), 1);
        assert_eq!(timer.advance(ms(10)), 0);
    }

    #[test]
    fn long_frame_fires_multiple_times() {
        let mut timer = IntervalTimer::new(ms(100));
        timer.start();
        assert_eq!(timer.advance(ms(350)), 3);
        assert_eq!(timer.advance(ms(50)), 1);
    }

    #[test]
    fn stop_discards_progress() {
        let mut timer = IntervalTimer::new(ms(100));
        timer.start();
        timer.advance(ms(90));
        timer.stop();
        timer.start();
        assert_eq!(timer.advance(ms(20)), 0);
    }

    #[test]
    fn scheduler_uses_configured_intervals() {
        let mut scheduler = Scheduler::new(&TimerConfig::default());
        scheduler.start_all(false);
        let firings = scheduler.advance(ms(4000));
        assert_eq!(
            firings,
            Firings {
                ticks: 40,
                phases: 1,
                vehicle_spawns: 2,
                pedestrian_spawns: 1,
            }
        );
    }

    #[test]
    fn manual_mode_stops_only_phase_timer() {
        let mut scheduler = Scheduler::new(&TimerConfig::default());
        scheduler.start_all(false);
        scheduler.set_manual(true, true);
        assert!(scheduler.is_running());
        assert!(!scheduler.is_phase_running());

        let firings = scheduler.advance(ms(6000));
        assert_eq!(firings.phases, 0);
        assert_eq!(firings.ticks, 60);

        scheduler.set_manual(false, true);
        assert!(scheduler.is_phase_running());
    }

    #[test]
    fn start_in_manual_mode_leaves_phase_timer_off() {
        let mut scheduler = Scheduler::new(&TimerConfig::default());
        scheduler.start_all(true);
        assert!(!scheduler.is_phase_running());
    }

    #[test]
    fn leaving_manual_mode_while_paused_keeps_phase_off() {
        let mut scheduler = Scheduler::new(&TimerConfig::default());
        scheduler.set_manual(false, false);
        assert!(!scheduler.is_phase_running());
    }

    #[test]
    fn stop_all_halts_everything() {
        let mut scheduler = Scheduler::new(&TimerConfig::default());
        scheduler.start_all(false);
        scheduler.stop_all();
        assert_eq!(scheduler.advance(ms(10_000)), Firings::default());
    }
}
