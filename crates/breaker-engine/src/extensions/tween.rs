// extensions/tween.rs
//
// Tick-based value tween. The camera and animations sample it once per tick;
// collision never reads it.
//
// Usage:
//   let mut x = Tween::new(0.0);
//   x.move_to(Easing::CubicOut, 120.0, 5, 0);
//   x.tick();
//   if x.take_moved() { /* redraw */ }

use super::easing::{ease, Easing};

/// A value that eases from a start to an end over a whole number of ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    easing: Easing,
    /// Ticks to wait before moving.
    hold: u32,
    /// Ticks elapsed since the movement began.
    time: u32,
    duration: u32,
    start: f32,
    end: f32,
    moved: bool,
    finished: bool,
}

impl Tween {
    /// A tween resting at `value`.
    pub fn new(value: f32) -> Self {
        let mut tween = Self {
            easing: Easing::Linear,
            hold: 0,
            time: 0,
            duration: 0,
            start: value,
            end: value,
            moved: false,
            finished: true,
        };
        tween.set(value);
        tween
    }

    /// Advance one tick.
    pub fn tick(&mut self) {
        if self.hold > 0 {
            self.hold -= 1;
            if self.hold == 0 {
                self.moved = true;
            }
            return;
        }
        if self.time == self.duration {
            // Report one last change on the tick the movement completes.
            if !self.finished {
                self.moved = true;
                self.finished = true;
            }
        } else {
            self.time += 1;
            self.moved = true;
        }
    }

    /// Start moving toward `end` from the current sampled value.
    pub fn move_to(&mut self, easing: Easing, end: f32, duration: u32, hold: u32) {
        let start = self.value();
        self.begin(easing, start, end, duration, hold);
    }

    /// Start moving toward `end` from the previous destination, skipping whatever
    /// remained of the last movement.
    pub fn push(&mut self, easing: Easing, end: f32, duration: u32, hold: u32) {
        let start = self.end;
        self.begin(easing, start, end, duration, hold);
    }

    /// Jump straight to `value`.
    pub fn set(&mut self, value: f32) {
        self.time = 0;
        self.duration = 0;
        self.hold = 0;
        self.start = value;
        self.end = value;
        self.moved = true;
        self.finished = true;
    }

    fn begin(&mut self, easing: Easing, start: f32, end: f32, duration: u32, hold: u32) {
        self.easing = easing;
        self.start = start;
        self.end = end;
        self.time = 0;
        self.duration = duration;
        self.hold = hold;
        self.moved = true;
        self.finished = false;
    }

    /// Current sampled value.
    pub fn value(&self) -> f32 {
        if self.time == self.duration {
            return self.end;
        }
        if self.hold > 0 {
            return self.start;
        }
        ease(
            self.start,
            self.end,
            self.time as f32 / self.duration as f32,
            self.easing,
        )
    }

    pub fn destination(&self) -> f32 {
        self.end
    }

    pub fn arrived(&self) -> bool {
        self.time == self.duration
    }

    /// Whether the value changed since the last call. Clears the flag.
    pub fn take_moved(&mut self) -> bool {
        std::mem::take(&mut self.moved)
    }
}

impl Default for Tween {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_move_samples_each_tick() {
        let mut t = Tween::new(0.0);
        t.take_moved();
        t.move_to(Easing::Linear, 100.0, 4, 0);
        t.tick();
        assert!((t.value() - 25.0).abs() < 0.001);
        t.tick();
        assert!((t.value() - 50.0).abs() < 0.001);
        t.tick();
        t.tick();
        assert!(t.arrived());
        assert_eq!(t.value(), 100.0);
    }

    #[test]
    fn hold_delays_movement() {
        let mut t = Tween::new(10.0);
        t.move_to(Easing::Linear, 20.0, 2, 2);
        assert_eq!(t.value(), 10.0);
        t.tick();
        assert_eq!(t.value(), 10.0);
        t.tick();
        t.tick();
        assert!((t.value() - 15.0).abs() < 0.001);
    }

    #[test]
    fn moved_reported_until_settled() {
        let mut t = Tween::new(0.0);
        assert!(t.take_moved());
        assert!(!t.take_moved());

        t.move_to(Easing::CubicOut, 5.0, 1, 0);
        t.take_moved();
        t.tick();
        assert!(t.take_moved());
        // The completing tick reports once more, then the tween is quiet.
        t.tick();
        assert!(t.take_moved());
        t.tick();
        assert!(!t.take_moved());
    }

    #[test]
    fn push_starts_from_previous_destination() {
        let mut t = Tween::new(0.0);
        t.move_to(Easing::Linear, 100.0, 10, 0);
        t.tick();
        t.push(Easing::Linear, 200.0, 10, 0);
        assert_eq!(t.value(), 100.0);
        assert_eq!(t.destination(), 200.0);
    }

    #[test]
    fn move_to_starts_from_current_value() {
        let mut t = Tween::new(0.0);
        t.move_to(Easing::Linear, 100.0, 10, 0);
        t.tick();
        t.move_to(Easing::Linear, 0.0, 10, 0);
        assert!((t.value() - 10.0).abs() < 0.001);
    }

    #[test]
    fn zero_duration_lands_immediately() {
        let mut t = Tween::new(3.0);
        t.move_to(Easing::ElasticOut, 9.0, 0, 0);
        assert_eq!(t.value(), 9.0);
        assert!(t.arrived());
    }
}
