//! Per-entity motion state and the tuning constants that drive it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::rect::Rect;
use crate::error::ConfigError;

/// Upper bound accepted for `Tuning::max_jumps`.
pub const MAX_JUMP_LIMIT: u32 = 16;

/// Position, velocity and collision flags of one entity.
///
/// Only the resolver writes these fields during a tick; animation and control code
/// read them afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    /// Box centre in world coordinates.
    pub pos: Vec2,
    /// Half the box width and height.
    pub half: Vec2,
    /// Displacement per tick.
    pub vel: Vec2,
    /// A downward collision was resolved on the last tick.
    pub grounded: bool,
    /// Jump input was held and consumed; cleared when the input is released.
    pub jumped: bool,
    /// Horizontal input opposed the velocity on the last tick.
    pub turning: bool,
    /// No single horizontal direction was held on the last tick.
    pub frictioned: bool,
    pub jumps_remaining: u32,
}

impl MotionState {
    /// An airborne, motionless entity with no jumps until it first lands.
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            half: size / 2.0,
            vel: Vec2::ZERO,
            grounded: false,
            jumped: false,
            turning: false,
            frictioned: false,
            jumps_remaining: 0,
        }
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_jumps(mut self, jumps: u32) -> Self {
        self.jumps_remaining = jumps;
        self
    }

    pub fn size(&self) -> Vec2 {
        self.half * 2.0
    }

    /// Collision box at the current position.
    pub fn hitbox(&self) -> Rect {
        self.hitbox_at(self.pos)
    }

    /// Collision box if the centre were at `pos`.
    pub fn hitbox_at(&self, pos: Vec2) -> Rect {
        Rect::from_center(pos, self.size())
    }
}

/// Per-kind movement constants. Fixed once an entity is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Multiplier on horizontal acceleration when pushing against the velocity.
    pub reverse_multiplier: f32,
    /// Horizontal acceleration per tick.
    pub accel_x: f32,
    /// Gravity added to the vertical velocity every tick.
    pub gravity: f32,
    /// Horizontal speed cap while grounded.
    pub run_cap: f32,
    /// Horizontal speed cap while airborne.
    pub drift_cap: f32,
    pub terminal_fall: f32,
    pub jump_impulse: f32,
    /// Horizontal velocity factor applied when no single direction is held.
    pub friction: f32,
    pub max_jumps: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::protagonist()
    }
}

impl Tuning {
    pub fn protagonist() -> Self {
        Self {
            reverse_multiplier: 1.75,
            accel_x: 0.4,
            gravity: 0.35,
            run_cap: 7.0,
            drift_cap: 5.0,
            terminal_fall: 9.0,
            jump_impulse: 7.0,
            friction: 0.8,
            max_jumps: 2,
        }
    }

    /// Parse and validate tuning from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject constants the resolver cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check().map_err(|err| {
            log::warn!("rejecting tuning: {err}");
            err
        })
    }

    fn check(&self) -> Result<(), ConfigError> {
        let fields = [
            ("reverse_multiplier", self.reverse_multiplier),
            ("accel_x", self.accel_x),
            ("gravity", self.gravity),
            ("run_cap", self.run_cap),
            ("drift_cap", self.drift_cap),
            ("terminal_fall", self.terminal_fall),
            ("jump_impulse", self.jump_impulse),
            ("friction", self.friction),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NegativeOrNan { field, value });
            }
        }
        if self.friction >= 1.0 {
            return Err(ConfigError::Friction(self.friction));
        }
        if self.max_jumps > MAX_JUMP_LIMIT {
            return Err(ConfigError::TooManyJumps(self.max_jumps));
        }
        // A jump that gravity cancels within the same tick would land immediately.
        if self.max_jumps > 0 && self.jump_impulse <= self.gravity {
            return Err(ConfigError::WeakJump {
                impulse: self.jump_impulse,
                gravity: self.gravity,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protagonist_tuning_is_valid() {
        assert!(Tuning::protagonist().validate().is_ok());
    }

    #[test]
    fn negative_gravity_rejected() {
        let tuning = Tuning {
            gravity: -1.0,
            ..Tuning::protagonist()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::NegativeOrNan { field: "gravity", .. })
        ));
    }

    #[test]
    fn friction_of_one_rejected() {
        let tuning = Tuning {
            friction: 1.0,
            ..Tuning::protagonist()
        };
        assert!(matches!(tuning.validate(), Err(ConfigError::Friction(_))));
    }

    #[test]
    fn jump_weaker_than_gravity_rejected() {
        let tuning = Tuning {
            jump_impulse: 0.2,
            ..Tuning::protagonist()
        };
        assert!(matches!(tuning.validate(), Err(ConfigError::WeakJump { .. })));
    }

    #[test]
    fn jump_count_over_limit_rejected() {
        let tuning = Tuning {
            max_jumps: MAX_JUMP_LIMIT + 1,
            ..Tuning::protagonist()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::TooManyJumps(n)) if n == MAX_JUMP_LIMIT + 1
        ));
    }

    #[test]
    fn parse_from_json() {
        let json = r#"{
            "reverse_multiplier": 2.0,
            "accel_x": 0.5,
            "gravity": 0.3,
            "run_cap": 6.0,
            "drift_cap": 4.0,
            "terminal_fall": 8.0,
            "jump_impulse": 6.5,
            "friction": 0.75,
            "max_jumps": 1
        }"#;
        let tuning = Tuning::from_json(json).unwrap();
        assert_eq!(tuning.max_jumps, 1);
        assert!((tuning.friction - 0.75).abs() < f32::EPSILON);
    }

    #[test]
    fn negative_jump_count_fails_to_parse() {
        let json = r#"{
            "reverse_multiplier": 2.0, "accel_x": 0.5, "gravity": 0.3,
            "run_cap": 6.0, "drift_cap": 4.0, "terminal_fall": 8.0,
            "jump_impulse": 6.5, "friction": 0.75, "max_jumps": -1
        }"#;
        assert!(matches!(Tuning::from_json(json), Err(ConfigError::Json(_))));
    }

    #[test]
    fn hitbox_is_centred() {
        let motion = MotionState::new(Vec2::new(16.0, 16.0), Vec2::new(18.0, 34.0));
        assert_eq!(motion.hitbox(), Rect::new(7, -1, 18, 34));
    }
}
