//! Entity kinds and the capabilities each one provides.

use glam::Vec2;

use crate::components::animation::{protagonist_animator, AnimationKey, Animator};
use crate::components::motion::{MotionState, Tuning};
use crate::core::collision::{self, Resolution};
use crate::core::grid::Grid;
use crate::input::controller::InputIntent;

/// Vertical speed beyond which an airborne entity shows a rising or falling pose.
pub const AIRBORNE_POSE_SPEED: f32 = 1.5;

/// Entities that move under gravity and collide with the grid.
pub trait UpdatesMotion {
    fn tuning(&self) -> &Tuning;

    /// Collision box size.
    fn size(&self) -> Vec2;

    fn resolve(&self, state: &MotionState, intent: InputIntent, grid: &Grid) -> Resolution {
        collision::resolve(state, self.tuning(), intent, grid)
    }
}

/// Entities that pick a pose from their motion.
pub trait ChoosesAnimation {
    fn choose_animation(&self, motion: &MotionState) -> AnimationKey;

    fn animator(&self) -> Animator;

    /// Facing after this tick: flips with the sign of the horizontal velocity and
    /// holds when it is zero.
    fn facing_left(&self, motion: &MotionState, was_left: bool) -> bool {
        if motion.vel.x < 0.0 {
            true
        } else if motion.vel.x > 0.0 {
            false
        } else {
            was_left
        }
    }
}

/// The player character.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtagonistKind {
    pub tuning: Tuning,
}

impl ProtagonistKind {
    pub const SIZE: Vec2 = Vec2::new(18.0, 34.0);
}

impl Default for ProtagonistKind {
    fn default() -> Self {
        Self {
            tuning: Tuning::protagonist(),
        }
    }
}

impl UpdatesMotion for ProtagonistKind {
    fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    fn size(&self) -> Vec2 {
        Self::SIZE
    }
}

impl ChoosesAnimation for ProtagonistKind {
    fn choose_animation(&self, motion: &MotionState) -> AnimationKey {
        if motion.grounded {
            if motion.vel.x == 0.0 {
                AnimationKey::Stand
            } else if motion.turning {
                AnimationKey::Turn
            } else if motion.frictioned {
                AnimationKey::Stop
            } else {
                AnimationKey::Run
            }
        } else if motion.vel.y < -AIRBORNE_POSE_SPEED {
            AnimationKey::JumpStart
        } else if motion.vel.y > AIRBORNE_POSE_SPEED {
            AnimationKey::JumpAir
        } else {
            AnimationKey::JumpEnd
        }
    }

    fn animator(&self) -> Animator {
        protagonist_animator()
    }
}

/// Every kind of entity a level can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    Protagonist(ProtagonistKind),
}

impl EntityKind {
    /// Look up a kind by its level-file identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "protagonist" => Some(EntityKind::Protagonist(ProtagonistKind::default())),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            EntityKind::Protagonist(_) => "protagonist",
        }
    }
}

impl UpdatesMotion for EntityKind {
    fn tuning(&self) -> &Tuning {
        match self {
            EntityKind::Protagonist(kind) => kind.tuning(),
        }
    }

    fn size(&self) -> Vec2 {
        match self {
            EntityKind::Protagonist(kind) => kind.size(),
        }
    }
}

impl ChoosesAnimation for EntityKind {
    fn choose_animation(&self, motion: &MotionState) -> AnimationKey {
        match self {
            EntityKind::Protagonist(kind) => kind.choose_animation(motion),
        }
    }

    fn animator(&self) -> Animator {
        match self {
            EntityKind::Protagonist(kind) => kind.animator(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grounded(vx: f32) -> MotionState {
        let mut m = MotionState::new(Vec2::ZERO, ProtagonistKind::SIZE).with_velocity(Vec2::new(vx, 0.0));
        m.grounded = true;
        m
    }

    #[test]
    fn grounded_poses() {
        let kind = ProtagonistKind::default();
        assert_eq!(kind.choose_animation(&grounded(0.0)), AnimationKey::Stand);
        assert_eq!(kind.choose_animation(&grounded(3.0)), AnimationKey::Run);

        let mut turning = grounded(-1.0);
        turning.turning = true;
        assert_eq!(kind.choose_animation(&turning), AnimationKey::Turn);

        let mut sliding = grounded(2.0);
        sliding.frictioned = true;
        assert_eq!(kind.choose_animation(&sliding), AnimationKey::Stop);
    }

    #[test]
    fn airborne_poses_follow_vertical_speed() {
        let kind = ProtagonistKind::default();
        let airborne = |vy| MotionState::new(Vec2::ZERO, ProtagonistKind::SIZE).with_velocity(Vec2::new(0.0, vy));
        assert_eq!(kind.choose_animation(&airborne(-7.0)), AnimationKey::JumpStart);
        assert_eq!(kind.choose_animation(&airborne(4.0)), AnimationKey::JumpAir);
        assert_eq!(kind.choose_animation(&airborne(1.5)), AnimationKey::JumpEnd);
        assert_eq!(kind.choose_animation(&airborne(-1.5)), AnimationKey::JumpEnd);
    }

    #[test]
    fn facing_flips_with_velocity() {
        let kind = ProtagonistKind::default();
        assert!(kind.facing_left(&grounded(-0.5), false));
        assert!(!kind.facing_left(&grounded(0.5), true));
        assert!(kind.facing_left(&grounded(0.0), true));
    }

    #[test]
    fn kind_ids_round_trip() {
        let kind = EntityKind::from_id("protagonist").unwrap();
        assert_eq!(kind.id(), "protagonist");
        assert_eq!(kind.size(), Vec2::new(18.0, 34.0));
        assert!(EntityKind::from_id("slime").is_none());
    }
}
