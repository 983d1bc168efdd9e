use glam::Vec2;

use crate::api::types::EntityId;
use crate::components::animation::Animator;
use crate::components::kind::{ChoosesAnimation, EntityKind, UpdatesMotion};
use crate::components::motion::MotionState;
use crate::core::grid::Grid;
use crate::core::rect::Rect;
use crate::input::controller::InputIntent;
use crate::renderer::dirty::DirtyRegion;

/// A moving, animated actor in the level.
///
/// The entity owns its motion state and redraw tracker outright. Everything it
/// reads from the outside world (grid, camera offset) is passed in per tick.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub motion: MotionState,
    pub animator: Animator,
    pub dirty: DirtyRegion,
    pub facing_left: bool,
}

impl Entity {
    /// Spawn `kind` with its box centred on `pos`.
    pub fn new(id: EntityId, kind: EntityKind, pos: Vec2) -> Self {
        let motion = MotionState::new(pos, kind.size());
        let animator = kind.animator();
        Self {
            id,
            kind,
            motion,
            animator,
            dirty: DirtyRegion::new(),
            facing_left: false,
        }
    }

    pub fn hitbox(&self) -> Rect {
        self.motion.hitbox()
    }

    /// Box the entity is drawn in, in world space.
    pub fn visual_bounds(&self) -> Rect {
        self.animator.bounds(&self.motion.hitbox())
    }

    /// Run one tick. Returns whether anything visible changed; if so the padded
    /// screen-space box has been pushed into `dirty`.
    pub fn update(&mut self, intent: InputIntent, grid: &Grid, camera: Vec2, margin: i32) -> bool {
        let mut changed = self.animator.tick();

        let resolution = self.kind.resolve(&self.motion, intent, grid);
        self.motion = resolution.motion;
        changed |= resolution.moved;

        let facing_left = self.kind.facing_left(&self.motion, self.facing_left);
        changed |= facing_left != self.facing_left;
        self.facing_left = facing_left;

        self.animator.play(self.kind.choose_animation(&self.motion));
        changed |= self.animator.take_moved();

        if changed {
            self.push_clip(camera, margin);
        }
        changed
    }

    /// Mark the current drawn box for redraw.
    pub fn push_clip(&mut self, camera: Vec2, margin: i32) {
        let region = self
            .visual_bounds()
            .padded(margin)
            .translated(-(camera.x as i32), -(camera.y as i32));
        self.dirty.push(region);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::animation::AnimationKey;
    use crate::components::kind::ProtagonistKind;
    use crate::core::grid::{Cell, GRID_SIZE};

    fn protagonist_at(pos: Vec2) -> Entity {
        Entity::new(
            EntityId(1),
            EntityKind::Protagonist(ProtagonistKind::default()),
            pos,
        )
    }

    #[test]
    fn falling_entity_pushes_padded_visual_box() {
        let grid = Grid::empty(GRID_SIZE);
        let mut player = protagonist_at(Vec2::new(100.0, 100.0));
        assert!(player.update(InputIntent::default(), &grid, Vec2::ZERO, 5));

        // y = 100.35, hitbox (91, 83), visual (80, 77) 40x40, padded by 5.
        assert_eq!(player.dirty.pending(), Rect::new(75, 72, 50, 50));
        assert_eq!(player.animator.current(), AnimationKey::JumpEnd);
    }

    #[test]
    fn clip_is_in_screen_space() {
        let grid = Grid::empty(GRID_SIZE);
        let mut player = protagonist_at(Vec2::new(100.0, 100.0));
        player.update(InputIntent::default(), &grid, Vec2::new(50.0, 20.0), 5);
        assert_eq!(player.dirty.pending(), Rect::new(25, 52, 50, 50));
    }

    #[test]
    fn resting_entity_stays_clean() {
        let grid = Grid::from_cells([Cell::solid(0, 1)], GRID_SIZE).unwrap();
        let mut player = protagonist_at(Vec2::new(16.0, 16.0));
        player.update(InputIntent::default(), &grid, Vec2::ZERO, 5);
        assert!(player.motion.grounded);
        assert_eq!(player.animator.current(), AnimationKey::Stand);

        player.dirty.drop_region();
        player.dirty.drop_region();
        assert!(!player.update(InputIntent::default(), &grid, Vec2::ZERO, 5));
        assert!(player.dirty.is_empty());
        assert_eq!(player.motion.pos, Vec2::new(16.0, 16.0));
    }

    #[test]
    fn facing_follows_input() {
        let grid = Grid::from_cells([Cell::solid(0, 1), Cell::solid(1, 1)], GRID_SIZE).unwrap();
        let mut player = protagonist_at(Vec2::new(32.0, 16.0));
        let left = InputIntent {
            left: true,
            ..Default::default()
        };
        player.update(left, &grid, Vec2::ZERO, 5);
        assert!(player.facing_left);
    }
}
