use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::types::EntityId;
use crate::assets::level::Level;
use crate::components::entity::Entity;
use crate::components::kind::{EntityKind, ProtagonistKind, UpdatesMotion};
use crate::core::grid::{Grid, GRID_SIZE};
use crate::core::rect::Rect;
use crate::error::{ConfigError, LoadError};
use crate::input::controller::InputIntent;
use crate::renderer::camera::{Camera, CameraMode};
use crate::renderer::compositor::{compose, Layer, LayerStack};
use crate::renderer::dirty::DirtyRegion;

/// Simulation configuration, provided by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Visible area in pixels.
    pub draw_width: i32,
    pub draw_height: i32,
    /// Edge length of a level cell (default: 32).
    pub grid_size: i32,
    /// Padding added around an entity's drawn box when marking it for redraw.
    pub clip_margin: i32,
    /// Most ticks one frame may catch up on (default: 10).
    pub max_steps: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            draw_width: 640,
            draw_height: 360,
            grid_size: GRID_SIZE,
            clip_margin: 5,
            max_steps: 10,
        }
    }
}

impl SimConfig {
    /// Parse and validate a config from a JSON string. Missing fields take their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fixed_dt.is_finite() && self.fixed_dt > 0.0) {
            return Err(ConfigError::NonPositive { field: "fixed_dt" });
        }
        let positive = [
            ("draw_width", self.draw_width),
            ("draw_height", self.draw_height),
            ("grid_size", self.grid_size),
            ("max_steps", self.max_steps.min(i32::MAX as u32) as i32),
        ];
        for (field, value) in positive {
            if value <= 0 {
                return Err(ConfigError::NonPositive { field });
            }
        }
        if self.clip_margin < 0 {
            return Err(ConfigError::NegativeOrNan {
                field: "clip_margin",
                value: self.clip_margin as f32,
            });
        }
        Ok(())
    }

    /// The whole visible area in screen space.
    pub fn draw_bounds(&self) -> Rect {
        Rect::new(0, 0, self.draw_width, self.draw_height)
    }
}

/// One running level: the grid, the player, the camera and the redraw trackers.
///
/// Call [`World::tick`] once per simulated tick and [`World::redraw_region`]
/// once per rendered frame.
#[derive(Debug, Clone)]
pub struct World {
    config: SimConfig,
    level: Level,
    player: Entity,
    camera: Camera,
    backdrop: DirtyRegion,
    layers: LayerStack,
    tick_count: u64,
}

impl World {
    /// Start `level` with the default protagonist.
    pub fn new(level: Level, config: SimConfig) -> Result<Self, ConfigError> {
        Self::with_player(level, config, EntityKind::Protagonist(ProtagonistKind::default()))
    }

    /// Start `level` with a player of the given kind.
    pub fn with_player(level: Level, config: SimConfig, kind: EntityKind) -> Result<Self, ConfigError> {
        config.validate()?;
        kind.tuning().validate()?;
        if level.grid.cell_size() != config.grid_size {
            log::warn!(
                "level cell size {} differs from configured grid size {}",
                level.grid.cell_size(),
                config.grid_size
            );
        }

        let player = Entity::new(EntityId(0), kind, level.spawn_center());
        let camera = Camera::new(0.0, 0.0, config.draw_width as f32, config.draw_height as f32);
        let mut backdrop = DirtyRegion::new();
        backdrop.push(config.draw_bounds());

        log::info!("world started: player spawned at {}", player.motion.pos);
        Ok(Self {
            config,
            level,
            player,
            camera,
            backdrop,
            layers: LayerStack::new(),
            tick_count: 0,
        })
    }

    /// Parse level text and start it.
    pub fn load(text: &str, config: SimConfig) -> Result<Self, LoadError> {
        config.validate()?;
        let level = Level::parse(text, config.grid_size)?;
        Ok(Self::new(level, config)?)
    }

    /// Advance the simulation one tick. Returns whether the player changed visibly.
    pub fn tick(&mut self, intent: InputIntent) -> bool {
        self.camera.tick();

        let changed = self.player.update(
            intent,
            &self.level.grid,
            self.camera.position(),
            self.config.clip_margin,
        );
        self.layers
            .update([(Layer::Midground, &mut self.player.dirty)]);

        self.camera.track(self.player.hitbox().center());
        self.tick_count += 1;
        log::trace!("tick {}: player at {}", self.tick_count, self.player.motion.pos);
        changed
    }

    /// The screen area to repaint this frame. Call once per frame: the trackers
    /// only report each change for the frame it happened in and the one after.
    pub fn redraw_region(&mut self) -> Rect {
        if self.camera.take_moved() {
            return self.config.draw_bounds();
        }
        compose([&mut self.backdrop, self.layers.region_mut()])
    }

    pub fn set_camera_mode(&mut self, mode: CameraMode) {
        self.camera.mode = mode;
    }

    /// Force a full repaint on the next frame.
    pub fn invalidate(&mut self) {
        self.backdrop.push(self.config.draw_bounds());
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn grid(&self) -> &Grid {
        &self.level.grid
    }

    pub fn player(&self) -> &Entity {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Entity {
        &mut self.player
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_offset(&self) -> Vec2 {
        self.camera.position()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
