use crate::api::game::{SimConfig, World};
use crate::api::types::ClipRect;
use crate::core::time::{FixedTimestep, TickDriver};
use crate::error::LoadError;
use crate::input::controller::{Controller, KeyMap};
use crate::input::queue::{InputEvent, InputQueue};

/// Wires input, the tick driver and a [`World`] into a per-frame loop.
///
/// The host pushes key events as they arrive and calls [`LevelRunner::frame`]
/// once per rendered frame with the elapsed time.
#[derive(Debug)]
pub struct LevelRunner<D: TickDriver> {
    world: World,
    controller: Controller,
    input: InputQueue,
    driver: D,
    clip: ClipRect,
}

impl LevelRunner<FixedTimestep> {
    /// Load level text and run it in real time.
    pub fn from_text(text: &str, config: SimConfig) -> Result<Self, LoadError> {
        let world = World::load(text, config)?;
        let config = world.config();
        let driver = FixedTimestep::with_max_steps(config.fixed_dt, config.max_steps);
        Ok(Self::new(world, driver))
    }
}

impl<D: TickDriver> LevelRunner<D> {
    pub fn new(world: World, driver: D) -> Self {
        Self {
            world,
            controller: Controller::new(KeyMap::default()),
            input: InputQueue::new(),
            driver,
            clip: ClipRect::default(),
        }
    }

    /// Queue an input event for the next frame.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run the ticks owed for `dt` seconds and return the area to repaint.
    /// Returns an empty clip when no tick ran.
    pub fn frame(&mut self, dt: f32) -> ClipRect {
        self.controller.apply(&self.input.drain());

        let steps = self.driver.advance(dt);
        for _ in 0..steps {
            self.controller.update();
            self.world.tick(self.controller.intent());
        }

        self.clip = if steps > 0 {
            self.world.redraw_region().into()
        } else {
            ClipRect::default()
        };
        self.clip
    }

    /// Swap in a freshly loaded level. Trackers and entity state start over.
    pub fn replace_world(&mut self, world: World) {
        self.world = world;
        self.clip = ClipRect::default();
    }

    /// Clip produced by the last frame.
    pub fn clip(&self) -> &ClipRect {
        &self.clip
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}
