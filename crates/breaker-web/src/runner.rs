use breaker_engine::{ClipRect, FixedTimestep, InputEvent, LevelRunner, LoadError, SimConfig};

/// Browser-side owner of a running level.
///
/// The page's frame loop calls [`WebRunner::tick`] with the elapsed time, then
/// reads the redraw rectangle straight out of wasm memory through
/// [`WebRunner::clip_ptr`].
pub struct WebRunner {
    runner: LevelRunner<FixedTimestep>,
    /// Stable storage for the last clip, read by JS after each tick.
    clip: ClipRect,
}

impl WebRunner {
    pub fn load(level_text: &str, config: SimConfig) -> Result<Self, LoadError> {
        Ok(Self {
            runner: LevelRunner::from_text(level_text, config)?,
            clip: ClipRect::default(),
        })
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.runner.push_input(event);
    }

    /// Run one frame. Returns whether anything needs repainting.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.clip = self.runner.frame(dt);
        !self.clip.is_empty()
    }

    pub fn clip_ptr(&self) -> *const f32 {
        self.clip.as_floats().as_ptr()
    }

    pub fn clip(&self) -> ClipRect {
        self.clip
    }

    pub fn draw_width(&self) -> f32 {
        self.runner.world().config().draw_width as f32
    }

    pub fn draw_height(&self) -> f32 {
        self.runner.world().config().draw_height as f32
    }

    /// Player box centre in world space, for the host's sprite pass.
    pub fn player_pos(&self) -> [f32; 2] {
        self.runner.world().player().motion.pos.to_array()
    }

    pub fn camera_pos(&self) -> [f32; 2] {
        self.runner.world().camera_offset().to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_requests_full_repaint() {
        let mut runner = WebRunner::load("psw_0_0 til_0_1_col", SimConfig::default()).unwrap();
        assert!(runner.tick(1.0 / 60.0));
        assert_eq!(runner.clip().w, 640.0);
        assert!(!runner.clip_ptr().is_null());
    }

    #[test]
    fn bad_level_reports_error() {
        assert!(WebRunner::load("nonsense_1_1", SimConfig::default()).is_err());
    }
}
