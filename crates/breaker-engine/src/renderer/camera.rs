use glam::Vec2;

use crate::core::rect::Rect;
use crate::extensions::{Easing, Tween};

/// Ticks the follow camera takes to catch up with a new target.
pub const FOLLOW_TICKS: u32 = 5;

/// How the camera moves each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraMode {
    /// Ease toward the followed target, never showing negative coordinates.
    Follow,
    /// Translate by a fixed step every tick.
    Scroll(Vec2),
    /// Hold position.
    Static,
}

/// The view onto the level. Position is the top-left corner in world space;
/// every component is tweened so follow motion eases instead of snapping.
#[derive(Debug, Clone)]
pub struct Camera {
    x: Tween,
    y: Tween,
    width: Tween,
    height: Tween,
    pub mode: CameraMode,
    moved: bool,
}

impl Camera {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        let mut camera = Self {
            x: Tween::new(x),
            y: Tween::new(y),
            width: Tween::new(width),
            height: Tween::new(height),
            mode: CameraMode::Follow,
            moved: false,
        };
        camera.set_position(x, y, width, height);
        camera
    }

    /// Jump to a position and size.
    pub fn set_position(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.x.set(x);
        self.y.set(y);
        self.width.set(width);
        self.height.set(height);
        for tween in [&mut self.x, &mut self.y, &mut self.width, &mut self.height] {
            tween.take_moved();
        }
        self.moved = true;
    }

    /// Steer toward `target` according to the current mode.
    pub fn track(&mut self, target: Vec2) {
        match self.mode {
            CameraMode::Follow => {
                let x = (target.x - self.width.value() / 2.0).max(0.0);
                let y = (target.y - self.height.value() / 2.0).max(0.0);
                if self.x.destination() != x {
                    self.x.move_to(Easing::CubicOut, x, FOLLOW_TICKS, 0);
                }
                if self.y.destination() != y {
                    self.y.move_to(Easing::CubicOut, y, FOLLOW_TICKS, 0);
                }
            }
            CameraMode::Scroll(step) => {
                self.x.set(self.x.value() + step.x);
                self.y.set(self.y.value() + step.y);
            }
            CameraMode::Static => {}
        }
    }

    /// Advance the tweens one tick.
    pub fn tick(&mut self) {
        self.x.tick();
        self.y.tick();
        self.width.tick();
        self.height.tick();
        let x = self.x.take_moved();
        let y = self.y.take_moved();
        let w = self.width.take_moved();
        let h = self.height.take_moved();
        self.moved |= x || y || w || h;
    }

    /// Whether the view changed since the last call. Clears the flag.
    pub fn take_moved(&mut self) -> bool {
        std::mem::take(&mut self.moved)
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x.value(), self.y.value())
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width.value(), self.height.value())
    }

    /// Visible area in world space.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.x.value() as i32,
            self.y.value() as i32,
            self.width.value() as i32,
            self.height.value() as i32,
        )
    }

    /// Convert a world-space box into screen space.
    pub fn to_screen(&self, world: &Rect) -> Rect {
        world.translated(-(self.x.value() as i32), -(self.y.value() as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_camera_reports_moved_once() {
        let mut cam = Camera::new(0.0, 0.0, 640.0, 360.0);
        assert!(cam.take_moved());
        cam.tick();
        assert!(!cam.take_moved());
    }

    #[test]
    fn follow_eases_to_target() {
        let mut cam = Camera::new(0.0, 0.0, 640.0, 360.0);
        cam.take_moved();
        cam.track(Vec2::new(1000.0, 500.0));
        cam.tick();
        assert!(cam.take_moved());
        let partway = cam.position();
        assert!(partway.x > 0.0 && partway.x < 680.0);

        for _ in 0..FOLLOW_TICKS {
            cam.tick();
        }
        assert_eq!(cam.position(), Vec2::new(680.0, 320.0));
    }

    #[test]
    fn follow_never_goes_negative() {
        let mut cam = Camera::new(0.0, 0.0, 640.0, 360.0);
        cam.take_moved();
        cam.track(Vec2::new(10.0, 10.0));
        cam.tick();
        assert_eq!(cam.position(), Vec2::ZERO);
        assert!(!cam.take_moved());
    }

    #[test]
    fn scroll_translates_each_tick() {
        let mut cam = Camera::new(0.0, 0.0, 640.0, 360.0);
        cam.mode = CameraMode::Scroll(Vec2::new(2.0, 0.0));
        cam.track(Vec2::ZERO);
        cam.track(Vec2::ZERO);
        assert_eq!(cam.position(), Vec2::new(4.0, 0.0));
    }

    #[test]
    fn static_camera_holds() {
        let mut cam = Camera::new(5.0, 5.0, 640.0, 360.0);
        cam.mode = CameraMode::Static;
        cam.take_moved();
        cam.track(Vec2::new(900.0, 900.0));
        cam.tick();
        assert_eq!(cam.position(), Vec2::new(5.0, 5.0));
        assert!(!cam.take_moved());
    }

    #[test]
    fn to_screen_offsets_by_camera() {
        let cam = Camera::new(100.0, 50.0, 640.0, 360.0);
        let screen = cam.to_screen(&Rect::new(150, 60, 10, 10));
        assert_eq!(screen, Rect::new(50, 10, 10, 10));
        assert_eq!(cam.bounds(), Rect::new(100, 50, 640, 360));
    }
}
