//! Tick-driven sprite animation.
//!
//! Each entity owns an [`Animator`] holding its named frame sequences. The
//! animator advances once per simulation tick and reports when the visible frame
//! changed, which is what decides whether the entity needs a redraw.

use std::collections::HashMap;

use glam::IVec2;

use crate::core::rect::Rect;

/// Poses an entity can be drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKey {
    Stand,
    Run,
    Stop,
    /// The stop row played once while reversing direction.
    Turn,
    JumpStart,
    JumpAir,
    JumpEnd,
}

/// Definition of a single animation sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDef {
    /// Frame indices as (col, row) pairs in the sprite sheet.
    pub frames: Vec<(i32, i32)>,
    /// Ticks each frame stays on screen.
    pub ticks_per_frame: u32,
    /// Whether to loop when reaching the end.
    pub looping: bool,
    /// Offset of the drawn sprite from the hitbox's top-left corner.
    pub offset: IVec2,
    /// Drawn size. `None` draws at the hitbox size.
    pub size: Option<IVec2>,
}

impl AnimationDef {
    /// Consecutive columns of one sheet row.
    pub fn horizontal_strip(row: i32, start_col: i32, frame_count: i32, ticks_per_frame: u32) -> Self {
        let frames = (0..frame_count).map(|i| (start_col + i, row)).collect();
        Self::from_frames(frames, ticks_per_frame, true)
    }

    pub fn from_frames(frames: Vec<(i32, i32)>, ticks_per_frame: u32, looping: bool) -> Self {
        Self {
            frames,
            ticks_per_frame: ticks_per_frame.max(1),
            looping,
            offset: IVec2::ZERO,
            size: None,
        }
    }

    /// Draw the sprite at `size`, shifted by `offset` from the hitbox corner.
    pub fn with_visual(mut self, offset: IVec2, size: IVec2) -> Self {
        self.offset = offset;
        self.size = Some(size);
        self
    }

    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Animation state for an entity.
#[derive(Debug, Clone)]
pub struct Animator {
    animations: HashMap<AnimationKey, AnimationDef>,
    current: AnimationKey,
    frame_index: usize,
    /// Ticks spent on the current frame.
    frame_timer: u32,
    playing: bool,
    moved: bool,
}

impl Animator {
    pub fn new(initial: AnimationKey) -> Self {
        Self {
            animations: HashMap::new(),
            current: initial,
            frame_index: 0,
            frame_timer: 0,
            playing: true,
            moved: false,
        }
    }

    pub fn with(mut self, key: AnimationKey, def: AnimationDef) -> Self {
        self.add(key, def);
        self
    }

    pub fn add(&mut self, key: AnimationKey, def: AnimationDef) {
        self.animations.insert(key, def);
    }

    /// Switch to `key` from its first frame. Re-selecting the playing animation
    /// does nothing, so callers may pick a pose every tick.
    pub fn play(&mut self, key: AnimationKey) {
        if self.current == key {
            return;
        }
        self.current = key;
        self.frame_index = 0;
        self.frame_timer = 0;
        self.playing = true;
        self.moved = true;
    }

    pub fn current(&self) -> AnimationKey {
        self.current
    }

    pub fn current_def(&self) -> Option<&AnimationDef> {
        self.animations.get(&self.current)
    }

    /// Sheet cell of the frame on screen.
    pub fn current_frame(&self) -> Option<(i32, i32)> {
        self.current_def()
            .and_then(|def| def.frames.get(self.frame_index).copied())
    }

    pub fn is_finished(&self) -> bool {
        match self.current_def() {
            Some(def) => !def.looping && self.frame_index + 1 >= def.frames.len(),
            None => true,
        }
    }

    /// Advance one tick. Returns true if the frame changed.
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        let Some(def) = self.animations.get(&self.current) else {
            return false;
        };
        if def.frames.len() < 2 {
            return false;
        }

        self.frame_timer += 1;
        if self.frame_timer < def.ticks_per_frame {
            return false;
        }
        self.frame_timer = 0;
        self.frame_index += 1;
        if self.frame_index >= def.frames.len() {
            if def.looping {
                self.frame_index = 0;
            } else {
                self.frame_index = def.frames.len() - 1;
                self.playing = false;
                return false;
            }
        }
        true
    }

    /// Whether the pose changed since the last call. Clears the flag.
    pub fn take_moved(&mut self) -> bool {
        std::mem::take(&mut self.moved)
    }

    /// Box the current frame is drawn in, given the entity's hitbox.
    pub fn bounds(&self, hitbox: &Rect) -> Rect {
        let Some(def) = self.current_def() else {
            return *hitbox;
        };
        let size = def
            .size
            .unwrap_or(IVec2::new(hitbox.width(), hitbox.height()));
        Rect::new(
            hitbox.x() + def.offset.x,
            hitbox.y() + def.offset.y,
            size.x,
            size.y,
        )
    }
}

/// Sheet cell size of the protagonist's sprites.
pub const PROTAGONIST_SPRITE: IVec2 = IVec2::new(40, 40);
/// Sprite offset that centres the protagonist's feet on its hitbox.
pub const PROTAGONIST_OFFSET: IVec2 = IVec2::new(-11, -6);

/// The protagonist's poses, one sheet row each.
pub fn protagonist_animator() -> Animator {
    let strip = |row, frames, ticks| {
        AnimationDef::horizontal_strip(row, 0, frames, ticks)
            .with_visual(PROTAGONIST_OFFSET, PROTAGONIST_SPRITE)
    };
    Animator::new(AnimationKey::JumpEnd)
        .with(AnimationKey::Stand, strip(0, 4, 10))
        .with(AnimationKey::Run, strip(1, 8, 4))
        .with(AnimationKey::Stop, strip(2, 3, 4))
        .with(AnimationKey::Turn, strip(2, 3, 4).with_looping(false))
        .with(AnimationKey::JumpStart, strip(3, 2, 6))
        .with(AnimationKey::JumpAir, strip(4, 2, 6))
        .with(AnimationKey::JumpEnd, strip(5, 2, 6).with_looping(false))
}
