//! Maps raw key state onto the abstract inputs an entity responds to.

use std::collections::{HashMap, HashSet};

use crate::input::queue::InputEvent;

/// Abstract inputs a controller reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputType {
    Up,
    Down,
    Left,
    Right,
    Attack,
}

impl InputType {
    pub const ALL: [InputType; 5] = [
        InputType::Up,
        InputType::Down,
        InputType::Left,
        InputType::Right,
        InputType::Attack,
    ];

    fn index(self) -> usize {
        match self {
            InputType::Up => 0,
            InputType::Down => 1,
            InputType::Left => 2,
            InputType::Right => 3,
            InputType::Attack => 4,
        }
    }
}

/// Held inputs sampled for one tick. This is all the resolver sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputIntent {
    pub left: bool,
    pub right: bool,
    /// Jump.
    pub up: bool,
    /// Not read by collision.
    pub attack: bool,
}

/// Key codes bound to each input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    bindings: HashMap<InputType, u32>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// W/A/S/D movement, J to attack.
    pub fn wasd() -> Self {
        Self::new()
            .with(InputType::Up, 87)
            .with(InputType::Left, 65)
            .with(InputType::Down, 83)
            .with(InputType::Right, 68)
            .with(InputType::Attack, 74)
    }

    pub fn with(mut self, input: InputType, key_code: u32) -> Self {
        self.bind(input, key_code);
        self
    }

    pub fn bind(&mut self, input: InputType, key_code: u32) {
        self.bindings.insert(input, key_code);
    }

    pub fn key_for(&self, input: InputType) -> Option<u32> {
        self.bindings.get(&input).copied()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::wasd()
    }
}

/// Player controller. Tracks which keys are down and, once per tick, turns that into
/// pressed / held / released edges for each [`InputType`].
#[derive(Debug, Clone)]
pub struct Controller {
    keymap: KeyMap,
    keys_down: HashSet<u32>,
    held: [bool; 5],
    previous: [bool; 5],
}

impl Controller {
    pub fn new(keymap: KeyMap) -> Self {
        Self {
            keymap,
            keys_down: HashSet::new(),
            held: [false; 5],
            previous: [false; 5],
        }
    }

    pub fn keymap_mut(&mut self) -> &mut KeyMap {
        &mut self.keymap
    }

    /// Fold raw key events into the set of keys currently down.
    pub fn apply(&mut self, events: &[InputEvent]) {
        for event in events {
            match *event {
                InputEvent::KeyDown { key_code } => {
                    self.keys_down.insert(key_code);
                }
                InputEvent::KeyUp { key_code } => {
                    self.keys_down.remove(&key_code);
                }
            }
        }
    }

    /// Sample the key state. Call exactly once per tick.
    pub fn update(&mut self) {
        self.previous = self.held;
        for input in InputType::ALL {
            self.held[input.index()] = self
                .keymap
                .key_for(input)
                .is_some_and(|key| self.keys_down.contains(&key));
        }
    }

    pub fn is_held(&self, input: InputType) -> bool {
        self.held[input.index()]
    }

    /// Became held on the latest update.
    pub fn is_pressed(&self, input: InputType) -> bool {
        self.held[input.index()] && !self.previous[input.index()]
    }

    /// Stopped being held on the latest update.
    pub fn is_released(&self, input: InputType) -> bool {
        !self.held[input.index()] && self.previous[input.index()]
    }

    pub fn intent(&self) -> InputIntent {
        InputIntent {
            left: self.is_held(InputType::Left),
            right: self.is_held(InputType::Right),
            up: self.is_held(InputType::Up),
            attack: self.is_held(InputType::Attack),
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(KeyMap::default())
    }
}
