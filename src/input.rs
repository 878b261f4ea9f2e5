/// CORRIDOR Project
/// `File` input.rs
/// `Description` Input impementation module
/// `Author` TioT2
/// `Last changed` 19.10.2026

use std::collections::BTreeMap;

use crate::state::Toggle;

/// Single key state
#[derive(Copy, Clone, PartialEq, Eq)]
struct KeyState {
    /// Is key pressed
    pub pressed: bool,
    /// Was key pressed down since last clear, even if already released
    pub clicked: bool,
} // struct KState

/// Keycode representation structure
pub type KeyCode = winit::keyboard::KeyCode;

/// Input state representation structure
pub struct State {
    keys: BTreeMap<KeyCode, KeyState>,
} // struct State

impl State {
    /// Key state getting function
    /// * `key` - keycode to get state of
    /// * Returns key state
    fn get_key_state(&self, key: KeyCode) -> KeyState {
        if let Some(state) = self.keys.get(&key) {
            *state
        } else {
            KeyState { pressed: false, clicked: false }
        }
    } // fn get_key_state

    /// Is key pressed checking function
    /// * `key` - key to check state of
    /// * Returns true if key is pressed
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.get_key_state(key).pressed
    } // fn is_key_pressed

    /// Is key clicked checking function
    /// * `key` - key to check state of
    /// * Returns true if key's clicked
    pub fn is_key_clicked(&self, key: KeyCode) -> bool {
        self.get_key_state(key).clicked
    } // fn is_key_clicked
} // impl State

// Input getting function
pub struct Input {
    state: State,
} // struct Input

impl Input {
    /// New input construction function
    /// * Returns newly-created input
    pub fn new() -> Self {
        Self {
            state: State {
                keys: BTreeMap::new(),
            },
        }
    } // fn new

    /// Key state change callback
    /// * `key` - keycode
    /// * `is_pressed` - changed key state
    pub fn on_key_state_change(&mut self, key: KeyCode, is_pressed: bool) {
        if let Some(key_state) = self.state.keys.get_mut(&key) {
            // key repeat is not a click
            if !key_state.pressed && is_pressed {
                key_state.clicked = true;
            }
            key_state.pressed = is_pressed;
        } else {
            self.state.keys.insert(key, KeyState { pressed: is_pressed, clicked: is_pressed });
        }
    } // fn on_key_state_change

    // Changed parameters clearing function
    pub fn clear_changed(&mut self) {
        for (_, state) in &mut self.state.keys {
            state.clicked = false;
        }
    } // fn clear_changed

    /// State getting function
    /// * Returns input state reference
    pub fn get_state<'a>(&'a self) -> &'a State {
        &self.state
    } // fn get_state
} // impl Input

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

/// Held-key movement intents, sampled every update tick
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Intents {
    pub move_forward: bool,
    pub move_backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub running: bool,
    pub shoot: bool,
} // struct Intents

impl Intents {
    /// Intents from keyboard state getting function
    pub fn from_state(state: &State) -> Self {
        Self {
            move_forward: state.is_key_pressed(KeyCode::ArrowUp) || state.is_key_pressed(KeyCode::KeyW),
            move_backward: state.is_key_pressed(KeyCode::ArrowDown) || state.is_key_pressed(KeyCode::KeyS),
            turn_left: state.is_key_pressed(KeyCode::ArrowLeft),
            turn_right: state.is_key_pressed(KeyCode::ArrowRight),
            strafe_left: state.is_key_pressed(KeyCode::KeyA),
            strafe_right: state.is_key_pressed(KeyCode::KeyD),
            running: state.is_key_pressed(KeyCode::ShiftLeft),
            shoot: state.is_key_pressed(KeyCode::Space),
        }
    } // fn from_state
} // impl Intents

/// Discrete event
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Trigger {
    Toggle(Toggle),
    Shoot,
    /// Reload map bound to slot
    ReloadMap(usize),
    Quit,
} // enum Trigger

const TRIGGER_KEYS: [(KeyCode, Trigger); 8] = [
    (KeyCode::KeyM, Trigger::Toggle(Toggle::Minimap)),
    (KeyCode::KeyB, Trigger::Toggle(Toggle::MinimapRays)),
    (KeyCode::KeyN, Trigger::Toggle(Toggle::NightMode)),
    (KeyCode::KeyI, Trigger::Toggle(Toggle::InverseColor)),
    (KeyCode::Digit1, Trigger::ReloadMap(0)),
    (KeyCode::Digit2, Trigger::ReloadMap(1)),
    (KeyCode::Digit3, Trigger::ReloadMap(2)),
    (KeyCode::Escape, Trigger::Quit),
];

/// Triggers of keys clicked since last clear_changed
pub fn collect_triggers(state: &State) -> Vec<Trigger> {
    TRIGGER_KEYS
        .iter()
        .filter(|(key, _)| state.is_key_clicked(*key))
        .map(|(_, trigger)| *trigger)
        .collect()
} // fn collect_triggers


// file input.rs
