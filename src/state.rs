/// CORRIDOR Project
/// `File` state.rs
/// `Description` Render toggles, shoot flash and HUD values module
/// `Author` TioT2
/// `Last changed` 19.10.2026

/// Default shoot flash duration in rendered frames
pub const DEFAULT_SHOOT_FLASH_FRAMES: u32 = 8;
pub const DEFAULT_HEALTH: u32 = 100;
pub const DEFAULT_AMMO: u32 = 20;

/// One-shot gun flare timer
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ShootFlash {
    /// Flash duration in frames
    duration: u32,
    /// Frames the flare was already shown for, None if inactive
    elapsed: Option<u32>,
} // struct ShootFlash

impl ShootFlash {
    pub fn new(duration: u32) -> Self {
        Self { duration, elapsed: None }
    }

    /// Flash start function. Ignored while flash is shown.
    /// * Returns true if flash started
    pub fn trigger(&mut self) -> bool {
        if self.elapsed.is_some() || self.duration == 0 {
            return false;
        }

        self.elapsed = Some(0);
        true
    } // fn trigger

    pub fn is_active(&self) -> bool {
        self.elapsed.is_some()
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Frame counting function, call once per rendered frame
    pub fn tick(&mut self) {
        if let Some(elapsed) = self.elapsed {
            self.elapsed = if elapsed + 1 >= self.duration {
                None
            } else {
                Some(elapsed + 1)
            };
        }
    } // fn tick
} // impl ShootFlash

/// Heads-up display values
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Hud {
    pub health: u32,
    pub ammo: u32,
} // struct Hud

impl Default for Hud {
    fn default() -> Self {
        Self { health: DEFAULT_HEALTH, ammo: DEFAULT_AMMO }
    }
}

/// Toggle that can be flipped by a discrete event
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Toggle {
    Minimap,
    MinimapRays,
    NightMode,
    InverseColor,
} // enum Toggle

/// Everything mutable the renderer reads besides camera and map.
/// Passed into frame rendering and returned back advanced by one frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RenderState {
    pub minimap: bool,
    /// Draw cast rays on minimap
    pub minimap_rays: bool,
    pub night_mode: bool,
    pub inverse_color: bool,
    pub shoot_flash: ShootFlash,
    pub hud: Hud,
} // struct RenderState

impl Default for RenderState {
    fn default() -> Self {
        Self::new(DEFAULT_SHOOT_FLASH_FRAMES, Hud::default())
    }
}

impl RenderState {
    /// Render state create function
    /// * `shoot_flash_frames` - flare display duration
    /// * `hud` - initial HUD values
    pub fn new(shoot_flash_frames: u32, hud: Hud) -> Self {
        Self {
            minimap: false,
            minimap_rays: false,
            night_mode: false,
            inverse_color: false,
            shoot_flash: ShootFlash::new(shoot_flash_frames),
            hud,
        }
    } // fn new

    /// Toggle flipping function
    /// * Returns new toggle value
    pub fn toggle(&mut self, toggle: Toggle) -> bool {
        let value = match toggle {
            Toggle::Minimap => &mut self.minimap,
            Toggle::MinimapRays => &mut self.minimap_rays,
            Toggle::NightMode => &mut self.night_mode,
            Toggle::InverseColor => &mut self.inverse_color,
        };
        *value = !*value;

        log::debug!("{toggle:?} set to {value}");
        *value
    } // fn toggle

    /// Shoot trigger function
    pub fn shoot(&mut self) -> bool {
        self.shoot_flash.trigger()
    }

    pub fn set_health(&mut self, health: u32) {
        self.hud.health = health;
    }

    pub fn set_ammo(&mut self, ammo: u32) {
        self.hud.ammo = ammo;
    }
} // impl RenderState


// file state.rs
