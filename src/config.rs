/// CORRIDOR Project
/// `File` config.rs
/// `Description` RON application configuration module
/// `Author` TioT2
/// `Last changed` 19.10.2026

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::math::Vec2f;
use crate::state::{Hud, DEFAULT_AMMO, DEFAULT_HEALTH, DEFAULT_SHOOT_FLASH_FRAMES};

/// Config loading error
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
} // enum ConfigError

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "config io error: {err}"),
            Self::Parse(err) => write!(f, "config parse error: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(err: ron::error::SpannedError) -> Self {
        Self::Parse(err)
    }
}

/// Window parameters
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
} // struct WindowConfig

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "RayCast Engine".to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct MapConfig {
    /// Map loaded at startup
    pub path: PathBuf,
    /// Maps bound to reload keys 1, 2, 3...
    pub slots: Vec<PathBuf>,
} // struct MapConfig

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("assets/map/map.txt"),
            slots: vec![
                PathBuf::from("assets/map/map.txt"),
                PathBuf::from("assets/map/map1.txt"),
                PathBuf::from("assets/map/map2.txt"),
            ],
        }
    }
}

/// Paths of every image the renderer needs
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AssetPaths {
    pub walls: [PathBuf; 4],
    pub floor: PathBuf,
    pub ceiling: PathBuf,
    pub ceiling_night: PathBuf,
    pub gun: PathBuf,
    pub gun_flare: PathBuf,
    pub alphabet: PathBuf,
    pub numbers: PathBuf,
} // struct AssetPaths

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            walls: [
                PathBuf::from("assets/textures/wall1.png"),
                PathBuf::from("assets/textures/wall2.png"),
                PathBuf::from("assets/textures/wall3.png"),
                PathBuf::from("assets/textures/wall4.png"),
            ],
            floor: PathBuf::from("assets/textures/floor.png"),
            ceiling: PathBuf::from("assets/textures/ceiling.png"),
            ceiling_night: PathBuf::from("assets/textures/ceiling_night.png"),
            gun: PathBuf::from("assets/textures/gun.png"),
            gun_flare: PathBuf::from("assets/textures/gun_flare.png"),
            alphabet: PathBuf::from("assets/text/alphabet.png"),
            numbers: PathBuf::from("assets/text/numbers.png"),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub position: (f32, f32),
    pub direction: (f32, f32),
    /// View plane magnitude
    pub field_of_view: f32,
    /// Cells per update tick
    pub movement_speed: f32,
    pub run_movement_speed: f32,
    /// Radians per update tick
    pub rotation_speed: f32,
} // struct CameraConfig

impl CameraConfig {
    pub fn position(&self) -> Vec2f {
        Vec2f::new(self.position.0, self.position.1)
    }

    pub fn direction(&self) -> Vec2f {
        Vec2f::new(self.direction.0, self.direction.1)
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: (1.5, 1.5),
            direction: (1.0, 0.0),
            field_of_view: 0.66,
            movement_speed: 0.05,
            run_movement_speed: 0.1,
            rotation_speed: 0.04,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    pub shoot_flash_frames: u32,
    /// Minimap cell side in pixels
    pub minimap_cell_size: usize,
    /// Walls further than this are drawn darkened
    pub fog_distance: f32,
    pub hud_sprite_scale: usize,
    pub health: u32,
    pub ammo: u32,
} // struct RenderConfig

impl RenderConfig {
    pub fn hud(&self) -> Hud {
        Hud { health: self.health, ammo: self.ammo }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            shoot_flash_frames: DEFAULT_SHOOT_FLASH_FRAMES,
            minimap_cell_size: 8,
            fog_distance: 6.0,
            hud_sprite_scale: 2,
            health: DEFAULT_HEALTH,
            ammo: DEFAULT_AMMO,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub map: MapConfig,
    pub assets: AssetPaths,
    pub camera: CameraConfig,
    pub render: RenderConfig,
    pub time_step_ms: TimeStep,
} // struct Config

/// Fixed update step in milliseconds
#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct TimeStep(pub u64);

impl Default for TimeStep {
    fn default() -> Self {
        TimeStep(16)
    }
}

impl TimeStep {
    pub fn as_duration(self) -> std::time::Duration {
        std::time::Duration::from_millis(self.0.max(1))
    }
}

impl Config {
    /// Config from RON text parsing function.
    /// Missing fields keep their defaults.
    pub fn from_ron_str(source: &str) -> Result<Config, ConfigError> {
        Ok(ron::from_str(source)?)
    } // fn from_ron_str

    /// Config from RON file loading function
    /// * `path` - config file path
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_ron_str(&contents)?;

        log::info!("loaded config {}", path.as_ref().display());
        Ok(config)
    } // fn load
} // impl Config


// file config.rs
