/// CORRIDOR Project
/// `File` lib.rs
/// `Description` Grid ray casting renderer library module
/// `Author` TioT2
/// `Last changed` 19.10.2026

pub mod math;
pub mod texture;
pub mod surface;
pub mod map;
pub mod camera;
pub mod font;
pub mod state;
pub mod raycaster;
pub mod backend;
pub mod config;
pub mod input;
pub mod timer;
pub mod game;

pub use backend::Backend;
pub use camera::Camera;
pub use config::Config;
pub use game::Game;
pub use map::Map;
pub use raycaster::RayCaster;
pub use state::RenderState;

// file lib.rs
