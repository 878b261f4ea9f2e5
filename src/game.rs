/// CORRIDOR Project
/// `File` game.rs
/// `Description` Update, trigger and render glue module
/// `Author` TioT2
/// `Last changed` 19.10.2026

use std::path::Path;

use crate::backend::{Backend, BackendError};
use crate::camera::{Camera, MoveDirection, SideDirection};
use crate::config::Config;
use crate::input::{Intents, Trigger};
use crate::map::{Map, MapLoadingError};
use crate::raycaster::{InitError, RayCaster};
use crate::state::RenderState;

/// Game representation structure
pub struct Game {
    config: Config,
    camera: Camera,
    map: Map,
    raycaster: RayCaster,
    state: RenderState,
} // struct Game

impl Game {
    /// Game create function
    /// * `config` - application config
    /// * `map` - start map
    /// * `backend` - backend to load textures with
    pub fn new<B: Backend + ?Sized>(config: Config, map: Map, backend: &mut B) -> Result<Self, InitError> {
        let raycaster = RayCaster::new(backend, &config.assets, &config.render, config.camera.field_of_view)?;

        let mut camera = Camera::new(config.camera.position(), config.camera.direction(), config.camera.field_of_view);
        camera.movement_speed = config.camera.movement_speed;
        camera.rotation_speed = config.camera.rotation_speed;
        Self::place_camera(&mut camera, &map);

        let state = RenderState::new(config.render.shoot_flash_frames, config.render.hud());

        Ok(Self { config, camera, map, raycaster, state })
    } // fn new

    /// Camera out of walls moving function
    fn place_camera(camera: &mut Camera, map: &Map) {
        if map.is_solid_at(camera.position) {
            if let Some(position) = map.find_empty_cell() {
                log::info!("camera moved from {} to {}", camera.position, position);
                camera.position = position;
            } else {
                log::warn!("map has no empty cells");
            }
        }
    } // fn place_camera

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    /// HUD values are written here by external game logic
    pub fn state_mut(&mut self) -> &mut RenderState {
        &mut self.state
    }

    /// Single fixed step update function
    pub fn update(&mut self, intents: &Intents) {
        self.camera.movement_speed = if intents.running {
            self.config.camera.run_movement_speed
        } else {
            self.config.camera.movement_speed
        };

        if intents.move_forward {
            self.camera.walk(MoveDirection::Forward, &self.map);
        }
        if intents.move_backward {
            self.camera.walk(MoveDirection::Backward, &self.map);
        }
        if intents.turn_left {
            self.camera.turn(SideDirection::Left);
        }
        if intents.turn_right {
            self.camera.turn(SideDirection::Right);
        }
        if intents.strafe_left {
            self.camera.strafe(SideDirection::Left, &self.map);
        }
        if intents.strafe_right {
            self.camera.strafe(SideDirection::Right, &self.map);
        }

        if intents.shoot {
            self.trigger(Trigger::Shoot);
        }
    } // fn update

    /// Discrete event handling function
    /// * Returns false if the game should stop
    pub fn trigger(&mut self, trigger: Trigger) -> bool {
        match trigger {
            Trigger::Toggle(toggle) => {
                self.state.toggle(toggle);
            }
            Trigger::Shoot => {
                if self.state.shoot() {
                    log::debug!("shoot");
                }
            }
            Trigger::ReloadMap(slot) => match self.config.map.slots.get(slot).cloned() {
                Some(path) => {
                    if let Err(err) = self.load_map(&path) {
                        log::error!("cannot reload map {}: {err}", path.display());
                    }
                }
                None => log::warn!("no map bound to slot {slot}"),
            },
            Trigger::Quit => return false,
        }

        true
    } // fn trigger

    /// Map replacing function. Current map is kept on failure.
    pub fn load_map(&mut self, path: &Path) -> Result<(), MapLoadingError> {
        self.replace_map(Map::load(path)?);
        Ok(())
    } // fn load_map

    /// Map replacing function
    pub fn replace_map(&mut self, map: Map) {
        self.map = map;
        Self::place_camera(&mut self.camera, &self.map);
    } // fn replace_map

    /// Frame rendering and presenting function
    pub fn render<B: Backend + ?Sized>(&mut self, backend: &mut B) -> Result<(), BackendError> {
        self.state = self.raycaster.render(&self.camera, &self.map, self.state);
        self.raycaster.present(backend)
    } // fn render
} // impl Game

// file game.rs
