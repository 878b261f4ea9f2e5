/// CORRIDOR Project
/// `File` raycaster.rs
/// `Description` Grid ray casting renderer module
/// `Author` TioT2
/// `Last changed` 19.10.2026

use std::path::{Path, PathBuf};

use crate::backend::{Backend, BackendError};
use crate::camera::Camera;
use crate::config::{AssetPaths, RenderConfig};
use crate::font::GlyphFont;
use crate::map::Map;
use crate::math::*;
use crate::state::RenderState;
use crate::surface::Surface;
use crate::texture::{Texture, TextureLoadingError, RGB_MASK};

/// Halves every channel after a one bit right shift
pub const DARKEN_MASK: u32 = 0x7F7F7F;

/// Maximal count of fog darkening steps
pub const MAX_FOG_LEVELS: u32 = 3;

/// Minimap top left corner
pub const MINIMAP_ANCHOR: Vec2si = Vec2si { x: 8, y: 8 };

/// Ray direction components below this are treated as zero
const RAY_EPSILON: f32 = 1e-9;

/// Walls closer than this are drawn as if they were this close
const MIN_WALL_DISTANCE: f32 = 1e-4;

const HUD_MARGIN: isize = 8;

const MINIMAP_EMPTY_COLOR: u32 = 0x202020;
const MINIMAP_WALL_COLORS: [u32; 4] = [0xB0B0B0, 0xB06040, 0x4060B0, 0x40A060];
const MINIMAP_PLAYER_COLOR: u32 = 0xFFFF00;
const MINIMAP_VIEW_COLOR: u32 = 0xFFFFFF;
const MINIMAP_RAY_COLOR: u32 = 0xFF4040;

/// Grid boundary kind crossed by ray last
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WallSide {
    /// x boundary
    Vertical,
    /// y boundary
    Horizontal,
} // enum WallSide

/// Result of single column ray cast
#[derive(Copy, Clone, Debug)]
pub struct RayHit {
    /// Unnormalized ray direction
    pub ray: Vec2f,
    /// Hit cell
    pub cell: Vec2si,
    pub side: WallSide,
    /// Hit cell code, 1..=4
    pub code: u8,
    /// Fisheye corrected distance
    pub distance: f32,
} // struct RayHit

impl RayHit {
    /// World hit point getting function
    pub fn hit_point(&self, origin: Vec2f) -> Vec2f {
        origin + self.ray * self.distance
    } // fn hit_point
}

/// Renderer initialization error
#[derive(Debug)]
pub enum InitError {
    InvalidScreenSize(Ext2su),
    Texture {
        path: PathBuf,
        error: TextureLoadingError,
    },
} // enum InitError

impl std::fmt::Display for InitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidScreenSize(ext) => write!(f, "invalid screen size {}x{}", ext.width, ext.height),
            Self::Texture { path, error } => write!(f, "cannot load {}: {error}", path.display()),
        }
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Texture { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Ray direction for screen column getting function.
/// Sweeps from direction - plane to direction + plane across the screen.
pub fn ray_direction(camera: &Camera, x: usize, screen_width: usize) -> Vec2f {
    let camera_x = 2.0 * x as f32 / screen_width as f32 - 1.0;

    camera.direction + camera.plane * camera_x
} // fn ray_direction

/// Distance along ray between neighbour grid lines, per axis
pub fn ray_step_distance(ray: Vec2f) -> Vec2f {
    let step = |component: f32| {
        if component.abs() < RAY_EPSILON {
            f32::INFINITY
        } else {
            (1.0 / component).abs()
        }
    };

    Vec2f { x: step(ray.x), y: step(ray.y) }
} // fn ray_step_distance

/// Step direction and distance to first grid boundaries calculation function
/// * `map_square` - cell containing ray origin
/// * `origin` - ray origin
/// * `ray` - ray direction
/// * `ray_step` - ray_step_distance(ray)
/// * Returns (step direction, initial side distance)
pub fn calculate_initial_step(map_square: Vec2si, origin: Vec2f, ray: Vec2f, ray_step: Vec2f) -> (Vec2si, Vec2f) {
    let axis = |cell: isize, origin: f32, ray: f32, ray_step: f32| -> (isize, f32) {
        let step = if ray < 0.0 { -1 } else { 1 };

        // Never multiply infinity by a possibly zero offset
        if ray_step.is_infinite() {
            return (step, f32::INFINITY);
        }

        if step < 0 {
            (step, (origin - cell as f32) * ray_step)
        } else {
            (step, (cell as f32 + 1.0 - origin) * ray_step)
        }
    };

    let (step_x, side_x) = axis(map_square.x, origin.x, ray.x, ray_step.x);
    let (step_y, side_y) = axis(map_square.y, origin.y, ray.y, ray_step.y);

    (Vec2si { x: step_x, y: step_y }, Vec2f { x: side_x, y: side_y })
} // fn calculate_initial_step

/// DDA grid traversal function.
/// Cells outside of map count as walls of code 1, so traversal always terminates.
/// * Returns last crossed side and hit cell code
pub fn perform_dda(step: Vec2si, ray_step: Vec2f, map: &Map, map_square: &mut Vec2si, side_distance: &mut Vec2f) -> (WallSide, u8) {
    loop {
        let side = if side_distance.x < side_distance.y {
            side_distance.x += ray_step.x;
            map_square.x += step.x;
            WallSide::Vertical
        } else {
            side_distance.y += ray_step.y;
            map_square.y += step.y;
            WallSide::Horizontal
        };

        match map.get(map_square.x, map_square.y) {
            Some(0) => {}
            Some(code) => return (side, code),
            None => return (side, 1),
        }
    }
} // fn perform_dda

/// Perpendicular (fisheye-free) wall distance calculation function
pub fn calculate_wall_distance(side: WallSide, map_square: Vec2si, origin: Vec2f, step: Vec2si, ray: Vec2f) -> f32 {
    let distance = match side {
        WallSide::Vertical => (map_square.x as f32 - origin.x + (1 - step.x) as f32 / 2.0) / ray.x,
        WallSide::Horizontal => (map_square.y as f32 - origin.y + (1 - step.y) as f32 / 2.0) / ray.y,
    };

    distance.max(MIN_WALL_DISTANCE)
} // fn calculate_wall_distance

/// Single ray casting function
/// * `origin` - ray origin, map cell units
/// * `ray` - ray direction
/// * `map` - map to cast ray in
pub fn cast_ray(origin: Vec2f, ray: Vec2f, map: &Map) -> RayHit {
    let mut map_square = Vec2si {
        x: origin.x.floor() as isize,
        y: origin.y.floor() as isize,
    };
    let ray_step = ray_step_distance(ray);
    let (step, mut side_distance) = calculate_initial_step(map_square, origin, ray, ray_step);
    let (side, code) = perform_dda(step, ray_step, map, &mut map_square, &mut side_distance);

    RayHit {
        ray,
        cell: map_square,
        side,
        code,
        distance: calculate_wall_distance(side, map_square, origin, step, ray),
    }
} // fn cast_ray

/// Wall column height in pixels
pub fn column_height(screen_height: usize, wall_distance: f32) -> i32 {
    (screen_height as f32 / wall_distance.max(MIN_WALL_DISTANCE)) as i32
} // fn column_height

/// Lowest and highest pixel of column to fill calculation function
/// * Returns inclusive (draw start, draw end), both in [0, screen_height)
pub fn calculate_draw_locations(column_height: i32, screen_height: usize) -> (usize, usize) {
    let half_screen = screen_height as i64 / 2;
    let half_column = column_height as i64 / 2;
    let last = (screen_height as i64 - 1).max(0);

    let start = (half_screen - half_column).clamp(0, last);
    let end = (half_screen + half_column).clamp(0, last);

    (start as usize, end as usize)
} // fn calculate_draw_locations

/// Distance fog applying function
/// * `texel` - pixel to shade
/// * `distance` - wall distance
/// * `fog_distance` - distance of every next darkening step
/// * Returns 0x00RRGGBB shaded pixel
pub fn shade_texel_by_distance(texel: u32, distance: f32, fog_distance: f32) -> u32 {
    let levels = if fog_distance > 0.0 {
        ((distance / fog_distance) as u32).min(MAX_FOG_LEVELS)
    } else {
        0
    };

    (0..levels).fold(texel & RGB_MASK, |texel, _| (texel >> 1) & DARKEN_MASK)
} // fn shade_texel_by_distance

/// Every channel inverting function
pub fn invert_colors(pixels: &mut [u32]) {
    for pixel in pixels {
        *pixel ^= RGB_MASK;
    }
} // fn invert_colors

/// Ray casting renderer
pub struct RayCaster {
    surface: Surface,
    wall_textures: [Texture; 4],
    floor_texture: Texture,
    ceiling_texture: Texture,
    ceiling_night_texture: Texture,
    gun_texture: Texture,
    gun_flare_texture: Texture,
    font: GlyphFont,

    hits: Vec<RayHit>,
    /// Minimap view edge length in pixels
    camera_line_distance: f32,
    minimap_cell_size: usize,
    fog_distance: f32,
    hud_sprite_scale: usize,
} // struct RayCaster

impl RayCaster {
    /// Renderer initialization function
    /// * `backend` - backend to decode textures with and to take screen size from
    /// * `assets` - texture paths
    /// * `config` - render parameters
    /// * `field_of_view` - camera view plane magnitude, used for minimap
    pub fn new<B: Backend + ?Sized>(backend: &mut B, assets: &AssetPaths, config: &RenderConfig, field_of_view: f32) -> Result<Self, InitError> {
        let ext = backend.get_screen_dimensions();
        if ext.width == 0 || ext.height == 0 {
            return Err(InitError::InvalidScreenSize(ext));
        }

        let mut load = |path: &Path| {
            backend
                .decode_texture(path)
                .map_err(|error| InitError::Texture { path: path.to_path_buf(), error })
        };

        let wall_textures = [
            load(assets.walls[0].as_path())?,
            load(assets.walls[1].as_path())?,
            load(assets.walls[2].as_path())?,
            load(assets.walls[3].as_path())?,
        ];
        let floor_texture = load(assets.floor.as_path())?;
        let ceiling_texture = load(assets.ceiling.as_path())?;
        let ceiling_night_texture = load(assets.ceiling_night.as_path())?;
        let gun_texture = load(assets.gun.as_path())?;
        let gun_flare_texture = load(assets.gun_flare.as_path())?;
        let alphabet = load(assets.alphabet.as_path())?;
        let numbers = load(assets.numbers.as_path())?;

        let font = GlyphFont::from_sheets(&alphabet, &numbers).map_err(|error| InitError::Texture {
            path: assets.alphabet.clone(),
            error,
        })?;

        Ok(Self {
            surface: Surface::new(ext.width, ext.height),
            wall_textures,
            floor_texture,
            ceiling_texture,
            ceiling_night_texture,
            gun_texture,
            gun_flare_texture,
            font,
            hits: Vec::with_capacity(ext.width),
            camera_line_distance: config.minimap_cell_size as f32 * (1.0 + field_of_view * field_of_view).sqrt(),
            minimap_cell_size: config.minimap_cell_size.max(1),
            fog_distance: config.fog_distance,
            hud_sprite_scale: config.hud_sprite_scale.max(1),
        })
    } // fn new

    pub fn get_surface(&self) -> &Surface {
        &self.surface
    }

    /// Rays cast during last frame, one per screen column
    pub fn hits(&self) -> &[RayHit] {
        &self.hits
    }

    /// Frame rendering function
    /// * `camera` - viewer
    /// * `map` - map to render
    /// * `state` - toggles, shoot flash and HUD values
    /// * Returns state advanced by one frame
    pub fn render(&mut self, camera: &Camera, map: &Map, mut state: RenderState) -> RenderState {
        self.draw_top(state.night_mode);
        self.draw_bottom();
        self.draw_walls(camera, map);

        if state.minimap {
            self.draw_map(camera, map, state.minimap_rays);
        }

        self.draw_ui(&state);
        state.shoot_flash.tick();

        if state.inverse_color {
            invert_colors(self.surface.get_data_mut());
        }

        state
    } // fn render

    /// Last frame presenting function
    pub fn present<B: Backend + ?Sized>(&self, backend: &mut B) -> Result<(), BackendError> {
        let ext = self.surface.get_extent();

        backend.present_buffer(self.surface.get_data(), ext.width, ext.height)
    } // fn present

    /// Stretched texture to rows [y_begin, y_end) drawing function
    fn fill_rows(surface: &mut Surface, texture: &Texture, y_begin: usize, y_end: usize) {
        let ext = surface.get_extent();
        let span = (y_end - y_begin).max(1);
        let tex = texture.get_extent();

        for y in y_begin..y_end {
            let tex_y = (y - y_begin) * tex.height / span;
            let row = &mut surface.get_data_mut()[y * ext.width..(y + 1) * ext.width];

            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = texture.sample(x * tex.width / ext.width, tex_y) & RGB_MASK;
            }
        }
    } // fn fill_rows

    /// Ceiling drawing function
    fn draw_top(&mut self, night_mode: bool) {
        let texture = if night_mode {
            &self.ceiling_night_texture
        } else {
            &self.ceiling_texture
        };
        let half = self.surface.get_extent().height / 2;

        Self::fill_rows(&mut self.surface, texture, 0, half);
    } // fn draw_top

    /// Floor drawing function
    fn draw_bottom(&mut self) {
        let ext = self.surface.get_extent();

        Self::fill_rows(&mut self.surface, &self.floor_texture, ext.height / 2, ext.height);
    } // fn draw_bottom

    /// Every screen column casting and drawing function
    fn draw_walls(&mut self, camera: &Camera, map: &Map) {
        let ext = self.surface.get_extent();

        self.hits.clear();
        for x in 0..ext.width {
            let hit = cast_ray(camera.position, ray_direction(camera, x, ext.width), map);
            let height = column_height(ext.height, hit.distance);
            let (draw_start, draw_end) = calculate_draw_locations(height, ext.height);

            self.draw_textured_column(camera.position, x, &hit, height, draw_start, draw_end);
            self.hits.push(hit);
        }
    } // fn draw_walls

    /// Affine texture mapped column drawing function
    fn draw_textured_column(&mut self, origin: Vec2f, x: usize, hit: &RayHit, height: i32, draw_start: usize, draw_end: usize) {
        let ext = self.surface.get_extent();
        let texture = &self.wall_textures[(hit.code.max(1) as usize - 1).min(3)];
        let tex = texture.get_extent();

        // Hit position along the wall, in [0, 1)
        let wall_x = match hit.side {
            WallSide::Vertical => origin.y + hit.distance * hit.ray.y,
            WallSide::Horizontal => origin.x + hit.distance * hit.ray.x,
        };
        let wall_x = wall_x - wall_x.floor();

        let mut tex_x = ((wall_x * tex.width as f32) as usize).min(tex.width - 1);
        if (hit.side == WallSide::Vertical && hit.ray.x > 0.0) || (hit.side == WallSide::Horizontal && hit.ray.y < 0.0) {
            tex_x = tex.width - tex_x - 1;
        }

        // Texture coordinates run over the whole column, even its invisible part
        let step = tex.height as f32 / height.max(1) as f32;
        let mut tex_pos = (draw_start as f32 - ext.height as f32 / 2.0 + height as f32 / 2.0) * step;

        let data = self.surface.get_data_mut();
        for y in draw_start..=draw_end {
            let tex_y = (tex_pos.max(0.0) as usize).min(tex.height - 1);
            tex_pos += step;

            let mut texel = shade_texel_by_distance(texture.sample(tex_x, tex_y), hit.distance, self.fog_distance);
            if hit.side == WallSide::Horizontal {
                texel = (texel >> 1) & DARKEN_MASK;
            }

            data[y * ext.width + x] = texel;
        }
    } // fn draw_textured_column

    /// Map to minimap pixel conversion function
    fn to_minimap(&self, location: Vec2f) -> Vec2si {
        Vec2si {
            x: MINIMAP_ANCHOR.x + (location.x * self.minimap_cell_size as f32) as isize,
            y: MINIMAP_ANCHOR.y + (location.y * self.minimap_cell_size as f32) as isize,
        }
    } // fn to_minimap

    /// Overview map drawing function
    fn draw_map(&mut self, camera: &Camera, map: &Map, draw_rays: bool) {
        self.draw_map_squares(map);

        let player = self.to_minimap(camera.position);
        if draw_rays {
            self.draw_map_debug_lines(camera.position, player);
        }
        self.draw_map_player(camera, player);
    } // fn draw_map

    fn draw_map_squares(&mut self, map: &Map) {
        let cell = self.minimap_cell_size as isize;

        for (y, row) in map.rows().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                let color = match code {
                    0 => MINIMAP_EMPTY_COLOR,
                    code => MINIMAP_WALL_COLORS[(code as usize - 1).min(3)],
                };
                let x0 = MINIMAP_ANCHOR.x + x as isize * cell;
                let y0 = MINIMAP_ANCHOR.y + y as isize * cell;

                // keep one pixel grid gap on big cells
                let size = if cell > 2 { cell - 1 } else { cell };
                self.surface.draw_bar(x0, y0, x0 + size, y0 + size, color);
            }
        }
    } // fn draw_map_squares

    fn draw_map_player(&mut self, camera: &Camera, player: Vec2si) {
        let left = (camera.direction - camera.plane).normalized() * self.camera_line_distance;
        let right = (camera.direction + camera.plane).normalized() * self.camera_line_distance;
        let left = Vec2si { x: player.x + left.x as isize, y: player.y + left.y as isize };
        let right = Vec2si { x: player.x + right.x as isize, y: player.y + right.y as isize };

        self.surface.draw_line(player.x, player.y, left.x, left.y, MINIMAP_VIEW_COLOR);
        self.surface.draw_line(player.x, player.y, right.x, right.y, MINIMAP_VIEW_COLOR);
        self.surface.draw_line(left.x, left.y, right.x, right.y, MINIMAP_VIEW_COLOR);
        self.surface.draw_bar(player.x - 2, player.y - 2, player.x + 2, player.y + 2, MINIMAP_PLAYER_COLOR);
    } // fn draw_map_player

    fn draw_map_debug_lines(&mut self, origin: Vec2f, player: Vec2si) {
        for index in 0..self.hits.len() {
            let end = self.to_minimap(self.hits[index].hit_point(origin));

            self.surface.draw_line(player.x, player.y, end.x, end.y, MINIMAP_RAY_COLOR);
        }
    } // fn draw_map_debug_lines

    /// HUD drawing function
    fn draw_ui(&mut self, state: &RenderState) {
        let ext = self.surface.get_extent();
        let gun = if state.shoot_flash.is_active() {
            &self.gun_flare_texture
        } else {
            &self.gun_texture
        };

        let scale = self.hud_sprite_scale;
        let gun_x = (ext.width as isize - (gun.width() * scale) as isize) / 2;
        let gun_y = ext.height as isize - (gun.height() * scale) as isize;
        self.surface.draw_sprite(gun, gun_x, gun_y, scale, true);

        let letter = self.font.get_letter_size();
        let line_y = ext.height as isize - HUD_MARGIN - letter.height as isize;
        self.font.put_string(&mut self.surface, HUD_MARGIN, line_y - letter.height as isize - 2, &format!("HEALTH {}", state.hud.health), true);
        self.font.put_string(&mut self.surface, HUD_MARGIN, line_y, &format!("AMMO {}", state.hud.ammo), true);
    } // fn draw_ui
} // impl RayCaster


// file raycaster.rs
