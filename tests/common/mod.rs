#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use corridor::backend::{Backend, BackendError};
use corridor::config::AssetPaths;
use corridor::font::{ALPHABET_GLYPH_COUNT, GLYPH_HEIGHT, GLYPH_WIDTH, NUMBER_GLYPH_COUNT};
use corridor::math::Ext2su;
use corridor::texture::{Texture, TextureLoadingError};

pub const GUN_COLOR: u32 = 0x3050F0;
pub const GUN_FLARE_COLOR: u32 = 0xF0D020;
pub const CEILING_COLOR: u32 = 0x406080;
pub const CEILING_NIGHT_COLOR: u32 = 0x101020;
pub const FLOOR_COLOR: u32 = 0x605040;

/// Backend serving synthetic textures from memory
pub struct MemoryBackend {
    pub extent: Ext2su,
    pub textures: HashMap<PathBuf, Texture>,
    pub presented: Vec<Vec<u32>>,
}

impl MemoryBackend {
    /// Backend with every default asset registered
    pub fn new(width: usize, height: usize) -> Self {
        let assets = AssetPaths::default();
        let mut textures = HashMap::new();

        for (index, path) in assets.walls.iter().enumerate() {
            textures.insert(path.clone(), checker(16, 0xC0C0C0 >> index, 0x808080 >> index));
        }
        textures.insert(assets.floor.clone(), Texture::solid(4, 4, FLOOR_COLOR).unwrap());
        textures.insert(assets.ceiling.clone(), Texture::solid(4, 4, CEILING_COLOR).unwrap());
        textures.insert(assets.ceiling_night.clone(), Texture::solid(4, 4, CEILING_NIGHT_COLOR).unwrap());
        textures.insert(assets.gun.clone(), Texture::solid(8, 8, GUN_COLOR).unwrap());
        textures.insert(assets.gun_flare.clone(), Texture::solid(8, 8, GUN_FLARE_COLOR).unwrap());
        textures.insert(assets.alphabet.clone(), glyph_sheet(ALPHABET_GLYPH_COUNT));
        textures.insert(assets.numbers.clone(), glyph_sheet(NUMBER_GLYPH_COUNT));

        Self { extent: Ext2su { width, height }, textures, presented: Vec::new() }
    }
}

impl Backend for MemoryBackend {
    fn decode_texture(&mut self, path: &Path) -> Result<Texture, TextureLoadingError> {
        self.textures
            .get(path)
            .cloned()
            .ok_or_else(|| TextureLoadingError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, path.display().to_string())))
    }

    fn present_buffer(&mut self, pixels: &[u32], width: usize, height: usize) -> Result<(), BackendError> {
        assert_eq!(pixels.len(), width * height);
        self.presented.push(pixels.to_vec());
        Ok(())
    }

    fn get_screen_dimensions(&self) -> Ext2su {
        self.extent
    }
}

/// Opaque two-color checker texture
pub fn checker(size: usize, a: u32, b: u32) -> Texture {
    let pixels = (0..size * size)
        .map(|i| 0xFF00_0000 | if ((i % size) / 4 + (i / size) / 4) % 2 == 0 { a } else { b })
        .collect();

    Texture::from_pixels(size, size, pixels).unwrap()
}

/// White glyphs with transparent background
pub fn glyph_sheet(count: usize) -> Texture {
    let width = count * GLYPH_WIDTH;
    let pixels = (0..width * GLYPH_HEIGHT)
        .map(|i| if (i % width) % GLYPH_WIDTH == 3 { 0xFFFF_FFFF } else { 0x0000_0000 })
        .collect();

    Texture::from_pixels(width, GLYPH_HEIGHT, pixels).unwrap()
}
