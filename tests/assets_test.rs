use std::path::{Path, PathBuf};

use corridor::backend::{Backend, BackendError};
use corridor::config::{AssetPaths, Config, MapConfig, RenderConfig};
use corridor::math::{Ext2su, Vec2f};
use corridor::texture::{Texture, TextureLoadingError};
use corridor::{Camera, Map, RayCaster, RenderState};

/// Backend decoding shipped assets from disk
struct FileBackend {
    root: PathBuf,
}

impl Backend for FileBackend {
    fn decode_texture(&mut self, path: &Path) -> Result<Texture, TextureLoadingError> {
        Texture::load_png(&self.root.join(path))
    }

    fn present_buffer(&mut self, _pixels: &[u32], _width: usize, _height: usize) -> Result<(), BackendError> {
        Ok(())
    }

    fn get_screen_dimensions(&self) -> Ext2su {
        Ext2su { width: 320, height: 200 }
    }
}

fn root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn shipped_maps_load() {
    for path in MapConfig::default().slots {
        let map = Map::load(&root().join(&path)).unwrap();

        assert!(map.find_empty_cell().is_some(), "{}", path.display());
    }
}

#[test]
fn shipped_config_parses() {
    let config = Config::load(root().join("assets/config.ron")).unwrap();

    assert_eq!(config.assets, AssetPaths::default());
    assert_eq!(config.map, MapConfig::default());
}

#[test]
fn shipped_textures_render() {
    let mut backend = FileBackend { root: root() };
    let mut raycaster = RayCaster::new(&mut backend, &AssetPaths::default(), &RenderConfig::default(), 0.66).unwrap();
    let map = Map::load(&root().join("assets/map/map.txt")).unwrap();
    let camera = Camera::new(Vec2f::new(1.5, 1.5), Vec2f::new(1.0, 0.0), 0.66);

    let mut state = RenderState::default();
    state.minimap = true;
    state.minimap_rays = true;
    raycaster.render(&camera, &map, state);

    assert_eq!(raycaster.hits().len(), 320);
    assert!(raycaster.hits().iter().all(|hit| hit.distance.is_finite()));
}
