use corridor::config::{AssetPaths, RenderConfig};
use corridor::math::Vec2f;
use corridor::raycaster::{calculate_draw_locations, column_height, InitError, WallSide, DARKEN_MASK};
use corridor::state::{Hud, Toggle};
use corridor::texture::Texture;
use corridor::{Camera, Map, RayCaster, RenderState};

mod common;
use common::*;

const WIDTH: usize = 160;
const HEIGHT: usize = 120;

fn corridor() -> Map {
    Map::load_from_txt("111\n101\n101\n101\n101\n101\n101\n101\n101\n111").unwrap()
}

fn raycaster(width: usize, height: usize, field_of_view: f32) -> RayCaster {
    let mut backend = MemoryBackend::new(width, height);

    RayCaster::new(&mut backend, &AssetPaths::default(), &RenderConfig::default(), field_of_view).unwrap()
}

fn corridor_camera(field_of_view: f32) -> Camera {
    Camera::new(Vec2f::new(1.5, 8.5), Vec2f::new(0.0, -1.0), field_of_view)
}

#[test]
fn init_fails_on_missing_asset() {
    let mut backend = MemoryBackend::new(WIDTH, HEIGHT);
    let assets = AssetPaths::default();
    backend.textures.remove(&assets.gun_flare);

    match RayCaster::new(&mut backend, &assets, &RenderConfig::default(), 0.66) {
        Err(InitError::Texture { path, .. }) => assert_eq!(path, assets.gun_flare),
        other => panic!("unexpected init result: {:?}", other.err()),
    }
}

#[test]
fn init_fails_on_empty_screen() {
    let mut backend = MemoryBackend::new(0, HEIGHT);
    let result = RayCaster::new(&mut backend, &AssetPaths::default(), &RenderConfig::default(), 0.66);

    assert!(matches!(result, Err(InitError::InvalidScreenSize(_))));
}

#[test]
fn corridor_distances_match_analytic_ones() {
    let map = corridor();
    let camera = corridor_camera(0.66);
    let mut raycaster = raycaster(WIDTH, HEIGHT, 0.66);

    raycaster.render(&camera, &map, RenderState::default());
    let hits = raycaster.hits();
    assert_eq!(hits.len(), WIDTH);

    for (x, hit) in hits.iter().enumerate() {
        let camera_x = 2.0 * x as f32 / WIDTH as f32 - 1.0;
        let sideways = (camera.plane.x * camera_x).abs();
        let far_wall = 7.5;
        let expected = if sideways == 0.0 { far_wall } else { (0.5 / sideways).min(far_wall) };

        assert!(
            (hit.distance - expected).abs() < 1e-3,
            "column {x}: distance {} expected {expected}",
            hit.distance
        );
    }

    let center = hits[WIDTH / 2];
    assert_eq!(center.side, WallSide::Horizontal);
    assert_eq!(center.cell.y, 0);
    assert_eq!(hits[0].side, WallSide::Vertical);
}

#[test]
fn center_distance_does_not_depend_on_field_of_view() {
    let map = corridor();

    for field_of_view in [0.3, 0.66, 1.0, 1.7] {
        let mut raycaster = raycaster(WIDTH, HEIGHT, field_of_view);
        raycaster.render(&corridor_camera(field_of_view), &map, RenderState::default());

        assert!((raycaster.hits()[WIDTH / 2].distance - 7.5).abs() < 1e-4);
    }
}

#[test]
fn closer_walls_give_taller_columns() {
    let map = corridor();
    let mut raycaster = raycaster(WIDTH, HEIGHT, 0.66);
    raycaster.render(&corridor_camera(0.66), &map, RenderState::default());

    let mut hits: Vec<f32> = raycaster.hits().iter().map(|hit| hit.distance).collect();
    hits.sort_by(|a, b| a.total_cmp(b));

    let heights: Vec<i32> = hits.iter().map(|distance| column_height(HEIGHT, *distance)).collect();
    assert!(heights.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn night_mode_changes_only_ceiling() {
    let map = corridor();
    let camera = corridor_camera(0.66);
    let mut raycaster = raycaster(WIDTH, HEIGHT, 0.66);

    let day = RenderState::default();
    let mut night = day;
    night.toggle(Toggle::NightMode);

    raycaster.render(&camera, &map, day);
    let day_frame = raycaster.get_surface().clone();
    raycaster.render(&camera, &map, night);
    let night_frame = raycaster.get_surface().clone();

    let mut changed = 0;
    for (x, hit) in raycaster.hits().iter().enumerate() {
        let (start, end) = calculate_draw_locations(column_height(HEIGHT, hit.distance), HEIGHT);

        for y in 0..HEIGHT {
            let a = day_frame.get_pixel(x, y).unwrap();
            let b = night_frame.get_pixel(x, y).unwrap();

            if (start..=end).contains(&y) || y >= HEIGHT / 2 {
                assert_eq!(a, b, "pixel {x}, {y} outside of ceiling changed");
            } else if a != b {
                assert_eq!(a, CEILING_COLOR);
                assert_eq!(b, CEILING_NIGHT_COLOR);
                changed += 1;
            }
        }
    }

    assert!(changed > 0);
}

#[test]
fn inverse_color_twice_restores_frame() {
    let map = corridor();
    let camera = corridor_camera(0.66);
    let mut raycaster = raycaster(WIDTH, HEIGHT, 0.66);

    let mut state = RenderState::default();
    raycaster.render(&camera, &map, state);
    let original = raycaster.get_surface().clone();

    state.toggle(Toggle::InverseColor);
    raycaster.render(&camera, &map, state);
    let inverted = raycaster.get_surface().clone();
    for (a, b) in original.get_data().iter().zip(inverted.get_data()) {
        assert_eq!(*a ^ 0xFFFFFF, *b);
    }

    state.toggle(Toggle::InverseColor);
    raycaster.render(&camera, &map, state);
    assert_eq!(raycaster.get_surface(), &original);
}

#[test]
fn minimap_is_drawn_in_top_left_corner() {
    let map = corridor();
    let camera = corridor_camera(0.66);
    let mut raycaster = raycaster(WIDTH, HEIGHT, 0.66);

    let mut state = RenderState::default();
    raycaster.render(&camera, &map, state);
    let plain = raycaster.get_surface().clone();

    state.toggle(Toggle::Minimap);
    raycaster.render(&camera, &map, state);
    let with_map = raycaster.get_surface().clone();

    state.toggle(Toggle::MinimapRays);
    raycaster.render(&camera, &map, state);
    let with_rays = raycaster.get_surface().clone();

    assert_ne!(plain, with_map);
    assert_ne!(with_map, with_rays);

    // 3x10 cells of 8 pixels anchored at (8, 8)
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            if x < 8 + 3 * 8 && y < 8 + 10 * 8 {
                continue;
            }
            assert_eq!(plain.get_pixel(x, y), with_rays.get_pixel(x, y), "pixel {x}, {y}");
        }
    }
}

#[test]
fn shoot_flash_reverts_after_duration() {
    const FLASH_FRAMES: u32 = 5;

    let map = Map::load_from_txt("222\n202\n222").unwrap();
    let camera = Camera::new(Vec2f::new(1.5, 1.5), Vec2f::new(1.0, 0.0), 0.66);
    let mut raycaster = raycaster(WIDTH, HEIGHT, 0.66);
    let gun_pixel = |raycaster: &RayCaster| raycaster.get_surface().get_pixel(WIDTH / 2, HEIGHT - 1).unwrap();

    let mut state = RenderState::new(FLASH_FRAMES, Hud::default());
    state = raycaster.render(&camera, &map, state);
    assert_eq!(gun_pixel(&raycaster), GUN_COLOR);
    assert!(raycaster.hits().iter().all(|hit| hit.code == 2));

    assert!(state.shoot());
    for frame in 0..FLASH_FRAMES {
        assert!(state.shoot_flash.is_active(), "frame {frame}");
        state = raycaster.render(&camera, &map, state);
        assert_eq!(gun_pixel(&raycaster), GUN_FLARE_COLOR, "frame {frame}");
    }

    for _ in 0..3 {
        assert!(!state.shoot_flash.is_active());
        state = raycaster.render(&camera, &map, state);
        assert_eq!(gun_pixel(&raycaster), GUN_COLOR);
    }
}

#[test]
fn hud_text_follows_setters() {
    let map = corridor();
    let camera = corridor_camera(0.66);
    let mut raycaster = raycaster(WIDTH, HEIGHT, 0.66);

    let mut state = RenderState::default();
    raycaster.render(&camera, &map, state);
    let before = raycaster.get_surface().clone();

    state.set_ammo(7);
    raycaster.render(&camera, &map, state);

    assert_ne!(&before, raycaster.get_surface());
}

const WALL_TEST_WIDTH: usize = 160;
const WALL_TEST_HEIGHT: usize = 40;

/// Renderer with wall code 1 drawn with given texture
fn raycaster_with_wall(wall: Texture) -> RayCaster {
    let mut backend = MemoryBackend::new(WALL_TEST_WIDTH, WALL_TEST_HEIGHT);
    let assets = AssetPaths::default();
    backend.textures.insert(assets.walls[0].clone(), wall);

    RayCaster::new(&mut backend, &assets, &RenderConfig::default(), 0.66).unwrap()
}

/// 16x16 texture, texel (x, y) blue channel is 0x10 * (x or y)
fn striped(by_row: bool) -> Texture {
    let pixels = (0..16 * 16)
        .map(|i| {
            let stripe = if by_row { i / 16 } else { i % 16 };
            0xFF00_0000 | (stripe as u32) << 4
        })
        .collect();

    Texture::from_pixels(16, 16, pixels).unwrap()
}

fn room() -> Map {
    Map::load_from_txt("11111\n10001\n10001\n10001\n11111").unwrap()
}

/// Pixel of middle screen column, its ray runs along camera direction
fn center_pixel(raycaster: &RayCaster, y: usize) -> u32 {
    raycaster.get_surface().get_pixel(WALL_TEST_WIDTH / 2, y).unwrap()
}

#[test]
fn texture_rows_span_whole_column() {
    let map = Map::load_from_txt("111\n101\n101\n111").unwrap();
    let mut raycaster = raycaster_with_wall(striped(true));

    // (distance to wall, texel row at top screen row, texel row just below screen center)
    for (distance, top, center) in [(0.45_f32, 4_u32, 8_u32), (0.2, 6, 8), (0.05, 7, 8)] {
        let camera = Camera::new(Vec2f::new(1.5, 3.0 - distance), Vec2f::new(0.0, 1.0), 0.66);
        raycaster.render(&camera, &map, RenderState::default());

        let hit = raycaster.hits()[WALL_TEST_WIDTH / 2];
        assert_eq!(hit.side, WallSide::Horizontal);
        assert!(column_height(WALL_TEST_HEIGHT, hit.distance) > WALL_TEST_HEIGHT as i32);

        // horizontal hits are darkened once
        assert_eq!(center_pixel(&raycaster, 0), top << 3, "top row at distance {distance}");
        assert_eq!(center_pixel(&raycaster, WALL_TEST_HEIGHT / 2 + 1), center << 3, "center row at distance {distance}");
    }
}

#[test]
fn texture_columns_keep_orientation() {
    let map = room();
    let mut raycaster = raycaster_with_wall(striped(false));
    let row = WALL_TEST_HEIGHT / 2 + 1;

    // hit fraction along wall is 0.2 for x boundaries and 0.3 for y boundaries
    let origin = Vec2f::new(2.3, 2.2);

    // (direction, side, texel column, darkened)
    for (direction, side, column, darkened) in [
        (Vec2f::new(1.0, 0.0), WallSide::Vertical, 12_u32, false),
        (Vec2f::new(-1.0, 0.0), WallSide::Vertical, 3, false),
        (Vec2f::new(0.0, 1.0), WallSide::Horizontal, 4, true),
        (Vec2f::new(0.0, -1.0), WallSide::Horizontal, 11, true),
    ] {
        raycaster.render(&Camera::new(origin, direction, 0.66), &map, RenderState::default());

        assert_eq!(raycaster.hits()[WALL_TEST_WIDTH / 2].side, side);
        let expected = if darkened { column << 3 } else { column << 4 };
        assert_eq!(center_pixel(&raycaster, row), expected, "direction {direction}");
    }
}

#[test]
fn horizontal_hits_are_darker() {
    const WALL_COLOR: u32 = 0xC08040;

    let map = room();
    let mut raycaster = raycaster_with_wall(Texture::solid(16, 16, WALL_COLOR).unwrap());
    let origin = Vec2f::new(2.5, 2.5);
    let row = WALL_TEST_HEIGHT / 2 + 1;

    raycaster.render(&Camera::new(origin, Vec2f::new(1.0, 0.0), 0.66), &map, RenderState::default());
    let vertical_hit = raycaster.hits()[WALL_TEST_WIDTH / 2];
    let vertical = center_pixel(&raycaster, row);

    raycaster.render(&Camera::new(origin, Vec2f::new(0.0, 1.0), 0.66), &map, RenderState::default());
    let horizontal_hit = raycaster.hits()[WALL_TEST_WIDTH / 2];
    let horizontal = center_pixel(&raycaster, row);

    assert_eq!(vertical_hit.side, WallSide::Vertical);
    assert_eq!(horizontal_hit.side, WallSide::Horizontal);
    assert!((vertical_hit.distance - horizontal_hit.distance).abs() < 1e-5);

    assert_eq!(vertical, WALL_COLOR);
    assert_eq!(horizontal, (vertical >> 1) & DARKEN_MASK);
    assert_eq!(horizontal, 0x604020);
}
