use crate::math::Ext2su;
use crate::texture::{Texture, RGB_MASK};

/// Pixel surface. Owns row-major 0x00RRGGBB pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    data: Vec<u32>,
    width: usize,
    height: usize,
} // struct Surface

impl Surface {
    /// Surface create function
    /// * `width` - surface width
    /// * `height` - surface height
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![0; width * height],
            width,
            height,
        }
    } // fn new

    pub fn get_extent(&self) -> Ext2su {
        Ext2su { width: self.width, height: self.height }
    }

    pub fn get_data(&self) -> &[u32] {
        &self.data
    }

    pub fn get_data_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// Pixel getting function
    /// * Returns None if outside of surface
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.data[y * self.width + x])
        } else {
            None
        }
    } // fn get_pixel

    /// Clipped pixel putting function
    #[inline]
    pub fn put_pixel(&mut self, x: isize, y: isize, color: u32) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.data[y as usize * self.width + x as usize] = color & RGB_MASK;
        }
    } // fn put_pixel

    /// Filled rectangle drawing function. Bounds are [x0, x1) x [y0, y1), clipped.
    pub fn draw_bar(&mut self, x0: isize, y0: isize, x1: isize, y1: isize, color: u32) {
        let xb = x0.clamp(0, self.width as isize) as usize;
        let xe = x1.clamp(0, self.width as isize) as usize;
        let yb = y0.clamp(0, self.height as isize) as usize;
        let ye = y1.clamp(0, self.height as isize) as usize;

        if xb >= xe {
            return;
        }

        for y in yb..ye {
            let row = y * self.width;
            self.data[row + xb..row + xe].fill(color & RGB_MASK);
        }
    } // fn draw_bar

    /// Bresenham line drawing function, clipped per pixel
    pub fn draw_line(&mut self, x0: isize, y0: isize, x1: isize, y1: isize, color: u32) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };

        let (mut x, mut y) = (x0, y0);
        let mut error = dx + dy;

        loop {
            self.put_pixel(x, y, color);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = error * 2;
            if e2 >= dy {
                error += dy;
                x += sx;
            }
            if e2 <= dx {
                error += dx;
                y += sy;
            }
        }
    } // fn draw_line

    /// Sprite drawing function
    /// * `texture` - sprite to draw
    /// * `x`, `y` - top left corner
    /// * `scale` - integer nearest-neighbour magnification
    /// * `transparent` - skip texels below alpha threshold
    pub fn draw_sprite(&mut self, texture: &Texture, x: isize, y: isize, scale: usize, transparent: bool) {
        let scale = scale.max(1);
        let ext = texture.get_extent();

        for ty in 0..ext.height * scale {
            for tx in 0..ext.width * scale {
                let texel = texture.sample(tx / scale, ty / scale);

                if transparent && !Texture::is_opaque(texel) {
                    continue;
                }

                self.put_pixel(x + tx as isize, y + ty as isize, texel);
            }
        }
    } // fn draw_sprite
} // impl Surface


// file surface.rs
