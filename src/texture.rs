/// CORRIDOR Project
/// `File` texture.rs
/// `Description` Texture implementation module
/// `Author` TioT2
/// `Last changed` 19.10.2026

use std::path::Path;

/// Alpha values below this are treated as holes when compositing
pub const ALPHA_THRESHOLD: u32 = 0x80;

/// RGB part of pixel
pub const RGB_MASK: u32 = 0x00FF_FFFF;

/// Texture representation structure.
/// Pixels are stored row-major as 0xAARRGGBB.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
    /// Glyph index for textures cut from glyph sheets
    pub index: Option<usize>,
} // struct Texture

/// Texture loading error
#[derive(Debug)]
pub enum TextureLoadingError {
    Io(std::io::Error),
    Decoding(png::DecodingError),
    UnsupportedFormat(png::ColorType, png::BitDepth),
    InappropriateDataSize { required: usize, actual: usize },
    Empty,
    SheetTooSmall { required: usize, actual: usize },
} // enum TextureLoadingError

impl std::fmt::Display for TextureLoadingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "texture io error: {err}"),
            Self::Decoding(err) => write!(f, "png decoding error: {err}"),
            Self::UnsupportedFormat(color, depth) => write!(f, "unsupported png format: {color:?} {depth:?}"),
            Self::InappropriateDataSize { required, actual } => write!(f, "pixel data size {actual}, required {required}"),
            Self::Empty => f.write_str("texture has zero extent"),
            Self::SheetTooSmall { required, actual } => write!(f, "glyph sheet width {actual}, required {required}"),
        }
    }
}

impl std::error::Error for TextureLoadingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Decoding(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TextureLoadingError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<png::DecodingError> for TextureLoadingError {
    fn from(err: png::DecodingError) -> Self {
        Self::Decoding(err)
    }
}

impl Texture {
    /// Texture from raw pixels construction function
    /// * `width` - texture width
    /// * `height` - texture height
    /// * `pixels` - row-major 0xAARRGGBB pixels
    /// * Returns texture or loading error
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<u32>) -> Result<Self, TextureLoadingError> {
        if width == 0 || height == 0 {
            return Err(TextureLoadingError::Empty);
        }

        if pixels.len() != width * height {
            return Err(TextureLoadingError::InappropriateDataSize { required: width * height, actual: pixels.len() });
        }

        Ok(Self { width, height, pixels, index: None })
    } // fn from_pixels

    /// Single-color opaque texture creation function
    pub fn solid(width: usize, height: usize, color: u32) -> Result<Self, TextureLoadingError> {
        Self::from_pixels(width, height, vec![0xFF00_0000 | (color & RGB_MASK); width * height])
    } // fn solid

    /// PNG file loading function
    /// * `path` - path to .png file
    /// * Returns texture or loading error
    pub fn load_png(path: &Path) -> Result<Self, TextureLoadingError> {
        Self::from_png_reader(std::io::BufReader::new(std::fs::File::open(path)?))
    } // fn load_png

    /// PNG from byte stream decoding function
    pub fn from_png_reader<R: std::io::Read>(source: R) -> Result<Self, TextureLoadingError> {
        let mut decoder = png::Decoder::new(source);
        decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

        let mut reader = decoder.read_info()?;
        let mut buffer = vec![0u8; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buffer)?;
        let bytes = &buffer[..info.buffer_size()];

        let pixels: Vec<u32> = match info.color_type {
            png::ColorType::Rgba => bytes
                .chunks_exact(4)
                .map(|p| u32::from_be_bytes([p[3], p[0], p[1], p[2]]))
                .collect(),
            png::ColorType::Rgb => bytes
                .chunks_exact(3)
                .map(|p| u32::from_be_bytes([0xFF, p[0], p[1], p[2]]))
                .collect(),
            png::ColorType::GrayscaleAlpha => bytes
                .chunks_exact(2)
                .map(|p| u32::from_be_bytes([p[1], p[0], p[0], p[0]]))
                .collect(),
            png::ColorType::Grayscale => bytes
                .iter()
                .map(|&g| u32::from_be_bytes([0xFF, g, g, g]))
                .collect(),
            other => return Err(TextureLoadingError::UnsupportedFormat(other, info.bit_depth)),
        };

        Self::from_pixels(info.width as usize, info.height as usize, pixels)
    } // fn from_png_reader

    /// Texture extent getting function
    pub fn get_extent(&self) -> crate::math::Ext2su {
        crate::math::Ext2 { width: self.width, height: self.height }
    } // fn get_extent

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Texel sampling function. Coordinates are clamped to texture bounds.
    /// * Returns 0xAARRGGBB texel
    #[inline]
    pub fn sample(&self, x: usize, y: usize) -> u32 {
        let x = x.min(self.width - 1);
        let y = y.min(self.height - 1);

        self.pixels[y * self.width + x]
    } // fn sample

    /// Is texel at location opaque checking function
    #[inline]
    pub fn is_opaque(texel: u32) -> bool {
        (texel >> 24) >= ALPHA_THRESHOLD
    } // fn is_opaque

    /// Glyph sheet splitting function
    /// * `cell_width` - single glyph width
    /// * `count` - glyph count to cut from the left side of sheet
    /// * `first_index` - glyph index of first cut cell
    /// * Returns glyph textures with index set
    pub fn split_sheet(&self, cell_width: usize, count: usize, first_index: usize) -> Result<Vec<Texture>, TextureLoadingError> {
        if cell_width == 0 {
            return Err(TextureLoadingError::Empty);
        }
        if cell_width * count > self.width {
            return Err(TextureLoadingError::SheetTooSmall { required: cell_width * count, actual: self.width });
        }

        (0..count)
            .map(|cell| {
                let pixels = (0..self.height)
                    .flat_map(|y| {
                        let row = y * self.width + cell * cell_width;
                        self.pixels[row..row + cell_width].iter().copied()
                    })
                    .collect();

                let mut glyph = Texture::from_pixels(cell_width, self.height, pixels)?;
                glyph.index = Some(first_index + cell);
                Ok(glyph)
            })
            .collect()
    } // fn split_sheet
} // impl Texture


// file texture.rs
