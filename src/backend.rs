/// CORRIDOR Project
/// `File` backend.rs
/// `Description` Presentation backend interface and window implementation module
/// `Author` TioT2
/// `Last changed` 19.10.2026

use std::num::NonZeroU32;
use std::path::Path;
use std::rc::Rc;

use crate::math::Ext2su;
use crate::texture::{Texture, TextureLoadingError};

/// Presentation error
#[derive(Debug)]
pub enum BackendError {
    SoftBuffer(softbuffer::SoftBufferError),
    ZeroExtent,
    InappropriateBufferSize { required: usize, actual: usize },
} // enum BackendError

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SoftBuffer(err) => write!(f, "softbuffer error: {err}"),
            Self::ZeroExtent => f.write_str("surface has zero extent"),
            Self::InappropriateBufferSize { required, actual } => write!(f, "buffer holds {actual} pixels, required {required}"),
        }
    }
}

impl std::error::Error for BackendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SoftBuffer(err) => Some(err),
            _ => None,
        }
    }
}

impl From<softbuffer::SoftBufferError> for BackendError {
    fn from(err: softbuffer::SoftBufferError) -> Self {
        Self::SoftBuffer(err)
    }
}

/// Platform presentation backend. The renderer only talks to this.
pub trait Backend {
    /// Image asset decoding function
    fn decode_texture(&mut self, path: &Path) -> Result<Texture, TextureLoadingError>;

    /// Finished frame presenting function
    /// * `pixels` - row-major 0x00RRGGBB pixels
    fn present_buffer(&mut self, pixels: &[u32], width: usize, height: usize) -> Result<(), BackendError>;

    /// Output size getting function
    fn get_screen_dimensions(&self) -> Ext2su;
} // trait Backend

/// winit window + softbuffer backend
pub struct WindowBackend {
    window: Rc<winit::window::Window>,
    surface: softbuffer::Surface<Rc<winit::window::Window>, Rc<winit::window::Window>>,
    _context: softbuffer::Context<Rc<winit::window::Window>>,
} // struct WindowBackend

impl WindowBackend {
    /// Backend create function
    /// * `window` - window to present frames to
    pub fn new(window: Rc<winit::window::Window>) -> Result<Self, BackendError> {
        let context = softbuffer::Context::new(window.clone())?;
        let surface = softbuffer::Surface::new(&context, window.clone())?;

        Ok(Self { window, surface, _context: context })
    } // fn new
} // impl WindowBackend

impl Backend for WindowBackend {
    fn decode_texture(&mut self, path: &Path) -> Result<Texture, TextureLoadingError> {
        let texture = Texture::load_png(path)?;

        log::info!("loaded texture {} ({}x{})", path.display(), texture.width(), texture.height());
        Ok(texture)
    }

    fn present_buffer(&mut self, pixels: &[u32], width: usize, height: usize) -> Result<(), BackendError> {
        if pixels.len() != width * height {
            return Err(BackendError::InappropriateBufferSize { required: width * height, actual: pixels.len() });
        }

        let (w, h) = NonZeroU32::new(width as u32)
            .zip(NonZeroU32::new(height as u32))
            .ok_or(BackendError::ZeroExtent)?;
        self.surface.resize(w, h)?;

        let mut buffer = self.surface.buffer_mut()?;
        buffer.copy_from_slice(pixels);
        buffer.present()?;

        Ok(())
    } // fn present_buffer

    fn get_screen_dimensions(&self) -> Ext2su {
        let size = self.window.inner_size();

        Ext2su { width: size.width as usize, height: size.height as usize }
    }
} // impl Backend for WindowBackend

// file backend.rs
