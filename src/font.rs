use std::collections::HashMap;
use std::sync::OnceLock;

use crate::math::Ext2;
use crate::surface::Surface;
use crate::texture::{Texture, TextureLoadingError};

/// Single glyph width in glyph sheets
pub const GLYPH_WIDTH: usize = 7;
/// Single glyph height in glyph sheets
pub const GLYPH_HEIGHT: usize = 12;

/// Count of glyphs in alphabet sheet (space, A..N, Ñ, O..Z)
pub const ALPHABET_GLYPH_COUNT: usize = 28;
/// Count of glyphs in number sheet ('0'..'9', '!')
pub const NUMBER_GLYPH_COUNT: usize = 11;

const GLYPH_CHARACTERS: [char; ALPHABET_GLYPH_COUNT + NUMBER_GLYPH_COUNT] = [
    ' ', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'Ñ', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '!',
];

/// Character to glyph atlas index table, built on first use
fn glyph_table() -> &'static HashMap<char, usize> {
    static TABLE: OnceLock<HashMap<char, usize>> = OnceLock::new();

    TABLE.get_or_init(|| {
        GLYPH_CHARACTERS
            .iter()
            .enumerate()
            .map(|(index, ch)| (*ch, index))
            .collect()
    })
} // fn glyph_table

/// Glyph index getting function.
/// Lowercase letters map to uppercase ones, unknown characters to space.
pub fn glyph_index(ch: char) -> usize {
    let table = glyph_table();

    ch.to_uppercase()
        .next()
        .and_then(|upper| table.get(&upper))
        .copied()
        .unwrap_or(0)
} // fn glyph_index

/// String to glyph indices conversion function
pub fn glyph_indices(text: &str) -> Vec<usize> {
    text.chars().map(glyph_index).collect()
} // fn glyph_indices

/// Font made of glyph sheet cells
pub struct GlyphFont {
    glyphs: Vec<Texture>,
} // struct GlyphFont

impl GlyphFont {
    /// Font from alphabet and number sheets construction function
    /// * `alphabet` - sheet with ALPHABET_GLYPH_COUNT glyphs in a row
    /// * `numbers` - sheet with NUMBER_GLYPH_COUNT glyphs in a row
    pub fn from_sheets(alphabet: &Texture, numbers: &Texture) -> Result<Self, TextureLoadingError> {
        let mut glyphs = alphabet.split_sheet(GLYPH_WIDTH, ALPHABET_GLYPH_COUNT, 0)?;
        glyphs.extend(numbers.split_sheet(GLYPH_WIDTH, NUMBER_GLYPH_COUNT, ALPHABET_GLYPH_COUNT)?);

        Ok(Self { glyphs })
    } // fn from_sheets

    /// Letter size getting function
    pub fn get_letter_size(&self) -> Ext2<usize> {
        self.glyphs
            .first()
            .map(|glyph| Ext2 { width: glyph.width(), height: glyph.height() })
            .unwrap_or(Ext2 { width: GLYPH_WIDTH, height: GLYPH_HEIGHT })
    } // fn get_letter_size

    /// String to surface putting function
    /// * `surface` - surface to render string to
    /// * `x` - string x coordinate
    /// * `y` - string y coordinate
    /// * `line` - string to put
    /// * `transparent` - skip glyph background texels
    pub fn put_string(&self, surface: &mut Surface, x: isize, y: isize, line: &str, transparent: bool) {
        let advance = self.get_letter_size().width as isize;

        for (position, index) in glyph_indices(line).into_iter().enumerate() {
            if let Some(glyph) = self.glyphs.get(index) {
                surface.draw_sprite(glyph, x + position as isize * advance, y, 1, transparent);
            }
        }
    } // fn put_string
} // impl GlyphFont


// file font.rs
