//! Traits for interpreting font data

use types::GlyphId;

use crate::font_data::FontData;

/// A trait for a type that needs additional arguments to be read.
pub trait ReadArgs {
    type Args: Copy;
}

/// A trait for types that require external data in order to be constructed.
///
/// The `hmtx` table is the canonical example: its layout is determined by
/// counts stored in the `hhea` and `maxp` tables.
pub trait FontReadWithArgs<'a>: Sized + ReadArgs {
    /// read an item, using the provided args.
    ///
    /// If a type requires multiple arguments, they will be passed as a tuple.
    fn read_with_args(data: FontData<'a>, args: &Self::Args) -> Result<Self, ReadError>;
}

/// An error that occurs when reading font data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    OutOfBounds,
    InvalidArrayLen,
    /// A record index was not less than the number of records in its region.
    IndexOutOfRange {
        index: usize,
        len: usize,
    },
    /// A glyph identifier was not less than the number of glyphs in the font.
    InvalidGlyphId {
        glyph_id: GlyphId,
        num_glyphs: u16,
    },
    MalformedData(&'static str),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReadError::OutOfBounds => write!(f, "An offset was out of bounds"),
            ReadError::InvalidArrayLen => {
                write!(f, "Specified array length not a multiple of item size")
            }
            ReadError::IndexOutOfRange { index, len } => {
                write!(f, "Index {index} out of range for {len} items")
            }
            ReadError::InvalidGlyphId {
                glyph_id,
                num_glyphs,
            } => write!(f, "{glyph_id} out of range for font with {num_glyphs} glyphs"),
            ReadError::MalformedData(msg) => write!(f, "Malformed data: '{msg}'"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReadError {}
