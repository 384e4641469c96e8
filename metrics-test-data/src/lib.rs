//! test data shared between the metrics crates.

pub mod bebuffer;

pub mod hmtx {
    /// Three long metrics followed by two bare side bearings (5 glyphs).
    #[rustfmt::skip]
    pub static SIMPLE: &[u8] = &[
        0x02, 0x58, 0x00, 0x0A, // glyph 0: advance 600, lsb 10
        0x02, 0x58, 0x00, 0x14, // glyph 1: advance 600, lsb 20
        0x01, 0xF4, 0x00, 0x00, // glyph 2: advance 500, lsb 0
        0x00, 0x05,             // glyph 3: lsb 5
        0xFF, 0xFB,             // glyph 4: lsb -5
    ];

    /// [`SIMPLE`], padded to a four byte boundary.
    #[rustfmt::skip]
    pub static SIMPLE_PADDED: &[u8] = &[
        0x02, 0x58, 0x00, 0x0A,
        0x02, 0x58, 0x00, 0x14,
        0x01, 0xF4, 0x00, 0x00,
        0x00, 0x05,
        0xFF, 0xFB,
        0x00, 0x00,             // padding
    ];

    /// A single long metric shared by four glyphs.
    #[rustfmt::skip]
    pub static MONOSPACED: &[u8] = &[
        0x04, 0xCD, 0x00, 0x32, // glyph 0: advance 1229, lsb 50
        0x00, 0x28,             // glyph 1: lsb 40
        0x00, 0x00,             // glyph 2: lsb 0
        0xFF, 0xF4,             // glyph 3: lsb -12
    ];
}
