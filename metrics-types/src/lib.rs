//! Common [scalar data types][data types] used by the horizontal metrics table
//!
//! [data types]: https://docs.microsoft.com/en-us/typography/opentype/spec/otff#data-types

#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

mod glyph_id;
mod raw;
mod tag;

pub use glyph_id::GlyphId;
pub use raw::{BigEndian, FixedSize, Scalar};
pub use tag::Tag;
