//! Reading the OpenType horizontal metrics table
//!
//! This crate provides memory safe zero-allocation access to the
//! [`hmtx`][hmtx] table, given the two counts it depends on: the number of
//! long metrics (from `hhea`) and the number of glyphs (from `maxp`).
//!
//! The table is made of two regions. The first holds `numberOfHMetrics`
//! records, each pairing an advance width with a left side bearing. The
//! second holds a bare left side bearing for every remaining glyph; those
//! glyphs share the advance width of the last record.
//!
//! # Example
//!
//! ```
//! use read_metrics::{tables::hmtx::Hmtx, types::GlyphId, FontData, FontReadWithArgs};
//!
//! let bytes = [
//!     0x02, 0x58, 0x00, 0x0A, // advance 600, lsb 10
//!     0x01, 0xF4, 0x00, 0x00, // advance 500, lsb 0
//!     0xFF, 0xFB,             // lsb -5
//! ];
//! let hmtx = Hmtx::read_with_args(FontData::new(&bytes), &(2, 3)).unwrap();
//! assert_eq!(hmtx.advance_width(GlyphId::new(2)).unwrap(), 500);
//! assert_eq!(hmtx.left_side_bearing(GlyphId::new(2)).unwrap(), -5);
//! ```
//!
//! [hmtx]: https://learn.microsoft.com/en-us/typography/opentype/spec/hmtx

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

mod font_data;
mod read;
mod table_data;
mod table_provider;
pub mod tables;

pub use font_data::FontData;
pub use read::{FontReadWithArgs, ReadArgs, ReadError};
pub use table_data::{TableData, TableHeader};
pub use table_provider::TopLevelTable;

/// Public re-export of the metrics-types crate.
pub extern crate metrics_types as types;
