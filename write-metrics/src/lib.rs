//! Building and writing the OpenType horizontal metrics table
//!
//! This crate is the companion of [`read-metrics`][read]. It provides:
//!
//! - [`HmtxBuilder`][tables::hmtx::HmtxBuilder], which collects the two
//!   counts the `hmtx` layout depends on, checks them, and freezes them into a
//!   read-only [view][read::tables::hmtx::Hmtx] over existing bytes;
//! - an owned [`Hmtx`][tables::hmtx::Hmtx] table that can be compiled to
//!   bytes with [`dump_table`], compacting trailing glyphs that share an
//!   advance width.
//!
//! # Example
//!
//! ```
//! use write_metrics::{
//!     dump_table,
//!     read::{types::GlyphId, FontData},
//!     tables::hmtx::{Hmtx, HmtxBuilder},
//! };
//!
//! let hmtx = Hmtx::from_glyph_metrics([(600, 10), (500, 0), (500, -5)]);
//! let bytes = dump_table(&hmtx).unwrap();
//!
//! let mut builder = HmtxBuilder::from_data(FontData::new(&bytes));
//! builder
//!     .set_number_of_h_metrics(hmtx.number_of_h_metrics().into())?
//!     .set_num_glyphs(hmtx.num_glyphs().into())?;
//! let view = builder.build()?;
//! assert_eq!(view.advance_width(GlyphId::new(2))?, 500);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! [read]: https://docs.rs/read-metrics/

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod error;
pub mod tables;
pub mod validate;
mod write;

pub use error::Error;
pub use write::{dump_table, FontWrite, TableWriter};

/// Public re-export of the metrics-types crate.
pub extern crate metrics_types as types;
/// Public re-export of the read-metrics crate.
pub extern crate read_metrics as read;
