//! The [hmtx (Horizontal Metrics)](https://docs.microsoft.com/en-us/typography/opentype/spec/hmtx) table

use read::TopLevelTable;
use types::Tag;

use crate::{
    validate::{Validate, ValidationCtx},
    write::{FontWrite, TableWriter},
};

mod builder;

pub use builder::HmtxBuilder;
pub use read::tables::hmtx::TAG;

/// The [hmtx](https://docs.microsoft.com/en-us/typography/opentype/spec/hmtx) table.
///
/// Glyphs `0..h_metrics.len()` have a [`LongMetric`]; every following glyph has
/// only a left side bearing and shares the advance of the last long metric.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hmtx {
    pub h_metrics: Vec<LongMetric>,
    pub left_side_bearings: Vec<i16>,
}

/// An advance width paired with a left side bearing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LongMetric {
    /// Advance width, in font design units.
    pub advance: u16,
    /// Glyph left side bearing, in font design units.
    pub side_bearing: i16,
}

impl LongMetric {
    pub fn new(advance: u16, side_bearing: i16) -> Self {
        LongMetric {
            advance,
            side_bearing,
        }
    }
}

impl Hmtx {
    /// Construct a new `Hmtx` table.
    pub fn new(h_metrics: Vec<LongMetric>, left_side_bearings: Vec<i16>) -> Self {
        Self {
            h_metrics,
            left_side_bearings,
        }
    }

    /// Build a table from the `(advance, left side bearing)` of each glyph,
    /// in glyph order.
    ///
    /// Trailing glyphs that share the advance of the last glyph are stored as
    /// bare side bearings, keeping only the first of them as a long metric.
    pub fn from_glyph_metrics(metrics: impl IntoIterator<Item = (u16, i16)>) -> Self {
        let metrics = metrics.into_iter().collect::<Vec<_>>();
        let Some((last_advance, _)) = metrics.last().copied() else {
            return Self::default();
        };
        let run_len = metrics
            .iter()
            .rev()
            .take_while(|(advance, _)| *advance == last_advance)
            .count();
        let (long, tail) = metrics.split_at(metrics.len() - run_len + 1);
        log::trace!(
            "compacted {} glyphs into {} long metrics, advance {last_advance} shared by {} glyphs",
            metrics.len(),
            long.len(),
            run_len
        );
        Hmtx {
            h_metrics: long
                .iter()
                .map(|(advance, side_bearing)| LongMetric::new(*advance, *side_bearing))
                .collect(),
            left_side_bearings: tail.iter().map(|(_, side_bearing)| *side_bearing).collect(),
        }
    }

    /// The value to store in `hhea.numberOfHMetrics`.
    ///
    /// Saturates at `u16::MAX`; such a table fails validation.
    pub fn number_of_h_metrics(&self) -> u16 {
        self.h_metrics.len().try_into().unwrap_or(u16::MAX)
    }

    /// The value to store in `maxp.numGlyphs`.
    ///
    /// Saturates at `u16::MAX`; such a table fails validation.
    pub fn num_glyphs(&self) -> u16 {
        self.glyph_count().try_into().unwrap_or(u16::MAX)
    }

    fn glyph_count(&self) -> usize {
        self.h_metrics.len() + self.left_side_bearings.len()
    }
}

impl<'a> From<&read::tables::hmtx::Hmtx<'a>> for Hmtx {
    fn from(src: &read::tables::hmtx::Hmtx<'a>) -> Self {
        Hmtx {
            h_metrics: src
                .h_metrics()
                .iter()
                .map(|metric| LongMetric::new(metric.advance(), metric.side_bearing()))
                .collect(),
            left_side_bearings: src
                .left_side_bearings()
                .iter()
                .map(|lsb| lsb.get())
                .collect(),
        }
    }
}

impl TopLevelTable for Hmtx {
    const TAG: Tag = TAG;
}

impl FontWrite for LongMetric {
    fn write_into(&self, writer: &mut TableWriter) {
        self.advance.write_into(writer);
        self.side_bearing.write_into(writer);
    }
}

impl FontWrite for Hmtx {
    fn write_into(&self, writer: &mut TableWriter) {
        self.h_metrics.write_into(writer);
        self.left_side_bearings.write_into(writer);
    }
}

impl Validate for Hmtx {
    fn validate_impl(&self, ctx: &mut ValidationCtx) {
        ctx.in_table("Hmtx", |ctx| {
            if self.glyph_count() > u16::MAX as usize {
                ctx.report(format!(
                    "{} glyphs exceeds the limit of {}",
                    self.glyph_count(),
                    u16::MAX
                ));
            }
            ctx.in_field("left_side_bearings", |ctx| {
                if self.h_metrics.is_empty() && !self.left_side_bearings.is_empty() {
                    ctx.report("side bearings require at least one long metric");
                }
            });
        })
    }
}
