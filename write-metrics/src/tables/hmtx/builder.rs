//! Freezing table bytes and externally supplied counts into an [`Hmtx`] view.

use read::{tables::hmtx::Hmtx, types::FixedSize, FontData, ReadError, TableData, TableHeader};

use crate::{
    error::Error,
    validate::{Validate, ValidationCtx},
};

// tables are padded to four bytes; anything beyond that is unexpected.
const MAX_PADDING: usize = 3;

/// A builder for a read-only [`Hmtx`] view.
///
/// The layout of the `hmtx` table is not self-describing: it depends on
/// `numberOfHMetrics` (from `hhea`) and `numGlyphs` (from `maxp`). This
/// builder collects those counts, validates them against each other and
/// against the table data, and then produces a view borrowing the same bytes.
///
/// Both counts must be set before calling [`build`](Self::build).
#[derive(Clone, Debug)]
pub struct HmtxBuilder<'a> {
    table: TableData<'a>,
    number_of_h_metrics: Option<u16>,
    num_glyphs: Option<u16>,
}

impl<'a> HmtxBuilder<'a> {
    /// Create a builder for the table described by `header`, backed by `data`.
    pub fn new(header: TableHeader, data: FontData<'a>) -> Self {
        HmtxBuilder {
            table: TableData::new(header, data),
            number_of_h_metrics: None,
            num_glyphs: None,
        }
    }

    /// Create a builder with a header synthesized from the length of `data`.
    pub fn from_data(data: FontData<'a>) -> Self {
        let table = TableData::from_tag(super::TAG, data);
        HmtxBuilder::new(*table.header(), data)
    }

    /// Set the number of long metrics, as found in `hhea.numberOfHMetrics`.
    ///
    /// Returns [`Error::InvalidArgument`] if `number_of_h_metrics` is negative
    /// or does not fit in 16 bits.
    pub fn set_number_of_h_metrics(
        &mut self,
        number_of_h_metrics: i32,
    ) -> Result<&mut Self, Error> {
        self.number_of_h_metrics =
            Some(checked_count("number_of_h_metrics", number_of_h_metrics)?);
        Ok(self)
    }

    /// Set the number of glyphs, as found in `maxp.numGlyphs`.
    ///
    /// Returns [`Error::InvalidArgument`] if `num_glyphs` is negative or does
    /// not fit in 16 bits.
    pub fn set_num_glyphs(&mut self, num_glyphs: i32) -> Result<&mut Self, Error> {
        self.num_glyphs = Some(checked_count("num_glyphs", num_glyphs)?);
        Ok(self)
    }

    /// The number of long metrics, if it has been set.
    pub fn number_of_h_metrics(&self) -> Option<u16> {
        self.number_of_h_metrics
    }

    /// The number of glyphs, if it has been set.
    pub fn num_glyphs(&self) -> Option<u16> {
        self.num_glyphs
    }

    pub fn header(&self) -> &TableHeader {
        self.table.header()
    }

    /// Validate the counts and freeze them into a view over the table data.
    ///
    /// Fails with [`Error::ValidationFailed`] if either count is unset, if
    /// there are more long metrics than glyphs, or if the data is too short
    /// to hold the layout described by the counts.
    pub fn build(self) -> Result<Hmtx<'a>, Error> {
        self.validate()?;
        let args = self
            .number_of_h_metrics
            .zip(self.num_glyphs)
            .ok_or(ReadError::MalformedData("hmtx counts are not set"))?;
        let required = required_len(args.0, args.1);
        let len = self.table.data().len();
        if len > required + MAX_PADDING {
            log::warn!(
                "hmtx has {} bytes of trailing data beyond the {required} bytes in use",
                len - required
            );
        }
        if self.table.length_mismatch() {
            log::debug!(
                "hmtx declares a length of {} but has {len} bytes of data",
                self.table.header().length
            );
        }
        log::debug!(
            "building hmtx view: {} long metrics, {} glyphs",
            args.0,
            args.1
        );
        Ok(Hmtx::from_table(self.table, &args)?)
    }
}

impl Validate for HmtxBuilder<'_> {
    fn validate_impl(&self, ctx: &mut ValidationCtx) {
        ctx.in_table("HmtxBuilder", |ctx| {
            ctx.in_field("number_of_h_metrics", |ctx| {
                if self.number_of_h_metrics.is_none() {
                    ctx.report("numberOfHMetrics must be set before building");
                }
            });
            ctx.in_field("num_glyphs", |ctx| {
                if self.num_glyphs.is_none() {
                    ctx.report("numGlyphs must be set before building");
                }
            });
            let (Some(number_of_h_metrics), Some(num_glyphs)) =
                (self.number_of_h_metrics, self.num_glyphs)
            else {
                return;
            };
            if number_of_h_metrics > num_glyphs {
                ctx.in_field("number_of_h_metrics", |ctx| {
                    ctx.report(format!(
                        "{number_of_h_metrics} long metrics exceeds {num_glyphs} glyphs"
                    ))
                });
                return;
            }
            let required = required_len(number_of_h_metrics, num_glyphs);
            let len = self.table.data().len();
            if len < required {
                ctx.report(format!(
                    "table data is {len} bytes, but the layout requires {required}"
                ));
            }
        })
    }
}

fn checked_count(field: &'static str, value: i32) -> Result<u16, Error> {
    u16::try_from(value).map_err(|_| Error::InvalidArgument { field, value })
}

/// The byte length of the table, assuming `number_of_h_metrics <= num_glyphs`.
fn required_len(number_of_h_metrics: u16, num_glyphs: u16) -> usize {
    let num_lsbs = num_glyphs.saturating_sub(number_of_h_metrics) as usize;
    number_of_h_metrics as usize * read::tables::hmtx::LongMetric::RAW_BYTE_LEN
        + num_lsbs * i16::RAW_BYTE_LEN
}

#[cfg(test)]
mod tests {
    //! Building rejects negative and oversized counts, unset counts, and more
    //! long metrics than glyphs. The resulting view rejects record indices
    //! `>= count` and glyph ids `>= num_glyphs`.

    use metrics_test_data::{bebuffer::BeBuffer, hmtx as test_data};
    use pretty_assertions::assert_eq;
    use read::types::{GlyphId, Tag};
    use rstest::rstest;

    use super::*;
    use crate::tables::hmtx::Hmtx as OwnedHmtx;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn simple_view() -> Hmtx<'static> {
        let mut builder = HmtxBuilder::from_data(FontData::new(test_data::SIMPLE));
        builder
            .set_number_of_h_metrics(3)
            .unwrap()
            .set_num_glyphs(5)
            .unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn build_simple() {
        init_logger();
        let hmtx = simple_view();
        assert_eq!(hmtx.number_of_h_metrics(), 3);
        assert_eq!(hmtx.number_of_lsbs(), 2);
        assert_eq!(hmtx.advance_width(GlyphId::new(0)), Ok(600));
        assert_eq!(hmtx.left_side_bearing(GlyphId::new(0)), Ok(10));
        assert_eq!(hmtx.advance_width(GlyphId::new(2)), Ok(500));
        assert_eq!(hmtx.left_side_bearing(GlyphId::new(2)), Ok(0));
        assert_eq!(hmtx.advance_width(GlyphId::new(3)), Ok(500));
        assert_eq!(hmtx.left_side_bearing(GlyphId::new(3)), Ok(5));
        assert_eq!(hmtx.advance_width(GlyphId::new(4)), Ok(500));
        assert_eq!(hmtx.left_side_bearing(GlyphId::new(4)), Ok(-5));
    }

    #[test]
    fn view_borrows_builder_bytes() {
        let hmtx = simple_view();
        assert_eq!(
            hmtx.offset_data().as_bytes().as_ptr(),
            test_data::SIMPLE.as_ptr()
        );
    }

    #[test]
    fn boundary_is_exclusive() {
        let hmtx = simple_view();
        assert_eq!(hmtx.h_metric_advance_width(2), Ok(500));
        assert_eq!(
            hmtx.h_metric_advance_width(3),
            Err(ReadError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            hmtx.h_metric_lsb(3),
            Err(ReadError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            hmtx.lsb_table_entry(2),
            Err(ReadError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            hmtx.advance_width(GlyphId::new(5)),
            Err(ReadError::InvalidGlyphId {
                glyph_id: GlyphId::new(5),
                num_glyphs: 5
            })
        );
    }

    #[rstest]
    #[case(-1)]
    #[case(i32::MIN)]
    #[case(u16::MAX as i32 + 1)]
    fn rejects_invalid_counts(#[case] value: i32) {
        let mut builder = HmtxBuilder::from_data(FontData::new(test_data::SIMPLE));
        assert!(matches!(
            builder.set_number_of_h_metrics(value),
            Err(Error::InvalidArgument {
                field: "number_of_h_metrics",
                ..
            })
        ));
        assert!(matches!(
            builder.set_num_glyphs(value),
            Err(Error::InvalidArgument {
                field: "num_glyphs",
                ..
            })
        ));
        assert_eq!(builder.number_of_h_metrics(), None);
        assert_eq!(builder.num_glyphs(), None);
    }

    #[test]
    fn rejected_count_keeps_previous_value() {
        let mut builder = HmtxBuilder::from_data(FontData::new(test_data::SIMPLE));
        builder.set_num_glyphs(5).unwrap();
        assert!(builder.set_num_glyphs(-1).is_err());
        assert_eq!(builder.num_glyphs(), Some(5));
    }

    #[test]
    fn accepts_zero() {
        let mut builder = HmtxBuilder::from_data(FontData::EMPTY);
        builder
            .set_number_of_h_metrics(0)
            .unwrap()
            .set_num_glyphs(0)
            .unwrap();
        assert_eq!(builder.number_of_h_metrics(), Some(0));
        let hmtx = builder.build().unwrap();
        assert_eq!(hmtx.number_of_lsbs(), 0);
    }

    #[test]
    fn unset_counts() {
        let builder = HmtxBuilder::from_data(FontData::new(test_data::SIMPLE));
        let Err(Error::ValidationFailed(report)) = builder.build() else {
            panic!("expected validation failure");
        };
        assert!(!report.is_empty());
        assert_eq!(report.len(), 2);
        assert_eq!(
            report.messages().collect::<Vec<_>>(),
            [
                "numberOfHMetrics must be set before building",
                "numGlyphs must be set before building"
            ]
        );
    }

    #[test]
    fn more_metrics_than_glyphs() {
        let mut builder = HmtxBuilder::from_data(FontData::new(test_data::SIMPLE));
        builder
            .set_number_of_h_metrics(4)
            .unwrap()
            .set_num_glyphs(3)
            .unwrap();
        let Err(Error::ValidationFailed(report)) = builder.build() else {
            panic!("expected validation failure");
        };
        assert_eq!(
            report.messages().collect::<Vec<_>>(),
            ["4 long metrics exceeds 3 glyphs"]
        );
    }

    #[test]
    fn data_too_short() {
        let mut builder = HmtxBuilder::from_data(FontData::new(test_data::SIMPLE));
        builder
            .set_number_of_h_metrics(3)
            .unwrap()
            .set_num_glyphs(6)
            .unwrap();
        let err = builder.build().unwrap_err();
        assert!(
            err.to_string()
                .contains("table data is 16 bytes, but the layout requires 18"),
            "{err}"
        );
    }

    #[test]
    fn header_is_kept() {
        init_logger();
        let header = TableHeader::new(Tag::new(b"hmtx"), 18)
            .with_offset(0x2F4)
            .with_checksum(0x1234_5678);
        let mut builder = HmtxBuilder::new(header, FontData::new(test_data::SIMPLE_PADDED));
        builder
            .set_number_of_h_metrics(3)
            .unwrap()
            .set_num_glyphs(5)
            .unwrap();
        assert_eq!(*builder.header(), header);
        let hmtx = builder.build().unwrap();
        assert_eq!(*hmtx.header(), header);
    }

    #[test]
    fn trailing_data_is_tolerated() {
        init_logger();
        let buf = BeBuffer::new().extend([800u16, 0]).extend([0i16; 8]);
        let mut builder = HmtxBuilder::from_data(FontData::new(buf.data()));
        builder
            .set_number_of_h_metrics(1)
            .unwrap()
            .set_num_glyphs(2)
            .unwrap();
        let hmtx = builder.build().unwrap();
        assert_eq!(hmtx.advance_width(GlyphId::new(1)), Ok(800));
    }

    #[test]
    fn build_from_dumped_table() {
        let owned = OwnedHmtx::from_glyph_metrics([(512, 0), (700, 12), (700, 30), (700, -4)]);
        let bytes = crate::dump_table(&owned).unwrap();
        let mut builder = HmtxBuilder::from_data(FontData::new(&bytes));
        builder
            .set_number_of_h_metrics(owned.number_of_h_metrics().into())
            .unwrap()
            .set_num_glyphs(owned.num_glyphs().into())
            .unwrap();
        let hmtx = builder.build().unwrap();
        assert_eq!(hmtx.number_of_h_metrics(), 2);
        assert_eq!(OwnedHmtx::from(&hmtx), owned);
    }
}
