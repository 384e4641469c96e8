//! The [hmtx (Horizontal Metrics)](https://docs.microsoft.com/en-us/typography/opentype/spec/hmtx) table

use types::{BigEndian, FixedSize, GlyphId, Tag};

use crate::{
    FontData, FontReadWithArgs, ReadArgs, ReadError, TableData, TableHeader, TopLevelTable,
};

/// 'hmtx'
pub const TAG: Tag = Tag::new(b"hmtx");

/// An advance width paired with a left side bearing.
///
/// The first `numberOfHMetrics` glyphs of a font each have one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, bytemuck::AnyBitPattern)]
#[repr(C)]
pub struct LongMetric {
    /// Advance width, in font design units.
    pub advance: BigEndian<u16>,
    /// Glyph left side bearing, in font design units.
    pub side_bearing: BigEndian<i16>,
}

impl LongMetric {
    /// Advance width, in font design units.
    pub fn advance(&self) -> u16 {
        self.advance.get()
    }

    /// Glyph left side bearing, in font design units.
    pub fn side_bearing(&self) -> i16 {
        self.side_bearing.get()
    }
}

impl FixedSize for LongMetric {
    const RAW_BYTE_LEN: usize = u16::RAW_BYTE_LEN + i16::RAW_BYTE_LEN;
}

/// The resolved horizontal metrics of a single glyph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlyphMetrics {
    /// The glyph these metrics belong to.
    pub glyph_id: GlyphId,
    /// Advance width, in font design units.
    pub advance_width: u16,
    /// Left side bearing, in font design units.
    pub left_side_bearing: i16,
}

/// The [hmtx](https://docs.microsoft.com/en-us/typography/opentype/spec/hmtx) table.
///
/// This is a read-only view over borrowed bytes. The layout is determined
/// by two external counts: `numberOfHMetrics` from `hhea` and `numGlyphs`
/// from `maxp`, passed as the `(number_of_h_metrics, num_glyphs)` arguments.
///
/// Glyphs past the last long metric reuse that metric's advance width and
/// take their side bearing from the trailing array of bare side bearings.
#[derive(Clone, Copy, Debug)]
pub struct Hmtx<'a> {
    table: TableData<'a>,
    num_glyphs: u16,
    h_metrics: &'a [LongMetric],
    left_side_bearings: &'a [BigEndian<i16>],
}

impl ReadArgs for Hmtx<'_> {
    type Args = (u16, u16);
}

impl<'a> FontReadWithArgs<'a> for Hmtx<'a> {
    fn read_with_args(data: FontData<'a>, args: &(u16, u16)) -> Result<Self, ReadError> {
        Self::from_table(TableData::from_tag(TAG, data), args)
    }
}

impl TopLevelTable for Hmtx<'_> {
    const TAG: Tag = TAG;
}

impl<'a> Hmtx<'a> {
    /// Interpret `table` using the provided `(number_of_h_metrics, num_glyphs)`.
    ///
    /// Fails if the number of long metrics exceeds the number of glyphs, or if
    /// the data is too short to hold both regions. Trailing bytes (such as
    /// padding) are ignored.
    pub fn from_table(table: TableData<'a>, args: &(u16, u16)) -> Result<Self, ReadError> {
        let (number_of_h_metrics, num_glyphs) = *args;
        let num_lsbs = num_glyphs
            .checked_sub(number_of_h_metrics)
            .ok_or(ReadError::MalformedData("numberOfHMetrics exceeds numGlyphs"))?;
        let data = table.data();
        let h_metrics_len = number_of_h_metrics as usize * LongMetric::RAW_BYTE_LEN;
        let lsbs_len = num_lsbs as usize * i16::RAW_BYTE_LEN;
        let h_metrics = data.read_array(0..h_metrics_len)?;
        let left_side_bearings = data.read_array(h_metrics_len..h_metrics_len + lsbs_len)?;
        Ok(Hmtx {
            table,
            num_glyphs,
            h_metrics,
            left_side_bearings,
        })
    }

    /// The number of long metrics (`numberOfHMetrics`).
    pub fn number_of_h_metrics(&self) -> u16 {
        self.h_metrics.len() as u16
    }

    /// The number of entries in the trailing side bearing array.
    ///
    /// This is always `num_glyphs - number_of_h_metrics`.
    pub fn number_of_lsbs(&self) -> u16 {
        self.left_side_bearings.len() as u16
    }

    /// The total number of glyphs covered by this table.
    pub fn num_glyphs(&self) -> u16 {
        self.num_glyphs
    }

    /// The long metric records.
    pub fn h_metrics(&self) -> &'a [LongMetric] {
        self.h_metrics
    }

    /// The side bearings of the glyphs following the last long metric.
    pub fn left_side_bearings(&self) -> &'a [BigEndian<i16>] {
        self.left_side_bearings
    }

    /// The advance width of the long metric at `index`.
    ///
    /// Returns [`ReadError::IndexOutOfRange`] unless
    /// `index < number_of_h_metrics`.
    pub fn h_metric_advance_width(&self, index: usize) -> Result<u16, ReadError> {
        self.h_metric(index).map(LongMetric::advance)
    }

    /// The left side bearing of the long metric at `index`.
    ///
    /// Returns [`ReadError::IndexOutOfRange`] unless
    /// `index < number_of_h_metrics`.
    pub fn h_metric_lsb(&self, index: usize) -> Result<i16, ReadError> {
        self.h_metric(index).map(LongMetric::side_bearing)
    }

    /// The entry at `index` in the trailing side bearing array.
    ///
    /// Returns [`ReadError::IndexOutOfRange`] unless `index < number_of_lsbs`.
    pub fn lsb_table_entry(&self, index: usize) -> Result<i16, ReadError> {
        self.left_side_bearings
            .get(index)
            .map(BigEndian::get)
            .ok_or(ReadError::IndexOutOfRange {
                index,
                len: self.left_side_bearings.len(),
            })
    }

    /// The advance width of the glyph.
    ///
    /// Glyphs past the last long metric share its advance width.
    pub fn advance_width(&self, glyph_id: GlyphId) -> Result<u16, ReadError> {
        let index = self.check_glyph(glyph_id)?;
        if index < self.h_metrics.len() {
            return self.h_metric_advance_width(index);
        }
        self.h_metrics
            .last()
            .map(LongMetric::advance)
            .ok_or(ReadError::MalformedData("hmtx has no long metrics"))
    }

    /// The left side bearing of the glyph.
    pub fn left_side_bearing(&self, glyph_id: GlyphId) -> Result<i16, ReadError> {
        let index = self.check_glyph(glyph_id)?;
        match index.checked_sub(self.h_metrics.len()) {
            None => self.h_metric_lsb(index),
            Some(lsb_index) => self.lsb_table_entry(lsb_index),
        }
    }

    /// Iterate over the metrics of every glyph, in glyph order.
    ///
    /// If the table has no long metrics, glyphs report an advance of zero.
    pub fn iter(&self) -> impl Iterator<Item = GlyphMetrics> + 'a {
        let last_advance = self
            .h_metrics
            .last()
            .map(LongMetric::advance)
            .unwrap_or_default();
        let long = self
            .h_metrics
            .iter()
            .map(|metric| (metric.advance(), metric.side_bearing()));
        let tail = self
            .left_side_bearings
            .iter()
            .map(move |lsb| (last_advance, lsb.get()));
        long.chain(tail)
            .enumerate()
            .map(|(gid, (advance_width, left_side_bearing))| GlyphMetrics {
                glyph_id: GlyphId::new(gid as u16),
                advance_width,
                left_side_bearing,
            })
    }

    /// The header this table was read with.
    pub fn header(&self) -> &TableHeader {
        self.table.header()
    }

    /// Return a reference to this table's raw data.
    pub fn offset_data(&self) -> FontData<'a> {
        self.table.data()
    }

    fn h_metric(&self, index: usize) -> Result<&'a LongMetric, ReadError> {
        self.h_metrics.get(index).ok_or(ReadError::IndexOutOfRange {
            index,
            len: self.h_metrics.len(),
        })
    }

    fn check_glyph(&self, glyph_id: GlyphId) -> Result<usize, ReadError> {
        if glyph_id.to_u16() < self.num_glyphs {
            Ok(glyph_id.to_u16() as usize)
        } else {
            Err(ReadError::InvalidGlyphId {
                glyph_id,
                num_glyphs: self.num_glyphs,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    //! Record accessors reject `index >= count`, and glyph accessors reject
    //! `glyph_id >= num_glyphs`. Both bounds are stricter than the historical
    //! `index > count` check and the unchecked glyph lookup; the tests below
    //! pin the stricter behavior.

    use metrics_test_data::{bebuffer::BeBuffer, hmtx as test_data};
    use rstest::rstest;

    use super::*;

    fn simple() -> Hmtx<'static> {
        Hmtx::read_with_args(FontData::new(test_data::SIMPLE), &(3, 5)).unwrap()
    }

    #[test]
    fn counts() {
        let hmtx = simple();
        assert_eq!(hmtx.number_of_h_metrics(), 3);
        assert_eq!(hmtx.number_of_lsbs(), 2);
        assert_eq!(hmtx.num_glyphs(), 5);
        assert_eq!(hmtx.h_metrics().len(), 3);
        assert_eq!(hmtx.left_side_bearings().len(), 2);
    }

    #[rstest]
    #[case(0, 600, 10)]
    #[case(1, 600, 20)]
    #[case(2, 500, 0)]
    #[case(3, 500, 5)]
    #[case(4, 500, -5)]
    fn glyph_metrics(#[case] gid: u16, #[case] advance: u16, #[case] lsb: i16) {
        let hmtx = simple();
        let gid = GlyphId::new(gid);
        assert_eq!(hmtx.advance_width(gid), Ok(advance));
        assert_eq!(hmtx.left_side_bearing(gid), Ok(lsb));
    }

    #[test]
    fn glyph_queries_agree_with_record_queries() {
        let hmtx = simple();
        let nhm = hmtx.number_of_h_metrics();
        for gid in 0..hmtx.num_glyphs() {
            let glyph = GlyphId::new(gid);
            if gid < nhm {
                assert_eq!(
                    hmtx.advance_width(glyph),
                    hmtx.h_metric_advance_width(gid as usize)
                );
                assert_eq!(hmtx.left_side_bearing(glyph), hmtx.h_metric_lsb(gid as usize));
            } else {
                assert_eq!(
                    hmtx.advance_width(glyph),
                    hmtx.h_metric_advance_width(nhm as usize - 1)
                );
                assert_eq!(
                    hmtx.left_side_bearing(glyph),
                    hmtx.lsb_table_entry((gid - nhm) as usize)
                );
            }
        }
    }

    #[test]
    fn record_accessors() {
        let hmtx = simple();
        assert_eq!(hmtx.h_metric_advance_width(0), Ok(600));
        assert_eq!(hmtx.h_metric_lsb(1), Ok(20));
        assert_eq!(hmtx.h_metric_advance_width(2), Ok(500));
        assert_eq!(hmtx.lsb_table_entry(0), Ok(5));
        assert_eq!(hmtx.lsb_table_entry(1), Ok(-5));
    }

    #[rstest]
    #[case::first_past_records(3)]
    #[case::far_past_records(100)]
    fn record_index_out_of_range(#[case] index: usize) {
        let hmtx = simple();
        let err = ReadError::IndexOutOfRange { index, len: 3 };
        assert_eq!(hmtx.h_metric_advance_width(index), Err(err.clone()));
        assert_eq!(hmtx.h_metric_lsb(index), Err(err));
    }

    #[test]
    fn lsb_index_out_of_range() {
        let hmtx = simple();
        assert_eq!(
            hmtx.lsb_table_entry(2),
            Err(ReadError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[rstest]
    #[case(5)]
    #[case(6)]
    #[case(u16::MAX)]
    fn glyph_out_of_range(#[case] gid: u16) {
        let hmtx = simple();
        let err = ReadError::InvalidGlyphId {
            glyph_id: GlyphId::new(gid),
            num_glyphs: 5,
        };
        assert_eq!(hmtx.advance_width(GlyphId::new(gid)), Err(err.clone()));
        assert_eq!(hmtx.left_side_bearing(GlyphId::new(gid)), Err(err));
    }

    #[test]
    fn monospaced() {
        let hmtx = Hmtx::read_with_args(FontData::new(test_data::MONOSPACED), &(1, 4)).unwrap();
        let advances = hmtx.iter().map(|m| m.advance_width).collect::<Vec<_>>();
        let lsbs = hmtx.iter().map(|m| m.left_side_bearing).collect::<Vec<_>>();
        assert_eq!(advances, [1229; 4]);
        assert_eq!(lsbs, [50, 40, 0, -12]);
    }

    #[test]
    fn iter_matches_queries() {
        let hmtx = simple();
        let mut count = 0;
        for metrics in hmtx.iter() {
            assert_eq!(hmtx.advance_width(metrics.glyph_id), Ok(metrics.advance_width));
            assert_eq!(
                hmtx.left_side_bearing(metrics.glyph_id),
                Ok(metrics.left_side_bearing)
            );
            count += 1;
        }
        assert_eq!(count, 5);
    }

    #[test]
    fn trailing_padding_is_ignored() {
        let hmtx = Hmtx::read_with_args(FontData::new(test_data::SIMPLE_PADDED), &(3, 5)).unwrap();
        assert_eq!(hmtx.left_side_bearing(GlyphId::new(4)), Ok(-5));
        assert_eq!(hmtx.offset_data().len(), test_data::SIMPLE.len() + 2);
    }

    #[test]
    fn no_lsb_region() {
        let buf = BeBuffer::new().extend([700u16, 0, 300, 1]);
        let hmtx = Hmtx::read_with_args(FontData::new(buf.data()), &(2, 2)).unwrap();
        assert_eq!(hmtx.number_of_lsbs(), 0);
        assert_eq!(hmtx.advance_width(GlyphId::new(1)), Ok(300));
        assert!(hmtx.lsb_table_entry(0).is_err());
    }

    #[test]
    fn no_long_metrics() {
        let buf = BeBuffer::new().extend([7i16, -7]);
        let hmtx = Hmtx::read_with_args(FontData::new(buf.data()), &(0, 2)).unwrap();
        assert_eq!(hmtx.left_side_bearing(GlyphId::new(1)), Ok(-7));
        assert!(matches!(
            hmtx.advance_width(GlyphId::new(1)),
            Err(ReadError::MalformedData(_))
        ));
        assert!(hmtx.iter().all(|m| m.advance_width == 0));
    }

    #[test]
    fn empty() {
        let hmtx = Hmtx::read_with_args(FontData::EMPTY, &(0, 0)).unwrap();
        assert_eq!(hmtx.iter().count(), 0);
        assert!(hmtx.advance_width(GlyphId::NOTDEF).is_err());
    }

    #[test]
    fn too_short() {
        let data = FontData::new(&test_data::SIMPLE[..test_data::SIMPLE.len() - 1]);
        assert_eq!(
            Hmtx::read_with_args(data, &(3, 5)).unwrap_err(),
            ReadError::OutOfBounds
        );
        assert_eq!(
            Hmtx::read_with_args(FontData::new(test_data::SIMPLE), &(4, 5)).unwrap_err(),
            ReadError::OutOfBounds
        );
    }

    #[test]
    fn more_metrics_than_glyphs() {
        assert!(matches!(
            Hmtx::read_with_args(FontData::new(test_data::SIMPLE), &(3, 2)),
            Err(ReadError::MalformedData(_))
        ));
    }

    #[test]
    fn default_header() {
        let hmtx = simple();
        assert_eq!(hmtx.header().tag, TAG);
        assert_eq!(hmtx.header().length as usize, test_data::SIMPLE.len());
        assert_eq!(<Hmtx as TopLevelTable>::TAG, Tag::new(b"hmtx"));
    }
}
