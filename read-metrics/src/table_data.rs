//! A table's header paired with its bytes

use types::Tag;

use crate::font_data::FontData;

/// Metadata describing where a table lives in a font file.
///
/// This mirrors a record in the font's table directory. It is carried
/// alongside the table's bytes and is never interpreted or recomputed here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableHeader {
    /// The table's tag.
    pub tag: Tag,
    /// The checksum declared for the table.
    pub checksum: u32,
    /// Offset of the table from the start of the font file.
    pub offset: u32,
    /// The declared length of the table, in bytes.
    pub length: u32,
}

impl TableHeader {
    /// Create a header with the given tag and declared length.
    pub fn new(tag: Tag, length: u32) -> Self {
        TableHeader {
            tag,
            length,
            ..Default::default()
        }
    }

    /// Set the offset of this table in the font file.
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Set the checksum declared for this table.
    pub fn with_checksum(mut self, checksum: u32) -> Self {
        self.checksum = checksum;
        self
    }
}

/// The raw contents of a table: its header, and the bytes it describes.
///
/// Typed tables hold one of these rather than extending a common base type.
#[derive(Clone, Copy, Debug, Default)]
pub struct TableData<'a> {
    header: TableHeader,
    data: FontData<'a>,
}

impl<'a> TableData<'a> {
    pub fn new(header: TableHeader, data: FontData<'a>) -> Self {
        TableData { header, data }
    }

    /// Create table data with a header derived from the tag and the length
    /// of `data`.
    pub fn from_tag(tag: Tag, data: FontData<'a>) -> Self {
        let length = u32::try_from(data.len()).unwrap_or(u32::MAX);
        TableData::new(TableHeader::new(tag, length), data)
    }

    pub fn header(&self) -> &TableHeader {
        &self.header
    }

    pub fn data(&self) -> FontData<'a> {
        self.data
    }

    /// `true` if the declared length of the table disagrees with its data.
    pub fn length_mismatch(&self) -> bool {
        self.header.length as usize != self.data.len()
    }
}
