//! traits for identifying font tables

use types::Tag;

/// A table that has an associated tag.
///
/// This is true of top-level tables, which are stored in the table directory
/// of a font file and are identified by their tag.
pub trait TopLevelTable {
    /// The table's tag.
    const TAG: Tag;
}
