use std::fmt::{Debug, Display, Formatter};

/// A four-byte table identifier, such as `hmtx`.
///
/// Tags are carried alongside table data and never validated, so bytes
/// outside printable ASCII are allowed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag([u8; 4]);

impl Tag {
    pub const fn new(src: &[u8; 4]) -> Tag {
        Tag(*src)
    }
}

// printable bytes as chars, anything else as `{0xNN}`.
impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.iter().try_for_each(|byte| match byte {
            0x20..=0x7E => write!(f, "{}", *byte as char),
            _ => write!(f, "{{0x{byte:02X}}}"),
        })
    }
}

impl Debug for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tag({self})")
    }
}

// only used to fill in headers that have not been given a tag.
impl Default for Tag {
    fn default() -> Self {
        Tag([b' '; 4])
    }
}
