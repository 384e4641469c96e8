use types::{BigEndian, Scalar};

use crate::error::Error;
use crate::validate::Validate;

/// A type that that can be written out as part of a font file.
///
/// Implementations append their big-endian encoding to a [TableWriter].
pub trait FontWrite {
    /// Write our data into this [TableWriter].
    fn write_into(&self, writer: &mut TableWriter);
}

/// An object that accumulates the bytes of a serialized table.
#[derive(Debug, Default)]
pub struct TableWriter {
    data: Vec<u8>,
}

/// Attempt to serialize a table.
///
/// If the table is malformed, this will return an
/// [`Error::ValidationFailed`], otherwise it will return the bytes encoding
/// the table.
pub fn dump_table<T: FontWrite + Validate>(table: &T) -> Result<Vec<u8>, Error> {
    table.validate()?;
    let mut writer = TableWriter::default();
    table.write_into(&mut writer);
    Ok(writer.into_data())
}

impl TableWriter {
    /// Write raw bytes into this table.
    ///
    /// The caller is responsible for ensuring bytes are in big-endian order.
    #[inline]
    pub fn write_slice(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes)
    }

    /// The number of bytes written so far.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consume the writer, returning the written bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

macro_rules! write_be_bytes {
    ($ty:ty) => {
        impl FontWrite for $ty {
            #[inline]
            fn write_into(&self, writer: &mut TableWriter) {
                writer.write_slice(&self.to_be_bytes())
            }
        }
    };
}

write_be_bytes!(u16);
write_be_bytes!(i16);

impl<T: Scalar> FontWrite for BigEndian<T> {
    fn write_into(&self, writer: &mut TableWriter) {
        writer.write_slice(self.be_bytes())
    }
}

impl<T: FontWrite> FontWrite for [T] {
    fn write_into(&self, writer: &mut TableWriter) {
        self.iter().for_each(|item| item.write_into(writer))
    }
}

impl<T: FontWrite> FontWrite for Vec<T> {
    fn write_into(&self, writer: &mut TableWriter) {
        self.as_slice().write_into(writer)
    }
}
