//! The tables supported by this crate.

pub mod hmtx;
