//! The typed tables supported by this crate.

pub mod hmtx;
