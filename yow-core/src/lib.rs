//! # yow-core
//!
//! Random access record picker for NUL-separated quotation files.
//!
//! A quotation file is a flat byte stream: an optional header, followed by
//! records separated by a single `0x00` byte. This crate locates the part of
//! the file that holds records ([`scan_range`]) and recovers one complete
//! record from a uniformly chosen byte offset ([`pick`]) without loading the
//! whole file into memory.

pub mod config;
pub mod error;
pub mod picker;
pub mod random;
pub mod range;


pub use config::{DataRange, AVG_LEN, INITIAL_CAPACITY, SEPARATOR};
pub use error::{Error, Result};
pub use picker::{pick, pick_with_limit, write_quotation, Quotation};
pub use random::{RandomSource, SeededRandom};
pub use range::scan_range;
