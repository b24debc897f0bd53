//! Shared utility code throughout the wirebits project.
//!
//! Nothing in here takes part in encoding or decoding messages. These are
//! the helpers around it: presenting buffers for inspection and producing
//! field values for tests.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use rand;

pub mod hexdump;
pub mod math;
pub mod random;
