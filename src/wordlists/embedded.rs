//! Embedded category word lists
//!
//! Category lists compiled into the binary at build time from `data/categories`.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/categories.rs"));
