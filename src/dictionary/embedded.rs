//! Embedded word corpus
//!
//! Generated from `data/words.txt` at build time.

include!(concat!(env!("OUT_DIR"), "/words.rs"));
