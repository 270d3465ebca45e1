//! Domain types: the configuration record and the host tables it is applied to.
//!
//! Nothing in here performs I/O.  Reading the config file and talking to the
//! server live in the `tweaks-mod` crate.

pub mod config;
pub mod metadata;
pub mod tables;
