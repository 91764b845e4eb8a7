//! Containers shared by the `ja_*` crates.
//!
//! - [`hash`]: `hashbrown` maps and sets with a fixed `foldhash` seed, so
//!   iteration order is reproducible between runs.
//! - [`TypeIdMap`]: a map keyed by [`TypeId`](core::any::TypeId), used by the
//!   descriptor cache.
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod typeid_map;

pub mod hash;

// -----------------------------------------------------------------------------
// Top-level exports

pub use typeid_map::TypeIdMap;
