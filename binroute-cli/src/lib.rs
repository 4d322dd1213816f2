//! A waste collection route planning library public API: point table import, data simulation,
//! planning configuration and result export.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod extensions;
