//! Geometry related algorithms.

mod geodesic;
pub use self::geodesic::*;
