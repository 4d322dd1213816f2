//! A collection of reusable algorithms without dependencies on domain models.

pub mod clustering;
pub mod geometry;
pub mod math;
pub mod quality;
