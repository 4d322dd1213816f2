//! Domain models shared by clustering, routing and reporting.

mod point;
pub use self::point::*;
