//! Import from a simple csv point table.

mod csv;
pub use self::csv::read_points;
