//! Export of planning results into csv tables and a json report.

mod csv;
pub use self::csv::*;

mod report;
pub use self::report::*;
