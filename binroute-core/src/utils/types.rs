/// Alias to a scalar floating type.
pub type Float = f64;

/// An identifier of a collection point as it is given in the point table.
pub type PointId = i64;
