#[cfg(test)]
#[path = "../../../tests/unit/algorithms/math/distance_test.rs"]
mod distance_test;

use crate::utils::Float;

/// Calculates squared euclidean distance between two vectors of the same dimension.
#[inline]
pub fn squared_euclidean_distance(a: &[Float], b: &[Float]) -> Float {
    debug_assert_eq!(a.len(), b.len());

    a.iter().zip(b.iter()).map(|(a, b)| (a - b) * (a - b)).sum()
}

/// Calculates euclidean distance between two vectors of the same dimension.
#[inline]
pub fn euclidean_distance(a: &[Float], b: &[Float]) -> Float {
    squared_euclidean_distance(a, b).sqrt()
}

/// Calculates a centroid (a coordinate-wise mean) of given vectors.
/// Returns `None` when there is nothing to average.
pub fn get_centroid<'a, I>(vectors: I) -> Option<Vec<Float>>
where
    I: IntoIterator<Item = &'a [Float]>,
{
    let mut iter = vectors.into_iter();
    let first = iter.next()?;

    let (sum, count) = iter.fold((first.to_vec(), 1), |(mut sum, count), vector| {
        sum.iter_mut().zip(vector.iter()).for_each(|(acc, value)| *acc += value);
        (sum, count + 1)
    });

    Some(sum.into_iter().map(|value| value / count as Float).collect())
}
