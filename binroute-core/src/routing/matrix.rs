#[cfg(test)]
#[path = "../../tests/unit/routing/matrix_test.rs"]
mod matrix_test;

use crate::algorithms::geometry::geodesic_distance;
use crate::models::Point;
use crate::utils::Float;

/// A dense symmetric distance matrix indexed by point position.
#[derive(Clone, Debug)]
pub struct DistanceMatrix {
    size: usize,
    distances: Vec<Float>,
}

impl DistanceMatrix {
    /// Creates a matrix using given distance function, which is evaluated once per unordered pair.
    pub fn new<T, F>(items: &[T], distance_fn: F) -> Self
    where
        F: Fn(&T, &T) -> Float,
    {
        let size = items.len();
        let mut distances = vec![0.; size * size];

        for from in 0..size {
            for to in (from + 1)..size {
                let distance = distance_fn(&items[from], &items[to]);
                distances[from * size + to] = distance;
                distances[to * size + from] = distance;
            }
        }

        Self { size, distances }
    }

    /// Creates a matrix of geodesic distances in kilometers between points.
    pub fn from_points(points: &[&Point]) -> Self {
        Self::new(points, |from, to| geodesic_distance((from.latitude, from.longitude), (to.latitude, to.longitude)))
    }

    /// Returns distance between two positions.
    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> Float {
        self.distances[from * self.size + to]
    }

    /// Returns amount of indexed points.
    pub fn size(&self) -> usize {
        self.size
    }
}
