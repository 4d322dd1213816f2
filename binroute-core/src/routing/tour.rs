#[cfg(test)]
#[path = "../../tests/unit/routing/tour_test.rs"]
mod tour_test;

use crate::routing::DistanceMatrix;
use crate::utils::{Float, PointId};

/// A closed tour over point ids: starts and ends with the same id and visits every other point of
/// its cluster exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tour {
    ids: Vec<PointId>,
}

impl Tour {
    /// Creates a closed tour from visit order of points (without the returning element).
    pub fn from_visits(visits: impl IntoIterator<Item = PointId>) -> Self {
        let mut ids = visits.into_iter().collect::<Vec<_>>();
        if let Some(&first) = ids.first() {
            ids.push(first);
        }

        Self { ids }
    }

    /// Returns an empty tour.
    pub fn empty() -> Self {
        Self { ids: Vec::new() }
    }

    /// Returns point ids including the closing one.
    pub fn ids(&self) -> &[PointId] {
        self.ids.as_slice()
    }

    /// Returns ids of visited points without the closing one.
    pub fn visits(&self) -> &[PointId] {
        &self.ids[..self.ids.len().saturating_sub(1)]
    }

    /// Returns length of the tour including the closing element.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if the tour visits nothing.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Builds visit order using nearest neighbor heuristic starting from position zero.
/// Ties are resolved in favor of the remaining candidate which comes first in position order.
/// Returns positions in visit order (without the closing one) and total closed tour distance.
pub fn create_nearest_neighbor_order(matrix: &DistanceMatrix) -> (Vec<usize>, Float) {
    let size = matrix.size();
    if size == 0 {
        return (Vec::new(), 0.);
    }

    let mut order = Vec::with_capacity(size);
    let mut remaining = (1..size).collect::<Vec<_>>();
    let mut total = 0.;
    let mut current = 0;

    order.push(current);

    while !remaining.is_empty() {
        let (remaining_idx, distance) = remaining
            .iter()
            .enumerate()
            .map(|(idx, &candidate)| (idx, matrix.distance(current, candidate)))
            .fold((0, Float::MAX), |best, next| if next.1 < best.1 { next } else { best });

        current = remaining.remove(remaining_idx);
        total += distance;
        order.push(current);
    }

    total += matrix.distance(current, 0);

    (order, total)
}
