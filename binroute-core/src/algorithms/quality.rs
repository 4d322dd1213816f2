//! This module contains internal clustering quality scores: silhouette, Davies-Bouldin and
//! Calinski-Harabasz. All of them are defined only when the amount of distinct labels is in
//! `[2, n - 1]` range, otherwise `None` is returned.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/quality_test.rs"]
mod quality_test;

use crate::algorithms::math::{euclidean_distance, get_centroid, squared_euclidean_distance};
use crate::utils::Float;
use rustc_hash::FxHashMap;

/// Calculates mean silhouette coefficient: for each point, how much closer it is to its own group
/// than to the nearest other group. Range is [-1, 1], higher is better. Points in singleton groups
/// have zero coefficient.
pub fn silhouette_score(data: &[Vec<Float>], labels: &[usize]) -> Option<Float> {
    let (labels, groups) = get_scorable_labels(data, labels)?;
    let sizes = get_group_sizes(&labels, groups);

    let total = data.iter().enumerate().fold(0., |acc, (idx, point)| {
        let own = labels[idx];
        if sizes[own] < 2 {
            return acc;
        }

        let mut sums = vec![0.; groups];
        data.iter().zip(labels.iter()).enumerate().filter(|(other, _)| *other != idx).for_each(
            |(_, (other, &label))| {
                sums[label] += euclidean_distance(point, other);
            },
        );

        let a = sums[own] / (sizes[own] - 1) as Float;
        let b = (0..groups)
            .filter(|&group| group != own && sizes[group] > 0)
            .map(|group| sums[group] / sizes[group] as Float)
            .fold(Float::MAX, Float::min);

        let max = a.max(b);
        acc + if max > 0. { (b - a) / max } else { 0. }
    });

    Some(total / data.len() as Float)
}

/// Calculates Davies-Bouldin index: an average over groups of the worst ratio between the
/// within-group scatter and the separation from another group. Lower is better, zero is the best.
pub fn davies_bouldin_score(data: &[Vec<Float>], labels: &[usize]) -> Option<Float> {
    let (labels, groups) = get_scorable_labels(data, labels)?;
    let centroids = get_group_centroids(data, &labels, groups);

    let scatters = (0..groups)
        .map(|group| {
            let (sum, count) = data
                .iter()
                .zip(labels.iter())
                .filter(|(_, label)| **label == group)
                .fold((0., 0), |(sum, count), (p, _)| (sum + euclidean_distance(p, &centroids[group]), count + 1));

            sum / count as Float
        })
        .collect::<Vec<_>>();

    let separations = (0..groups)
        .map(|i| (0..groups).map(|j| euclidean_distance(&centroids[i], &centroids[j])).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let is_zero = |value: &Float| value.abs() < Float::EPSILON;
    if scatters.iter().all(is_zero) || separations.iter().flatten().all(is_zero) {
        return Some(0.);
    }

    let total = (0..groups)
        .map(|i| {
            (0..groups)
                .filter(|&j| j != i)
                .map(|j| {
                    let separation = separations[i][j];
                    // coincident centroids do not contribute
                    if separation > 0. { (scatters[i] + scatters[j]) / separation } else { 0. }
                })
                .fold(0., Float::max)
        })
        .sum::<Float>();

    Some(total / groups as Float)
}

/// Calculates Calinski-Harabasz index (variance ratio criterion): a ratio of between-group
/// dispersion to within-group dispersion scaled by degrees of freedom. Higher is better.
pub fn calinski_harabasz_score(data: &[Vec<Float>], labels: &[usize]) -> Option<Float> {
    let (labels, groups) = get_scorable_labels(data, labels)?;
    let centroids = get_group_centroids(data, &labels, groups);
    let sizes = get_group_sizes(&labels, groups);
    let mean = get_centroid(data.iter().map(|p| p.as_slice()))?;

    let between: Float = (0..groups)
        .map(|group| sizes[group] as Float * squared_euclidean_distance(&centroids[group], &mean))
        .sum();
    let within: Float =
        data.iter().zip(labels.iter()).map(|(p, &label)| squared_euclidean_distance(p, &centroids[label])).sum();

    if within == 0. {
        return Some(1.);
    }

    let (n, k) = (data.len() as Float, groups as Float);

    Some(between * (n - k) / (within * (k - 1.)))
}

/// Maps arbitrary labels to dense `0..groups` range preserving order of first appearance.
pub fn densify_labels(labels: &[usize]) -> (Vec<usize>, usize) {
    let mut mapping = FxHashMap::default();

    let dense = labels
        .iter()
        .map(|label| {
            let next = mapping.len();
            *mapping.entry(*label).or_insert(next)
        })
        .collect();

    (dense, mapping.len())
}

fn get_scorable_labels(data: &[Vec<Float>], labels: &[usize]) -> Option<(Vec<usize>, usize)> {
    assert_eq!(data.len(), labels.len(), "each data point should have a label");

    let (labels, groups) = densify_labels(labels);

    if groups < 2 || groups >= data.len() { None } else { Some((labels, groups)) }
}

fn get_group_sizes(labels: &[usize], groups: usize) -> Vec<usize> {
    labels.iter().fold(vec![0; groups], |mut sizes, &label| {
        sizes[label] += 1;
        sizes
    })
}

fn get_group_centroids(data: &[Vec<Float>], labels: &[usize], groups: usize) -> Vec<Vec<Float>> {
    (0..groups)
        .map(|group| {
            get_centroid(data.iter().zip(labels.iter()).filter(|(_, l)| **l == group).map(|(p, _)| p.as_slice()))
                .expect("dense labels have at least one member per group")
        })
        .collect()
}
