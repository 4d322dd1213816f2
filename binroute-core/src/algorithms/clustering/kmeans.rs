//! This module contains a K-Means algorithm implementation with k-means++ seeding and multi-start.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/clustering/kmeans_test.rs"]
mod kmeans_test;

use crate::algorithms::math::{get_centroid, get_variance, squared_euclidean_distance};
use crate::utils::{Float, compare_floats, create_seeded_rng};
use rand::Rng;
use rand::rngs::SmallRng;

/// A result of K-Means clustering.
#[derive(Clone, Debug)]
pub struct KMeansResult {
    /// A label per data point in `0..k` range.
    pub labels: Vec<usize>,
    /// Final cluster centers.
    pub centroids: Vec<Vec<Float>>,
    /// Sum of squared distances of points to their closest center.
    pub inertia: Float,
}

/// A K-Means algorithm configuration.
#[derive(Clone, Debug)]
pub struct KMeans {
    k: usize,
    seed: u64,
    n_init: usize,
    max_iterations: usize,
    tolerance: Float,
}

impl KMeans {
    /// Creates a new K-Means instance with default multi-start settings.
    pub fn new(k: usize, seed: u64) -> Self {
        Self { k, seed, n_init: 20, max_iterations: 300, tolerance: 1e-4 }
    }

    /// Sets amount of independent runs with different centroid seeds. The run with the lowest
    /// inertia wins.
    pub fn with_n_init(mut self, n_init: usize) -> Self {
        self.n_init = n_init.max(1);
        self
    }

    /// Sets max amount of Lloyd iterations per run.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }

    /// Runs clustering. Returns `None` when `k` is zero or exceeds amount of data points.
    pub fn fit(&self, data: &[Vec<Float>]) -> Option<KMeansResult> {
        if self.k == 0 || data.len() < self.k {
            return None;
        }

        let tolerance = self.get_absolute_tolerance(data);

        (0..self.n_init)
            .map(|run| {
                let mut rng = create_seeded_rng(self.seed, run as u64);
                self.run_once(data, tolerance, &mut rng)
            })
            // keep the first run among equally good ones
            .fold(None, |best: Option<KMeansResult>, current| match best {
                Some(best) if compare_floats(best.inertia, current.inertia).is_le() => Some(best),
                _ => Some(current),
            })
    }

    fn run_once(&self, data: &[Vec<Float>], tolerance: Float, rng: &mut SmallRng) -> KMeansResult {
        let mut centroids = self.init_centroids(data, rng);
        let mut labels = vec![0; data.len()];

        for iteration in 0..self.max_iterations {
            let is_changed = assign_labels(data, &centroids, &mut labels);
            if !is_changed && iteration > 0 {
                break;
            }

            let new_centroids = update_centroids(data, &labels, &centroids);
            let shift: Float =
                centroids.iter().zip(new_centroids.iter()).map(|(old, new)| squared_euclidean_distance(old, new)).sum();

            centroids = new_centroids;

            if shift <= tolerance {
                break;
            }
        }

        assign_labels(data, &centroids, &mut labels);
        let inertia = data.iter().zip(labels.iter()).map(|(p, &l)| squared_euclidean_distance(p, &centroids[l])).sum();

        KMeansResult { labels, centroids, inertia }
    }

    /// Selects initial centroids using k-means++ approach: each next center is sampled with
    /// probability proportional to the squared distance to the closest existing center.
    fn init_centroids(&self, data: &[Vec<Float>], rng: &mut SmallRng) -> Vec<Vec<Float>> {
        let mut centroids = Vec::with_capacity(self.k);
        centroids.push(data[rng.gen_range(0..data.len())].clone());

        let mut closest = data.iter().map(|p| squared_euclidean_distance(p, &centroids[0])).collect::<Vec<_>>();

        while centroids.len() < self.k {
            let total: Float = closest.iter().sum();

            let next_idx = if total > 0. {
                let target = rng.gen_range(0. ..total);
                closest
                    .iter()
                    .scan(0., |acc, distance| {
                        *acc += distance;
                        Some(*acc)
                    })
                    .position(|cumulative| cumulative > target)
                    .unwrap_or(data.len() - 1)
            } else {
                rng.gen_range(0..data.len())
            };

            let centroid = data[next_idx].clone();
            closest.iter_mut().zip(data.iter()).for_each(|(distance, p)| {
                *distance = distance.min(squared_euclidean_distance(p, &centroid));
            });
            centroids.push(centroid);
        }

        centroids
    }

    /// Scales relative tolerance by the mean variance of data dimensions.
    fn get_absolute_tolerance(&self, data: &[Vec<Float>]) -> Float {
        let dimensions = data.first().map_or(0, |p| p.len());
        if dimensions == 0 {
            return 0.;
        }

        let mean_variance = (0..dimensions)
            .map(|dim| get_variance(&data.iter().map(|p| p[dim]).collect::<Vec<_>>()))
            .sum::<Float>()
            / dimensions as Float;

        mean_variance * self.tolerance
    }
}

/// Assigns each point to its closest centroid, ties are resolved in favor of the lower index.
/// Returns true if any label has changed.
fn assign_labels(data: &[Vec<Float>], centroids: &[Vec<Float>], labels: &mut [usize]) -> bool {
    data.iter().zip(labels.iter_mut()).fold(false, |is_changed, (point, label)| {
        let closest = centroids
            .iter()
            .enumerate()
            .map(|(idx, centroid)| (idx, squared_euclidean_distance(point, centroid)))
            .fold((0, Float::MAX), |best, current| if current.1 < best.1 { current } else { best })
            .0;

        let is_label_changed = *label != closest;
        *label = closest;

        is_changed || is_label_changed
    })
}

/// Recomputes centroids as means of assigned points. A centroid which lost all its points is moved
/// to the point which is the farthest from its own centroid.
fn update_centroids(data: &[Vec<Float>], labels: &[usize], centroids: &[Vec<Float>]) -> Vec<Vec<Float>> {
    let mut new_centroids = centroids
        .iter()
        .enumerate()
        .map(|(cluster, _)| {
            get_centroid(data.iter().zip(labels.iter()).filter(|(_, l)| **l == cluster).map(|(p, _)| p.as_slice()))
        })
        .collect::<Vec<_>>();

    let mut used = Vec::new();
    new_centroids
        .iter_mut()
        .filter(|centroid| centroid.is_none())
        .for_each(|centroid| {
            let farthest = data
                .iter()
                .enumerate()
                .filter(|(idx, _)| !used.contains(idx))
                .map(|(idx, p)| (idx, squared_euclidean_distance(p, &centroids[labels[idx]])))
                .fold(None, |best: Option<(usize, Float)>, current| match best {
                    Some(best) if best.1 >= current.1 => Some(best),
                    _ => Some(current),
                });

            if let Some((idx, _)) = farthest {
                used.push(idx);
                *centroid = Some(data[idx].clone());
            }
        });

    new_centroids.into_iter().zip(centroids.iter()).map(|(new, old)| new.unwrap_or_else(|| old.clone())).collect()
}
