#[cfg(test)]
#[path = "../../../tests/unit/algorithms/math/statistics_test.rs"]
mod statistics_test;

use crate::utils::Float;

/// Gets mean of values.
pub fn get_mean(values: &[Float]) -> Float {
    if values.is_empty() {
        return 0.;
    }

    let sum: Float = values.iter().sum();
    sum / values.len() as Float
}

/// Returns population variance (Bessel's correction is not used).
pub fn get_variance(values: &[Float]) -> Float {
    get_variance_mean(values).0
}

/// Standardizes values in place to zero mean and unit variance. When all values are (almost) the
/// same, they are mapped to zero.
pub fn standardize(values: &mut [Float]) {
    let (variance, mean) = get_variance_mean(values);
    let stdev = variance.max(0.).sqrt();
    // the mean of equal values is not always exactly representable, so a tiny spread is treated as zero
    let is_constant = stdev <= 10. * Float::EPSILON * mean.abs().max(1.);
    let scale = if is_constant { 1. } else { stdev };
    let mean = if is_constant { values.first().copied().unwrap_or(mean) } else { mean };

    values.iter_mut().for_each(|value| *value = (*value - mean) / scale);
}

/// Returns variance and mean.
fn get_variance_mean(values: &[Float]) -> (Float, Float) {
    if values.is_empty() {
        return (0., 0.);
    }

    let mean = get_mean(values);

    let (first, second) = values.iter().fold((0., 0.), |acc, v| {
        let dev = v - mean;
        (acc.0 + dev * dev, acc.1 + dev)
    });

    ((first - (second * second / values.len() as Float)) / (values.len() as Float), mean)
}
