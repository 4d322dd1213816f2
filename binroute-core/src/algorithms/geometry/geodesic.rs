#[cfg(test)]
#[path = "../../../tests/unit/algorithms/geometry/geodesic_test.rs"]
mod geodesic_test;

use crate::utils::Float;

// semi-axes and flattening of WGS-84 geoidal reference, in kilometers
const WGS84_A: Float = 6_378.137;
const WGS84_F: Float = 1. / 298.257_223_563;
const WGS84_B: Float = (1. - WGS84_F) * WGS84_A;

const MEAN_EARTH_RADIUS: Float = 6_371.008_8;

const MAX_ITERATIONS: usize = 200;
const CONVERGENCE_THRESHOLD: Float = 1e-12;

/// Gets geodesic distance in kilometers between two points given as (latitude, longitude) pairs in
/// degrees. Uses Vincenty's inverse formula on the WGS-84 ellipsoid and falls back to haversine
/// formula for nearly antipodal points where the iteration does not converge.
pub fn geodesic_distance(from: (Float, Float), to: (Float, Float)) -> Float {
    vincenty_distance(from, to).unwrap_or_else(|| haversine_distance(from, to))
}

/// Gets great-circle distance in kilometers between two points using haversine formula and the
/// mean Earth radius.
pub fn haversine_distance((lat1, lng1): (Float, Float), (lat2, lng2): (Float, Float)) -> Float {
    let d_lat = (lat1 - lat2).to_radians();
    let d_lng = (lng1 - lng2).to_radians();

    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();

    let a = (d_lat / 2.).sin() * (d_lat / 2.).sin() + (d_lng / 2.).sin() * (d_lng / 2.).sin() * lat1.cos() * lat2.cos();
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    MEAN_EARTH_RADIUS * c
}

/// Returns `None` if the formula does not converge.
fn vincenty_distance((lat1, lng1): (Float, Float), (lat2, lng2): (Float, Float)) -> Option<Float> {
    let l = (lng2 - lng1).to_radians();

    let u1 = ((1. - WGS84_F) * lat1.to_radians().tan()).atan();
    let u2 = ((1. - WGS84_F) * lat2.to_radians().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;

    for _ in 0..MAX_ITERATIONS {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();

        let sin_sigma =
            ((cos_u2 * sin_lambda).powi(2) + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2)).sqrt();
        if sin_sigma == 0. {
            // coincident points
            return Some(0.);
        }

        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = sin_sigma.atan2(cos_sigma);

        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1. - sin_alpha * sin_alpha;

        // equatorial line has cos_sq_alpha equal to zero
        let cos_2sigma_m = if cos_sq_alpha != 0. { cos_sigma - 2. * sin_u1 * sin_u2 / cos_sq_alpha } else { 0. };

        let c = WGS84_F / 16. * cos_sq_alpha * (4. + WGS84_F * (4. - 3. * cos_sq_alpha));

        let lambda_prev = lambda;
        lambda = l
            + (1. - c)
                * WGS84_F
                * sin_alpha
                * (sigma + c * sin_sigma * (cos_2sigma_m + c * cos_sigma * (-1. + 2. * cos_2sigma_m * cos_2sigma_m)));

        if (lambda - lambda_prev).abs() < CONVERGENCE_THRESHOLD {
            let u_sq = cos_sq_alpha * (WGS84_A * WGS84_A - WGS84_B * WGS84_B) / (WGS84_B * WGS84_B);
            let a = 1. + u_sq / 16384. * (4096. + u_sq * (-768. + u_sq * (320. - 175. * u_sq)));
            let b = u_sq / 1024. * (256. + u_sq * (-128. + u_sq * (74. - 47. * u_sq)));

            let delta_sigma = b
                * sin_sigma
                * (cos_2sigma_m
                    + b / 4.
                        * (cos_sigma * (-1. + 2. * cos_2sigma_m * cos_2sigma_m)
                            - b / 6.
                                * cos_2sigma_m
                                * (-3. + 4. * sin_sigma * sin_sigma)
                                * (-3. + 4. * cos_2sigma_m * cos_2sigma_m)));

            return Some(WGS84_B * a * (sigma - delta_sigma));
        }
    }

    None
}
