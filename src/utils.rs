use crate::vector::Vector;
use ndarray::Array1;
use rand::Rng;

/// Builds `count` vectors of the given dimension with coordinates drawn
/// uniformly from [-1, 1). Returns an empty list when `dimension` is zero.
pub fn generate_random_vectors(dimension: usize, count: usize) -> Vec<Vector> {
    let mut rng = rand::thread_rng();

    (0..count)
        .filter_map(|_| {
            Vector::from_array(Array1::from_vec(
                (0..dimension).map(|_| rng.gen_range(-1.0..1.0)).collect(),
            ))
            .ok()
        })
        .collect()
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Clamps a cosine back into [-1, 1]; rounding can push the dot product of
/// two unit vectors slightly past either end.
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}

pub fn coordinates_approx_eq(a: &Array1<f64>, b: &Array1<f64>, tolerance: f64) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b.iter())
            .all(|(x, y)| (x - y).abs() <= tolerance)
}
