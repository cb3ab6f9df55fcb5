//! Elevation generation
//!
//! Fractal noise sampled over the grid, then min-max normalized so the
//! terrain thresholds always see the full [0, 1] range.

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

/// Noise input scale; larger values stretch terrain features out.
const NOISE_SCALE: f64 = 50.0;
/// Octaves of detail layered into the fractal.
const OCTAVES: usize = 6;
/// Amplitude falloff per octave.
const PERSISTENCE: f64 = 0.5;
/// Frequency multiplier per octave.
const LACUNARITY: f64 = 2.0;

/// Generate a `width * height` elevation grid, row-major, in [0, 1].
///
/// Deterministic for a given seed and size.
pub fn generate_elevation(seed: u64, width: u32, height: u32) -> Vec<f32> {
    // Noise seeds are u32; fold the high half in instead of dropping it
    let fbm = Fbm::<Perlin>::new((seed ^ (seed >> 32)) as u32)
        .set_octaves(OCTAVES)
        .set_persistence(PERSISTENCE)
        .set_lacunarity(LACUNARITY);

    let mut values = Vec::with_capacity((width as usize) * (height as usize));
    for y in 0..height {
        for x in 0..width {
            let sample = fbm.get([x as f64 / NOISE_SCALE, y as f64 / NOISE_SCALE]);
            values.push(sample as f32);
        }
    }
    normalize(&mut values);
    values
}

/// Min-max normalize in place. A flat grid maps to 0.5 everywhere.
fn normalize(values: &mut [f32]) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &v in values.iter() {
        min = min.min(v);
        max = max.max(v);
    }

    let range = max - min;
    if range <= f32::EPSILON {
        for v in values.iter_mut() {
            *v = 0.5;
        }
        return;
    }
    for v in values.iter_mut() {
        *v = (*v - min) / range;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_for_seed() {
        let a = generate_elevation(42, 32, 24);
        let b = generate_elevation(42, 32, 24);
        assert_eq!(a, b);
    }

    #[test]
    fn test_seeds_differ() {
        let a = generate_elevation(1, 32, 24);
        let b = generate_elevation(2, 32, 24);
        assert_ne!(a, b);
    }

    #[test]
    fn test_high_seed_bits_matter() {
        let a = generate_elevation(9, 32, 24);
        let b = generate_elevation(9 | (1 << 32), 32, 24);
        assert_ne!(a, b);
    }

    #[test]
    fn test_normalized_to_unit_range() {
        let values = generate_elevation(7, 40, 30);
        assert_eq!(values.len(), 40 * 30);
        let min = values.iter().copied().fold(f32::INFINITY, f32::min);
        let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        assert!(min >= 0.0 && max <= 1.0);
        // Min-max normalization pins both endpoints
        assert!(min.abs() < 1e-6);
        assert!((max - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_flat_input_normalizes_to_half() {
        let mut values = vec![0.37_f32; 16];
        normalize(&mut values);
        assert!(values.iter().all(|&v| (v - 0.5).abs() < 1e-6));
    }
}
