//! Securely seeded random value helpers

use rand::Rng;

/// The 62-character alphanumeric set used for generated strings.
const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A random string of `length` characters drawn from `[a-zA-Z0-9]`.
///
/// Suitable for session tokens and nonces: the thread-local generator is a
/// CSPRNG seeded from the operating system.
pub fn alphanumeric_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| ALPHANUMERIC[rng.gen_range(0..ALPHANUMERIC.len())] as char)
        .collect()
}

/// A random integer in `min..=max`. A degenerate range (`max <= min`) falls
/// back to a draw over the full non-negative range.
pub fn int_in_range(min: i64, max: i64) -> i64 {
    let mut rng = rand::thread_rng();
    if max > min {
        rng.gen_range(min..=max)
    } else {
        rng.gen_range(0..=i64::MAX)
    }
}

/// A random float in `min..max`. A degenerate range (`max <= min`) falls
/// back to a draw from `0.0..1.0`.
pub fn float_in_range(min: f64, max: f64) -> f64 {
    let mut rng = rand::thread_rng();
    let unit: f64 = rng.gen();
    if max > min {
        min + unit * (max - min)
    } else {
        unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_length_and_charset() {
        let s = alphanumeric_string(64);
        assert_eq!(s.len(), 64);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(alphanumeric_string(0), "");
    }

    #[test]
    fn test_strings_differ() {
        // 20 alphanumeric characters colliding is vanishingly unlikely.
        assert_ne!(alphanumeric_string(20), alphanumeric_string(20));
    }

    #[test]
    fn test_int_bounds() {
        for _ in 0..100 {
            let n = int_in_range(5, 9);
            assert!((5..=9).contains(&n));
        }
        // Degenerate range falls back to the non-negative full-range draw.
        assert!(int_in_range(3, 3) >= 0);
        assert!(int_in_range(7, -2) >= 0);
    }

    #[test]
    fn test_float_bounds() {
        for _ in 0..100 {
            let f = float_in_range(-1.0, 1.0);
            assert!((-1.0..1.0).contains(&f));
            let unit = float_in_range(2.0, 2.0);
            assert!((0.0..1.0).contains(&unit));
        }
    }
}
