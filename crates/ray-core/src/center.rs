// File: crates/ray-core/src/center.rs
// Summary: Halve every value of a numeric sequence.

/// Return a new sequence of the same length with each value divided by two.
///
/// Integer inputs are widened to `f64` first, so `center(&[3])` is `[1.5]`.
pub fn center<T>(vals: &[T]) -> Vec<f64>
where
    T: Copy + Into<f64>,
{
    vals.iter().map(|&v| v.into() / 2.0).collect()
}

#[cfg(test)]
mod tests {
    use super::center;

    #[test]
    fn halves_integers_as_floats() {
        assert_eq!(center(&[2, 4, 6]), vec![1.0, 2.0, 3.0]);
        assert_eq!(center(&[3u8]), vec![1.5]);
    }

    #[test]
    fn empty_in_empty_out() {
        let empty: [f64; 0] = [];
        assert!(center(&empty).is_empty());
    }
}
