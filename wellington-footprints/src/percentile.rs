///
/// Linearly interpolated percentile of `values`.
///
/// `fraction` is clamped to `[0, 1]`. With the values sorted ascending and `k = (n - 1) * fraction`,
/// an integral `k` selects that element; otherwise the two neighbours are weighted by their
/// distance to `k`. Returns `None` for an empty sample.
///
/// # Arguments
/// - values: the sample, in any order
/// - fraction: which percentile to take, e.g. `0.01` for the first percentile
pub fn percentile(values: &[f64], fraction: f64) -> Option<f64> {
    let mut sorted = values.to_vec();
    percentile_in_place(&mut sorted, fraction)
}

///
/// Same as [percentile] but sorts `values` in place instead of copying them.
///
pub fn percentile_in_place(values: &mut [f64], fraction: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_unstable_by(f64::total_cmp);

    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };

    let k = (values.len() - 1) as f64 * fraction;
    let f = k.floor();
    let c = k.ceil();
    if f == c {
        return Some(values[k as usize]);
    }

    let d0 = values[f as usize] * (c - k);
    let d1 = values[c as usize] * (k - f);
    Some(d0 + d1)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_empty_sample_has_no_percentile() {
        assert_eq!(percentile(&[], 0.5), None);
    }

    #[rstest]
    fn test_interpolates_between_neighbours() {
        assert_eq!(percentile(&[1.0, 2.0, 3.0, 4.0], 0.5), Some(2.5));
        assert_eq!(percentile(&[4.0, 1.0, 3.0, 2.0], 0.5), Some(2.5));
    }

    #[rstest]
    #[case(0.0, -50.0)]
    #[case(1.0, 7.0)]
    #[case(0.25, -10.0)]
    fn test_endpoints_and_exact_ranks(#[case] fraction: f64, #[case] expected: f64) {
        let values = [7.0, -10.0, -50.0, 0.0, 3.0];
        assert_eq!(percentile(&values, fraction), Some(expected));
    }

    #[rstest]
    fn test_single_value() {
        assert_eq!(percentile(&[-3.5], 0.01), Some(-3.5));
    }

    #[rstest]
    fn test_low_percentile_of_null_sample() {
        // k = 99 * 0.01 = 0.99, so 0.01 * v[0] + 0.99 * v[1]
        let values: Vec<f64> = (1..=100).map(|v| -(v as f64)).collect();
        let p = percentile(&values, 0.01).unwrap();
        assert!((p - (-100.0 * 0.01 + -99.0 * 0.99)).abs() < 1e-9);
    }

    #[rstest]
    fn test_fraction_is_clamped() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(percentile(&values, -0.5), Some(1.0));
        assert_eq!(percentile(&values, 1.5), Some(3.0));
    }
}
