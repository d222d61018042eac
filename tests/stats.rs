use formqc::math::stats::{coefficient_of_variation, mean, median, population_std};

#[test]
fn mean_of_samples() {
    assert_eq!(mean(&[2.0, 4.0, 6.0]), 4.0);
    assert_eq!(mean(&[]), 0.0);
}

#[test]
fn population_std_divides_by_n() {
    // Variance of [2, 4, 4, 4, 5, 5, 7, 9] is 4 with the population formula.
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert!((population_std(&values) - 2.0).abs() < 1e-12);
    assert_eq!(population_std(&[5.0]), 0.0);
    assert_eq!(population_std(&[]), 0.0);
}

#[test]
fn median_odd_and_even() {
    let mut odd = [3.0, 1.0, 2.0];
    assert_eq!(median(&mut odd), 2.0);
    let mut even = [4.0, 1.0, 3.0, 2.0];
    assert_eq!(median(&mut even), 2.5);
    let mut empty: [f64; 0] = [];
    assert_eq!(median(&mut empty), 0.0);
}

#[test]
fn coefficient_of_variation_in_percent() {
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let cv = coefficient_of_variation(&values).unwrap();
    assert!((cv - 40.0).abs() < 1e-9);
}

#[test]
fn coefficient_of_variation_undefined_cases() {
    assert!(coefficient_of_variation(&[]).is_none());
    assert!(coefficient_of_variation(&[1.0, -1.0]).is_none());
}
