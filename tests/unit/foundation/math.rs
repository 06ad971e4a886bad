use super::*;

#[test]
fn non_negative_clamps_negatives_and_nan() {
    assert_eq!(non_negative(-3.0), 0.0);
    assert_eq!(non_negative(f64::NAN), 0.0);
    assert_eq!(non_negative(2.5), 2.5);
}

#[test]
fn ratio_guards_zero_divisor() {
    assert_eq!(ratio(10.0, 0.0), 0.0);
    assert_eq!(ratio(10.0, -1.0), 0.0);
    assert_eq!(ratio(10.0, 4.0), 2.5);
}

