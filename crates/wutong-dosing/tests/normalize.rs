use wutong_dosing::normalize;
use wutong_dosing::normalize::MAX_DOSE;

#[test]
fn non_positive_and_undefined_are_zero() {
    assert_eq!(normalize(0.0), 0);
    assert_eq!(normalize(-15.0), 0);
    assert_eq!(normalize(f64::NAN), 0);
    assert_eq!(normalize(f64::NEG_INFINITY), 0);
}

#[test]
fn rounds_half_up_to_tens() {
    assert_eq!(normalize(25.0), 30);
    assert_eq!(normalize(24.0), 20);
    assert_eq!(normalize(35.0), 40);
    assert_eq!(normalize(17.5), 20);
    assert_eq!(normalize(60.0), 60);
}

#[test]
fn any_positive_dose_is_at_least_ten() {
    assert_eq!(normalize(5.0), 10);
    assert_eq!(normalize(0.1), 10);
    assert_eq!(normalize(4.9), 10);
}

#[test]
fn monotonic_and_idempotent() {
    let mut previous = 0;
    for tenth in 0..=2000 {
        let raw = f64::from(tenth) / 10.0;
        let n = normalize(raw);
        assert!(n >= previous, "normalize({raw}) = {n} dropped below {previous}");
        assert_eq!(normalize(f64::from(n)), n);
        previous = n;
    }
}

#[test]
fn huge_input_stays_a_multiple_of_ten() {
    assert_eq!(normalize(1e12), MAX_DOSE);
    assert_eq!(normalize(f64::MAX), MAX_DOSE);
    assert_eq!(MAX_DOSE % 10, 0);
}
