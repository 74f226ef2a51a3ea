use sqrtsum_core::{sum_of_square_roots, sum_of_square_roots_checked, NegativePolicy, SqrtSumError};

#[test]
fn negative_bound_is_empty_range_by_default() {
    assert_eq!(sum_of_square_roots(-5), 0.0);
    assert_eq!(
        sum_of_square_roots_checked(-5, NegativePolicy::default()).unwrap(),
        0.0
    );
}

#[test]
fn reject_policy_refuses_negative_bound() {
    let err = sum_of_square_roots_checked(-5, NegativePolicy::Reject).unwrap_err();
    assert!(matches!(err, SqrtSumError::Input(_)));
    assert_eq!(err.info().code, "negative-bound");
    assert_eq!(err.info().context.get("n").map(String::as_str), Some("-5"));
    assert!(err.info().hint.is_some());
}

#[test]
fn reject_policy_accepts_zero_and_positive() {
    assert_eq!(
        sum_of_square_roots_checked(0, NegativePolicy::Reject).unwrap(),
        0.0
    );
    assert_eq!(
        sum_of_square_roots_checked(20, NegativePolicy::Reject)
            .unwrap()
            .to_bits(),
        sum_of_square_roots(20).to_bits()
    );
}
