use sqrtsum_core::{format_fixed, sum_of_square_roots};

#[test]
fn empty_range_is_zero() {
    assert_eq!(sum_of_square_roots(0), 0.0);
    assert_eq!(format_fixed(sum_of_square_roots(0), 6), "0.000000");
}

#[test]
fn single_term() {
    assert_eq!(sum_of_square_roots(1), 1.0);
    assert_eq!(format_fixed(sum_of_square_roots(1), 6), "1.000000");
}

#[test]
fn first_four_terms() {
    let expected = 1.0 + 2f64.sqrt() + 3f64.sqrt() + 2.0;
    assert_eq!(sum_of_square_roots(4), expected);
    assert_eq!(format_fixed(sum_of_square_roots(4), 6), "6.146264");
}

#[test]
fn default_bound_matches_reference_output() {
    assert_eq!(format_fixed(sum_of_square_roots(20), 6), "61.665978");
}

#[test]
fn ascending_accumulation_is_bit_exact() {
    let mut expected = 0.0_f64;
    for i in 1..=1000 {
        expected += (i as f64).sqrt();
    }
    assert_eq!(sum_of_square_roots(1000).to_bits(), expected.to_bits());
}

#[test]
fn format_respects_precision() {
    assert_eq!(format_fixed(2.4, 0), "2");
    assert_eq!(format_fixed(6.146264369941973, 3), "6.146");
    assert_eq!(format_fixed(1.0, 2), "1.00");
}
