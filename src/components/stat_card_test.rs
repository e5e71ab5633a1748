use super::*;

#[test]
fn large_values_drop_decimals() {
    assert_eq!(format_value(182.0), "182");
    assert_eq!(format_value(240.6), "241");
    assert_eq!(format_value(-150.0), "-150");
}

#[test]
fn small_values_keep_one_decimal() {
    assert_eq!(format_value(41.23), "41.2");
    assert_eq!(format_value(0.0), "0.0");
    assert_eq!(format_value(99.96), "100.0");
}

#[test]
fn delta_is_signed_percent() {
    assert_eq!(format_delta(4.21), "+4.2%");
    assert_eq!(format_delta(-1.0), "-1.0%");
    assert_eq!(format_delta(0.0), "+0.0%");
}

#[test]
fn trend_class_follows_sign() {
    assert_eq!(trend_class(3.2), "stat-card__delta--up");
    assert_eq!(trend_class(-0.4), "stat-card__delta--down");
    assert_eq!(trend_class(0.0), "stat-card__delta--flat");
}
