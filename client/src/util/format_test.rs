use super::*;

#[test]
fn format_price_shows_two_decimals() {
    assert_eq!(format_price(Some(25.5)), "S/ 25.50");
}

#[test]
fn format_price_free_when_missing_or_zero() {
    assert_eq!(format_price(None), "Gratis");
    assert_eq!(format_price(Some(0.0)), "Gratis");
}

#[test]
fn format_datetime_trims_seconds_and_zone() {
    assert_eq!(format_datetime("2026-03-14T19:30:00.000000Z"), "2026-03-14 19:30");
    assert_eq!(format_datetime("2026-03-14 19:30:00"), "2026-03-14 19:30");
}

#[test]
fn format_datetime_passes_through_other_shapes() {
    assert_eq!(format_datetime("2026-03-14"), "2026-03-14");
    assert_eq!(format_datetime("mañana"), "mañana");
}
