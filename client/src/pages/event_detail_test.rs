use super::*;

#[test]
fn parse_quantity_accepts_range() {
    assert_eq!(parse_quantity(" 3 ", None), Ok(3));
    assert_eq!(parse_quantity("10", Some(50)), Ok(10));
}

#[test]
fn parse_quantity_rejects_zero_garbage_and_over_cap() {
    assert!(parse_quantity("0", None).is_err());
    assert!(parse_quantity("dos", None).is_err());
    assert!(parse_quantity("11", None).is_err());
    assert!(parse_quantity("-1", None).is_err());
}

#[test]
fn parse_quantity_respects_remaining_stock() {
    let error = parse_quantity("4", Some(3)).unwrap_err();
    assert_eq!(error.field, "quantity");
    assert_eq!(error.message, "No hay suficientes entradas disponibles.");
}
