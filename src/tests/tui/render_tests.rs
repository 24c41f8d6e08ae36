use super::*;

#[test]
fn cursor_stays_inside_field_border() {
    let field = Rect::new(10, 0, 12, 3);
    assert_eq!(cursor_x(field, 0), 11);
    assert_eq!(cursor_x(field, 4), 15);
    // 10 inner cells: the last usable column is x + 10.
    assert_eq!(cursor_x(field, 9), 20);
    assert_eq!(cursor_x(field, 40), 20);
    assert_eq!(cursor_x(field, usize::MAX), 20);
}

#[test]
fn degenerate_field_pins_cursor_to_border() {
    assert_eq!(cursor_x(Rect::new(5, 0, 2, 3), 3), 6);
    assert_eq!(cursor_x(Rect::new(5, 0, 0, 3), 3), 6);
}
