use super::*;

#[test]
fn edits_at_cursor_handle_multibyte_chars() {
    let mut i = Input::default();
    for c in "héllo".chars() {
        i.insert_char(c);
    }
    assert_eq!(i.cursor, 5);

    i.move_left();
    i.move_left();
    i.backspace();
    assert_eq!(i.buf, "hélo");
    i.delete();
    assert_eq!(i.buf, "héo");
    i.insert_char('→');
    assert_eq!(i.buf, "hé→o");
}

#[test]
fn cursor_is_clamped() {
    let mut i = Input::default();
    i.backspace();
    i.delete();
    i.move_left();
    assert_eq!(i.cursor, 0);
    i.insert_char('a');
    i.move_right();
    i.move_right();
    assert_eq!(i.cursor, 1);
}

#[test]
fn sync_resets_only_on_change() {
    let mut i = Input::default();
    i.insert_char('a');
    i.insert_char('b');
    i.move_left();
    i.sync("ab");
    assert_eq!(i.cursor, 1);
    i.sync("");
    assert_eq!(i.buf, "");
    assert_eq!(i.cursor, 0);
}

#[test]
fn cursor_width_counts_terminal_cells() {
    let mut i = Input::default();
    for c in "a日本".chars() {
        i.insert_char(c);
    }
    assert_eq!(i.cursor, 3);
    assert_eq!(i.cursor_width(), 5);
    i.move_left();
    assert_eq!(i.cursor_width(), 3);
}
