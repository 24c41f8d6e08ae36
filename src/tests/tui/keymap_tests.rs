use super::*;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn ctx(focus: Focus) -> KeyCtx {
    KeyCtx {
        connected: true,
        gate_open: false,
        focus,
    }
}

#[test]
fn disconnected_offers_only_connect_and_quit() {
    let c = KeyCtx {
        connected: false,
        gate_open: false,
        focus: Focus::Message,
    };
    assert_eq!(map_key(c, key(KeyCode::Enter)), UiCommand::Shell(Action::Connect));
    assert_eq!(map_key(c, key(KeyCode::Char('q'))), UiCommand::Quit);
    assert_eq!(map_key(c, ctrl('s')), UiCommand::None);
}

#[test]
fn open_gate_accepts_only_confirm_or_dismiss() {
    let c = KeyCtx {
        gate_open: true,
        ..ctx(Focus::Scheduled)
    };
    assert_eq!(
        map_key(c, key(KeyCode::Char('y'))),
        UiCommand::Shell(Action::ConfirmCancel)
    );
    assert_eq!(
        map_key(c, key(KeyCode::Esc)),
        UiCommand::Shell(Action::DismissCancel)
    );
    assert_eq!(map_key(c, key(KeyCode::Char('d'))), UiCommand::None);
    assert_eq!(map_key(c, ctrl('s')), UiCommand::None);
}

#[test]
fn submit_shortcuts_work_from_any_field() {
    for focus in [Focus::Channel, Focus::Message, Focus::Schedule, Focus::Scheduled] {
        assert_eq!(
            map_key(ctx(focus), ctrl('s')),
            UiCommand::Shell(Action::Submit(SubmitMode::SendNow))
        );
        assert_eq!(
            map_key(ctx(focus), ctrl('t')),
            UiCommand::Shell(Action::Submit(SubmitMode::Schedule))
        );
    }
}

#[test]
fn typing_goes_to_text_fields_only() {
    assert_eq!(
        map_key(ctx(Focus::Message), key(KeyCode::Char('d'))),
        UiCommand::Edit(EditOp::Insert('d'))
    );
    assert_eq!(
        map_key(ctx(Focus::Scheduled), key(KeyCode::Char('d'))),
        UiCommand::CancelSelected
    );
    assert_eq!(
        map_key(ctx(Focus::Channel), key(KeyCode::Right)),
        UiCommand::Shell(Action::CycleChannel(1))
    );
}

#[test]
fn focus_cycles_both_ways() {
    let mut f = Focus::Channel;
    for _ in 0..4 {
        f = f.next();
    }
    assert_eq!(f, Focus::Channel);
    assert_eq!(Focus::Channel.prev(), Focus::Scheduled);
    assert_eq!(map_key(ctx(f), key(KeyCode::Tab)), UiCommand::FocusNext);
}
