use super::*;

use crossterm::event::{KeyCode, KeyModifiers};
use time::UtcOffset;

use crate::compose::SubmitMode;
use crate::effect::ApiCall;
use crate::model::WorkspaceId;
use crate::session::SessionContext;

fn now() -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap()
}

fn press(app: &mut App, code: KeyCode) -> Vec<Effect> {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now())
}

fn connected_app() -> App {
    let session = SessionContext::new(WorkspaceId::new("T1"), "http://x/auth/install");
    App::new(Shell::new(session, UtcOffset::UTC))
}

#[test]
fn typed_text_reaches_draft_and_resets_after_send() {
    let mut app = connected_app();
    app.shell.handle(Action::SelectChannel("C1".to_string()), now());
    for c in "hi".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    assert_eq!(app.shell.compose().draft().text, "hi");

    let effects = app.handle_key(
        KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
        now(),
    );
    assert!(matches!(
        effects.as_slice(),
        [Effect::Api(ApiCall::SendNow { .. })]
    ));

    app.shell.apply(Completion::Submitted {
        mode: SubmitMode::SendNow,
        result: Ok(()),
    });
    app.sync_inputs();
    assert_eq!(app.message.buf, "");
    assert_eq!(app.message.cursor, 0);
}

#[test]
fn cancel_selected_opens_gate_then_enter_confirms() {
    let mut app = connected_app();
    app.shell.start();
    app.shell.apply(Completion::Scheduled {
        team: WorkspaceId::new("T1").unwrap(),
        generation: 1,
        result: Ok(vec![crate::model::ScheduledMessage {
            id: "42".to_string(),
            channel_id: "C1".to_string(),
            text: "later".to_string(),
            post_at: 1_900_000_000,
        }]),
    });

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Scheduled);

    assert!(press(&mut app, KeyCode::Char('d')).is_empty());
    assert_eq!(app.shell.scheduled().pending_cancel(), Some("42"));

    let effects = press(&mut app, KeyCode::Enter);
    assert_eq!(
        effects,
        vec![Effect::Api(ApiCall::CancelScheduled {
            id: "42".to_string()
        })]
    );
    assert!(!app.shell.scheduled().gate().is_open());
}

#[test]
fn connect_records_navigation_and_quits() {
    let session = SessionContext::new(None, "http://x/auth/install");
    let mut app = App::new(Shell::new(session, UtcOffset::UTC));
    let effects = press(&mut app, KeyCode::Enter);
    assert_eq!(
        effects,
        vec![Effect::Navigate("http://x/auth/install".to_string())]
    );
    app.navigate(vec!["http://x/auth/install".to_string()]);
    assert!(app.quit);
    assert_eq!(app.navigate_to.as_deref(), Some("http://x/auth/install"));
}
