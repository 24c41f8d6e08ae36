use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::compose::SubmitMode;
use crate::shell::Action;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Focus {
    Channel,
    Message,
    Schedule,
    Scheduled,
}

impl Focus {
    pub(super) fn next(self) -> Self {
        match self {
            Focus::Channel => Focus::Message,
            Focus::Message => Focus::Schedule,
            Focus::Schedule => Focus::Scheduled,
            Focus::Scheduled => Focus::Channel,
        }
    }

    pub(super) fn prev(self) -> Self {
        match self {
            Focus::Channel => Focus::Scheduled,
            Focus::Message => Focus::Channel,
            Focus::Schedule => Focus::Message,
            Focus::Scheduled => Focus::Schedule,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum EditOp {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum UiCommand {
    None,
    Quit,
    FocusNext,
    FocusPrev,
    Edit(EditOp),
    MoveSelection(isize),
    CancelSelected,
    Shell(Action),
}

#[derive(Clone, Copy, Debug)]
pub(super) struct KeyCtx {
    pub(super) connected: bool,
    pub(super) gate_open: bool,
    pub(super) focus: Focus,
}

pub(super) fn map_key(ctx: KeyCtx, key: KeyEvent) -> UiCommand {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return UiCommand::Quit;
    }

    if !ctx.connected {
        return match key.code {
            KeyCode::Enter | KeyCode::Char('c') => UiCommand::Shell(Action::Connect),
            KeyCode::Esc | KeyCode::Char('q') => UiCommand::Quit,
            _ => UiCommand::None,
        };
    }

    // The gate swallows everything except its two answers.
    if ctx.gate_open {
        return match key.code {
            KeyCode::Enter | KeyCode::Char('y') => UiCommand::Shell(Action::ConfirmCancel),
            KeyCode::Esc | KeyCode::Char('n') => UiCommand::Shell(Action::DismissCancel),
            _ => UiCommand::None,
        };
    }

    if ctrl {
        return match key.code {
            KeyCode::Char('s') => UiCommand::Shell(Action::Submit(SubmitMode::SendNow)),
            KeyCode::Char('t') => UiCommand::Shell(Action::Submit(SubmitMode::Schedule)),
            KeyCode::Char('r') => UiCommand::Shell(Action::Refresh),
            _ => UiCommand::None,
        };
    }

    match key.code {
        KeyCode::Esc => return UiCommand::Quit,
        KeyCode::Tab => return UiCommand::FocusNext,
        KeyCode::BackTab => return UiCommand::FocusPrev,
        _ => {}
    }

    match ctx.focus {
        Focus::Channel => match key.code {
            KeyCode::Left | KeyCode::Up => UiCommand::Shell(Action::CycleChannel(-1)),
            KeyCode::Right | KeyCode::Down => UiCommand::Shell(Action::CycleChannel(1)),
            _ => UiCommand::None,
        },
        Focus::Message | Focus::Schedule => match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                UiCommand::Edit(EditOp::Insert(c))
            }
            KeyCode::Backspace => UiCommand::Edit(EditOp::Backspace),
            KeyCode::Delete => UiCommand::Edit(EditOp::Delete),
            KeyCode::Left => UiCommand::Edit(EditOp::Left),
            KeyCode::Right => UiCommand::Edit(EditOp::Right),
            _ => UiCommand::None,
        },
        Focus::Scheduled => match key.code {
            KeyCode::Up | KeyCode::Char('k') => UiCommand::MoveSelection(-1),
            KeyCode::Down | KeyCode::Char('j') => UiCommand::MoveSelection(1),
            KeyCode::Delete | KeyCode::Char('d') | KeyCode::Char('x') => {
                UiCommand::CancelSelected
            }
            _ => UiCommand::None,
        },
    }
}

#[cfg(test)]
#[path = "../tests/tui/keymap_tests.rs"]
mod tests;
