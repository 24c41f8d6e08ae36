//! Terminal front end: renders the [`Shell`] and turns keys into actions.

use std::io::{self, IsTerminal};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use time::OffsetDateTime;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::dispatch::Dispatcher;
use crate::effect::{Completion, Effect};
use crate::shell::{Action, Shell};

mod input;
use input::Input;

mod keymap;
use keymap::{EditOp, Focus, KeyCtx, UiCommand, map_key};

mod modal;
mod render;

pub(crate) struct App {
    pub(crate) shell: Shell,
    focus: Focus,
    message: Input,
    schedule: Input,
    quit: bool,
    navigate_to: Option<String>,
}

impl App {
    pub(crate) fn new(shell: Shell) -> Self {
        Self {
            shell,
            focus: Focus::Message,
            message: Input::default(),
            schedule: Input::default(),
            quit: false,
            navigate_to: None,
        }
    }

    fn key_ctx(&self) -> KeyCtx {
        KeyCtx {
            connected: self.shell.session().is_connected(),
            gate_open: self.shell.scheduled().gate().is_open(),
            focus: self.focus,
        }
    }

    /// Applies one key press; returns the API effects to dispatch.
    pub(crate) fn handle_key(&mut self, key: KeyEvent, now: OffsetDateTime) -> Vec<Effect> {
        let effects = match map_key(self.key_ctx(), key) {
            UiCommand::None => Vec::new(),
            UiCommand::Quit => {
                self.quit = true;
                Vec::new()
            }
            UiCommand::FocusNext => {
                self.focus = self.focus.next();
                Vec::new()
            }
            UiCommand::FocusPrev => {
                self.focus = self.focus.prev();
                Vec::new()
            }
            UiCommand::Edit(op) => self.edit(op, now),
            UiCommand::MoveSelection(step) => {
                self.shell.scheduled_mut().move_selection(step);
                Vec::new()
            }
            UiCommand::CancelSelected => match self.shell.scheduled().selected() {
                Some(m) => {
                    let id = m.id.clone();
                    self.shell.handle(Action::RequestCancel(id), now)
                }
                None => Vec::new(),
            },
            UiCommand::Shell(action) => self.shell.handle(action, now),
        };
        self.sync_inputs();
        effects
    }

    fn edit(&mut self, op: EditOp, now: OffsetDateTime) -> Vec<Effect> {
        let field = match self.focus {
            Focus::Message => &mut self.message,
            Focus::Schedule => &mut self.schedule,
            Focus::Channel | Focus::Scheduled => return Vec::new(),
        };
        match op {
            EditOp::Insert(c) => field.insert_char(c),
            EditOp::Backspace => field.backspace(),
            EditOp::Delete => field.delete(),
            EditOp::Left => field.move_left(),
            EditOp::Right => field.move_right(),
        }
        let value = field.buf.clone();
        let action = match self.focus {
            Focus::Schedule => Action::SetScheduleInstant(value),
            _ => Action::SetText(value),
        };
        self.shell.handle(action, now)
    }

    /// Pulls draft values back into the edit buffers (a successful submit
    /// clears them).
    pub(crate) fn sync_inputs(&mut self) {
        let draft = self.shell.compose().draft();
        self.message.sync(&draft.text);
        self.schedule.sync(&draft.schedule_instant);
    }

    fn navigate(&mut self, urls: Vec<String>) {
        if let Some(url) = urls.into_iter().next() {
            self.navigate_to = Some(url);
            self.quit = true;
        }
    }
}

/// Runs the interactive client until the user quits. Returns the install URL
/// when the user asked to connect, so the caller can hand it to a browser.
pub fn run(
    shell: Shell,
    mut dispatcher: Dispatcher,
    mut completions: UnboundedReceiver<Completion>,
) -> Result<Option<String>> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("interactive mode requires a terminal (TTY)");
    }

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let mut app = App::new(shell);
    let effects = app.shell.start();
    let navigations = dispatcher.dispatch_all(effects);
    app.navigate(navigations);

    let res = run_loop(&mut terminal, &mut app, &mut dispatcher, &mut completions);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res.map(|()| app.navigate_to)
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    dispatcher: &mut Dispatcher,
    completions: &mut UnboundedReceiver<Completion>,
) -> Result<()> {
    loop {
        let navigations = dispatcher.drain(&mut app.shell, completions);
        app.navigate(navigations);
        app.sync_inputs();

        terminal
            .draw(|f| render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => {
                    let effects = app.handle_key(k, OffsetDateTime::now_utc());
                    let navigations = dispatcher.dispatch_all(effects);
                    app.navigate(navigations);
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/tui/app_tests.rs"]
mod tests;
