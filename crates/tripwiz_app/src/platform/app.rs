use std::io::{self, Write};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::{cursor, execute, queue, terminal};
use tripwiz_core::{update, AppState, AppViewModel, Debouncer, Msg, Stage, QUIET_PERIOD};
use tripwiz_engine::FetchSettings;
use tripwiz_logging::{trip_debug, trip_info};

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui;
use super::ui::render::DropdownState;

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);
    trip_info!("tripwiz starting");

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let effects = EffectRunner::new(FetchSettings::default(), msg_tx.clone());
    let mut shell = Shell::new(msg_tx, msg_rx, effects);

    let _guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();
    shell.run(&mut stdout)
}

/// Puts the terminal into raw mode for the lifetime of the run loop and
/// restores it on drop, including the unwind path.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

struct Shell {
    state: AppState,
    debouncer: Debouncer,
    /// Mirror of the text the user has typed; the core owns the canonical
    /// query, this buffer exists so key handling can append and pop.
    draft: String,
    dropdown: DropdownState,
    ui_dirty: bool,
    quit: bool,
    msg_tx: mpsc::Sender<Msg>,
    msg_rx: mpsc::Receiver<Msg>,
    effects: EffectRunner,
}

impl Shell {
    fn new(msg_tx: mpsc::Sender<Msg>, msg_rx: mpsc::Receiver<Msg>, effects: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            debouncer: Debouncer::new(QUIET_PERIOD),
            draft: String::new(),
            dropdown: DropdownState::default(),
            ui_dirty: true,
            quit: false,
            msg_tx,
            msg_rx,
            effects,
        }
    }

    fn run(&mut self, out: &mut impl Write) -> anyhow::Result<()> {
        loop {
            if event::poll(Duration::from_millis(25))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    Event::Resize(_, _) => self.ui_dirty = true,
                    _ => {}
                }
            } else {
                let _ = self.msg_tx.send(Msg::Tick);
            }

            if let Some(settled) = self.debouncer.poll(Instant::now()) {
                let _ = self.msg_tx.send(Msg::QuerySettled(settled));
            }

            self.process_pending_messages();

            if self.quit {
                trip_info!("tripwiz exiting");
                return Ok(());
            }

            let core_dirty = self.state.consume_dirty();
            let ui_dirty = std::mem::take(&mut self.ui_dirty);
            if core_dirty || ui_dirty {
                let view = self.state.view();
                let lines = ui::render::render(&view, self.dropdown);
                draw(out, &lines)?;
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        let view = self.state.view();
        match key.code {
            KeyCode::Tab => {
                let _ = self.msg_tx.send(Msg::NextClicked);
            }
            KeyCode::Enter => {
                if self.dropdown_visible(&view) {
                    let index = self.dropdown.highlight.min(view.options.len() - 1);
                    let choice = view.options[index].suggestion.clone();
                    self.dropdown.open = false;
                    self.ui_dirty = true;
                    let _ = self.msg_tx.send(Msg::LocationPicked(Some(choice)));
                } else {
                    let _ = self.msg_tx.send(Msg::NextClicked);
                }
            }
            KeyCode::Esc if view.stage == Stage::Location => {
                let _ = self.msg_tx.send(Msg::LocationPicked(None));
            }
            KeyCode::Up if self.dropdown_visible(&view) => {
                self.dropdown.highlight = self.dropdown.highlight.saturating_sub(1);
                self.ui_dirty = true;
            }
            KeyCode::Down if self.dropdown_visible(&view) => {
                let last = view.options.len() - 1;
                self.dropdown.highlight = (self.dropdown.highlight + 1).min(last);
                self.ui_dirty = true;
            }
            KeyCode::Char(ch) if view.stage == Stage::Location => {
                self.draft.push(ch);
                self.edit_query();
            }
            KeyCode::Backspace if view.stage == Stage::Location => {
                self.draft.pop();
                self.edit_query();
            }
            _ => {}
        }
    }

    fn dropdown_visible(&self, view: &AppViewModel) -> bool {
        view.stage == Stage::Location && self.dropdown.open && !view.options.is_empty()
    }

    fn edit_query(&mut self) {
        let _ = self.msg_tx.send(Msg::QueryEdited(self.draft.clone()));
        self.debouncer.record(self.draft.clone(), Instant::now());
    }

    fn process_pending_messages(&mut self) {
        let mut inbox = Vec::new();
        while let Ok(msg) = self.msg_rx.try_recv() {
            inbox.push(msg);
        }
        for msg in inbox {
            self.dispatch_msg(msg);
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        if let Msg::LocationPicked(choice) = &msg {
            trip_debug!(
                "selected location: {:?}",
                choice.as_ref().map(|pick| pick.label())
            );
        }
        // Results unfold the dropdown only once the state machine has
        // accepted them; a superseded completion leaves the frame alone.
        let options_before = match &msg {
            Msg::FetchSucceeded { .. } => Some(self.state.view().options),
            _ => None,
        };

        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.enqueue(effects);

        if let Some(before) = options_before {
            let after = self.state.view().options;
            if !after.is_empty() && after != before {
                // Fresh results unfold from the top.
                self.dropdown.open = true;
                self.dropdown.highlight = 0;
                self.ui_dirty = true;
            }
        }
    }
}

fn draw(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    queue!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    for (row, line) in lines.iter().enumerate() {
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        queue!(out, cursor::MoveTo(0, row), Print(line))?;
    }
    out.flush()
}
