use crate::events::{Event, EventHandler, Ticker, TICK_PERIOD};
use crate::state::{self, SaveReceiver, StateManager};
use crate::ui;
use chrono::Utc;
use countdown_core::{CountdownError, CountdownResult, InputState, SelectionState};
use countdown_domain::commands::{AddCountdown, Command, DeleteCountdown};
use countdown_domain::{CountdownEntry, PageState, PageView};
use countdown_persistence::RemoteStore;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

pub const SAVE_FAILED_MESSAGE: &str = "Could not save the countdowns";

const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    AddCountdown,
    ConfirmDelete { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Title,
    Date,
}

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub state: PageState,
    pub view: PageView,
    pub selection: SelectionState,
    pub title_input: InputState,
    pub date_input: InputState,
    pub form_focus: FormFocus,
    /// Blocking message; swallows the next key press
    pub alert: Option<String>,
    state_manager: StateManager,
    ticker: Ticker,
    events_tx: mpsc::UnboundedSender<Event>,
}

impl App {
    pub fn new(events_tx: mpsc::UnboundedSender<Event>) -> (Self, SaveReceiver) {
        let (state_manager, save_rx) = StateManager::new();
        let state = PageState::Loading;
        let view = PageView::render(&state);

        let app = Self {
            should_quit: false,
            mode: AppMode::Normal,
            state,
            view,
            selection: SelectionState::new(),
            title_input: InputState::new(),
            date_input: InputState::new(),
            form_focus: FormFocus::Title,
            alert: None,
            state_manager,
            ticker: Ticker::new(TICK_PERIOD),
            events_tx,
        };

        (app, save_rx)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn entries(&self) -> &[CountdownEntry] {
        self.state.entries().unwrap_or(&[])
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn saves_queued(&self) -> usize {
        self.state_manager.saves_queued()
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Tick => self.view.tick(Utc::now()),
            Event::Loaded(result) => self.handle_loaded(result),
            Event::SaveFailed(reason) => {
                self.alert = Some(format!("{}: {}", SAVE_FAILED_MESSAGE, reason));
            }
        }
    }

    fn handle_loaded(&mut self, result: CountdownResult<Vec<CountdownEntry>>) {
        if self.state != PageState::Loading {
            tracing::warn!("Ignoring load result outside of the loading state");
            return;
        }

        match result {
            Ok(entries) => {
                tracing::info!("Loaded {} countdowns", entries.len());
                self.state = PageState::Ready(entries);
                self.render();
            }
            Err(e) => {
                self.state = PageState::Error(e.user_message());
                self.view = PageView::render(&self.state);
                self.ticker.stop();
            }
        }
    }

    /// Rebuild every row, refresh labels now and restart the ticker.
    pub fn render(&mut self) {
        self.view = PageView::render(&self.state);
        self.view.tick(Utc::now());
        self.selection.clamp(self.view.items().len());
        self.ticker.restart(self.events_tx.clone());
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        if self.alert.take().is_some() {
            return;
        }

        match self.mode {
            AppMode::Normal => self.handle_normal_key(key.code),
            AppMode::AddCountdown => self.handle_form_key(key.code),
            AppMode::ConfirmDelete { index } => self.handle_confirm_key(key.code, index),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) {
        let len = self.entries().len();

        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            KeyCode::Char('a') => {
                if self.state.is_ready() {
                    self.mode = AppMode::AddCountdown;
                    self.form_focus = FormFocus::Title;
                }
            }
            KeyCode::Char('j') | KeyCode::Down => self.selection.next(len),
            KeyCode::Char('k') | KeyCode::Up => self.selection.prev(len),
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(index) = self.selection.get() {
                    self.request_delete(index);
                }
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, code: KeyCode) {
        let input = match self.form_focus {
            FormFocus::Title => &mut self.title_input,
            FormFocus::Date => &mut self.date_input,
        };

        match crate::dialog::handle_dialog_input(input, code) {
            crate::dialog::DialogAction::Submit => {
                let title = self.title_input.as_str().to_string();
                let date = self.date_input.as_str().to_string();
                self.add_countdown(&title, &date);
            }
            crate::dialog::DialogAction::Cancel => self.mode = AppMode::Normal,
            crate::dialog::DialogAction::NextField => {
                self.form_focus = match self.form_focus {
                    FormFocus::Title => FormFocus::Date,
                    FormFocus::Date => FormFocus::Title,
                };
            }
            crate::dialog::DialogAction::None => {}
        }
    }

    fn handle_confirm_key(&mut self, code: KeyCode, index: usize) {
        match code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.mode = AppMode::Normal;
                self.delete_countdown(index);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.mode = AppMode::Normal;
            }
            _ => {}
        }
    }

    /// Append a countdown; on an empty field show the prompt and change nothing.
    pub fn add_countdown(&mut self, title: &str, date: &str) {
        match self.execute(Box::new(AddCountdown::new(title, date))) {
            Ok(()) => {
                self.title_input.clear();
                self.date_input.clear();
                self.form_focus = FormFocus::Title;
                self.mode = AppMode::Normal;
                self.render();
                self.selection.set(self.entries().len().checked_sub(1));
                self.state_manager.queue_save(&self.state);
            }
            Err(e) => self.show_command_error(e),
        }
    }

    /// Ask for confirmation naming the entry at `index`.
    pub fn request_delete(&mut self, index: usize) {
        if index < self.entries().len() {
            self.mode = AppMode::ConfirmDelete { index };
        }
    }

    pub fn delete_countdown(&mut self, index: usize) {
        match self.execute(Box::new(DeleteCountdown { index })) {
            Ok(()) => {
                self.render();
                self.state_manager.queue_save(&self.state);
            }
            Err(e) => self.show_command_error(e),
        }
    }

    /// Question shown while a delete awaits confirmation.
    pub fn delete_prompt(&self) -> Option<String> {
        let AppMode::ConfirmDelete { index } = self.mode else {
            return None;
        };
        self.entries()
            .get(index)
            .map(|entry| format!("Delete \"{}\"?", entry.title))
    }

    fn execute(&mut self, command: Box<dyn Command>) -> CountdownResult<()> {
        self.state_manager.execute(&mut self.state, command)
    }

    fn show_command_error(&mut self, error: CountdownError) {
        match &error {
            CountdownError::Validation(_) => tracing::debug!("Rejected: {}", error),
            _ => tracing::error!("Command failed: {}", error),
        }
        self.alert = Some(error.user_message());
    }

    pub async fn run(
        &mut self,
        mut events: EventHandler,
        store: Arc<dyn RemoteStore>,
        save_rx: SaveReceiver,
    ) -> CountdownResult<()> {
        let mut terminal = setup_terminal()?;

        events.start_input();
        state::spawn_load(Arc::clone(&store), events.sender());
        let save_worker = state::spawn_save_worker(store, save_rx, events.sender());

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(event) => self.handle_event(event),
                None => break,
            }
        }

        events.stop();
        self.ticker.stop();
        restore_terminal(&mut terminal)?;

        self.state_manager.close();
        if tokio::time::timeout(SHUTDOWN_GRACE, save_worker).await.is_err() {
            tracing::warn!("Gave up waiting for pending saves");
        }
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
