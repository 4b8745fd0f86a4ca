//! Terminal client entry point.

use std::io::{self, Stdout};
use std::time::Duration;

use chrono::Local;
use crossterm::{
    event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use justdoit_core::{clock, TodoApi, TodoApp};
use justdoit_tui::config::Config;
use justdoit_tui::error::TuiError;
use justdoit_tui::events::TuiEvent;
use justdoit_tui::keys::{map_key, Action};
use justdoit_tui::prompt::ResolvedPrompt;
use justdoit_tui::state::{Focus, FormField, Modal, Tui};
use justdoit_tui::{transport, ui};
use ratatui::{backend::CrosstermBackend, Terminal};
use reqwest::Client;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = Config::from_env()?;
    let http = Client::new();
    let mut tui = Tui::new(TodoApp::new(TodoApi::new(&config.api_base_url)));

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard;

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    spawn_input_reader(event_tx.clone());

    let req = tui.app.begin_load();
    let result = transport::execute(&http, req).await;
    tui.app.finish_load(result);

    // Drives the live clock; dropping the interval on loop exit stops the
    // tick with the loop.
    let mut ticker = tokio::time::interval(Duration::from_secs(1));

    loop {
        tui.clock = clock::wall_clock(Local::now());
        terminal.draw(|f| ui::render(f, &tui))?;

        tokio::select! {
            _ = ticker.tick() => {}
            Some(event) = event_rx.recv() => {
                if handle_event(&mut tui, &http, event).await? {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                match evt {
                    CrosstermEvent::Key(key) => {
                        let _ = sender.blocking_send(TuiEvent::Input(key));
                    }
                    CrosstermEvent::Resize(width, height) => {
                        let _ = sender.blocking_send(TuiEvent::Resize { width, height });
                    }
                    _ => {}
                }
            }
        }
    });
}

async fn handle_event(tui: &mut Tui, http: &Client, event: TuiEvent) -> Result<bool, TuiError> {
    let TuiEvent::Input(key) = event else {
        // Resizes just trigger the redraw at the top of the loop.
        return Ok(false);
    };

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    if tui.modal.is_some() {
        handle_modal_key(tui, http, key).await;
        return Ok(false);
    }
    if tui.app.editing().is_some() {
        handle_edit_key(tui, http, key).await;
        return Ok(false);
    }
    if let Focus::Form(field) = tui.focus {
        handle_form_key(tui, http, key, field).await;
        return Ok(false);
    }

    if let Some(action) = map_key(key) {
        return handle_action(tui, http, action).await;
    }
    Ok(false)
}

async fn handle_action(tui: &mut Tui, http: &Client, action: Action) -> Result<bool, TuiError> {
    match action {
        Action::Quit => return Ok(true),
        Action::MoveUp => tui.select_previous(),
        Action::MoveDown => tui.select_next(),
        Action::ToggleComplete => {
            if let Some(id) = tui.selected_id() {
                if let Some(req) = tui.app.begin_toggle(&id) {
                    let result = transport::execute(http, req).await;
                    tui.app.finish_toggle(result);
                }
            }
        }
        Action::ToggleExpand => {
            if let Some(id) = tui.selected_id() {
                tui.app.toggle_expand(&id);
            }
        }
        Action::NewItem => tui.focus = Focus::Form(FormField::Title),
        Action::EditItem => {
            if let Some(id) = tui.selected_id() {
                tui.app.begin_edit(&id);
            }
        }
        Action::DeleteItem => {
            if let Some(id) = tui.selected_id() {
                tui.modal = Some(Modal::ConfirmDelete { id });
            }
        }
        Action::Refresh => {
            let req = tui.app.begin_load();
            let result = transport::execute(http, req).await;
            tui.app.finish_load(result);
            tui.clamp_selection();
        }
    }
    Ok(false)
}

async fn handle_form_key(tui: &mut Tui, http: &Client, key: KeyEvent, field: FormField) {
    match key.code {
        KeyCode::Esc => tui.focus = Focus::List,
        KeyCode::Tab => {
            tui.focus = Focus::Form(match field {
                FormField::Title => FormField::Description,
                FormField::Description => FormField::Title,
            })
        }
        KeyCode::Enter => {
            if let Some(req) = tui.app.begin_create() {
                let result = transport::execute(http, req).await;
                tui.app.finish_create(result);
            }
        }
        KeyCode::Backspace => edit_form_field(tui, field, |text| {
            text.pop();
        }),
        KeyCode::Char(c) => edit_form_field(tui, field, |text| text.push(c)),
        _ => {}
    }
}

fn edit_form_field(tui: &mut Tui, field: FormField, apply: impl FnOnce(&mut String)) {
    match field {
        FormField::Title => {
            let mut text = tui.app.draft().title.clone();
            apply(&mut text);
            tui.app.set_draft_title(text);
        }
        FormField::Description => {
            let mut text = tui.app.draft().description.clone();
            apply(&mut text);
            tui.app.set_draft_description(text);
        }
    }
}

async fn handle_edit_key(tui: &mut Tui, http: &Client, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => tui.app.cancel_edit(),
        KeyCode::Enter => {
            let mut prompts = ResolvedPrompt::approved();
            match tui.app.begin_edit_commit(&mut prompts) {
                Some(req) => {
                    let result = transport::execute(http, req).await;
                    tui.app.finish_edit_commit(result);
                }
                None => {
                    if let Some(message) = prompts.take_alert() {
                        tui.modal = Some(Modal::Alert { message });
                    }
                }
            }
        }
        KeyCode::Backspace => {
            let mut draft = tui
                .app
                .editing()
                .map(|e| e.draft.clone())
                .unwrap_or_default();
            draft.pop();
            tui.app.set_edit_draft(draft);
        }
        KeyCode::Char(c) => {
            let mut draft = tui
                .app
                .editing()
                .map(|e| e.draft.clone())
                .unwrap_or_default();
            draft.push(c);
            tui.app.set_edit_draft(draft);
        }
        _ => {}
    }
}

async fn handle_modal_key(tui: &mut Tui, http: &Client, key: KeyEvent) {
    let Some(modal) = tui.modal.clone() else {
        return;
    };
    match modal {
        Modal::ConfirmDelete { id } => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                tui.modal = None;
                let mut prompts = ResolvedPrompt::approved();
                if let Some(req) = tui.app.begin_delete(&id, &mut prompts) {
                    let result = transport::execute(http, req).await;
                    tui.app.finish_delete(&id, result);
                    tui.clamp_selection();
                }
            }
            KeyCode::Char('n') | KeyCode::Esc => tui.modal = None,
            _ => {}
        },
        Modal::Alert { .. } => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(_)) {
                tui.modal = None;
            }
        }
    }
}
