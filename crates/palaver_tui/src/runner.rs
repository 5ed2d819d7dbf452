//! Main loop and terminal lifecycle for the chat interface.

use crate::{App, CompletionOutcome, Event, EventHandler, Focus};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use palaver_core::{ChatRequest, CompletionDriver};
use palaver_error::{PalaverResult, TuiError, TuiErrorKind};
use palaver_history::HistoryStore;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Run the chat interface over a completion driver and a history store.
///
/// Completion requests run on spawned tasks and post their settled results
/// back through a channel; the event loop stays poll-driven. There is no
/// cancellation: an in-flight request runs to completion or failure, and a
/// reply whose chat no longer exists is dropped.
pub async fn run_tui(
    driver: Arc<dyn CompletionDriver>,
    store: &HistoryStore,
    system_prompt: &str,
) -> PalaverResult<()> {
    enable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to enable raw mode: {}",
            e
        )))
    })?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to setup terminal: {}",
            e
        )))
    })?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to create terminal: {}",
            e
        )))
    })?;

    let mut app = App::new(store.load()?);
    let events = EventHandler::new(250);
    let (tx, mut rx) = mpsc::unbounded_channel::<CompletionOutcome>();

    while !app.should_quit {
        terminal
            .draw(|f| crate::ui::draw(f, &app))
            .map_err(|e| TuiError::new(TuiErrorKind::Rendering(format!("Failed to draw: {}", e))))?;

        while let Ok(outcome) = rx.try_recv() {
            app.apply_outcome(outcome);
            if let Err(e) = store.save(&app.chats) {
                tracing::error!(error = %e, "Failed to persist chat history");
                app.status_message = format!("history not saved: {}", e.kind());
            }
        }

        if let Ok(Some(Event::Key(key))) = events.next() {
            handle_key(&mut app, &driver, system_prompt, &tx, key);
        }
    }

    store.save(&app.chats)?;

    // Cleanup terminal
    disable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to disable raw mode: {}",
            e
        )))
    })?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to cleanup terminal: {}",
            e
        )))
    })?;
    terminal.show_cursor().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to show cursor: {}",
            e
        )))
    })?;

    Ok(())
}

/// Handle a single key event.
fn handle_key(
    app: &mut App,
    driver: &Arc<dyn CompletionDriver>,
    system_prompt: &str,
    tx: &mpsc::UnboundedSender<CompletionOutcome>,
    key: KeyEvent,
) {
    // Global bindings
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.quit(),
            KeyCode::Char('n') => app.new_chat(),
            KeyCode::Char('b') => app.sidebar_visible = !app.sidebar_visible,
            KeyCode::Char('d') => {
                if app.delete_selected().is_some() {
                    app.status_message = String::from("Chat deleted");
                }
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Tab => app.toggle_focus(),
        KeyCode::PageUp => app.scroll_thread_up(),
        KeyCode::PageDown => app.scroll_thread_down(),
        _ => match app.focus {
            Focus::Sidebar => match key.code {
                KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
                KeyCode::Down | KeyCode::Char('j') => app.select_next(),
                KeyCode::Enter => app.focus = Focus::Input,
                _ => {}
            },
            Focus::Input => match key.code {
                KeyCode::Enter => {
                    if let Some(chat_id) = app.submit() {
                        spawn_completion(app, driver, system_prompt, tx, chat_id);
                    }
                }
                KeyCode::Backspace => {
                    app.input.pop();
                }
                KeyCode::Char(c @ '1'..='6')
                    if app.input.is_empty() && app.showing_suggestions() =>
                {
                    let n = c.to_digit(10).unwrap_or(0) as usize;
                    if let Some(chat_id) = app.submit_suggestion(n) {
                        spawn_completion(app, driver, system_prompt, tx, chat_id);
                    }
                }
                KeyCode::Char(c) => app.input.push(c),
                _ => {}
            },
        },
    }
}

/// Spawn the completion request for a just-recorded user message.
fn spawn_completion(
    app: &App,
    driver: &Arc<dyn CompletionDriver>,
    system_prompt: &str,
    tx: &mpsc::UnboundedSender<CompletionOutcome>,
    chat_id: Uuid,
) {
    let Some(chat) = app.chats.iter().find(|c| c.id == chat_id) else {
        return;
    };
    let request = ChatRequest::new(chat.to_messages(system_prompt));
    let driver = Arc::clone(driver);
    let tx = tx.clone();

    tokio::spawn(async move {
        let result = driver
            .complete(&request)
            .await
            .map(|r| r.reply)
            .map_err(|e| e.to_string());
        let _ = tx.send(CompletionOutcome { chat_id, result });
    });
}
