//! Tests for chat interface state transitions.

use palaver_core::{Chat, Role};
use palaver_tui::{App, CompletionOutcome, Focus, SUGGESTIONS};
use uuid::Uuid;

fn app_with_input(text: &str) -> App {
    let mut app = App::new(Vec::new());
    app.input = text.to_string();
    app
}

#[test]
fn submit_records_user_message_and_disables_sending() {
    let mut app = app_with_input("hello there");

    let chat_id = app.submit().expect("submit should start a request");

    let chat = app.current_chat().unwrap();
    assert_eq!(chat.id, chat_id);
    assert_eq!(chat.entries.len(), 1);
    assert_eq!(chat.entries[0].role, Role::User);
    assert_eq!(chat.entries[0].content, "hello there");
    assert_eq!(chat.title, "hello there");
    assert!(app.input.is_empty());
    assert!(!app.can_submit());
}

#[test]
fn submit_is_refused_while_a_request_is_pending() {
    let mut app = app_with_input("first");
    app.submit().unwrap();

    app.input = "second".to_string();
    assert!(app.submit().is_none());
    // The composed text stays put for after the request settles
    assert_eq!(app.input, "second");
    assert_eq!(app.current_chat().unwrap().entries.len(), 1);
}

#[test]
fn blank_input_is_not_submitted() {
    let mut app = app_with_input("   ");
    assert!(app.submit().is_none());
    assert!(app.chats.is_empty());
}

#[test]
fn successful_outcome_appends_assistant_reply() {
    let mut app = app_with_input("hi");
    let chat_id = app.submit().unwrap();

    app.apply_outcome(CompletionOutcome {
        chat_id,
        result: Ok("Hello!".to_string()),
    });

    let chat = app.current_chat().unwrap();
    assert_eq!(chat.entries.len(), 2);
    assert_eq!(chat.entries[1].role, Role::Assistant);
    assert_eq!(chat.entries[1].content, "Hello!");
    assert!(app.can_submit());
    assert!(app.status_message.is_empty());
}

#[test]
fn failed_outcome_leaves_thread_unchanged_and_shows_notice() {
    let mut app = app_with_input("hi");
    let chat_id = app.submit().unwrap();

    app.apply_outcome(CompletionOutcome {
        chat_id,
        result: Err("network error: unable to connect".to_string()),
    });

    // The user's message stays recorded; no assistant message is appended
    let chat = app.current_chat().unwrap();
    assert_eq!(chat.entries.len(), 1);
    assert_eq!(chat.entries[0].role, Role::User);
    assert!(app.status_message.contains("network error"));
    assert!(app.can_submit());
}

#[test]
fn reply_for_a_deleted_chat_is_dropped() {
    let mut app = app_with_input("hi");
    let chat_id = app.submit().unwrap();

    app.delete_selected().unwrap();
    app.apply_outcome(CompletionOutcome {
        chat_id,
        result: Ok("too late".to_string()),
    });

    assert!(app.chats.is_empty());
    assert!(app.can_submit());
}

#[test]
fn outcome_for_unknown_chat_does_not_touch_others() {
    let mut app = App::new(vec![Chat::new("existing")]);

    app.apply_outcome(CompletionOutcome {
        chat_id: Uuid::new_v4(),
        result: Ok("stray".to_string()),
    });

    assert_eq!(app.chats[0].entries.len(), 1);
}

#[test]
fn suggestions_show_only_for_empty_chats() {
    let mut app = App::new(Vec::new());
    assert!(app.showing_suggestions());

    app.new_chat();
    assert!(app.showing_suggestions());

    app.input = "hi".to_string();
    app.submit().unwrap();
    assert!(!app.showing_suggestions());
}

#[test]
fn submitting_a_suggestion_sends_its_prompt() {
    let mut app = App::new(Vec::new());

    let chat_id = app.submit_suggestion(2).expect("suggestion should send");

    let chat = app.current_chat().unwrap();
    assert_eq!(chat.id, chat_id);
    assert_eq!(chat.entries[0].content, SUGGESTIONS[1]);
}

#[test]
fn suggestion_out_of_range_is_ignored() {
    let mut app = App::new(Vec::new());
    assert!(app.submit_suggestion(0).is_none());
    assert!(app.submit_suggestion(7).is_none());
}

#[test]
fn new_chat_prepends_and_selects() {
    let mut app = App::new(vec![Chat::new("old")]);

    app.new_chat();

    assert_eq!(app.chats.len(), 2);
    assert_eq!(app.selected, 0);
    assert_eq!(app.chats[1].title, "old");
}

#[test]
fn delete_keeps_selection_in_bounds() {
    let mut app = App::new(vec![Chat::new("a"), Chat::new("b")]);
    app.selected = 1;

    app.delete_selected().unwrap();
    assert_eq!(app.selected, 0);

    app.delete_selected().unwrap();
    assert!(app.delete_selected().is_none());
}

#[test]
fn focus_toggles_between_panes() {
    let mut app = App::new(Vec::new());
    assert_eq!(app.focus, Focus::Input);
    app.toggle_focus();
    assert_eq!(app.focus, Focus::Sidebar);
    app.toggle_focus();
    assert_eq!(app.focus, Focus::Input);
}
