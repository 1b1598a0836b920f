//! Tests for handler module

use super::*;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;
use cdex_core::{AppPhase, Character, CharacterCollection, CharacterId, DetailView, Route};

fn character(id: u32, name: &str) -> Character {
    Character {
        id: CharacterId(id),
        name: name.to_string(),
        status: "Alive".to_string(),
        species: "Human".to_string(),
        kind: String::new(),
        gender: "Male".to_string(),
    }
}

fn rick_and_morty() -> CharacterCollection {
    CharacterCollection::new(vec![
        character(1, "Rick Sanchez"),
        character(2, "Morty Smith"),
    ])
}

fn loaded_state() -> AppState {
    let mut state = AppState::new();
    update(&mut state, Message::Started);
    update(
        &mut state,
        Message::CharactersLoaded {
            characters: rick_and_morty(),
        },
    );
    state
}

/// Run a message and every follow-up it produces
fn process(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        process(state, Message::Key(InputKey::Char(c)));
    }
}

// ─────────────────────────────────────────────────────────
// Lifecycle
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    update(&mut state, Message::Quit);
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_produces_quit_message() {
    let state = AppState::new();
    let result = handle_key(&state, InputKey::CharCtrl('c'));
    assert!(matches!(result, Some(Message::Quit)));
}

#[test]
fn test_started_emits_fetch_exactly_once() {
    let mut state = AppState::new();

    let first = update(&mut state, Message::Started);
    let second = update(&mut state, Message::Started);

    assert_eq!(first.action, Some(UpdateAction::FetchCharacters));
    assert!(second.action.is_none());
    assert_eq!(state.phase, AppPhase::Running);
}

#[test]
fn test_started_after_load_does_not_refetch() {
    let mut state = loaded_state();
    let result = update(&mut state, Message::Started);
    assert!(result.action.is_none());
}

// ─────────────────────────────────────────────────────────
// Fetch outcomes
// ─────────────────────────────────────────────────────────

#[test]
fn test_characters_loaded_populates_collection() {
    let state = loaded_state();
    assert_eq!(state.characters.len(), 2);
    assert_eq!(state.visible_characters().len(), 2);
}

#[test]
fn test_fetch_failure_leaves_collection_empty() {
    let mut state = AppState::new();
    update(&mut state, Message::Started);

    let result = update(
        &mut state,
        Message::CharactersFetchFailed {
            error: "Character API error (500): boom".to_string(),
        },
    );

    assert!(result.action.is_none());
    assert!(result.message.is_none());
    assert!(state.characters.is_empty());
    assert!(state.visible_characters().is_empty());
    assert!(!state.should_quit());
}

#[derive(Clone, Default)]
struct CapturedLog(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_fetch_failed_handler_logs_at_debug() {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .finish();

    let mut state = AppState::new();
    tracing::subscriber::with_default(subscriber, || {
        update(
            &mut state,
            Message::CharactersFetchFailed {
                error: "HTTP 500".to_string(),
            },
        );
    });

    let output = String::from_utf8_lossy(&log.0.lock().unwrap()).into_owned();
    assert!(!output.contains("ERROR"));
    assert!(output.contains("DEBUG"));
    assert!(output.contains("HTTP 500"));
}

// ─────────────────────────────────────────────────────────
// Search (controlled input)
// ─────────────────────────────────────────────────────────

#[test]
fn test_char_key_produces_search_input_with_next_value() {
    let mut state = AppState::new();
    state.search.set("mor");

    let result = handle_key(&state, InputKey::Char('t'));

    match result {
        Some(Message::SearchInput { text }) => assert_eq!(text, "mort"),
        other => panic!("expected SearchInput, got {:?}", other),
    }
    // The key handler never mutates the query itself
    assert_eq!(state.search.text(), "mor");
}

#[test]
fn test_typing_filters_list_scenario() {
    let mut state = loaded_state();
    type_text(&mut state, "morty");

    let visible: Vec<_> = state.visible_characters().iter().map(|c| c.id).collect();
    assert_eq!(visible, vec![CharacterId(2)]);
}

#[test]
fn test_backspace_removes_last_char() {
    let mut state = loaded_state();
    type_text(&mut state, "rickx");
    process(&mut state, Message::Key(InputKey::Backspace));
    assert_eq!(state.search.text(), "rick");
}

#[test]
fn test_backspace_on_empty_query_is_ignored() {
    let state = AppState::new();
    assert!(handle_key(&state, InputKey::Backspace).is_none());
}

#[test]
fn test_ctrl_u_clears_query() {
    let mut state = loaded_state();
    type_text(&mut state, "zzz");
    assert!(state.visible_characters().is_empty());

    process(&mut state, Message::Key(InputKey::CharCtrl('u')));

    assert!(state.search.is_empty());
    assert_eq!(state.visible_characters().len(), 2);
}

#[test]
fn test_search_clamps_cursor() {
    let mut state = loaded_state();
    process(&mut state, Message::Key(InputKey::Down));
    assert_eq!(state.list_view_state.selected, 1);

    type_text(&mut state, "rick");

    assert_eq!(state.list_view_state.selected, 0);
    assert_eq!(
        state.selected_character().map(|c| c.name.as_str()),
        Some("Rick Sanchez")
    );
}

#[test]
fn test_q_is_typed_not_quit() {
    let mut state = loaded_state();
    process(&mut state, Message::Key(InputKey::Char('q')));
    assert!(!state.should_quit());
    assert_eq!(state.search.text(), "q");
}

// ─────────────────────────────────────────────────────────
// Cursor
// ─────────────────────────────────────────────────────────

#[test]
fn test_cursor_stays_in_bounds() {
    let mut state = loaded_state();
    for _ in 0..5 {
        process(&mut state, Message::Key(InputKey::Down));
    }
    assert_eq!(state.list_view_state.selected, 1);

    process(&mut state, Message::Key(InputKey::Home));
    assert_eq!(state.list_view_state.selected, 0);

    process(&mut state, Message::Key(InputKey::End));
    assert_eq!(state.list_view_state.selected, 1);
}

#[test]
fn test_cursor_on_empty_list() {
    let mut state = AppState::new();
    process(&mut state, Message::Key(InputKey::Down));
    process(&mut state, Message::Key(InputKey::PageDown));
    assert_eq!(state.list_view_state.selected, 0);
    assert!(state.selected_character().is_none());
}

// ─────────────────────────────────────────────────────────
// Routing
// ─────────────────────────────────────────────────────────

#[test]
fn test_enter_opens_selected_character() {
    let mut state = loaded_state();
    process(&mut state, Message::Key(InputKey::Down));
    process(&mut state, Message::Key(InputKey::Enter));

    assert_eq!(state.route().path(), "/character/2");
    let detail = state.detail_view().unwrap();
    let morty = detail.character().unwrap();
    assert_eq!(morty.name, "Morty Smith");
    assert_eq!(morty.kind_or(&state.settings.ui.type_fallback), "N/A");
}

#[test]
fn test_enter_on_empty_list_does_nothing() {
    let mut state = AppState::new();
    process(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(state.route(), &Route::List);
}

#[test]
fn test_navigate_to_missing_id_is_unresolved() {
    let mut state = loaded_state();
    process(
        &mut state,
        Message::Navigate {
            path: "/character/999".to_string(),
        },
    );

    let detail = state.detail_view().unwrap();
    assert!(!detail.is_resolved());
    assert_eq!(
        detail,
        DetailView::NotFound {
            id: CharacterId(999)
        }
    );
}

#[test]
fn test_detail_before_load_is_loading() {
    let mut state = AppState::new();
    update(&mut state, Message::Started);
    process(&mut state, Message::ShowCharacter { id: CharacterId(1) });

    assert_eq!(
        state.detail_view(),
        Some(DetailView::Loading { id: CharacterId(1) })
    );

    update(
        &mut state,
        Message::CharactersLoaded {
            characters: rick_and_morty(),
        },
    );
    assert!(state.detail_view().unwrap().is_resolved());
}

#[test]
fn test_malformed_id_route() {
    let mut state = loaded_state();
    process(
        &mut state,
        Message::Navigate {
            path: "/character/abc".to_string(),
        },
    );
    assert!(matches!(
        state.detail_view(),
        Some(DetailView::InvalidId { .. })
    ));
}

#[test]
fn test_search_survives_navigation() {
    let mut state = loaded_state();
    type_text(&mut state, "smith");
    process(&mut state, Message::Key(InputKey::Enter));

    assert!(state.route().is_detail());
    assert_eq!(state.search.text(), "smith");
    assert_eq!(state.visible_characters().len(), 1);
}

#[test]
fn test_escape_on_detail_goes_back() {
    let mut state = loaded_state();
    process(&mut state, Message::Key(InputKey::Enter));
    assert!(state.route().is_detail());

    process(&mut state, Message::Key(InputKey::Esc));

    assert_eq!(state.route(), &Route::List);
    assert!(!state.should_quit());
}

#[test]
fn test_escape_clears_query_before_quitting() {
    let mut state = loaded_state();
    type_text(&mut state, "rick");

    process(&mut state, Message::Key(InputKey::Esc));
    assert!(state.search.is_empty());
    assert!(!state.should_quit());

    process(&mut state, Message::Key(InputKey::Esc));
    assert!(state.should_quit());
}
