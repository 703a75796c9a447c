//! Reducer-level scenarios for search, paging, selection and editing.

use adminui::app::{EditField, LoadStatus};
use adminui::worker::WorkerResponse;
use adminui::{handle_event, AppState, Config, Event, Record, RecordId};

fn state_with(records: Vec<Record>) -> AppState {
    let mut state = adminui::initialize(&Config::default());
    handle_event(
        &mut state,
        &Event::WorkerResponse(WorkerResponse::RecordsLoaded { records }),
    )
    .unwrap();
    state
}

fn ann_bob_cid() -> AppState {
    state_with(vec![
        Record::new("1", "Ann", "", ""),
        Record::new("2", "Bob", "", ""),
        Record::new("3", "Cid", "", ""),
    ])
}

fn numbered(n: u64) -> AppState {
    state_with(
        (1..=n)
            .map(|i| Record::new(i, format!("Member {i}"), format!("m{i}@mailinator.com"), "member"))
            .collect(),
    )
}

fn send(state: &mut AppState, event: Event) -> bool {
    handle_event(state, &event).unwrap().0
}

fn page_ids(state: &AppState) -> Vec<String> {
    state
        .current_page_rows()
        .iter()
        .map(|r| r.id.as_str().to_string())
        .collect()
}

#[test]
fn query_b_matches_only_bob() {
    let mut state = ann_bob_cid();
    send(&mut state, Event::SearchInput("b".to_string()));

    assert_eq!(page_ids(&state), vec!["2"]);
    assert_eq!(state.page_count(), 1);
    assert_eq!(state.total_count(), 3);
}

#[test]
fn twenty_five_records_make_three_pages() {
    let mut state = numbered(25);
    assert_eq!(state.page_count(), 3);

    send(&mut state, Event::NextPage);
    let expected: Vec<String> = (11..=20).map(|i| i.to_string()).collect();
    assert_eq!(page_ids(&state), expected);

    send(&mut state, Event::LastPage);
    assert_eq!(state.current_page_rows().len(), 5);
}

#[test]
fn filtered_rows_all_contain_the_query() {
    let mut state = numbered(25);
    for query in ["1", "MEMBER 2", "mailinator", "zzz", ""] {
        send(&mut state, Event::SearchInput(query.to_string()));
        let needle = query.to_lowercase();
        assert!(state.filtered_len() <= state.total_count());
        for record in state.filtered_records() {
            assert!(
                record.field_values().any(|v| v.to_lowercase().contains(&needle)),
                "{query:?} kept {record:?}"
            );
        }
        let expected_pages = state.filtered_len().div_ceil(10);
        assert_eq!(state.page_count(), expected_pages);
        assert_eq!(state.page_count() == 0, state.filtered_len() == 0);
    }
}

#[test]
fn no_match_shows_empty_page_and_zero_pages() {
    let mut state = ann_bob_cid();
    send(&mut state, Event::SearchInput("nobody".to_string()));
    assert!(state.current_page_rows().is_empty());
    assert_eq!(state.page_count(), 0);
    assert_eq!(state.current_page(), 1);
}

#[test]
fn changing_the_query_returns_to_page_one() {
    let mut state = numbered(25);
    send(&mut state, Event::GoToPage(3));
    send(&mut state, Event::SearchInput("m".to_string()));
    assert_eq!(state.current_page(), 1);

    send(&mut state, Event::GoToPage(2));
    send(&mut state, Event::SearchInput(String::new()));
    assert_eq!(state.current_page(), 1);
}

#[test]
fn go_to_page_is_clamped() {
    let mut state = numbered(25);
    send(&mut state, Event::GoToPage(99));
    assert_eq!(state.current_page(), 3);
    send(&mut state, Event::GoToPage(0));
    assert_eq!(state.current_page(), 1);
}

#[test]
fn editing_bob_and_saving_renames_him() {
    let mut state = ann_bob_cid();
    send(&mut state, Event::BeginEdit(RecordId::new("2")));
    send(
        &mut state,
        Event::EditField {
            field: EditField::Name,
            value: "Robert".to_string(),
        },
    );
    assert_eq!(state.store.get(&RecordId::new("2")).unwrap().name, "Bob");

    assert!(send(&mut state, Event::SaveEdit));
    assert_eq!(state.store.get(&RecordId::new("2")).unwrap().name, "Robert");
    assert!(state.editor.draft().is_none());
}

#[test]
fn starting_a_second_edit_drops_the_first_draft() {
    let mut state = ann_bob_cid();
    send(&mut state, Event::BeginEdit(RecordId::new("1")));
    send(
        &mut state,
        Event::EditField {
            field: EditField::Email,
            value: "changed@x.io".to_string(),
        },
    );
    send(&mut state, Event::BeginEdit(RecordId::new("3")));
    send(&mut state, Event::SaveEdit);

    assert_eq!(state.store.get(&RecordId::new("1")).unwrap().email, "");
}

#[test]
fn select_one_and_three_then_delete_selected() {
    let mut state = ann_bob_cid();
    send(&mut state, Event::ToggleSelect(RecordId::new("1")));
    send(&mut state, Event::ToggleSelect(RecordId::new("3")));
    assert_eq!(state.selected_count(), 2);

    send(&mut state, Event::DeleteSelected);

    assert_eq!(page_ids(&state), vec!["2"]);
    assert_eq!(state.selected_count(), 0);
    assert_eq!(state.total_count(), 1);
}

#[test]
fn delete_selected_with_nothing_selected_changes_nothing() {
    let mut state = ann_bob_cid();
    assert!(!send(&mut state, Event::DeleteSelected));
    assert_eq!(state.total_count(), 3);
}

#[test]
fn toggle_select_twice_restores_membership() {
    let mut state = ann_bob_cid();
    let id = RecordId::new("2");
    send(&mut state, Event::ToggleSelect(id.clone()));
    send(&mut state, Event::ToggleSelect(id.clone()));
    assert!(!state.selection.contains(&id));
}

#[test]
fn single_delete_prunes_selection() {
    let mut state = ann_bob_cid();
    send(&mut state, Event::ToggleSelect(RecordId::new("2")));
    send(&mut state, Event::Delete(RecordId::new("2")));
    assert_eq!(state.selected_count(), 0);
    assert_eq!(state.total_count(), 2);
}

#[test]
fn failed_load_then_retry_then_success() {
    let mut state = adminui::initialize(&Config::default());
    send(
        &mut state,
        Event::WorkerResponse(WorkerResponse::FetchFailed {
            reason: "HTTP 503".to_string(),
        }),
    );
    assert!(matches!(state.load, LoadStatus::Failed { .. }));

    let (_, actions) = handle_event(&mut state, &Event::Retry).unwrap();
    assert_eq!(actions.len(), 1);
    assert_eq!(state.load, LoadStatus::Loading);

    send(
        &mut state,
        Event::WorkerResponse(WorkerResponse::RecordsLoaded {
            records: vec![Record::new("1", "Ann", "", "")],
        }),
    );
    assert!(matches!(state.load, LoadStatus::Loaded { count: 1, .. }));
}
