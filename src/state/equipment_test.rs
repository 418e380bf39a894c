use super::*;
use crate::net::types::{EquipmentKind, EquipmentStatus};

fn record(id: i64, name: &str) -> EquipmentRecord {
    EquipmentRecord {
        id,
        name: name.to_owned(),
        kind: EquipmentKind::Truck,
        status: EquipmentStatus::Active,
        image_url: format!("https://example.com/{id}.png"),
    }
}

fn collection(count: i64) -> Vec<EquipmentRecord> {
    (1..=count).map(|id| record(id, &format!("Unit {id}"))).collect()
}

fn loaded(count: i64) -> EquipmentState {
    let mut state = EquipmentState::default();
    state.replace(collection(count));
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_empty_first_page() {
    let state = EquipmentState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert_eq!(state.page, 0);
    assert_eq!(state.rows_per_page, 10);
    assert!(state.selected.is_none());
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn visible_rows_never_exceed_page_size() {
    let mut state = loaded(12);
    assert_eq!(state.visible_rows().len(), 10);

    state.set_page(1);
    assert_eq!(state.visible_rows().len(), 2);
}

#[test]
fn visible_rows_do_not_mutate_the_source() {
    let state = loaded(12);
    let before = state.items.clone();
    let _ = state.visible_rows();
    assert_eq!(state.items, before);
}

#[test]
fn visible_rows_preserve_source_order() {
    let mut state = loaded(12);
    state.set_page(1);
    let ids: Vec<i64> = state.visible_rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![11, 12]);
}

#[test]
fn changing_page_size_resets_page_to_zero() {
    let mut state = loaded(30);
    state.set_page(2);
    state.set_rows_per_page(25);
    assert_eq!(state.page, 0);
    assert_eq!(state.rows_per_page, 25);
}

#[test]
fn set_page_clamps_to_last_page() {
    let mut state = loaded(12);
    state.set_page(5);
    assert_eq!(state.page, 1);
}

#[test]
fn replace_clamps_a_stale_page_index() {
    let mut state = loaded(30);
    state.set_page(2);
    state.replace(collection(4));
    assert_eq!(state.page, 0);
    assert_eq!(state.items.len(), 4);
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn remove_deletes_exactly_one_preserving_order() {
    let mut state = loaded(5);
    state.remove(3);
    let ids: Vec<i64> = state.items.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 4, 5]);
}

#[test]
fn remove_unknown_id_is_a_noop() {
    let mut state = loaded(3);
    state.remove(99);
    assert_eq!(state.items.len(), 3);
}

#[test]
fn remove_clamps_page_when_the_last_page_empties() {
    let mut state = loaded(11);
    state.set_page(1);
    state.remove(11);
    assert_eq!(state.page, 0);
}

#[test]
fn apply_update_replaces_the_record_in_place() {
    let mut state = loaded(3);
    let mut updated = record(2, "Renamed");
    updated.status = EquipmentStatus::Broken;
    state.apply_update(updated.clone());

    assert_eq!(state.items[1], updated);
    assert_eq!(state.items[0].id, 1);
    assert_eq!(state.items[2].id, 3);
}

#[test]
fn apply_update_with_unknown_id_is_a_noop() {
    let mut state = loaded(3);
    let before = state.items.clone();
    state.apply_update(record(99, "Ghost"));
    assert_eq!(state.items, before);
}

// =============================================================
// Selection
// =============================================================

#[test]
fn select_and_clear_selection() {
    let mut state = loaded(3);
    state.select(state.items[1].clone());
    assert_eq!(state.selected.as_ref().map(|r| r.id), Some(2));

    state.clear_selection();
    assert!(state.selected.is_none());
}

// =============================================================
// Footer
// =============================================================

#[test]
fn range_label_for_empty_collection() {
    let state = EquipmentState::default();
    assert_eq!(state.range_label(), "0\u{2013}0 of 0");
}

#[test]
fn range_label_for_full_and_partial_pages() {
    let mut state = loaded(12);
    assert_eq!(state.range_label(), "1\u{2013}10 of 12");

    state.set_page(1);
    assert_eq!(state.range_label(), "11\u{2013}12 of 12");
}

#[test]
fn prev_next_availability_tracks_page_bounds() {
    let mut state = loaded(12);
    assert!(!state.has_prev());
    assert!(state.has_next());

    state.set_page(1);
    assert!(state.has_prev());
    assert!(!state.has_next());
}
