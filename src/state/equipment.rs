//! Collection state for the equipment table.
//!
//! The table owns the in-memory collection exclusively: the creation form
//! and the detail dialog never touch `items` directly, they trigger a
//! reload or call the mutation helpers here after their own server
//! round-trip succeeds.

#[cfg(test)]
#[path = "equipment_test.rs"]
mod equipment_test;

use crate::net::types::EquipmentRecord;

/// Page sizes offered by the table footer.
pub const ROWS_PER_PAGE_OPTIONS: [usize; 3] = [5, 10, 25];

/// Collection, pagination, and selection state for the equipment table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquipmentState {
    pub items: Vec<EquipmentRecord>,
    pub loading: bool,
    pub page: usize,
    pub rows_per_page: usize,
    pub selected: Option<EquipmentRecord>,
}

impl Default for EquipmentState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            page: 0,
            rows_per_page: 10,
            selected: None,
        }
    }
}

impl EquipmentState {
    /// Replace the collection wholesale after a fetch.
    pub fn replace(&mut self, items: Vec<EquipmentRecord>) {
        self.items = items;
        self.clamp_page();
    }

    /// The records visible on the current page. Pure slicing: at most
    /// `rows_per_page` entries, source order preserved, `items` untouched.
    pub fn visible_rows(&self) -> Vec<EquipmentRecord> {
        self.items
            .iter()
            .skip(self.page * self.rows_per_page)
            .take(self.rows_per_page)
            .cloned()
            .collect()
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.last_page());
    }

    /// Change the page size. Always resets the page index to 0.
    pub fn set_rows_per_page(&mut self, rows: usize) {
        self.rows_per_page = rows.max(1);
        self.page = 0;
    }

    /// Remove the record with the given id, preserving the order of the
    /// rest. No-op if the id is not present.
    pub fn remove(&mut self, id: i64) {
        self.items.retain(|record| record.id != id);
        self.clamp_page();
    }

    /// Replace the stored record matching `record.id` in place.
    pub fn apply_update(&mut self, record: EquipmentRecord) {
        if let Some(slot) = self.items.iter_mut().find(|r| r.id == record.id) {
            *slot = record;
        }
    }

    pub fn select(&mut self, record: EquipmentRecord) {
        self.selected = Some(record);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page < self.last_page()
    }

    /// Footer range text, e.g. `11\u{2013}20 of 42`.
    pub fn range_label(&self) -> String {
        let total = self.items.len();
        if total == 0 {
            return "0\u{2013}0 of 0".to_owned();
        }
        let start = self.page * self.rows_per_page;
        let end = (start + self.rows_per_page).min(total);
        format!("{}\u{2013}{} of {}", start + 1, end, total)
    }

    fn last_page(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.items.len() - 1) / self.rows_per_page
        }
    }

    // The page index may point past the end after the collection shrinks.
    fn clamp_page(&mut self) {
        self.page = self.page.min(self.last_page());
    }
}
