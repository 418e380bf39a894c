//! Paginated equipment table and its collection loader.

use leptos::prelude::*;

use crate::components::detail_dialog::DetailDialog;
use crate::net::api::Api;
use crate::state::equipment::{EquipmentState, ROWS_PER_PAGE_OPTIONS};

/// Fetch the full collection and replace the table's local state.
///
/// Runs once when the page mounts and again after each confirmed mutation;
/// the fetch is never re-triggered by the collection state changing. Fetch
/// failures are logged without user feedback.
pub fn spawn_load(api: Api, equipment: RwSignal<EquipmentState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            equipment.update(|state| state.loading = true);
            match api.fetch_equipment().await {
                Ok(items) => {
                    equipment.update(|state| {
                        state.replace(items);
                        state.loading = false;
                    });
                }
                Err(e) => {
                    leptos::logging::warn!("equipment fetch failed: {e}");
                    equipment.update(|state| state.loading = false);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, equipment);
    }
}

/// Table of equipment records with pagination controls.
///
/// Clicking a row opens the detail dialog for that record.
#[component]
pub fn EquipmentTable() -> impl IntoView {
    let equipment = expect_context::<RwSignal<EquipmentState>>();

    let rows = move || {
        equipment
            .get()
            .visible_rows()
            .into_iter()
            .map(|record| {
                let selected = record.clone();
                view! {
                    <tr
                        class="equipment-table__row"
                        on:click=move |_| equipment.update(|state| state.select(selected.clone()))
                    >
                        <td>{record.id}</td>
                        <td>{record.name.clone()}</td>
                        <td>{record.kind.to_string()}</td>
                        <td>{record.status.to_string()}</td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    let placeholder = move || {
        let state = equipment.get();
        if !state.items.is_empty() {
            return None;
        }
        let text = if state.loading {
            "Loading equipment..."
        } else {
            "No equipment registered."
        };
        Some(view! {
            <tr class="equipment-table__placeholder">
                <td colspan="4">{text}</td>
            </tr>
        })
    };

    view! {
        <div class="equipment-table">
            <table class="equipment-table__grid">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Type"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {placeholder}
                    {rows}
                </tbody>
            </table>

            <TableFooter/>

            {move || {
                equipment
                    .get()
                    .selected
                    .map(|record| view! { <DetailDialog record=record/> })
            }}
        </div>
    }
}

/// Footer with the rows-per-page select, range label, and page controls.
#[component]
fn TableFooter() -> impl IntoView {
    let equipment = expect_context::<RwSignal<EquipmentState>>();

    view! {
        <div class="equipment-table__footer">
            <label class="equipment-table__page-size">
                "Rows per page:"
                <select
                    prop:value=move || equipment.get().rows_per_page.to_string()
                    on:change=move |ev| {
                        if let Ok(rows) = event_target_value(&ev).parse::<usize>() {
                            equipment.update(|state| state.set_rows_per_page(rows));
                        }
                    }
                >
                    {ROWS_PER_PAGE_OPTIONS
                        .iter()
                        .map(|n| view! { <option value=n.to_string()>{n.to_string()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <span class="equipment-table__range">{move || equipment.get().range_label()}</span>
            <button
                class="btn"
                prop:disabled=move || !equipment.get().has_prev()
                on:click=move |_| {
                    equipment.update(|state| {
                        let page = state.page.saturating_sub(1);
                        state.set_page(page);
                    });
                }
            >
                "Prev"
            </button>
            <button
                class="btn"
                prop:disabled=move || !equipment.get().has_next()
                on:click=move |_| {
                    equipment.update(|state| {
                        let page = state.page + 1;
                        state.set_page(page);
                    });
                }
            >
                "Next"
            </button>
        </div>
    }
}
