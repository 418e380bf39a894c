//! The single equipment page: table, creation form, floating action
//! button, and the toast surface.

use leptos::prelude::*;

use crate::components::equipment_form::EquipmentForm;
use crate::components::equipment_table::{EquipmentTable, spawn_load};
use crate::components::toast_host::ToastHost;
use crate::net::api::Api;
use crate::state::equipment::EquipmentState;
use crate::state::form::{EquipmentDraft, FieldErrors};

/// Equipment management page.
#[component]
pub fn EquipmentPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let equipment = expect_context::<RwSignal<EquipmentState>>();

    // Initial load happens exactly once; mutations trigger an explicit
    // reload or patch the collection locally.
    spawn_load(api, equipment);

    // Creation dialog state lives here so reopening the dialog keeps any
    // previously entered values.
    let show_form = RwSignal::new(false);
    let draft = RwSignal::new(EquipmentDraft::default());
    let errors = RwSignal::new(FieldErrors::default());

    let on_close = Callback::new(move |()| show_form.set(false));

    view! {
        <main class="equipment-page">
            <header class="equipment-page__header">
                <h1>"Equipment"</h1>
            </header>

            <EquipmentTable/>

            <Show when=move || show_form.get()>
                <EquipmentForm draft=draft errors=errors on_close=on_close/>
            </Show>

            <button class="fab" title="Add equipment" on:click=move |_| show_form.set(true)>
                "+"
            </button>

            <ToastHost/>
        </main>
    }
}
