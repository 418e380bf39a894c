//! Field set shared by the creation form and the detail dialog.

use leptos::prelude::*;

use crate::net::types::{EquipmentKind, EquipmentStatus};
use crate::state::form::{EquipmentDraft, FieldErrors};

/// Name, type, status, and image-URL inputs bound to a draft, with inline
/// per-field error messages.
///
/// Both the create and edit dialogs render this component so the two paths
/// share one draft type and one validation schema.
#[component]
pub fn EquipmentFields(
    draft: RwSignal<EquipmentDraft>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    view! {
        <label class="dialog__label">
            "Name"
            <input
                class="dialog__input"
                type="text"
                prop:value=move || draft.get().name
                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
            />
            <p class="dialog__field-error">{move || errors.get().name.unwrap_or_default()}</p>
        </label>

        <div class="dialog__row">
            <label class="dialog__label">
                "Type"
                <select
                    class="dialog__input"
                    prop:value=move || draft.get().kind
                    on:change=move |ev| draft.update(|d| d.kind = event_target_value(&ev))
                >
                    <option value="">"Select a type"</option>
                    {EquipmentKind::ALL
                        .iter()
                        .map(|kind| view! { <option value=kind.as_str()>{kind.as_str()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <p class="dialog__field-error">{move || errors.get().kind.unwrap_or_default()}</p>
            </label>

            <label class="dialog__label">
                "Status"
                <select
                    class="dialog__input"
                    prop:value=move || draft.get().status
                    on:change=move |ev| draft.update(|d| d.status = event_target_value(&ev))
                >
                    <option value="">"Select a status"</option>
                    {EquipmentStatus::ALL
                        .iter()
                        .map(|status| view! { <option value=status.as_str()>{status.as_str()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <p class="dialog__field-error">{move || errors.get().status.unwrap_or_default()}</p>
            </label>
        </div>

        <label class="dialog__label">
            "Image URL"
            <input
                class="dialog__input"
                type="text"
                prop:value=move || draft.get().image_url
                on:input=move |ev| draft.update(|d| d.image_url = event_target_value(&ev))
            />
            <p class="dialog__field-error">{move || errors.get().image_url.unwrap_or_default()}</p>
        </label>
    }
}
