//! Modal dialog for creating a new equipment record.

use leptos::prelude::*;

use crate::components::equipment_fields::EquipmentFields;
use crate::state::form::{EquipmentDraft, FieldErrors};

#[cfg(feature = "hydrate")]
use crate::components::equipment_table::spawn_load;
#[cfg(feature = "hydrate")]
use crate::net::api::Api;
#[cfg(feature = "hydrate")]
use crate::state::equipment::EquipmentState;
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastState;

/// Creation dialog.
///
/// The draft and error signals are owned by the page, so closing and
/// reopening the dialog keeps previously entered values; fields clear only
/// after a confirmed create. Validation runs before any network call: on
/// failure the fields are annotated and no request is issued. A transport
/// failure surfaces as an error toast and leaves the dialog open with the
/// entered values intact.
#[component]
pub fn EquipmentForm(
    draft: RwSignal<EquipmentDraft>,
    errors: RwSignal<FieldErrors>,
    on_close: Callback<()>,
) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let api = expect_context::<Api>();
    #[cfg(feature = "hydrate")]
    let equipment = expect_context::<RwSignal<EquipmentState>>();
    #[cfg(feature = "hydrate")]
    let toasts = expect_context::<RwSignal<ToastState>>();

    let submit = Callback::new(move |()| {
        let payload = match draft.get().validate() {
            Ok(payload) => {
                errors.set(FieldErrors::default());
                payload
            }
            Err(report) => {
                errors.set(report);
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.create_equipment(&payload).await {
                    Ok(_) => {
                        toasts.update(|t| t.success("Equipment added."));
                        draft.set(EquipmentDraft::default());
                        on_close.run(());
                        spawn_load(api, equipment);
                    }
                    Err(e) => {
                        leptos::logging::warn!("equipment create failed: {e}");
                        toasts.update(|t| t.error("Could not add equipment."));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add equipment"</h2>
                <form
                    class="dialog__form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <EquipmentFields draft=draft errors=errors/>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit">
                            "Add equipment"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
