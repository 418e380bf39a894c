//! Detail dialog for inspecting, editing, and deleting a record.

use leptos::prelude::*;

use crate::components::equipment_fields::EquipmentFields;
use crate::net::types::EquipmentRecord;
use crate::state::equipment::EquipmentState;
use crate::state::form::{EquipmentDraft, FieldErrors};

#[cfg(feature = "hydrate")]
use crate::net::api::Api;
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastState;

/// Dialog pre-populated with a copy of the selected record.
///
/// Save validates the draft against the same schema as the creation form,
/// replaces the record via PUT, and patches the collection in place. Delete
/// removes the record via DELETE and drops it from local state. Either
/// failure surfaces as an error toast and leaves the dialog open.
#[component]
pub fn DetailDialog(record: EquipmentRecord) -> impl IntoView {
    let equipment = expect_context::<RwSignal<EquipmentState>>();
    #[cfg(feature = "hydrate")]
    let api = expect_context::<Api>();
    #[cfg(feature = "hydrate")]
    let toasts = expect_context::<RwSignal<ToastState>>();

    let draft = RwSignal::new(EquipmentDraft::from_record(&record));
    let errors = RwSignal::new(FieldErrors::default());
    let id = record.id;
    let image_url = record.image_url.clone();

    let on_close = Callback::new(move |()| equipment.update(|state| state.clear_selection()));

    let on_save = {
        #[cfg(feature = "hydrate")]
        let api = api.clone();
        Callback::new(move |()| {
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
                    match api.update_equipment(id, &payload).await {
                        Ok(updated) => {
                            toasts.update(|t| t.success("Equipment updated."));
                            equipment.update(|state| {
                                state.apply_update(updated);
                                state.clear_selection();
                            });
                        }
                        Err(e) => {
                            leptos::logging::warn!("equipment update failed: {e}");
                            toasts.update(|t| t.error("Could not update equipment."));
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = payload;
            }
        })
    };

    let on_delete = {
        #[cfg(feature = "hydrate")]
        let api = api.clone();
        Callback::new(move |()| {
            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    match api.delete_equipment(id).await {
                        Ok(()) => {
                            toasts.update(|t| t.success("Equipment removed."));
                            equipment.update(|state| {
                                state.remove(id);
                                state.clear_selection();
                            });
                        }
                        Err(e) => {
                            leptos::logging::warn!("equipment delete failed: {e}");
                            toasts.update(|t| t.error("Could not remove equipment."));
                        }
                    }
                });
            }
        })
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Equipment details"</h2>
                <p class="dialog__meta">{format!("Record #{id}")}</p>

                {(!image_url.is_empty())
                    .then(|| view! { <img class="dialog__image" src=image_url.clone() alt="Equipment"/> })}

                <form
                    class="dialog__form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        on_save.run(());
                    }
                >
                    <EquipmentFields draft=draft errors=errors/>
                    <div class="dialog__actions">
                        <button class="btn btn--danger" type="button" on:click=move |_| on_delete.run(())>
                            "Delete"
                        </button>
                        <button class="btn btn--primary" type="submit">
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
