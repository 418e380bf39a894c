//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::net::api::Api;
use crate::pages::equipment::EquipmentPage;
use crate::state::{equipment::EquipmentState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API client and shared state contexts, then mounts the
/// single equipment page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Shared reactive state for all child components.
    let equipment = RwSignal::new(EquipmentState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(equipment);
    provide_context(toasts);
    provide_context(Api::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/equipboard.css"/>
        <Title text="Equipboard"/>

        <EquipmentPage/>
    }
}
