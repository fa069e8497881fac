use dioxus::prelude::*;

use crate::client::{
    api::health::probe_health,
    component::{page::LoadingPage, Toasts},
    config::Endpoints,
    constant::SITE_NAME,
    model::{auth::SessionContext, fallback::FallbackMode},
    router::Route,
};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    let endpoints = use_context::<Endpoints>();
    use_context_provider(SessionContext::new);
    let mut toasts = use_context_provider(Toasts::new);
    let mut fallback = use_context_provider(|| Signal::new(None::<FallbackMode>));

    // Probe backend health exactly once per page load. The resulting
    // flag is frozen for the whole session; nothing re-probes it.
    {
        let endpoints = endpoints.clone();
        use_future(move || {
            let endpoints = endpoints.clone();
            async move {
                let healthy = probe_health(&endpoints).await;
                let mode = FallbackMode::from_probe(healthy);
                if mode.active() {
                    toasts.error(
                        "Server Health Check failed",
                        "Could not reach the info server. Using fallback values.",
                        6_000,
                    );
                }
                fallback.set(Some(mode));
            }
        });
    }

    rsx! {
        Title { "{SITE_NAME}" }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Meta {
            name: "description",
            content: "Admin dashboard for a hosted Minecraft server"
        }
        if fallback.read().is_some() {
            Router::<Route> {}
        } else {
            LoadingPage {}
        }
    }
}
