use dioxus::prelude::*;
use dioxus_logger::tracing;
use gloo_timers::future::TimeoutFuture;

use crate::client::{
    api::auth::complete_login,
    config::Endpoints,
    constant::SITE_NAME,
    model::auth::SessionContext,
    router::Route,
};

/// Landing page for the OAuth provider's redirect. Exchanges the code in
/// the query string for a session, persists it, then returns to the
/// dashboard.
#[component]
pub fn LoginCallback(code: String) -> Element {
    let endpoints = use_context::<Endpoints>();
    let mut session = use_context::<SessionContext>();
    let mut message = use_signal(|| "Logging in...".to_string());
    let nav = navigator();

    use_future(move || {
        let endpoints = endpoints.clone();
        let code = code.clone();
        async move {
            if code.is_empty() {
                message.set("Invalid access. Redirecting to login...".to_string());
                TimeoutFuture::new(2_000).await;
                nav.replace(Route::Dashboard {});
                return;
            }

            match complete_login(&endpoints, &code).await {
                Ok(dto) => {
                    session.complete_login(dto);
                    TimeoutFuture::new(1_000).await;
                    nav.replace(Route::Dashboard {});
                }
                Err(error) => {
                    tracing::error!("login completion failed: {error}");
                    message.set("Something went wrong. Redirecting to login...".to_string());
                    TimeoutFuture::new(2_000).await;
                    nav.replace(Route::Dashboard {});
                }
            }
        }
    });

    rsx!(
        Title { "Login | {SITE_NAME}" }
        div {
            class: "flex flex-col gap-4 items-center justify-center min-h-screen",
            span {
                class: "loading loading-spinner loading-lg",
            }
            p {
                class: "opacity-60",
                "{message}"
            }
        }
    )
}
