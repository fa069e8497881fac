use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaGithub, Icon};
use dioxus_logger::tracing;

use crate::client::{
    api::auth::begin_login,
    config::Endpoints,
    constant::SITE_NAME,
    model::auth::SessionContext,
};

use super::toast::Toasts;

#[component]
pub fn Header() -> Element {
    let endpoints = use_context::<Endpoints>();
    let mut session = use_context::<SessionContext>();
    let mut toasts = use_context::<Toasts>();

    let user_id = session.current().map(|session| session.user_id);

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center gap-3",
            p {
                class: "md:text-xl text-wrap font-bold",
                {SITE_NAME}
            }
        }
        div {
            class: "flex items-center gap-2",
            if let Some(user_id) = user_id {
                if !user_id.is_empty() {
                    p {
                        class: "text-sm opacity-60",
                        "{user_id}"
                    }
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| session.logout(),
                    "Logout"
                }
            } else {
                button {
                    class: "btn btn-outline flex gap-2 items-center",
                    onclick: move |_| {
                        let endpoints = endpoints.clone();
                        async move {
                            if let Err(error) = begin_login(&endpoints).await {
                                tracing::error!("login initiation failed: {error}");
                                toasts.error(
                                    "Login failed",
                                    "Could not start the login process. Please try again.",
                                    4_000,
                                );
                            }
                        }
                    },
                    Icon {
                        width: 22,
                        height: 22,
                        icon: FaGithub
                    }
                    p {
                        "Login"
                    }
                }
            }
        }
    })
}
