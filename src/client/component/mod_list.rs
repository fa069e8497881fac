use dioxus::prelude::*;

use crate::{
    client::{
        api::mods::fetch_download_link,
        config::Endpoints,
        model::{auth::SessionContext, cache::Cache, error::ApiError, fallback::FallbackMode},
    },
    model::mods::ModListingDto,
};

use super::{modal::ConfirmationModal, page::Spinner, toast::Toasts};

/// How many mods show before the listing collapses behind "Show All".
const COLLAPSED_LIMIT: usize = 10;

#[component]
pub fn ModListCard(cache: Cache<ModListingDto>, on_refresh: EventHandler<()>) -> Element {
    let endpoints = use_context::<Endpoints>();
    let session = use_context::<SessionContext>();
    let fallback = use_context::<Signal<Option<FallbackMode>>>();
    let mut toasts = use_context::<Toasts>();

    let mut search = use_signal(String::new);
    let mut expanded = use_signal(|| false);
    let mut confirming_file = use_signal(|| None::<String>);
    let mut downloading = use_signal(|| false);

    let mut show_confirm = use_signal(|| false);

    let has_session = session.is_present();
    let degraded = cache.is_degraded();

    let on_download_confirm = move |_| {
        let Some(file) = confirming_file() else {
            return;
        };
        let endpoints = endpoints.clone();
        let token = session.token().unwrap_or_default();
        let fallback = fallback().unwrap_or(FallbackMode::live());

        downloading.set(true);
        spawn(async move {
            match fetch_download_link(&endpoints, fallback, &token, &file).await {
                Ok(link) => {
                    gloo_utils::window().open_with_url(&link).ok();
                    toasts.info("Download Started", "Link expires in 5 minutes.", 4_000);
                }
                Err(ApiError::NotFound(message)) => {
                    toasts.error("File not found", message, 4_000);
                }
                Err(ApiError::AuthRequired) => {
                    // The redirect is already underway.
                }
                Err(error) => {
                    toasts.error("Download Failed", error.to_string(), 4_000);
                }
            }
            downloading.set(false);
            show_confirm.set(false);
            confirming_file.set(None);
        });
    };

    rsx!(
        div {
            class: "card bg-base-100 border border-base-300 min-h-[400px]",
            div {
                class: "card-body",
                div {
                    class: "flex justify-between items-start",
                    div {
                        div {
                            class: "flex items-center gap-2",
                            h2 {
                                class: "card-title",
                                "Installed Mods"
                            }
                            if degraded {
                                span {
                                    class: "badge badge-warning badge-outline",
                                    "sample data"
                                }
                            }
                        }
                        p {
                            class: "text-sm opacity-60",
                            "Mod files on the server, with short-lived download links."
                        }
                        if let Some(listing) = cache.data() {
                            p {
                                class: "text-xs opacity-40",
                                "Last updated {listing.updated_at}"
                            }
                        }
                    }
                    button {
                        class: "btn btn-sm btn-ghost",
                        disabled: cache.is_loading(),
                        onclick: move |_| on_refresh.call(()),
                        "Refresh"
                    }
                }

                if !has_session || cache.error().is_some_and(|error| error.is_auth_required()) {
                    div {
                        class: "flex flex-col items-center justify-center h-64 opacity-60 gap-2",
                        span {
                            class: "text-xs",
                            "Please log in to view available mods / download them"
                        }
                    }
                } else if cache.is_loading() || matches!(cache, Cache::Idle) {
                    Spinner {}
                } else if let Some(error) = cache.error() {
                    div {
                        class: "text-error p-4 text-sm flex items-center justify-center",
                        "{error}"
                    }
                } else if let Some(listing) = cache.data() {
                    ModListing {
                        mods: listing.mods.clone(),
                        search,
                        expanded,
                        on_download: move |file: String| {
                            confirming_file.set(Some(file));
                            show_confirm.set(true);
                        },
                    }
                }
            }
        }

        if let Some(file) = confirming_file() {
            ConfirmationModal {
                show: show_confirm,
                title: "Confirm your download",
                message: rsx!(
                    p {
                        class: "text-sm opacity-60",
                        "Do you really want to download `{file}`? The link will only be available for 5 minutes."
                    }
                ),
                confirm_text: "Download",
                confirm_class: "btn-primary",
                is_processing: downloading(),
                processing_text: "Requesting link...",
                on_confirm: on_download_confirm,
            }
        }
    )
}

#[component]
fn ModListing(
    mods: Vec<String>,
    search: Signal<String>,
    expanded: Signal<bool>,
    on_download: EventHandler<String>,
) -> Element {
    let total = mods.len();
    let query = search().to_lowercase();
    let searching = !query.is_empty();

    let filtered: Vec<String> = mods
        .iter()
        .filter(|file| file.to_lowercase().contains(&query))
        .cloned()
        .collect();

    let visible: Vec<String> = if searching || expanded() {
        filtered.clone()
    } else {
        filtered.iter().take(COLLAPSED_LIMIT).cloned().collect()
    };

    let can_show_more = !searching && filtered.len() > COLLAPSED_LIMIT;

    rsx!(
        div {
            class: "flex flex-col gap-4",
            input {
                r#type: "text",
                class: "input input-bordered w-full rounded-full",
                placeholder: "Search {total} mods...",
                value: "{search}",
                oninput: move |evt| {
                    search.set(evt.value());
                    expanded.set(false);
                },
            }

            if visible.is_empty() {
                div {
                    class: "text-center py-8 opacity-60 text-sm italic",
                    "No mods match your search."
                }
            } else {
                div {
                    class: "grid gap-2 grid-cols-1 sm:grid-cols-2",
                    for file in visible {
                        button {
                            key: "{file}",
                            class: "flex items-center justify-between p-3 border border-base-300 rounded-lg hover:border-base-content text-left",
                            onclick: {
                                let file = file.clone();
                                move |_| on_download.call(file.clone())
                            },
                            span {
                                class: "text-sm font-medium truncate",
                                title: "{file}",
                                "{file}"
                            }
                        }
                    }
                }
            }

            if can_show_more {
                div {
                    class: "flex justify-center mt-2",
                    button {
                        class: "btn btn-ghost btn-xs rounded-full",
                        onclick: move |_| expanded.set(!expanded()),
                        if expanded() {
                            "Show Less"
                        } else {
                            "Show All ({total})"
                        }
                    }
                }
            }
        }
    )
}
