use dioxus::prelude::*;

use crate::{
    client::{
        api::{
            auth::redirect_to_login,
            firewall::{add_ip, make_public, purge},
        },
        config::Endpoints,
        model::{auth::SessionContext, cache::Cache, fallback::FallbackMode},
    },
    model::firewall::{AddIpRequest, WhitelistStatus},
};

use super::{
    modal::{ConfirmationModal, Modal},
    toast::Toasts,
};

/// Whitelist management: shows the caller's public IP and whether it is
/// allowed through the game server's firewall, with add / re-check /
/// purge / make-public actions. Mutation failures always surface.
#[component]
pub fn FirewallCard(
    user_ip: Cache<String>,
    whitelist: Cache<WhitelistStatus>,
    on_recheck: EventHandler<()>,
) -> Element {
    let endpoints = use_context::<Endpoints>();
    let session = use_context::<SessionContext>();
    let fallback = use_context::<Signal<Option<FallbackMode>>>();
    let mut toasts = use_context::<Toasts>();

    let mut show_add_modal = use_signal(|| false);
    let mut passcode = use_signal(String::new);
    let mut show_purge_confirm = use_signal(|| false);
    let mut mutating = use_signal(|| false);

    let fallback_active = fallback().unwrap_or(FallbackMode::live()).active();
    let known_ip = user_ip.data().cloned();

    let on_add_ip = {
        let endpoints = endpoints.clone();
        let known_ip = known_ip.clone();
        move |_| {
            let Some(address) = known_ip.clone() else {
                return;
            };
            let endpoints = endpoints.clone();
            let request = AddIpRequest {
                address,
                passcode: passcode(),
            };

            mutating.set(true);
            spawn(async move {
                toasts.info("Request sent", "IP will be added", 2_000);
                match add_ip(&endpoints, &request).await {
                    Ok(message) => {
                        toasts.success("Success", message, 3_000);
                        show_add_modal.set(false);
                        passcode.set(String::new());
                        on_recheck.call(());
                    }
                    Err(error) => {
                        toasts.error("Failed", error.to_string(), 3_000);
                    }
                }
                mutating.set(false);
            });
        }
    };

    let on_purge = {
        let endpoints = endpoints.clone();
        move |_| {
            let endpoints = endpoints.clone();
            let Some(token) = session.token() else {
                spawn(async move {
                    redirect_to_login(&endpoints).await;
                });
                return;
            };

            mutating.set(true);
            spawn(async move {
                match purge(&endpoints, &token).await {
                    Ok(message) => {
                        toasts.success("Firewall purged", message, 4_000);
                        show_purge_confirm.set(false);
                        on_recheck.call(());
                    }
                    Err(error) if error.is_auth_required() => {
                        // The login redirect is already underway.
                    }
                    Err(error) => {
                        toasts.error("Purge failed", error.to_string(), 4_000);
                    }
                }
                mutating.set(false);
            });
        }
    };

    let on_make_public = move |_| {
        let endpoints = endpoints.clone();
        let Some(token) = session.token() else {
            spawn(async move {
                redirect_to_login(&endpoints).await;
            });
            return;
        };

        mutating.set(true);
        spawn(async move {
            match make_public(&endpoints, &token).await {
                Ok(message) => {
                    toasts.success("Server opened", message, 4_000);
                    on_recheck.call(());
                }
                Err(error) if error.is_auth_required() => {}
                Err(error) => {
                    toasts.error("Request failed", error.to_string(), 4_000);
                }
            }
            mutating.set(false);
        });
    };

    rsx!(
        div {
            class: "card bg-base-100 border border-base-300 min-h-[400px]",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "Firewall"
                }
                p {
                    class: "text-sm opacity-60",
                    "Addresses permitted to reach the game server."
                }

                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-6 pt-4",
                    div {
                        h3 {
                            class: "text-sm font-medium opacity-60 mb-1",
                            "Your IPv4 address"
                        }
                        if let Some(ip) = known_ip.clone() {
                            p { "{ip}" }
                        } else if user_ip.is_loading() {
                            p { class: "opacity-60", "Fetching..." }
                        } else {
                            p { class: "opacity-60", "Could not determine user IP" }
                        }
                    }
                    div {
                        h3 {
                            class: "text-sm font-medium opacity-60 mb-1",
                            "Whitelist status"
                        }
                        match &whitelist {
                            Cache::Ready(WhitelistStatus::Present) => rsx!(
                                span { class: "badge badge-success", "Whitelisted" }
                            ),
                            Cache::Ready(WhitelistStatus::Absent) => rsx!(
                                span { class: "badge badge-warning", "Not whitelisted" }
                            ),
                            Cache::Degraded(_) => rsx!(
                                span { class: "badge badge-ghost", "Unknown (fallback mode)" }
                            ),
                            Cache::Loading => rsx!(
                                span { class: "loading loading-spinner loading-sm" }
                            ),
                            Cache::Error(error) => rsx!(
                                span { class: "text-error text-sm", "{error}" }
                            ),
                            _ => rsx!(
                                span { class: "opacity-60 text-sm", "Not checked yet" }
                            ),
                        }
                    }
                }

                div {
                    class: "card-actions pt-6 flex-wrap",
                    button {
                        class: "btn btn-outline btn-sm",
                        disabled: known_ip.is_none() || mutating() || fallback_active,
                        onclick: move |_| show_add_modal.set(true),
                        "Add your IP"
                    }
                    button {
                        class: "btn btn-outline btn-sm",
                        disabled: known_ip.is_none() || whitelist.is_loading(),
                        onclick: move |_| on_recheck.call(()),
                        "Re-check"
                    }
                    button {
                        class: "btn btn-outline btn-error btn-sm",
                        disabled: mutating() || fallback_active,
                        onclick: move |_| show_purge_confirm.set(true),
                        "Purge all"
                    }
                    button {
                        class: "btn btn-outline btn-sm",
                        disabled: mutating() || fallback_active,
                        onclick: on_make_public,
                        "Make public"
                    }
                }
            }
        }

        Modal {
            show: show_add_modal,
            title: "Add your IP",
            prevent_close: mutating(),
            p {
                class: "text-sm opacity-60 mb-4",
                "Whitelist your current address. A passcode is required."
            }
            div {
                class: "form-control flex flex-col gap-2",
                label {
                    class: "label",
                    span { class: "label-text", "Passcode" }
                }
                input {
                    r#type: "password",
                    class: "input input-bordered w-full",
                    placeholder: "passcode",
                    value: "{passcode}",
                    oninput: move |evt| passcode.set(evt.value()),
                }
            }
            div {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn",
                    disabled: mutating(),
                    onclick: move |_| show_add_modal.set(false),
                    "Cancel"
                }
                button {
                    r#type: "button",
                    class: "btn btn-primary",
                    disabled: mutating() || passcode().is_empty(),
                    onclick: on_add_ip,
                    "Add IP"
                }
            }
        }

        ConfirmationModal {
            show: show_purge_confirm,
            title: "Purge firewall",
            message: rsx!(
                p {
                    class: "text-sm opacity-60",
                    "Remove every whitelisted address from the firewall. Players will lose access until re-added."
                }
            ),
            confirm_text: "Purge",
            confirm_class: "btn-error",
            is_processing: mutating(),
            processing_text: "Purging...",
            on_confirm: on_purge,
        }
    )
}
