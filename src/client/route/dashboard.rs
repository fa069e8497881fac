use dioxus::prelude::*;
use dioxus_logger::tracing;
use gloo_timers::future::TimeoutFuture;

use crate::{
    client::{
        api::{firewall, machine, mods, server_query, user_ip},
        component::{
            AdminConsoleCard, DetailsCard, FallbackBanner, FirewallCard, LogsCard, ModListCard,
            Page, StillLoadingCard, Toasts,
        },
        config::Endpoints,
        constant::{SITE_NAME, SLOW_BOOT_DELAY_MS},
        model::{
            auth::SessionContext,
            cache::{Cache, Sourced},
            error::ApiError,
            fallback::FallbackMode,
        },
    },
    model::{
        firewall::WhitelistStatus, machine::VmDetailsDto, mods::ModListingDto,
        server_query::ServerQueryDto,
    },
};

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Details,
    Server,
    Mods,
    Logs,
    Console,
    Firewall,
}

const TABS: [(Tab, &str); 6] = [
    (Tab::Details, "Details"),
    (Tab::Server, "Server"),
    (Tab::Mods, "Mods"),
    (Tab::Logs, "Logs"),
    (Tab::Console, "Console"),
    (Tab::Firewall, "Firewall"),
];

/// The dashboard view-model: sequences every resource fetch, tracks one
/// [`Cache`] per resource, and reacts to dependent-data changes.
///
/// VM details, mod list and user-IP discovery launch together on mount.
/// The whitelist check follows the user IP; the server query follows the
/// VM public address and re-fires when it changes. Everything else is
/// on-demand.
#[component]
pub fn Dashboard() -> Element {
    let endpoints = use_context::<Endpoints>();
    let session = use_context::<SessionContext>();
    let fallback_flag = use_context::<Signal<Option<FallbackMode>>>();
    let mut toasts = use_context::<Toasts>();

    // The app root only mounts the router once the boot probe fixed the
    // flag, so the default here is unreachable in practice.
    let fallback = fallback_flag().unwrap_or(FallbackMode::live());

    let mut vm = use_signal(|| Cache::<VmDetailsDto>::Idle);
    let mut mod_list = use_signal(|| Cache::<ModListingDto>::Idle);
    let mut user_ip_cache = use_signal(|| Cache::<String>::Idle);
    let mut whitelist = use_signal(|| Cache::<WhitelistStatus>::Idle);
    let mut motd = use_signal(|| Cache::<ServerQueryDto>::Idle);
    let mut slow_boot = use_signal(|| false);
    let mut active_tab = use_signal(|| Tab::Details);

    // Server queries are keyed by the address that triggered them; a
    // result whose generation is no longer current is discarded instead
    // of racing a newer address's fetch.
    let mut query_generation = use_signal(|| 0u32);
    let mut queried_address = use_signal(|| None::<String>);

    // --- boot fetches, all independent -------------------------------

    {
        let endpoints = endpoints.clone();
        use_future(move || {
            let endpoints = endpoints.clone();
            async move {
                vm.set(Cache::Loading);
                let sourced = machine::fetch_vm_details(&endpoints, fallback).await;
                vm.set(Cache::from_sourced(sourced));
            }
        });
    }

    let fetch_mods = {
        let endpoints = endpoints.clone();
        move || {
            let endpoints = endpoints.clone();
            async move {
                mod_list.set(Cache::Loading);
                let result = match session.token() {
                    Some(token) => mods::fetch_mod_list(&endpoints, fallback, &token).await,
                    // The fallback path never reaches the network, so no
                    // token is needed to keep the card populated.
                    None if fallback.active() => {
                        mods::fetch_mod_list(&endpoints, fallback, "").await
                    }
                    // Anonymous sessions get a login prompt, not a
                    // boot-time redirect.
                    None => Err(ApiError::AuthRequired),
                };
                mod_list.set(Cache::from_result(result));
            }
        }
    };

    {
        let fetch_mods = fetch_mods.clone();
        use_future(move || fetch_mods());
    }

    use_future(move || async move {
        user_ip_cache.set(Cache::Loading);
        match user_ip::fetch_user_ip().await {
            Ok(ip) => user_ip_cache.set(Cache::Ready(ip)),
            Err(error) => {
                tracing::error!("user IP discovery failed: {error}");
                toasts.error("IP fetch failed", "Could not determine user IP", 3_000);
                user_ip_cache.set(Cache::Error(error));
            }
        }
    });

    // --- dependent fetches -------------------------------------------

    let check_whitelist = {
        let endpoints = endpoints.clone();
        move |ip: String| {
            let endpoints = endpoints.clone();
            whitelist.set(Cache::Loading);
            spawn(async move {
                match firewall::check_ip(&endpoints, fallback, &ip).await {
                    Ok(status) if fallback.active() => {
                        whitelist.set(Cache::from_sourced(Sourced::Substitute(status)))
                    }
                    Ok(status) => whitelist.set(Cache::Ready(status)),
                    Err(error) => whitelist.set(Cache::Error(error)),
                }
            });
        }
    };

    // Whitelist check fires as soon as the user IP resolves.
    {
        let check_whitelist = check_whitelist.clone();
        use_effect(move || {
            let ip = user_ip_cache.read().data().cloned();
            if let Some(ip) = ip {
                if matches!(&*whitelist.peek(), Cache::Idle) {
                    let mut check_whitelist = check_whitelist.clone();
                    check_whitelist(ip);
                }
            }
        });
    }

    // Server query follows the VM public address, re-firing whenever the
    // address changes. Gated so it never fires on an empty or "N.A"
    // placeholder address.
    {
        let endpoints = endpoints.clone();
        use_effect(move || {
            let address = vm.read().data().and_then(|details| {
                details
                    .has_public_address()
                    .then(|| details.public_ip.clone())
            });
            let Some(address) = address else {
                return;
            };
            if queried_address.peek().as_deref() == Some(address.as_str()) {
                return;
            }
            queried_address.set(Some(address.clone()));

            let generation = *query_generation.peek() + 1;
            query_generation.set(generation);
            motd.set(Cache::Loading);

            let endpoints = endpoints.clone();
            spawn(async move {
                let sourced = server_query::fetch_server_query(&endpoints, fallback, &address).await;
                if *query_generation.peek() == generation {
                    motd.set(Cache::from_sourced(sourced));
                } else {
                    tracing::info!("discarding stale server query for {address}");
                }
            });
        });
    }

    // --- slow-boot advisory ------------------------------------------

    use_future(move || async move {
        TimeoutFuture::new(SLOW_BOOT_DELAY_MS).await;
        if !(vm.peek().is_settled() && mod_list.peek().is_settled()) {
            slow_boot.set(true);
        }
    });

    use_effect(move || {
        let settled = vm.read().is_settled() && mod_list.read().is_settled();
        if settled && *slow_boot.peek() {
            slow_boot.set(false);
        }
    });

    // --- view ---------------------------------------------------------

    let vm_cache = vm();
    let instance_name = vm_cache
        .map(|details| details.instance_name.clone())
        .unwrap_or_else(|| SITE_NAME.to_string());
    let instance_id = vm_cache.map(|details| details.instance_id.clone());
    let server_address = vm_cache.data().and_then(|details| {
        details
            .has_public_address()
            .then(|| details.public_ip.clone())
    });
    let user_ip_line = user_ip_cache()
        .data()
        .cloned()
        .unwrap_or_else(|| "Fetching...".to_string());

    let motd_cache = motd();
    let players = motd_cache
        .map(|query| query.players.clone())
        .unwrap_or_default();

    let on_recheck = {
        let check_whitelist = check_whitelist.clone();
        move |_| {
            if let Some(ip) = user_ip_cache.peek().data().cloned() {
                let mut check_whitelist = check_whitelist.clone();
                check_whitelist(ip);
            }
        }
    };

    let on_mods_refresh = move |_| {
        spawn(fetch_mods());
    };

    rsx! {
        Title { "{SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl px-4 py-6",

                if fallback.active() {
                    FallbackBanner {}
                }

                div {
                    class: "mb-6",
                    h1 {
                        class: "text-2xl font-semibold",
                        "{instance_name}"
                    }
                    if let Some(id) = instance_id {
                        p {
                            class: "text-sm opacity-60",
                            "Instance ID: {id}"
                        }
                    }
                    p {
                        class: "text-sm opacity-60",
                        "Your IPV4 address: {user_ip_line}"
                    }
                }

                SummaryCard { vm: vm_cache.clone() }

                if slow_boot() {
                    StillLoadingCard {}
                }

                div {
                    role: "tablist",
                    class: "tabs tabs-bordered mt-6",
                    for (tab, label) in TABS {
                        button {
                            key: "{label}",
                            role: "tab",
                            class: if active_tab() == tab { "tab tab-active" } else { "tab" },
                            onclick: move |_| active_tab.set(tab),
                            "{label}"
                        }
                    }
                }

                div {
                    class: "pt-4",
                    match active_tab() {
                        Tab::Details => rsx!(
                            DetailsCard {
                                title: "Instance details",
                                description: "Detailed information about this instance",
                                fields: vm_cache.map(|details| details.display_fields()).unwrap_or_default(),
                                degraded: vm_cache.is_degraded(),
                                loading: vm_cache.is_loading(),
                            }
                        ),
                        Tab::Server => rsx!(
                            DetailsCard {
                                title: "Server query",
                                description: "Live status reported by the game server",
                                fields: motd_cache.map(|query| query.display_fields()).unwrap_or_default(),
                                degraded: motd_cache.is_degraded(),
                                loading: motd_cache.is_loading() || matches!(motd_cache, Cache::Idle),
                                extra: rsx!(
                                    if !players.is_empty() {
                                        div {
                                            class: "pt-6",
                                            h3 {
                                                class: "text-sm font-medium opacity-60 mb-1",
                                                "Online players"
                                            }
                                            div {
                                                class: "flex flex-wrap gap-2",
                                                for player in players.iter() {
                                                    span {
                                                        key: "{player}",
                                                        class: "badge badge-outline",
                                                        "{player}"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                ),
                            }
                        ),
                        Tab::Mods => rsx!(
                            ModListCard {
                                cache: mod_list(),
                                on_refresh: on_mods_refresh,
                            }
                        ),
                        Tab::Logs => rsx!(
                            LogsCard {
                                address: server_address.clone(),
                            }
                        ),
                        Tab::Console => rsx!(
                            AdminConsoleCard {
                                players: players.clone(),
                                address: server_address.clone(),
                            }
                        ),
                        Tab::Firewall => rsx!(
                            FirewallCard {
                                user_ip: user_ip_cache(),
                                whitelist: whitelist(),
                                on_recheck,
                            }
                        ),
                    }
                }
            }
        }
    }
}

/// The always-visible status strip above the tabs.
#[component]
fn SummaryCard(vm: Cache<VmDetailsDto>) -> Element {
    rsx!(
        div {
            class: "card bg-base-100 border border-base-300 mb-6",
            div {
                class: "card-body",
                h2 {
                    class: "card-title text-lg",
                    "Server summary"
                }
                if let Some(details) = vm.data() {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                        div {
                            h3 {
                                class: "text-sm font-medium opacity-60 mb-1",
                                "Status"
                            }
                            span {
                                class: if details.is_running() { "badge badge-success" } else { "badge badge-error" },
                                "{details.status}"
                            }
                        }
                        div {
                            h3 {
                                class: "text-sm font-medium opacity-60 mb-1",
                                "Public IPv4 address"
                            }
                            p { "{details.public_ip}" }
                        }
                        div {
                            h3 {
                                class: "text-sm font-medium opacity-60 mb-1",
                                "Instance type"
                            }
                            p { "{details.machine_type}" }
                        }
                    }
                } else if vm.is_loading() {
                    div {
                        class: "flex items-center justify-center py-6",
                        span { class: "loading loading-spinner" }
                    }
                }
            }
        }
    )
}
