use dioxus::prelude::*;

use crate::{
    client::{
        api::logs::fetch_logs,
        config::Endpoints,
        model::{auth::SessionContext, cache::Cache, fallback::FallbackMode},
    },
    model::logs::{LogEntry, LogsDto},
};

use super::page::Spinner;

const LINE_OPTIONS: [u32; 5] = [100, 200, 300, 400, 500];

/// Tail of the server process log. Fetching is user-initiated and
/// re-runnable; the line count is selectable.
#[component]
pub fn LogsCard(address: Option<String>) -> Element {
    let endpoints = use_context::<Endpoints>();
    let session = use_context::<SessionContext>();
    let fallback = use_context::<Signal<Option<FallbackMode>>>();

    let mut cache = use_signal(|| Cache::<LogsDto>::Idle);
    let mut line_count = use_signal(|| LINE_OPTIONS[0]);
    let mut initiated = use_signal(|| false);

    let has_session = session.is_present();
    let fetch_address = address.clone();

    let refetch = move |_| {
        let Some(address) = fetch_address.clone() else {
            return;
        };
        let endpoints = endpoints.clone();
        let token = session.token().unwrap_or_default();
        let fallback = fallback().unwrap_or(FallbackMode::live());
        let lines = line_count();

        cache.set(Cache::Loading);
        spawn(async move {
            let result = fetch_logs(&endpoints, fallback, &token, &address, lines).await;
            cache.set(Cache::from_result(result));
        });
    };

    let mut on_initiate = refetch.clone();
    let mut on_line_count = refetch.clone();
    let mut on_refresh = refetch;

    let degraded = cache.read().is_degraded();
    let busy = cache.read().is_loading();

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
                                "Server Logs"
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
                            "Latest lines from the game server process."
                        }
                    }
                    div {
                        class: "flex items-center gap-1",
                        select {
                            class: "select select-sm select-bordered",
                            disabled: busy || !initiated(),
                            onchange: move |evt| {
                                if let Ok(lines) = evt.value().parse::<u32>() {
                                    line_count.set(lines);
                                    on_line_count(());
                                }
                            },
                            for option in LINE_OPTIONS {
                                option {
                                    value: "{option}",
                                    selected: line_count() == option,
                                    "{option} lines"
                                }
                            }
                        }
                        button {
                            class: "btn btn-sm btn-ghost",
                            disabled: busy || !initiated(),
                            onclick: move |_| on_refresh(()),
                            "Refresh"
                        }
                    }
                }

                if !has_session {
                    div {
                        class: "flex flex-col items-center justify-center h-64 opacity-60 gap-2",
                        span {
                            class: "text-xs",
                            "Please log in to view the server logs"
                        }
                    }
                } else if address.is_none() {
                    div {
                        class: "flex flex-col items-center justify-center h-64 opacity-60 gap-2",
                        span {
                            class: "text-xs",
                            "Waiting for the server address to resolve..."
                        }
                    }
                } else if !initiated() {
                    div {
                        class: "flex flex-col items-center justify-center h-64 gap-4",
                        div {
                            class: "text-center space-y-1",
                            p {
                                class: "text-sm font-medium",
                                "Ready to Fetch"
                            }
                            p {
                                class: "text-xs opacity-60 max-w-[220px]",
                                "Need to fetch the log tail before it can be displayed."
                            }
                        }
                        button {
                            class: "btn btn-sm",
                            onclick: move |_| {
                                initiated.set(true);
                                on_initiate(());
                            },
                            "Get Logs"
                        }
                    }
                } else if busy {
                    Spinner {}
                } else if let Some(error) = cache.read().error() {
                    div {
                        class: "text-error p-4 text-sm flex items-center justify-center",
                        "{error}"
                    }
                } else if let Some(logs) = cache.read().data() {
                    if logs.items.is_empty() {
                        div {
                            class: "flex flex-col items-center justify-center h-48 opacity-60",
                            span {
                                class: "text-xs",
                                "No logs found."
                            }
                        }
                    } else {
                        div {
                            class: "flex flex-col",
                            for (index, entry) in logs.items.iter().enumerate() {
                                LogRow {
                                    key: "{index}",
                                    entry: entry.clone(),
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

fn level_class(level: &str) -> &'static str {
    match level.to_uppercase().as_str() {
        "ERROR" => "badge badge-error badge-xs",
        "WARN" => "badge badge-warning badge-xs",
        _ => "badge badge-success badge-xs",
    }
}

#[component]
fn LogRow(entry: LogEntry) -> Element {
    rsx!(
        div {
            class: "flex gap-3 p-2 text-xs border-b border-base-200 hover:bg-base-200 font-mono items-center",
            span {
                class: level_class(&entry.level),
            }
            span {
                class: "font-bold uppercase shrink-0",
                "{entry.timestamp}"
            }
            div {
                class: "flex-1 min-w-0",
                span {
                    class: "opacity-70 break-all",
                    "{entry.message}"
                }
                if !entry.src.is_empty() {
                    span {
                        class: "opacity-30 text-xs select-none pl-2",
                        "--({entry.src})"
                    }
                }
            }
        }
    )
}
