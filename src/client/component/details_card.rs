use dioxus::prelude::*;

use super::page::Spinner;

/// Generic key-value card: a titled grid of labelled rows, with an
/// optional "sample data" marker when the rows come from a substitute
/// value rather than the live backend.
#[component]
pub fn DetailsCard(
    title: String,
    description: String,
    fields: Vec<(&'static str, String)>,
    degraded: bool,
    loading: bool,
    extra: Option<Element>,
) -> Element {
    rsx!(
        div {
            class: "card bg-base-100 border border-base-300 min-h-[400px]",
            div {
                class: "card-body",
                div {
                    class: "flex items-center gap-2",
                    h2 {
                        class: "card-title",
                        "{title}"
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
                    "{description}"
                }
                if loading {
                    Spinner {}
                } else {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 gap-6 pt-4",
                        for (label, value) in fields {
                            div {
                                key: "{label}",
                                h3 {
                                    class: "text-sm font-medium opacity-60 mb-1",
                                    "{label}"
                                }
                                p {
                                    "{value}"
                                }
                            }
                        }
                    }
                    {extra}
                }
            }
        }
    )
}
