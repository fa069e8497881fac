use dioxus::prelude::*;

/// Persistent notice that the whole session is running on sample data
/// because the boot health probe failed.
#[component]
pub fn FallbackBanner() -> Element {
    rsx!(
        div {
            class: "mb-6",
            div {
                class: "alert alert-error animate-pulse",
                span {
                    class: "text-sm font-medium",
                    "Fallback mode enabled. Failure of health check indicates that the API server is unavailable"
                }
            }
        }
    )
}

/// Advisory shown when the boot fetches are taking suspiciously long;
/// the parent decides when this renders.
#[component]
pub fn StillLoadingCard() -> Element {
    rsx!(
        div {
            class: "mt-6",
            div {
                class: "alert alert-info",
                span {
                    class: "text-sm font-medium",
                    "It looks like the API server might be starting up. Please wait"
                }
            }
        }
    )
}
