use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-24 p-4 {class}",
            {children}
        }
    )
}

#[component]
pub fn LoadingPage() -> Element {
    rsx!(
        div {
            class: "flex items-center justify-center min-h-screen",
            span {
                class: "loading loading-spinner loading-lg",
            }
        }
    )
}

#[component]
pub fn Spinner() -> Element {
    rsx!(
        div {
            class: "flex items-center justify-center py-12",
            span {
                class: "loading loading-spinner",
            }
        }
    )
}
