pub mod dashboard;
pub mod login_callback;

pub use dashboard::Dashboard;
pub use login_callback::LoginCallback;

use dioxus::prelude::*;

use crate::client::component::Page;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Page {
            class: "flex flex-col items-center justify-center w-full h-full",
            h2 {
                class: "text-xl font-bold mb-2",
                "Page not found"
            }
            p {
                class: "opacity-60",
                "Nothing lives at /{path}"
            }
        }
    )
}
