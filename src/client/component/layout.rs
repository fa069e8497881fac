use dioxus::prelude::*;

use crate::client::{component::Header, router::Route};

use super::toast::ToastHost;

#[component]
pub fn Layout() -> Element {
    rsx!(div {
        Header {}
        ToastHost {}
        Outlet::<Route> {}
    })
}
