use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{Dashboard, LoginCallback, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Dashboard {},

    #[route("/callback?:code")]
    LoginCallback { code: String },
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
