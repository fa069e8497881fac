mod client;
mod model;

use client::{config::Endpoints, App};

fn main() {
    // Refuse to bring up any UI without a configured API base URL.
    let endpoints = match Endpoints::from_env() {
        Ok(endpoints) => endpoints,
        Err(error) => panic!("startup aborted: {error}"),
    };

    dioxus::LaunchBuilder::new()
        .with_context(endpoints)
        .launch(App);
}
