pub mod api;
pub mod auth;
pub mod command;
pub mod firewall;
pub mod logs;
pub mod machine;
pub mod mods;
pub mod server_query;
