pub mod auth;
pub mod command;
pub mod firewall;
pub mod health;
pub mod helper;
pub mod logs;
pub mod machine;
pub mod mods;
pub mod server_query;
pub mod user_ip;
