pub mod aggregate;
pub mod config;
pub mod http;
pub mod render;
pub mod server;
pub mod source;
