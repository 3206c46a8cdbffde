pub mod runtime;
pub mod server;
