pub mod history;
pub mod insight;
pub mod server;
