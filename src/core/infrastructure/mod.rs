pub mod api_client;
pub mod server_api;
