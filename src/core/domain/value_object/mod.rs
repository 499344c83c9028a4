pub(crate) mod base_value_object;
mod dashboard_url;
mod server_id;

pub use base_value_object::ValueObject;
pub use dashboard_url::DashboardUrl;
pub use server_id::ServerId;
