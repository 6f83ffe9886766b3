//! Command handlers behind the `xbesh` binary.

pub mod config;
mod countdown;
mod detect;
mod downloads;
mod routes;
mod services;
mod subscribe;

pub use config::{Config, ConfigOverrides};
pub use countdown::countdown;
pub use detect::detect;
pub use downloads::downloads;
pub use routes::routes;
pub use services::build_form_client;
pub use subscribe::subscribe;
