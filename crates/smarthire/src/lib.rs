pub mod config;
pub mod error;
pub mod notifications;
pub mod recruitment;
pub mod routing;
pub mod session;
pub mod store;
pub mod telemetry;

pub use error::AppError;
