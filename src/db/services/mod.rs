//! Data access for the gateway. Every function here is one parameterized
//! statement against the external engine; no validation, coercion or
//! orchestration happens on this side of the boundary. Referential
//! integrity, derived columns and status computation all belong to the
//! engine's triggers, functions and procedures.

pub mod billing_service;
pub mod channel_service;
pub mod customer_service;
pub mod employee_service;
pub mod episode_service;
pub mod installation_service;
pub mod package_service;
pub mod routine_service;
pub mod show_service;
pub mod subscription_service;

pub use billing_service::*;
pub use channel_service::*;
pub use customer_service::*;
pub use employee_service::*;
pub use episode_service::*;
pub use installation_service::*;
pub use package_service::*;
pub use routine_service::*;
pub use show_service::*;
pub use subscription_service::*;
