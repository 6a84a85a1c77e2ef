pub mod billing_routes;
pub mod channel_routes;
pub mod customer_routes;
pub mod employee_routes;
pub mod episode_routes;
pub mod function_routes;
pub mod installation_routes;
pub mod package_routes;
pub mod procedure_routes;
pub mod show_routes;
pub mod subscription_routes;
