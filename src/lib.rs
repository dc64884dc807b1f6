// Simple library interface to allow integration tests to work

pub mod api_model;
pub mod command_line_interface;
pub mod constants;
pub mod database_api;
pub mod database_migrate_refinery;
pub mod database_readiness;
pub mod error;
pub mod internal_api;
pub mod warp_api;
pub mod warp_endpoints;
