pub mod config;
pub mod errors;
pub mod routes;
pub mod screening;
pub mod state;
