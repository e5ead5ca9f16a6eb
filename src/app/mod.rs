pub mod client;
pub mod services;

pub use client::Client;
pub use services::{ApiResponse, BreweryService, UserService};
