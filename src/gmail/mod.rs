//! Gmail API module
//!
//! Contains types, authentication, and client for the vacation settings API.

pub mod auth;
pub mod client;
pub mod types;
pub mod utils;
