//! Gmail Auto-Reply Library
//!
//! Sets and reads a Google Workspace user's out-of-office reply through the
//! Gmail settings API, using a service account with domain-wide delegation.

pub mod autoreply;
pub mod config;
pub mod error;
pub mod gmail;

pub use autoreply::{AutoReplyManager, StatusReport};
pub use config::Config;
pub use error::{AutoReplyError, Result};
