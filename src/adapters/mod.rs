//! Adapter implementations for port traits
//!
//! Concrete implementations that perform I/O:
//!
//! - `github` - GitHub REST API over blocking `reqwest`

pub mod github;

pub use github::GithubClient;
