//! Core components of the `sleeper-previews` client.
//!
//! This module contains the foundational building blocks of the crate:
//! - The main [`PreviewsClient`] and its builder.
//! - The primary [`PreviewsError`] type.
//! - Shared value objects like [`LeagueContext`] and [`RepoSource`].
//! - Internal networking helpers.

/// The main client (`PreviewsClient`), builder, and endpoint defaults.
pub mod client;
/// The primary error type (`PreviewsError`) for the crate.
pub mod error;
/// Shared value objects passed explicitly between components.
pub mod models;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::PreviewsClient`
pub use client::{PreviewsClient, PreviewsClientBuilder};
pub use error::PreviewsError;
pub use models::{LeagueContext, RepoSource};
