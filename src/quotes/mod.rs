//! Quotes module for interacting with the Yurippe quotes API.
//!
//! This module provides the `QuoteClient` and related types for:
//! - Fetching the validated quote collection
//! - Picking one quote at random with a length preference
//!
//! # Submodules
//! - `quote_client` - the client and its fetch pipeline
//! - `response_structs` - wire records as served by the API
//! - `selection` - validity filtering and the random selection policy

pub mod quote_client;
pub mod response_structs;
pub(crate) mod selection;
