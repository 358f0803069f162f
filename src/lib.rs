#![deny(unreachable_pub)]

// Core modules
mod consts;
mod errors;
mod helpers;
mod prelude;
mod req;

// Feature modules
pub mod quotes;
pub mod types;

// Re-exports
pub use consts::{LOCAL_API_URL, MAX_PREFERRED_QUOTE_LEN, PRODUCTION_API_URL};
pub use errors::Error;
pub use helpers::BaseUrl;
pub use quotes::quote_client::*;
pub use quotes::response_structs::*;
pub use types::*;
