//! Output types returned to SDK callers.

use serde::{Deserialize, Serialize};

/// A quote reshaped for presentation.
///
/// `author` carries the speaking character's name. The upstream `show`
/// and `_id` fields are dropped during reshaping and never appear here.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ParsedQuote {
    pub quote: String,
    pub author: String,
}
