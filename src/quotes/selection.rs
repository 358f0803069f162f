//! Validity filtering and random quote selection.
//!
//! The API serves everything from one-liners to monologue-length quotes,
//! so selection applies a length preference on top of the uniform draw:
//!
//! 1. Collect the subset of valid records whose text fits
//!    `MAX_PREFERRED_QUOTE_LEN` characters.
//! 2. If that subset is non-empty, draw uniformly from it.
//! 3. Otherwise draw uniformly from the full valid set.
//!
//! A dataset of only long quotes still yields a quote. Whenever at least
//! one short quote exists, the result is short.

use rand::Rng;
use serde_json::Value;
use tracing::debug;

use crate::quotes::response_structs::RawQuote;

/// Drop malformed and blank records, keeping the order of the rest.
///
/// Elements that fail to deserialize into a record (non-objects, missing
/// or wrong-typed fields) are dropped silently, as are records that fail
/// the validity predicate. Only a debug-level count is logged.
pub(crate) fn filter_valid(records: Vec<Value>) -> Vec<RawQuote> {
    let total = records.len();
    let valid: Vec<RawQuote> = records
        .into_iter()
        .filter_map(|record| serde_json::from_value::<RawQuote>(record).ok())
        .filter(RawQuote::is_valid)
        .collect();

    if valid.len() < total {
        debug!(
            total,
            dropped = total - valid.len(),
            "dropped invalid quote records"
        );
    }

    valid
}

/// Pick one record uniformly at random, preferring short quotes.
///
/// Returns `None` only when `valid` is empty.
pub(crate) fn pick_quote<R: Rng>(mut valid: Vec<RawQuote>, rng: &mut R) -> Option<RawQuote> {
    if valid.is_empty() {
        return None;
    }

    let short: Vec<usize> = valid
        .iter()
        .enumerate()
        .filter(|(_, record)| record.is_short())
        .map(|(idx, _)| idx)
        .collect();

    let idx = if short.is_empty() {
        rng.gen_range(0..valid.len())
    } else {
        short[rng.gen_range(0..short.len())]
    };

    Some(valid.swap_remove(idx))
}
