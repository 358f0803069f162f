pub const PRODUCTION_API_URL: &str = "https://yurippe.vercel.app";
pub const LOCAL_API_URL: &str = "http://localhost:3000";

/// Longest quote text, in characters, that random selection prefers.
/// Longer quotes are only returned when the dataset has nothing shorter.
pub const MAX_PREFERRED_QUOTE_LEN: usize = 220;
