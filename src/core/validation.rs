//! Input validation helpers.

use once_cell::sync::Lazy;
use regex::Regex;

/// Standard email address grammar: `local@label(.label)+`, anchored at both ends.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$",
    )
    .expect("Invalid email regex pattern")
});

/// Whether `candidate` is a well-formed email address.
pub fn is_email_valid(candidate: &str) -> bool {
    EMAIL_REGEX.is_match(candidate)
}
