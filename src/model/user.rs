use serde::{Deserialize, Serialize};

/// Longest control number kept, in characters
pub const MAX_CONTROL_NUMBER_LEN: usize = 19;
/// Longest name kept, in characters
pub const MAX_NAME_LEN: usize = 49;

/// A registered person, keyed by control number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub control_number: String,
    pub name: String,
}

impl User {
    /// Build a user, clipping both fields to their maximum lengths.
    pub fn new(control_number: &str, name: &str) -> Self {
        User {
            control_number: clip_chars(control_number, MAX_CONTROL_NUMBER_LEN),
            name: clip_chars(name, MAX_NAME_LEN),
        }
    }
}

/// Keep at most `max` characters of `s`
pub fn clip_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => s[..byte_idx].to_string(),
        None => s.to_string(),
    }
}
