use serde::{Deserialize, Serialize};

use super::user::{MAX_CONTROL_NUMBER_LEN, clip_chars};

/// A recorded donation: kilograms of each material, attributed to a control number.
///
/// The owner is not required to match a registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donation {
    pub owner_control_number: String,
    pub paper: u32,
    pub plastic: u32,
    pub aluminum: u32,
}

impl Donation {
    pub fn new(owner_control_number: &str, paper: u32, plastic: u32, aluminum: u32) -> Self {
        Donation {
            owner_control_number: clip_chars(owner_control_number, MAX_CONTROL_NUMBER_LEN),
            paper,
            plastic,
            aluminum,
        }
    }

    /// Combined weight of all materials
    pub fn total(&self) -> u64 {
        u64::from(self.paper) + u64::from(self.plastic) + u64::from(self.aluminum)
    }
}
