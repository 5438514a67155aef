use std::fmt;

use serde::{Deserialize, Serialize};

use super::donation::Donation;
use super::user::User;

/// Which collection a capacity error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    User,
    Donation,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::User => write!(f, "user"),
            RecordKind::Donation => write!(f, "donation"),
        }
    }
}

/// An append was rejected because the collection is full
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{kind} capacity of {limit} reached")]
pub struct CapacityExceeded {
    pub kind: RecordKind,
    pub limit: usize,
}

/// Maximum number of records each collection accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityLimits {
    #[serde(default = "default_limit")]
    pub max_users: usize,
    #[serde(default = "default_limit")]
    pub max_donations: usize,
}

impl Default for CapacityLimits {
    fn default() -> Self {
        CapacityLimits {
            max_users: DEFAULT_LIMIT,
            max_donations: DEFAULT_LIMIT,
        }
    }
}

const DEFAULT_LIMIT: usize = 100;

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Append-only sequence that refuses to grow past `limit`.
#[derive(Debug, Clone)]
struct Ledger<T> {
    items: Vec<T>,
    limit: usize,
}

impl<T> Ledger<T> {
    fn new(limit: usize) -> Self {
        Ledger {
            items: Vec::new(),
            limit,
        }
    }

    fn is_full(&self) -> bool {
        self.items.len() >= self.limit
    }

    /// Push unless full; hands the item back when rejected.
    fn try_push(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }
}

/// In-memory users and donations for the current run.
///
/// Records are only ever appended; insertion order is preserved and is the
/// order they are listed and saved in.
#[derive(Debug, Clone)]
pub struct Store {
    users: Ledger<User>,
    donations: Ledger<Donation>,
}

impl Default for Store {
    fn default() -> Self {
        Store::new(CapacityLimits::default())
    }
}

impl Store {
    pub fn new(limits: CapacityLimits) -> Self {
        Store {
            users: Ledger::new(limits.max_users),
            donations: Ledger::new(limits.max_donations),
        }
    }

    pub fn find_user(&self, control_number: &str) -> Option<&User> {
        self.users
            .items
            .iter()
            .find(|u| u.control_number == control_number)
    }

    /// Register a user. An existing control number is left untouched and
    /// counts as success.
    pub fn add_user(&mut self, control_number: &str, name: &str) -> Result<(), CapacityExceeded> {
        let user = User::new(control_number, name);
        if self.find_user(&user.control_number).is_some() {
            return Ok(());
        }
        let limit = self.users.limit;
        self.users.try_push(user).map_err(|_| CapacityExceeded {
            kind: RecordKind::User,
            limit,
        })
    }

    pub fn add_donation(
        &mut self,
        owner_control_number: &str,
        paper: u32,
        plastic: u32,
        aluminum: u32,
    ) -> Result<(), CapacityExceeded> {
        let donation = Donation::new(owner_control_number, paper, plastic, aluminum);
        let limit = self.donations.limit;
        self.donations
            .try_push(donation)
            .map_err(|_| CapacityExceeded {
                kind: RecordKind::Donation,
                limit,
            })
    }

    pub fn list_users(&self) -> impl Iterator<Item = &User> {
        self.users.items.iter()
    }

    pub fn list_donations(&self) -> impl Iterator<Item = &Donation> {
        self.donations.items.iter()
    }

    pub fn user_count(&self) -> usize {
        self.users.items.len()
    }

    pub fn donation_count(&self) -> usize {
        self.donations.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.items.is_empty() && self.donations.items.is_empty()
    }
}
