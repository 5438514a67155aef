use crate::model::donation::Donation;
use crate::model::store::{CapacityLimits, Store};
use crate::model::user::User;

use super::lines::TextLines;

/// One line of the data file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// `U|<control number>|<name>`
    User(User),
    /// `D|<owner>|<paper>|<plastic>|<aluminum>`
    Donation(Donation),
}

/// Parse a single data line. Returns `None` for lines whose first character
/// is not a known record tag.
///
/// Fields are not escaped: a `|` inside a control number shifts the
/// remaining fields. A name keeps everything after the second delimiter.
pub fn parse_record(line: &str) -> Option<Record> {
    let mut chars = line.chars();
    let tag = chars.next()?;
    let rest = chars.as_str();
    let rest = rest.strip_prefix('|').unwrap_or(rest);

    match tag {
        'U' => {
            let (control_number, name) = rest.split_once('|').unwrap_or((rest, ""));
            Some(Record::User(User::new(control_number, name)))
        }
        'D' => {
            let mut fields = rest.split('|');
            let owner = fields.next().unwrap_or("");
            let paper = parse_weight(fields.next().unwrap_or(""));
            let plastic = parse_weight(fields.next().unwrap_or(""));
            let aluminum = parse_weight(fields.next().unwrap_or(""));
            Some(Record::Donation(Donation::new(
                owner, paper, plastic, aluminum,
            )))
        }
        _ => None,
    }
}

/// Parse a non-negative weight the way `atoi` reads a number: leading
/// whitespace is skipped and the longest run of digits is used. Anything
/// else, including a sign or an out-of-range value, reads as 0.
pub fn parse_weight(field: &str) -> u32 {
    let trimmed = field.trim_start();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..digits_end].parse().unwrap_or(0)
}

/// Build a store from the contents of a data file.
///
/// Records past a collection's capacity are ignored. Lines that are not
/// records are returned as the second element so the caller can report them;
/// blank lines are skipped without being reported.
pub fn parse_store(source: &str, limits: CapacityLimits) -> (Store, Vec<String>) {
    let mut store = Store::new(limits);
    let mut dropped = Vec::new();

    for line in TextLines::new(source) {
        if line.trim().is_empty() {
            continue;
        }
        match parse_record(line) {
            Some(Record::User(user)) => {
                let _ = store.add_user(&user.control_number, &user.name);
            }
            Some(Record::Donation(d)) => {
                let _ = store.add_donation(&d.owner_control_number, d.paper, d.plastic, d.aluminum);
            }
            None => dropped.push(line.to_string()),
        }
    }

    (store, dropped)
}
