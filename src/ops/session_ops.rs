use crate::model::session::Session;
use crate::model::store::{CapacityExceeded, Store};
use crate::model::user::{MAX_CONTROL_NUMBER_LEN, MAX_NAME_LEN, clip_chars};

/// Result of a login attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    /// A user record was created by this login
    pub is_new_user: bool,
    /// Name to greet: the stored name for a known user, the typed one otherwise
    pub display_name: String,
    /// Set when the user list was full and no record could be created.
    /// The session is active regardless.
    pub rejected: Option<CapacityExceeded>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("control number is empty")]
    EmptyControlNumber,
}

/// Log in with a control number, registering it on first use.
///
/// There is no password: any non-empty control number authenticates. A
/// known control number keeps its stored name. The caller persists the
/// store when `is_new_user` is set.
pub fn login(
    store: &mut Store,
    session: &mut Session,
    control_number: &str,
    name: &str,
) -> Result<LoginOutcome, LoginError> {
    let control_number = clip_chars(control_number.trim(), MAX_CONTROL_NUMBER_LEN);
    let name = clip_chars(name.trim(), MAX_NAME_LEN);
    if control_number.is_empty() {
        return Err(LoginError::EmptyControlNumber);
    }

    let outcome = match store.find_user(&control_number) {
        Some(existing) => LoginOutcome {
            is_new_user: false,
            display_name: existing.name.clone(),
            rejected: None,
        },
        None => match store.add_user(&control_number, &name) {
            Ok(()) => LoginOutcome {
                is_new_user: true,
                display_name: name,
                rejected: None,
            },
            Err(e) => LoginOutcome {
                is_new_user: false,
                display_name: name,
                rejected: Some(e),
            },
        },
    };

    session.activate(&control_number);
    Ok(outcome)
}
