use crate::model::session::Session;
use crate::model::store::{CapacityExceeded, Store};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DonationError {
    #[error("log in before registering a donation")]
    NotAuthenticated,
    #[error(transparent)]
    Capacity(#[from] CapacityExceeded),
}

/// Record a donation for the logged-in user. The caller persists the store
/// on success.
pub fn register_donation(
    store: &mut Store,
    session: &Session,
    paper: u32,
    plastic: u32,
    aluminum: u32,
) -> Result<(), DonationError> {
    let owner = session
        .active_control_number()
        .ok_or(DonationError::NotAuthenticated)?;
    store.add_donation(owner, paper, plastic, aluminum)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::donation::Donation;
    use crate::model::store::CapacityLimits;
    use crate::ops::session_ops::login;

    #[test]
    fn unauthenticated_never_appends() {
        let mut store = Store::default();
        let session = Session::new();
        assert_eq!(
            register_donation(&mut store, &session, 1, 2, 3),
            Err(DonationError::NotAuthenticated)
        );
        assert_eq!(store.donation_count(), 0);
    }

    #[test]
    fn donation_is_owned_by_active_user() {
        let mut store = Store::default();
        let mut session = Session::new();
        login(&mut store, &mut session, "007", "Max").unwrap();

        register_donation(&mut store, &session, 3, 1, 0).unwrap();
        assert_eq!(
            store.list_donations().collect::<Vec<_>>(),
            vec![&Donation::new("007", 3, 1, 0)]
        );
    }

    #[test]
    fn full_store_reports_capacity() {
        let mut store = Store::new(CapacityLimits {
            max_users: 5,
            max_donations: 1,
        });
        let mut session = Session::new();
        login(&mut store, &mut session, "1", "Ana").unwrap();
        register_donation(&mut store, &session, 1, 1, 1).unwrap();

        let err = register_donation(&mut store, &session, 2, 2, 2).unwrap_err();
        assert!(matches!(err, DonationError::Capacity(_)));
        assert_eq!(store.donation_count(), 1);
    }
}
