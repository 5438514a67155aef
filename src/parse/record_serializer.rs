use crate::model::donation::Donation;
use crate::model::store::Store;
use crate::model::user::User;

pub fn serialize_user(user: &User) -> String {
    format!("U|{}|{}", user.control_number, user.name)
}

pub fn serialize_donation(donation: &Donation) -> String {
    format!(
        "D|{}|{}|{}|{}",
        donation.owner_control_number, donation.paper, donation.plastic, donation.aluminum
    )
}

/// Serialize the whole store: every user, then every donation, one
/// newline-terminated line each.
pub fn serialize_store(store: &Store) -> String {
    let mut out = String::new();
    for user in store.list_users() {
        out.push_str(&serialize_user(user));
        out.push('\n');
    }
    for donation in store.list_donations() {
        out.push_str(&serialize_donation(donation));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::store::CapacityLimits;
    use crate::parse::record_parser::parse_store;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_store_serializes_to_nothing() {
        assert_eq!(serialize_store(&Store::default()), "");
    }

    #[test]
    fn users_come_before_donations() {
        let mut store = Store::default();
        store.add_donation("1", 3, 1, 0).unwrap();
        store.add_user("1", "Ana").unwrap();
        store.add_donation("2", 0, 0, 9).unwrap();
        assert_eq!(
            serialize_store(&store),
            "U|1|Ana\nD|1|3|1|0\nD|2|0|0|9\n"
        );
    }

    #[test]
    fn round_trip_reproduces_sequences() {
        let mut store = Store::default();
        store.add_user("a1", "Ana Pérez").unwrap();
        store.add_user("b2", "Beto").unwrap();
        store.add_donation("a1", 1, 2, 3).unwrap();
        store.add_donation("zz", 0, 0, 0).unwrap();
        store.add_donation("a1", 1, 2, 3).unwrap();

        let (reloaded, dropped) = parse_store(&serialize_store(&store), CapacityLimits::default());
        assert!(dropped.is_empty());
        assert_eq!(
            reloaded.list_users().collect::<Vec<_>>(),
            store.list_users().collect::<Vec<_>>()
        );
        assert_eq!(
            reloaded.list_donations().collect::<Vec<_>>(),
            store.list_donations().collect::<Vec<_>>()
        );
    }

    #[test]
    fn delimiter_in_control_number_is_not_preserved() {
        let mut store = Store::default();
        store.add_user("1|2", "Ana").unwrap();
        let (reloaded, _) = parse_store(&serialize_store(&store), CapacityLimits::default());
        let user = reloaded.list_users().next().unwrap();
        assert_eq!(user.control_number, "1");
        assert_eq!(user.name, "2|Ana");
    }
}
