use crate::constants::tokens::NO_HOUSEHOLD;

/// Assigns household ids to rows in file order.
///
/// A new id starts whenever a non-empty last name differs from the last
/// non-empty one seen. Rows without a last name share the reserved id `1`
/// and do not break a run of the same surname.
#[derive(Debug)]
pub struct HouseholdAssigner {
    current: u32,
    previous_last_name: Option<String>,
}

impl Default for HouseholdAssigner {
    fn default() -> Self {
        Self {
            current: 1,
            previous_last_name: None,
        }
    }
}

impl HouseholdAssigner {
    /// Create an assigner; the first surname gets id `2`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Household id for the next row.
    pub fn assign(&mut self, last_name: &str) -> String {
        if last_name.is_empty() {
            return NO_HOUSEHOLD.to_string();
        }

        if self.previous_last_name.as_deref() != Some(last_name) {
            self.current += 1;
            self.previous_last_name = Some(last_name.to_string());
        }
        self.current.to_string()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn consecutive_surnames_share_a_household() {
        let mut households = HouseholdAssigner::new();
        let ids: Vec<_> = ["Smith", "Smith", "Jones", "Smith"]
            .into_iter()
            .map(|name| households.assign(name))
            .collect();
        assert_eq!(ids, ["2", "2", "3", "4"]);
    }

    #[test]
    fn blank_surname_gets_reserved_id() {
        let mut households = HouseholdAssigner::new();
        assert_eq!(households.assign(""), "1");
        assert_eq!(households.assign("Smith"), "2");
        assert_eq!(households.assign(""), "1");
        assert_eq!(households.assign("Smith"), "2");
    }
}
