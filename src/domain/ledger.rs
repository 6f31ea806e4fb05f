use std::collections::HashMap;

/// Cumulative number of places each club booked for each competition
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingLedger {
    entries: HashMap<(String, String), u32>,
}

impl BookingLedger {
    /// Places already booked by `club` for `competition`
    ///
    /// Pairs without any booking read as zero.
    pub fn get(&self, club: &str, competition: &str) -> u32 {
        self.entries
            .get(&(club.to_string(), competition.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Record `places` more places for the pair
    pub fn add(&mut self, club: &str, competition: &str, places: u32) {
        *self
            .entries
            .entry((club.to_string(), competition.to_string()))
            .or_insert(0) += places;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use speculoos::prelude::*;

    #[test]
    fn test_absent_pair_is_zero() {
        let ledger = BookingLedger::default();

        assert_that!(ledger.get("Simply Lift", "Fall Classic")).is_equal_to(0);
    }

    #[test]
    fn test_add_accumulates_per_pair() {
        let mut ledger = BookingLedger::default();
        ledger.add("Simply Lift", "Fall Classic", 2);
        ledger.add("Simply Lift", "Fall Classic", 3);
        ledger.add("She Lifts", "Fall Classic", 1);

        assert_that!(ledger.get("Simply Lift", "Fall Classic")).is_equal_to(5);
        assert_that!(ledger.get("She Lifts", "Fall Classic")).is_equal_to(1);
        assert_that!(ledger.get("Simply Lift", "Spring Festival")).is_equal_to(0);
    }
}
