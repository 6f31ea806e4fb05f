use chrono::{Local, NaiveDateTime};

use crate::ports::clock::ClockPort;

/// Local wall-clock time of the host
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use speculoos::prelude::*;

    #[test]
    fn test_now_follows_local_time() {
        let before = Local::now().naive_local();
        let now = SystemClock.now();
        let after = Local::now().naive_local();

        assert_that!(now).is_greater_than_or_equal_to(before);
        assert_that!(now).is_less_than_or_equal_to(after);
    }
}
