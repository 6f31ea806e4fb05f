use chrono::NaiveDateTime;

/// Source of the current time
///
/// Competition dates are local wall-clock timestamps, so this returns one too.
#[mockall::automock]
pub trait ClockPort {
    fn now(&self) -> NaiveDateTime;
}
