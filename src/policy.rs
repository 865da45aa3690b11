use crate::consts::{AGE_BOUNDARY_THRESHOLD, MAX_AGE_DEFAULT, MINIMUM_AGE_DEFAULT};
use crate::status::Status;
use crate::types::CalendarDate;
use serde::{Deserialize, Serialize};

/// Acceptance rules applied to a date that parsed successfully.
///
/// All comparisons are calendar-day comparisons against the `today` handed
/// in by the caller, so nothing flips at a time-of-day boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    /// Years that must have passed since the date; `<= 1` disables the check
    pub minimum_age:       i32,
    /// Oldest accepted age in years; `<= 1` disables the check
    pub max_age:           i32,
    pub allow_future_date: bool,
    /// Whether a blank field validates as `ValidEmpty` instead of `InvalidEmpty`
    pub allow_empty_date:  bool,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            minimum_age:       MINIMUM_AGE_DEFAULT,
            max_age:           MAX_AGE_DEFAULT,
            allow_future_date: false,
            allow_empty_date:  false,
        }
    }
}

impl Policy {
    /// Latest date of birth that still meets `minimum_age`.
    ///
    /// `None` means no upper limit. An age reaching back before year 1
    /// saturates to [`CalendarDate::MIN`].
    pub fn minimum_age_date(&self, today: CalendarDate) -> Option<CalendarDate> {
        (self.minimum_age > AGE_BOUNDARY_THRESHOLD)
            .then(|| today.years_before(self.minimum_age).unwrap_or(CalendarDate::MIN))
    }

    /// Earliest date still within `max_age`.
    ///
    /// `None` means no lower limit, including an age reaching back before
    /// year 1.
    pub fn max_age_date(&self, today: CalendarDate) -> Option<CalendarDate> {
        if self.max_age > AGE_BOUNDARY_THRESHOLD {
            today.years_before(self.max_age)
        } else {
            None
        }
    }

    /// Classifies a decoded date. The first failing rule wins: future date,
    /// then minimum age, then maximum age.
    pub fn check(&self, date: CalendarDate, today: CalendarDate) -> Status {
        if !self.allow_future_date && date > today {
            return Status::FutureDate;
        }
        if self.minimum_age > AGE_BOUNDARY_THRESHOLD {
            // No boundary at all means no date is old enough
            match today.years_before(self.minimum_age) {
                Some(boundary) if date <= boundary => {}
                _ => return Status::UnderAge,
            }
        }
        if self
            .max_age_date(today)
            .is_some_and(|boundary| date < boundary)
        {
            return Status::TooOld;
        }
        Status::Valid
    }
}
