use crate::host::Feedback;
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Outcome of the most recent validation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum Status {
    /// Set at construction, before any edit or validation
    #[default]
    #[display(fmt = "default")]
    Default,
    /// Edited since the last validation
    #[display(fmt = "pending validation")]
    PendingValidation,
    #[display(fmt = "valid")]
    Valid,
    /// Blank field with empty dates allowed
    #[display(fmt = "valid (empty)")]
    ValidEmpty,
    #[display(fmt = "incomplete: missing day")]
    IncompleteMissingDay,
    #[display(fmt = "incomplete: missing month")]
    IncompleteMissingMonth,
    #[display(fmt = "incomplete: missing year")]
    IncompleteMissingYear,
    /// Components are in range but do not form a calendar date
    #[display(fmt = "invalid date")]
    InvalidDate,
    /// Blank field with empty dates not allowed
    #[display(fmt = "invalid: empty")]
    InvalidEmpty,
    /// Day above 31
    #[display(fmt = "invalid day")]
    InvalidDay,
    /// Month above 12
    #[display(fmt = "invalid month")]
    InvalidMonth,
    /// Reserved; no validation path produces it
    #[display(fmt = "invalid year")]
    InvalidYear,
    #[display(fmt = "date is in the future")]
    FutureDate,
    #[display(fmt = "under minimum age")]
    UnderAge,
    #[display(fmt = "over maximum age")]
    TooOld,
}

impl Status {
    /// Whether a full calendar date was decoded to reach this status
    pub const fn is_decoded(self) -> bool {
        matches!(
            self,
            Self::Valid | Self::FutureDate | Self::UnderAge | Self::TooOld
        )
    }

    /// Whether the field holds an acceptable value
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid | Self::ValidEmpty)
    }

    /// Feedback painted on entering this status from the leave-time validator
    /// or the policy checker.
    ///
    /// Incomplete day and month leave the current color alone, hence `None`.
    /// The leave-time validator also keeps the color for a year-first field
    /// whose year is incomplete.
    pub const fn feedback(self) -> Option<Feedback> {
        match self {
            Self::Valid => Some(Feedback::Ok),
            Self::Default | Self::PendingValidation | Self::ValidEmpty => Some(Feedback::None),
            Self::IncompleteMissingDay | Self::IncompleteMissingMonth => None,
            Self::IncompleteMissingYear
            | Self::InvalidDate
            | Self::InvalidEmpty
            | Self::InvalidDay
            | Self::InvalidMonth
            | Self::InvalidYear
            | Self::FutureDate
            | Self::UnderAge
            | Self::TooOld => Some(Feedback::Error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status() {
        assert_eq!(Status::default(), Status::Default);
    }

    #[test]
    fn test_is_decoded() {
        for status in [Status::Valid, Status::FutureDate, Status::UnderAge, Status::TooOld] {
            assert!(status.is_decoded(), "{status:?}");
        }
        for status in [
            Status::Default,
            Status::PendingValidation,
            Status::ValidEmpty,
            Status::InvalidDate,
            Status::IncompleteMissingYear,
        ] {
            assert!(!status.is_decoded(), "{status:?}");
        }
    }

    #[test]
    fn test_feedback_is_binary() {
        assert_eq!(Status::Valid.feedback(), Some(Feedback::Ok));
        assert_eq!(Status::UnderAge.feedback(), Some(Feedback::Error));
        assert_eq!(Status::ValidEmpty.feedback(), Some(Feedback::None));
        assert_eq!(Status::IncompleteMissingDay.feedback(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Status::TooOld.to_string(), "over maximum age");
        assert_eq!(Status::IncompleteMissingMonth.to_string(), "incomplete: missing month");
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Status::UnderAge).unwrap();
        assert_eq!(json, "\"UnderAge\"");
        assert_eq!(serde_json::from_str::<Status>(&json).unwrap(), Status::UnderAge);
    }
}
