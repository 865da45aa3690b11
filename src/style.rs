use crate::consts::{
    BLANK, MASK_COMPLETED_LEN, MASK_DAY_MONTH_FIRST, MASK_SEPARATOR, MASK_TWO_DIGIT_YEAR_LEN,
    MASK_YEAR_FIRST, SEPARATOR_KEYS,
};
use crate::mask::Mask;
use crate::prelude::*;
use crate::types::{parse_component, CalendarDate};
use crate::ParseError;
use serde::{Deserialize, Serialize};

/// Day/month/year ordering of the masked text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum DateStyle {
    /// `dd/mm/yyyy`
    #[default]
    #[display(fmt = "dd/mm/yyyy")]
    European,
    /// `mm/dd/yyyy`, typed into the same mask shape as European
    #[display(fmt = "mm/dd/yyyy")]
    Usa,
    /// `yyyy/mm/dd`
    #[display(fmt = "yyyy/mm/dd")]
    Asian,
}

/// Character offsets of each field inside the masked text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOffsets {
    pub day:   usize,
    pub month: usize,
    pub year:  usize,
}

impl DateStyle {
    /// Resolves the style from a locale short-date pattern such as `"MM/dd/yyyy"`.
    ///
    /// Unknown patterns fall back to European.
    pub fn from_pattern(pattern: &str) -> Self {
        match pattern.trim().to_lowercase().as_str() {
            "mm/dd/yyyy" => Self::Usa,
            "yyyy/mm/dd" => Self::Asian,
            _ => Self::European,
        }
    }

    pub const fn mask_pattern(self) -> &'static str {
        match self {
            Self::European | Self::Usa => MASK_DAY_MONTH_FIRST,
            Self::Asian => MASK_YEAR_FIRST,
        }
    }

    pub const fn mask(self) -> Mask {
        Mask::new(self.mask_pattern())
    }

    pub const fn offsets(self) -> FieldOffsets {
        match self {
            Self::European => FieldOffsets {
                day:   0,
                month: 3,
                year:  6,
            },
            Self::Usa => FieldOffsets {
                day:   3,
                month: 0,
                year:  6,
            },
            Self::Asian => FieldOffsets {
                day:   8,
                month: 5,
                year:  0,
            },
        }
    }

    /// Starts of the 2-digit fields that are followed by a separator
    pub const fn paddable_fields(self) -> &'static [usize] {
        match self {
            Self::European | Self::Usa => &[0, 3],
            Self::Asian => &[5],
        }
    }

    pub const fn completed_len(self) -> usize {
        MASK_COMPLETED_LEN
    }

    /// Length of a completed text with a 2-digit year, if the ordering allows one
    pub const fn two_digit_year_len(self) -> Option<usize> {
        match self {
            Self::European | Self::Usa => Some(MASK_TWO_DIGIT_YEAR_LEN),
            Self::Asian => None,
        }
    }

    /// What the text field holds with every slot blank
    pub fn empty_text(self) -> String {
        self.mask().render(&[])
    }

    /// Renders a date in this ordering with zero-padded fields
    pub fn format(self, date: &CalendarDate) -> String {
        let (d, m, y) = (date.day(), date.month(), date.year());
        let s = MASK_SEPARATOR;
        match self {
            Self::European => format!("{d:02}{s}{m:02}{s}{y:04}"),
            Self::Usa => format!("{m:02}{s}{d:02}{s}{y:04}"),
            Self::Asian => format!("{y:04}{s}{m:02}{s}{d:02}"),
        }
    }

    /// Full calendar parse of a masked text in this ordering.
    ///
    /// Fields are split on any separator key and may carry blanks.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidFormat` for a wrong shape or non-numeric field,
    /// or the component error from [`CalendarDate::new`].
    pub fn parse(self, text: &str) -> Result<CalendarDate, ParseError> {
        if text.trim_matches(BLANK).is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let parts: Vec<&str> = text.split(SEPARATOR_KEYS).collect();
        let [first, second, third] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(text.to_owned()));
        };
        let (day, month, year) = match self {
            Self::European => (first, second, third),
            Self::Usa => (second, first, third),
            Self::Asian => (third, second, first),
        };
        CalendarDate::new(
            parse_component(year)?,
            parse_component(month)?,
            parse_component(day)?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u16, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_from_pattern() {
        assert_eq!(DateStyle::from_pattern("mm/dd/yyyy"), DateStyle::Usa);
        assert_eq!(DateStyle::from_pattern("MM/dd/yyyy"), DateStyle::Usa);
        assert_eq!(DateStyle::from_pattern("yyyy/MM/dd"), DateStyle::Asian);
        assert_eq!(DateStyle::from_pattern("dd/MM/yyyy"), DateStyle::European);
        assert_eq!(DateStyle::from_pattern("d.M.yy"), DateStyle::European);
        assert_eq!(DateStyle::from_pattern(""), DateStyle::European);
    }

    #[test]
    fn test_masks_and_empty_text() {
        assert_eq!(DateStyle::European.mask_pattern(), "00/00/0000");
        assert_eq!(DateStyle::Usa.mask_pattern(), "00/00/0000");
        assert_eq!(DateStyle::Asian.mask_pattern(), "0000/00/00");
        assert_eq!(DateStyle::European.empty_text(), "  /  /");
        assert_eq!(DateStyle::Usa.empty_text(), "  /  /");
        assert_eq!(DateStyle::Asian.empty_text(), "    /  /");
    }

    #[test]
    fn test_usa_offsets_swap_day_and_month() {
        let eu = DateStyle::European.offsets();
        let us = DateStyle::Usa.offsets();
        assert_eq!((eu.day, eu.month), (us.month, us.day));
        assert_eq!(eu.year, us.year);
    }

    #[test]
    fn test_format() {
        let d = date(1990, 6, 5);
        assert_eq!(DateStyle::European.format(&d), "05/06/1990");
        assert_eq!(DateStyle::Usa.format(&d), "06/05/1990");
        assert_eq!(DateStyle::Asian.format(&d), "1990/06/05");
    }

    #[test]
    fn test_parse_per_style() {
        assert_eq!(DateStyle::European.parse("05/06/1990"), Ok(date(1990, 6, 5)));
        assert_eq!(DateStyle::Usa.parse("06/05/1990"), Ok(date(1990, 6, 5)));
        assert_eq!(DateStyle::Asian.parse("1990/06/05"), Ok(date(1990, 6, 5)));
        assert_eq!(DateStyle::Asian.parse("1990/06/5"), Ok(date(1990, 6, 5)));
        assert_eq!(DateStyle::European.parse("5 /06/1990"), Ok(date(1990, 6, 5)));
        assert_eq!(DateStyle::European.parse("05.06.1990"), Ok(date(1990, 6, 5)));
    }

    #[test]
    fn test_parse_failures() {
        assert!(matches!(
            DateStyle::European.parse("31/02/1990"),
            Err(ParseError::InvalidDay { .. })
        ));
        assert!(matches!(
            DateStyle::European.parse("01/01/0000"),
            Err(ParseError::InvalidYear(0))
        ));
        assert!(matches!(
            DateStyle::European.parse("01/01/1990/12"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(DateStyle::European.parse("  /  /"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(DateStyle::European.parse(""), Err(ParseError::EmptyInput)));
    }

    #[test]
    fn test_style_serde() {
        let json = serde_json::to_string(&DateStyle::Asian).unwrap();
        assert_eq!(json, "\"Asian\"");
        assert_eq!(serde_json::from_str::<DateStyle>(&json).unwrap(), DateStyle::Asian);
    }
}
