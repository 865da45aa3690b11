//! Seams between the validation state machine and the hosting toolkit.
//!
//! The toolkit owns the actual text field and the event loop. It hands the
//! component a [`TextInput`] and forwards key and focus events to it; the
//! component writes text, cursor and feedback back through the same trait.

use crate::consts::{ERROR_COLOR, OK_COLOR};
use crate::prelude::*;
use crate::types::CalendarDate;
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "#{r:02x}{g:02x}{b:02x}")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Binary validation feedback painted behind the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Feedback {
    /// No feedback, the toolkit's own background shows
    #[default]
    None,
    Ok,
    Error,
}

impl Feedback {
    /// The color the host should paint, `None` to restore its default background
    pub const fn color(self) -> Option<Rgb> {
        match self {
            Self::None => None,
            Self::Ok => Some(OK_COLOR),
            Self::Error => Some(ERROR_COLOR),
        }
    }
}

/// Minimal text-field capability the component drives.
///
/// Cursor positions are character indices. Implementations that enforce a
/// mask may normalize text handed to [`TextInput::set_text`].
pub trait TextInput {
    fn text(&self) -> String;

    fn set_text(&mut self, text: &str);

    fn cursor(&self) -> usize;

    fn set_cursor(&mut self, cursor: usize);

    fn set_feedback(&mut self, feedback: Feedback);
}

impl<T: TextInput + ?Sized> TextInput for &mut T {
    fn text(&self) -> String {
        (**self).text()
    }

    fn set_text(&mut self, text: &str) {
        (**self).set_text(text);
    }

    fn cursor(&self) -> usize {
        (**self).cursor()
    }

    fn set_cursor(&mut self, cursor: usize) {
        (**self).set_cursor(cursor);
    }

    fn set_feedback(&mut self, feedback: Feedback) {
        (**self).set_feedback(feedback);
    }
}

/// Non-character keys the component reacts to on key-down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Backspace,
    Delete,
    Other,
}

/// Toolkit events forwarded to [`crate::DateMaskedInput::handle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// A character was typed; fires before the mask consumes it
    KeyPress(char),
    KeyDown(KeyCode),
    FocusLost,
}

/// Source of "today" for the policy checks and the 2-digit-year heuristic
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

/// Local wall-clock date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        let now = Local::now().date_naive();
        let converted = u16::try_from(now.year())
            .ok()
            .and_then(|year| {
                let month = u8::try_from(now.month()).ok()?;
                let day = u8::try_from(now.day()).ok()?;
                CalendarDate::new(year, month, day).ok()
            });
        converted.unwrap_or_else(|| {
            tracing::warn!(%now, "local date outside the supported range");
            CalendarDate::MIN
        })
    }
}

/// A clock frozen on one date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> CalendarDate {
        (**self).today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_colors() {
        assert_eq!(Feedback::None.color(), None);
        assert_eq!(Feedback::Ok.color(), Some(Rgb::new(160, 213, 73)));
        assert_eq!(Feedback::Error.color(), Some(Rgb::new(255, 128, 128)));
    }

    #[test]
    fn test_rgb_display() {
        assert_eq!(OK_COLOR.to_string(), "#a0d549");
        assert_eq!(ERROR_COLOR.to_string(), "#ff8080");
    }

    #[test]
    fn test_fixed_clock() {
        let day = CalendarDate::new(2026, 10, 16).unwrap();
        assert_eq!(FixedClock(day).today(), day);
        assert_eq!((&FixedClock(day)).today(), day);
    }

    #[test]
    fn test_system_clock_is_in_range() {
        assert!(SystemClock.today() > CalendarDate::MIN);
    }
}
