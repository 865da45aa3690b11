mod consts;
mod host;
mod mask;
mod policy;
mod prelude;
mod status;
mod style;
mod types;

pub use consts::*;
pub use host::{Clock, Feedback, FixedClock, InputEvent, KeyCode, Rgb, SystemClock, TextInput};
pub use mask::{Mask, MaskedText};
pub use policy::Policy;
pub use status::Status;
pub use style::{DateStyle, FieldOffsets};
pub use types::{days_in_month, is_leap_year, CalendarDate, Day, Month, Year};

use std::fmt;
use tracing::{debug, trace};
use types::parse_component;

/// Errors from turning text into a [`CalendarDate`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
    #[error("Invalid year: {0} (must be 1-{max})", max = MAX_YEAR)]
    InvalidYear(u16),
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[error("Empty date string")]
    EmptyInput,
}

type Listener = Box<dyn FnMut(Status)>;

/// Keyboard-driven date entry on top of a host masked text field.
///
/// The host forwards key presses, key-downs and focus loss. The component
/// keeps the mask aligned while typing, classifies the text into a
/// [`Status`] when focus leaves, and paints [`Feedback`] through the input.
pub struct DateMaskedInput<I, C = SystemClock> {
    input:     I,
    clock:     C,
    style:     DateStyle,
    status:    Status,
    policy:    Policy,
    decoded:   Option<CalendarDate>,
    listeners: Vec<Listener>,
}

impl<I: TextInput> DateMaskedInput<I, SystemClock> {
    /// Wraps `input`, resolving the style from a short-date pattern such as `"dd/MM/yyyy"`
    pub fn new(input: I, pattern: &str) -> Self {
        Self::with_clock(input, pattern, SystemClock)
    }
}

impl<I: TextInput, C: Clock> DateMaskedInput<I, C> {
    /// Like [`DateMaskedInput::new`], reading "today" from `clock`
    pub fn with_clock(input: I, pattern: &str, clock: C) -> Self {
        let style = DateStyle::from_pattern(pattern);
        debug!(%pattern, %style, "resolved date style");
        Self {
            input,
            clock,
            style,
            status: Status::Default,
            policy: Policy::default(),
            decoded: None,
            listeners: Vec::new(),
        }
    }

    /// Replaces the acceptance rules
    #[must_use]
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Current validation status
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Field ordering resolved at construction
    pub const fn style(&self) -> DateStyle {
        self.style
    }

    pub const fn policy(&self) -> &Policy {
        &self.policy
    }

    /// The wrapped host input
    pub const fn input(&self) -> &I {
        &self.input
    }

    pub const fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Unwraps the host input
    pub fn into_inner(self) -> I {
        self.input
    }

    /// The decoded date, or `None` while an edit awaits validation or when
    /// the last validation did not produce a calendar date
    pub fn value(&self) -> Option<CalendarDate> {
        if self.status == Status::PendingValidation {
            None
        } else {
            self.decoded
        }
    }

    /// Writes `value` into the field and runs the policy check on it.
    ///
    /// `None` clears the field.
    pub fn set_value(&mut self, value: Option<CalendarDate>) {
        let Some(date) = value else {
            self.clear();
            return;
        };
        self.input.set_text(&self.style.format(&date));
        self.decoded = Some(date);
        let status = self.policy.check(date, self.clock.today());
        self.settle(status);
    }

    /// Years that must have passed since the date; `<= 1` disables the rule
    pub const fn minimum_age(&self) -> i32 {
        self.policy.minimum_age
    }

    /// Takes effect on the next validation or [`DateMaskedInput::set_value`]
    pub const fn set_minimum_age(&mut self, years: i32) {
        self.policy.minimum_age = years;
    }

    /// Oldest accepted age in years; `<= 1` disables the rule
    pub const fn max_age(&self) -> i32 {
        self.policy.max_age
    }

    /// Takes effect on the next validation or [`DateMaskedInput::set_value`]
    pub const fn set_max_age(&mut self, years: i32) {
        self.policy.max_age = years;
    }

    /// Whether dates after today pass the policy
    pub const fn allow_future_date(&self) -> bool {
        self.policy.allow_future_date
    }

    pub const fn set_allow_future_date(&mut self, allow: bool) {
        self.policy.allow_future_date = allow;
    }

    /// Whether a blank field validates as [`Status::ValidEmpty`]
    pub const fn allow_empty_date(&self) -> bool {
        self.policy.allow_empty_date
    }

    pub const fn set_allow_empty_date(&mut self, allow: bool) {
        self.policy.allow_empty_date = allow;
    }

    /// Latest date meeting the minimum age as of today, `None` when unbounded
    pub fn minimum_age_date(&self) -> Option<CalendarDate> {
        self.policy.minimum_age_date(self.clock.today())
    }

    /// Earliest date within the maximum age as of today, `None` when unbounded
    pub fn max_age_date(&self) -> Option<CalendarDate> {
        self.policy.max_age_date(self.clock.today())
    }

    /// Registers a callback run synchronously on every status transition
    pub fn on_status_changed(&mut self, listener: impl FnMut(Status) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Blanks the field and marks it as awaiting validation
    pub fn clear(&mut self) {
        self.input.set_text(&self.style.empty_text());
        self.decoded = None;
        self.settle(Status::PendingValidation);
    }

    /// Dispatches a host event to the matching handler
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyPress(ch) => self.key_press(ch),
            InputEvent::KeyDown(code) => self.key_down(code),
            InputEvent::FocusLost => self.focus_lost(),
        }
    }

    /// Call for every typed character, before the mask consumes it.
    pub fn key_press(&mut self, ch: char) {
        trace!(?ch, cursor = self.input.cursor(), "key press");
        if self.status != Status::PendingValidation || ch == BACKSPACE_CHAR {
            self.settle(Status::PendingValidation);
        }
        if SEPARATOR_KEYS.contains(&ch) {
            self.pad_field_at_cursor();
        }
    }

    /// Call for every key-down; delete and backspace mark the field as edited
    pub fn key_down(&mut self, code: KeyCode) {
        if matches!(code, KeyCode::Delete | KeyCode::Backspace)
            && self.status != Status::PendingValidation
        {
            self.settle(Status::PendingValidation);
        }
    }

    /// Validates the whole text and publishes the resulting status
    pub fn focus_lost(&mut self) {
        let (status, feedback) = self.validate();
        self.settle_with(status, feedback);
    }

    /// With the caret one slot into a 2-digit field, shifts the typed digit
    /// right, writes a leading zero and moves to the next field.
    fn pad_field_at_cursor(&mut self) {
        let cursor = self.input.cursor();
        let Some(&start) = self
            .style
            .paddable_fields()
            .iter()
            .find(|&&start| cursor == start + 1)
        else {
            return;
        };
        let end = start + SHORT_FIELD_WIDTH;
        let mut chars: Vec<char> = self.input.text().chars().collect();
        if chars.len() < end {
            chars.resize(end, BLANK);
        }
        chars.copy_within(start..end - 1, start + 1);
        chars[start] = '0';
        let padded: String = chars.into_iter().collect();
        trace!(%padded, field = start, "zero-padded field");
        self.input.set_text(&padded);
        self.input.set_cursor(end + 1);
    }

    /// Classifies the current text, returning the status and the feedback to
    /// paint, `None` to keep the current color
    fn validate(&mut self) -> (Status, Option<Feedback>) {
        self.decoded = None;
        let status = self.classify();
        if self.style == DateStyle::Asian && status == Status::IncompleteMissingYear {
            return (status, None);
        }
        (status, status.feedback())
    }

    fn classify(&mut self) -> Status {
        let mut text = self.input.text();
        if text == self.style.empty_text() {
            return if self.policy.allow_empty_date {
                Status::ValidEmpty
            } else {
                Status::InvalidEmpty
            };
        }

        let completed = self.style.completed_len();
        if text.chars().count() <= completed {
            if let Err(status) = self.check_fields(&text) {
                return status;
            }
            if let Some(short_len) = self.style.two_digit_year_len() {
                if text.chars().count() == short_len {
                    if let Some(expanded) = self.expand_two_digit_year(&text) {
                        self.input.set_text(&expanded);
                        text = self.input.text();
                    }
                }
                if text.chars().count() != completed {
                    return Status::IncompleteMissingYear;
                }
            }
        }

        match self.style.parse(&text) {
            Ok(date) => {
                self.decoded = Some(date);
                self.policy.check(date, self.clock.today())
            }
            Err(err) => {
                debug!(%text, %err, "calendar parse failed");
                Status::InvalidDate
            }
        }
    }

    /// Field-level checks that run before the calendar is consulted
    fn check_fields(&self, text: &str) -> Result<(), Status> {
        let offsets = self.style.offsets();
        let day = if self.style == DateStyle::Asian {
            let year = field(text, offsets.year, Some(YEAR_FIELD_WIDTH));
            if year.len() != YEAR_FIELD_WIDTH || !year.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Status::IncompleteMissingYear);
            }
            field(text, offsets.day, None)
        } else {
            field(text, offsets.day, Some(SHORT_FIELD_WIDTH))
        };
        let month = field(text, offsets.month, Some(SHORT_FIELD_WIDTH));

        check_component(
            &day,
            MAX_DAY,
            Status::IncompleteMissingDay,
            Status::InvalidDay,
        )?;
        check_component(
            &month,
            MAX_MONTH,
            Status::IncompleteMissingMonth,
            Status::InvalidMonth,
        )
    }

    /// Prefixes a 2-digit year with "20" when that age would be under the
    /// minimum, else with "19"
    fn expand_two_digit_year(&self, text: &str) -> Option<String> {
        let year_at = self.style.offsets().year;
        let short = field(text, year_at, Some(SHORT_FIELD_WIDTH));
        let yy: i32 = parse_component(&short).ok()?;
        let age = i32::from(self.clock.today().year()) - (TWO_DIGIT_YEAR_BASE + yy);
        let prefix = if age < self.policy.minimum_age {
            RECENT_CENTURY_PREFIX
        } else {
            PAST_CENTURY_PREFIX
        };
        debug!(yy, age, prefix, "expanding two-digit year");
        let head: String = text.chars().take(year_at).collect();
        let tail: String = text.chars().skip(year_at).collect();
        Some(format!("{head}{prefix}{tail}"))
    }

    fn settle(&mut self, status: Status) {
        self.settle_with(status, status.feedback());
    }

    fn settle_with(&mut self, status: Status, feedback: Option<Feedback>) {
        if let Some(feedback) = feedback {
            self.input.set_feedback(feedback);
        }
        debug!(from = %self.status, to = %status, "status changed");
        self.status = status;
        for listener in &mut self.listeners {
            listener(status);
        }
    }
}

impl<I: fmt::Debug, C: fmt::Debug> fmt::Debug for DateMaskedInput<I, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateMaskedInput")
            .field("input", &self.input)
            .field("clock", &self.clock)
            .field("style", &self.style)
            .field("status", &self.status)
            .field("policy", &self.policy)
            .field("decoded", &self.decoded)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Characters of `text` from `start`, `width` of them or all that remain
fn field(text: &str, start: usize, width: Option<usize>) -> String {
    let rest = text.chars().skip(start);
    match width {
        Some(width) => rest.take(width).collect(),
        None => rest.collect(),
    }
}

fn check_component(value: &str, max: u8, missing: Status, invalid: Status) -> Result<(), Status> {
    if value.trim().is_empty() {
        return Err(missing);
    }
    let number: u16 = parse_component(value).map_err(|_| Status::InvalidDate)?;
    if number > u16::from(max) {
        return Err(invalid);
    }
    Ok(())
}
