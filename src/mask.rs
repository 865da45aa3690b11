//! Digit masks and an in-memory masked text field.
//!
//! [`MaskedText`] behaves like a toolkit masked edit box: digits land in the
//! `0` slots, literals are fixed, unfilled slots render as blanks and trailing
//! blanks are not reported. It is enough to drive [`crate::DateMaskedInput`]
//! without a UI runtime.

use crate::consts::{BLANK, DIGIT_SLOT, SEPARATOR_KEYS};
use crate::host::{Feedback, TextInput};
use crate::style::DateStyle;

/// A fixed pattern of digit slots (`0`) and literal characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mask {
    pattern: &'static str,
}

impl Mask {
    pub const fn new(pattern: &'static str) -> Self {
        Self { pattern }
    }

    pub const fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Number of positions, slots and literals together
    pub fn len(&self) -> usize {
        self.pattern.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Whether position `index` accepts a digit
    pub fn is_slot(&self, index: usize) -> bool {
        self.pattern.chars().nth(index) == Some(DIGIT_SLOT)
    }

    /// Renders slot contents over the pattern; missing entries are blank
    pub fn render(&self, slots: &[Option<char>]) -> String {
        let rendered: String = self
            .pattern
            .chars()
            .enumerate()
            .map(|(i, p)| {
                if p == DIGIT_SLOT {
                    slots.get(i).copied().flatten().unwrap_or(BLANK)
                } else {
                    p
                }
            })
            .collect();
        rendered.trim_end_matches(BLANK).to_owned()
    }

    /// Fits arbitrary text into the mask, one position per character.
    ///
    /// Blanks keep a slot empty. Separators consume a literal position. A
    /// character that matches neither slot nor literal is dropped, and
    /// anything past the end of the mask is ignored.
    pub fn conform(&self, text: &str) -> Vec<Option<char>> {
        let pattern: Vec<char> = self.pattern.chars().collect();
        let mut slots = vec![None; pattern.len()];
        let mut pos = 0;
        let mut chars = text.chars().peekable();
        while let Some(&ch) = chars.peek() {
            let Some(&p) = pattern.get(pos) else { break };
            if p == DIGIT_SLOT {
                if ch.is_ascii_digit() {
                    slots[pos] = Some(ch);
                    pos += 1;
                } else if ch == BLANK {
                    pos += 1;
                }
                chars.next();
            } else {
                if ch == p || SEPARATOR_KEYS.contains(&ch) {
                    chars.next();
                }
                pos += 1;
            }
        }
        slots
    }
}

/// In-memory masked text field implementing [`TextInput`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedText {
    mask:     Mask,
    slots:    Vec<Option<char>>,
    cursor:   usize,
    feedback: Feedback,
}

impl MaskedText {
    pub fn new(mask: Mask) -> Self {
        Self {
            mask,
            slots: vec![None; mask.len()],
            cursor: 0,
            feedback: Feedback::None,
        }
    }

    /// An empty field using the mask of `style`
    pub fn for_style(style: DateStyle) -> Self {
        Self::new(style.mask())
    }

    pub const fn mask(&self) -> Mask {
        self.mask
    }

    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// Applies a typed character the way a masked edit box does after the
    /// key-press event has been dispatched.
    ///
    /// Digits overwrite the next slot at or after the cursor and the cursor
    /// skips any literal that follows. A separator typed on a literal steps
    /// over it. Returns `false` when the character is rejected.
    pub fn type_char(&mut self, ch: char) -> bool {
        if ch.is_ascii_digit() {
            let Some(pos) = (self.cursor..self.mask.len()).find(|&i| self.mask.is_slot(i)) else {
                return false;
            };
            self.slots[pos] = Some(ch);
            self.cursor = self.skip_literals(pos + 1);
            true
        } else if SEPARATOR_KEYS.contains(&ch)
            && self.cursor < self.mask.len()
            && !self.mask.is_slot(self.cursor)
        {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Types every character of `text` in order
    pub fn type_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.type_char(ch);
        }
    }

    /// Clears the slot before the cursor and moves the cursor onto it
    pub fn backspace(&mut self) {
        if let Some(pos) = (0..self.cursor).rev().find(|&i| self.mask.is_slot(i)) {
            self.slots[pos] = None;
            self.cursor = pos;
        }
    }

    /// Clears the slot at or after the cursor
    pub fn delete(&mut self) {
        if let Some(pos) = (self.cursor..self.mask.len()).find(|&i| self.mask.is_slot(i)) {
            self.slots[pos] = None;
        }
    }

    fn skip_literals(&self, mut pos: usize) -> usize {
        while pos < self.mask.len() && !self.mask.is_slot(pos) {
            pos += 1;
        }
        pos
    }
}

impl TextInput for MaskedText {
    fn text(&self) -> String {
        self.mask.render(&self.slots)
    }

    fn set_text(&mut self, text: &str) {
        self.slots = self.mask.conform(text);
        self.cursor = self.cursor.min(self.mask.len());
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.mask.len());
    }

    fn set_feedback(&mut self, feedback: Feedback) {
        self.feedback = feedback;
    }
}
