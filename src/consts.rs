use crate::host::Rgb;

/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Largest day number accepted by the field-level check, before the calendar is consulted
pub const MAX_DAY: u8 = 31;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;
/// Days in February for common years
pub const FEBRUARY_DAYS_COMMON: u8 = 28;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Literal separator rendered by every mask
pub const MASK_SEPARATOR: char = '/';
/// Keys that trigger zero-padding of a one-digit field
pub const SEPARATOR_KEYS: [char; 4] = ['/', '\\', '.', '-'];
/// Control character some toolkits deliver as a key press for backspace
pub const BACKSPACE_CHAR: char = '\u{8}';

/// Mask for the day/month first orderings (European and USA)
pub const MASK_DAY_MONTH_FIRST: &str = "00/00/0000";
/// Mask for the year first ordering (Asian)
pub const MASK_YEAR_FIRST: &str = "0000/00/00";
/// Mask slot that accepts a digit
pub const DIGIT_SLOT: char = '0';
/// Character rendered in an unfilled digit slot
pub const BLANK: char = ' ';

/// Length of a fully completed mask
pub const MASK_COMPLETED_LEN: usize = 10;
/// Length of a day/month first text carrying a 2-digit year, `00/00/00`
pub const MASK_TWO_DIGIT_YEAR_LEN: usize = 8;
/// Width of the day and month fields
pub const SHORT_FIELD_WIDTH: usize = 2;
/// Width of a 4-digit year field
pub const YEAR_FIELD_WIDTH: usize = 4;
/// Century used by the 2-digit-year heuristic to measure the age
pub const TWO_DIGIT_YEAR_BASE: i32 = 2000;
/// Century prefix for 2-digit years that would make the person too young
pub const RECENT_CENTURY_PREFIX: &str = "20";
/// Century prefix for every other 2-digit year
pub const PAST_CENTURY_PREFIX: &str = "19";

/// Default minimum age, in years
pub const MINIMUM_AGE_DEFAULT: i32 = 18;
/// Default maximum age, in years
pub const MAX_AGE_DEFAULT: i32 = 93;
/// Ages at or below this value disable the corresponding boundary
pub const AGE_BOUNDARY_THRESHOLD: i32 = 1;

/// Feedback color for an accepted date
pub const OK_COLOR: Rgb = Rgb::new(160, 213, 73);
/// Feedback color for a rejected date
pub const ERROR_COLOR: Rgb = Rgb::new(255, 128, 128);
