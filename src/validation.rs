use chrono::NaiveDate;

use crate::error::{DirectoryError, DirectoryResult};

pub const MAX_NAME_LENGTH: usize = 100;

/// Characters a name may never contain.
pub const FORBIDDEN_NAME_CHARS: &[char] = &[','];

/// Birthdays carry no year, so validity is judged against a fixed non-leap
/// year. Feb 29 is rejected.
const REFERENCE_YEAR: i32 = 2001;

/// Validates a name for insertion: not empty, at most `MAX_NAME_LENGTH`
/// characters, and free of forbidden characters. The name is returned as
/// given; no trimming is applied.
pub fn valid_name(name: &str) -> DirectoryResult<&str> {
    if name.is_empty() {
        return Err(DirectoryError::BlankName);
    }

    let length = name.chars().count();
    if length > MAX_NAME_LENGTH {
        return Err(DirectoryError::NameTooLong {
            length,
            max: MAX_NAME_LENGTH,
        });
    }

    if let Some(ch) = name.chars().find(|c| FORBIDDEN_NAME_CHARS.contains(c)) {
        return Err(DirectoryError::ForbiddenChar { ch });
    }

    Ok(name)
}

/// Validates a year-less calendar date.
pub fn valid_month_day(month: u32, day: u32) -> DirectoryResult<(u32, u32)> {
    match NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, day) {
        Some(_) => Ok((month, day)),
        None => Err(DirectoryError::InvalidBirthday { month, day }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_name_accepts_plain_name() {
        assert_eq!(valid_name("Alice").unwrap(), "Alice");
    }

    #[test]
    fn valid_name_keeps_surrounding_whitespace() {
        assert_eq!(valid_name("  Alice ").unwrap(), "  Alice ");
    }

    #[test]
    fn valid_name_rejects_empty() {
        assert_eq!(valid_name(""), Err(DirectoryError::BlankName));
    }

    #[test]
    fn valid_name_accepts_max_length() {
        let name = "a".repeat(MAX_NAME_LENGTH);
        assert!(valid_name(&name).is_ok());
    }

    #[test]
    fn valid_name_rejects_over_max_length() {
        let name = "a".repeat(MAX_NAME_LENGTH + 1);
        assert_eq!(
            valid_name(&name),
            Err(DirectoryError::NameTooLong {
                length: 101,
                max: 100
            })
        );
    }

    #[test]
    fn valid_name_rejects_comma() {
        assert_eq!(valid_name("a,b"), Err(DirectoryError::ForbiddenChar { ch: ',' }));
    }

    #[test]
    fn valid_month_day_accepts_month_ends() {
        assert!(valid_month_day(1, 31).is_ok());
        assert!(valid_month_day(4, 30).is_ok());
        assert!(valid_month_day(2, 28).is_ok());
        assert!(valid_month_day(12, 31).is_ok());
    }

    #[test]
    fn valid_month_day_rejects_feb_29() {
        assert!(valid_month_day(2, 29).is_err());
    }

    #[test]
    fn valid_month_day_rejects_feb_30() {
        assert_eq!(
            valid_month_day(2, 30),
            Err(DirectoryError::InvalidBirthday { month: 2, day: 30 })
        );
    }

    #[test]
    fn valid_month_day_rejects_zero_and_out_of_range() {
        assert!(valid_month_day(0, 1).is_err());
        assert!(valid_month_day(1, 0).is_err());
        assert!(valid_month_day(13, 1).is_err());
        assert!(valid_month_day(4, 31).is_err());
    }
}
