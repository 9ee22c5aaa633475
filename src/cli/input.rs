use thiserror::Error;

use crate::error::DirectoryError;
use crate::model::MonthDay;

/// Problems with text typed at the shell, before anything reaches the directory.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid phone number: '{0}'")]
    PhoneNumber(String),

    #[error("Invalid birthday '{0}', expected MM/DD")]
    BirthdayFormat(String),

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

pub fn parse_phone_number(input: &str) -> Result<u64, InputError> {
    input
        .trim()
        .parse::<u64>()
        .map_err(|_| InputError::PhoneNumber(input.to_string()))
}

/// Parses `MM/DD` (leading zeros optional) into a validated birthday.
pub fn parse_month_day(input: &str) -> Result<MonthDay, InputError> {
    let format_err = || InputError::BirthdayFormat(input.to_string());

    let (month, day) = input.trim().split_once('/').ok_or_else(format_err)?;
    let month = month.trim().parse::<u32>().map_err(|_| format_err())?;
    let day = day.trim().parse::<u32>().map_err(|_| format_err())?;

    Ok(MonthDay::new(month, day)?)
}
