//! Form-field parsing shared by the request DTOs.
//!
//! Dates, times and amounts arrive as raw JSON values so that a malformed
//! entry becomes a message on its own field instead of rejecting the body.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::foundation::{FieldErrors, REQUIRED};

pub const INVALID_DATE: &str = "Enter a valid date.";
pub const INVALID_TIME: &str = "Enter a valid time.";
pub const INVALID_NUMBER: &str = "Enter a number.";

/// An amount sent either as a JSON number or as a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FormAmount {
    Number(serde_json::Number),
    Text(String),
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

/// `YYYY-MM-DD`. Blank yields `None` without an error.
pub fn parse_date(errors: &mut FieldErrors, field: &str, raw: Option<&str>) -> Option<NaiveDate> {
    let raw = non_blank(raw)?;
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.add(field, INVALID_DATE);
            None
        }
    }
}

/// Like [`parse_date`], but a blank value is reported as required.
pub fn require_date(errors: &mut FieldErrors, field: &str, raw: Option<&str>) -> Option<NaiveDate> {
    if non_blank(raw).is_none() {
        errors.add(field, REQUIRED);
        return None;
    }
    parse_date(errors, field, raw)
}

/// `HH:MM` or `HH:MM:SS`; blank is reported as required.
pub fn require_time(errors: &mut FieldErrors, field: &str, raw: Option<&str>) -> Option<NaiveTime> {
    let Some(raw) = non_blank(raw) else {
        errors.add(field, REQUIRED);
        return None;
    };
    match NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
    {
        Ok(time) => Some(time),
        Err(_) => {
            errors.add(field, INVALID_TIME);
            None
        }
    }
}

/// Missing or blank amounts are zero.
pub fn parse_amount(errors: &mut FieldErrors, field: &str, raw: Option<&FormAmount>) -> Decimal {
    let parsed = match raw {
        None => return Decimal::ZERO,
        Some(FormAmount::Text(text)) if text.trim().is_empty() => return Decimal::ZERO,
        Some(FormAmount::Text(text)) => text.trim().parse::<Decimal>(),
        Some(FormAmount::Number(number)) => number.to_string().parse::<Decimal>(),
    };
    parsed.unwrap_or_else(|_| {
        errors.add(field, INVALID_NUMBER);
        Decimal::ZERO
    })
}
