//! Numeric decoding rules for individual TLE fields

use crate::columns::{line1, Column};
use omm_types::time::{epoch_from_day_of_year, UtcTimestamp};
use std::str::FromStr;

/// Two-digit years below this belong to the 2000s
pub const EPOCH_YEAR_PIVOT: i32 = 57;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("Invalid {field} field '{text}'")]
    Invalid { field: &'static str, text: String },
    #[error("Line {line} contains non-ASCII text")]
    NonAscii { line: u8 },
    #[error("Epoch day-of-year {day} is outside of {year}")]
    EpochOutOfRange { year: i32, day: f64 },
}

impl FieldError {
    fn invalid(field: &'static str, text: &str) -> Self {
        FieldError::Invalid {
            field,
            text: text.to_owned(),
        }
    }
}

/// Parse a column as an integer
pub fn parse_int<T: FromStr>(col: Column, line: &str) -> Result<T, FieldError> {
    let text = col.slice(line).trim();
    text.parse().map_err(|_| FieldError::invalid(col.name, text))
}

/// Parse a column as a finite float
pub fn parse_float(col: Column, line: &str) -> Result<f64, FieldError> {
    parse_finite(col.name, col.slice(line))
}

/// Parse an already reconstructed field value.
///
/// Used for the drag terms whose failures the caller maps to zero.
pub fn parse_optional_field(field: &'static str, text: &str) -> Result<f64, FieldError> {
    parse_finite(field, text)
}

fn parse_finite(field: &'static str, text: &str) -> Result<f64, FieldError> {
    let text = text.trim();
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(FieldError::invalid(field, text)),
    }
}

/// The format never encodes the leading "0."
pub fn decode_eccentricity(col: Column, line: &str) -> Result<f64, FieldError> {
    let digits = col.slice(line).trim();
    parse_finite(col.name, &format!("0.{digits}"))
}

/// Second derivative of mean motion, an implied-decimal mantissa.
///
/// Any minus sign in the mantissa or exponent yields zero, as does a field
/// that doesn't parse.
pub fn decode_mean_motion_ddot(line: &str) -> f64 {
    if line1::MEAN_MOTION_DDOT_EXT.slice(line).contains('-') {
        return 0.0;
    }
    let digits = line1::MEAN_MOTION_DDOT.slice(line).trim();
    parse_optional_field(line1::MEAN_MOTION_DDOT.name, &format!("0.{digits}")).unwrap_or(0.0)
}

/// B* drag term, `<mantissa>e<exponent>`.
///
/// An all-zero mantissa, or a field that doesn't parse, yields zero.
pub fn decode_bstar(line: &str) -> f64 {
    let mantissa = line1::BSTAR_MANTISSA.slice(line).trim();
    let exponent = line1::BSTAR_EXPONENT.slice(line).trim();
    if is_zero_mantissa(mantissa) {
        return 0.0;
    }
    parse_optional_field(line1::BSTAR_MANTISSA.name, &format!("{mantissa}e{exponent}"))
        .unwrap_or(0.0)
}

fn is_zero_mantissa(mantissa: &str) -> bool {
    let digits = mantissa.trim_start_matches(['+', '-']);
    !digits.is_empty() && digits.chars().all(|c| c == '0')
}

pub fn expand_two_digit_year(year: i32) -> i32 {
    if year < EPOCH_YEAR_PIVOT {
        year + 2000
    } else {
        year + 1900
    }
}

pub fn decode_epoch(line: &str) -> Result<UtcTimestamp, FieldError> {
    let year = expand_two_digit_year(parse_int(line1::EPOCH_YEAR, line)?);
    let day = parse_float(line1::EPOCH_DAY, line)?;
    epoch_from_day_of_year(year, day).ok_or(FieldError::EpochOutOfRange { year, day })
}

/// Round to a number of decimal places, from the exact binary value
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}
