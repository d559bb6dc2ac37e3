//! Field extraction from grouped TLE entries

use crate::{
    columns::{line1, line2},
    fields::{
        decode_bstar, decode_eccentricity, decode_epoch, decode_mean_motion_ddot, parse_float,
        parse_int, round_to, FieldError,
    },
    parser::{parse_unstructured_tle_set, trailing_lines, ParseError},
    Error,
};
use omm_types::prelude::*;
use nom::error::ErrorKind;
use serde::Deserialize;
use tracing::{debug, warn};

const ECCENTRICITY_PLACES: usize = 7;
const ANGLE_PLACES: usize = 4;

/// What to do with 1 or 2 non-blank lines left after the last complete entry
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrailingLines {
    /// Discard them, logging a warning
    #[default]
    Drop,
    /// Fail with [`Error::MalformedInput`]
    Error,
}

/// Parse every entry of a TLE file into element sets, in input order.
///
/// Blank lines are ignored. Any field error aborts the whole collection.
pub fn parse_tle_collection(
    text: &str,
    trailing: TrailingLines,
) -> Result<Vec<OrbitalElementSet>, Error> {
    let (rest, tle_set) = parse_unstructured_tle_set(text).map_err(|e| grouping_error(text, e))?;
    let (_, leftover) = trailing_lines(rest).map_err(|e| grouping_error(text, e))?;

    if !leftover.is_empty() {
        match trailing {
            TrailingLines::Drop => warn!(
                lines = leftover.len(),
                first = leftover[0],
                "Dropping incomplete trailing TLE entry"
            ),
            TrailingLines::Error => {
                return Err(Error::MalformedInput {
                    leftover: leftover.len(),
                })
            }
        }
    }

    tle_set
        .iter()
        .enumerate()
        .map(|(record, tle)| {
            parse_element_set(tle).map_err(|source| Error::Field {
                record,
                name: tle.satellite_name.clone(),
                source,
            })
        })
        .collect()
}

/// Locates a grouping failure by line number rather than echoing the input
fn grouping_error(text: &str, err: nom::Err<ParseError<&str>>) -> Error {
    match err {
        nom::Err::Error(ParseError::Nom(rest, kind))
        | nom::Err::Failure(ParseError::Nom(rest, kind)) => {
            let consumed = &text[..text.len() - rest.len()];
            Error::Grouping {
                line: consumed.matches('\n').count() + 1,
                kind,
            }
        }
        nom::Err::Incomplete(_) => Error::Grouping {
            line: text.lines().count(),
            kind: ErrorKind::Complete,
        },
    }
}

/// Extract the element set of a single entry
pub fn parse_element_set(tle: &UnstructuredTle) -> Result<OrbitalElementSet, FieldError> {
    let l1 = tle.line1.as_str();
    let l2 = tle.line2.as_str();
    if !l1.is_ascii() {
        return Err(FieldError::NonAscii { line: 1 });
    }
    if !l2.is_ascii() {
        return Err(FieldError::NonAscii { line: 2 });
    }

    let set = OrbitalElementSet {
        object_name: tle.satellite_name.clone(),
        object_id: line1::OBJECT_ID.slice(l1).trim().to_owned(),
        epoch: decode_epoch(l1)?,
        mean_motion: parse_float(line2::MEAN_MOTION, l2)?,
        eccentricity: round_to(
            decode_eccentricity(line2::ECCENTRICITY, l2)?,
            ECCENTRICITY_PLACES,
        ),
        inclination: round_to(parse_float(line2::INCLINATION, l2)?, ANGLE_PLACES),
        raan: round_to(parse_float(line2::RA_OF_ASC_NODE, l2)?, ANGLE_PLACES),
        arg_of_pericenter: round_to(parse_float(line2::ARG_OF_PERICENTER, l2)?, ANGLE_PLACES),
        mean_anomaly: round_to(parse_float(line2::MEAN_ANOMALY, l2)?, ANGLE_PLACES),
        bstar: decode_bstar(l1),
        mean_motion_dot: parse_float(line1::MEAN_MOTION_DOT, l1)?,
        mean_motion_ddot: decode_mean_motion_ddot(l1),
        norad_cat_id: parse_int(line1::NORAD_CAT_ID, l1)?,
    };
    debug!(
        name = %set.object_name,
        norad_cat_id = set.norad_cat_id,
        epoch = %format_epoch(&set.epoch),
        "Parsed TLE entry"
    );
    Ok(set)
}
