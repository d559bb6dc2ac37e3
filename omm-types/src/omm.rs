use crate::time::{serialize_epoch, UtcTimestamp};
use derive_more::Display;
use serde::Serialize;

pub type NoradCatalogId = u32;

/// OMM keyword names, in the order every record is emitted
pub const OMM_FIELD_NAMES: [&str; 13] = [
    "OBJECT_NAME",
    "OBJECT_ID",
    "EPOCH",
    "MEAN_MOTION",
    "ECCENTRICITY",
    "INCLINATION",
    "RA_OF_ASC_NODE",
    "ARG_OF_PERICENTER",
    "MEAN_ANOMALY",
    "BSTAR",
    "MEAN_MOTION_DOT",
    "MEAN_MOTION_DDOT",
    "NORAD_CAT_ID",
];

/// Mean orbital elements of one object, as extracted from a TLE.
///
/// Field declaration order is the wire order, serde relies on it.
#[derive(Clone, PartialEq, Debug, Display, Serialize)]
#[display(
    fmt = "{{name: {}, norad_cat_id: {}, epoch: {}, ...}}",
    "object_name",
    "norad_cat_id",
    "epoch"
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct OrbitalElementSet {
    /// Satellite name line
    pub object_name: String,
    /// International designator, e.g. "98067A"
    pub object_id: String,
    #[serde(serialize_with = "serialize_epoch")]
    pub epoch: UtcTimestamp,
    /// [rev/day]
    pub mean_motion: f64,
    /// Rounded to 7 decimal places
    pub eccentricity: f64,
    /// [deg], rounded to 4 decimal places
    pub inclination: f64,
    /// Right ascension of the ascending node [deg], rounded to 4 decimal places
    #[serde(rename = "RA_OF_ASC_NODE")]
    pub raan: f64,
    /// Argument of perigee [deg], rounded to 4 decimal places
    #[serde(rename = "ARG_OF_PERICENTER")]
    pub arg_of_pericenter: f64,
    /// [deg], rounded to 4 decimal places
    pub mean_anomaly: f64,
    /// Drag term, zero when absent
    pub bstar: f64,
    pub mean_motion_dot: f64,
    pub mean_motion_ddot: f64,
    pub norad_cat_id: NoradCatalogId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::prelude::*;

    fn iss() -> OrbitalElementSet {
        OrbitalElementSet {
            object_name: "ISS (ZARYA)".to_owned(),
            object_id: "98067A".to_owned(),
            epoch: Utc.with_ymd_and_hms(2024, 5, 23, 8, 20, 49).unwrap(),
            mean_motion: 15.51759236,
            eccentricity: 0.000331,
            inclination: 51.6388,
            raan: 78.4485,
            arg_of_pericenter: 198.3472,
            mean_anomaly: 306.6341,
            bstar: 0.00040342,
            mean_motion_dot: 0.00024124,
            mean_motion_ddot: 0.0,
            norad_cat_id: 25544,
        }
    }

    #[test]
    fn serialized_keys_follow_wire_order() {
        let v = serde_json::to_value(iss()).unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), OMM_FIELD_NAMES.len());
        for name in OMM_FIELD_NAMES {
            assert!(obj.contains_key(name), "missing {name}");
        }

        // Key order as written, serde_json::Value may re-sort without preserve_order
        let s = serde_json::to_string(&iss()).unwrap();
        let positions: Vec<usize> = OMM_FIELD_NAMES
            .iter()
            .map(|name| s.find(&format!("\"{name}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn epoch_serializes_with_micros() {
        let v = serde_json::to_value(iss()).unwrap();
        assert_eq!(v["EPOCH"], "2024-05-23T08:20:49.000000");
        assert_eq!(v["NORAD_CAT_ID"], 25544);
    }

    #[test]
    fn display() {
        assert_eq!(
            iss().to_string(),
            "{name: ISS (ZARYA), norad_cat_id: 25544, epoch: 2024-05-23 08:20:49 UTC, ...}"
        );
    }
}
