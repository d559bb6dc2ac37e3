//! Renders element sets as a JavaScript module or as OMM JSON

use omm_types::prelude::*;
use serde::Deserialize;
use std::{io, str::FromStr};

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// `export const <name> = [...]` with bare keys
    #[default]
    Js,
    /// A plain JSON array with quoted keys
    Json,
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown output format '{0}', expected 'js' or 'json'")]
pub struct UnknownOutputFormat(String);

impl FromStr for OutputFormat {
    type Err = UnknownOutputFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "js" | "javascript" => Ok(OutputFormat::Js),
            "json" => Ok(OutputFormat::Json),
            _ => Err(UnknownOutputFormat(s.to_owned())),
        }
    }
}

impl OutputFormat {
    pub fn write<W: io::Write>(
        self,
        collection_name: &str,
        sets: &[OrbitalElementSet],
        out: &mut W,
    ) -> Result<(), crate::Error> {
        match self {
            OutputFormat::Js => out.write_all(to_js_module(collection_name, sets).as_bytes())?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, sets)?;
                out.write_all(b"\n")?;
            }
        }
        Ok(())
    }
}

/// An exported array literal, one object block per element set
pub fn to_js_module(collection_name: &str, sets: &[OrbitalElementSet]) -> String {
    let blocks: Vec<String> = sets.iter().map(js_object).collect();
    format!(
        "export const {collection_name} = [\n{}\n];\n",
        blocks.join(",\n")
    )
}

fn js_object(set: &OrbitalElementSet) -> String {
    let values = [
        js_string(&set.object_name),
        js_string(&set.object_id),
        js_string(&format_epoch(&set.epoch)),
        js_float(set.mean_motion),
        js_float(set.eccentricity),
        js_float(set.inclination),
        js_float(set.raan),
        js_float(set.arg_of_pericenter),
        js_float(set.mean_anomaly),
        js_float(set.bstar),
        js_float(set.mean_motion_dot),
        js_float(set.mean_motion_ddot),
        set.norad_cat_id.to_string(),
    ];

    let mut obj = String::from("{\n");
    for (i, (name, value)) in OMM_FIELD_NAMES.iter().zip(values).enumerate() {
        let sep = if i + 1 < OMM_FIELD_NAMES.len() { "," } else { "" };
        obj.push_str(&format!("    {name}: {value}{sep}\n"));
    }
    obj.push('}');
    obj
}

/// Escaped, double-quoted
fn js_string(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

/// Shortest representation that round-trips, keeps a trailing ".0"
fn js_float(v: f64) -> String {
    format!("{v:?}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{elements::parse_tle_collection, elements::TrailingLines};
    use indoc::indoc;

    const TLE_SET: &str = indoc! {r#"GEO1
        1 37481U 11019A   23190.45078927 -.00000009  00000-0  00000+0 0  9991
        2 37481   2.3847  40.6385 0001640  70.7486  43.7146  1.00272292 44578

        GEO2
        1 39120U 13011A   23190.50177227 -.00000262  00000-0  00000+0 0  9997
        2 39120   2.3950  38.7964 0001772  68.0002 323.0070  1.00271163 37822
        "#};

    const GEO1_BLOCK: &str = indoc! {r#"
        {
            OBJECT_NAME: "GEO1",
            OBJECT_ID: "11019A",
            EPOCH: "2023-07-09T10:49:08.192928",
            MEAN_MOTION: 1.00272292,
            ECCENTRICITY: 0.000164,
            INCLINATION: 2.3847,
            RA_OF_ASC_NODE: 40.6385,
            ARG_OF_PERICENTER: 70.7486,
            MEAN_ANOMALY: 43.7146,
            BSTAR: 0.0,
            MEAN_MOTION_DOT: -9e-8,
            MEAN_MOTION_DDOT: 0.0,
            NORAD_CAT_ID: 37481
        }"#};

    fn sets() -> Vec<OrbitalElementSet> {
        parse_tle_collection(TLE_SET, TrailingLines::Error).unwrap()
    }

    /// Field names of each object block, read back from the module text
    fn field_names(module: &str) -> Vec<Vec<String>> {
        let mut blocks = Vec::new();
        for line in module.lines() {
            if line == "{" {
                blocks.push(Vec::new());
            } else if let Some(field) = line.strip_prefix("    ") {
                let (name, _) = field.split_once(':').unwrap();
                blocks.last_mut().unwrap().push(name.to_owned());
            }
        }
        blocks
    }

    #[test]
    fn js_module_layout() {
        let module = to_js_module("gpsOMMs", &sets());
        assert!(module.starts_with("export const gpsOMMs = [\n{\n"));
        assert!(module.ends_with("}\n];\n"));
        assert!(module.contains(GEO1_BLOCK));
        assert!(module.contains("},\n{\n    OBJECT_NAME: \"GEO2\","));
    }

    #[test]
    fn field_names_round_trip() {
        let module = to_js_module("gpsOMMs", &sets());
        let blocks = field_names(&module);
        assert_eq!(blocks.len(), 2);
        for fields in blocks {
            assert_eq!(fields, OMM_FIELD_NAMES);
        }
    }

    #[test]
    fn empty_collection() {
        assert_eq!(to_js_module("sats", &[]), "export const sats = [\n\n];\n");
    }

    #[test]
    fn names_are_escaped() {
        let mut set = sets().remove(0);
        set.object_name = r#"SAT "A" \ B"#.to_owned();
        let module = to_js_module("sats", &[set]);
        assert!(module.contains(r#"OBJECT_NAME: "SAT \"A\" \\ B","#));
    }

    #[test]
    fn json_output() {
        let mut out = Vec::new();
        OutputFormat::Json
            .write("ignored", &sets(), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        let arr = v.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[0]["OBJECT_NAME"], "GEO1");
        assert_eq!(arr[0]["EPOCH"], "2023-07-09T10:49:08.192928");
        assert_eq!(arr[1]["NORAD_CAT_ID"], 39120);
        assert_eq!(arr[1]["ECCENTRICITY"], 0.0001772);
        for obj in arr {
            assert_eq!(obj.as_object().unwrap().len(), OMM_FIELD_NAMES.len());
        }
    }

    #[test]
    fn output_format_from_str() {
        assert_eq!("js".parse::<OutputFormat>().unwrap(), OutputFormat::Js);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
