//! Converts NORAD two-line element sets into OMM-style records

pub use crate::config::{Config, ConfigError};
pub use crate::convert::{convert, convert_file};
pub use crate::elements::{parse_element_set, parse_tle_collection, TrailingLines};
pub use crate::error::Error;
pub use crate::fields::{parse_optional_field, FieldError};
pub use crate::parser::{parse_unstructured_tle_set, trailing_lines, ParseError};
pub use crate::serializer::{to_js_module, OutputFormat};
pub use omm_types::prelude::*;

pub mod columns;
pub mod config;
pub mod convert;
pub mod elements;
pub mod error;
pub mod fields;
pub mod parser;
pub mod serializer;

pub const DEFAULT_COLLECTION_NAME: &str = "gpsOMMs";
