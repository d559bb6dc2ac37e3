pub use crate::omm::{NoradCatalogId, OrbitalElementSet, OMM_FIELD_NAMES};
pub use crate::time::{epoch_from_day_of_year, format_epoch, UtcTimestamp, EPOCH_UTC_FORMAT};
pub use crate::tle::UnstructuredTle;
