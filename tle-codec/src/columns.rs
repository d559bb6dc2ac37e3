//! Fixed-width column layout of the NORAD two-line element format
//!
//! Offsets are 0-indexed and end-exclusive.

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Column {
    pub name: &'static str,
    pub start: usize,
    pub end: usize,
}

impl Column {
    const fn new(name: &'static str, start: usize, end: usize) -> Self {
        Self { name, start, end }
    }

    /// The column's text, clamped to the end of a short line.
    ///
    /// The line must be ASCII, otherwise an empty string is returned for
    /// columns that don't land on char boundaries.
    pub fn slice<'a>(&self, line: &'a str) -> &'a str {
        let end = self.end.min(line.len());
        let start = self.start.min(end);
        line.get(start..end).unwrap_or_default()
    }
}

pub mod line1 {
    use super::Column;

    pub const NORAD_CAT_ID: Column = Column::new("NORAD_CAT_ID", 2, 7);
    pub const OBJECT_ID: Column = Column::new("OBJECT_ID", 9, 17);
    pub const EPOCH_YEAR: Column = Column::new("EPOCH_YEAR", 18, 20);
    pub const EPOCH_DAY: Column = Column::new("EPOCH_DAY", 20, 32);
    pub const MEAN_MOTION_DOT: Column = Column::new("MEAN_MOTION_DOT", 33, 43);
    pub const MEAN_MOTION_DDOT: Column = Column::new("MEAN_MOTION_DDOT", 44, 50);
    /// Mantissa plus exponent of the second derivative, checked for a minus sign
    pub const MEAN_MOTION_DDOT_EXT: Column = Column::new("MEAN_MOTION_DDOT", 44, 52);
    pub const BSTAR_MANTISSA: Column = Column::new("BSTAR", 53, 59);
    pub const BSTAR_EXPONENT: Column = Column::new("BSTAR", 59, 61);
}

pub mod line2 {
    use super::Column;

    pub const INCLINATION: Column = Column::new("INCLINATION", 8, 16);
    pub const RA_OF_ASC_NODE: Column = Column::new("RA_OF_ASC_NODE", 17, 25);
    pub const ECCENTRICITY: Column = Column::new("ECCENTRICITY", 26, 33);
    pub const ARG_OF_PERICENTER: Column = Column::new("ARG_OF_PERICENTER", 34, 42);
    pub const MEAN_ANOMALY: Column = Column::new("MEAN_ANOMALY", 43, 51);
    pub const MEAN_MOTION: Column = Column::new("MEAN_MOTION", 52, 63);
}

#[cfg(test)]
mod tests {
    use super::*;

    const L1: &str = "1 25544U 98067A   24001.50000000  .00016717  00000-0  10270-3 0  9003";
    const L2: &str = "2 25544  51.6400 208.5000 0007417  68.0000 292.1000 15.49560000400000";

    #[test]
    fn line1_columns() {
        assert_eq!(line1::NORAD_CAT_ID.slice(L1), "25544");
        assert_eq!(line1::OBJECT_ID.slice(L1), "98067A  ");
        assert_eq!(line1::EPOCH_YEAR.slice(L1), "24");
        assert_eq!(line1::EPOCH_DAY.slice(L1), "001.50000000");
        assert_eq!(line1::MEAN_MOTION_DOT.slice(L1), " .00016717");
        assert_eq!(line1::MEAN_MOTION_DDOT.slice(L1), " 00000");
        assert_eq!(line1::MEAN_MOTION_DDOT_EXT.slice(L1), " 00000-0");
        assert_eq!(line1::BSTAR_MANTISSA.slice(L1), " 10270");
        assert_eq!(line1::BSTAR_EXPONENT.slice(L1), "-3");
    }

    #[test]
    fn line2_columns() {
        assert_eq!(line2::INCLINATION.slice(L2), " 51.6400");
        assert_eq!(line2::RA_OF_ASC_NODE.slice(L2), "208.5000");
        assert_eq!(line2::ECCENTRICITY.slice(L2), "0007417");
        assert_eq!(line2::ARG_OF_PERICENTER.slice(L2), " 68.0000");
        assert_eq!(line2::MEAN_ANOMALY.slice(L2), "292.1000");
        assert_eq!(line2::MEAN_MOTION.slice(L2), "15.49560000");
    }

    #[test]
    fn short_lines_clamp() {
        assert_eq!(line2::MEAN_MOTION.slice("2 25544  51.6400 208.5000 0007417  68.0000 292.1000 15.4"), "15.4");
        assert_eq!(line2::MEAN_MOTION.slice("2 25544"), "");
        assert_eq!(line1::NORAD_CAT_ID.slice(""), "");
    }
}
