use derive_more::Display;

/// Unstructured TLE
/// https://en.wikipedia.org/wiki/Two-line_element_set
///
/// The three raw lines of a named TLE entry, before any field extraction.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
#[display(fmt = "{}", "satellite_name")]
pub struct UnstructuredTle {
    pub satellite_name: String,
    pub line1: String,
    pub line2: String,
}

impl UnstructuredTle {
    pub fn new<N, L1, L2>(satellite_name: N, line1: L1, line2: L2) -> Self
    where
        N: Into<String>,
        L1: Into<String>,
        L2: Into<String>,
    {
        Self {
            satellite_name: satellite_name.into(),
            line1: line1.into(),
            line2: line2.into(),
        }
    }
}
