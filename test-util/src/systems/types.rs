use crate::systems::record::PlanetRecord;

// We cannot return `Parameters`, because it would cause cyclic crate dependencies
#[derive(Clone, Debug, PartialEq)]
pub struct PlanetarySystem {
    pub name: String,
    /// Ordered by the planet number, which starts from unity
    pub planets: Vec<PlanetRecord>,
}

#[derive(Debug, thiserror::Error)]
pub(super) enum Error {
    #[error(transparent)]
    CsvError(#[from] csv::Error),

    #[error("planets of {0} must be numbered 1, 2, 3, ...")]
    PlanetNumbering(String),
}
