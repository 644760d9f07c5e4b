use csv_parser::systems_from_reader;
use lazy_static::lazy_static;
pub use record::PlanetRecord;
pub use types::PlanetarySystem;

mod csv_parser;
mod record;
mod types;

const PLANETARY_SYSTEMS_CSV: &str = include_str!("../../data/planetary_systems.csv");

lazy_static! {
    /// Known planetary systems with literature orbital elements, approximate
    pub static ref PLANETARY_SYSTEMS: Vec<PlanetarySystem> =
        systems_from_reader(PLANETARY_SYSTEMS_CSV.as_bytes()).unwrap();
}

pub fn iter_planetary_systems() -> impl Iterator<Item = &'static PlanetarySystem> {
    PLANETARY_SYSTEMS.iter()
}

pub fn planetary_system(name: &str) -> &'static PlanetarySystem {
    iter_planetary_systems()
        .find(|system| system.name == name)
        .unwrap_or_else(|| panic!("no fixture system {}", name))
}
