pub use systems::{
    PLANETARY_SYSTEMS, PlanetRecord, PlanetarySystem, iter_planetary_systems, planetary_system,
};

mod systems;
