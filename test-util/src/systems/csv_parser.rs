use crate::systems::record::CsvPlanetRecord;
use crate::systems::types::{Error, PlanetarySystem};

use itertools::{process_results, Itertools};
use std::io::Read;

pub(super) fn systems_from_reader<R: Read>(reader: R) -> Result<Vec<PlanetarySystem>, Error> {
    let mut csv_reader = csv::ReaderBuilder::new().from_reader(reader);
    let records = csv_reader.deserialize::<CsvPlanetRecord>();
    let systems = process_results(records, |iter| {
        let chunks = iter.chunk_by(|record| record.system.clone());
        let systems: Vec<_> = chunks
            .into_iter()
            .map(|(name, records)| PlanetarySystem {
                name,
                planets: records.map(Into::into).collect(),
            })
            .collect();
        systems
    })?;
    for system in &systems {
        let numbers = system.planets.iter().map(|p| p.planet);
        if !numbers.eq(1..=system.planets.len() as u32) {
            return Err(Error::PlanetNumbering(system.name.clone()));
        }
    }
    Ok(systems)
}
