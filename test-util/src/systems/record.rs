use serde::Deserialize;

#[derive(Deserialize)]
pub(super) struct CsvPlanetRecord {
    pub(super) system: String,
    planet: u32,
    per: f64,
    tp: f64,
    e: f64,
    w_deg: f64,
    k: f64,
    ts: Option<f64>,
    ts_err: Option<f64>,
}

/// Orbital elements of a single planet in the synth basis, angles in radians
#[derive(Clone, Debug, PartialEq)]
pub struct PlanetRecord {
    pub planet: u32,
    pub per: f64,
    pub tp: f64,
    pub e: f64,
    pub w: f64,
    pub k: f64,
    /// Measured mid-eclipse time and its uncertainty
    pub secondary_eclipse: Option<(f64, f64)>,
}

impl From<CsvPlanetRecord> for PlanetRecord {
    fn from(r: CsvPlanetRecord) -> Self {
        Self {
            planet: r.planet,
            per: r.per,
            tp: r.tp,
            e: r.e,
            w: r.w_deg.to_radians(),
            k: r.k,
            secondary_eclipse: r.ts.zip(r.ts_err),
        }
    }
}
