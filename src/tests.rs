pub use crate::prelude::*;

pub use approx::assert_relative_eq;
pub use rand::prelude::*;
pub use rv_prior_test_util::{PlanetarySystem, planetary_system};

/// Parameter state of a fixture system in the synth basis
pub fn synth_params(system: &PlanetarySystem) -> Parameters {
    let num_planets = system.planets.len() as u32;
    system
        .planets
        .iter()
        .fold(Parameters::new(num_planets, Basis::Synth), |params, planet| {
            let n = planet.planet;
            params
                .with(ParameterName::orbital(OrbitalKind::Per, n), planet.per)
                .with(ParameterName::orbital(OrbitalKind::Tp, n), planet.tp)
                .with(ParameterName::orbital(OrbitalKind::E, n), planet.e)
                .with(ParameterName::orbital(OrbitalKind::W, n), planet.w)
                .with(ParameterName::orbital(OrbitalKind::K, n), planet.k)
        })
}

pub fn params_in_basis(system: &PlanetarySystem, basis: Basis) -> Parameters {
    basis.from_synth(&synth_params(system)).unwrap()
}

/// Checks every prior must pass: non-positive and reproducible value for a valid state,
/// infallible string representations and configuration round-trip
macro_rules! check_prior {
    ($prior: expr, $params: expr $(,)?) => {
        #[test]
        fn ln_prior_is_not_positive() {
            let prior: $crate::prior::Prior = $prior.into();
            let params: $crate::Parameters = $params;
            let ln_p = $crate::prior::PriorTrait::ln_prior(&prior, &params).unwrap();
            assert!(!ln_p.is_nan());
            assert!(ln_p <= 0.0, "log-prior must not be positive, got {ln_p}");
            let again = $crate::prior::PriorTrait::ln_prior(&prior, &params).unwrap();
            assert_eq!(again.to_bits(), ln_p.to_bits());
        }

        #[test]
        fn describe_and_render() {
            let prior: $crate::prior::Prior = $prior.into();
            let describe = $crate::prior::PriorTrait::describe(&prior);
            assert!(!describe.is_empty());
            assert!(!$crate::prior::PriorTrait::render(&prior).is_empty());
            assert_eq!(prior.to_string(), describe);
        }

        #[test]
        fn serialization() {
            let prior: $crate::prior::Prior = $prior.into();
            let json = serde_json::to_string(&prior).unwrap();
            let deserialized: $crate::prior::Prior = serde_json::from_str(&json).unwrap();
            assert_eq!(deserialized, prior);
        }
    };
}
