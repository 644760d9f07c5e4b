use crate::error::ParameterError;
use crate::parameters::basis::Basis;
use crate::parameters::name::{OrbitalKind, ParameterName};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Snapshot of the model parameter values in some [Basis]
///
/// Priors take it by shared reference and never mutate it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Parameters {
    basis: Basis,
    num_planets: u32,
    values: BTreeMap<ParameterName, f64>,
}

impl Parameters {
    pub fn new(num_planets: u32, basis: Basis) -> Self {
        Self {
            basis,
            num_planets,
            values: BTreeMap::new(),
        }
    }

    pub fn with(mut self, name: ParameterName, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    pub(crate) fn with_basis(mut self, basis: Basis) -> Self {
        self.basis = basis;
        self
    }

    /// Returns the previous value if any
    pub fn insert(&mut self, name: ParameterName, value: f64) -> Option<f64> {
        self.values.insert(name, value)
    }

    pub fn basis(&self) -> Basis {
        self.basis
    }

    pub fn num_planets(&self) -> u32 {
        self.num_planets
    }

    pub fn get(&self, name: &ParameterName) -> Result<f64, ParameterError> {
        self.get_opt(name)
            .ok_or_else(|| ParameterError::missing(name))
    }

    pub fn get_opt(&self, name: &ParameterName) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn contains(&self, name: &ParameterName) -> bool {
        self.values.contains_key(name)
    }

    /// Value of the orbital element of the given planet
    pub fn planet(&self, kind: OrbitalKind, planet: u32) -> Result<f64, ParameterError> {
        self.get(&ParameterName::orbital(kind, planet))
    }

    pub fn planet_opt(&self, kind: OrbitalKind, planet: u32) -> Option<f64> {
        self.get_opt(&ParameterName::orbital(kind, planet))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ParameterName, &f64)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Shortcut for [Basis::to_synth] of the own basis
    pub fn to_synth(&self) -> Result<Self, ParameterError> {
        self.basis.to_synth(self)
    }
}
