#![doc = include_str!("../README.md")]

#[cfg(test)]
#[macro_use]
mod tests;

mod error;
pub use error::{BasisError, LabelError, ParameterError, ParameterNameError, PriorError};

pub mod labels;

pub mod orbit;

mod parameters;
pub use parameters::{Basis, EccentricityForm, OrbitalKind, ParameterName, Parameters};

pub mod prelude;

pub mod prior;
pub use prior::{
    EccentricityPrior, Gaussian, HardBounds, PositiveKPrior, Prior, PriorSet, PriorTrait,
    SecondaryEclipsePrior,
};
