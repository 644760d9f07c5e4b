pub(super) use crate::error::{LabelError, ParameterError, PriorError};
pub(super) use crate::labels::{tex_label, tex_label_inline};
pub(super) use crate::parameters::{OrbitalKind, ParameterName, Parameters};

use enum_dispatch::enum_dispatch;
pub(super) use macro_const::macro_const;
pub(super) use schemars::JsonSchema;
pub(super) use serde::de::DeserializeOwned;
pub(super) use serde::{Deserialize, Serialize};
pub(super) use std::fmt::Debug;

use std::fmt;

/// Log-prior term of the orbital-fit posterior
///
/// Implementations are immutable after construction, so evaluation is a pure function of the
/// parameter state.
#[enum_dispatch]
pub trait PriorTrait: Clone + Debug + Send + Sync + Serialize + DeserializeOwned {
    /// Natural logarithm of the prior at `params`
    ///
    /// Zero if the constraint is satisfied, a finite negative value for a soft penalty and
    /// negative infinity for a violated hard constraint. Never positive. Fails only if
    /// `params` lacks a parameter the prior requires.
    fn ln_prior(&self, params: &Parameters) -> Result<f64, ParameterError>;

    /// One-line plain-text description of the prior and its configuration
    fn describe(&self) -> String;

    /// LaTeX description, fails if a parameter has no known label
    fn try_render(&self) -> Result<String, LabelError>;

    /// LaTeX description falling back to [PriorTrait::describe] for unlabeled parameters
    fn render(&self) -> String {
        self.try_render().unwrap_or_else(|_| self.describe())
    }
}

/// Log-prior on the parameters of the radial-velocity model
#[enum_dispatch(PriorTrait)]
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
#[non_exhaustive]
pub enum Prior {
    Gaussian(super::gaussian::Gaussian),
    HardBounds(super::hard_bounds::HardBounds),
    Eccentricity(super::eccentricity::EccentricityPrior),
    PositiveK(super::positive_k::PositiveKPrior),
    SecondaryEclipse(super::secondary_eclipse::SecondaryEclipsePrior),
}

impl Prior {
    pub fn gaussian(param: ParameterName, mu: f64, sigma: f64) -> Self {
        super::gaussian::Gaussian::new(param, mu, sigma).into()
    }

    pub fn hard_bounds(param: ParameterName, minval: f64, maxval: f64) -> Self {
        super::hard_bounds::HardBounds::new(param, minval, maxval).into()
    }

    pub fn eccentricity(
        planets: impl Into<super::eccentricity::PlanetSelection>,
        upperlims: impl Into<super::eccentricity::UpperLimits>,
    ) -> Result<Self, PriorError> {
        Ok(super::eccentricity::EccentricityPrior::new(planets, upperlims)?.into())
    }

    pub fn positive_k(num_planets: u32) -> Self {
        super::positive_k::PositiveKPrior::new(num_planets).into()
    }

    pub fn secondary_eclipse(planet_num: u32, ts: f64, ts_err: f64) -> Result<Self, PriorError> {
        Ok(super::secondary_eclipse::SecondaryEclipsePrior::new(planet_num, ts, ts_err)?.into())
    }
}

impl fmt::Display for Prior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
