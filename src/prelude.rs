pub use crate::error::{ParameterError, PriorError};
pub use crate::parameters::{Basis, OrbitalKind, ParameterName, Parameters};
pub use crate::prior::{
    EccentricityPrior, Gaussian, HardBounds, PlanetSelection, PositiveKPrior, Prior, PriorSet,
    PriorTrait, SecondaryEclipsePrior, UpperLimits,
};
