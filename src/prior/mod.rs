//! Log-priors of the radial-velocity orbit fit
//!
//! Every prior implements [PriorTrait] and is a variant of the [Prior] enum, which is what
//! configuration files deserialize into. [PriorSet] sums a list of priors into the total
//! log-prior of a parameter state, the caller adds it to the log-likelihood.

pub mod eccentricity;
pub use eccentricity::{EccentricityPrior, PlanetSelection, UpperLimits};

pub mod gaussian;
pub use gaussian::Gaussian;

pub mod hard_bounds;
pub use hard_bounds::HardBounds;

pub mod ln_prior;
pub use ln_prior::{Prior, PriorTrait};

pub mod positive_k;
pub use positive_k::PositiveKPrior;

mod prior_set;
pub use prior_set::PriorSet;

pub mod secondary_eclipse;
pub use secondary_eclipse::SecondaryEclipsePrior;
