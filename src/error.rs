/// Error returned when a parameter state lacks a requested value
///
/// Returned from [crate::PriorTrait::ln_prior]: a missing parameter means the parameter set
/// does not match the declared basis, which is a caller error.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParameterError {
    #[error("parameter {name} is missing from the parameter state")]
    Missing { name: String },
}

impl ParameterError {
    pub fn missing(name: impl ToString) -> Self {
        Self::Missing {
            name: name.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParameterNameError {
    #[error("parameter name must be non-empty")]
    Empty,

    #[error("planet index of {0} must be positive, planets are numbered from unity")]
    ZeroPlanet(String),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BasisError {
    #[error("unsupported basis \"{0}\"")]
    Unknown(String),
}

/// Error returned from prior constructors when the configuration is inconsistent
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PriorError {
    #[error(
        "number of eccentricity upper limits ({upperlims}) must match number of planets ({planets})"
    )]
    UpperLimitsLength { upperlims: usize, planets: usize },

    #[error("planet list must be non-empty")]
    EmptyPlanetList,

    #[error("planets are numbered from unity, zero is not a valid planet index")]
    ZeroPlanet,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LabelError {
    #[error("no label is known for parameter {0}")]
    Unknown(String),
}
