mod basis;
pub use basis::{Basis, EccentricityForm};

mod name;
pub use name::{OrbitalKind, ParameterName};

#[allow(clippy::module_inception)]
mod parameters;
pub use parameters::Parameters;
