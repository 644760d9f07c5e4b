use crate::prior::ln_prior::*;

use itertools::Itertools;

macro_const! {
    const DOC: &str = r"
Physical eccentricities

Keeps the eccentricity of every selected planet within $[0, e_\mathrm{max}]$, the upper limit
may differ between planets. The eccentricity is derived from whatever parameterization the
parameter state uses: $e$ itself, $\sqrt{e}$, $\sqrt{e}\cos\omega$ and $\sqrt{e}\sin\omega$, or
$e\cos\omega$ and $e\sin\omega$.

Zero if every planet passes, negative infinity otherwise.
";
}

/// Planets to apply [EccentricityPrior] to
///
/// A count `n` selects planets `1..=n`, a list selects the given planet indexes.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum PlanetSelection {
    Count(u32),
    List(Vec<u32>),
}

impl PlanetSelection {
    fn into_list(self) -> Vec<u32> {
        match self {
            Self::Count(n) => (1..=n).collect(),
            Self::List(list) => list,
        }
    }
}

impl From<u32> for PlanetSelection {
    fn from(value: u32) -> Self {
        Self::Count(value)
    }
}

impl From<Vec<u32>> for PlanetSelection {
    fn from(value: Vec<u32>) -> Self {
        Self::List(value)
    }
}

impl From<&[u32]> for PlanetSelection {
    fn from(value: &[u32]) -> Self {
        Self::List(value.to_vec())
    }
}

/// Eccentricity upper limits of [EccentricityPrior], one for all planets or one per planet
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(untagged)]
pub enum UpperLimits {
    Single(f64),
    PerPlanet(Vec<f64>),
}

impl UpperLimits {
    pub const DEFAULT: f64 = 0.99;
}

impl Default for UpperLimits {
    fn default() -> Self {
        Self::Single(Self::DEFAULT)
    }
}

impl From<f64> for UpperLimits {
    fn from(value: f64) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<f64>> for UpperLimits {
    fn from(value: Vec<f64>) -> Self {
        Self::PerPlanet(value)
    }
}

impl From<&[f64]> for UpperLimits {
    fn from(value: &[f64]) -> Self {
        Self::PerPlanet(value.to_vec())
    }
}

#[doc = DOC!()]
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(
    into = "EccentricityPriorParameters",
    try_from = "EccentricityPriorParameters"
)]
pub struct EccentricityPrior {
    planet_list: Vec<u32>,
    upperlims: Vec<f64>,
}

impl EccentricityPrior {
    /// Fails if `upperlims` is a list of a length different from the number of planets
    pub fn new(
        planets: impl Into<PlanetSelection>,
        upperlims: impl Into<UpperLimits>,
    ) -> Result<Self, PriorError> {
        let planet_list = planets.into().into_list();
        if planet_list.is_empty() {
            return Err(PriorError::EmptyPlanetList);
        }
        if planet_list.contains(&0) {
            return Err(PriorError::ZeroPlanet);
        }
        let upperlims = match upperlims.into() {
            UpperLimits::Single(upperlim) => vec![upperlim; planet_list.len()],
            UpperLimits::PerPlanet(upperlims) => {
                if upperlims.len() != planet_list.len() {
                    return Err(PriorError::UpperLimitsLength {
                        upperlims: upperlims.len(),
                        planets: planet_list.len(),
                    });
                }
                upperlims
            }
        };
        Ok(Self {
            planet_list,
            upperlims,
        })
    }

    /// [EccentricityPrior] with the default upper limit of 0.99
    pub fn with_default_limit(planets: impl Into<PlanetSelection>) -> Result<Self, PriorError> {
        Self::new(planets, UpperLimits::default())
    }

    pub const fn doc() -> &'static str {
        DOC
    }

    pub fn planet_list(&self) -> &[u32] {
        &self.planet_list
    }

    pub fn upperlims(&self) -> &[f64] {
        &self.upperlims
    }
}

impl PriorTrait for EccentricityPrior {
    fn ln_prior(&self, params: &Parameters) -> Result<f64, ParameterError> {
        let form = params.basis().eccentricity_form();
        for (&planet, &upperlim) in self.planet_list.iter().zip(&self.upperlims) {
            let ecc = form.eccentricity(params, planet)?;
            if !(0.0..=upperlim).contains(&ecc) {
                log::trace!("e{planet} = {ecc} is out of [0, {upperlim}]");
                return Ok(f64::NEG_INFINITY);
            }
        }
        Ok(0.0)
    }

    fn describe(&self) -> String {
        self.planet_list
            .iter()
            .zip(&self.upperlims)
            .map(|(planet, upperlim)| format!("e{planet} constrained to be < {upperlim}"))
            .join("\n")
    }

    fn try_render(&self) -> Result<String, LabelError> {
        let lines: Vec<_> = self
            .planet_list
            .iter()
            .zip(&self.upperlims)
            .map(|(&planet, upperlim)| -> Result<String, LabelError> {
                let tex = tex_label(&ParameterName::orbital(OrbitalKind::E, planet))?;
                Ok(format!("{tex} constrained to be $<{upperlim}$"))
            })
            .collect::<Result<_, _>>()?;
        Ok(lines.join("\n"))
    }
}

impl JsonSchema for EccentricityPrior {
    fn is_referenceable() -> bool {
        false
    }

    fn schema_name() -> String {
        EccentricityPriorParameters::schema_name()
    }

    fn json_schema(r#gen: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        EccentricityPriorParameters::json_schema(r#gen)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "EccentricityPrior")]
struct EccentricityPriorParameters {
    planets: PlanetSelection,
    #[serde(default)]
    upperlims: UpperLimits,
}

impl From<EccentricityPrior> for EccentricityPriorParameters {
    fn from(value: EccentricityPrior) -> Self {
        Self {
            planets: PlanetSelection::List(value.planet_list),
            upperlims: UpperLimits::PerPlanet(value.upperlims),
        }
    }
}

impl TryFrom<EccentricityPriorParameters> for EccentricityPrior {
    type Error = PriorError;

    fn try_from(value: EccentricityPriorParameters) -> Result<Self, Self::Error> {
        Self::new(value.planets, value.upperlims)
    }
}
