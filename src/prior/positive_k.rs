use crate::prior::ln_prior::*;

macro_const! {
    const DOC: &str = r"
Positive radial-velocity semi-amplitudes

Negative infinity if $K < 0$ for any of the planets, zero otherwise. $K$ is taken from `k<n>`
or, for the bases fitting the logarithm, from $\exp$ of `logk<n>`.

Be careful with this prior, it biases the posterior towards larger $K$ for planets with weak
signals.
";
}

#[doc = DOC!()]
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PositiveKPrior {
    num_planets: u32,
}

impl PositiveKPrior {
    /// The prior checks planets `1..=num_planets`
    pub fn new(num_planets: u32) -> Self {
        Self { num_planets }
    }

    pub const fn doc() -> &'static str {
        DOC
    }

    pub fn num_planets(&self) -> u32 {
        self.num_planets
    }

    fn semi_amplitude(params: &Parameters, planet: u32) -> Result<f64, ParameterError> {
        match params.planet_opt(OrbitalKind::K, planet) {
            Some(k) => Ok(k),
            None => Ok(params.planet(OrbitalKind::LogK, planet)?.exp()),
        }
    }
}

impl PriorTrait for PositiveKPrior {
    fn ln_prior(&self, params: &Parameters) -> Result<f64, ParameterError> {
        for planet in 1..=self.num_planets {
            let k = Self::semi_amplitude(params, planet)?;
            if k.is_nan() || k < 0.0 {
                log::trace!("k{planet} = {k} is negative or NaN");
                return Ok(f64::NEG_INFINITY);
            }
        }
        Ok(0.0)
    }

    fn describe(&self) -> String {
        "K constrained to be > 0".to_owned()
    }

    fn try_render(&self) -> Result<String, LabelError> {
        Ok("$K$ constrained to be $>0$".to_owned())
    }
}
