use crate::orbit::{time_peri_to_trans, time_to_phase};
use crate::prior::ln_prior::*;

macro_const! {
    const DOC: &str = r"
Secondary eclipse timing

Implied prior on the eccentricity and the argument of periapsis from a measured time of the
secondary eclipse $t_s \pm \delta t_s$. The eclipse time predicted by the orbit and the measured
one are converted to orbital phases $\phi_\mathrm{pred}$ and $\phi_s$, and
$$
\ln p = -\frac12 \left(\frac{\phi_\mathrm{pred} - \phi_s}{\delta t_s / P}\right)^2.
$$
This is a soft constraint, it is never negative infinity.
";
}

#[doc = DOC!()]
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(
    into = "SecondaryEclipsePriorParameters",
    try_from = "SecondaryEclipsePriorParameters"
)]
pub struct SecondaryEclipsePrior {
    planet_num: u32,
    ts: f64,
    ts_err: f64,
}

impl SecondaryEclipsePrior {
    /// `ts` is the mid-eclipse time in the units of the observation timestamps, `ts_err` is
    /// its positive uncertainty
    ///
    /// Fails if `planet_num` is zero.
    pub fn new(planet_num: u32, ts: f64, ts_err: f64) -> Result<Self, PriorError> {
        if planet_num == 0 {
            return Err(PriorError::ZeroPlanet);
        }
        Ok(Self {
            planet_num,
            ts,
            ts_err,
        })
    }

    pub const fn doc() -> &'static str {
        DOC
    }

    pub fn planet_num(&self) -> u32 {
        self.planet_num
    }

    pub fn ts(&self) -> f64 {
        self.ts
    }

    pub fn ts_err(&self) -> f64 {
        self.ts_err
    }

    /// Mid-eclipse time predicted by the orbit
    pub fn predicted_ts(&self, params: &Parameters) -> Result<f64, ParameterError> {
        let synth = params.to_synth()?;
        self.predicted_ts_synth(&synth)
    }

    fn predicted_ts_synth(&self, synth: &Parameters) -> Result<f64, ParameterError> {
        let n = self.planet_num;
        let tp = synth.planet(OrbitalKind::Tp, n)?;
        let per = synth.planet(OrbitalKind::Per, n)?;
        let ecc = synth.planet(OrbitalKind::E, n)?;
        let omega = synth.planet(OrbitalKind::W, n)?;
        Ok(time_peri_to_trans(tp, per, ecc, omega, true))
    }
}

impl PriorTrait for SecondaryEclipsePrior {
    fn ln_prior(&self, params: &Parameters) -> Result<f64, ParameterError> {
        let synth = params.to_synth()?;
        let n = self.planet_num;

        let ts = self.predicted_ts_synth(&synth)?;
        let ts_phase = time_to_phase(&synth, ts, n)?;
        let pts = time_to_phase(&synth, self.ts, n)?;
        let epts = self.ts_err / synth.planet(OrbitalKind::Per, n)?;

        Ok(-0.5 * ((ts_phase - pts) / epts).powi(2))
    }

    fn describe(&self) -> String {
        format!(
            "secondary eclipse constraint: {} +/- {}",
            self.ts, self.ts_err
        )
    }

    fn try_render(&self) -> Result<String, LabelError> {
        Ok(format!(
            r"secondary eclipse prior: ${} \pm {}$",
            self.ts, self.ts_err
        ))
    }
}

impl JsonSchema for SecondaryEclipsePrior {
    fn is_referenceable() -> bool {
        false
    }

    fn schema_name() -> String {
        SecondaryEclipsePriorParameters::schema_name()
    }

    fn json_schema(r#gen: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        SecondaryEclipsePriorParameters::json_schema(r#gen)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "SecondaryEclipsePrior")]
struct SecondaryEclipsePriorParameters {
    planet_num: u32,
    ts: f64,
    ts_err: f64,
}

impl From<SecondaryEclipsePrior> for SecondaryEclipsePriorParameters {
    fn from(value: SecondaryEclipsePrior) -> Self {
        Self {
            planet_num: value.planet_num,
            ts: value.ts,
            ts_err: value.ts_err,
        }
    }
}

impl TryFrom<SecondaryEclipsePriorParameters> for SecondaryEclipsePrior {
    type Error = PriorError;

    fn try_from(value: SecondaryEclipsePriorParameters) -> Result<Self, Self::Error> {
        Self::new(value.planet_num, value.ts, value.ts_err)
    }
}
