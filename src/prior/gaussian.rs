use crate::prior::ln_prior::*;

macro_const! {
    const DOC: &str = r"
Gaussian prior on a single parameter

$$
\ln p(x) = -\frac12 \left(\frac{x - \mu}{\sigma}\right)^2,
$$
the normalization constant is omitted, so the prior is zero at $x = \mu$ and decreases
quadratically with the standardized distance from it.
";
}

#[doc = DOC!()]
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Gaussian {
    param: ParameterName,
    mu: f64,
    sigma: f64,
}

impl Gaussian {
    /// `sigma` is expected to be positive
    pub fn new(param: ParameterName, mu: f64, sigma: f64) -> Self {
        Self { param, mu, sigma }
    }

    pub const fn doc() -> &'static str {
        DOC
    }

    pub fn param(&self) -> &ParameterName {
        &self.param
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl PriorTrait for Gaussian {
    fn ln_prior(&self, params: &Parameters) -> Result<f64, ParameterError> {
        let x = params.get(&self.param)?;
        Ok(-0.5 * ((x - self.mu) / self.sigma).powi(2))
    }

    fn describe(&self) -> String {
        format!(
            "Gaussian prior on {}, mu={}, sigma={}",
            self.param, self.mu, self.sigma
        )
    }

    fn try_render(&self) -> Result<String, LabelError> {
        let tex = tex_label(&self.param)?;
        Ok(format!(
            r"Gaussian prior on {}: ${} \pm {}$",
            tex, self.mu, self.sigma
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;

    check_prior!(
        Gaussian::new(ParameterName::orbital(OrbitalKind::Per, 1), 3.5, 0.1),
        synth_params(planetary_system("HD 209458")),
    );

    fn params(x: f64) -> Parameters {
        Parameters::new(1, Basis::PerTcEWK).with(ParameterName::orbital(OrbitalKind::K, 1), x)
    }

    #[test]
    fn zero_at_mu() {
        let prior = Gaussian::new(ParameterName::orbital(OrbitalKind::K, 1), 30.0, 2.5);
        assert_eq!(prior.ln_prior(&params(30.0)), Ok(0.0));
    }

    #[test]
    fn symmetric_around_mu() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..100 {
            let mu: f64 = rng.random_range(-100.0..100.0);
            let sigma: f64 = rng.random_range(0.01..10.0);
            let d: f64 = rng.random_range(-50.0..50.0);
            let prior = Gaussian::new(ParameterName::orbital(OrbitalKind::K, 1), mu, sigma);
            let left = prior.ln_prior(&params(mu - d)).unwrap();
            let right = prior.ln_prior(&params(mu + d)).unwrap();
            assert_relative_eq!(left, right, max_relative = 1e-9);
            assert!(left <= 0.0);
        }
    }

    #[test]
    fn standardized_distance() {
        let prior = Gaussian::new(ParameterName::orbital(OrbitalKind::K, 1), 10.0, 2.0);
        assert_relative_eq!(prior.ln_prior(&params(12.0)).unwrap(), -0.5);
        assert_relative_eq!(prior.ln_prior(&params(4.0)).unwrap(), -4.5);
        let far = prior.ln_prior(&params(1e150)).unwrap();
        assert!(far.is_finite() && far < -1e200);
    }

    #[test]
    fn missing_parameter() {
        let prior = Gaussian::new(ParameterName::other("gamma_hires"), 0.0, 1.0);
        assert_eq!(
            prior.ln_prior(&params(0.0)),
            Err(ParameterError::missing("gamma_hires"))
        );
    }

    #[test]
    fn strings() {
        let prior = Gaussian::new(ParameterName::orbital(OrbitalKind::Per, 1), 3.5, 0.1);
        assert_eq!(prior.describe(), "Gaussian prior on per1, mu=3.5, sigma=0.1");
        assert_eq!(prior.render(), r"Gaussian prior on $P_{b}$: $3.5 \pm 0.1$");

        let prior = Gaussian::new(ParameterName::other("secret_knob"), 1.0, 2.0);
        assert_eq!(prior.render(), prior.describe());
    }
}
