use crate::prior::ln_prior::*;

use itertools::Itertools;

/// Ordered collection of priors summed into the total log-prior
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(transparent)]
pub struct PriorSet {
    priors: Vec<Prior>,
}

impl PriorSet {
    pub fn new(priors: Vec<Prior>) -> Self {
        for prior in &priors {
            log::debug!("prior: {}", prior.describe());
        }
        Self { priors }
    }

    pub fn push(&mut self, prior: impl Into<Prior>) {
        let prior = prior.into();
        log::debug!("prior: {}", prior.describe());
        self.priors.push(prior);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Prior> {
        self.priors.iter()
    }

    pub fn len(&self) -> usize {
        self.priors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.priors.is_empty()
    }

    /// Sum of the log-priors, zero for an empty set
    ///
    /// Evaluation stops as soon as the sum is negative infinity.
    pub fn ln_prior(&self, params: &Parameters) -> Result<f64, ParameterError> {
        let mut total = 0.0;
        for prior in &self.priors {
            let ln_p = prior.ln_prior(params)?;
            debug_assert!(
                !(ln_p > 0.0),
                "{} returned positive log-prior {ln_p}",
                prior.describe()
            );
            total += ln_p;
            if total == f64::NEG_INFINITY {
                break;
            }
        }
        Ok(total)
    }

    pub fn describe(&self) -> String {
        self.priors.iter().map(PriorTrait::describe).join("\n")
    }

    pub fn render(&self) -> String {
        self.priors.iter().map(PriorTrait::render).join("\n")
    }
}

impl From<Vec<Prior>> for PriorSet {
    fn from(value: Vec<Prior>) -> Self {
        Self::new(value)
    }
}

impl FromIterator<Prior> for PriorSet {
    fn from_iter<I: IntoIterator<Item = Prior>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PriorSet {
    type Item = &'a Prior;
    type IntoIter = std::slice::Iter<'a, Prior>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;

    fn priors() -> PriorSet {
        vec![
            Prior::gaussian(ParameterName::orbital(OrbitalKind::Per, 1), 14.65, 0.01),
            Prior::hard_bounds(ParameterName::other("jit_hires"), 0.0, 10.0),
            Prior::eccentricity(PlanetSelection::Count(5), 0.99).unwrap(),
            Prior::positive_k(5),
        ]
        .into()
    }

    fn params() -> Parameters {
        params_in_basis(planetary_system("55 Cnc"), Basis::PerTcSecoswSesinwK)
            .with(ParameterName::other("jit_hires"), 3.0)
    }

    #[test]
    fn empty() {
        let priors = PriorSet::default();
        assert!(priors.is_empty());
        assert_eq!(priors.ln_prior(&params()), Ok(0.0));
    }

    #[test]
    fn sum_of_contributions() {
        let priors = priors();
        let params = params();
        let expected: f64 = priors.iter().map(|p| p.ln_prior(&params).unwrap()).sum();
        let actual = priors.ln_prior(&params).unwrap();
        assert_relative_eq!(actual, expected);
        assert!(actual.is_finite() && actual <= 0.0);
    }

    #[test]
    fn rejected() {
        let params = params().with(ParameterName::other("jit_hires"), -1.0);
        assert_eq!(priors().ln_prior(&params), Ok(f64::NEG_INFINITY));
    }

    #[test]
    fn stops_at_negative_infinity() {
        let mut priors = PriorSet::new(vec![Prior::hard_bounds(
            ParameterName::other("jit_hires"),
            0.0,
            1.0,
        )]);
        // would fail for the missing parameter
        priors.push(Gaussian::new(ParameterName::other("dvdt"), 0.0, 1.0));
        assert_eq!(priors.len(), 2);
        let params = params().with(ParameterName::other("jit_hires"), 2.0);
        assert_eq!(priors.ln_prior(&params), Ok(f64::NEG_INFINITY));
        let params = params.with(ParameterName::other("jit_hires"), 0.5);
        assert_eq!(
            priors.ln_prior(&params),
            Err(ParameterError::missing("dvdt"))
        );
    }

    #[test]
    fn strings() {
        let priors = priors();
        assert_eq!(priors.describe().lines().count(), 2 + 5 + 1);
        assert_eq!(priors.render().lines().count(), 2 + 5 + 1);
        assert!(priors.render().starts_with(r"Gaussian prior on $P_{b}$"));
    }

    #[test]
    fn configuration() {
        let priors = priors();
        let json = serde_json::to_string(&priors).unwrap();
        assert!(json.starts_with('['));
        let deserialized: PriorSet = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, priors);
    }

    #[test]
    fn shared_between_threads() {
        let priors = priors();
        let params = params();
        let expected = priors.ln_prior(&params).unwrap();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| priors.ln_prior(&params).unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
