use crate::prior::ln_prior::*;

macro_const! {
    const DOC: &str = r"
Hard boundaries on a single parameter

Zero inside the closed interval $[\mathrm{min}, \mathrm{max}]$, negative infinity outside of it
or for a NaN value.
";
}

#[doc = DOC!()]
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct HardBounds {
    param: ParameterName,
    minval: f64,
    maxval: f64,
}

impl HardBounds {
    pub fn new(param: ParameterName, minval: f64, maxval: f64) -> Self {
        Self {
            param,
            minval,
            maxval,
        }
    }

    pub const fn doc() -> &'static str {
        DOC
    }

    pub fn param(&self) -> &ParameterName {
        &self.param
    }

    pub fn minval(&self) -> f64 {
        self.minval
    }

    pub fn maxval(&self) -> f64 {
        self.maxval
    }
}

impl PriorTrait for HardBounds {
    fn ln_prior(&self, params: &Parameters) -> Result<f64, ParameterError> {
        let x = params.get(&self.param)?;
        if (self.minval..=self.maxval).contains(&x) {
            Ok(0.0)
        } else {
            log::trace!(
                "{} = {} is out of [{}, {}]",
                self.param,
                x,
                self.minval,
                self.maxval
            );
            Ok(f64::NEG_INFINITY)
        }
    }

    fn describe(&self) -> String {
        format!(
            "Bounded prior on {}, min={}, max={}",
            self.param, self.minval, self.maxval
        )
    }

    fn try_render(&self) -> Result<String, LabelError> {
        let tex = tex_label_inline(&self.param)?;
        Ok(format!(
            "Bounded prior: ${} < {} < {}$",
            self.minval, tex, self.maxval
        ))
    }
}
