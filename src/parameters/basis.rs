use crate::error::{BasisError, ParameterError};
use crate::orbit::{time_peri_to_trans, time_trans_to_peri};
use crate::parameters::name::{OrbitalKind, ParameterName};
use crate::parameters::parameters::Parameters;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Parameterization of the orbital elements used by the sampler
///
/// Every basis describes the same five physical elements per planet: period, reference epoch,
/// eccentricity, argument of periapsis and the RV semi-amplitude. [Basis::Synth] is the
/// canonical one, all physical derivations are done there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Basis {
    /// `per tp e w k`
    Synth,
    /// `per tc e w k`
    PerTcEWK,
    /// `per tc se w k`
    PerTcSeWK,
    /// `per tc secosw sesinw k`
    PerTcSecoswSesinwK,
    /// `per tc secosw sesinw logk`
    PerTcSecoswSesinwLogK,
    /// `per tc ecosw esinw k`
    PerTcEcoswEsinwK,
    /// `logper tc secosw sesinw k`
    LogPerTcSecoswSesinwK,
    /// `logper tc secosw sesinw logk`
    LogPerTcSecoswSesinwLogK,
}

/// How the eccentricity is encoded in a basis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EccentricityForm {
    /// `e` and `w`
    Direct,
    /// `se = sqrt(e)` and `w`
    SqrtE,
    /// `secosw = sqrt(e) cos(w)` and `sesinw = sqrt(e) sin(w)`
    SqrtECosSin,
    /// `ecosw = e cos(w)` and `esinw = e sin(w)`
    ECosSin,
}

impl EccentricityForm {
    /// Eccentricity of the planet, only the parameters of this form are looked up
    pub fn eccentricity(self, params: &Parameters, planet: u32) -> Result<f64, ParameterError> {
        let ecc = match self {
            Self::Direct => params.planet(OrbitalKind::E, planet)?,
            Self::SqrtE => params.planet(OrbitalKind::Se, planet)?.powi(2),
            Self::SqrtECosSin => {
                let secosw = params.planet(OrbitalKind::SeCosW, planet)?;
                let sesinw = params.planet(OrbitalKind::SeSinW, planet)?;
                secosw.powi(2) + sesinw.powi(2)
            }
            Self::ECosSin => {
                let ecosw = params.planet(OrbitalKind::ECosW, planet)?;
                let esinw = params.planet(OrbitalKind::ESinW, planet)?;
                f64::hypot(ecosw, esinw)
            }
        };
        Ok(ecc)
    }

    /// Eccentricity and argument of periapsis (radians) of the planet
    pub fn eccentricity_omega(
        self,
        params: &Parameters,
        planet: u32,
    ) -> Result<(f64, f64), ParameterError> {
        let ecc = self.eccentricity(params, planet)?;
        let omega = match self {
            Self::Direct | Self::SqrtE => params.planet(OrbitalKind::W, planet)?,
            Self::SqrtECosSin => f64::atan2(
                params.planet(OrbitalKind::SeSinW, planet)?,
                params.planet(OrbitalKind::SeCosW, planet)?,
            ),
            Self::ECosSin => f64::atan2(
                params.planet(OrbitalKind::ESinW, planet)?,
                params.planet(OrbitalKind::ECosW, planet)?,
            ),
        };
        Ok((ecc, omega))
    }

    fn insert_from_synth(self, params: &mut Parameters, planet: u32, ecc: f64, omega: f64) {
        let mut insert = |kind, value| params.insert(ParameterName::orbital(kind, planet), value);
        match self {
            Self::Direct => {
                insert(OrbitalKind::E, ecc);
                insert(OrbitalKind::W, omega);
            }
            Self::SqrtE => {
                insert(OrbitalKind::Se, ecc.sqrt());
                insert(OrbitalKind::W, omega);
            }
            Self::SqrtECosSin => {
                let (sin, cos) = omega.sin_cos();
                insert(OrbitalKind::SeCosW, ecc.sqrt() * cos);
                insert(OrbitalKind::SeSinW, ecc.sqrt() * sin);
            }
            Self::ECosSin => {
                let (sin, cos) = omega.sin_cos();
                insert(OrbitalKind::ECosW, ecc * cos);
                insert(OrbitalKind::ESinW, ecc * sin);
            }
        }
    }
}

impl Basis {
    pub const ALL: &'static [Basis] = &[
        Self::Synth,
        Self::PerTcEWK,
        Self::PerTcSeWK,
        Self::PerTcSecoswSesinwK,
        Self::PerTcSecoswSesinwLogK,
        Self::PerTcEcoswEsinwK,
        Self::LogPerTcSecoswSesinwK,
        Self::LogPerTcSecoswSesinwLogK,
    ];

    /// Space-delimited parameter-name tokens
    pub const fn name(self) -> &'static str {
        match self {
            Self::Synth => "per tp e w k",
            Self::PerTcEWK => "per tc e w k",
            Self::PerTcSeWK => "per tc se w k",
            Self::PerTcSecoswSesinwK => "per tc secosw sesinw k",
            Self::PerTcSecoswSesinwLogK => "per tc secosw sesinw logk",
            Self::PerTcEcoswEsinwK => "per tc ecosw esinw k",
            Self::LogPerTcSecoswSesinwK => "logper tc secosw sesinw k",
            Self::LogPerTcSecoswSesinwLogK => "logper tc secosw sesinw logk",
        }
    }

    pub fn tokens(self) -> impl Iterator<Item = OrbitalKind> {
        let (period, epoch) = (self.period_kind(), self.epoch_kind());
        let shape: &'static [OrbitalKind] = match self.eccentricity_form() {
            EccentricityForm::Direct => &[OrbitalKind::E, OrbitalKind::W],
            EccentricityForm::SqrtE => &[OrbitalKind::Se, OrbitalKind::W],
            EccentricityForm::SqrtECosSin => &[OrbitalKind::SeCosW, OrbitalKind::SeSinW],
            EccentricityForm::ECosSin => &[OrbitalKind::ECosW, OrbitalKind::ESinW],
        };
        [period, epoch]
            .into_iter()
            .chain(shape.iter().copied())
            .chain(std::iter::once(self.amplitude_kind()))
    }

    pub const fn eccentricity_form(self) -> EccentricityForm {
        match self {
            Self::Synth | Self::PerTcEWK => EccentricityForm::Direct,
            Self::PerTcSeWK => EccentricityForm::SqrtE,
            Self::PerTcSecoswSesinwK
            | Self::PerTcSecoswSesinwLogK
            | Self::LogPerTcSecoswSesinwK
            | Self::LogPerTcSecoswSesinwLogK => EccentricityForm::SqrtECosSin,
            Self::PerTcEcoswEsinwK => EccentricityForm::ECosSin,
        }
    }

    /// Either [OrbitalKind::Per] or [OrbitalKind::LogPer]
    pub const fn period_kind(self) -> OrbitalKind {
        match self {
            Self::LogPerTcSecoswSesinwK | Self::LogPerTcSecoswSesinwLogK => OrbitalKind::LogPer,
            _ => OrbitalKind::Per,
        }
    }

    /// Either [OrbitalKind::Tp] or [OrbitalKind::Tc]
    pub const fn epoch_kind(self) -> OrbitalKind {
        match self {
            Self::Synth => OrbitalKind::Tp,
            _ => OrbitalKind::Tc,
        }
    }

    /// Either [OrbitalKind::K] or [OrbitalKind::LogK]
    pub const fn amplitude_kind(self) -> OrbitalKind {
        match self {
            Self::PerTcSecoswSesinwLogK | Self::LogPerTcSecoswSesinwLogK => OrbitalKind::LogK,
            _ => OrbitalKind::K,
        }
    }

    /// Express the parameter state in the [Basis::Synth] basis
    ///
    /// All the input values are kept, `per`, `tp`, `e`, `w` and `k` of every planet are added
    /// (or overwritten).
    pub fn to_synth(self, params: &Parameters) -> Result<Parameters, ParameterError> {
        let mut synth = params.clone().with_basis(Basis::Synth);
        for planet in 1..=params.num_planets() {
            let per = match self.period_kind() {
                OrbitalKind::LogPer => params.planet(OrbitalKind::LogPer, planet)?.exp(),
                _ => params.planet(OrbitalKind::Per, planet)?,
            };
            let (ecc, omega) = self.eccentricity_form().eccentricity_omega(params, planet)?;
            let tp = match self.epoch_kind() {
                OrbitalKind::Tc => {
                    time_trans_to_peri(params.planet(OrbitalKind::Tc, planet)?, per, ecc, omega)
                }
                _ => params.planet(OrbitalKind::Tp, planet)?,
            };
            let k = match self.amplitude_kind() {
                OrbitalKind::LogK => params.planet(OrbitalKind::LogK, planet)?.exp(),
                _ => params.planet(OrbitalKind::K, planet)?,
            };
            for (kind, value) in [
                (OrbitalKind::Per, per),
                (OrbitalKind::Tp, tp),
                (OrbitalKind::E, ecc),
                (OrbitalKind::W, omega),
                (OrbitalKind::K, k),
            ] {
                synth.insert(ParameterName::orbital(kind, planet), value);
            }
        }
        Ok(synth)
    }

    /// Express a parameter state in this basis
    ///
    /// Non-orbital values are copied, orbital elements are taken from the synth representation
    /// of `params` and only those of this basis are kept.
    pub fn from_synth(self, params: &Parameters) -> Result<Parameters, ParameterError> {
        let synth = params.to_synth()?;
        let mut output = Parameters::new(params.num_planets(), self);
        for (name, &value) in synth.iter() {
            if let ParameterName::Other(_) = name {
                output.insert(name.clone(), value);
            }
        }
        for planet in 1..=synth.num_planets() {
            let per = synth.planet(OrbitalKind::Per, planet)?;
            let tp = synth.planet(OrbitalKind::Tp, planet)?;
            let ecc = synth.planet(OrbitalKind::E, planet)?;
            let omega = synth.planet(OrbitalKind::W, planet)?;
            let k = synth.planet(OrbitalKind::K, planet)?;

            let (period_kind, period) = match self.period_kind() {
                OrbitalKind::LogPer => (OrbitalKind::LogPer, per.ln()),
                _ => (OrbitalKind::Per, per),
            };
            output.insert(ParameterName::orbital(period_kind, planet), period);

            let (epoch_kind, epoch) = match self.epoch_kind() {
                OrbitalKind::Tc => (
                    OrbitalKind::Tc,
                    time_peri_to_trans(tp, per, ecc, omega, false),
                ),
                _ => (OrbitalKind::Tp, tp),
            };
            output.insert(ParameterName::orbital(epoch_kind, planet), epoch);

            self.eccentricity_form()
                .insert_from_synth(&mut output, planet, ecc, omega);

            let (amplitude_kind, amplitude) = match self.amplitude_kind() {
                OrbitalKind::LogK => (OrbitalKind::LogK, k.ln()),
                _ => (OrbitalKind::K, k),
            };
            output.insert(ParameterName::orbital(amplitude_kind, planet), amplitude);
        }
        Ok(output)
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Basis {
    type Err = BasisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<_> = s.split_whitespace().collect();
        Self::ALL
            .iter()
            .copied()
            .find(|basis| basis.name().split(' ').eq(tokens.iter().copied()))
            .ok_or_else(|| BasisError::Unknown(s.to_owned()))
    }
}

impl From<Basis> for String {
    fn from(value: Basis) -> Self {
        value.name().to_owned()
    }
}

impl TryFrom<String> for Basis {
    type Error = BasisError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl JsonSchema for Basis {
    fn is_referenceable() -> bool {
        false
    }

    fn schema_name() -> String {
        "Basis".to_owned()
    }

    fn json_schema(r#gen: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        String::json_schema(r#gen)
    }
}
