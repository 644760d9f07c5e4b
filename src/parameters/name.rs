use crate::error::ParameterNameError;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! orbital_kind {
    ($($variant:ident => $token:literal),+ $(,)?) => {
        /// Planet-specific orbital element, the prefix of a parameter name like `secosw2`
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum OrbitalKind {
            $($variant,)+
        }

        impl OrbitalKind {
            pub const ALL: &'static [OrbitalKind] = &[$(OrbitalKind::$variant,)+];

            pub const fn token(self) -> &'static str {
                match self {
                    $(OrbitalKind::$variant => $token,)+
                }
            }

            pub fn from_token(token: &str) -> Option<Self> {
                match token {
                    $($token => Some(OrbitalKind::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

orbital_kind!(
    Per => "per",
    LogPer => "logper",
    Tc => "tc",
    Tp => "tp",
    E => "e",
    W => "w",
    Se => "se",
    SeCosW => "secosw",
    SeSinW => "sesinw",
    ECosW => "ecosw",
    ESinW => "esinw",
    K => "k",
    LogK => "logk",
);

impl fmt::Display for OrbitalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Name of a single model parameter
///
/// Orbital elements are keyed by their kind and the planet index (`per1` is the period of the
/// first planet), everything else, like instrumental offsets `gamma_hires` or the linear trend
/// `dvdt`, is kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ParameterName {
    Orbital { kind: OrbitalKind, planet: u32 },
    Other(String),
}

impl ParameterName {
    /// Planets are numbered from unity
    pub fn orbital(kind: OrbitalKind, planet: u32) -> Self {
        debug_assert_ne!(planet, 0, "planets are numbered from unity");
        Self::Orbital { kind, planet }
    }

    pub fn other(name: impl Into<String>) -> Self {
        Self::Other(name.into())
    }

    pub fn kind(&self) -> Option<OrbitalKind> {
        match self {
            Self::Orbital { kind, .. } => Some(*kind),
            Self::Other(_) => None,
        }
    }

    pub fn planet(&self) -> Option<u32> {
        match self {
            Self::Orbital { planet, .. } => Some(*planet),
            Self::Other(_) => None,
        }
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Orbital { kind, planet } => write!(f, "{kind}{planet}"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

impl FromStr for ParameterName {
    type Err = ParameterNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParameterNameError::Empty);
        }
        let prefix = s.trim_end_matches(|c: char| c.is_ascii_digit());
        let digits = &s[prefix.len()..];
        let Some(kind) = OrbitalKind::from_token(prefix) else {
            return Ok(Self::Other(s.to_owned()));
        };
        // "e01" would not survive a round trip through Display
        if digits.is_empty() || (digits.starts_with('0') && digits.len() > 1) {
            return Ok(Self::Other(s.to_owned()));
        }
        match digits.parse::<u32>() {
            Ok(0) => Err(ParameterNameError::ZeroPlanet(s.to_owned())),
            Ok(planet) => Ok(Self::Orbital { kind, planet }),
            Err(_) => Ok(Self::Other(s.to_owned())),
        }
    }
}

impl From<ParameterName> for String {
    fn from(value: ParameterName) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for ParameterName {
    type Error = ParameterNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl JsonSchema for ParameterName {
    fn is_referenceable() -> bool {
        false
    }

    fn schema_name() -> String {
        "ParameterName".to_owned()
    }

    fn json_schema(r#gen: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        String::json_schema(r#gen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_orbital() {
        let name: ParameterName = "secosw2".parse().unwrap();
        assert_eq!(name, ParameterName::orbital(OrbitalKind::SeCosW, 2));

        let name: ParameterName = "se1".parse().unwrap();
        assert_eq!(name, ParameterName::orbital(OrbitalKind::Se, 1));

        let name: ParameterName = "logk13".parse().unwrap();
        assert_eq!(name.kind(), Some(OrbitalKind::LogK));
        assert_eq!(name.planet(), Some(13));
    }

    #[test]
    fn parse_other() {
        for s in ["gamma_hires", "jit_harps2", "dvdt", "curv", "per", "e01", "foo1"] {
            let name: ParameterName = s.parse().unwrap();
            assert_eq!(name, ParameterName::other(s));
        }
    }

    #[test]
    fn parse_invalid() {
        assert_eq!("".parse::<ParameterName>(), Err(ParameterNameError::Empty));
        assert_eq!(
            "k0".parse::<ParameterName>(),
            Err(ParameterNameError::ZeroPlanet("k0".to_owned()))
        );
    }

    #[test]
    fn display_round_trip() {
        for &kind in OrbitalKind::ALL {
            let name = ParameterName::orbital(kind, 3);
            assert_eq!(name.to_string().parse::<ParameterName>().unwrap(), name);
        }
    }

    #[test]
    fn serialization() {
        let name = ParameterName::orbital(OrbitalKind::Tc, 1);
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"tc1\"");
        let deserialized: ParameterName = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, name);
        assert!(serde_json::from_str::<ParameterName>("\"tc0\"").is_err());
    }
}
