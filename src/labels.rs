use crate::error::LabelError;
use crate::parameters::{OrbitalKind, ParameterName};

/// Planets with labels, indexes 1 to 9 map to letters `b` to `j`
pub const MAX_LABELED_PLANET: u32 = 9;

fn planet_letter(planet: u32) -> Option<char> {
    if (1..=MAX_LABELED_PLANET).contains(&planet) {
        char::from_digit(planet + 10, 36)
    } else {
        None
    }
}

fn orbital_symbol(kind: OrbitalKind) -> &'static str {
    match kind {
        OrbitalKind::Per => "P",
        OrbitalKind::LogPer => r"\ln{P}",
        OrbitalKind::Tc => r"T\rm{conj}",
        OrbitalKind::Tp => r"T\rm{peri}",
        OrbitalKind::E => "e",
        OrbitalKind::W => r"\omega",
        OrbitalKind::Se => r"\sqrt{e}",
        OrbitalKind::SeCosW => r"\sqrt{e}\cos{\omega}",
        OrbitalKind::SeSinW => r"\sqrt{e}\sin{\omega}",
        OrbitalKind::ECosW => r"e\cos{\omega}",
        OrbitalKind::ESinW => r"e\sin{\omega}",
        OrbitalKind::K => "K",
        OrbitalKind::LogK => r"\ln{K}",
    }
}

/// LaTeX label of a parameter, wrapped into `$`
pub fn tex_label(name: &ParameterName) -> Result<String, LabelError> {
    let unknown = || LabelError::Unknown(name.to_string());
    match name {
        ParameterName::Orbital { kind, planet } => {
            let letter = planet_letter(*planet).ok_or_else(unknown)?;
            Ok(format!("${}_{{{}}}$", orbital_symbol(*kind), letter))
        }
        ParameterName::Other(other) => match other.as_str() {
            "dvdt" => Ok(r"$\dot{\gamma}$".to_owned()),
            "curv" => Ok(r"$\ddot{\gamma}$".to_owned()),
            _ => {
                if let Some(tel) = non_empty_suffix(other, "gamma_") {
                    Ok(format!(r"$\gamma_{{\rm {tel}}}$"))
                } else if let Some(tel) = non_empty_suffix(other, "logjit_") {
                    Ok(format!(r"$\ln{{\sigma_{{\rm {tel}}}}}$"))
                } else if let Some(tel) = non_empty_suffix(other, "jit_") {
                    Ok(format!(r"$\sigma_{{\rm {tel}}}$"))
                } else {
                    Err(unknown())
                }
            }
        },
    }
}

fn non_empty_suffix<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    s.strip_prefix(prefix).filter(|suffix| !suffix.is_empty())
}

/// [tex_label] without the enclosing `$`, for embedding into a larger formula
pub fn tex_label_inline(name: &ParameterName) -> Result<String, LabelError> {
    tex_label(name).map(|label| label.replace('$', ""))
}
