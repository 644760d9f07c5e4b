//! Conversions between characteristic times of a Keplerian orbit
//!
//! Angles are in radians, times are in the units of the observation timestamps.

use crate::error::ParameterError;
use crate::parameters::{OrbitalKind, Parameters};

use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Eccentric anomaly at the true anomaly `f`
fn eccentric_anomaly(f: f64, ecc: f64) -> f64 {
    2.0 * f64::atan(f64::tan(0.5 * f) * f64::sqrt((1.0 - ecc) / (1.0 + ecc)))
}

/// Time of conjunction from the time of periapsis passage
///
/// Conjunction is the transit if `secondary` is `false` and the secondary eclipse otherwise.
/// The true anomaly at the conjunction is $\pi/2 - \omega$ or $3\pi/2 - \omega$ respectively.
/// The transit is the one within half a period of `tp`, the secondary eclipse is always the one
/// after `tp`, between half and one and a half periods later.
/// Unbound orbits, `ecc >= 1`, have no conjunction time defined and `tp` is returned.
pub fn time_peri_to_trans(tp: f64, per: f64, ecc: f64, omega: f64, secondary: bool) -> f64 {
    if ecc >= 1.0 {
        return tp;
    }
    let ee = if secondary {
        eccentric_anomaly(PI + FRAC_PI_2 - omega, ecc) + TAU
    } else {
        eccentric_anomaly(FRAC_PI_2 - omega, ecc)
    };
    tp + per / TAU * (ee - ecc * ee.sin())
}

/// Time of periapsis passage from the time of the transit, inverse of [time_peri_to_trans]
pub fn time_trans_to_peri(tc: f64, per: f64, ecc: f64, omega: f64) -> f64 {
    if ecc >= 1.0 {
        return tc;
    }
    let ee = eccentric_anomaly(FRAC_PI_2 - omega, ecc);
    tc - per / TAU * (ee - ecc * ee.sin())
}

/// Orbital phase of time `t` in `[0, 1)`
///
/// Phase is counted from `tc` of the planet if `params` has it, otherwise from `tp`.
pub fn time_to_phase(params: &Parameters, t: f64, planet: u32) -> Result<f64, ParameterError> {
    let epoch = match params.planet_opt(OrbitalKind::Tc, planet) {
        Some(tc) => tc,
        None => params.planet(OrbitalKind::Tp, planet)?,
    };
    let per = params.planet(OrbitalKind::Per, planet)?;
    Ok((t - epoch).rem_euclid(per) / per)
}
