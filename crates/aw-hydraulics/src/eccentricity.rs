//! Eccentric annulus correction for power-law fluids.
//!
//! Ratio of eccentric to concentric friction pressure drop after
//! Haciislamoglu & Langlinais (laminar) and Haciislamoglu & Cartalos
//! (turbulent). Fitted for diameter ratios 0.3..0.9 and eccentricity 0..0.95.

use crate::common::{LAMINAR_REYNOLDS_LIMIT, check_positive};
use crate::error::{HydraulicsError, HydraulicsResult};

struct Coefficients {
    a: f64,
    b: f64,
    c: f64,
}

const LAMINAR: Coefficients = Coefficients {
    a: 0.072,
    b: 1.5,
    c: 0.96,
};

const TURBULENT: Coefficients = Coefficients {
    a: 0.048,
    b: 2.0 / 3.0,
    c: 0.285,
};

/// Eccentricity of an inner string with minimum clearance `standoff_in`.
///
/// 0 is concentric, 1 means the inner string touches the outer wall.
pub fn eccentricity(inner_od: f64, outer_id: f64, standoff_in: f64) -> HydraulicsResult<f64> {
    check_positive(inner_od, "inner diameter")?;
    let gap = outer_id - inner_od;
    if gap <= 0.0 {
        return Err(HydraulicsError::InvalidGeometry {
            what: format!("inner OD {inner_od} must be smaller than outer ID {outer_id}"),
        });
    }
    Ok((1.0 - 2.0 * standoff_in / gap).clamp(0.0, 1.0))
}

/// Multiplier applied to a concentric-annulus friction gradient.
pub fn eccentricity_factor(
    flow_behavior_index: f64,
    reynolds: f64,
    outer_id: f64,
    inner_od: f64,
    eccentricity: f64,
) -> HydraulicsResult<f64> {
    check_positive(flow_behavior_index, "flow behavior index")?;
    check_positive(outer_id, "outer diameter")?;

    let k = coefficients_for(reynolds);
    let n = flow_behavior_index;
    let e = eccentricity;
    let ratio = inner_od / outer_id;

    let factor = 1.0 - k.a * (e / n) * ratio.powf(0.8454)
        - k.b * e * e * n.sqrt() * ratio.powf(0.1852)
        + k.c * e * e * e * n.sqrt() * ratio.powf(0.2527);
    Ok(factor)
}

fn coefficients_for(reynolds: f64) -> &'static Coefficients {
    if reynolds < LAMINAR_REYNOLDS_LIMIT {
        &LAMINAR
    } else {
        &TURBULENT
    }
}
