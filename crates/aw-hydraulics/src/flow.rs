//! Volumetric rate <-> mean velocity conversions.

use aw_core::units::{SQ_IN_PER_SQ_FT, ft3_per_bbl, seconds_per_minute};

/// Mean velocity (ft/s) of `rate_bpm` through a flow area given in in^2.
pub fn velocity_from_rate(rate_bpm: f64, area_in2: f64) -> f64 {
    let ft3_per_s = rate_bpm * ft3_per_bbl() / seconds_per_minute();
    ft3_per_s / (area_in2 / SQ_IN_PER_SQ_FT)
}

/// Volumetric rate (bbl/min) of a stream moving at `velocity_ft_s` through `area_in2`.
pub fn rate_from_velocity(velocity_ft_s: f64, area_in2: f64) -> f64 {
    let ft3_per_s = velocity_ft_s * area_in2 / SQ_IN_PER_SQ_FT;
    ft3_per_s / ft3_per_bbl() * seconds_per_minute()
}

/// Mean velocity (ft/s) in the annulus between `outer_id` and `inner_od` (in).
///
/// Pass `inner_od = 0.0` for a pipe bore.
pub fn annular_velocity(rate_bpm: f64, outer_id: f64, inner_od: f64) -> f64 {
    velocity_from_rate(rate_bpm, crate::geometry::annulus_area(outer_id, inner_od))
}
