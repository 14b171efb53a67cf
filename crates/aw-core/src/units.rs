// aw-core/src/units.rs
//
// Hydraulics run in oilfield units (in, ft/s, bbl/min, lb/gal, cP, psi/ft).
// Conversion factors come from uom so the constants are not hand-typed.

use uom::si::f64::{
    Acceleration as UomAcceleration, Length as UomLength, Mass as UomMass, Time as UomTime,
    Volume as UomVolume,
};

pub type Accel = UomAcceleration;
pub type Length = UomLength;
pub type Mass = UomMass;
pub type Time = UomTime;
pub type Volume = UomVolume;

/// Density of fresh water used to turn specific gravity into lb/gal.
pub const WATER_DENSITY_PPG: f64 = 8.34;

/// lbm-ft / (lbf-s^2)
pub const GC: f64 = 32.174;

pub const SQ_IN_PER_SQ_FT: f64 = 144.0;

#[inline]
pub fn inches(v: f64) -> Length {
    use uom::si::length::inch;
    Length::new::<inch>(v)
}

#[inline]
pub fn bbl(v: f64) -> Volume {
    use uom::si::volume::barrel;
    Volume::new::<barrel>(v)
}

#[inline]
pub fn ft_per_in() -> f64 {
    use uom::si::length::foot;
    inches(1.0).get::<foot>()
}

#[inline]
pub fn ft3_per_bbl() -> f64 {
    use uom::si::volume::cubic_foot;
    bbl(1.0).get::<cubic_foot>()
}

#[inline]
pub fn seconds_per_minute() -> f64 {
    use uom::si::time::{minute, second};
    Time::new::<minute>(1.0).get::<second>()
}

/// lbm/ft^3 per lb/gal.
#[inline]
pub fn ppg_to_lbm_per_ft3() -> f64 {
    use uom::si::volume::{cubic_foot, gallon};
    Volume::new::<cubic_foot>(1.0).get::<gallon>()
}

/// lbm/(ft s) per cP.
#[inline]
pub fn cp_to_lbm_per_ft_s() -> f64 {
    use uom::si::length::{foot, meter};
    use uom::si::mass::{kilogram, pound};

    // 1 cP = 1e-3 kg/(m s)
    let pa_s = 1.0e-3;
    let lbm_per_kg = Mass::new::<kilogram>(1.0).get::<pound>();
    let ft_per_m = Length::new::<meter>(1.0).get::<foot>();
    pa_s * lbm_per_kg / ft_per_m
}

/// Standard gravity in ft/s^2.
#[inline]
pub fn gravity_ft_per_s2() -> f64 {
    use uom::si::acceleration::{foot_per_second_squared, meter_per_second_squared};
    Accel::new::<meter_per_second_squared>(9.806_65).get::<foot_per_second_squared>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, rel: f64) -> bool {
        (a - b).abs() <= rel * b.abs()
    }

    #[test]
    fn oilfield_factors() {
        assert!(close(ft_per_in(), 1.0 / 12.0, 1e-12));
        assert!(close(ft3_per_bbl(), 5.614_583, 1e-5));
        assert!(close(ppg_to_lbm_per_ft3(), 7.480_52, 1e-5));
        assert!(close(cp_to_lbm_per_ft_s(), 6.719_69e-4, 1e-4));
        assert!(close(gravity_ft_per_s2(), 32.174, 1e-4));
        assert!(close(seconds_per_minute(), 60.0, 1e-12));
    }

    #[test]
    fn oilfield_reynolds_constant() {
        // Re = 928 rho[ppg] v[ft/s] d[in] / mu[cP]
        let k = ppg_to_lbm_per_ft3() * ft_per_in() / cp_to_lbm_per_ft_s();
        assert!(close(k, 928.0, 2e-3));
    }
}
