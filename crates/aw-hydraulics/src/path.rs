//! Circular flow paths: a pipe bore or the annulus between two strings.

use crate::common::{EPSILON_RATE, check_finite, check_positive};
use crate::eccentricity::eccentricity_factor;
use crate::error::{HydraulicsError, HydraulicsResult};
use crate::flow::velocity_from_rate;
use crate::friction::{FluidProps, FrictionReport, friction_gradient};
use crate::geometry::annulus_area;

/// Power-law eccentricity correction applied to an annulus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EccentricityCorrection {
    /// n'
    pub flow_behavior_index: f64,
    /// 0 = concentric, 1 = inner string resting on the outer wall
    pub eccentricity: f64,
}

/// Pipe bore or annulus carrying clean fluid or slurry.
///
/// Friction is evaluated on the hydraulic diameter (the bore, or the radial gap
/// `outer - inner` for an annulus) and reported per foot of path.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowPath {
    name: String,
    /// Bore or outer-wall ID (in)
    pub outer_diameter: f64,
    /// Inner string OD (in), 0 for a pipe
    pub inner_diameter: f64,
    /// Absolute roughness (in)
    pub roughness: f64,
    pub eccentricity: Option<EccentricityCorrection>,
}

impl FlowPath {
    pub fn pipe(name: impl Into<String>, inner_diameter: f64, roughness: f64) -> Self {
        Self {
            name: name.into(),
            outer_diameter: inner_diameter,
            inner_diameter: 0.0,
            roughness,
            eccentricity: None,
        }
    }

    pub fn annulus(name: impl Into<String>, outer_id: f64, inner_od: f64, roughness: f64) -> Self {
        Self {
            name: name.into(),
            outer_diameter: outer_id,
            inner_diameter: inner_od,
            roughness,
            eccentricity: None,
        }
    }

    pub fn with_eccentricity(mut self, flow_behavior_index: f64, eccentricity: f64) -> Self {
        self.eccentricity = Some(EccentricityCorrection {
            flow_behavior_index,
            eccentricity,
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hydraulic_diameter(&self) -> f64 {
        self.outer_diameter - self.inner_diameter
    }

    pub fn flow_area(&self) -> f64 {
        annulus_area(self.outer_diameter, self.inner_diameter)
    }

    /// Mean velocity (ft/s) at `rate_bpm`.
    pub fn velocity(&self, rate_bpm: f64) -> f64 {
        velocity_from_rate(rate_bpm, self.flow_area())
    }

    fn check(&self) -> HydraulicsResult<()> {
        check_positive(self.outer_diameter, "path diameter")?;
        check_finite(self.inner_diameter, "inner diameter")?;
        if self.inner_diameter < 0.0 || self.hydraulic_diameter() <= 0.0 {
            return Err(HydraulicsError::InvalidGeometry {
                what: format!(
                    "{}: inner OD {} must be smaller than outer ID {}",
                    self.name, self.inner_diameter, self.outer_diameter
                ),
            });
        }
        Ok(())
    }

    /// Friction gradient (psi/ft) of `fluid` flowing at `rate_bpm`.
    ///
    /// The eccentricity factor, when set, multiplies the concentric gradient.
    pub fn friction(&self, rate_bpm: f64, fluid: FluidProps) -> HydraulicsResult<FrictionReport> {
        self.check()?;
        check_finite(rate_bpm, "rate")?;

        let d = self.hydraulic_diameter();
        if rate_bpm.abs() < EPSILON_RATE {
            return Ok(FrictionReport {
                velocity_ft_s: 0.0,
                reynolds: 0.0,
                friction_factor: 0.0,
                pressure_gradient_psi_per_ft: 0.0,
            });
        }

        let mut report = friction_gradient(self.velocity(rate_bpm), d, self.roughness, fluid)?;
        if let Some(ecc) = self.eccentricity {
            let factor = eccentricity_factor(
                ecc.flow_behavior_index,
                report.reynolds,
                self.outer_diameter,
                self.inner_diameter,
                ecc.eccentricity,
            )?;
            report.pressure_gradient_psi_per_ft *= factor;
        }
        Ok(report)
    }

    /// Shorthand for `friction(..).pressure_gradient_psi_per_ft`.
    pub fn pressure_gradient(&self, rate_bpm: f64, fluid: FluidProps) -> HydraulicsResult<f64> {
        Ok(self.friction(rate_bpm, fluid)?.pressure_gradient_psi_per_ft)
    }
}
