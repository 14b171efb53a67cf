//! Geometry of a partially packed open-hole annulus.
//!
//! The screen lies on its centralizers on the low side of a horizontal hole,
//! so its centre sits `centralizer_od / 2` above the hole bottom. A settled
//! dune of height `ratio * openhole_id` leaves an open flow channel between
//! the hole wall and the screen above the dune surface.
//!
//! ```text
//!        hole wall (outer cap above dune)
//!      .-''''''-.
//!    /   .--.     \
//!   |   ( sc )     |   <- screen (inner cap above dune is subtracted)
//!   |===='--'======|   <- dune surface, width_o - width_i is exposed bed
//!    \  dune bed  /
//!      '-......-'
//! ```

use crate::common::check_positive;
use crate::error::{HydraulicsError, HydraulicsResult};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Flow channel above the dune. All lengths in inches, areas in in^2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DuneGeometry {
    pub dune_height: f64,
    pub hydraulic_diameter: f64,
    pub equivalent_diameter: f64,
    /// Hole cross-section above the dune surface
    pub area_outer: f64,
    /// Screen cross-section above the dune surface
    pub area_inner: f64,
    /// Hole wall arc above the dune
    pub perimeter_outer: f64,
    /// Screen arc above the dune
    pub perimeter_inner: f64,
    /// Hole chord at the dune surface
    pub width_outer: f64,
    /// Screen chord at the dune surface
    pub width_inner: f64,
}

impl DuneGeometry {
    pub fn flow_area(&self) -> f64 {
        self.area_outer - self.area_inner
    }

    /// Exposed dune surface between hole wall and screen.
    pub fn bed_width(&self) -> f64 {
        self.width_outer - self.width_inner
    }

    pub fn wetted_perimeter(&self) -> f64 {
        self.perimeter_outer + self.perimeter_inner
    }
}

/// Part of a circle lying above a horizontal line.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CircularCap {
    area: f64,
    arc: f64,
    chord: f64,
}

fn cap_above(radius: f64, center_height: f64, line_height: f64) -> CircularCap {
    let t = line_height - center_height;
    if t >= radius {
        return CircularCap {
            area: 0.0,
            arc: 0.0,
            chord: 0.0,
        };
    }
    if t <= -radius {
        return CircularCap {
            area: PI * radius * radius,
            arc: 2.0 * PI * radius,
            chord: 0.0,
        };
    }

    let half_angle = (t / radius).acos();
    let half_chord = (radius * radius - t * t).sqrt();
    CircularCap {
        area: radius * radius * half_angle - t * half_chord,
        arc: 2.0 * radius * half_angle,
        chord: 2.0 * half_chord,
    }
}

/// Cross-sectional area (in^2) between two circles.
pub fn annulus_area(outer_diameter: f64, inner_diameter: f64) -> f64 {
    PI / 4.0 * (outer_diameter * outer_diameter - inner_diameter * inner_diameter)
}

/// Flow channel left above a dune occupying `dune_height_ratio` of the hole.
pub fn dune_geometry(
    openhole_id: f64,
    screen_od: f64,
    centralizer_od: f64,
    dune_height_ratio: f64,
) -> HydraulicsResult<DuneGeometry> {
    check_positive(openhole_id, "open-hole ID")?;
    check_positive(screen_od, "screen OD")?;
    check_positive(centralizer_od, "centralizer OD")?;

    if !(dune_height_ratio > 0.0 && dune_height_ratio < 1.0) {
        return Err(HydraulicsError::InvalidGeometry {
            what: format!("dune height ratio {dune_height_ratio} must lie strictly between 0 and 1"),
        });
    }
    if centralizer_od < screen_od {
        return Err(HydraulicsError::InvalidGeometry {
            what: format!("centralizer OD {centralizer_od} is smaller than screen OD {screen_od}"),
        });
    }
    if centralizer_od > openhole_id {
        return Err(HydraulicsError::InvalidGeometry {
            what: format!("centralizer OD {centralizer_od} does not fit open hole {openhole_id}"),
        });
    }

    let dune_height = dune_height_ratio * openhole_id;
    let hole = cap_above(openhole_id / 2.0, openhole_id / 2.0, dune_height);
    let screen = cap_above(screen_od / 2.0, centralizer_od / 2.0, dune_height);

    let flow_area = hole.area - screen.area;
    let wetted_perimeter = hole.arc + screen.arc;
    if flow_area <= 0.0 || wetted_perimeter <= 0.0 {
        return Err(HydraulicsError::InvalidGeometry {
            what: format!("no open flow area above a dune at ratio {dune_height_ratio}"),
        });
    }

    Ok(DuneGeometry {
        dune_height,
        hydraulic_diameter: 4.0 * flow_area / wetted_perimeter,
        equivalent_diameter: (4.0 * flow_area / PI).sqrt(),
        area_outer: hole.area,
        area_inner: screen.area,
        perimeter_outer: hole.arc,
        perimeter_inner: screen.arc,
        width_outer: hole.chord,
        width_inner: screen.chord,
    })
}
