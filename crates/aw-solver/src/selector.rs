//! Dispatch from a [`TransportModel`] to its correlation.

use crate::state::SlurryState;
use crate::well::WellConfiguration;
use aw_hydraulics::transport::{hang, oroskar, oroskar_modified, sgs, sgs_alt};
use aw_hydraulics::{DuneGeometry, HangInput, HydraulicsResult, OroskarInput, SgsAltInput, SgsInput, TransportModel};

/// Everything a transport correlation may read.
#[derive(Debug, Clone, Copy)]
pub struct TransportContext<'a> {
    pub well: &'a WellConfiguration,
    pub geometry: &'a DuneGeometry,
    pub slurry: &'a SlurryState,
}

/// Transport velocity (ft/s) above the dune for `model`.
///
/// Each arm forwards only the quantities its correlation uses.
pub fn transport_velocity(model: TransportModel, ctx: &TransportContext<'_>) -> HydraulicsResult<f64> {
    let solids = ctx.well.solids();
    let fluid = ctx.well.fluid();
    let geom = ctx.geometry;
    let c = ctx.slurry.concentration;

    match model {
        TransportModel::Sgs => sgs(&SgsInput {
            equivalent_diameter_in: geom.equivalent_diameter,
            concentration: c,
            dune_height_in: geom.dune_height,
            openhole_id_in: ctx.well.openhole_id,
            solids,
            fluid,
        }),
        TransportModel::SgsAlternate => sgs_alt(&SgsAltInput {
            equivalent_diameter_in: geom.equivalent_diameter,
            concentration: c,
            bed_width_in: geom.bed_width(),
            wetted_perimeter_in: geom.wetted_perimeter(),
            solids,
            fluid,
        }),
        TransportModel::Oroskar | TransportModel::OroskarModified => {
            let input = OroskarInput {
                equivalent_diameter_in: geom.equivalent_diameter,
                concentration: c,
                solids,
                fluid,
            };
            if model == TransportModel::Oroskar {
                oroskar(&input)
            } else {
                oroskar_modified(&input)
            }
        }
        TransportModel::Hang => hang(&HangInput {
            hydraulic_diameter_in: geom.hydraulic_diameter,
            slurry_density_ppg: ctx.slurry.density,
            solids,
            fluid,
        }),
    }
}

/// Slurry a correlation sees after an outer-pass update.
///
/// Classic Oroskar lags one pass behind: it keeps the concentration the pass
/// started with. Every other model reads the updated slurry.
pub fn transport_slurry(model: TransportModel, pass_start: &SlurryState, updated: &SlurryState) -> SlurryState {
    match model {
        TransportModel::Oroskar => SlurryState {
            concentration: pass_start.concentration,
            ..*updated
        },
        _ => *updated,
    }
}
