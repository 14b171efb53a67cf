//! Integration tests for aw-hydraulics on the reference gravel-pack completion.

use aw_hydraulics::slurry::{slurry_density, slurry_viscosity, solids_density_ppg, solids_volume_fraction};
use aw_hydraulics::transport::{hang, oroskar, sgs, sgs_alt};
use aw_hydraulics::{
    FlowPath, FluidProps, HangInput, OroskarInput, SgsAltInput, SgsInput, SolidsProps, annulus_area,
    dune_geometry, eccentricity, friction_factor, reynolds_number,
};

const OPENHOLE_ID: f64 = 8.5;
const SCREEN_OD: f64 = 6.25;
const SCREEN_ID: f64 = 5.0;
const CENTRALIZER_OD: f64 = 7.25;
const WASHPIPE_OD: f64 = 4.0;

fn brine() -> FluidProps {
    FluidProps {
        density_ppg: 8.8,
        viscosity_cp: 1.2,
    }
}

fn sand() -> SolidsProps {
    SolidsProps {
        diameter_in: 0.0287,
        density_ppg: solids_density_ppg(1.6),
    }
}

#[test]
fn open_hole_channel_above_seventy_percent_dune() {
    let geom = dune_geometry(OPENHOLE_ID, SCREEN_OD, CENTRALIZER_OD, 0.70).unwrap();

    assert!((geom.flow_area() - 12.03).abs() < 0.05, "flow area {}", geom.flow_area());
    assert!((geom.hydraulic_diameter - 3.33).abs() < 0.02);
    assert!((geom.equivalent_diameter - 3.91).abs() < 0.02);
    assert!(geom.flow_area() < annulus_area(OPENHOLE_ID, SCREEN_OD));
}

#[test]
fn every_transport_model_gives_a_plausible_velocity() {
    let geom = dune_geometry(OPENHOLE_ID, SCREEN_OD, CENTRALIZER_OD, 0.70).unwrap();
    let loading = 0.75 / (geom.flow_area() / annulus_area(OPENHOLE_ID, SCREEN_OD));
    let c = solids_volume_fraction(loading, sand().density_ppg);
    let rho_sl = slurry_density(brine().density_ppg, 0.0443, loading);

    let velocities = [
        oroskar(&OroskarInput {
            equivalent_diameter_in: geom.equivalent_diameter,
            concentration: c,
            solids: sand(),
            fluid: brine(),
        })
        .unwrap(),
        sgs(&SgsInput {
            equivalent_diameter_in: geom.equivalent_diameter,
            concentration: c,
            dune_height_in: geom.dune_height,
            openhole_id_in: OPENHOLE_ID,
            solids: sand(),
            fluid: brine(),
        })
        .unwrap(),
        sgs_alt(&SgsAltInput {
            equivalent_diameter_in: geom.equivalent_diameter,
            concentration: c,
            bed_width_in: geom.bed_width(),
            wetted_perimeter_in: geom.wetted_perimeter(),
            solids: sand(),
            fluid: brine(),
        })
        .unwrap(),
        hang(&HangInput {
            hydraulic_diameter_in: geom.hydraulic_diameter,
            slurry_density_ppg: rho_sl,
            solids: sand(),
            fluid: brine(),
        })
        .unwrap(),
    ];

    for v in velocities {
        assert!(v > 0.5 && v < 6.0, "transport velocity {v} ft/s out of range");
    }
}

#[test]
fn washpipe_screen_annulus_is_turbulent_at_pack_rates() {
    let ecc = eccentricity(WASHPIPE_OD, SCREEN_ID, 0.0).unwrap();
    let path = FlowPath::annulus("washpipe-screen", SCREEN_ID, WASHPIPE_OD, 0.007).with_eccentricity(1.0, ecc);

    let report = path.friction(1.5, brine()).unwrap();
    assert!(report.reynolds > 2100.0);
    assert!(report.pressure_gradient_psi_per_ft > 0.005);
    assert!(report.pressure_gradient_psi_per_ft < 0.05);
}

#[test]
fn slurry_is_heavier_and_thicker_than_brine() {
    let loading = 1.0;
    assert!(slurry_density(8.8, 0.0443, loading) > 8.8);
    assert!(slurry_viscosity(1.2, loading, sand().density_ppg) > 1.2);
}

#[test]
fn friction_chain_matches_hand_value() {
    // v = 3.3 ft/s in a 3.33 in hydraulic diameter, 9.3 ppg, 2.5 cP
    let re = reynolds_number(3.3, 3.33, 9.3, 2.5).unwrap();
    assert!((re - 928.0 * 9.3 * 3.3 * 3.33 / 2.5).abs() / re < 2e-3);
    let f = friction_factor(3.33, re, 0.05).unwrap();
    assert!(f > 0.005 && f < 0.02, "f = {f}");
}
