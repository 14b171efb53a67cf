use aw_results::{CurvePointRecord, ResultsError, RunManifest, RunStore};
use aw_solver::{ConvergenceStatus, EquilibriumResult, SolverConfig, TransportModel, WellConfiguration, solve_equilibrium};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("{prefix}-{nanos}"))
}

fn solved(model: TransportModel, ratio: f64) -> EquilibriumResult {
    let well = WellConfiguration {
        openhole_id: 8.5,
        openhole_roughness: 0.05,
        screen_od: 6.25,
        screen_id: 5.0,
        screen_roughness: 0.007,
        centralizer_od: 7.25,
        washpipe_od: 4.0,
        washpipe_id: 3.5,
        washpipe_roughness: 0.007,
        solid_diameter: 0.0287,
        solid_specific_gravity: 1.6,
        solid_loading: 0.75,
        solid_absolute_volume: 0.0443,
        fluid_density: 8.8,
        fluid_viscosity: 1.2,
        model,
    };
    solve_equilibrium(&well, ratio, &SolverConfig::default()).expect("reference well solves")
}

fn manifest(run_id: &str, case_id: &str, timestamp: &str) -> RunManifest {
    RunManifest {
        run_id: run_id.to_string(),
        case_id: case_id.to_string(),
        case_name: "Reference".to_string(),
        timestamp: timestamp.to_string(),
        models: vec!["Oroskar".to_string()],
        solver_version: "0.1.0".to_string(),
        point_count: 2,
        non_converged: 0,
    }
}

#[test]
fn save_and_load_curve() {
    let dir = unique_temp_dir("abwave-store");
    let store = RunStore::new(dir.clone()).expect("create store");

    let records: Vec<CurvePointRecord> = [0.6, 0.7]
        .into_iter()
        .map(|ratio| CurvePointRecord {
            model: "Oroskar".to_string(),
            dune_height_ratio: ratio,
            result: solved(TransportModel::Oroskar, ratio),
        })
        .collect();

    let m = manifest("run-a", "ref", "2026-01-01T00:00:00+00:00");
    assert!(!store.has_run("run-a"));
    store.save_run(&m, &records).expect("save run");
    assert!(store.has_run("run-a"));

    assert_eq!(store.load_manifest("run-a").expect("manifest"), m);

    let loaded = store.load_curve("run-a").expect("curve");
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].model, "Oroskar");
    assert_eq!(loaded[1].dune_height_ratio, 0.7);
    assert_eq!(loaded[1].result.status, ConvergenceStatus::Converged);
    assert!((loaded[1].result.pump_rate - records[1].result.pump_rate).abs() < 1e-9);

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn missing_run_is_reported() {
    let dir = unique_temp_dir("abwave-missing");
    let store = RunStore::new(dir.clone()).expect("create store");

    assert!(matches!(
        store.load_manifest("nope"),
        Err(ResultsError::RunNotFound { .. })
    ));
    assert!(matches!(
        store.load_curve("nope"),
        Err(ResultsError::RunNotFound { .. })
    ));

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn list_filters_by_case_and_sorts_newest_first() {
    let dir = unique_temp_dir("abwave-list");
    let store = RunStore::new(dir.clone()).expect("create store");

    store
        .save_run(&manifest("old", "ref", "2026-01-01T00:00:00+00:00"), &[])
        .expect("save old");
    store
        .save_run(&manifest("new", "ref", "2026-03-01T00:00:00+00:00"), &[])
        .expect("save new");
    store
        .save_run(&manifest("other", "centred", "2026-02-01T00:00:00+00:00"), &[])
        .expect("save other");

    let runs = store.list_runs("ref").expect("list");
    let ids: Vec<_> = runs.iter().map(|m| m.run_id.as_str()).collect();
    assert_eq!(ids, vec!["new", "old"]);

    store.delete_run("new").expect("delete");
    assert!(!store.has_run("new"));
    assert_eq!(store.list_runs("ref").expect("list").len(), 1);

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn project_store_lives_beside_project_file() {
    let dir = unique_temp_dir("abwave-project");
    std::fs::create_dir_all(&dir).expect("create dir");
    let store = RunStore::for_project(&dir.join("well.yaml")).expect("store");
    assert_eq!(store.root_dir(), dir.join(".abwave").join("runs"));
    assert!(store.root_dir().exists());

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn interrupted_save_is_not_a_run() {
    let dir = unique_temp_dir("abwave-partial");
    let store = RunStore::new(dir.clone()).expect("create store");

    std::fs::create_dir_all(dir.join("half")).expect("run dir");
    std::fs::write(dir.join("half").join("curve.jsonl"), "").expect("curve");
    assert!(!store.has_run("half"));
    assert!(store.list_runs("ref").expect("list").is_empty());

    store.delete_run("half").expect("delete partial");
    store.delete_run("never-saved").expect("deleting a missing run is fine");
    assert!(!dir.join("half").exists());

    std::fs::remove_dir_all(dir).ok();
}
