//! Smoke test for the aw-app service layer against the bundled demo project.

use aw_app::{compile_case, list_cases, load_project, validate_project};
use std::path::PathBuf;

#[test]
fn demo_project_compiles() {
    let mut project_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    project_path.pop(); // crates
    project_path.pop(); // repo root
    project_path.push("demos");
    project_path.push("alpha_wave.yaml");

    let project = load_project(&project_path).expect("Failed to load project");
    validate_project(&project).expect("Validation should succeed");

    let cases = list_cases(&project);
    assert!(!cases.is_empty(), "Should list cases");

    for summary in &cases {
        let case = aw_app::get_case(&project, &summary.id).expect("case listed but missing");
        let compiled = compile_case(case).expect("demo case should compile");
        assert_eq!(compiled.wells.len(), summary.models.len());
        assert_eq!(compiled.grid().len(), summary.models.len() * summary.ratio_count);
    }
}

#[test]
fn missing_case_is_reported() {
    let project: aw_project::Project = serde_yaml::from_str("version: 2\nname: empty\n").expect("parse");
    assert!(matches!(
        aw_app::get_case(&project, "nope"),
        Err(aw_app::AppError::CaseNotFound(_))
    ));
    assert!(validate_project(&project).is_err());
}
