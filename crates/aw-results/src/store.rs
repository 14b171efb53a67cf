//! On-disk run store.
//!
//! Each run is a directory named by its run ID holding `curve.jsonl`, one
//! [`CurvePointRecord`] per line, and `manifest.json`. The manifest is written
//! after the curve, so a directory without one is an interrupted save.

use crate::types::{CurvePointRecord, RunManifest};
use crate::{ResultsError, ResultsResult};
use serde::de::DeserializeOwned;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

const MANIFEST_FILE: &str = "manifest.json";
const CURVE_FILE: &str = "curve.jsonl";

#[derive(Debug, Clone)]
pub struct RunStore {
    root_dir: PathBuf,
}

impl RunStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        fs::create_dir_all(&root_dir)?;
        Ok(Self { root_dir })
    }

    /// Store beside the project file, under `.abwave/runs`.
    pub fn for_project(project_path: &Path) -> ResultsResult<Self> {
        match project_path.parent() {
            Some(dir) => Self::new(dir.join(".abwave").join("runs")),
            None => Err(ResultsError::InvalidPath {
                message: format!("{} has no parent directory", project_path.display()),
            }),
        }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn manifest_path(&self, run_id: &str) -> PathBuf {
        self.root_dir.join(run_id).join(MANIFEST_FILE)
    }

    fn curve_path(&self, run_id: &str) -> PathBuf {
        self.root_dir.join(run_id).join(CURVE_FILE)
    }

    pub fn has_run(&self, run_id: &str) -> bool {
        self.manifest_path(run_id).is_file() && self.curve_path(run_id).is_file()
    }

    /// Write a run, replacing any earlier run with the same ID.
    pub fn save_run(&self, manifest: &RunManifest, records: &[CurvePointRecord]) -> ResultsResult<()> {
        let run_id = manifest.run_id.as_str();
        fs::create_dir_all(self.root_dir.join(run_id))?;

        let mut curve = BufWriter::new(File::create(self.curve_path(run_id))?);
        for record in records {
            serde_json::to_writer(&mut curve, record)?;
            curve.write_all(b"\n")?;
        }
        curve.flush()?;

        fs::write(self.manifest_path(run_id), serde_json::to_vec_pretty(manifest)?)?;
        Ok(())
    }

    pub fn load_manifest(&self, run_id: &str) -> ResultsResult<RunManifest> {
        let file = open_run_file(self.manifest_path(run_id), run_id)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn load_curve(&self, run_id: &str) -> ResultsResult<Vec<CurvePointRecord>> {
        let file = open_run_file(self.curve_path(run_id), run_id)?;
        read_json_lines(BufReader::new(file))
    }

    /// Complete runs of one case, newest first. Unreadable entries are skipped.
    pub fn list_runs(&self, case_id: &str) -> ResultsResult<Vec<RunManifest>> {
        let mut runs: Vec<RunManifest> = fs::read_dir(&self.root_dir)?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter_map(|run_id| self.load_manifest(&run_id).ok())
            .filter(|manifest| manifest.case_id == case_id)
            .collect();

        runs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(runs)
    }

    /// Remove a run; a missing run is not an error.
    pub fn delete_run(&self, run_id: &str) -> ResultsResult<()> {
        match fs::remove_dir_all(self.root_dir.join(run_id)) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

fn open_run_file(path: PathBuf, run_id: &str) -> ResultsResult<File> {
    File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ResultsError::RunNotFound {
            run_id: run_id.to_string(),
        },
        _ => e.into(),
    })
}

fn read_json_lines<T: DeserializeOwned>(reader: impl BufRead) -> ResultsResult<Vec<T>> {
    let mut items = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            items.push(serde_json::from_str(&line)?);
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_skipped() {
        let text = "[1,2]\n\n  \n[3]\n";
        let rows: Vec<Vec<u32>> = read_json_lines(text.as_bytes()).unwrap();
        assert_eq!(rows, vec![vec![1, 2], vec![3]]);
    }

    #[test]
    fn malformed_line_is_an_error() {
        let text = "[1]\nnot json\n";
        let rows: ResultsResult<Vec<Vec<u32>>> = read_json_lines(text.as_bytes());
        assert!(matches!(rows, Err(ResultsError::Json(_))));
    }
}
