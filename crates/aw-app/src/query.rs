//! Query helpers for extracting curves from loaded runs.

use aw_hydraulics::TransportModel;
use aw_results::CurvePointRecord;
use aw_solver::EquilibriumResult;
use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, AppResult};

/// Result fields that can be plotted against dune-height ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveVariable {
    PumpRate,
    ReturnRate,
    OpenholeRate,
    WashpipeScreenRate,
    OpenholeDp,
    WashpipeScreenDp,
    BetaDp,
    WashpipeDp,
    TransportVelocity,
}

impl CurveVariable {
    pub const ALL: [CurveVariable; 9] = [
        CurveVariable::PumpRate,
        CurveVariable::ReturnRate,
        CurveVariable::OpenholeRate,
        CurveVariable::WashpipeScreenRate,
        CurveVariable::OpenholeDp,
        CurveVariable::WashpipeScreenDp,
        CurveVariable::BetaDp,
        CurveVariable::WashpipeDp,
        CurveVariable::TransportVelocity,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CurveVariable::PumpRate => "pump_rate",
            CurveVariable::ReturnRate => "return_rate",
            CurveVariable::OpenholeRate => "openhole_rate",
            CurveVariable::WashpipeScreenRate => "washpipe_screen_rate",
            CurveVariable::OpenholeDp => "openhole_dp",
            CurveVariable::WashpipeScreenDp => "washpipe_screen_dp",
            CurveVariable::BetaDp => "beta_dp",
            CurveVariable::WashpipeDp => "washpipe_dp",
            CurveVariable::TransportVelocity => "transport_velocity",
        }
    }

    pub fn value(self, result: &EquilibriumResult) -> f64 {
        match self {
            CurveVariable::PumpRate => result.pump_rate,
            CurveVariable::ReturnRate => result.return_rate,
            CurveVariable::OpenholeRate => result.openhole_rate,
            CurveVariable::WashpipeScreenRate => result.washpipe_screen_rate,
            CurveVariable::OpenholeDp => result.openhole_dp,
            CurveVariable::WashpipeScreenDp => result.washpipe_screen_dp,
            CurveVariable::BetaDp => result.beta_dp,
            CurveVariable::WashpipeDp => result.washpipe_dp,
            CurveVariable::TransportVelocity => result.transport_velocity,
        }
    }
}

impl fmt::Display for CurveVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveVariable {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        CurveVariable::ALL
            .into_iter()
            .find(|v| v.name() == key)
            .ok_or_else(|| {
                let expected: Vec<_> = CurveVariable::ALL.iter().map(|v| v.name()).collect();
                AppError::InvalidInput(format!(
                    "Unknown curve variable '{}' (expected one of: {})",
                    s,
                    expected.join(", ")
                ))
            })
    }
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub point_count: usize,
    pub models: Vec<String>,
    pub ratio_range: (f64, f64),
    pub non_converged: usize,
}

pub fn get_run_summary(records: &[CurvePointRecord]) -> AppResult<RunSummary> {
    if records.is_empty() {
        return Err(AppError::InvalidInput("No records in run".to_string()));
    }

    let (lo, hi) = records.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
        (lo.min(r.dune_height_ratio), hi.max(r.dune_height_ratio))
    });

    Ok(RunSummary {
        point_count: records.len(),
        models: list_models(records),
        ratio_range: (lo, hi),
        non_converged: records.iter().filter(|r| !r.result.is_converged()).count(),
    })
}

/// Models in first-seen order.
pub fn list_models(records: &[CurvePointRecord]) -> Vec<String> {
    let mut models: Vec<String> = Vec::new();
    for record in records {
        if !models.contains(&record.model) {
            models.push(record.model.clone());
        }
    }
    models
}

/// `(dune_height_ratio, value)` pairs for one model, sorted by ratio.
///
/// The model may be given under any accepted spelling ("oroskar mod").
pub fn extract_curve(
    records: &[CurvePointRecord],
    model: &str,
    variable: CurveVariable,
) -> AppResult<Vec<(f64, f64)>> {
    let wanted = model
        .parse::<TransportModel>()
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;

    let mut series: Vec<(f64, f64)> = records
        .iter()
        .filter(|r| r.model.parse::<TransportModel>().is_ok_and(|m| m == wanted))
        .map(|r| (r.dune_height_ratio, variable.value(&r.result)))
        .collect();

    if series.is_empty() {
        return Err(AppError::InvalidInput(format!(
            "Model '{}' not present in run",
            wanted
        )));
    }

    series.sort_by(|a, b| a.0.total_cmp(&b.0));
    Ok(series)
}

pub fn curve_to_csv(variable: CurveVariable, series: &[(f64, f64)]) -> String {
    let mut out = format!("dune_height_ratio,{}\n", variable.name());
    for (ratio, value) in series {
        out.push_str(&format!("{},{}\n", ratio, value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variables_parse_by_name() {
        for v in CurveVariable::ALL {
            assert_eq!(v.name().parse::<CurveVariable>().unwrap(), v);
        }
        assert_eq!("Pump-Rate".parse::<CurveVariable>().unwrap(), CurveVariable::PumpRate);
        assert!("flow".parse::<CurveVariable>().is_err());
    }

    #[test]
    fn csv_has_header_and_rows() {
        let csv = curve_to_csv(CurveVariable::BetaDp, &[(0.6, 12.5), (0.7, 14.0)]);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines, vec!["dune_height_ratio,beta_dp", "0.6,12.5", "0.7,14"]);
    }

    #[test]
    fn empty_run_has_no_summary() {
        assert!(get_run_summary(&[]).is_err());
    }
}
