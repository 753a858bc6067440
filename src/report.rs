//! CSV result appender.
//!
//! One semicolon-separated row per run, appended so repeated experiments
//! accumulate in the same file. The header is written only when the file is
//! empty.

use crate::{descent::DescentReport, params::Params};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

const HEADER: &str = "Instance;Seed;Alpha;Beta;P_Limit;P_Str;Asp;SI;SF;Dev(%);Time(s);TotalIter";

/// Append one result row to `path`, creating the file on first use.
pub fn append_row<P: AsRef<Path>>(
    path: P,
    instance: &str,
    seed: u64,
    p: &Params,
    report: &DescentReport,
) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if file.metadata()?.len() == 0 {
        writeln!(file, "{HEADER}")?;
    }
    writeln!(
        file,
        "{};{};{};{};{};{};{};{};{};{:.2};{:.4};{}",
        instance,
        seed,
        p.alpha,
        p.beta,
        p.perturbation_limit,
        p.perturbation_strength,
        p.aspiration as u8,
        report.initial_k,
        report.best_k,
        report.deviation_pct,
        report.elapsed_secs,
        report.total_iterations,
    )
}
