//! Coordinator module
//!
//! Drives a full run: generates the test cases, times the sequential
//! baseline and the parallel reduction on each, and collects one
//! `CaseReport` per case.

use crate::config::Config;
use crate::dataset::{self, TestCase};
use crate::output::{CaseReport, MethodResult};
use crate::reduce::{parallel_max, timed_sequential_max, ReduceError, Reduction};
use crate::util::time::speedup;
use crate::Result;
use anyhow::Context;
use std::time::Duration;

/// Run both methods on every generated case
pub fn run(config: &Config) -> Result<Vec<CaseReport>> {
    dataset::build_cases(config.size, &config.dataset)
        .iter()
        .enumerate()
        .map(|(i, case)| run_case(i + 1, case, config.workers, config.runs))
        .collect()
}

/// Time both methods on one case, keeping the fastest of `runs` attempts
///
/// Every attempt must succeed; the maximum is identical across attempts
/// because the sequence does not change.
pub fn run_case(number: usize, case: &TestCase, workers: usize, runs: usize) -> Result<CaseReport> {
    let runs = runs.max(1);
    let mut sequential: Option<MethodResult> = None;
    let mut parallel: Option<MethodResult> = None;
    let mut workers_used = workers;

    for attempt in 0..runs {
        let (max, duration) = timed_sequential_max(&case.values)
            .with_context(|| format!("Sequential scan failed on case {}", number))?;
        sequential = Some(fastest(sequential, MethodResult { max, duration }));

        let Reduction { value, elapsed, workers: used } = parallel_max(&case.values, workers)
            .map_err(|e| {
                let context = failure_context(number, &e);
                anyhow::Error::new(e).context(context)
            })?;
        workers_used = used;
        parallel = Some(fastest(parallel, MethodResult { max: value, duration: elapsed }));

        log::debug!(
            "case {} attempt {}: sequential {:?}, parallel {:?} on {} workers",
            number,
            attempt + 1,
            sequential.map(|r| r.duration),
            parallel.map(|r| r.duration),
            used
        );
    }

    let sequential = sequential.context("no sequential run recorded")?;
    let parallel = parallel.context("no parallel run recorded")?;

    Ok(CaseReport {
        case: number,
        kind: case.kind,
        size: case.values.len(),
        workers_requested: workers,
        workers_used,
        sequential,
        parallel,
        speedup: speedup(sequential.duration, parallel.duration),
    })
}

/// Describe where a parallel reduction failed
fn failure_context(number: usize, err: &ReduceError) -> String {
    if err.is_worker_side() {
        format!("Parallel reduction on case {}: a worker failed", number)
    } else {
        format!("Parallel reduction on case {}: request not run to completion", number)
    }
}

fn fastest(best: Option<MethodResult>, candidate: MethodResult) -> MethodResult {
    match best {
        Some(best) if best.duration <= candidate.duration => best,
        _ => candidate,
    }
}

/// Total time spent in each method across all reports
pub fn total_durations(reports: &[CaseReport]) -> (Duration, Duration) {
    reports.iter().fold((Duration::ZERO, Duration::ZERO), |(s, p), r| {
        (s + r.sequential.duration, p + r.parallel.duration)
    })
}
