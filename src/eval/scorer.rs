//! Set-based scoring of predictions against gold annotations.

use std::collections::BTreeSet;

use super::loader::{AnnotationFile, SampleId};
use super::metrics::Counts;
use super::normalize::Normalizer;
use super::report::EvalReport;
use crate::Task;

/// Counts for one task, summed over every sample of either file.
///
/// A sample missing from one side contributes an empty set for that side.
#[must_use]
pub fn score_task(
    gold: &AnnotationFile,
    pred: &AnnotationFile,
    task: Task,
    normalizer: &Normalizer,
) -> Counts {
    sample_union(gold, pred)
        .into_iter()
        .map(|id| {
            let g = normalizer.annotations(task, gold.payloads(id, task));
            let p = normalizer.annotations(task, pred.payloads(id, task));
            Counts::compare(&g, &p)
        })
        .sum()
}

/// Score every task in `tasks`, in order, and add the overall row.
#[must_use]
pub fn evaluate(
    gold: &AnnotationFile,
    pred: &AnnotationFile,
    tasks: &[Task],
    normalizer: &Normalizer,
) -> EvalReport {
    let counts = tasks
        .iter()
        .map(|&task| {
            let c = score_task(gold, pred, task, normalizer);
            log::debug!("{}: tp={} fp={} fn={}", task, c.tp, c.fp, c.fn_);
            (task, c)
        })
        .collect();
    EvalReport::from_counts(counts)
}

/// Sample ids present in either file, sorted.
#[must_use]
pub fn sample_union<'a>(gold: &'a AnnotationFile, pred: &'a AnnotationFile) -> BTreeSet<&'a SampleId> {
    gold.sample_ids().chain(pred.sample_ids()).collect()
}
