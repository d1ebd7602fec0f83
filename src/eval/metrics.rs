//! Set-comparison counts and the precision/recall/F1 derived from them.

use std::collections::BTreeSet;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// True positive, false positive and false negative counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    /// Annotations in both gold and prediction.
    pub tp: usize,
    /// Predicted annotations absent from gold.
    pub fp: usize,
    /// Gold annotations absent from the prediction.
    #[serde(rename = "fn")]
    pub fn_: usize,
}

impl Counts {
    /// Create counts from raw numbers.
    #[must_use]
    pub fn new(tp: usize, fp: usize, fn_: usize) -> Self {
        Self { tp, fp, fn_ }
    }

    /// Compare one gold set against one predicted set.
    #[must_use]
    pub fn compare<T: Ord>(gold: &BTreeSet<T>, pred: &BTreeSet<T>) -> Self {
        let tp = gold.intersection(pred).count();
        Self {
            tp,
            fp: pred.len() - tp,
            fn_: gold.len() - tp,
        }
    }

    /// Gold annotations seen (TP + FN).
    #[must_use]
    pub fn gold(&self) -> usize {
        self.tp + self.fn_
    }

    /// Predicted annotations seen (TP + FP).
    #[must_use]
    pub fn predicted(&self) -> usize {
        self.tp + self.fp
    }

    /// TP / (TP + FP), or 0 when nothing was predicted.
    #[must_use]
    pub fn precision(&self) -> f64 {
        safe_div(self.tp as f64, self.predicted() as f64)
    }

    /// TP / (TP + FN), or 0 when there is no gold.
    #[must_use]
    pub fn recall(&self) -> f64 {
        safe_div(self.tp as f64, self.gold() as f64)
    }

    /// Harmonic mean of precision and recall, or 0 when both are 0.
    #[must_use]
    pub fn f1(&self) -> f64 {
        f1_score(self.precision(), self.recall())
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, other: Self) {
        self.tp += other.tp;
        self.fp += other.fp;
        self.fn_ += other.fn_;
    }
}

impl Add for Counts {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl std::iter::Sum for Counts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Counts::default(), Add::add)
    }
}

/// `numerator / denominator`, or 0 for a zero denominator.
#[must_use]
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// F1 from precision and recall; 0 when `precision + recall` is 0.
#[must_use]
pub fn f1_score(precision: f64, recall: f64) -> f64 {
    safe_div(2.0 * precision * recall, precision + recall)
}
