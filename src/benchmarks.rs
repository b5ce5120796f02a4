//! Static model benchmark dataset and chart scaling math.
//!
//! The comparison chart is a pure function of this fixed dataset; the
//! geometry helpers here keep the scaling logic testable away from egui.

/// One benchmark row: percentage metrics share one axis, latency the other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BenchmarkRow {
    pub model: &'static str,
    pub accuracy_pct: f32,
    pub f1_pct: f32,
    pub latency_ms: f32,
}

/// Reference numbers for the comparison chart.
pub const BENCHMARKS: [BenchmarkRow; 4] = [
    BenchmarkRow {
        model: "ViSoBERT",
        accuracy_pct: 91.0,
        f1_pct: 90.0,
        latency_ms: 42.0,
    },
    BenchmarkRow {
        model: "PhoBERT",
        accuracy_pct: 90.0,
        f1_pct: 89.0,
        latency_ms: 55.0,
    },
    BenchmarkRow {
        model: "XLM-R",
        accuracy_pct: 88.0,
        f1_pct: 87.0,
        latency_ms: 48.0,
    },
    BenchmarkRow {
        model: "mBERT",
        accuracy_pct: 86.0,
        f1_pct: 85.0,
        latency_ms: 60.0,
    },
];

/// Metric highlighted by the chart toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BenchmarkMetric {
    #[default]
    Accuracy,
    F1,
    Latency,
}

impl BenchmarkMetric {
    /// Toggle order shown in the UI.
    pub const ALL: [BenchmarkMetric; 3] = [
        BenchmarkMetric::Accuracy,
        BenchmarkMetric::F1,
        BenchmarkMetric::Latency,
    ];

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            BenchmarkMetric::Accuracy => "Accuracy",
            BenchmarkMetric::F1 => "F1-score",
            BenchmarkMetric::Latency => "Latency",
        }
    }
}

/// Fraction of the percent axis (fixed 0-100) covered by a value.
pub fn percent_fraction(value_pct: f32) -> f32 {
    (value_pct / 100.0).clamp(0.0, 1.0)
}

/// Top of the latency axis: the max latency rounded up to the next ten.
pub fn latency_axis_max(rows: &[BenchmarkRow]) -> f32 {
    let max = rows
        .iter()
        .map(|row| row.latency_ms)
        .fold(0.0_f32, f32::max);
    (max / 10.0).ceil() * 10.0
}

/// Fraction of the latency axis covered by a value.
pub fn latency_fraction(value_ms: f32, axis_max: f32) -> f32 {
    if axis_max <= 0.0 {
        return 0.0;
    }
    (value_ms / axis_max).clamp(0.0, 1.0)
}

/// Horizontal center of slot `index` among `count` equal columns.
pub fn slot_center(index: usize, count: usize, width: f32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let slot = width / count as f32;
    slot * (index as f32 + 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_has_the_four_reference_models() {
        let names: Vec<&str> = BENCHMARKS.iter().map(|row| row.model).collect();
        assert_eq!(names, ["ViSoBERT", "PhoBERT", "XLM-R", "mBERT"]);
    }

    #[test]
    fn latency_axis_rounds_up_to_tens() {
        assert_eq!(latency_axis_max(&BENCHMARKS), 60.0);
        let rows = [BenchmarkRow {
            model: "x",
            accuracy_pct: 0.0,
            f1_pct: 0.0,
            latency_ms: 61.0,
        }];
        assert_eq!(latency_axis_max(&rows), 70.0);
    }

    #[test]
    fn fractions_are_clamped_and_deterministic() {
        assert_eq!(percent_fraction(91.0), 0.91);
        assert_eq!(percent_fraction(150.0), 1.0);
        assert_eq!(latency_fraction(42.0, 60.0), 0.7);
        assert_eq!(latency_fraction(10.0, 0.0), 0.0);
        // Same input, same output: the chart is a pure function of its data.
        assert_eq!(percent_fraction(88.0), percent_fraction(88.0));
    }

    #[test]
    fn slot_centers_divide_the_width_evenly() {
        assert_eq!(slot_center(0, 4, 400.0), 50.0);
        assert_eq!(slot_center(3, 4, 400.0), 350.0);
        assert_eq!(slot_center(0, 0, 400.0), 0.0);
    }
}
