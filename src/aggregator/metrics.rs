//! Summary metrics over an aggregation.
//!
//! Hot stacks are the stacks observed most often. These are the
//! first places to look when reading a profile.

use super::aggregation::Aggregation;
use crate::utils::config::STACK_DELIMITER;
use log::debug;

/// A stack ranked by how often it was sampled
#[derive(Debug, Clone, PartialEq)]
pub struct HotStack {
    pub stack: String,
    pub count: u64,
    pub percentage: f64,
}

/// Calculate the hottest stacks
///
/// **Public** - used for the render summary
///
/// # Arguments
/// * `aggregation` - Aggregated stacks
/// * `top_n` - Number of stacks to return
///
/// # Returns
/// Stacks sorted by count (descending), ties broken by signature
pub fn calculate_hot_stacks(aggregation: &Aggregation, top_n: usize) -> Vec<HotStack> {
    debug!(
        "Calculating top {} hot stacks from {} stacks",
        top_n,
        aggregation.len()
    );

    let total = total_samples(aggregation.iter().map(|(_, s)| s.count));

    let mut ranked: Vec<(&String, u64)> = aggregation
        .iter()
        .map(|(stack, sample)| (stack, sample.count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    ranked
        .into_iter()
        .take(top_n)
        .map(|(stack, count)| HotStack {
            stack: stack.clone(),
            count,
            percentage: percentage_of(count, total),
        })
        .collect()
}

/// Sum of counts, saturating at `u64::MAX`
fn total_samples(counts: impl IntoIterator<Item = u64>) -> u64 {
    counts.into_iter().fold(0u64, u64::saturating_add)
}

fn percentage_of(count: u64, total: u64) -> f64 {
    if total > 0 {
        (count as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

/// Sample distribution statistics
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleDistribution {
    /// Total samples across all stacks
    pub total_samples: u64,

    /// Number of unique stacks
    pub stack_count: usize,

    pub mean_samples_per_stack: u64,
    pub median_samples_per_stack: u64,

    /// Deepest stack, in frames
    pub max_depth: usize,
}

/// Calculate sample distribution statistics
pub fn calculate_sample_distribution(aggregation: &Aggregation) -> SampleDistribution {
    if aggregation.is_empty() {
        return SampleDistribution::default();
    }

    let mut counts: Vec<u64> = aggregation.iter().map(|(_, s)| s.count).collect();
    counts.sort_unstable();

    let total = total_samples(counts.iter().copied());
    let stack_count = counts.len();

    let max_depth = aggregation
        .iter()
        .map(|(stack, _)| stack.split(STACK_DELIMITER).count())
        .max()
        .unwrap_or(0);

    SampleDistribution {
        total_samples: total,
        stack_count,
        mean_samples_per_stack: total / stack_count as u64,
        median_samples_per_stack: counts[stack_count / 2],
        max_depth,
    }
}

impl SampleDistribution {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Samples: {} | Stacks: {} | Mean: {} | Median: {} | Max depth: {}",
            self.total_samples,
            self.stack_count,
            self.mean_samples_per_stack,
            self.median_samples_per_stack,
            self.max_depth
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregation::StackSample;

    fn aggregation_of(entries: &[(&str, u64)]) -> Aggregation {
        entries
            .iter()
            .map(|(stack, count)| (stack.to_string(), StackSample::new(*count, vec![])))
            .collect()
    }

    #[test]
    fn test_calculate_hot_stacks() {
        let aggregation = aggregation_of(&[
            ("main;compute", 2),
            ("main;execute", 5),
            ("main;storage", 3),
        ]);

        let hot = calculate_hot_stacks(&aggregation, 2);

        assert_eq!(hot.len(), 2);
        assert_eq!(hot[0].stack, "main;execute");
        assert_eq!(hot[0].count, 5);
        assert_eq!(hot[0].percentage, 50.0);
        assert_eq!(hot[1].stack, "main;storage");
    }

    #[test]
    fn test_hot_stacks_ties_sorted_by_signature() {
        let aggregation = aggregation_of(&[("b", 1), ("a", 1)]);

        let hot = calculate_hot_stacks(&aggregation, 10);

        assert_eq!(hot[0].stack, "a");
        assert_eq!(hot[1].stack, "b");
    }

    #[test]
    fn test_calculate_sample_distribution() {
        let aggregation = aggregation_of(&[("a", 8), ("a;b", 1), ("a;b;c", 1), ("d", 2)]);

        let dist = calculate_sample_distribution(&aggregation);

        assert_eq!(dist.total_samples, 12);
        assert_eq!(dist.stack_count, 4);
        assert_eq!(dist.mean_samples_per_stack, 3);
        assert_eq!(dist.median_samples_per_stack, 2);
        assert_eq!(dist.max_depth, 3);
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let aggregation = aggregation_of(&[("a", u64::MAX), ("b", 1)]);

        let dist = calculate_sample_distribution(&aggregation);
        assert_eq!(dist.total_samples, u64::MAX);
        assert_eq!(dist.stack_count, 2);

        let hot = calculate_hot_stacks(&aggregation, 10);
        assert_eq!(hot[0].stack, "a");
        assert_eq!(hot[0].percentage, 100.0);
    }

    #[test]
    fn test_sample_distribution_empty() {
        let dist = calculate_sample_distribution(&Aggregation::new());
        assert_eq!(dist.total_samples, 0);
        assert_eq!(dist.stack_count, 0);
    }
}
