use serde::{Deserialize, Serialize};

/// Distribution of fitness across one generation's population.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitnessSummary {
    pub count: usize,
    pub min: u32,
    pub max: u32,
    pub mean: f64,
    pub p50: u32,
    pub p90: u32,
}

impl Default for FitnessSummary {
    fn default() -> Self {
        Self {
            count: 0,
            min: 0,
            max: 0,
            mean: 0.0,
            p50: 0,
            p90: 0,
        }
    }
}

/// Collects per-candidate fitness values for one generation.
#[derive(Debug, Clone, Default)]
pub struct FitnessAggregator {
    samples: Vec<u32>,
    sum: u64,
}

impl FitnessAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fitness: u32) {
        self.sum += fitness as u64;
        self.samples.push(fitness);
    }

    pub fn summary(&self) -> FitnessSummary {
        if self.samples.is_empty() {
            return FitnessSummary::default();
        }

        let mut sorted = self.samples.clone();
        sorted.sort_unstable();

        FitnessSummary {
            count: self.samples.len(),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            mean: self.sum as f64 / self.samples.len() as f64,
            p50: percentile_nearest_rank(&sorted, 0.50),
            p90: percentile_nearest_rank(&sorted, 0.90),
        }
    }
}

fn percentile_nearest_rank(sorted: &[u32], p: f64) -> u32 {
    if sorted.is_empty() {
        return 0;
    }
    let p = p.clamp(0.0, 1.0);
    let rank = ((p * sorted.len() as f64).ceil() as usize).saturating_sub(1);
    sorted[rank.min(sorted.len() - 1)]
}

/// One line of training history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub generation: u32,
    pub fitness: FitnessSummary,
}

/// Written next to the champion artifact after training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    pub seed: u64,
    pub population_size: usize,
    pub hidden_neurons: usize,
    pub generations_run: u32,
    pub champion_fitness: u32,
    pub champion_generation: u32,
    pub target_reached: bool,
    pub generations: Vec<GenerationRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_percentiles_use_nearest_rank() {
        let mut agg = FitnessAggregator::new();
        for i in 1..=100 {
            agg.push(i);
        }
        let s = agg.summary();
        assert_eq!(s.count, 100);
        assert_eq!(s.min, 1);
        assert_eq!(s.max, 100);
        assert!((s.mean - 50.5).abs() < 1e-9);
        assert_eq!(s.p50, 50);
        assert_eq!(s.p90, 90);
    }

    #[test]
    fn empty_aggregator_yields_default_summary() {
        let agg = FitnessAggregator::new();
        let s = agg.summary();
        assert_eq!(s.count, 0);
        assert_eq!(s.max, 0);
        assert_eq!(s.mean, 0.0);
    }

    #[test]
    fn single_sample_dominates_every_field() {
        let mut agg = FitnessAggregator::new();
        agg.push(7);
        let s = agg.summary();
        assert_eq!(s.count, 1);
        assert_eq!(s.min, 7);
        assert_eq!(s.max, 7);
        assert_eq!(s.p50, 7);
        assert_eq!(s.p90, 7);
    }
}
