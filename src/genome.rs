use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::brain::OBSERVATION_SIZE;

/// Evolvable parameters of one controller.
///
/// Raw gene values are normalized to `[0, 1]`.
/// Layout: [input weights: hidden * 5] [hidden biases: hidden]
/// [output weights: hidden] [output bias: 1]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Genome {
    /// Hidden-layer width the genes encode.
    pub hidden: usize,
    pub genes: Vec<f32>,
}

/// Gene count for a given hidden-layer width.
pub fn genome_size(hidden: usize) -> usize {
    hidden * OBSERVATION_SIZE + hidden + hidden + 1
}

/// Decode a `[0,1]` gene into a weight in `[-4, 4]`.
fn decode(gene: f32) -> f32 {
    (gene - 0.5) * 8.0
}

impl Genome {
    pub fn random(hidden: usize, rng: &mut impl Rng) -> Self {
        let genes = (0..genome_size(hidden)).map(|_| rng.gen_range(0.0..1.0)).collect();
        Self { hidden, genes }
    }

    /// Per-gene perturbation: each gene shifts by `U(-sigma, sigma)` with
    /// probability `rate`, clamped back into `[0, 1]`.
    pub fn mutate(&self, rate: f32, sigma: f32, rng: &mut impl Rng) -> Self {
        let mut child = self.clone();
        for gene in &mut child.genes {
            if rng.gen::<f32>() < rate {
                *gene += rng.gen_range(-sigma..sigma);
                *gene = gene.clamp(0.0, 1.0);
            }
        }
        child
    }

    /// Uniform crossover: each gene comes from either parent with equal
    /// probability. Both parents must share a hidden-layer width.
    pub fn crossover(&self, other: &Genome, rng: &mut impl Rng) -> Self {
        debug_assert_eq!(self.hidden, other.hidden);
        let genes = self
            .genes
            .iter()
            .zip(&other.genes)
            .map(|(a, b)| if rng.gen::<bool>() { *a } else { *b })
            .collect();
        Self {
            hidden: self.hidden,
            genes,
        }
    }

    // --- Decoded views ---

    pub fn input_weight(&self, neuron: usize, input: usize) -> f32 {
        decode(self.genes[neuron * OBSERVATION_SIZE + input])
    }

    pub fn hidden_bias(&self, neuron: usize) -> f32 {
        decode(self.genes[self.hidden * OBSERVATION_SIZE + neuron])
    }

    pub fn output_weight(&self, neuron: usize) -> f32 {
        decode(self.genes[self.hidden * OBSERVATION_SIZE + self.hidden + neuron])
    }

    pub fn output_bias(&self) -> f32 {
        decode(self.genes[self.hidden * OBSERVATION_SIZE + self.hidden * 2])
    }
}
