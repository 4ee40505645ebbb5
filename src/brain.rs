use crate::config::SimConfig;
use crate::genome::Genome;

/// Length of the observation vector fed to a controller.
pub const OBSERVATION_SIZE: usize = 5;

/// The boundary between the environment and whatever steers the bird:
/// observation in, scalar signal out. Trained networks, hand-written
/// policies, and test stubs all plug in here.
pub trait Controller {
    fn activate(&self, observation: &[f32; OBSERVATION_SIZE]) -> f32;
}

/// Fixed-topology feed-forward network decoded from a genome: 5 inputs, one
/// sigmoid hidden layer, one sigmoid output.
pub struct FeedForwardBrain {
    hidden: usize,
    /// Row-major input weights. [neuron * OBSERVATION_SIZE + input]
    input_weights: Vec<f32>,
    hidden_biases: Vec<f32>,
    output_weights: Vec<f32>,
    output_bias: f32,
    /// Per-component observation scale, mapping raw pixel coordinates to
    /// roughly [0, 1] before the weighted sum.
    input_scale: [f32; OBSERVATION_SIZE],
}

impl FeedForwardBrain {
    pub fn from_genome(genome: &Genome, cfg: &SimConfig) -> Self {
        let hidden = genome.hidden;
        let mut input_weights = vec![0.0; hidden * OBSERVATION_SIZE];
        let mut hidden_biases = vec![0.0; hidden];
        let mut output_weights = vec![0.0; hidden];

        for neuron in 0..hidden {
            for input in 0..OBSERVATION_SIZE {
                input_weights[neuron * OBSERVATION_SIZE + input] = genome.input_weight(neuron, input);
            }
            hidden_biases[neuron] = genome.hidden_bias(neuron);
            output_weights[neuron] = genome.output_weight(neuron);
        }

        let inv_w = 1.0 / cfg.screen_width as f32;
        let inv_h = 1.0 / cfg.screen_height as f32;
        Self {
            hidden,
            input_weights,
            hidden_biases,
            output_weights,
            output_bias: genome.output_bias(),
            // Observation layout: [bird y, upper x, upper bottom, lower x, lower top]
            input_scale: [inv_h, inv_w, inv_h, inv_w, inv_h],
        }
    }
}

impl Controller for FeedForwardBrain {
    fn activate(&self, observation: &[f32; OBSERVATION_SIZE]) -> f32 {
        let mut scaled = [0.0f32; OBSERVATION_SIZE];
        for i in 0..OBSERVATION_SIZE {
            scaled[i] = observation[i] * self.input_scale[i];
        }

        let mut output_sum = self.output_bias;
        for neuron in 0..self.hidden {
            let mut input_sum = self.hidden_biases[neuron];
            let row = neuron * OBSERVATION_SIZE;
            for i in 0..OBSERVATION_SIZE {
                input_sum += self.input_weights[row + i] * scaled[i];
            }
            output_sum += self.output_weights[neuron] * sigmoid(input_sum);
        }
        sigmoid(output_sum)
    }
}

#[inline]
fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn neutral_genome_sits_on_the_decision_boundary() {
        // All genes 0.5 decode to zero weights and biases everywhere, so the
        // output is sigmoid(0) regardless of the observation.
        let genome = Genome {
            hidden: 6,
            genes: vec![0.5; crate::genome::genome_size(6)],
        };
        let brain = FeedForwardBrain::from_genome(&genome, &SimConfig::default());
        let out = brain.activate(&[300.0, 800.0, 240.0, 800.0, 360.0]);
        assert!((out - 0.5).abs() < 1e-6);
    }

    #[test]
    fn outputs_are_finite_and_bounded_for_extreme_observations() {
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        let cfg = SimConfig::default();
        for _ in 0..50 {
            let genome = Genome::random(6, &mut rng);
            let brain = FeedForwardBrain::from_genome(&genome, &cfg);
            for obs in [
                [0.0, 0.0, 0.0, 0.0, 0.0],
                [600.0, 800.0, 600.0, 800.0, 600.0],
                [-50.0, 800.0, 0.0, 800.0, 120.0],
            ] {
                let out = brain.activate(&obs);
                assert!(out.is_finite());
                assert!((0.0..=1.0).contains(&out));
            }
        }
    }

    #[test]
    fn distinct_observations_produce_distinct_signals() {
        let mut rng = ChaCha8Rng::seed_from_u64(32);
        let cfg = SimConfig::default();
        let genome = Genome::random(6, &mut rng);
        let brain = FeedForwardBrain::from_genome(&genome, &cfg);

        let a = brain.activate(&[100.0, 500.0, 100.0, 500.0, 220.0]);
        let b = brain.activate(&[500.0, 420.0, 300.0, 420.0, 420.0]);
        assert_ne!(a, b);
    }
}
