use serde::{Deserialize, Serialize};

// All tunable parameters in one place. Simulation values are fields rather
// than process-wide constants so independent episodes can run with their own
// settings.

/// Fixed timestep for the presentation loop.
pub const TICK_DT: f32 = 1.0 / 60.0;

/// Geometry and physics of one game instance. All lengths are in pixels and
/// all physics is integer-valued per tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    /// Side of the bird's square bounding box.
    pub bird_size: i32,
    /// Vertical opening between a pipe's upper and lower rects.
    pub gap_size: i32,
    pub pipe_width: i32,
    /// Leftward pipe translation per tick.
    pub movement_speed: i32,
    /// Added to the bird's vertical velocity every tick.
    pub gravity: i32,
    /// Velocity set by a flap; negative is up.
    pub jump_speed: i32,
    /// Score at which an episode ends as a win.
    pub score_cap: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        let screen_width = 800;
        let screen_height = 600;
        Self {
            screen_width,
            screen_height,
            bird_size: 20,
            gap_size: screen_height / 5,
            pipe_width: screen_width / 15,
            movement_speed: 2,
            gravity: 1,
            jump_speed: -10,
            score_cap: 9999,
        }
    }
}

/// Hyperparameters of the generational trainer.
#[derive(Clone, Debug)]
pub struct EvoConfig {
    pub population_size: usize,
    pub max_generations: u32,
    /// Fraction of each generation carried over unchanged.
    pub elite_fraction: f32,
    pub tournament_size: usize,
    /// Probability that a child is bred from two parents instead of one.
    pub crossover_rate: f32,
    pub mutation_rate: f32,
    pub mutation_sigma: f32,
    pub hidden_neurons: usize,
    /// Stop training once the best candidate reaches this score.
    pub target_score: u32,
}

impl Default for EvoConfig {
    fn default() -> Self {
        Self {
            population_size: 150,
            max_generations: 300,
            elite_fraction: 0.2,
            tournament_size: 3,
            crossover_rate: 0.75,
            mutation_rate: 0.05,
            mutation_sigma: 0.1,
            hidden_neurons: 6,
            target_score: 50,
        }
    }
}

impl EvoConfig {
    pub fn elite_count(&self) -> usize {
        ((self.population_size as f32 * self.elite_fraction) as usize).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry_derives_from_screen_dims() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.gap_size, cfg.screen_height / 5);
        assert_eq!(cfg.pipe_width, cfg.screen_width / 15);
    }

    #[test]
    fn elite_count_is_at_least_one() {
        let mut evo = EvoConfig::default();
        assert_eq!(evo.elite_count(), 30);
        evo.population_size = 3;
        evo.elite_fraction = 0.1;
        assert_eq!(evo.elite_count(), 1);
    }
}
