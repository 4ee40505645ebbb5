use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::brain::FeedForwardBrain;
use crate::config::{EvoConfig, SimConfig};
use crate::environment::FlappyEnv;
use crate::genome::Genome;
use crate::reporting::{FitnessAggregator, GenerationRecord, TrainingReport};

/// Best controller found by a training run.
#[derive(Clone, Debug)]
pub struct Champion {
    pub genome: Genome,
    pub fitness: u32,
    pub generation: u32,
}

pub struct TrainingResult {
    pub champion: Champion,
    pub report: TrainingReport,
}

/// Evolve a population of controllers. Fitness is the terminal score of one
/// full episode; every candidate in a generation plays the same pipe
/// sequence so selection compares controllers, not episode luck.
pub fn train(sim: &SimConfig, evo: &EvoConfig, seed: u64) -> TrainingResult {
    assert!(evo.population_size > 0, "population must not be empty");
    assert!(evo.max_generations > 0, "need at least one generation");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut population: Vec<Genome> = (0..evo.population_size)
        .map(|_| Genome::random(evo.hidden_neurons, &mut rng))
        .collect();

    let stop_score = evo.target_score.min(sim.score_cap);
    let mut champion: Option<Champion> = None;
    let mut records = Vec::new();
    let mut target_reached = false;
    let mut generations_run = 0;

    for generation in 0..evo.max_generations {
        generations_run = generation + 1;
        let episode_seed = seed.wrapping_add(generation as u64 + 1);

        let mut aggregator = FitnessAggregator::new();
        let mut fitness = Vec::with_capacity(population.len());
        for genome in &population {
            let brain = FeedForwardBrain::from_genome(genome, sim);
            let mut env = FlappyEnv::new(sim.clone(), episode_seed);
            let score = env.run_episode(&brain);
            aggregator.push(score);
            fitness.push(score);
        }

        let summary = aggregator.summary();
        eprintln!(
            "[FLEDGE] gen {generation:>3} best {:>4} mean {:>7.2} p90 {:>4}",
            summary.max, summary.mean, summary.p90
        );
        records.push(GenerationRecord {
            generation,
            fitness: summary.clone(),
        });

        let best_idx = (0..population.len())
            .max_by_key(|i| fitness[*i])
            .unwrap_or(0);
        if champion
            .as_ref()
            .map(|c| fitness[best_idx] > c.fitness)
            .unwrap_or(true)
        {
            champion = Some(Champion {
                genome: population[best_idx].clone(),
                fitness: fitness[best_idx],
                generation,
            });
        }

        if summary.max >= stop_score {
            target_reached = true;
            break;
        }
        if generation + 1 == evo.max_generations {
            break;
        }

        population = breed(&population, &fitness, evo, &mut rng);
    }

    let champion = champion.expect("at least one generation was evaluated");
    let report = TrainingReport {
        seed,
        population_size: evo.population_size,
        hidden_neurons: evo.hidden_neurons,
        generations_run,
        champion_fitness: champion.fitness,
        champion_generation: champion.generation,
        target_reached,
        generations: records,
    };

    TrainingResult { champion, report }
}

/// Build the next generation: elites carried unchanged, the rest bred from
/// tournament-selected parents and mutated.
fn breed(
    population: &[Genome],
    fitness: &[u32],
    evo: &EvoConfig,
    rng: &mut ChaCha8Rng,
) -> Vec<Genome> {
    let mut ranked: Vec<usize> = (0..population.len()).collect();
    ranked.sort_by(|a, b| fitness[*b].cmp(&fitness[*a]));

    let mut next = Vec::with_capacity(population.len());
    for idx in ranked.iter().take(evo.elite_count().min(population.len())) {
        next.push(population[*idx].clone());
    }

    while next.len() < population.len() {
        let parent = tournament(population, fitness, evo.tournament_size, rng);
        let child = if rng.gen::<f32>() < evo.crossover_rate {
            let other = tournament(population, fitness, evo.tournament_size, rng);
            parent.crossover(other, rng)
        } else {
            parent.clone()
        };
        next.push(child.mutate(evo.mutation_rate, evo.mutation_sigma, rng));
    }

    next
}

fn tournament<'a>(
    population: &'a [Genome],
    fitness: &[u32],
    size: usize,
    rng: &mut ChaCha8Rng,
) -> &'a Genome {
    let mut best = rng.gen_range(0..population.len());
    for _ in 1..size.max(1) {
        let challenger = rng.gen_range(0..population.len());
        if fitness[challenger] > fitness[best] {
            best = challenger;
        }
    }
    &population[best]
}
