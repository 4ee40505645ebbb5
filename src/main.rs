use macroquad::prelude::*;

mod bird;
mod brain;
mod config;
mod environment;
mod evolution;
mod genome;
mod pipe;
mod rect;
mod renderer;
mod reporting;
mod save_load;

use brain::{Controller, FeedForwardBrain};
use config::{EvoConfig, SimConfig, TICK_DT};
use environment::FlappyEnv;

const DEFAULT_ARTIFACT: &str = "fledge_champion.bin";
const REPORT_PATH: &str = "fledge_training.json";

const USAGE: &str = "usage: fledge train [--seed N] [--out PATH] | fledge replay [PATH]";

#[derive(Clone, Debug, PartialEq, Eq)]
enum Mode {
    Train { seed: u64, out: String },
    Replay { path: String },
}

fn parse_mode(args: &[String]) -> Result<Mode, String> {
    match args.first().map(String::as_str) {
        Some("train") => {
            let mut seed = 42u64;
            let mut out = DEFAULT_ARTIFACT.to_string();
            let mut i = 1;
            while i < args.len() {
                match args[i].as_str() {
                    "--seed" => {
                        i += 1;
                        let value = args.get(i).ok_or_else(|| "--seed needs a value".to_string())?;
                        seed = value.parse().map_err(|e| format!("bad --seed {value}: {e}"))?;
                    }
                    "--out" => {
                        i += 1;
                        out = args
                            .get(i)
                            .ok_or_else(|| "--out needs a value".to_string())?
                            .clone();
                    }
                    other => return Err(format!("unknown train option {other}\n{USAGE}")),
                }
                i += 1;
            }
            Ok(Mode::Train { seed, out })
        }
        Some("replay") => {
            if args.len() > 2 {
                return Err(format!("replay takes at most one path\n{USAGE}"));
            }
            let path = args.get(1).cloned().unwrap_or_else(|| DEFAULT_ARTIFACT.to_string());
            Ok(Mode::Replay { path })
        }
        _ => Err(USAGE.to_string()),
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "FLEDGE — Flappy Bird Neuroevolution".to_string(),
        window_width: 800,
        window_height: 600,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mode = match parse_mode(&args) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("[FLEDGE] {e}");
            std::process::exit(2);
        }
    };

    let (sim, genome, caption) = match mode {
        Mode::Train { seed, out } => {
            let sim = SimConfig::default();
            let evo = EvoConfig::default();
            eprintln!(
                "[FLEDGE] Training population {} for up to {} generations (seed {seed})",
                evo.population_size, evo.max_generations
            );
            let result = evolution::train(&sim, &evo, seed);
            match save_load::save_champion(&out, &result.champion, &sim, seed) {
                Ok(()) => eprintln!(
                    "[FLEDGE] Saved champion to {out} (fitness {}, gen {})",
                    result.champion.fitness, result.champion.generation
                ),
                Err(e) => {
                    eprintln!("[FLEDGE] Save failed: {e}");
                    std::process::exit(1);
                }
            }
            match save_load::write_report(REPORT_PATH, &result.report) {
                Ok(()) => eprintln!("[FLEDGE] Wrote training report to {REPORT_PATH}"),
                Err(e) => eprintln!("[FLEDGE] Report write failed: {e}"),
            }
            let caption = format!(
                "champion: gen {} fitness {}",
                result.champion.generation, result.champion.fitness
            );
            (sim, result.champion.genome, caption)
        }
        Mode::Replay { path } => match save_load::load_champion(&path) {
            Ok(loaded) => {
                eprintln!(
                    "[FLEDGE] Loaded {path} (fitness {}, gen {})",
                    loaded.fitness, loaded.generation
                );
                let caption = format!("champion: gen {} fitness {}", loaded.generation, loaded.fitness);
                (loaded.sim, loaded.genome, caption)
            }
            Err(e) => {
                eprintln!("[FLEDGE] Load failed: {e}");
                std::process::exit(1);
            }
        },
    };

    let brain = FeedForwardBrain::from_genome(&genome, &sim);
    let mut env = FlappyEnv::new(sim, ::rand::random::<u64>());
    let mut accumulator = 0.0f64;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        accumulator += (get_frame_time() as f64).min(0.1);
        while accumulator >= TICK_DT as f64 {
            let signal = brain.activate(&env.observe());
            env.apply(signal);
            if env.tick().is_over() {
                env.reset();
            }
            accumulator -= TICK_DT as f64;
        }

        renderer::draw(&env, &caption);
        next_frame().await;
    }
}
