use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::evolution::Champion;
use crate::genome::{genome_size, Genome};
use crate::reporting::TrainingReport;

const CHAMPION_VERSION: u32 = 1;

/// On-disk form of a trained controller: the genome plus the simulation
/// parameters it was trained against, so replay reconstructs the exact game.
#[derive(Clone, Serialize, Deserialize)]
struct ChampionFile {
    version: u32,
    sim: SimConfig,
    genome: Genome,
    fitness: u32,
    generation: u32,
    seed: u64,
}

/// A validated artifact read back from disk.
#[derive(Clone, Debug)]
pub struct LoadedChampion {
    pub sim: SimConfig,
    pub genome: Genome,
    pub fitness: u32,
    pub generation: u32,
    pub seed: u64,
}

pub fn save_champion(
    path: &str,
    champion: &Champion,
    sim: &SimConfig,
    seed: u64,
) -> Result<(), String> {
    let file = ChampionFile {
        version: CHAMPION_VERSION,
        sim: sim.clone(),
        genome: champion.genome.clone(),
        fitness: champion.fitness,
        generation: champion.generation,
        seed,
    };
    let bytes = bincode::serialize(&file).map_err(|e| format!("Serialize error: {e}"))?;
    std::fs::write(path, bytes).map_err(|e| format!("Write error ({path}): {e}"))?;
    Ok(())
}

/// Load and validate a champion artifact. Fails fast on unreadable files,
/// unknown versions, and genomes whose length does not match their declared
/// hidden-layer width.
pub fn load_champion(path: &str) -> Result<LoadedChampion, String> {
    let bytes = std::fs::read(path).map_err(|e| format!("Read error ({path}): {e}"))?;
    let file: ChampionFile =
        bincode::deserialize(&bytes).map_err(|e| format!("Malformed artifact ({path}): {e}"))?;

    if file.version != CHAMPION_VERSION {
        return Err(format!(
            "Unsupported artifact version {} (expected {CHAMPION_VERSION})",
            file.version
        ));
    }
    let expected = genome_size(file.genome.hidden);
    if file.genome.genes.len() != expected {
        return Err(format!(
            "Genome length {} does not match hidden width {} (expected {expected})",
            file.genome.genes.len(),
            file.genome.hidden
        ));
    }

    Ok(LoadedChampion {
        sim: file.sim,
        genome: file.genome,
        fitness: file.fitness,
        generation: file.generation,
        seed: file.seed,
    })
}

pub fn write_report(path: &str, report: &TrainingReport) -> Result<(), String> {
    let json =
        serde_json::to_string_pretty(report).map_err(|e| format!("Serialize error: {e}"))?;
    std::fs::write(path, json).map_err(|e| format!("Write error ({path}): {e}"))?;
    Ok(())
}
