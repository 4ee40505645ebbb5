use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::bird::Bird;
use crate::brain::{Controller, OBSERVATION_SIZE};
use crate::config::SimConfig;
use crate::pipe::Pipe;

/// Why an episode ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The score cap was reached; counts as a win.
    ScoreCap,
    /// The bird hit a pipe rect.
    Collision,
    /// The bird left the screen vertically.
    OutOfBounds,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    Over(Outcome),
}

impl Status {
    pub fn is_over(&self) -> bool {
        matches!(self, Status::Over(_))
    }
}

/// One game instance: a bird, a FIFO of pipes ordered oldest-first, and a
/// score. Each instance owns a seeded RNG, so an episode is fully determined
/// by `(config, seed, controller)` and instances can be evaluated in
/// isolation.
pub struct FlappyEnv {
    pub config: SimConfig,
    pub bird: Bird,
    pub pipes: VecDeque<Pipe>,
    pub score: u32,
    rng: ChaCha8Rng,
}

impl FlappyEnv {
    pub fn new(config: SimConfig, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let bird = Bird::new(&config);
        let mut pipes = VecDeque::new();
        pipes.push_back(Pipe::new(config.screen_width, &config, &mut rng));
        Self {
            config,
            bird,
            pipes,
            score: 0,
            rng,
        }
    }

    /// Start a fresh episode in place. The RNG stream keeps rolling, so
    /// consecutive episodes see different pipe sequences.
    pub fn reset(&mut self) {
        self.bird = Bird::new(&self.config);
        self.pipes.clear();
        self.pipes
            .push_back(Pipe::new(self.config.screen_width, &self.config, &mut self.rng));
        self.score = 0;
    }

    /// Observation vector for the controller: the bird's vertical position
    /// and the inner corners of the nearest unpassed pipe's two rects.
    ///
    /// The spawn policy keeps an unpassed pipe queued at all times while the
    /// episode runs, so the lookup failing is a bug in the environment, not a
    /// recoverable condition.
    pub fn observe(&self) -> [f32; OBSERVATION_SIZE] {
        let pipe = self
            .pipes
            .iter()
            .find(|p| !p.passed)
            .expect("pipe queue always holds an unpassed pipe while the episode is running");
        [
            self.bird.rect.y as f32,
            pipe.upper.left() as f32,
            pipe.upper.bottom() as f32,
            pipe.lower.left() as f32,
            pipe.lower.top() as f32,
        ]
    }

    /// Binary action boundary: a controller signal at or above 0.5 flaps this
    /// tick, anything below is a no-op.
    pub fn apply(&mut self, signal: f32) {
        if signal >= 0.5 {
            self.bird.flap(self.config.jump_speed);
        }
    }

    /// Advance the simulation one tick.
    pub fn tick(&mut self) -> Status {
        if self.score >= self.config.score_cap {
            return Status::Over(Outcome::ScoreCap);
        }

        self.bird.update(self.config.gravity);

        for pipe in self.pipes.iter_mut() {
            pipe.update(self.config.movement_speed);
            if pipe.collides(&self.bird.rect) {
                return Status::Over(Outcome::Collision);
            } else if !pipe.passed
                && pipe.right() < self.bird.rect.left()
                && !pipe.collides(&self.bird.rect)
            {
                pipe.passed = true;
                self.score += 1;
            }
        }

        // Spawn once the newest pipe has cleared three pipe-widths of the
        // right edge; retire the oldest once it is fully off screen.
        if let Some(last) = self.pipes.back() {
            if last.right() < self.config.screen_width - self.config.pipe_width * 3 {
                self.pipes
                    .push_back(Pipe::new(self.config.screen_width, &self.config, &mut self.rng));
            }
        }
        if let Some(front) = self.pipes.front() {
            if front.right() < 0 {
                self.pipes.pop_front();
            }
        }

        if self.bird.rect.y > self.config.screen_height || self.bird.rect.y < 0 {
            return Status::Over(Outcome::OutOfBounds);
        }

        Status::Running
    }

    /// Drive a whole episode under `controller` and return the terminal
    /// score, which is the candidate's fitness.
    pub fn run_episode(&mut self, controller: &impl Controller) -> u32 {
        loop {
            if self.tick().is_over() {
                return self.score;
            }
            let signal = controller.activate(&self.observe());
            self.apply(signal);
        }
    }
}
