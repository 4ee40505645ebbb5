use crate::config::SimConfig;
use crate::rect::Rect;

/// The player entity: a square bounding box that only ever moves vertically.
#[derive(Clone, Debug)]
pub struct Bird {
    pub rect: Rect,
    pub velocity: i32,
}

impl Bird {
    /// Spawn at horizontal screen center, vertically centered, at rest.
    pub fn new(cfg: &SimConfig) -> Self {
        Self {
            rect: Rect::new(
                cfg.screen_width / 2,
                cfg.screen_height / 2,
                cfg.bird_size,
                cfg.bird_size,
            ),
            velocity: 0,
        }
    }

    /// One tick of gravity: accumulate velocity, then fall by it. There is no
    /// terminal velocity.
    pub fn update(&mut self, gravity: i32) {
        self.velocity += gravity;
        self.rect.translate(0, self.velocity);
    }

    /// A flap replaces the current velocity outright rather than adding to it.
    pub fn flap(&mut self, jump_speed: i32) {
        self.velocity = jump_speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_accumulates_and_position_follows_velocity() {
        let cfg = SimConfig::default();
        let mut bird = Bird::new(&cfg);
        assert_eq!(bird.rect.y, 300);
        assert_eq!(bird.velocity, 0);

        bird.update(cfg.gravity);
        bird.update(cfg.gravity);
        bird.update(cfg.gravity);

        assert_eq!(bird.velocity, 3);
        assert_eq!(bird.rect.y, 306); // 300 + 1 + 2 + 3
    }

    #[test]
    fn flap_overrides_accumulated_velocity() {
        let cfg = SimConfig::default();
        let mut bird = Bird::new(&cfg);
        for _ in 0..20 {
            bird.update(cfg.gravity);
        }
        assert_eq!(bird.velocity, 20);

        bird.flap(cfg.jump_speed);
        assert_eq!(bird.velocity, -10);
    }

    #[test]
    fn horizontal_position_never_changes() {
        let cfg = SimConfig::default();
        let mut bird = Bird::new(&cfg);
        let x = bird.rect.x;
        for _ in 0..100 {
            bird.update(cfg.gravity);
        }
        bird.flap(cfg.jump_speed);
        assert_eq!(bird.rect.x, x);
    }
}
