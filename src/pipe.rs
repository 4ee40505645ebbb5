use rand::Rng;

use crate::config::SimConfig;
use crate::rect::Rect;

/// One obstacle: an upper and a lower rect sharing the same x and width,
/// separated by a fixed vertical gap. Pipes only ever translate left.
#[derive(Clone, Debug)]
pub struct Pipe {
    pub upper: Rect,
    pub lower: Rect,
    pub passed: bool,
}

impl Pipe {
    /// Construct at `x` with the gap's vertical offset drawn uniformly from
    /// `[0, screen_height - gap_size]`.
    pub fn new(x: i32, cfg: &SimConfig, rng: &mut impl Rng) -> Self {
        let split = rng.gen_range(0..=cfg.screen_height - cfg.gap_size);
        Self {
            upper: Rect::new(x, 0, cfg.pipe_width, split),
            lower: Rect::new(
                x,
                split + cfg.gap_size,
                cfg.pipe_width,
                cfg.screen_height - split - cfg.gap_size,
            ),
            passed: false,
        }
    }

    /// Translate both rects left by the per-tick movement speed.
    pub fn update(&mut self, speed: i32) {
        self.upper.translate(-speed, 0);
        self.lower.translate(-speed, 0);
    }

    pub fn collides(&self, other: &Rect) -> bool {
        self.upper.overlaps(other) || self.lower.overlaps(other)
    }

    /// Trailing edge shared by both rects.
    pub fn right(&self) -> i32 {
        self.upper.right()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn gap_invariant_holds_for_any_split() {
        let cfg = SimConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let pipe = Pipe::new(cfg.screen_width, &cfg, &mut rng);
            assert_eq!(pipe.upper.bottom() + cfg.gap_size, pipe.lower.top());
            assert_eq!(pipe.upper.x, pipe.lower.x);
            assert_eq!(pipe.upper.w, cfg.pipe_width);
            assert_eq!(pipe.lower.w, cfg.pipe_width);
            assert!(pipe.upper.top() == 0);
            assert!(pipe.lower.bottom() == cfg.screen_height);
            assert!((0..=cfg.screen_height - cfg.gap_size).contains(&pipe.upper.h));
        }
    }

    #[test]
    fn update_translates_left_without_vertical_motion() {
        let cfg = SimConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut pipe = Pipe::new(cfg.screen_width, &cfg, &mut rng);
        let upper_before = pipe.upper;
        let lower_before = pipe.lower;

        pipe.update(cfg.movement_speed);

        assert_eq!(pipe.upper.x, upper_before.x - cfg.movement_speed);
        assert_eq!(pipe.lower.x, lower_before.x - cfg.movement_speed);
        assert_eq!(pipe.upper.y, upper_before.y);
        assert_eq!(pipe.lower.y, lower_before.y);
    }

    #[test]
    fn pipe_reaches_left_edge_after_half_screen_width_ticks() {
        let cfg = SimConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let mut pipe = Pipe::new(cfg.screen_width, &cfg, &mut rng);

        for _ in 0..cfg.screen_width / cfg.movement_speed {
            pipe.update(cfg.movement_speed);
        }
        assert_eq!(pipe.upper.x, 0);
    }

    #[test]
    fn collides_against_either_rect() {
        let cfg = SimConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let pipe = Pipe::new(100, &cfg, &mut rng);

        let in_upper = Rect::new(100, pipe.upper.top(), 10, 10);
        let in_lower = Rect::new(100, pipe.lower.top(), 10, 10);
        let in_gap = Rect::new(100, pipe.upper.bottom() + 1, 10, cfg.gap_size - 2);

        assert!(pipe.collides(&in_upper) || pipe.upper.h == 0);
        assert!(pipe.collides(&in_lower) || pipe.lower.h == 0);
        assert!(!pipe.collides(&in_gap));
    }
}
