use macroquad::prelude::*;

use crate::environment::FlappyEnv;
use crate::rect::Rect;

const SKY_TOP: Color = Color::new(0.27, 0.71, 0.78, 1.0);
const PIPE_GREEN: Color = Color::new(0.39, 0.75, 0.18, 1.0);
const PIPE_EDGE: Color = Color::new(0.24, 0.47, 0.10, 1.0);
const BIRD_YELLOW: Color = Color::new(0.96, 0.78, 0.26, 1.0);
const BIRD_EDGE: Color = Color::new(0.84, 0.65, 0.14, 1.0);
const HUD_TEXT: Color = Color::new(1.0, 1.0, 1.0, 1.0);
const HUD_SHADOW: Color = Color::new(0.0, 0.0, 0.0, 0.55);

/// Draw one frame: scene plus HUD.
pub fn draw(env: &FlappyEnv, caption: &str) {
    clear_background(SKY_TOP);

    for pipe in &env.pipes {
        draw_box(&pipe.upper, PIPE_GREEN, PIPE_EDGE);
        draw_box(&pipe.lower, PIPE_GREEN, PIPE_EDGE);
    }
    draw_box(&env.bird.rect, BIRD_YELLOW, BIRD_EDGE);

    draw_hud(env.score, caption);
}

fn draw_box(rect: &Rect, fill: Color, edge: Color) {
    let (x, y) = (rect.x as f32, rect.y as f32);
    let (w, h) = (rect.w as f32, rect.h as f32);
    draw_rectangle(x, y, w, h, fill);
    draw_rectangle_lines(x, y, w, h, 2.0, edge);
}

fn draw_hud(score: u32, caption: &str) {
    let score_text = format!("Score: {score}");
    draw_text(&score_text, 11.0, 31.0, 32.0, HUD_SHADOW);
    draw_text(&score_text, 10.0, 30.0, 32.0, HUD_TEXT);

    draw_text(caption, 11.0, 53.0, 18.0, HUD_SHADOW);
    draw_text(caption, 10.0, 52.0, 18.0, HUD_TEXT);
}
