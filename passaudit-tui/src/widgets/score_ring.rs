//! Score ring: the score as a partially drawn circle.

use std::f64::consts::{FRAC_PI_2, TAU};

use ratatui::{
    style::{Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        Block,
        canvas::{Canvas, Circle, Context, Points},
    },
};

use crate::Theme;
use crate::report::ScoreRing;

/// Radius of the ring in canvas units.
pub const RING_RADIUS: f64 = 1.0;

/// Number of points in a full ring.
const ARC_STEPS: usize = 180;

/// Canvas half-width; leaves room for the braille stroke.
const BOUNDS: f64 = 1.2;

pub struct ScoreRingWidget<'a> {
    ring: &'a ScoreRing,
    theme: &'a Theme,
}

impl<'a> ScoreRingWidget<'a> {
    pub fn new(ring: &'a ScoreRing, theme: &'a Theme) -> Self {
        Self { ring, theme }
    }

    /// Points along the drawn arc, clockwise from twelve o'clock.
    pub fn arc_points(&self) -> Vec<(f64, f64)> {
        let steps = (self.ring.drawn_fraction() * ARC_STEPS as f64).round() as usize;
        (0..steps.min(ARC_STEPS))
            .map(|i| {
                let theta = FRAC_PI_2 - TAU * i as f64 / ARC_STEPS as f64;
                (RING_RADIUS * theta.cos(), RING_RADIUS * theta.sin())
            })
            .collect()
    }

    /// Converts the ring to a renderable canvas: a dim track, the arc in the
    /// risk color, and the raw score in the middle.
    pub fn to_canvas(&self) -> Canvas<'a, impl Fn(&mut Context<'_>) + 'a> {
        let points = self.arc_points();
        let stroke = self.ring.stroke.to_color(self.theme.fg);
        let track = self.theme.track;
        let score_text = self.ring.score_text();
        let text_style = Style::default().fg(stroke).add_modifier(Modifier::BOLD);
        let text_x = -0.08 * score_text.len() as f64;

        Canvas::default()
            .block(Block::bordered().border_style(Style::default().fg(self.theme.border)))
            .marker(Marker::Braille)
            .x_bounds([-BOUNDS, BOUNDS])
            .y_bounds([-BOUNDS, BOUNDS])
            .paint(move |ctx| {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: RING_RADIUS,
                    color: track,
                });
                ctx.layer();
                ctx.draw(&Points {
                    coords: &points,
                    color: stroke,
                });
                ctx.print(text_x, 0.0, Line::styled(score_text.clone(), text_style));
            })
    }
}
