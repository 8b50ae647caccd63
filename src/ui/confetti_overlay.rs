//! Paints confetti particles on a foreground layer.

use egui::{Color32, Context, Id, LayerId, Order, Painter, Pos2, Shape, Stroke};

use crate::confetti::{ConfettiColor, Particle};

pub fn color32(color: ConfettiColor) -> Color32 {
    let [r, g, b] = color.rgb();
    Color32::from_rgb(r, g, b)
}

/// One filled, rotated rectangle per particle, offset by `origin`
pub fn shapes(particles: &[Particle], origin: Pos2) -> Vec<Shape> {
    particles
        .iter()
        .map(|particle| {
            let points = particle
                .corners()
                .iter()
                .map(|corner| Pos2::new(origin.x + corner.x, origin.y + corner.y))
                .collect();
            Shape::convex_polygon(points, color32(particle.color), Stroke::NONE)
        })
        .collect()
}

/// Foreground painter above all panels; it never takes pointer input
pub fn painter(ctx: &Context) -> Painter {
    ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("confetti_overlay")))
}

pub fn paint(ctx: &Context, particles: &[Particle]) {
    let origin = ctx.screen_rect().min;
    painter(ctx).extend(shapes(particles, origin));
}
