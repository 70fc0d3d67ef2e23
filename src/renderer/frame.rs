//! Frame assembly
//!
//! Turns the simulation into triangles and labels. Pure: the GPU pipeline
//! only uploads what comes out of here.

use glam::Vec2;
use std::f32::consts::{PI, TAU};

use super::shapes::{self, ArrowStyle};
use super::vertex::{Vertex, colors};
use crate::display::DisplayConfig;
use crate::sim::{CircularScene, DecayScene, RingBuffer, RotationScene, Scene, Simulation};
use crate::tangent_of;
use crate::ui::hud::{hud_labels, legend_origin, plot_rect};
use crate::ui::{Label, Rect};

/// Angles sampled around each vector-field ring
const FIELD_POINTS: usize = 72;
/// Field rings as multiples of the reference orbit
const FIELD_RADIUS_FACTORS: [f32; 3] = [0.5, 1.0, 1.5];

/// Everything needed to present one frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub vertices: Vec<Vertex>,
    pub labels: Vec<Label>,
}

pub fn build_frame(sim: &Simulation) -> Frame {
    let mut vertices = Vec::with_capacity(16 * 1024);
    let display = &sim.display;

    match &sim.scene {
        Scene::Decay(scene) => decay_geometry(&mut vertices, scene, display),
        Scene::Rotation(scene) => rotation_geometry(&mut vertices, scene, display),
        Scene::Circular(scene) => circular_geometry(&mut vertices, scene, display),
    }

    let field = sim.omega_input.rect(display);
    let border = if sim.omega_input.focused {
        colors::INPUT_FOCUSED
    } else {
        colors::INPUT_IDLE
    };
    shapes::rect(&mut vertices, field.min, field.size, colors::PLOT_BACKGROUND);
    shapes::rect_outline(
        &mut vertices,
        field.min,
        field.size,
        display.thickness(2.0, 1.0),
        border,
    );

    Frame {
        vertices,
        labels: hud_labels(sim),
    }
}

fn trail(out: &mut Vec<Vertex>, trail: &RingBuffer<Vec2>, width: f32, color: [f32; 4]) {
    if trail.len() > 1 {
        shapes::polyline(out, trail.iter(), width, color);
    }
}

fn decay_geometry(out: &mut Vec<Vertex>, scene: &DecayScene, display: &DisplayConfig) {
    let s = display.scale();
    let center = display.center();
    let reference_radius = scene.params.initial_orbit_radius * s;

    if scene.show_vector_field {
        vector_field(out, scene, display, reference_radius);
    }

    if scene.show_trail {
        trail(out, &scene.trail, display.thickness(2.0, 1.0), colors::BLUE);
    }

    let vectors = scene.vectors(display);
    let body = vectors.body();
    let head = display.arrow_size();
    shapes::arrow(
        out,
        center,
        vectors.position,
        ArrowStyle {
            scale: 1.0,
            width: display.thickness(2.0, 2.0),
            head,
            color: colors::WHITE,
        },
    );
    if let Some(velocity) = vectors.velocity {
        shapes::arrow(
            out,
            body,
            velocity,
            ArrowStyle {
                scale: 50.0 * s,
                width: display.thickness(3.0, 3.0),
                head,
                color: colors::RED,
            },
        );
    }
    if let Some(acceleration) = vectors.acceleration {
        shapes::arrow(
            out,
            body,
            acceleration,
            ArrowStyle {
                scale: 20.0 * s,
                width: display.thickness(3.0, 3.0),
                head,
                color: colors::GREEN,
            },
        );
    }

    shapes::circle(out, center, scene.params.sun_radius * s, colors::YELLOW);
    shapes::circle(out, body, scene.params.body_radius * s, colors::BLUE);
    shapes::ring(
        out,
        center,
        reference_radius,
        display.thickness(1.0, 1.0),
        colors::REFERENCE_ORBIT,
    );

    magnitude_plot(out, scene, display);
    legend(out, display);
}

fn vector_field(
    out: &mut Vec<Vertex>,
    scene: &DecayScene,
    display: &DisplayConfig,
    reference_radius: f32,
) {
    let s = display.scale();
    let center = display.center();
    let v0 = scene.params.initial_velocity;
    let head = display.arrow_size();

    for i in 0..FIELD_POINTS {
        let angle = TAU * i as f32 / FIELD_POINTS as f32;
        for factor in FIELD_RADIUS_FACTORS {
            let radius = reference_radius * factor;
            let offset = radius * Vec2::from_angle(angle);
            let pos = center + offset;

            let field_vel = v0 * (radius / reference_radius).sqrt();
            let field_acc = v0 * v0 * (reference_radius / radius).powi(2);

            if let Some(tangent) = tangent_of(offset) {
                shapes::arrow(
                    out,
                    pos,
                    tangent * field_vel,
                    ArrowStyle {
                        scale: 100.0 * s,
                        width: 1.0,
                        head,
                        color: colors::RED,
                    },
                );
            }
            if let Some(inward) = (-offset).try_normalize() {
                shapes::arrow(
                    out,
                    pos,
                    inward * field_acc,
                    ArrowStyle {
                        scale: 200.0 * s,
                        width: 1.0,
                        head,
                        color: colors::GREEN,
                    },
                );
            }
        }
    }
}

/// Points of one history series, normalised to its own maximum
pub fn plot_series(series: &RingBuffer<f32>, plot: &Rect) -> Vec<Vec2> {
    if series.len() < 2 {
        return Vec::new();
    }
    let max = series.max().filter(|m| *m != 0.0).unwrap_or(1.0);
    let n = series.len() as f32;
    series
        .iter()
        .enumerate()
        .map(|(i, value)| {
            Vec2::new(
                plot.min.x + (i as f32 / n) * plot.size.x,
                plot.min.y + plot.size.y - (value / max) * plot.size.y * 0.9,
            )
        })
        .collect()
}

fn magnitude_plot(out: &mut Vec<Vertex>, scene: &DecayScene, display: &DisplayConfig) {
    let plot = plot_rect(display);
    shapes::rect(out, plot.min, plot.size, colors::PLOT_BACKGROUND);
    shapes::rect_outline(out, plot.min, plot.size, 1.0, colors::PLOT_BORDER);

    let width = display.thickness(2.0, 2.0);
    let velocity = plot_series(&scene.velocity_history, &plot);
    shapes::polyline(out, velocity.iter(), width, colors::RED);
    let acceleration = plot_series(&scene.acceleration_history, &plot);
    shapes::polyline(out, acceleration.iter(), width, colors::GREEN);
}

fn legend(out: &mut Vec<Vertex>, display: &DisplayConfig) {
    let s = display.scale();
    let origin = legend_origin(display);
    let swatch = Vec2::new((30.0 * s).floor(), 0.0);
    let spacing = Vec2::new(0.0, (30.0 * s).floor());

    let rows = [
        (colors::WHITE, display.thickness(2.0, 2.0)),
        (colors::RED, display.thickness(3.0, 3.0)),
        (colors::GREEN, display.thickness(3.0, 3.0)),
    ];
    for (i, (color, width)) in rows.into_iter().enumerate() {
        let start = origin + spacing * i as f32;
        shapes::line(out, start, start + swatch, width, color);
    }
}

fn rotation_geometry(out: &mut Vec<Vertex>, scene: &RotationScene, display: &DisplayConfig) {
    let center = display.center();
    let radius = scene.draw_radius(display);

    for star in scene.stars(display) {
        shapes::rect(
            out,
            star.pos - Vec2::ONE,
            Vec2::splat(2.0),
            colors::grey(star.brightness),
        );
    }

    // Untextured Earth: disc plus a meridian grid that turns with it
    shapes::circle(out, center, radius, colors::BLUE);
    for i in 0..12 {
        let angle = i as f32 * PI / 6.0 + scene.angle;
        shapes::line(out, center, center + radius * Vec2::from_angle(angle), 1.0, colors::WHITE);
    }
    shapes::ring(out, center, radius, 1.0, colors::WHITE);

    if scene.show_trail {
        trail(out, &scene.trail, 2.0, colors::YELLOW);
    }

    if scene.show_vectors {
        let vectors = scene.vectors(display);
        let body = vectors.body();
        let head = display.arrow_size();
        shapes::arrow(
            out,
            center,
            vectors.position,
            ArrowStyle {
                scale: 1.0,
                width: 2.0,
                head,
                color: colors::BLUE,
            },
        );
        if let Some(velocity) = vectors.velocity {
            shapes::arrow(
                out,
                body,
                velocity,
                ArrowStyle {
                    scale: 0.2,
                    width: 3.0,
                    head,
                    color: colors::RED,
                },
            );
        }
        if let Some(acceleration) = vectors.acceleration {
            shapes::arrow(
                out,
                body,
                acceleration,
                ArrowStyle {
                    scale: 0.0002,
                    width: 3.0,
                    head,
                    color: colors::GREEN,
                },
            );
        }
        shapes::circle(out, body, 5.0, colors::WHITE);
    }
}

fn circular_geometry(out: &mut Vec<Vertex>, scene: &CircularScene, display: &DisplayConfig) {
    let center = display.center();
    let radius = scene.draw_radius(display);
    let s = display.scale();

    shapes::ring(out, center, radius, display.thickness(2.0, 1.0), colors::BLUE);

    if scene.show_trail {
        trail(out, &scene.trail, display.thickness(2.0, 1.0), colors::YELLOW);
    }

    let vectors = scene.vectors(display);
    let body = vectors.body();
    if scene.show_vectors {
        let head = display.arrow_size();
        let width = display.thickness(3.0, 2.0);
        shapes::arrow(
            out,
            center,
            vectors.position,
            ArrowStyle {
                scale: 1.0,
                width,
                head,
                color: colors::BLUE,
            },
        );
        for (vector, color) in [
            (vectors.velocity, colors::RED),
            (vectors.acceleration, colors::GREEN),
        ] {
            if let Some(v) = vector {
                shapes::arrow(
                    out,
                    body,
                    v,
                    ArrowStyle {
                        scale: 1.0,
                        width,
                        head,
                        color,
                    },
                );
            }
        }
    }
    shapes::circle(out, body, (radius * 0.05).max(4.0 * s), colors::BLUE);
}
