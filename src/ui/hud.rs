//! Text readouts per scene

use glam::Vec2;

use super::{Align, Label};
use crate::display::DisplayConfig;
use crate::renderer::vertex::colors;
use crate::sim::rotation::earth_time;
use crate::sim::{CircularScene, DecayScene, RotationScene, Scene, Simulation};

/// Label builder bound to one display
struct Hud<'a> {
    display: &'a DisplayConfig,
    labels: Vec<Label>,
}

impl<'a> Hud<'a> {
    fn new(display: &'a DisplayConfig) -> Self {
        Self {
            display,
            labels: Vec::new(),
        }
    }

    fn push(&mut self, text: impl Into<String>, pos: Vec2, align: Align, color: [f32; 4]) {
        self.labels.push(Label {
            text: text.into(),
            pos,
            align,
            color,
            size: self.display.font_size(),
        });
    }

    /// Centred line at `y` (authored pixels, scaled)
    fn centered(&mut self, text: impl Into<String>, y: f32, color: [f32; 4]) {
        let pos = Vec2::new(self.display.center().x, y * self.display.scale());
        self.push(text, pos, Align::Center, color);
    }
}

/// Every text label for the current frame
pub fn hud_labels(sim: &Simulation) -> Vec<Label> {
    let mut hud = Hud::new(&sim.display);
    match &sim.scene {
        Scene::Decay(s) => decay_labels(&mut hud, s),
        Scene::Rotation(s) => rotation_labels(&mut hud, s),
        Scene::Circular(s) => circular_labels(&mut hud, s),
    }

    let s = sim.display.scale();
    let rect = sim.omega_input.rect(&sim.display);
    let field = if sim.omega_input.focused {
        format!("ω = {}_", sim.omega_input.draft())
    } else {
        format!("ω = {:.6} (click to edit)", sim.scene.omega())
    };
    hud.push(
        field,
        rect.min + Vec2::new(8.0 * s, 6.0 * s),
        Align::Left,
        colors::WHITE,
    );

    if sim.scene.is_paused() {
        hud.centered("PAUSED", 400.0, colors::YELLOW);
    }
    hud.labels
}

/// Status line for the window title
pub fn title_line(sim: &Simulation) -> String {
    let scenario = sim.scene.scenario().title();
    let status = match &sim.scene {
        Scene::Decay(s) => format!(
            "r = {:.1}  |v| = {:.3}  |a| = {:.3}  decay = {:.4}",
            s.state.orbit_radius,
            s.velocity_magnitude(),
            s.acceleration_magnitude(),
            s.state.decay_rate
        ),
        Scene::Rotation(s) => {
            let (h, m, sec) = earth_time(s.angle);
            format!("{:.1}x real-time  {:02}:{:02}:{:02} UTC", s.time_scale, h, m, sec)
        }
        Scene::Circular(s) => format!(
            "ω = {:.3}  |v| = {:.3}  |a| = {:.3}",
            s.omega,
            s.velocity().length(),
            s.acceleration().length()
        ),
    };
    let paused = if sim.scene.is_paused() { "  [paused]" } else { "" };
    if sim.omega_input.focused {
        // The draft has no other visible surface while typing
        return format!(
            "{} - ω = {}_  (ENTER to apply, ESC to cancel){}",
            scenario,
            sim.omega_input.draft(),
            paused
        );
    }
    format!("{} - {}{}", scenario, status, paused)
}

fn decay_labels(hud: &mut Hud<'_>, scene: &DecayScene) {
    let display = hud.display;
    let s = display.scale();
    let v0 = scene.params.initial_velocity;
    let vel = scene.velocity_magnitude();
    let acc = scene.acceleration_magnitude();

    hud.centered("Earth Orbital Decay Simulation", 20.0, colors::WHITE);
    hud.centered(
        "SPACE: Pause, V: Toggle vector field, F: Toggle fullscreen",
        50.0,
        colors::WHITE,
    );

    let y = 80.0;
    let spacing = 30.0;
    hud.centered(
        format!("Current orbit radius: {:.1}", scene.state.orbit_radius),
        y,
        colors::WHITE,
    );
    let vel_color = if vel < v0 * 0.95 {
        colors::VELOCITY_ALERT
    } else {
        colors::WHITE
    };
    hud.centered(
        format!("Velocity magnitude: {:.3} (Decreasing)", vel),
        y + spacing,
        vel_color,
    );
    let acc_color = if acc > v0 * v0 * 1.05 {
        colors::ACCELERATION_ALERT
    } else {
        colors::WHITE
    };
    hud.centered(
        format!("Acceleration magnitude: {:.3} (Increasing)", acc),
        y + spacing * 2.0,
        acc_color,
    );
    hud.centered(
        format!("Decay rate: {:.4} (UP/DOWN to adjust)", scene.state.decay_rate),
        y + spacing * 3.0,
        colors::WHITE,
    );

    let fullscreen = if display.fullscreen {
        "Fullscreen: ON"
    } else {
        "Fullscreen: OFF (Press F)"
    };
    hud.push(
        fullscreen,
        Vec2::new(display.width() - 20.0 * s, 20.0 * s),
        Align::Right,
        colors::WHITE,
    );

    // Legend text sits to the right of the swatches drawn by the frame builder
    let legend = legend_origin(display);
    let text_x = legend.x + 40.0 * s;
    let line = 30.0 * s;
    hud.push(
        "Position Vector (r)",
        Vec2::new(text_x, legend.y - 10.0 * s),
        Align::Left,
        colors::WHITE,
    );
    hud.push(
        format!("Velocity Vector (v), |v| = {:.3}", vel),
        Vec2::new(text_x, legend.y + line - 10.0 * s),
        Align::Left,
        colors::RED,
    );
    hud.push(
        format!("Acceleration Vector (a), |a| = {:.3}", acc),
        Vec2::new(text_x, legend.y + line * 2.0 - 10.0 * s),
        Align::Left,
        colors::GREEN,
    );

    let plot = plot_rect(display);
    hud.push(
        "Vector Magnitudes",
        Vec2::new(plot.center().x, plot.min.y - 25.0 * s),
        Align::Center,
        colors::WHITE,
    );
    hud.push(
        format!(
            "Δr over last {} steps: {:.3}",
            scene.radius_history.len(),
            scene.radius_drop()
        ),
        Vec2::new(plot.center().x, plot.min.y - 50.0 * s),
        Align::Center,
        colors::WHITE,
    );
}

fn rotation_labels(hud: &mut Hud<'_>, scene: &RotationScene) {
    let display = hud.display;
    let h = display.height();
    let s = display.scale();
    let left = 20.0 * s;

    hud.centered("Earth Rotation Simulation", 20.0, colors::WHITE);

    let (omega, vel, acc) = scene.magnitudes();
    hud.push(
        "UP/DOWN: Change speed | V: Toggle vectors | T: Toggle trail | SPACE: Pause | R: Reset",
        Vec2::new(left, h - 140.0 * s),
        Align::Left,
        colors::WHITE,
    );
    hud.push(
        format!(
            "ω = {:.8} rad/s, |v| = {:.2} m/s, |a| = {:.2} m/s²",
            omega, vel, acc
        ),
        Vec2::new(left, h - 100.0 * s),
        Align::Left,
        colors::WHITE,
    );
    hud.push(
        format!("Time scale: {:.1}x real-time", scene.time_scale),
        Vec2::new(left, h - 70.0 * s),
        Align::Left,
        colors::WHITE,
    );
    let (hh, mm, ss) = earth_time(scene.angle);
    hud.push(
        format!("Earth time (at Greenwich): {:02}:{:02}:{:02} UTC", hh, mm, ss),
        Vec2::new(left, h - 40.0 * s),
        Align::Left,
        colors::WHITE,
    );
}

fn circular_labels(hud: &mut Hud<'_>, scene: &CircularScene) {
    let display = hud.display;
    let s = display.scale();
    let left = 20.0 * s;
    let h = display.height();

    hud.centered(
        "Uniform Circular Motion: |v| = ω, |a| = ω²",
        20.0,
        colors::WHITE,
    );
    hud.push(
        format!(
            "t = {:.2} s, ω = {:.3} rad/s, |v| = {:.3}, |a| = {:.3}",
            scene.time,
            scene.omega,
            scene.velocity().length(),
            scene.acceleration().length()
        ),
        Vec2::new(left, h - 70.0 * s),
        Align::Left,
        colors::WHITE,
    );
    hud.push(
        "UP/DOWN: Change ω | V: Toggle vectors | T: Toggle trail | SPACE: Pause | R: Reset",
        Vec2::new(left, h - 40.0 * s),
        Align::Left,
        colors::WHITE,
    );
}

/// Top-left of the vector legend
pub fn legend_origin(display: &DisplayConfig) -> Vec2 {
    let s = display.scale();
    Vec2::new((50.0 * s).floor(), display.height() - (150.0 * s).floor())
}

/// Magnitude history plot area, bottom-right
pub fn plot_rect(display: &DisplayConfig) -> super::Rect {
    let s = display.scale();
    let w = (200.0 * s).floor();
    let h = (100.0 * s).floor();
    let margin = (20.0 * s).floor();
    super::Rect::new(
        display.width() - w - margin,
        display.height() - h - margin,
        w,
        h,
    )
}
