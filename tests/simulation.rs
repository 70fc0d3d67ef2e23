//! Headless runs of the step function

use glam::Vec2;

use orbit_vectors::consts::FRAME_DT;
use orbit_vectors::renderer::build_frame;
use orbit_vectors::sim::{InputEvent, Key, Phase, Scene, Simulation, TickInput, step, tick};
use orbit_vectors::{DisplayConfig, Scenario, Settings};

fn simulation(scenario: Scenario) -> Simulation {
    let mut settings = Settings::default();
    settings.scenario = scenario;
    Simulation::new(&settings, DisplayConfig::default(), 0.0)
}

fn events(events: Vec<InputEvent>) -> TickInput {
    TickInput {
        events,
        clock_secs: 0.0,
    }
}

#[test]
fn decay_runs_until_collision() {
    let mut sim = simulation(Scenario::Decay);
    let mut last_radius = f32::INFINITY;
    let mut frames = 0u32;

    while sim.running && frames < 200_000 {
        tick(&mut sim, &TickInput::default(), FRAME_DT);
        if let Scene::Decay(scene) = &sim.scene {
            assert!(scene.state.orbit_radius < last_radius);
            last_radius = scene.state.orbit_radius;
        }
        frames += 1;
    }

    assert!(!sim.running, "orbit never decayed into the sun");
    assert_eq!(sim.scene.phase(), Phase::Finished);
    assert!(last_radius <= 40.0);

    // Finished runs ignore further ticks
    let frame = sim.frame;
    tick(&mut sim, &TickInput::default(), FRAME_DT);
    assert_eq!(sim.frame, frame);
}

#[test]
fn faster_decay_collides_sooner() {
    let run = |presses: usize| {
        let mut sim = simulation(Scenario::Decay);
        sim = step(sim, &events(vec![InputEvent::Key(Key::Up); presses]), FRAME_DT);
        let mut frames = 0u32;
        while sim.running && frames < 200_000 {
            sim = step(sim, &TickInput::default(), FRAME_DT);
            frames += 1;
        }
        frames
    };
    assert!(run(10) < run(0));
}

#[test]
fn typed_omega_drives_circular_motion() {
    let mut sim = simulation(Scenario::Circular);
    let field = sim.omega_input.rect(&sim.display);

    let mut typed = vec![InputEvent::Click(field.center())];
    typed.extend("2.5".chars().map(InputEvent::Text));
    typed.push(InputEvent::Key(Key::Enter));
    tick(&mut sim, &events(typed), FRAME_DT);

    assert!(!sim.omega_input.focused);
    assert_eq!(sim.scene.omega(), 2.5);

    if let Scene::Circular(scene) = &sim.scene {
        assert!((scene.velocity().length() - 2.5).abs() < 1e-4);
        assert!((scene.acceleration().length() - 6.25).abs() < 1e-3);
    } else {
        panic!("expected circular scene");
    }
}

#[test]
fn rejected_omega_keeps_previous_value() {
    let mut sim = simulation(Scenario::Circular);
    let field = sim.omega_input.rect(&sim.display);
    let before = sim.scene.omega();

    let mut typed = vec![InputEvent::Click(field.center())];
    typed.extend("abc".chars().map(InputEvent::Text));
    typed.push(InputEvent::Key(Key::Enter));
    tick(&mut sim, &events(typed), FRAME_DT);

    assert_eq!(sim.scene.omega(), before);
}

#[test]
fn keys_are_captured_while_typing() {
    let mut sim = simulation(Scenario::Rotation);
    let field = sim.omega_input.rect(&sim.display);
    let scale = match &sim.scene {
        Scene::Rotation(s) => s.time_scale,
        _ => unreachable!(),
    };

    tick(
        &mut sim,
        &events(vec![
            InputEvent::Click(field.center()),
            InputEvent::Key(Key::Up),
            InputEvent::Key(Key::Space),
        ]),
        FRAME_DT,
    );
    assert_eq!(sim.scene.phase(), Phase::Running);
    if let Scene::Rotation(s) = &sim.scene {
        assert_eq!(s.time_scale, scale);
    }

    // Clicking elsewhere gives the keys back
    tick(
        &mut sim,
        &events(vec![InputEvent::Click(Vec2::new(500.0, 400.0)), InputEvent::Key(Key::Up)]),
        FRAME_DT,
    );
    if let Scene::Rotation(s) = &sim.scene {
        assert!(s.time_scale > scale);
    }
}

#[test]
fn fullscreen_round_trip_clears_trail() {
    let mut sim = simulation(Scenario::Decay);
    for _ in 0..30 {
        tick(&mut sim, &TickInput::default(), FRAME_DT);
    }
    assert_eq!(sim.scene.trail().len(), 30);

    tick(&mut sim, &events(vec![InputEvent::Key(Key::F)]), FRAME_DT);
    assert!(sim.display.fullscreen);
    assert_eq!(sim.display.size, sim.display.monitor_size);
    // Only the point recorded after the switch remains
    assert_eq!(sim.scene.trail().len(), 1);

    // The fullscreen surface may come back smaller than the monitor
    tick(
        &mut sim,
        &events(vec![InputEvent::Resized {
            width: 1920,
            height: 1050,
        }]),
        FRAME_DT,
    );
    assert_eq!(sim.display.size, (1920, 1050));
    assert_eq!(sim.display.windowed_size, (1000, 800));

    tick(&mut sim, &events(vec![InputEvent::Key(Key::Escape)]), FRAME_DT);
    assert!(!sim.display.fullscreen);
    assert_eq!(sim.display.size, (1000, 800));
}

#[test]
fn snapshot_survives_json() {
    let mut sim = simulation(Scenario::Rotation);
    for _ in 0..5 {
        tick(&mut sim, &TickInput::default(), FRAME_DT);
    }
    let json = serde_json::to_string(&sim).unwrap();
    let restored: Simulation = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.frame, sim.frame);
    assert_eq!(restored.scene.omega(), sim.scene.omega());
    assert_eq!(
        build_frame(&restored).vertices.len(),
        build_frame(&sim).vertices.len()
    );
}

#[test]
fn quit_stops_every_scene() {
    for scenario in [Scenario::Decay, Scenario::Rotation, Scenario::Circular] {
        let sim = simulation(scenario);
        let sim = step(sim, &events(vec![InputEvent::Key(Key::Q)]), FRAME_DT);
        assert!(!sim.running);
        let sim = simulation(scenario);
        let sim = step(sim, &events(vec![InputEvent::Quit]), FRAME_DT);
        assert!(!sim.running);
    }
}
