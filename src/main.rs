use ballpit::config::load_sim_config;
use ballpit::plugin::SimulationPlugin;
use ballpit::simulation::Simulation;
use bevy::prelude::*;
use bevy::window::WindowResolution;

fn main() {
    // Config is read before the app exists: the window size comes from it.
    let config = load_sim_config();
    let bounds = config.bounds;

    let mut sim = Simulation::new(config.clone());
    if config.initial_bodies > 0 {
        sim.randomize(config.initial_bodies);
    }

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Ballpit".into(),
                resolution: WindowResolution::new(bounds.width as u32, bounds.height as u32),
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.06, 0.06, 0.08)))
        .insert_resource(sim)
        .add_plugins(SimulationPlugin)
        .run();
}
