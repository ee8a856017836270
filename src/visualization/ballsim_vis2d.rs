use bevy::color::Srgba;
use bevy::log::LogPlugin;
use bevy::math::primitives::{Annulus, Circle};
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

use crate::driver::clock::FrameTimer;
use crate::simulation::scenario::Scenario;

#[derive(Component)]
struct BodyIndex(pub usize);

#[derive(Resource)]
struct ViewerTimer(FrameTimer);

pub fn run_2d(scenario: Scenario) {
    log::info!("run_2d: starting Bevy 2D viewer with {} bodies", scenario.world.bodies().len());

    let (width, height) = (scenario.world.width() as f32, scenario.world.height() as f32);
    let timer = FrameTimer::new(scenario.parameters.max_dt);

    App::new()
        .insert_resource(scenario)
        .insert_resource(ViewerTimer(timer))
        .insert_resource(ClearColor(Color::srgb(0.83, 0.83, 0.83)))
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "ballsim".into(),
                        resolution: (width, height).into(),
                        ..default()
                    }),
                    ..default()
                })
                // env_logger already owns the global logger
                .disable::<LogPlugin>(),
        )
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (physics_step_system, sync_transforms_system).chain())
        .run();
}

fn setup_bodies_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    commands.spawn(Camera2dBundle::default());

    let world = &scenario.world;
    for (i, view) in world.views().into_iter().enumerate() {
        let (x, y) = to_screen(view.x, view.y, world.width(), world.height());

        let radius = view.radius as f32;
        let material = materials.add(ColorMaterial::from(parse_color(view.color)));

        // filled disc plus a one-unit stroke straddling the rim
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius))),
                material: material.clone(),
                transform: Transform::from_xyz(x, y, 0.0),
                ..Default::default()
            },
            BodyIndex(i),
        )).with_children(|parent| {
            parent.spawn(MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Annulus::new((radius - 0.5).max(0.0), radius + 0.5))),
                material,
                transform: Transform::from_xyz(0.0, 0.0, 0.1),
                ..Default::default()
            });
        });
    }
}

fn physics_step_system(time: Res<Time>, mut scenario: ResMut<Scenario>, mut timer: ResMut<ViewerTimer>) {
    match timer.0.advance(time.elapsed_seconds_f64()) {
        Ok(dt) => {
            scenario.world.step(dt);
        }
        Err(e) => log::error!("viewer: skipping frame: {e:#}"),
    }
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let world = &scenario.world;
    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = world.bodies().get(*i) {
            let (x, y) = to_screen(b.x.x, b.x.y, world.width(), world.height());
            transform.translation.x = x;
            transform.translation.y = y;
        }
    }
}

// Arena is y-down from the top-left corner, Bevy is y-up from the window center
fn to_screen(x: f64, y: f64, width: f64, height: f64) -> (f32, f32) {
    ((x - width / 2.0) as f32, (height / 2.0 - y) as f32)
}

fn parse_color(name: &str) -> Color {
    let rgb = match name.to_ascii_lowercase().as_str() {
        "red" => Some((1.0, 0.0, 0.0)),
        "green" => Some((0.0, 0.5, 0.0)),
        "blue" => Some((0.0, 0.0, 1.0)),
        "purple" => Some((0.5, 0.0, 0.5)),
        "orange" => Some((1.0, 0.65, 0.0)),
        "yellow" => Some((1.0, 1.0, 0.0)),
        "black" => Some((0.0, 0.0, 0.0)),
        "white" => Some((1.0, 1.0, 1.0)),
        _ => None,
    };
    if let Some((r, g, b)) = rgb {
        return Color::srgb(r, g, b);
    }
    match Srgba::hex(name) {
        Ok(c) => Color::Srgba(c),
        Err(_) => {
            log::warn!("viewer: unknown color {name:?}, drawing grey");
            Color::srgb(0.5, 0.5, 0.5)
        }
    }
}
