use bevy::prelude::*;
use bevy::math::primitives::Sphere;

use crate::simulation::integrator::euler_symplectic;
use crate::simulation::scenario::Scenario;

/// Component tagging each sphere with its body index into Scenario.system.bodies
#[derive(Component)]
struct BodyIndex(pub usize);

/// Recent positions of a body, oldest first, drawn as a polyline
#[derive(Component)]
struct Trail(Vec<Vec3>);

/// Minimum on-screen radius so small planets are still visible
const MIN_VISUAL_RADIUS: f32 = 2.0;

/// Points kept per trail before the oldest are dropped
const TRAIL_LEN: usize = 1500;

/// Minimum squared spacing between recorded trail points
const TRAIL_SPACING_SQ: f32 = 1.0;

/// Distance of the camera from the origin
const CAMERA_DISTANCE: f32 = 2500.0;

/// Entrypoint: run the windowed viewer for a built scenario
///
/// Physics ticks on the fixed schedule at the scenario's pacing rate;
/// rendering systems only read the body roster and never feed anything
/// back into it. Runs until the window is closed.
pub fn run_viewer(scenario: Scenario) {
    println!(
        "run_viewer: starting Bevy viewer with {} bodies",
        scenario.system.bodies.len()
    );

    let rate = scenario.parameters.rate;

    App::new()
        .insert_resource(scenario)
        .insert_resource(Time::<Fixed>::from_hz(rate))
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_bodies)
        .add_systems(FixedUpdate, physics_step)
        .add_systems(Update, (sync_transforms, draw_trails))
        .run();
}

/// Startup system: spawn camera, light, and one sphere per body
fn setup_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scenario: Res<Scenario>,
) {
    // Camera above the ecliptic, looking at the Sun
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)), // pure black
            ..Default::default()
        },
        transform: Transform::from_xyz(0.0, 900.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    // Basic point light at the Sun's position
    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 1500.0,
            range: 10_000.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(0.0, 0.0, 0.0),
        ..Default::default()
    });

    // One sphere per body, colored per its catalog identity. The Sun
    // (index 0) gets no trail.
    for (i, frame) in scenario.system.frames().iter().enumerate() {
        let [r, g, b] = frame.color;

        // Ensure a minimum visual radius so tiny bodies are still visible
        let radius_screen = (frame.radius as f32).max(MIN_VISUAL_RADIUS);

        let id = commands
            .spawn((
                PbrBundle {
                    mesh: meshes.add(Sphere::new(radius_screen).mesh()),
                    material: materials.add(StandardMaterial {
                        base_color: Color::srgb(r, g, b),
                        unlit: true,
                        ..Default::default()
                    }),
                    transform: Transform::from_xyz(
                        frame.position.x as f32,
                        frame.position.y as f32,
                        frame.position.z as f32,
                    ),
                    ..Default::default()
                },
                BodyIndex(i),
            ))
            .id();

        if i > 0 {
            commands.entity(id).insert(Trail(Vec::new()));
        }
    }
}

/// One integrator tick per fixed-rate beat
fn physics_step(mut scenario: ResMut<Scenario>) {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        system,
        parameters,
        forces,
    } = &mut *scenario;

    euler_symplectic(system, forces, parameters);
}

/// Copy body positions onto sphere transforms and extend the trails
fn sync_transforms(
    scenario: Res<Scenario>,
    mut query: Query<(&BodyIndex, &mut Transform, Option<&mut Trail>)>,
) {
    for (BodyIndex(i), mut transform, trail) in &mut query {
        if let Some(b) = scenario.system.bodies.get(*i) {
            let pos = Vec3::new(b.x.x as f32, b.x.y as f32, b.x.z as f32);
            transform.translation = pos;

            if let Some(mut trail) = trail {
                // Record a point once the body has moved far enough;
                // drop the oldest once the trail is full
                let spaced = trail
                    .0
                    .last()
                    .map_or(true, |p| p.distance_squared(pos) > TRAIL_SPACING_SQ);
                if spaced {
                    trail.0.push(pos);
                    if trail.0.len() > TRAIL_LEN {
                        trail.0.remove(0);
                    }
                }
            }
        }
    }
}

/// Draw each trail as a gizmo polyline in the body's own color
fn draw_trails(
    mut gizmos: Gizmos,
    query: Query<(&Trail, &Handle<StandardMaterial>)>,
    materials: Res<Assets<StandardMaterial>>,
) {
    for (trail, mat_handle) in &query {
        let color = materials
            .get(mat_handle)
            .map(|m| m.base_color)
            .unwrap_or(Color::WHITE);
        for pair in trail.0.windows(2) {
            gizmos.line(pair[0], pair[1], color);
        }
    }
}
