use std::time::Instant;

use crate::simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
use crate::simulation::integrator::euler_symplectic;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};

/// Deterministic synthetic roster of `n` bodies for timing runs
fn ring_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec3::new(
            (i_f * 0.37).sin() * 500.0,
            (i_f * 0.13).cos() * 500.0,
            (i_f * 0.07).sin() * 500.0,
        );

        bodies.push(Body {
            name: format!("body-{i}"),
            color: [1.0, 1.0, 1.0],
            x,
            v: NVec3::zeros(),
            m: 1e24,
            radius: 0.01,
        });
    }

    System { bodies, t: 0.0 }
}

/// Time one direct gravity accumulation at several roster sizes
pub fn bench_gravity() {
    let ns = [8, 16, 32, 64, 128, 256];
    let params = Parameters::default();

    for n in ns {
        let sys = ring_system(n);
        let gravity = NewtonianGravity {
            g: params.g,
            scale: params.scale,
        };
        let mut out = vec![NVec3::zeros(); n];

        // Warm up
        gravity.acceleration(0.0, &sys, &mut out);

        let t0 = Instant::now();
        gravity.acceleration(0.0, &sys, &mut out);
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:4}, direct = {dt:9.6} s");
    }
}

/// Time whole integrator ticks at several roster sizes
pub fn bench_step() {
    let ns = [8, 16, 32, 64, 128, 256];
    let steps = 1000;
    let params = Parameters::default();

    for n in ns {
        let mut sys = ring_system(n);
        let forces = AccelSet::new().with(NewtonianGravity {
            g: params.g,
            scale: params.scale,
        });

        // Warm up
        euler_symplectic(&mut sys, &forces, &params);

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_symplectic(&mut sys, &forces, &params);
        }
        let dt = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:4}, {steps} steps = {dt:9.6} s ({:9.7} s/step)",
            dt / steps as f64
        );
    }
}
