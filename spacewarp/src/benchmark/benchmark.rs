use std::time::Instant;

use crate::simulation::forces::ForceAccumulator;
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};
use crate::simulation::warp::WarpLattice;

/// Helper to build a manual System of size `n`
fn make_system(n: usize, params: &Parameters) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions spread over the lattice, no rand needed
        let x = NVec3::new(
            (i_f * 0.37).sin() * 8000.0,
            (i_f * 0.13).cos() * 500.0,
            (i_f * 0.07).sin() * 8000.0,
        );
        bodies.push(Body::new(x, NVec3::zeros(), 5.97e22, 5515.0, params));
    }

    System::new(bodies)
}

/// Time one force+drift step for a range of body counts
pub fn bench_step() {
    let params = Parameters::default();
    let forces = ForceAccumulator::from_params(&params);
    let ns = [10, 20, 40, 80, 160, 320];
    let steps = 50;

    for n in ns {
        let mut sys = make_system(n, &params);

        // Warm-up
        semi_implicit_euler(&mut sys, &forces, &params);

        let t0 = Instant::now();
        for _ in 0..steps {
            semi_implicit_euler(&mut sys, &forces, &params);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:4}, step = {:10.6} ms", per_step * 1000.0);
    }
}

/// Time one lattice warp for a range of body counts and lattice resolutions
/// Paste output directly into a spreadsheet to graph
pub fn bench_warp() {
    let params = Parameters::default();

    println!("N,divisions,warp_ms");

    for divisions in [25, 50, 100] {
        let Ok(mut lattice) = WarpLattice::new(20_000.0, divisions) else {
            continue;
        };
        for n in [1, 10, 50, 100] {
            let sys = make_system(n, &params);
            let repeats = 10;

            let t0 = Instant::now();
            for _ in 0..repeats {
                lattice.warp(&sys, &params);
            }
            let ms = t0.elapsed().as_secs_f64() * 1000.0 / repeats as f64;

            println!("{},{},{:.6}", n, divisions, ms);
        }
    }
}
