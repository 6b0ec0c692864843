//! Driftbuoy - floating bodies riding a Gerstner ocean
//!
//! Runs the wave field and buoyancy controllers headless and prints each
//! body's trajectory as CSV on stdout. Logs go to stderr (`RUST_LOG`).

mod cli;

use clap::Parser;
use glam::Vec3;

use cli::{Args, CliError};
use driftbuoy::ocean::{WaveField, WaveUniformSink, WaveUniforms};
use driftbuoy::physics::{FixedStepSimulation, FloatingBody};

/// Stands in for the renderer's uniform buffer when running headless
struct HeadlessSink;

impl WaveUniformSink for HeadlessSink {
    fn push(&mut self, uniforms: &WaveUniforms) {
        log::info!(
            "Wave uniforms ready: {} waves, {} bytes",
            uniforms.wave_count,
            bytemuck::bytes_of(uniforms).len()
        );
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let preset = args.load_preset()?;
    let controller = args.build_controller(&preset)?;
    controller.notify(&preset.noise, &mut HeadlessSink);

    let physics_count = preset.physics_wave_count();
    if physics_count != controller.active_count() {
        log::warn!(
            "Physics samples {} waves but the renderer displays {}; bodies may not match the visible surface",
            physics_count,
            controller.active_count()
        );
    }
    let physics_waves = controller.configured_waves()[..physics_count].to_vec();
    let field = WaveField::new(physics_waves, preset.noise.clone(), controller.max_waves())?;

    let mut sim = FixedStepSimulation::new(field, preset.simulation.clone())?;
    for i in 0..args.bodies {
        let position = Vec3::new(i as f32 * args.spacing, args.start_height, 0.0);
        sim.spawn_body(position, preset.body.clone(), preset.buoyancy.clone())?;
    }

    let total_ticks = (args.duration / preset.simulation.fixed_dt_s).ceil().max(0.0) as u64;
    let sample_every = u64::from(args.sample_every.max(1));
    log::info!(
        "Simulating {} bodies for {} ticks of {}s",
        sim.body_count(),
        total_ticks,
        preset.simulation.fixed_dt_s
    );

    println!("time_s,body,x,y,z,water_height");
    for tick in 0..total_ticks {
        let time_s = sim.time_s();
        let forces = sim.step();
        if tick % sample_every != 0 {
            continue;
        }
        for (index, applied) in forces.iter().enumerate() {
            let (Some(body), Some(applied)) = (sim.body(index), applied) else {
                continue;
            };
            let p = body.position();
            println!(
                "{:.3},{},{:.4},{:.4},{:.4},{:.4}",
                time_s, index, p.x, p.y, p.z, applied.water_height
            );
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
