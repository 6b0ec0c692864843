//! Command-line argument parsing and preset loading.

use std::path::{Path, PathBuf};

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use driftbuoy::ocean::{RandomWaves, WaveController};
use driftbuoy::params::OceanPreset;
use driftbuoy::ConfigError;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "driftbuoy")]
#[command(about = "Headless Gerstner-wave buoyancy simulation (CSV trajectory output)", long_about = None)]
pub struct Args {
    /// RON preset with waves, noise, buoyancy, and body settings
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Simulated duration (seconds)
    #[arg(long, value_name = "SECONDS", default_value = "10")]
    pub duration: f32,

    /// Number of floating bodies, spaced along +x
    #[arg(long, default_value = "1")]
    pub bodies: usize,

    /// Distance between bodies (meters)
    #[arg(long, value_name = "METERS", default_value = "5")]
    pub spacing: f32,

    /// Initial body height (meters)
    #[arg(long, value_name = "METERS", default_value = "2")]
    pub start_height: f32,

    /// Wave-count ceiling (1-32)
    #[arg(long)]
    pub max_waves: Option<usize>,

    /// Waves displayed by the renderer
    #[arg(long)]
    pub waves: Option<usize>,

    /// Waves sampled by physics (defaults to --waves)
    #[arg(long)]
    pub physics_waves: Option<usize>,

    /// Replace the preset waves with seeded random ones
    #[arg(long)]
    pub randomize: bool,

    /// Seed for --randomize
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Print one CSV row per body every N physics ticks
    #[arg(long, value_name = "TICKS", default_value = "5")]
    pub sample_every: u32,
}

/// Errors surfaced to the command line
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read preset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse preset {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl Args {
    /// Load the preset file (or defaults) and apply command-line overrides
    pub fn load_preset(&self) -> Result<OceanPreset, CliError> {
        let mut preset = match &self.config {
            Some(path) => read_preset(path)?,
            None => OceanPreset::default(),
        };

        if let Some(max_waves) = self.max_waves {
            preset.max_waves = max_waves;
        }
        if let Some(waves) = self.waves {
            preset.active_waves = waves;
        }
        if self.physics_waves.is_some() {
            preset.physics_waves = self.physics_waves;
        }
        // Waves beyond a lowered ceiling are dropped rather than rejected
        preset.waves.truncate(preset.max_waves);

        if self.randomize {
            // Wave slots are regenerated, so only the other sections must hold
            preset.noise.validate()?;
            preset.buoyancy.validate()?;
            preset.body.validate()?;
            preset.simulation.validate()?;
        } else {
            preset.validate()?;
        }
        Ok(preset)
    }

    /// Build the renderer-side wave slots from the preset
    pub fn build_controller(&self, preset: &OceanPreset) -> Result<WaveController, CliError> {
        let mut controller = WaveController::new(preset.max_waves)?;

        if self.randomize {
            let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
            let count = preset.active_waves.max(preset.physics_wave_count());
            controller.randomize(&RandomWaves::default(), count, &mut rng)?;
            println!("Waves: {} random (seed {})", count, self.seed);
        } else {
            for (index, wave) in preset.waves.iter().enumerate() {
                controller.set_wave(index, *wave)?;
            }
            println!("Waves: {} of {} presets", preset.active_waves, preset.waves.len());
        }

        controller.set_active_count(preset.active_waves)?;
        Ok(controller)
    }
}

fn read_preset(path: &Path) -> Result<OceanPreset, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&text).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["driftbuoy"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let args = args(&[]);
        assert_eq!(args.duration, 10.0);
        assert_eq!(args.bodies, 1);
        assert!(!args.randomize);

        let preset = args.load_preset().unwrap();
        assert_eq!(preset, OceanPreset::default());
    }

    #[test]
    fn test_overrides_apply() {
        let args = args(&["--max-waves", "6", "--waves", "5", "--physics-waves", "2"]);
        let preset = args.load_preset().unwrap();
        assert_eq!(preset.max_waves, 6);
        assert_eq!(preset.waves.len(), 6);
        assert_eq!(preset.active_waves, 5);
        assert_eq!(preset.physics_wave_count(), 2);

        let controller = args.build_controller(&preset).unwrap();
        assert_eq!(controller.active_count(), 5);
    }

    #[test]
    fn test_rejects_too_many_waves() {
        let args = args(&["--waves", "11"]);
        assert!(matches!(args.load_preset(), Err(CliError::Config(_))));
    }

    #[test]
    fn test_randomize_fills_requested_waves() {
        let args = args(&["--randomize", "--max-waves", "32", "--waves", "20"]);
        let preset = args.load_preset().unwrap();
        let controller = args.build_controller(&preset).unwrap();
        assert_eq!(controller.active_count(), 20);
        assert_eq!(controller.configured_waves().len(), 20);
    }

    #[test]
    fn test_missing_preset_file() {
        let args = args(&["--config", "/nonexistent/driftbuoy.ron"]);
        assert!(matches!(args.load_preset(), Err(CliError::Io { .. })));
    }
}
