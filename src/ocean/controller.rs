//! Renderer-facing wave configuration and uniform packing.

use bytemuck::{Pod, Zeroable};
use rand::Rng;

use super::generator::WaveGenerator;
use crate::error::ConfigError;
use crate::params::{
    validate_max_waves, NoiseConfig, WaveDescriptor, DEFAULT_ACTIVE_WAVES, DEFAULT_WAVES,
    MAX_WAVES_CEILING,
};

/// Uniform buffer for the ocean surface shader (wave array + noise parameters)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct WaveUniforms {
    /// Packed waves: [dir_x, dir_z, steepness, wavelength]
    pub waves: [[f32; 4]; MAX_WAVES_CEILING],
    pub wave_count: u32,
    pub noise_octaves: u32,
    pub _padding0: [u32; 2], // Padding for alignment
    /// [strength, scale, speed, lacunarity]
    pub noise_params: [f32; 4],
    pub noise_gain: f32,
    pub _padding1: [f32; 3],
}

/// Receives uniform data whenever the host reports a configuration change
pub trait WaveUniformSink {
    fn push(&mut self, uniforms: &WaveUniforms);
}

/// Wave slots shown by the renderer
///
/// Holds up to `max_waves` configured descriptors, of which the first
/// `active_count` are displayed. Changes are not pushed automatically;
/// call [`WaveController::notify`] after mutating.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveController {
    slots: Vec<WaveDescriptor>,
    active_count: usize,
    max_waves: usize,
}

impl WaveController {
    /// Create a controller loaded with the default presets
    pub fn new(max_waves: usize) -> Result<Self, ConfigError> {
        validate_max_waves(max_waves)?;
        let mut controller = Self {
            slots: Vec::with_capacity(max_waves),
            active_count: 0,
            max_waves,
        };
        controller.reset_to_defaults();
        Ok(controller)
    }

    /// Reload the default presets and show the first three
    pub fn reset_to_defaults(&mut self) {
        self.slots.clear();
        self.slots
            .extend(DEFAULT_WAVES.iter().copied().take(self.max_waves));
        self.active_count = DEFAULT_ACTIVE_WAVES.min(self.slots.len());
    }

    /// Replace every slot with `count` generated waves, all active
    pub fn randomize<G, R>(
        &mut self,
        generator: &G,
        count: usize,
        rng: &mut R,
    ) -> Result<(), ConfigError>
    where
        G: WaveGenerator,
        R: Rng + ?Sized,
    {
        self.check_count(count)?;
        let waves = generator.generate(count, rng);
        waves
            .iter()
            .enumerate()
            .try_for_each(|(index, wave)| wave.validate(index))?;

        self.slots = waves;
        self.active_count = count;
        log::debug!("Randomized {} waves", count);
        Ok(())
    }

    /// Set or append the wave at `index` (at most one past the last slot)
    pub fn set_wave(&mut self, index: usize, wave: WaveDescriptor) -> Result<(), ConfigError> {
        if index >= self.max_waves {
            return Err(ConfigError::TooManyWaves {
                count: index.saturating_add(1),
                max: self.max_waves,
            });
        }
        wave.validate(index)?;
        if index < self.slots.len() {
            self.slots[index] = wave;
            Ok(())
        } else if index == self.slots.len() {
            self.slots.push(wave);
            Ok(())
        } else {
            Err(ConfigError::MissingWaves {
                count: index,
                available: self.slots.len(),
            })
        }
    }

    /// Choose how many configured waves the renderer displays
    pub fn set_active_count(&mut self, count: usize) -> Result<(), ConfigError> {
        self.check_count(count)?;
        if count > self.slots.len() {
            return Err(ConfigError::MissingWaves {
                count,
                available: self.slots.len(),
            });
        }
        self.active_count = count;
        Ok(())
    }

    fn check_count(&self, count: usize) -> Result<(), ConfigError> {
        if count > self.max_waves {
            return Err(ConfigError::TooManyWaves {
                count,
                max: self.max_waves,
            });
        }
        Ok(())
    }

    pub fn active_waves(&self) -> &[WaveDescriptor] {
        &self.slots[..self.active_count]
    }

    /// All configured waves, active or not
    pub fn configured_waves(&self) -> &[WaveDescriptor] {
        &self.slots
    }

    pub fn active_count(&self) -> usize {
        self.active_count
    }

    pub fn max_waves(&self) -> usize {
        self.max_waves
    }

    /// Pack the active waves and noise parameters for upload
    pub fn uniforms(&self, noise: &NoiseConfig) -> WaveUniforms {
        let mut uniforms = WaveUniforms::zeroed();
        for (dst, wave) in uniforms.waves.iter_mut().zip(self.active_waves()) {
            *dst = wave.to_packed();
        }
        uniforms.wave_count = self.active_count as u32;
        uniforms.noise_octaves = noise.octaves;
        uniforms.noise_params = [noise.strength, noise.scale, noise.speed, noise.lacunarity];
        uniforms.noise_gain = noise.gain;
        uniforms
    }

    /// Push the current configuration to a renderer
    pub fn notify(&self, noise: &NoiseConfig, sink: &mut dyn WaveUniformSink) {
        log::debug!("Pushing {} waves to renderer", self.active_count);
        sink.push(&self.uniforms(noise));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ocean::generator::{PresetWaves, RandomWaves};
    use crate::params::DEFAULT_MAX_WAVES;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[derive(Default)]
    struct RecordingSink {
        pushed: Vec<WaveUniforms>,
    }

    impl WaveUniformSink for RecordingSink {
        fn push(&mut self, uniforms: &WaveUniforms) {
            self.pushed.push(*uniforms);
        }
    }

    #[test]
    fn test_uniform_layout_has_no_implicit_padding() {
        // 32 waves * 16 bytes + three 16-byte rows
        assert_eq!(std::mem::size_of::<WaveUniforms>(), 32 * 16 + 3 * 16);
        assert_eq!(std::mem::size_of::<WaveUniforms>() % 16, 0);
    }

    #[test]
    fn test_new_loads_defaults() {
        let controller = WaveController::new(DEFAULT_MAX_WAVES).unwrap();
        assert_eq!(controller.active_count(), 3);
        assert_eq!(controller.configured_waves(), &DEFAULT_WAVES[..]);
        assert_eq!(controller.active_waves(), &DEFAULT_WAVES[..3]);
    }

    #[test]
    fn test_small_ceiling_truncates_defaults() {
        let controller = WaveController::new(2).unwrap();
        assert_eq!(controller.configured_waves().len(), 2);
        assert_eq!(controller.active_count(), 2);
    }

    #[test]
    fn test_rejects_bad_ceiling() {
        assert!(WaveController::new(0).is_err());
        assert!(WaveController::new(MAX_WAVES_CEILING + 1).is_err());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut controller = WaveController::new(MAX_WAVES_CEILING).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        controller
            .randomize(&RandomWaves::default(), 20, &mut rng)
            .unwrap();
        assert_eq!(controller.active_count(), 20);

        controller.reset_to_defaults();
        assert_eq!(controller.active_count(), 3);
        assert_eq!(controller.configured_waves(), &DEFAULT_WAVES[..]);
    }

    #[test]
    fn test_randomize_rejects_too_many() {
        let mut controller = WaveController::new(DEFAULT_MAX_WAVES).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let before = controller.clone();
        assert_eq!(
            controller.randomize(&PresetWaves, 11, &mut rng),
            Err(ConfigError::TooManyWaves { count: 11, max: 10 })
        );
        assert_eq!(controller, before);
    }

    #[test]
    fn test_active_count_bounds() {
        let mut controller = WaveController::new(DEFAULT_MAX_WAVES).unwrap();
        assert!(controller.set_active_count(0).is_ok());
        assert!(controller.active_waves().is_empty());
        assert!(controller.set_active_count(10).is_ok());
        assert!(matches!(
            controller.set_active_count(11),
            Err(ConfigError::TooManyWaves { .. })
        ));
    }

    #[test]
    fn test_set_wave() {
        let mut controller = WaveController::new(12).unwrap();
        let wave = WaveDescriptor::new(Vec2::Y, 0.4, 30.0);

        controller.set_wave(0, wave).unwrap();
        assert_eq!(controller.active_waves()[0], wave);

        controller.set_wave(10, wave).unwrap();
        assert_eq!(controller.configured_waves().len(), 11);
        assert!(matches!(
            controller.set_wave(12, wave),
            Err(ConfigError::TooManyWaves { .. })
        ));
        assert_eq!(
            controller.set_wave(usize::MAX, wave),
            Err(ConfigError::TooManyWaves {
                count: usize::MAX,
                max: 12
            })
        );

        let bad = WaveDescriptor::new(Vec2::Y, 0.4, 0.0);
        assert!(controller.set_wave(1, bad).is_err());
        assert_eq!(controller.configured_waves()[1], DEFAULT_WAVES[1]);
    }

    #[test]
    fn test_notify_pushes_packed_uniforms() {
        let controller = WaveController::new(DEFAULT_MAX_WAVES).unwrap();
        let noise = NoiseConfig::default();
        let mut sink = RecordingSink::default();

        controller.notify(&noise, &mut sink);

        assert_eq!(sink.pushed.len(), 1);
        let uniforms = &sink.pushed[0];
        assert_eq!(uniforms.wave_count, 3);
        assert_eq!(uniforms.waves[0], [1.0, 0.0, 0.5, 10.0]);
        assert_eq!(uniforms.waves[2], [1.0, 1.0, 0.15, 10.0]);
        // Inactive slots stay zeroed
        assert_eq!(uniforms.waves[3], [0.0; 4]);
        assert_eq!(uniforms.noise_octaves, 4);
        assert_eq!(uniforms.noise_params, [0.1, 10.0, 1.0, 2.0]);
        assert_eq!(uniforms.noise_gain, 0.5);

        let bytes: &[u8] = bytemuck::bytes_of(uniforms);
        assert_eq!(bytes.len(), std::mem::size_of::<WaveUniforms>());
    }
}
