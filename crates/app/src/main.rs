//! Spot light rig demo.
//!
//! Builds a small rig of spot lights, uploads it through a sink that logs
//! every uniform, writes the rig to disk and reads it back.
//!
//! Usage: `phong-lights [RIG_PATH]` (defaults to `spotlights.rig`).

use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use glam::Vec3;
use tracing::{debug, info};

use phong_scene::{
    LightResult, SpotLight, SpotLights, ToUniforms, UniformSink, UniformValue,
};

const DEFAULT_RIG_PATH: &str = "spotlights.rig";

/// Stands in for a linked shader program: logs uniforms instead of setting them.
#[derive(Default)]
struct LoggingSink {
    writes: usize,
}

impl UniformSink for LoggingSink {
    fn set_uniform(&mut self, name: &str, value: UniformValue) -> LightResult<()> {
        match value {
            UniformValue::Vec3(v) => debug!("{} = ({:.3}, {:.3}, {:.3})", name, v.x, v.y, v.z),
            UniformValue::Float(f) => debug!("{} = {:.3}", name, f),
            UniformValue::Int(i) => debug!("{} = {}", name, i),
        }
        self.writes += 1;
        Ok(())
    }
}

fn build_rig() -> Result<SpotLights> {
    let mut rig = SpotLights::new();

    // Four lights around the origin, warm to cool
    let colors = [
        Vec3::new(1.0, 0.8, 0.6),
        Vec3::new(1.0, 1.0, 0.9),
        Vec3::new(0.8, 0.9, 1.0),
        Vec3::new(0.6, 0.7, 1.0),
    ];
    for (i, color) in colors.into_iter().enumerate() {
        let angle = i as f32 * std::f32::consts::FRAC_PI_2;
        let light = SpotLight::new()
            .with_position(Vec3::new(angle.cos() * 4.0, 3.0, angle.sin() * 4.0))
            .with_ambient(color * 0.05)
            .with_diffuse(color)
            .with_specular(color);
        rig.push(light)?;
    }

    Ok(rig)
}

fn main() -> Result<()> {
    // Initialize logging
    phong_core::init_logging();
    info!("Starting spot light demo");

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_RIG_PATH));

    let rig = build_rig()?;
    info!("Built rig with {} spot lights", rig.len());

    // Single-light path, as used by forward shaders with one `light` struct
    let mut sink = LoggingSink::default();
    if let Some(key_light) = rig.get(0) {
        key_light.upload(SpotLight::UNIFORM_PREFIX, &mut sink)?;
    }
    rig.upload(SpotLights::UNIFORM_ARRAY, &mut sink)?;
    info!("Uploaded {} uniforms", sink.writes);

    let ubo = rig.to_ubo();
    info!(
        "Uniform block: {} bytes, {} active lights",
        phong_scene::SpotLightsUbo::size(),
        ubo.count
    );

    rig.write_to_file(&path)
        .with_context(|| format!("Failed to write rig to {:?}", path))?;
    let loaded = SpotLights::read_from_file(&path)
        .with_context(|| format!("Failed to read rig from {:?}", path))?;
    ensure!(loaded == rig, "Rig read from {:?} differs from the one written", path);

    info!("Rig round-trip through {:?} complete", path);
    Ok(())
}
