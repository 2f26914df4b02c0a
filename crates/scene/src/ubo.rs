//! Uniform buffer layout for spot lights.
//!
//! Shaders that read lights from a uniform block instead of loose uniforms
//! use these structures. Both are `#[repr(C)]` and implement
//! `bytemuck::Pod`, so they can be copied straight into a mapped buffer.
//!
//! # GPU Memory Layout
//!
//! std140 rules apply: every `vec3` occupies 16 bytes, so each `Vec3` field is
//! followed by one `f32` of padding.
//!
//! # Example
//!
//! ```
//! use phong_scene::{SpotLight, SpotLightUbo};
//!
//! let ubo = SpotLightUbo::from(&SpotLight::new());
//! let bytes: &[u8] = bytemuck::bytes_of(&ubo);
//! assert_eq!(bytes.len(), SpotLightUbo::size());
//! ```

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::light::SpotLight;

/// Largest number of spot lights a [`SpotLightsUbo`] can hold.
///
/// Must match the array length declared in the lighting shaders.
pub const MAX_SPOT_LIGHTS: usize = 16;

/// A single spot light in std140 layout.
///
/// # Memory Layout (std140)
///
/// | Offset | Size | Field |
/// |--------|------|-------|
/// | 0      | 12   | position |
/// | 16     | 12   | attenuation |
/// | 32     | 12   | ambient |
/// | 48     | 12   | diffuse |
/// | 64     | 12   | specular |
///
/// Total size: 80 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct SpotLightUbo {
    pub position: Vec3,
    pub _pad0: f32,
    pub attenuation: Vec3,
    pub _pad1: f32,
    pub ambient: Vec3,
    pub _pad2: f32,
    pub diffuse: Vec3,
    pub _pad3: f32,
    pub specular: Vec3,
    pub _pad4: f32,
}

impl SpotLightUbo {
    /// Returns the size of this structure in bytes.
    #[inline]
    pub const fn size() -> usize {
        std::mem::size_of::<Self>()
    }

    /// Rebuild the light this block was made from.
    pub fn to_light(&self) -> SpotLight {
        SpotLight {
            position: self.position,
            attenuation: self.attenuation,
            ambient: self.ambient,
            diffuse: self.diffuse,
            specular: self.specular,
        }
    }
}

impl From<&SpotLight> for SpotLightUbo {
    fn from(light: &SpotLight) -> Self {
        Self {
            position: light.position,
            attenuation: light.attenuation,
            ambient: light.ambient,
            diffuse: light.diffuse,
            specular: light.specular,
            ..Self::zeroed()
        }
    }
}

impl From<SpotLight> for SpotLightUbo {
    fn from(light: SpotLight) -> Self {
        Self::from(&light)
    }
}

/// Every spot light of a scene in one uniform block.
///
/// Slots past `count` are zeroed.
///
/// # Memory Layout (std140)
///
/// | Offset | Size | Field |
/// |--------|------|-------|
/// | 0      | 1280 | lights |
/// | 1280   | 4    | count |
/// | 1284   | 12   | _padding |
///
/// Total size: 1296 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SpotLightsUbo {
    pub lights: [SpotLightUbo; MAX_SPOT_LIGHTS],
    pub count: u32,
    pub _padding: [u32; 3],
}

impl Default for SpotLightsUbo {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl SpotLightsUbo {
    /// Pack up to [`MAX_SPOT_LIGHTS`] lights; extra lights are ignored.
    pub fn from_lights<'a>(lights: impl IntoIterator<Item = &'a SpotLight>) -> Self {
        let mut ubo = Self::zeroed();
        for (slot, light) in ubo.lights.iter_mut().zip(lights) {
            *slot = SpotLightUbo::from(light);
            ubo.count += 1;
        }
        ubo
    }

    /// The occupied slots.
    ///
    /// A `count` past [`MAX_SPOT_LIGHTS`] (e.g. from a block cast out of raw
    /// bytes) yields every slot.
    pub fn active(&self) -> &[SpotLightUbo] {
        &self.lights[..(self.count as usize).min(MAX_SPOT_LIGHTS)]
    }

    /// Returns the size of this structure in bytes.
    #[inline]
    pub const fn size() -> usize {
        std::mem::size_of::<Self>()
    }
}
