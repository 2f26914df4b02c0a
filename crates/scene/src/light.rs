//! Spot light definition.
//!
//! A [`SpotLight`] is plain data: a world-space position, three attenuation
//! coefficients and the Phong colour channels. Nothing here evaluates
//! lighting; the values are handed to shaders as-is.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Constant, linear and quadratic falloff (x, y, z).
pub const DEFAULT_ATTENUATION: Vec3 = Vec3::new(1.0, 0.09, 0.032);
/// No ambient contribution.
pub const DEFAULT_AMBIENT: Vec3 = Vec3::ZERO;
/// White diffuse.
pub const DEFAULT_DIFFUSE: Vec3 = Vec3::ONE;
/// White specular.
pub const DEFAULT_SPECULAR: Vec3 = Vec3::ONE;

/// A spot light as seen by the shading pass.
///
/// No invariants are enforced: any float is stored verbatim, including
/// negative, infinite or NaN components.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpotLight {
    /// Light position in world space
    pub position: Vec3,
    /// Falloff coefficients: x = constant, y = linear, z = quadratic
    pub attenuation: Vec3,
    /// Ambient colour
    pub ambient: Vec3,
    /// Diffuse colour
    pub diffuse: Vec3,
    /// Specular colour
    pub specular: Vec3,
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            position: Vec3::default(),
            attenuation: DEFAULT_ATTENUATION,
            ambient: DEFAULT_AMBIENT,
            diffuse: DEFAULT_DIFFUSE,
            specular: DEFAULT_SPECULAR,
        }
    }
}

impl SpotLight {
    /// Struct name used by the lighting shaders for a single light.
    pub const UNIFORM_PREFIX: &'static str = "light";

    /// Create a spot light with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Builder method to set the attenuation coefficients.
    pub fn with_attenuation(mut self, attenuation: Vec3) -> Self {
        self.attenuation = attenuation;
        self
    }

    /// Builder method to set the ambient colour.
    pub fn with_ambient(mut self, ambient: Vec3) -> Self {
        self.ambient = ambient;
        self
    }

    /// Builder method to set the diffuse colour.
    pub fn with_diffuse(mut self, diffuse: Vec3) -> Self {
        self.diffuse = diffuse;
        self
    }

    /// Builder method to set the specular colour.
    pub fn with_specular(mut self, specular: Vec3) -> Self {
        self.specular = specular;
        self
    }

    /// Constant attenuation term.
    #[inline]
    pub fn constant(&self) -> f32 {
        self.attenuation.x
    }

    /// Linear attenuation term.
    #[inline]
    pub fn linear(&self) -> f32 {
        self.attenuation.y
    }

    /// Quadratic attenuation term.
    #[inline]
    pub fn quadratic(&self) -> f32 {
        self.attenuation.z
    }
}
