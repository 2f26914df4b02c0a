//! Scene lighting data.
//!
//! This crate provides the spot lights a scene owns and the ways they reach
//! the shaders:
//! - [`SpotLight`] parameter definitions
//! - Named uniform upload through [`UniformSink`]
//! - std140 uniform blocks ([`SpotLightUbo`], [`SpotLightsUbo`])
//! - The bounded [`SpotLights`] collection and its rig files

mod error;
pub mod light;
pub mod rig;
pub mod ubo;
pub mod uniform;

pub use error::{LightError, LightResult};
pub use light::SpotLight;
pub use rig::SpotLights;
pub use ubo::{MAX_SPOT_LIGHTS, SpotLightUbo, SpotLightsUbo};
pub use uniform::{RecordingSink, ToUniforms, UniformSink, UniformValue};
