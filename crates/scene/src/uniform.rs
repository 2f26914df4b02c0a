//! Named uniform upload.
//!
//! Shader programs expose their uniforms by name (`light.position`,
//! `lights[2].diffuse`, ...). The [`UniformSink`] trait is the program side of
//! that boundary; [`ToUniforms`] is implemented by anything that knows how to
//! write itself into a sink.
//!
//! # Example
//!
//! ```
//! use phong_scene::{RecordingSink, SpotLight, ToUniforms, UniformValue};
//! use glam::Vec3;
//!
//! let light = SpotLight::new().with_position(Vec3::new(0.0, 3.0, 0.0));
//! let mut sink = RecordingSink::new();
//! light.upload(SpotLight::UNIFORM_PREFIX, &mut sink)?;
//!
//! assert_eq!(
//!     sink.get("light.position"),
//!     Some(UniformValue::Vec3(Vec3::new(0.0, 3.0, 0.0)))
//! );
//! # Ok::<(), phong_scene::LightError>(())
//! ```

use glam::Vec3;
use tracing::trace;

use crate::error::{LightError, LightResult};
use crate::light::SpotLight;

/// A value that can be written to a shader uniform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UniformValue {
    /// `float`
    Float(f32),
    /// `int`
    Int(i32),
    /// `vec3`
    Vec3(Vec3),
}

/// Receiving side of a uniform upload, typically a linked shader program.
pub trait UniformSink {
    /// Set the uniform called `name` to `value`.
    ///
    /// Implementations report unknown names or type mismatches as
    /// [`LightError::Sink`].
    fn set_uniform(&mut self, name: &str, value: UniformValue) -> LightResult<()>;
}

/// Types that can write themselves into a [`UniformSink`].
pub trait ToUniforms {
    /// Upload every field as `{prefix}.{field}`.
    ///
    /// Stops at the first sink error and returns it.
    fn upload(&self, prefix: &str, sink: &mut dyn UniformSink) -> LightResult<()>;
}

impl ToUniforms for SpotLight {
    fn upload(&self, prefix: &str, sink: &mut dyn UniformSink) -> LightResult<()> {
        if prefix.is_empty() {
            return Err(LightError::EmptyUniformPrefix);
        }

        let fields = [
            ("position", self.position),
            ("attenuation", self.attenuation),
            ("ambient", self.ambient),
            ("diffuse", self.diffuse),
            ("specular", self.specular),
        ];
        for (field, value) in fields {
            sink.set_uniform(&format!("{prefix}.{field}"), UniformValue::Vec3(value))?;
        }

        trace!("Uploaded spot light uniforms under '{}'", prefix);
        Ok(())
    }
}

/// A sink that keeps every uniform it receives, in upload order.
///
/// Setting the same name twice keeps both entries; [`RecordingSink::get`]
/// returns the latest.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    entries: Vec<(String, UniformValue)>,
}

impl RecordingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest value written under `name`.
    pub fn get(&self, name: &str) -> Option<UniformValue> {
        self.entries
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    /// Number of recorded writes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget all recorded writes.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Recorded writes in upload order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, UniformValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }
}

impl UniformSink for RecordingSink {
    fn set_uniform(&mut self, name: &str, value: UniformValue) -> LightResult<()> {
        self.entries.push((name.to_owned(), value));
        Ok(())
    }
}
