//! The spot lights owned by a scene.
//!
//! [`SpotLights`] is a bounded list: the lighting shaders declare a fixed-size
//! array, so the collection refuses to grow past it instead of silently
//! dropping lights at upload time.
//!
//! Rigs persist as bincode, lz4-compressed with the size prepended.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{LightError, LightResult};
use crate::light::SpotLight;
use crate::ubo::{MAX_SPOT_LIGHTS, SpotLightsUbo};
use crate::uniform::{ToUniforms, UniformSink, UniformValue};

/// Bounded, ordered collection of spot lights.
#[derive(Clone, Debug, PartialEq)]
pub struct SpotLights {
    lights: Vec<SpotLight>,
    capacity: usize,
}

/// On-disk form of a rig.
#[derive(Serialize, Deserialize)]
struct RigFile {
    capacity: usize,
    lights: Vec<SpotLight>,
}

impl Default for SpotLights {
    fn default() -> Self {
        Self::new()
    }
}

impl SpotLights {
    /// Array name used by the lighting shaders.
    pub const UNIFORM_ARRAY: &'static str = "lights";

    /// Create an empty collection holding up to [`MAX_SPOT_LIGHTS`].
    pub fn new() -> Self {
        Self::with_capacity(MAX_SPOT_LIGHTS)
    }

    /// Create an empty collection with a smaller limit.
    ///
    /// `capacity` is clamped to `1..=MAX_SPOT_LIGHTS`.
    pub fn with_capacity(capacity: usize) -> Self {
        let clamped = capacity.clamp(1, MAX_SPOT_LIGHTS);
        if clamped != capacity {
            warn!("Spot light capacity {} clamped to {}", capacity, clamped);
        }
        Self {
            lights: Vec::with_capacity(clamped),
            capacity: clamped,
        }
    }

    /// Append a light and return its index.
    pub fn push(&mut self, light: SpotLight) -> LightResult<usize> {
        if self.lights.len() >= self.capacity {
            return Err(LightError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.lights.push(light);
        Ok(self.lights.len() - 1)
    }

    /// Remove the light at `index`, shifting later lights down.
    pub fn remove(&mut self, index: usize) -> LightResult<SpotLight> {
        if index >= self.lights.len() {
            return Err(LightError::IndexOutOfRange {
                index,
                len: self.lights.len(),
            });
        }
        Ok(self.lights.remove(index))
    }

    /// Light at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&SpotLight> {
        self.lights.get(index)
    }

    /// Mutable light at `index`, if any.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut SpotLight> {
        self.lights.get_mut(index)
    }

    /// Remove every light; the capacity is unchanged.
    pub fn clear(&mut self) {
        self.lights.clear();
    }

    /// Number of lights.
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    /// Whether the collection holds no lights.
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Maximum number of lights.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Lights in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, SpotLight> {
        self.lights.iter()
    }

    /// Mutable lights in index order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, SpotLight> {
        self.lights.iter_mut()
    }

    /// Upload every light as `{array_name}[i].{field}`, then
    /// `{array_name}_count`.
    pub fn upload(&self, array_name: &str, sink: &mut dyn UniformSink) -> LightResult<()> {
        if array_name.is_empty() {
            return Err(LightError::EmptyUniformPrefix);
        }

        for (i, light) in self.lights.iter().enumerate() {
            light.upload(&format!("{array_name}[{i}]"), sink)?;
        }
        sink.set_uniform(
            &format!("{array_name}_count"),
            UniformValue::Int(self.lights.len() as i32),
        )?;

        debug!("Uploaded {} spot lights to '{}'", self.lights.len(), array_name);
        Ok(())
    }

    /// Pack the lights into a uniform block.
    pub fn to_ubo(&self) -> SpotLightsUbo {
        SpotLightsUbo::from_lights(&self.lights)
    }

    /// Encode the rig into compressed bytes.
    pub fn to_bytes(&self) -> LightResult<Vec<u8>> {
        let file = RigFile {
            capacity: self.capacity,
            lights: self.lights.clone(),
        };
        let bytes = bincode::serialize(&file)?;
        Ok(lz4_flex::compress_prepend_size(&bytes))
    }

    /// Decode a rig produced by [`SpotLights::to_bytes`].
    ///
    /// The stored capacity is clamped like [`SpotLights::with_capacity`];
    /// more lights than that is an error.
    pub fn from_bytes(bytes: &[u8]) -> LightResult<Self> {
        let decompressed = lz4_flex::decompress_size_prepended(bytes)?;
        let file: RigFile = bincode::deserialize(&decompressed)?;

        let mut rig = Self::with_capacity(file.capacity);
        for light in file.lights {
            rig.push(light)?;
        }
        Ok(rig)
    }

    /// Write the rig to `path`.
    pub fn write_to_file<P>(&self, path: P) -> LightResult<()>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        fs::write(path, self.to_bytes()?)?;
        info!("Saved {} spot lights to {:?}", self.lights.len(), path);
        Ok(())
    }

    /// Read a rig written by [`SpotLights::write_to_file`].
    pub fn read_from_file<P>(path: P) -> LightResult<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let rig = Self::from_bytes(&fs::read(path)?)?;
        info!("Loaded {} spot lights from {:?}", rig.len(), path);
        Ok(rig)
    }

    /// Read a rig, or start empty if the file is missing or unreadable.
    pub fn read_from_file_or_default<P>(path: P) -> Self
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        match Self::read_from_file(path) {
            Ok(rig) => rig,
            Err(e) => {
                warn!("Using empty spot light rig, could not read {:?}: {}", path, e);
                Self::new()
            }
        }
    }
}

impl<'a> IntoIterator for &'a SpotLights {
    type Item = &'a SpotLight;
    type IntoIter = std::slice::Iter<'a, SpotLight>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uniform::RecordingSink;
    use glam::Vec3;

    #[test]
    fn test_push_returns_index() {
        let mut rig = SpotLights::new();

        assert_eq!(rig.push(SpotLight::new()).unwrap(), 0);
        assert_eq!(rig.push(SpotLight::new()).unwrap(), 1);
        assert_eq!(rig.len(), 2);
        assert!(!rig.is_empty());
    }

    #[test]
    fn test_capacity_exceeded() {
        let mut rig = SpotLights::with_capacity(2);
        rig.push(SpotLight::new()).unwrap();
        rig.push(SpotLight::new()).unwrap();

        let result = rig.push(SpotLight::new());
        assert!(matches!(
            result,
            Err(LightError::CapacityExceeded { capacity: 2 })
        ));
        assert_eq!(rig.len(), 2);
    }

    #[test]
    fn test_capacity_clamped() {
        assert_eq!(SpotLights::with_capacity(0).capacity(), 1);
        assert_eq!(
            SpotLights::with_capacity(MAX_SPOT_LIGHTS * 2).capacity(),
            MAX_SPOT_LIGHTS
        );
        assert_eq!(SpotLights::default().capacity(), MAX_SPOT_LIGHTS);
    }

    #[test]
    fn test_remove_shifts() {
        let mut rig = SpotLights::new();
        rig.push(SpotLight::new().with_position(Vec3::X)).unwrap();
        rig.push(SpotLight::new().with_position(Vec3::Y)).unwrap();
        rig.push(SpotLight::new().with_position(Vec3::Z)).unwrap();

        let removed = rig.remove(1).unwrap();
        assert_eq!(removed.position, Vec3::Y);
        assert_eq!(rig.get(1).unwrap().position, Vec3::Z);
        assert!(rig.get(2).is_none());

        rig.clear();
        assert!(rig.is_empty());
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut rig = SpotLights::new();
        rig.push(SpotLight::new()).unwrap();

        assert!(matches!(
            rig.remove(3),
            Err(LightError::IndexOutOfRange { index: 3, len: 1 })
        ));
    }

    #[test]
    fn test_get_mut_edits_in_place() {
        let mut rig = SpotLights::new();
        rig.push(SpotLight::new()).unwrap();

        rig.get_mut(0).unwrap().specular = Vec3::splat(0.5);
        for light in rig.iter_mut() {
            light.ambient = Vec3::splat(0.1);
        }

        let light = rig.get(0).unwrap();
        assert_eq!(light.specular, Vec3::splat(0.5));
        assert_eq!(light.ambient, Vec3::splat(0.1));
    }

    #[test]
    fn test_upload_array_names() {
        let mut rig = SpotLights::new();
        rig.push(SpotLight::new()).unwrap();
        rig.push(SpotLight::new().with_position(Vec3::new(0.0, 5.0, 0.0)))
            .unwrap();

        let mut sink = RecordingSink::new();
        rig.upload(SpotLights::UNIFORM_ARRAY, &mut sink).unwrap();

        // 5 fields per light plus the count
        assert_eq!(sink.len(), 11);
        assert_eq!(
            sink.get("lights[1].position"),
            Some(UniformValue::Vec3(Vec3::new(0.0, 5.0, 0.0)))
        );
        assert_eq!(
            sink.get("lights[0].specular"),
            Some(UniformValue::Vec3(Vec3::ONE))
        );
        assert_eq!(sink.get("lights_count"), Some(UniformValue::Int(2)));
    }

    #[test]
    fn test_upload_empty_rig_writes_count() {
        let mut sink = RecordingSink::new();
        SpotLights::new().upload("spots", &mut sink).unwrap();

        assert_eq!(sink.len(), 1);
        assert_eq!(sink.get("spots_count"), Some(UniformValue::Int(0)));
    }

    #[test]
    fn test_upload_empty_name() {
        let mut sink = RecordingSink::new();

        assert!(matches!(
            SpotLights::new().upload("", &mut sink),
            Err(LightError::EmptyUniformPrefix)
        ));
    }

    #[test]
    fn test_to_ubo() {
        let mut rig = SpotLights::new();
        rig.push(SpotLight::new().with_diffuse(Vec3::X)).unwrap();

        let ubo = rig.to_ubo();
        assert_eq!(ubo.count, 1);
        assert_eq!(ubo.lights[0].diffuse, Vec3::X);
    }

    #[test]
    fn test_bytes_round_trip() {
        let mut rig = SpotLights::new();
        rig.push(
            SpotLight::new()
                .with_position(Vec3::new(1.0, -2.0, 3.5))
                .with_attenuation(Vec3::new(1.0, 0.35, 0.44)),
        )
        .unwrap();
        rig.push(SpotLight::new().with_ambient(Vec3::splat(0.05)))
            .unwrap();

        let restored = SpotLights::from_bytes(&rig.to_bytes().unwrap()).unwrap();
        assert_eq!(restored, rig);
    }

    #[test]
    fn test_bytes_round_trip_keeps_capacity() {
        let mut rig = SpotLights::with_capacity(2);
        rig.push(SpotLight::new().with_position(Vec3::Y)).unwrap();

        let mut restored = SpotLights::from_bytes(&rig.to_bytes().unwrap()).unwrap();
        assert_eq!(restored.capacity(), 2);
        assert_eq!(restored, rig);

        restored.push(SpotLight::new()).unwrap();
        assert!(matches!(
            restored.push(SpotLight::new()),
            Err(LightError::CapacityExceeded { capacity: 2 })
        ));
    }

    #[test]
    fn test_from_bytes_clamps_stored_capacity() {
        let file = RigFile {
            capacity: MAX_SPOT_LIGHTS * 4,
            lights: vec![SpotLight::new()],
        };
        let bytes = lz4_flex::compress_prepend_size(&bincode::serialize(&file).unwrap());

        let rig = SpotLights::from_bytes(&bytes).unwrap();
        assert_eq!(rig.capacity(), MAX_SPOT_LIGHTS);
        assert_eq!(rig.len(), 1);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(SpotLights::from_bytes(&[1, 2, 3]).is_err());
        assert!(SpotLights::from_bytes(&[]).is_err());
    }

    #[test]
    fn test_from_bytes_over_capacity() {
        let file = RigFile {
            capacity: MAX_SPOT_LIGHTS,
            lights: vec![SpotLight::new(); MAX_SPOT_LIGHTS + 1],
        };
        let bytes = lz4_flex::compress_prepend_size(&bincode::serialize(&file).unwrap());

        assert!(matches!(
            SpotLights::from_bytes(&bytes),
            Err(LightError::CapacityExceeded { .. })
        ));
    }
}
