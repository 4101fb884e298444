//! Generation pipeline.
//!
//! Strictly sequential: palette, then every entity's drawer frame by
//! frame (each raster persisted as it is produced), then the contact
//! sheet. The collected `entity -> animation -> frames` structure is the
//! sole handoff to the sheet assembler.

use thiserror::Error;

use crate::canvas::Raster;
use crate::palette::Palette;
use crate::roster::{roster, EntityDesc, EntityKind};
use crate::sheet;
use crate::sink::{SinkError, SpriteSink};

/// Errors from the generation pipeline.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),
}

/// Frames of one animation, in frame order.
#[derive(Debug, Clone)]
pub struct AnimationFrames {
    pub name: String,
    pub frames: Vec<Raster>,
}

/// All animations of one entity, in roster order.
#[derive(Debug, Clone)]
pub struct EntitySprites {
    pub name: String,
    pub animations: Vec<AnimationFrames>,
}

impl EntitySprites {
    /// Total frame count across animations.
    pub fn frame_count(&self) -> usize {
        self.animations.iter().map(|a| a.frames.len()).sum()
    }
}

/// Every generated raster, in generation order.
#[derive(Debug, Clone, Default)]
pub struct SpriteSet {
    pub entities: Vec<EntitySprites>,
}

impl SpriteSet {
    /// Total frame count across entities.
    pub fn frame_count(&self) -> usize {
        self.entities.iter().map(|e| e.frame_count()).sum()
    }
}

/// Generate and persist every frame of one entity.
pub fn generate_entity<S: SpriteSink>(
    entity: &EntityDesc,
    palette: &Palette,
    sink: &mut S,
) -> Result<EntitySprites, GenerateError> {
    let mut animations = Vec::with_capacity(entity.animations.len());
    for anim in entity.animations {
        let mut frames = Vec::with_capacity(anim.frames);
        for frame in 0..anim.frames {
            let mut raster = Raster::transparent(entity.width, entity.height);
            (entity.draw)(&mut raster, frame, anim.name, palette);
            match entity.kind {
                EntityKind::Animated => sink.write_frame(entity.name, anim.name, frame, &raster)?,
                EntityKind::Static => sink.write_still(entity.name, anim.name, &raster)?,
            }
            frames.push(raster);
        }
        animations.push(AnimationFrames {
            name: anim.name.to_string(),
            frames,
        });
    }
    Ok(EntitySprites {
        name: entity.name.to_string(),
        animations,
    })
}

/// Run the whole pipeline: every roster entity, then the contact sheet.
/// Returns the collected sprite set.
pub fn generate_all<S: SpriteSink>(sink: &mut S) -> Result<SpriteSet, GenerateError> {
    let palette = Palette::platformer();
    let mut set = SpriteSet::default();
    for entity in roster() {
        set.entities.push(generate_entity(&entity, &palette, sink)?);
    }
    if let Some(sheet) = sheet::assemble(&set) {
        sink.write_sheet(&sheet)?;
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sink that records what was written without touching the filesystem.
    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<(String, String, usize)>,
        stills: Vec<(String, String)>,
        sheets: usize,
    }

    impl SpriteSink for RecordingSink {
        fn write_frame(
            &mut self,
            entity: &str,
            animation: &str,
            frame: usize,
            _raster: &Raster,
        ) -> Result<(), SinkError> {
            self.frames
                .push((entity.to_string(), animation.to_string(), frame));
            Ok(())
        }

        fn write_still(
            &mut self,
            entity: &str,
            name: &str,
            _raster: &Raster,
        ) -> Result<(), SinkError> {
            self.stills.push((entity.to_string(), name.to_string()));
            Ok(())
        }

        fn write_sheet(&mut self, _raster: &Raster) -> Result<(), SinkError> {
            self.sheets += 1;
            Ok(())
        }
    }

    #[test]
    fn test_frame_counts_match_declarations() {
        let mut sink = RecordingSink::default();
        let set = generate_all(&mut sink).unwrap();

        for (entity, desc) in set.entities.iter().zip(roster()) {
            assert_eq!(entity.name, desc.name);
            for (anim, spec) in entity.animations.iter().zip(desc.animations) {
                assert_eq!(anim.name, spec.name);
                assert_eq!(
                    anim.frames.len(),
                    spec.frames,
                    "{}/{}",
                    desc.name,
                    spec.name
                );
            }
        }

        // 17 player + 6 slime + 10 coin + 2 goal + 7 tiles + 3 bg
        assert_eq!(set.frame_count(), 45);
        assert_eq!(sink.frames.len() + sink.stills.len(), 45);
        assert_eq!(sink.sheets, 1);
    }

    #[test]
    fn test_raster_sizes_are_constant_per_entity() {
        let mut sink = RecordingSink::default();
        let set = generate_all(&mut sink).unwrap();

        for entity in &set.entities {
            let expected_h = if entity.name == "player" || entity.name == "goal" {
                32
            } else {
                16
            };
            for anim in &entity.animations {
                for frame in &anim.frames {
                    assert_eq!(frame.width, 16, "{}/{}", entity.name, anim.name);
                    assert_eq!(frame.height, expected_h, "{}/{}", entity.name, anim.name);
                }
            }
        }
    }

    #[test]
    fn test_statics_written_by_name() {
        let mut sink = RecordingSink::default();
        generate_all(&mut sink).unwrap();

        assert!(sink
            .stills
            .contains(&("tiles".to_string(), "grass_top".to_string())));
        assert!(sink
            .stills
            .contains(&("bg".to_string(), "bush".to_string())));
        // No static entity ever goes through the indexed-frame path.
        assert!(sink
            .frames
            .iter()
            .all(|(entity, _, _)| entity != "tiles" && entity != "bg"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let mut a = RecordingSink::default();
        let mut b = RecordingSink::default();
        let set_a = generate_all(&mut a).unwrap();
        let set_b = generate_all(&mut b).unwrap();

        for (ea, eb) in set_a.entities.iter().zip(&set_b.entities) {
            for (aa, ab) in ea.animations.iter().zip(&eb.animations) {
                assert_eq!(aa.frames, ab.frames, "{}/{}", ea.name, aa.name);
            }
        }
    }
}
