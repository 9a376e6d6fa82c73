// src/generator/mod.rs

mod ids;
mod random;

pub use ids::{ObjectIdAllocator, FIRST_GENERATED_ID, GROUND_ID, PLAYER_START_ID};
pub use random::{RandomSource, RngSource, ScriptedSource};

use crate::config::GeneratorConfig;
use crate::document::{write_level_text, LevelDocument};
use crate::error::{ConfigError, LevelError};
use crate::map::{Footprint, ObjectKind, PlacedObject};
use log::{debug, info};
use rand::Rng;
use std::path::Path;

/// Counts gathered during one placement pass.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct GenerationStats {
    pub spikes: usize,
    pub tall_blocks: usize,
    pub wide_blocks: usize,
    pub last_obstacle_x: Option<i32>,
}

impl GenerationStats {
    pub fn obstacle_count(&self) -> usize {
        self.spikes + self.tall_blocks + self.wide_blocks
    }

    fn record(&mut self, obj: &PlacedObject) {
        match obj.kind {
            ObjectKind::Spike => self.spikes += 1,
            ObjectKind::TallBlock => self.tall_blocks += 1,
            ObjectKind::WideBlock => self.wide_blocks += 1,
            _ => return,
        }
        self.last_obstacle_x = Some(obj.footprint.x);
    }
}

/// Builds platformer levels from a validated configuration.
#[derive(Debug, Clone)]
pub struct LevelGenerator {
    config: GeneratorConfig,
}

impl LevelGenerator {
    /// Fails fast on any configuration the placement pass cannot honor.
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(LevelGenerator { config })
    }

    /// Runs one full pass and returns the finished document.
    pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> LevelDocument {
        self.generate_with_stats(rng).0
    }

    pub fn generate_with_stats<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> (LevelDocument, GenerationStats) {
        let cfg = &self.config;
        let tile = cfg.tile_px();

        let mut objects = Vec::with_capacity(cfg.max_obstacles() + 3);
        objects.push(PlacedObject::new(
            PLAYER_START_ID,
            ObjectKind::PlayerStart,
            Footprint::new(cfg.player_start_x, cfg.player_start_y, tile, tile),
        ));
        objects.push(PlacedObject::new(
            GROUND_ID,
            ObjectKind::Ground,
            Footprint::new(0, cfg.ground_y, cfg.ground_width, tile),
        ));

        let mut ids = ObjectIdAllocator::default();
        let mut stats = GenerationStats::default();
        for obj in self.place_obstacles(rng, &mut ids) {
            stats.record(&obj);
            objects.push(obj);
        }

        let end_flag = PlacedObject::new(
            ids.next_id(),
            ObjectKind::EndFlag,
            Footprint::new(cfg.end_flag_x, 0, tile, cfg.end_flag_height),
        );
        debug_assert!(
            objects.iter().all(|obj| !obj.kind.is_obstacle()
                || obj.footprint.right() < end_flag.footprint.x),
            "end flag overlaps an obstacle footprint"
        );
        objects.push(end_flag);

        info!(
            "Generated '{}': {} obstacles ({} spikes, {} tall blocks, {} wide blocks)",
            cfg.level_name,
            stats.obstacle_count(),
            stats.spikes,
            stats.tall_blocks,
            stats.wide_blocks
        );

        (LevelDocument::from_config(cfg, objects), stats)
    }

    /// Walks the cursor across the obstacle span, dropping one obstacle per stop.
    ///
    /// The bound is checked before each placement, so the last obstacle starts
    /// below `obstacle_end_x` but its footprint may extend past it.
    pub fn place_obstacles<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        ids: &mut ObjectIdAllocator,
    ) -> Vec<PlacedObject> {
        let cfg = &self.config;
        let mut placed = Vec::with_capacity(cfg.max_obstacles());
        let mut cursor = cfg.obstacle_start_x;

        while cursor < cfg.obstacle_end_x {
            let kind = ObjectKind::from_roll(rng.unit());
            let id = ids.next_id();
            if let Some(obj) = PlacedObject::obstacle(id, kind, cursor, cfg.ground_y) {
                debug!("Placed {:?} #{} at x={}", kind, id, cursor);
                placed.push(obj);
            }

            let step = rng.int_inclusive(cfg.step_min, cfg.step_max);
            cursor = match cursor.checked_add(step) {
                Some(next) => next,
                None => break,
            };
        }
        placed
    }
}

/// Picks a fresh seed when none is given. The seed is logged so the run can be
/// repeated.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    info!("Using seed {}", seed);
    seed
}

/// Generates a level and returns its TMX text.
pub fn generate(seed: Option<u64>, config: &GeneratorConfig) -> Result<String, LevelError> {
    let generator = LevelGenerator::new(config.clone())?;
    let mut rng = RngSource::seeded(resolve_seed(seed));
    Ok(generator.generate(&mut rng).to_tmx())
}

/// Generates a level and writes it to `path`.
///
/// Configuration is validated before the file is opened, so a rejected
/// configuration leaves nothing on disk.
pub fn generate_to_path(
    seed: Option<u64>,
    config: &GeneratorConfig,
    path: &Path,
) -> Result<(), LevelError> {
    let text = generate(seed, config)?;
    write_level_text(path, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn object_ids(doc: &LevelDocument) -> Vec<u32> {
        doc.objects().iter().map(|obj| obj.id).collect()
    }

    #[test]
    fn test_same_seed_same_output() {
        let config = GeneratorConfig::default();
        let a = generate(Some(1234), &config).unwrap();
        let b = generate(Some(1234), &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_usually_differ() {
        let config = GeneratorConfig::default();
        let a = generate(Some(1), &config).unwrap();
        let b = generate(Some(2), &config).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_classification_sequence() {
        let generator = LevelGenerator::new(GeneratorConfig::default()).unwrap();
        let mut rng = ScriptedSource::new(vec![0.1, 0.5, 0.9]);
        let doc = generator.generate(&mut rng);

        let first_three: Vec<_> = doc.obstacles().take(3).collect();
        assert_eq!(first_three[0].kind, ObjectKind::Spike);
        assert_eq!(first_three[0].footprint, Footprint::new(800, 416, 32, 32));
        assert_eq!(first_three[1].kind, ObjectKind::TallBlock);
        assert_eq!(first_three[1].footprint, Footprint::new(1200, 384, 32, 64));
        assert_eq!(first_three[2].kind, ObjectKind::WideBlock);
        assert_eq!(first_three[2].footprint, Footprint::new(1600, 352, 64, 96));
    }

    #[test]
    fn test_fixed_anchors_do_not_depend_on_rolls() {
        let generator = LevelGenerator::new(GeneratorConfig::default()).unwrap();
        for seed in [0, 7, 99, 31337] {
            let doc = generator.generate(&mut RngSource::seeded(seed));
            assert_eq!(doc.obstacles().next().unwrap().footprint.x, 800);
            assert_eq!(doc.end_flag().unwrap().footprint.x, 15500);
        }
    }

    #[test]
    fn test_required_objects_present_once() {
        let generator = LevelGenerator::new(GeneratorConfig::default()).unwrap();
        let doc = generator.generate(&mut RngSource::seeded(5));
        let count = |kind| doc.objects().iter().filter(|o| o.kind == kind).count();
        assert_eq!(count(ObjectKind::PlayerStart), 1);
        assert_eq!(count(ObjectKind::Ground), 1);
        assert_eq!(count(ObjectKind::EndFlag), 1);

        assert_eq!(doc.objects()[0].id, PLAYER_START_ID);
        assert_eq!(doc.objects()[1].footprint, Footprint::new(0, 448, 16000, 32));
        assert_eq!(doc.objects().last().unwrap().kind, ObjectKind::EndFlag);
    }

    #[test]
    fn test_ids_unique_and_increasing() {
        let generator = LevelGenerator::new(GeneratorConfig::default()).unwrap();
        for seed in 0..20 {
            let doc = generator.generate(&mut RngSource::seeded(seed));
            let ids = object_ids(&doc);
            assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids {:?}", ids);
            assert!(doc.next_object_id() > *ids.last().unwrap());
        }
    }

    #[test]
    fn test_spatial_ordering() {
        let generator = LevelGenerator::new(GeneratorConfig::default()).unwrap();
        for seed in 0..20 {
            let doc = generator.generate(&mut RngSource::seeded(seed));
            let flag_x = doc.end_flag().unwrap().footprint.x;
            let xs: Vec<i32> = doc.obstacles().map(|o| o.footprint.x).collect();
            assert!(xs.windows(2).all(|w| w[0] <= w[1]));
            assert!(xs.iter().all(|&x| x < 15000));
            assert!(doc
                .objects()
                .iter()
                .filter(|o| o.kind != ObjectKind::EndFlag)
                .all(|o| o.footprint.x < flag_x));
        }
    }

    #[test]
    fn test_obstacle_count_bounded() {
        let config = GeneratorConfig::default();
        let bound = config.max_obstacles();
        let generator = LevelGenerator::new(config).unwrap();
        for seed in 0..20 {
            let (doc, stats) = generator.generate_with_stats(&mut RngSource::seeded(seed));
            assert!(stats.obstacle_count() <= bound);
            assert_eq!(doc.obstacles().count(), stats.obstacle_count());
        }

        // Always stepping by step_min hits the bound exactly.
        let (_, stats) = generator.generate_with_stats(&mut ScriptedSource::new(vec![0.2]));
        assert_eq!(stats.obstacle_count(), bound);
        assert_eq!(stats.spikes, bound);
        assert_eq!(stats.last_obstacle_x, Some(800 + 400 * (bound as i32 - 1)));
    }

    #[test]
    fn test_last_obstacle_may_overhang_span_end() {
        let config = GeneratorConfig {
            obstacle_start_x: 0,
            obstacle_end_x: 1000,
            step_min: 990,
            step_max: 990,
            end_flag_x: 2000,
            ..GeneratorConfig::default()
        };
        let generator = LevelGenerator::new(config).unwrap();
        let doc = generator.generate(&mut ScriptedSource::new(vec![0.9]));
        let xs: Vec<i32> = doc.obstacles().map(|o| o.footprint.x).collect();
        assert_eq!(xs, vec![0, 990]);
        let last = doc.obstacles().last().unwrap();
        assert_eq!(last.footprint.right(), 1054);
    }

    #[test]
    fn test_grid_shape_in_output() {
        let config = GeneratorConfig {
            canvas_width_tiles: 7,
            canvas_height_tiles: 4,
            ..GeneratorConfig::default()
        };
        let text = generate(Some(3), &config).unwrap();
        let start = text.find("<data encoding=\"csv\">\n").unwrap() + "<data encoding=\"csv\">\n".len();
        let end = text.find("\n</data>").unwrap();
        let rows: Vec<&str> = text[start..end].lines().collect();
        assert_eq!(rows.len(), 4);
        for row in rows {
            let cells: Vec<&str> = row.split(',').filter(|c| !c.is_empty()).collect();
            assert_eq!(cells.len(), 7);
            assert!(cells.iter().all(|c| c.parse::<u32>() == Ok(0)));
        }
    }

    #[test]
    fn test_ground_spans_canvas_and_end_flag_on_long_track() {
        let config = GeneratorConfig {
            canvas_width_tiles: 1000,
            obstacle_end_x: 30000,
            end_flag_x: 30500,
            ground_width: 32000,
            ..GeneratorConfig::default()
        };
        let canvas_px = 1000 * 32;
        let generator = LevelGenerator::new(config).unwrap();
        let doc = generator.generate(&mut RngSource::seeded(1));

        let ground = doc.objects()[1].footprint;
        let flag = doc.end_flag().unwrap().footprint;
        assert_eq!(ground.x, 0);
        assert!(ground.right() >= canvas_px);
        assert!(ground.right() >= flag.right());
        assert!(doc.obstacles().all(|o| o.footprint.right() <= ground.right()));
    }

    #[test]
    fn test_stock_ground_too_short_for_long_track() {
        let config = GeneratorConfig {
            canvas_width_tiles: 1000,
            obstacle_end_x: 30000,
            end_flag_x: 30500,
            ..GeneratorConfig::default()
        };
        let err = generate(Some(1), &config).unwrap_err();
        assert!(matches!(
            err,
            LevelError::Configuration(ConfigError::GroundTooShort { ground_width: 16000, .. })
        ));
    }

    #[test]
    fn test_huge_tile_size_is_rejected_not_wrapped() {
        let config = GeneratorConfig {
            tile_size_px: 3_000_000_000,
            ..GeneratorConfig::default()
        };
        let err = generate(Some(1), &config).unwrap_err();
        assert!(matches!(
            err,
            LevelError::Configuration(ConfigError::TileSizeTooLarge(3_000_000_000))
        ));
    }

    #[test]
    fn test_end_flag_at_coordinate_limit_is_rejected() {
        let config = GeneratorConfig {
            player_start_x: i32::MAX - 10,
            end_flag_x: i32::MAX,
            ..GeneratorConfig::default()
        };
        let err = generate(Some(1), &config).unwrap_err();
        assert!(matches!(
            err,
            LevelError::Configuration(ConfigError::GroundTooShort { .. })
        ));
    }

    #[test]
    fn test_track_near_coordinate_limit_generates() {
        let config = GeneratorConfig {
            obstacle_start_x: i32::MAX - 2000,
            obstacle_end_x: i32::MAX - 200,
            player_start_x: i32::MAX - 3000,
            end_flag_x: i32::MAX - 32,
            ground_width: i32::MAX,
            ..GeneratorConfig::default()
        };
        let generator = LevelGenerator::new(config).unwrap();
        let doc = generator.generate(&mut RngSource::seeded(9));
        let flag = doc.end_flag().unwrap().footprint;
        assert_eq!(flag.right(), i32::MAX);
        assert!(doc.obstacles().count() >= 1);
        assert!(doc.obstacles().all(|o| o.footprint.right() < flag.x));
    }

    #[test]
    fn test_rejected_config_writes_nothing() {
        let config = GeneratorConfig {
            obstacle_start_x: 1000,
            obstacle_end_x: 500,
            ..GeneratorConfig::default()
        };
        let path = std::env::temp_dir().join(format!("level_gen_rejected_{}.tmx", std::process::id()));
        let _ = fs::remove_file(&path);

        let err = generate_to_path(Some(1), &config, &path).unwrap_err();
        assert!(matches!(
            err,
            LevelError::Configuration(ConfigError::EmptySpan { start: 1000, end: 500 })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_generate_to_path_writes_document() {
        let path = std::env::temp_dir().join(format!("level_gen_ok_{}.tmx", std::process::id()));
        let config = GeneratorConfig::default();

        generate_to_path(Some(11), &config, &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, generate(Some(11), &config).unwrap());
        assert!(written.ends_with("</objectgroup>\n</map>"));

        fs::remove_file(&path).unwrap();
    }
}
