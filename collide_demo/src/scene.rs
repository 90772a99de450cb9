//! Scene description loaded from disk
//!
//! A scene is a list of named bodies, each a world position plus a collider
//! description. Shapes are built through the clamping constructors, so a
//! negative size in the file ends up as zero, same as a setter call.

use collide2d::config::{Config, ConfigError, Tolerances};
use collide2d::foundation::math::Vec2;
use collide2d::physics::{Collider, CollisionLayers, Shape};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Shape as written in a scene file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShapeDesc {
    /// A point at an offset
    Point { x: f32, y: f32 },
    /// A segment between two offsets
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    /// A box from its top-left offset
    Rectangle { x: f32, y: f32, width: f32, height: f32 },
    /// A circle around an offset
    Circle { x: f32, y: f32, radius: f32 },
}

impl From<ShapeDesc> for Shape {
    fn from(desc: ShapeDesc) -> Self {
        match desc {
            ShapeDesc::Point { x, y } => Shape::point(x, y),
            ShapeDesc::Line { x1, y1, x2, y2 } => Shape::line(x1, y1, x2, y2),
            ShapeDesc::Rectangle { x, y, width, height } => Shape::rectangle(x, y, width, height),
            ShapeDesc::Circle { x, y, radius } => Shape::circle(x, y, radius),
        }
    }
}

/// One entity in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Unique name used in reports
    pub name: String,
    /// World position of the entity
    pub position: (f32, f32),
    /// Collision shape relative to `position`
    pub shape: ShapeDesc,
    /// Layers the body sits on
    #[serde(default)]
    pub layer: CollisionLayers,
    /// Layers the body collides with
    #[serde(default)]
    pub mask: CollisionLayers,
}

impl Body {
    /// Builds the collider for this body
    pub fn collider(&self) -> Collider {
        Collider::new(self.shape.into()).with_layers(self.layer, self.mask)
    }

    /// World position as a vector
    pub fn world_position(&self) -> Vec2 {
        Vec2::new(self.position.0, self.position.1)
    }
}

/// A whole scene file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Tolerances for every test in the scene
    #[serde(default)]
    pub tolerances: Tolerances,
    /// Bodies to test pairwise
    #[serde(default)]
    pub bodies: Vec<Body>,
}

impl Config for Scene {}

/// Scene errors
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    /// The file could not be read or parsed
    #[error("failed to load scene: {0}")]
    Load(#[from] ConfigError),

    /// Two bodies share a name
    #[error("duplicate body name: {0}")]
    DuplicateBody(String),
}

/// A colliding pair of bodies, by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// First body, in file order
    pub a: String,
    /// Second body, in file order
    pub b: String,
}

impl Scene {
    /// Load a scene from a `.ron` or `.toml` file and validate it
    pub fn load(path: &str) -> Result<Self, SceneError> {
        let scene = Self::load_from_file(path)?;
        scene.validate()?;
        log::info!("Loaded {} bodies from {}", scene.bodies.len(), path);
        Ok(scene)
    }

    /// Reject scenes whose bodies cannot be told apart
    pub fn validate(&self) -> Result<(), SceneError> {
        let mut seen = HashSet::new();
        for body in &self.bodies {
            if !seen.insert(body.name.as_str()) {
                return Err(SceneError::DuplicateBody(body.name.clone()));
            }
        }
        Ok(())
    }

    /// Test every unordered pair of bodies once
    pub fn contacts(&self) -> Vec<Contact> {
        let colliders: Vec<Collider> = self.bodies.iter().map(Body::collider).collect();

        let mut contacts = Vec::new();
        for (i, a) in self.bodies.iter().enumerate() {
            for (j, b) in self.bodies.iter().enumerate().skip(i + 1) {
                let hit = colliders[i].collides_with_tolerances(
                    a.world_position(),
                    &colliders[j],
                    b.world_position(),
                    &self.tolerances,
                );
                log::debug!("{} vs {}: {}", a.name, b.name, hit);
                if hit {
                    contacts.push(Contact { a: a.name.clone(), b: b.name.clone() });
                }
            }
        }
        contacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"(
        bodies: [
            (name: "wall", position: (0.0, 0.0), shape: Rectangle(x: 0.0, y: 0.0, width: 10.0, height: 10.0),
             layer: "ENVIRONMENT"),
            (name: "ship", position: (11.0, 11.0), shape: Circle(x: 0.0, y: 0.0, radius: 1.5)),
            (name: "mine", position: (30.0, 30.0), shape: Circle(x: 0.0, y: 0.0, radius: -4.0)),
            (name: "laser", position: (0.0, 0.0), shape: Line(x1: -5.0, y1: 5.0, x2: 15.0, y2: 5.0),
             layer: "PROJECTILE", mask: "ENEMY"),
        ],
    )"#;

    fn sample() -> Scene {
        ron::from_str(SAMPLE).unwrap()
    }

    #[test]
    fn test_parse_sample() {
        let scene = sample();
        assert_eq!(scene.bodies.len(), 4);
        assert_eq!(scene.tolerances, Tolerances::default());
        assert_eq!(scene.bodies[3].layer, CollisionLayers::PROJECTILE);
        assert_eq!(scene.bodies[0].layer, CollisionLayers::ENVIRONMENT);
        assert_eq!(scene.bodies[0].mask, CollisionLayers::all());
    }

    #[test]
    fn test_negative_radius_is_clamped_on_load() {
        let scene = sample();
        match scene.bodies[2].collider().shape {
            Shape::Circle(c) => assert_eq!(c.radius(), 0.0),
            other => panic!("expected circle, got {other:?}"),
        }
    }

    #[test]
    fn test_contacts() {
        let contacts = sample().contacts();
        // The laser crosses the wall but its mask only accepts enemies.
        assert_eq!(contacts, vec![Contact { a: "wall".into(), b: "ship".into() }]);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut scene = sample();
        scene.bodies[1].name = "wall".into();
        assert!(matches!(scene.validate(), Err(SceneError::DuplicateBody(name)) if name == "wall"));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.ron");
        std::fs::write(&path, SAMPLE).unwrap();

        let scene = Scene::load(path.to_str().unwrap()).unwrap();
        assert_eq!(scene, sample());
    }

    fn shipped_path(name: &str) -> String {
        format!("{}/scenes/{}", env!("CARGO_MANIFEST_DIR"), name)
    }

    fn shipped(name: &str) -> Scene {
        Scene::load(&shipped_path(name)).unwrap()
    }

    fn pairs(contacts: &[Contact]) -> Vec<(&str, &str)> {
        contacts.iter().map(|c| (c.a.as_str(), c.b.as_str())).collect()
    }

    #[test]
    fn test_shipped_ron_scene() {
        let contacts = shipped("arena.ron").contacts();
        assert_eq!(pairs(&contacts), vec![("ship", "wall"), ("ship", "coin"), ("rock", "laser")]);
    }

    #[test]
    fn test_shipped_toml_scene() {
        let contacts = shipped("arena.toml").contacts();
        assert_eq!(pairs(&contacts), vec![("ship", "wall"), ("wall", "beam")]);
    }

    #[test]
    fn test_tolerance_override_file() {
        // The point sits 1.0 off the middle of a 10-unit line: about 0.2 of detour.
        let mut scene = Scene {
            tolerances: Tolerances::default(),
            bodies: vec![
                Body {
                    name: "rail".into(),
                    position: (0.0, 0.0),
                    shape: ShapeDesc::Line { x1: 0.0, y1: 0.0, x2: 10.0, y2: 0.0 },
                    layer: CollisionLayers::all(),
                    mask: CollisionLayers::all(),
                },
                Body {
                    name: "bead".into(),
                    position: (5.0, 1.0),
                    shape: ShapeDesc::Point { x: 0.0, y: 0.0 },
                    layer: CollisionLayers::all(),
                    mask: CollisionLayers::all(),
                },
            ],
        };
        assert!(scene.contacts().is_empty());

        scene.tolerances = Tolerances::load_from_file(shipped_path("loose.toml")).unwrap();
        assert_eq!(scene.tolerances.line_tolerance, 0.5);
        assert_eq!(scene.tolerances.point_epsilon, Tolerances::DEFAULT.point_epsilon);
        assert_eq!(pairs(&scene.contacts()), vec![("rail", "bead")]);
    }

    fn layered_scene() -> Scene {
        let mut scene = sample();
        let custom = CollisionLayers::custom(9).unwrap();
        scene.bodies[1].layer = custom;
        scene.bodies[1].mask = custom | CollisionLayers::ENEMY;
        scene.tolerances.line_tolerance = 0.25;
        scene
    }

    fn save_and_reload(scene: &Scene, file: &str) -> Scene {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(file);
        scene.save_to_file(&path).unwrap();
        Scene::load(path.to_str().unwrap()).unwrap()
    }

    #[test]
    fn test_ron_save_and_reload() {
        let scene = layered_scene();
        let loaded = save_and_reload(&scene, "scene.ron");

        assert_eq!(loaded, scene);
        assert_eq!(loaded.bodies[0].mask, CollisionLayers::all());
        assert_eq!(loaded.bodies[1].layer, CollisionLayers::custom(9).unwrap());
    }

    #[test]
    fn test_toml_save_and_reload() {
        let scene = layered_scene();
        let loaded = save_and_reload(&scene, "scene.toml");

        assert_eq!(loaded, scene);
        assert_eq!(loaded.bodies[2].layer, CollisionLayers::all());
        assert_eq!(loaded.bodies[1].mask, CollisionLayers::custom(9).unwrap() | CollisionLayers::ENEMY);
    }
}
