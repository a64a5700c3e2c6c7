use jointcap_geometry::DVec3;

use crate::{
    body::{resolve_world_position, SkeletalActor, BODY_COMPONENT, FACE_COMPONENT},
    catalog::KeypointCatalog,
};

/// An 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugColor {
    /// Red, green, blue and alpha.
    pub rgba: [u8; 4],
}

impl DebugColor {
    /// Opaque red.
    pub const RED: Self = Self { rgba: [255, 0, 0, 255] };
    /// Opaque green.
    pub const GREEN: Self = Self { rgba: [0, 255, 0, 255] };
    /// Opaque blue.
    pub const BLUE: Self = Self { rgba: [0, 0, 255, 255] };
}

/// A point to draw on top of the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugPoint {
    /// World position of the point.
    pub position: DVec3,
    /// Point colour.
    pub color: DebugColor,
    /// Point size in screen pixels.
    pub size: f64,
}

/// Produces keypoint markers for the catalogued joints of an actor.
///
/// Face keypoints are drawn red, upper body blue and lower body green.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeypointOverlay {
    /// Size of every point.
    pub point_size: f64,
}

impl Default for KeypointOverlay {
    fn default() -> Self {
        Self { point_size: 3.0 }
    }
}

impl KeypointOverlay {
    /// The layers drawn, as (body, catalog, colour).
    const LAYERS: [(&'static str, KeypointCatalog, DebugColor); 3] = [
        (FACE_COMPONENT, KeypointCatalog::Face, DebugColor::RED),
        (BODY_COMPONENT, KeypointCatalog::UpperBody, DebugColor::BLUE),
        (BODY_COMPONENT, KeypointCatalog::LowerBody, DebugColor::GREEN),
    ];

    /// Markers for every catalogued joint the actor has.
    ///
    /// Joints the body lacks are skipped, and reported in one warning per layer.
    pub fn points(&self, actor: &dyn SkeletalActor) -> Vec<DebugPoint> {
        let mut points = Vec::new();
        for (component, catalog, color) in Self::LAYERS {
            let Some(body) = actor.find_body(component) else {
                continue;
            };

            let mut missing = 0;
            for joint in catalog.joints() {
                match resolve_world_position(body, joint) {
                    Some(position) => points.push(DebugPoint {
                        position,
                        color,
                        size: self.point_size,
                    }),
                    None => missing += 1,
                }
            }
            if missing > 0 {
                log::warn!(
                    "{} {:?} keypoints not drawn on actor {}: not in the '{}' skeleton",
                    missing,
                    catalog,
                    actor.name(),
                    component
                );
            }
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::SkeletalBody;

    struct Body(&'static str, Vec<&'static str>);

    impl SkeletalBody for Body {
        fn component_name(&self) -> &str {
            self.0
        }

        fn bone_names(&self) -> Vec<String> {
            self.1.iter().map(|s| s.to_string()).collect()
        }

        fn bone_world_location(&self, bone_name: &str) -> Option<DVec3> {
            self.1.iter().any(|b| *b == bone_name).then_some(DVec3::Z)
        }
    }

    struct Actor(Vec<Body>);

    impl SkeletalActor for Actor {
        fn name(&self) -> String {
            "Hero".to_string()
        }

        fn skeletal_bodies(&self) -> Vec<&dyn SkeletalBody> {
            self.0.iter().map(|b| b as &dyn SkeletalBody).collect()
        }
    }

    #[test]
    fn test_points_are_coloured_by_region() {
        let actor = Actor(vec![
            Body("Face", vec!["FACIAL_L_Ear1", "head"]),
            Body("Body", vec!["spine_01", "thigh_l", "calf_l"]),
        ]);

        let points = KeypointOverlay::default().points(&actor);

        let colors: Vec<DebugColor> = points.iter().map(|p| p.color).collect();
        assert_eq!(
            colors,
            vec![
                DebugColor::RED,
                DebugColor::BLUE,
                DebugColor::GREEN,
                DebugColor::GREEN
            ]
        );
        assert!(points.iter().all(|p| p.size == 3.0));
    }

    #[test]
    fn test_actor_without_bodies_draws_nothing() {
        assert!(KeypointOverlay::default().points(&Actor(vec![])).is_empty());
    }
}
