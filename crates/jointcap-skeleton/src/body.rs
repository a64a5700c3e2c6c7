use jointcap_geometry::DVec3;

/// Component name of the body mesh of a character.
pub const BODY_COMPONENT: &str = "Body";

/// Component name of the face mesh of a character.
pub const FACE_COMPONENT: &str = "Face";

/// A skinned mesh whose joints can be posed in world space.
pub trait SkeletalBody {
    /// Name of the mesh component, e.g. `"Body"` or `"Face"`.
    fn component_name(&self) -> &str;

    /// Names of every joint of the reference skeleton, in skeleton order.
    fn bone_names(&self) -> Vec<String>;

    /// World-space location of a joint in the current pose, or `None` if the skeleton has
    /// no joint with that name.
    fn bone_world_location(&self, bone_name: &str) -> Option<DVec3>;
}

/// A scene actor that carries one or more skeletal bodies.
pub trait SkeletalActor {
    /// Display name of the actor, used to prefix output files.
    fn name(&self) -> String;

    /// The skeletal bodies attached to the actor.
    fn skeletal_bodies(&self) -> Vec<&dyn SkeletalBody>;

    /// Find a body by its component name.
    fn find_body(&self, component_name: &str) -> Option<&dyn SkeletalBody> {
        self.skeletal_bodies()
            .into_iter()
            .find(|body| body.component_name() == component_name)
    }
}

/// World position of a named joint, or `None` if the joint does not exist.
///
/// # Arguments
///
/// * `body` - The skeletal body to query.
/// * `joint_name` - The joint name, matched exactly.
pub fn resolve_world_position(body: &dyn SkeletalBody, joint_name: &str) -> Option<DVec3> {
    body.bone_world_location(joint_name)
}
