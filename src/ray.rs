use crate::geom::{heading, intersect, Intersection, Segment};
use crate::world::Pose;

/// build the ray fan for one frame
///
/// exactly `count` rays, evenly spaced by `fov / count`; ray 0 leaves at
/// `pose.angle - fov / 2.` and higher indices sweep toward the other edge
/// of the field of view, which is also their left-to-right screen order
pub(crate) fn generate_rays(pose: &Pose, fov: f32, count: usize, sight: f32) -> Vec<Segment> {
    let start = pose.angle - fov / 2.;
    let delta = fov / count as f32;

    (0..count)
        .map(|ray_number| {
            let angle = start + ray_number as f32 * delta;
            Segment::new(pose.pos, pose.pos + heading(angle) * sight)
        })
        .collect()
}

/// nearest wall hit per ray
///
/// the output is index-parallel to `rays`; a ray that clears every wall
/// keeps `None` in its slot so downstream columns stay aligned
pub(crate) fn find_intersections(
    rays: &[Segment],
    walls: &[Segment],
) -> Vec<Option<Intersection>> {
    rays.iter()
        .map(|ray| {
            let mut closest: Option<Intersection> = None;
            for wall in walls {
                if let Some(hit) = intersect(wall, ray) {
                    // strict compare: on an exact tie the earlier wall in
                    // map order wins
                    if closest.is_none_or(|prev| hit.along_ray < prev.along_ray) {
                        closest = Some(hit);
                    }
                }
            }

            closest
        })
        .collect()
}
