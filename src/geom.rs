use glam::Vec2;

/// unit direction for an angle in screen space, where y grows downward
/// (the sine term is negated)
pub(crate) fn heading(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), -angle.sin())
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub(crate) struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }
}

/// a wall hit for a single ray
#[derive(Clone, Copy, PartialEq, Debug)]
pub(crate) struct Intersection {
    pub point: Vec2,
    /// parametric position of the hit along the ray: 0 at the player,
    /// 1 at full sight distance
    pub along_ray: f32,
}

/// segment-segment intersection, hits only count inside both finite
/// segments (endpoints included)
pub(crate) fn intersect(wall: &Segment, ray: &Segment) -> Option<Intersection> {
    let wall_dir = wall.b - wall.a;
    let ray_dir = ray.b - ray.a;

    // 2d cross product of the two directions; zero means parallel or
    // collinear, both count as a miss (collinear overlap included)
    let denom = wall_dir.perp_dot(ray_dir);
    if denom == 0. {
        return None;
    }

    let offset = ray.a - wall.a;
    let along_wall = offset.perp_dot(ray_dir) / denom;
    let along_ray = offset.perp_dot(wall_dir) / denom;

    if !(0. ..=1.).contains(&along_wall) || !(0. ..=1.).contains(&along_ray) {
        return None;
    }

    Some(Intersection {
        point: wall.a + wall_dir * along_wall,
        along_ray,
    })
}
