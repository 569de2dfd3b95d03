use crate::geom::{heading, Segment};
use glam::Vec2;

/// a discrete directional command from the input layer
#[derive(Clone, Copy, PartialEq, Debug)]
pub(crate) enum Command {
    Forward,
    Backward,
    RotateLeft,
    RotateRight,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub(crate) struct Pose {
    pub pos: Vec2,
    /// facing angle in radians; unbounded, only its cosine/sine are read
    pub angle: f32,
}

impl Pose {
    /// apply one movement command
    ///
    /// forward/backward translate along the facing angle with the same
    /// screen-space convention the ray fan uses; movement is unconstrained,
    /// there is no collision against walls
    pub fn apply(&mut self, command: Command, move_speed: f32, rotate_speed: f32) {
        match command {
            Command::Forward => self.pos += heading(self.angle) * move_speed,
            Command::Backward => self.pos -= heading(self.angle) * move_speed,
            Command::RotateLeft => self.angle += rotate_speed,
            Command::RotateRight => self.angle -= rotate_speed,
        }
    }
}

/// the static wall set plus the player pose; walls never change after load
pub(crate) struct World {
    pub walls: Vec<Segment>,
    pub player: Pose,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn forward_then_backward_round_trips() {
        let start = Pose {
            pos: Vec2::new(75., 100.),
            angle: 0.7,
        };

        let mut pose = start;
        pose.apply(Command::Forward, 2., 0.1);
        pose.apply(Command::Backward, 2., 0.1);

        assert!(pose.pos.distance(start.pos) < 1e-4);
        assert_eq!(pose.angle, start.angle);
    }

    #[test]
    fn rotate_round_trips() {
        let start = Pose {
            pos: Vec2::ZERO,
            angle: 1.3,
        };

        let mut pose = start;
        pose.apply(Command::RotateLeft, 2., 0.25);
        pose.apply(Command::RotateRight, 2., 0.25);

        assert!((pose.angle - start.angle).abs() < 1e-6);
        assert_eq!(pose.pos, start.pos);
    }

    #[test]
    fn forward_uses_the_screen_convention() {
        // facing a quarter turn means "up the screen": y shrinks
        let mut pose = Pose {
            pos: Vec2::new(10., 10.),
            angle: FRAC_PI_2,
        };
        pose.apply(Command::Forward, 2., 0.);

        assert!(pose.pos.y < 10.);
        assert!((pose.pos.x - 10.).abs() < 1e-4);
    }

    #[test]
    fn angle_is_not_wrapped() {
        let mut pose = Pose {
            pos: Vec2::ZERO,
            angle: 0.,
        };
        for _ in 0..100 {
            pose.apply(Command::RotateLeft, 0., 1.);
        }

        assert_eq!(pose.angle, 100.);
    }
}
