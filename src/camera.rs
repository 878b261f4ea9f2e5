use crate::map::Map;
use crate::math::*;

/// Walk direction
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveDirection {
    Forward,
    Backward,
}

/// Turn and strafe direction, relative to screen
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SideDirection {
    Left,
    Right,
}

/// Viewer representation structure.
/// Screen column x looks along `direction + plane * (2x / width - 1)`,
/// so the right screen edge is `direction + plane`.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    pub position: Vec2f,
    pub direction: Vec2f,
    pub plane: Vec2f,
    pub movement_speed: f32,
    pub rotation_speed: f32,
}

impl Camera {
    /// Camera create function
    /// * `position` - viewer location in map cells
    /// * `direction` - facing direction, normalized here
    /// * `field_of_view` - view plane length relative to direction (0.66 is ~66 degrees)
    pub fn new(position: Vec2f, direction: Vec2f, field_of_view: f32) -> Self {
        let direction = direction.normalized();

        Self {
            position,
            direction,
            plane: Vec2f { x: direction.y, y: -direction.x } * field_of_view,
            movement_speed: 0.05,
            rotation_speed: 0.04,
        }
    }

    /// Field of view (view plane magnitude) getting function
    pub fn field_of_view(&self) -> f32 {
        self.plane.length()
    }

    /// Per-axis collision checked translation.
    /// Each axis is applied only if the destination cell along it is passable.
    fn translate(&mut self, delta: Vec2f, map: &Map) {
        if !map.is_solid_at(Vec2f { x: self.position.x + delta.x, y: self.position.y }) {
            self.position.x += delta.x;
        }
        if !map.is_solid_at(Vec2f { x: self.position.x, y: self.position.y + delta.y }) {
            self.position.y += delta.y;
        }
    } // fn translate

    /// Walk along facing direction
    pub fn walk(&mut self, direction: MoveDirection, map: &Map) {
        let sign = match direction {
            MoveDirection::Forward => 1.0,
            MoveDirection::Backward => -1.0,
        };

        self.translate(self.direction * (self.movement_speed * sign), map);
    } // fn walk

    /// Turn by rotation_speed. Direction and plane are rotated together,
    /// so they stay perpendicular.
    pub fn turn(&mut self, direction: SideDirection) {
        // rotating towards +plane turns the view right
        let right = self.direction.cross(self.plane).signum();
        let angle = match direction {
            SideDirection::Left => -self.rotation_speed,
            SideDirection::Right => self.rotation_speed,
        } * right;

        self.direction = self.direction.rotated(angle);
        self.plane = self.plane.rotated(angle);
    } // fn turn

    /// Step sideways along view plane
    pub fn strafe(&mut self, direction: SideDirection, map: &Map) {
        let side = self.plane.normalized() * self.movement_speed;

        self.translate(
            match direction {
                SideDirection::Left => -side,
                SideDirection::Right => side,
            },
            map,
        );
    } // fn strafe
} // impl Camera


// file camera.rs
