use crate::factory::BvFactory;
use common::shapes::{Shape, ShapeEnum};
use nalgebra::{Point2, Vector2};

// Anything placed in the spatial index. The bounding volume is the
// conservative enclosure built for the object when it entered the scene;
// its center is the coordinate partition strategies split on.
pub trait WorldObject {
    fn id(&self) -> u32;
    fn position(&self) -> Point2<f32>;
    fn bounding_volume(&self) -> &ShapeEnum;
    fn update(&mut self, _dt: f32) {}
}

// Plain scene object: a position, a velocity, and a factory-built bounding
// volume that follows the position.
#[derive(Debug, Clone)]
pub struct Object2d {
    id: u32,
    position: Point2<f32>,
    velocity: Vector2<f32>,
    bounding_volume: ShapeEnum,
}

impl Object2d {
    pub fn new(id: u32, shape: &ShapeEnum, factory: &dyn BvFactory) -> Self {
        Self {
            id,
            position: shape.position(),
            velocity: Vector2::zeros(),
            bounding_volume: factory.from_shape(shape),
        }
    }

    pub fn with_velocity(mut self, velocity: Vector2<f32>) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn velocity(&self) -> Vector2<f32> {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vector2<f32>) {
        self.velocity = velocity;
    }
}

impl WorldObject for Object2d {
    fn id(&self) -> u32 {
        self.id
    }

    fn position(&self) -> Point2<f32> {
        self.position
    }

    fn bounding_volume(&self) -> &ShapeEnum {
        &self.bounding_volume
    }

    fn update(&mut self, dt: f32) {
        let delta = self.velocity * dt;
        self.position += delta;
        self.bounding_volume.translate(delta);
    }
}
