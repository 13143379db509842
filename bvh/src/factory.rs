use common::shapes::{Aabb, Circle, Polygon, ShapeEnum};
use nalgebra::{Point2, Vector2};

// Builds bounding volumes of one canonical kind and merges them. One factory
// is active per tree; switching factories does not convert volumes that were
// already built.
pub trait BvFactory {
    fn from_aabb(&self, aabb: &Aabb) -> ShapeEnum;
    fn from_circle(&self, circle: &Circle) -> ShapeEnum;
    fn from_polygon(&self, polygon: &Polygon) -> ShapeEnum;

    fn from_shape(&self, shape: &ShapeEnum) -> ShapeEnum {
        match shape {
            ShapeEnum::Aabb(aabb) => self.from_aabb(aabb),
            ShapeEnum::Circle(circle) => self.from_circle(circle),
            ShapeEnum::Polygon(polygon) => self.from_polygon(polygon),
        }
    }

    // Minimal canonical volume containing both inputs.
    fn merge(&self, a: &ShapeEnum, b: &ShapeEnum) -> ShapeEnum;

    // Stable empty volume standing in before a real one is computed. Callers
    // must treat it as read-only.
    fn place_holder(&self) -> ShapeEnum;

    // Volume covering the visible region, from the viewport dimensions and
    // the camera look-at point and scale.
    fn scene_bv(
        &self,
        view_width: f32,
        view_height: f32,
        look_at: Point2<f32>,
        scale: Vector2<f32>,
    ) -> ShapeEnum;
}

#[derive(Debug, Default)]
pub struct AabbBvFactory;

impl AabbBvFactory {
    pub fn new() -> Self {
        Self
    }

    fn enclose_circle(circle: &Circle) -> Aabb {
        Aabb::new(
            circle.x,
            circle.y,
            circle.radius * 2.0,
            circle.radius * 2.0,
        )
    }

    fn enclose_polygon(polygon: &Polygon) -> Aabb {
        let mut min_x = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_y = f32::NEG_INFINITY;
        for vertex in polygon.world_vertices() {
            min_x = f32::min(min_x, vertex.x);
            max_x = f32::max(max_x, vertex.x);
            min_y = f32::min(min_y, vertex.y);
            max_y = f32::max(max_y, vertex.y);
        }
        Aabb::from_bounds(min_x, min_y, max_x, max_y)
    }

    fn enclose(shape: &ShapeEnum) -> Aabb {
        match shape {
            ShapeEnum::Aabb(aabb) => *aabb,
            ShapeEnum::Circle(circle) => Self::enclose_circle(circle),
            ShapeEnum::Polygon(polygon) => Self::enclose_polygon(polygon),
        }
    }
}

impl BvFactory for AabbBvFactory {
    fn from_aabb(&self, aabb: &Aabb) -> ShapeEnum {
        ShapeEnum::Aabb(*aabb)
    }

    fn from_circle(&self, circle: &Circle) -> ShapeEnum {
        ShapeEnum::Aabb(Self::enclose_circle(circle))
    }

    fn from_polygon(&self, polygon: &Polygon) -> ShapeEnum {
        ShapeEnum::Aabb(Self::enclose_polygon(polygon))
    }

    fn merge(&self, a: &ShapeEnum, b: &ShapeEnum) -> ShapeEnum {
        let mut merged = Self::enclose(a);
        merged.expand_to_include(&Self::enclose(b));
        ShapeEnum::Aabb(merged)
    }

    fn place_holder(&self) -> ShapeEnum {
        ShapeEnum::Aabb(Aabb::default())
    }

    fn scene_bv(
        &self,
        view_width: f32,
        view_height: f32,
        look_at: Point2<f32>,
        scale: Vector2<f32>,
    ) -> ShapeEnum {
        ShapeEnum::Aabb(Aabb::new(
            look_at.x,
            look_at.y,
            view_width / scale.x,
            view_height / scale.y,
        ))
    }
}
