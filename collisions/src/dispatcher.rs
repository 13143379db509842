use crate::checker::CollisionChecker;
use common::shapes::{Ray, ShapeEnum};
use nalgebra::Point2;

// One operand of a collision test: a shape, a bare point, or a ray.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Shape(&'a ShapeEnum),
    Point(Point2<f32>),
    Ray(&'a Ray),
}

// Resolves the pair of operand tags and invokes the matching checker method,
// swapping operands where the method is declared in the opposite order.
// Pairs with no test resolve to "no collision".
pub fn collide(checker: &dyn CollisionChecker, a: Operand<'_>, b: Operand<'_>) -> bool {
    match (a, b) {
        (Operand::Shape(a), Operand::Shape(b)) => shape_shape(checker, a, b),
        (Operand::Shape(shape), Operand::Point(point))
        | (Operand::Point(point), Operand::Shape(shape)) => shape_point(checker, shape, point),
        (Operand::Shape(shape), Operand::Ray(ray)) | (Operand::Ray(ray), Operand::Shape(shape)) => {
            shape_ray(checker, shape, ray)
        }
        _ => false,
    }
}

pub fn shape_shape(checker: &dyn CollisionChecker, a: &ShapeEnum, b: &ShapeEnum) -> bool {
    match (a, b) {
        (ShapeEnum::Aabb(a), ShapeEnum::Aabb(b)) => checker.aabb_vs_aabb(a, b),
        (ShapeEnum::Aabb(aabb), ShapeEnum::Circle(circle)) => checker.aabb_vs_circle(aabb, circle),
        (ShapeEnum::Aabb(aabb), ShapeEnum::Polygon(polygon)) => {
            checker.aabb_vs_polygon(aabb, polygon)
        }
        (ShapeEnum::Circle(circle), ShapeEnum::Aabb(aabb)) => checker.circle_vs_aabb(circle, aabb),
        (ShapeEnum::Circle(a), ShapeEnum::Circle(b)) => checker.circle_vs_circle(a, b),
        (ShapeEnum::Circle(circle), ShapeEnum::Polygon(polygon)) => {
            checker.circle_vs_polygon(circle, polygon)
        }
        (ShapeEnum::Polygon(polygon), ShapeEnum::Aabb(aabb)) => {
            checker.polygon_vs_aabb(polygon, aabb)
        }
        (ShapeEnum::Polygon(polygon), ShapeEnum::Circle(circle)) => {
            checker.polygon_vs_circle(polygon, circle)
        }
        (ShapeEnum::Polygon(a), ShapeEnum::Polygon(b)) => checker.polygon_vs_polygon(a, b),
    }
}

pub fn shape_point(checker: &dyn CollisionChecker, shape: &ShapeEnum, point: Point2<f32>) -> bool {
    match shape {
        ShapeEnum::Aabb(aabb) => checker.aabb_vs_point(aabb, point),
        ShapeEnum::Circle(circle) => checker.circle_vs_point(circle, point),
        ShapeEnum::Polygon(polygon) => checker.polygon_vs_point(polygon, point),
    }
}

pub fn shape_ray(checker: &dyn CollisionChecker, shape: &ShapeEnum, ray: &Ray) -> bool {
    match shape {
        ShapeEnum::Aabb(aabb) => checker.aabb_vs_ray(aabb, ray),
        ShapeEnum::Circle(circle) => checker.circle_vs_ray(circle, ray),
        ShapeEnum::Polygon(polygon) => checker.polygon_vs_ray(polygon, ray),
    }
}
