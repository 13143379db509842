use common::shapes::{Aabb, Circle, Polygon, Ray};
use nalgebra::Point2;

// Strategy interface for pairwise overlap tests. The aabb/circle/point pairs
// have exact default implementations; every pair involving a polygon or a ray
// defaults to "no collision" until a strategy overrides it.
pub trait CollisionChecker {
    fn aabb_vs_aabb(&self, a: &Aabb, b: &Aabb) -> bool {
        (b.x - a.x).abs() <= a.half_width() + b.half_width()
            && (b.y - a.y).abs() <= a.half_height() + b.half_height()
    }

    fn aabb_vs_circle(&self, aabb: &Aabb, circle: &Circle) -> bool {
        let closest_x = circle.x.clamp(aabb.left(), aabb.right());
        let closest_y = circle.y.clamp(aabb.top(), aabb.bottom());
        let dx = circle.x - closest_x;
        let dy = circle.y - closest_y;
        dx * dx + dy * dy <= circle.radius * circle.radius
    }

    fn aabb_vs_point(&self, aabb: &Aabb, point: Point2<f32>) -> bool {
        aabb.contains_point(point.x, point.y)
    }

    fn circle_vs_aabb(&self, circle: &Circle, aabb: &Aabb) -> bool {
        self.aabb_vs_circle(aabb, circle)
    }

    fn circle_vs_circle(&self, a: &Circle, b: &Circle) -> bool {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let reach = a.radius + b.radius;
        dx * dx + dy * dy <= reach * reach
    }

    fn circle_vs_point(&self, circle: &Circle, point: Point2<f32>) -> bool {
        circle.contains_point(point.x, point.y)
    }

    fn aabb_vs_polygon(&self, _aabb: &Aabb, _polygon: &Polygon) -> bool {
        false
    }

    fn polygon_vs_aabb(&self, polygon: &Polygon, aabb: &Aabb) -> bool {
        self.aabb_vs_polygon(aabb, polygon)
    }

    fn circle_vs_polygon(&self, _circle: &Circle, _polygon: &Polygon) -> bool {
        false
    }

    fn polygon_vs_circle(&self, polygon: &Polygon, circle: &Circle) -> bool {
        self.circle_vs_polygon(circle, polygon)
    }

    fn polygon_vs_polygon(&self, _a: &Polygon, _b: &Polygon) -> bool {
        false
    }

    fn polygon_vs_point(&self, _polygon: &Polygon, _point: Point2<f32>) -> bool {
        false
    }

    fn aabb_vs_ray(&self, _aabb: &Aabb, _ray: &Ray) -> bool {
        false
    }

    fn circle_vs_ray(&self, _circle: &Circle, _ray: &Ray) -> bool {
        false
    }

    fn polygon_vs_ray(&self, _polygon: &Polygon, _ray: &Ray) -> bool {
        false
    }
}
