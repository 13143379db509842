use crate::checker::CollisionChecker;
use common::shapes::{Aabb, Circle, Polygon, Ray};
use nalgebra::{Point2, Vector2};
use smallvec::SmallVec;

// Axes whose cross product falls below this are treated as parallel and
// projected only once.
const PARALLEL_EPSILON: f32 = 1e-6;

type AxisList = SmallVec<[Vector2<f32>; 8]>;

// Separating Axis Theorem strategy: two convex shapes overlap iff their
// projections overlap on every candidate axis taken from the edge normals
// of both shapes.
#[derive(Debug, Default)]
pub struct SatCollisionChecker;

impl SatCollisionChecker {
    pub fn new() -> Self {
        Self
    }
}

fn is_parallel(a: Vector2<f32>, b: Vector2<f32>) -> bool {
    (a.x * b.y - a.y * b.x).abs() <= PARALLEL_EPSILON
}

fn edge_normals(vertices: &[Point2<f32>]) -> AxisList {
    let mut axes = AxisList::new();
    for i in 0..vertices.len() {
        let edge = vertices[(i + 1) % vertices.len()] - vertices[i];
        let normal = Vector2::new(-edge.y, edge.x);
        let norm = normal.norm();
        if norm > 0.0 {
            axes.push(normal / norm);
        }
    }
    axes
}

// Appends the axes of `extra` that are not parallel to an axis already kept.
fn select_axes(mut axes: AxisList, extra: &[Vector2<f32>]) -> AxisList {
    for &candidate in extra {
        if !axes.iter().any(|&kept| is_parallel(kept, candidate)) {
            axes.push(candidate);
        }
    }
    axes
}

fn project(vertices: &[Point2<f32>], axis: Vector2<f32>) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for vertex in vertices {
        let d = vertex.coords.dot(&axis);
        if d < min {
            min = d;
        }
        if d > max {
            max = d;
        }
    }
    (min, max)
}

fn intervals_overlap(a: (f32, f32), b: (f32, f32)) -> bool {
    a.0 <= b.1 && b.0 <= a.1
}

fn aabb_vertices(aabb: &Aabb) -> [Point2<f32>; 4] {
    [
        Point2::new(aabb.left(), aabb.top()),
        Point2::new(aabb.right(), aabb.top()),
        Point2::new(aabb.right(), aabb.bottom()),
        Point2::new(aabb.left(), aabb.bottom()),
    ]
}

fn polygons_collide(a: &[Point2<f32>], b: &[Point2<f32>]) -> bool {
    let axes = select_axes(edge_normals(a), &edge_normals(b));
    for &axis in &axes {
        if !intervals_overlap(project(a, axis), project(b, axis)) {
            return false;
        }
    }
    true
}

// Convex containment: the point lies on the same side of every edge.
fn point_in_convex(vertices: &[Point2<f32>], point: Point2<f32>) -> bool {
    let mut sign = 0.0f32;
    for i in 0..vertices.len() {
        let edge = vertices[(i + 1) % vertices.len()] - vertices[i];
        let to_point = point - vertices[i];
        let cross = edge.x * to_point.y - edge.y * to_point.x;
        if cross == 0.0 {
            continue;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if sign != cross.signum() {
            return false;
        }
    }
    true
}

fn distance_sq_to_segment(a: Point2<f32>, b: Point2<f32>, point: Point2<f32>) -> f32 {
    let ab = b - a;
    let length_sq = ab.norm_squared();
    if length_sq == 0.0 {
        return (point - a).norm_squared();
    }
    let t = ((point - a).dot(&ab) / length_sq).clamp(0.0, 1.0);
    let closest = a + ab * t;
    (point - closest).norm_squared()
}

fn circle_hits_polygon(circle: &Circle, vertices: &[Point2<f32>]) -> bool {
    let center = Point2::new(circle.x, circle.y);
    if point_in_convex(vertices, center) {
        return true;
    }
    let radius_sq = circle.radius * circle.radius;
    for i in 0..vertices.len() {
        let next = vertices[(i + 1) % vertices.len()];
        if distance_sq_to_segment(vertices[i], next, center) <= radius_sq {
            return true;
        }
    }
    false
}

// SAT restricted to a segment: the candidate axes are the polygon's edge
// normals plus the segment's own normal.
fn segment_hits_polygon(vertices: &[Point2<f32>], start: Point2<f32>, end: Point2<f32>) -> bool {
    let segment = [start, end];
    let mut axes = edge_normals(vertices);
    let delta = end - start;
    let normal = Vector2::new(-delta.y, delta.x);
    let norm = normal.norm();
    if norm > 0.0 {
        axes = select_axes(axes, &[normal / norm]);
    }
    for &axis in &axes {
        if !intervals_overlap(project(vertices, axis), project(&segment, axis)) {
            return false;
        }
    }
    true
}

impl CollisionChecker for SatCollisionChecker {
    fn aabb_vs_polygon(&self, aabb: &Aabb, polygon: &Polygon) -> bool {
        polygons_collide(&aabb_vertices(aabb), polygon.world_vertices())
    }

    fn circle_vs_polygon(&self, circle: &Circle, polygon: &Polygon) -> bool {
        circle_hits_polygon(circle, polygon.world_vertices())
    }

    fn polygon_vs_polygon(&self, a: &Polygon, b: &Polygon) -> bool {
        polygons_collide(a.world_vertices(), b.world_vertices())
    }

    fn polygon_vs_point(&self, polygon: &Polygon, point: Point2<f32>) -> bool {
        point_in_convex(polygon.world_vertices(), point)
    }

    fn aabb_vs_ray(&self, aabb: &Aabb, ray: &Ray) -> bool {
        segment_hits_polygon(&aabb_vertices(aabb), ray.start(), ray.end())
    }

    fn circle_vs_ray(&self, circle: &Circle, ray: &Ray) -> bool {
        let center = Point2::new(circle.x, circle.y);
        distance_sq_to_segment(ray.start(), ray.end(), center) <= circle.radius * circle.radius
    }

    fn polygon_vs_ray(&self, polygon: &Polygon, ray: &Ray) -> bool {
        segment_hits_polygon(polygon.world_vertices(), ray.start(), ray.end())
    }
}
