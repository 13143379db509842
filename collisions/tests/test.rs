use collisions::{collide, shape_point, shape_ray, shape_shape};
use collisions::{CollisionChecker, Operand, SatCollisionChecker};
use common::shapes::{Aabb, Circle, Polygon, Ray, ShapeEnum};
use nalgebra::{Point2, Vector2};

fn square_polygon(x: f32, y: f32, half: f32) -> ShapeEnum {
    ShapeEnum::Polygon(
        Polygon::new(
            Point2::new(x, y),
            vec![
                Vector2::new(-half, -half),
                Vector2::new(half, -half),
                Vector2::new(half, half),
                Vector2::new(-half, half),
            ],
        )
        .unwrap(),
    )
}

fn diamond_polygon(x: f32, y: f32, half: f32) -> ShapeEnum {
    ShapeEnum::Polygon(
        Polygon::new(
            Point2::new(x, y),
            vec![
                Vector2::new(0.0, -half),
                Vector2::new(half, 0.0),
                Vector2::new(0.0, half),
                Vector2::new(-half, 0.0),
            ],
        )
        .unwrap(),
    )
}

#[test]
fn test_aabb_gap_on_x_axis() {
    let checker = SatCollisionChecker::new();
    let a = ShapeEnum::Aabb(Aabb::new(0.0, 0.0, 2.0, 2.0));
    let b = ShapeEnum::Aabb(Aabb::new(3.0, 0.0, 2.0, 2.0));
    assert!(!shape_shape(&checker, &a, &b));
}

#[test]
fn test_aabb_overlap_on_x_axis() {
    let checker = SatCollisionChecker::new();
    let a = ShapeEnum::Aabb(Aabb::new(0.0, 0.0, 2.0, 2.0));
    let b = ShapeEnum::Aabb(Aabb::new(1.5, 0.0, 2.0, 2.0));
    assert!(shape_shape(&checker, &a, &b));
}

#[test]
fn test_polygon_gap_and_overlap_match_aabb_cases() {
    let checker = SatCollisionChecker::new();
    let a = square_polygon(0.0, 0.0, 1.0);
    assert!(!shape_shape(&checker, &a, &square_polygon(3.0, 0.0, 1.0)));
    assert!(shape_shape(&checker, &a, &square_polygon(1.5, 0.0, 1.0)));
}

#[test]
fn test_diamond_needs_its_own_axes() {
    let checker = SatCollisionChecker::new();
    let square = square_polygon(0.0, 0.0, 1.0);
    // Bounding boxes overlap but the diagonal edge separates the shapes.
    let diamond = diamond_polygon(2.2, 2.2, 2.0);
    assert!(!shape_shape(&checker, &square, &diamond));
    let closer = diamond_polygon(1.5, 1.5, 2.0);
    assert!(shape_shape(&checker, &square, &closer));
}

#[test]
fn test_aabb_vs_polygon() {
    let checker = SatCollisionChecker::new();
    let aabb = ShapeEnum::Aabb(Aabb::new(0.0, 0.0, 2.0, 2.0));
    assert!(shape_shape(&checker, &aabb, &square_polygon(1.5, 0.0, 1.0)));
    assert!(!shape_shape(&checker, &aabb, &square_polygon(3.0, 0.0, 1.0)));
}

#[test]
fn test_circle_vs_circle_touching_counts() {
    let checker = SatCollisionChecker::new();
    let a = ShapeEnum::Circle(Circle::new(0.0, 0.0, 1.0));
    assert!(shape_shape(
        &checker,
        &a,
        &ShapeEnum::Circle(Circle::new(2.0, 0.0, 1.0))
    ));
    assert!(!shape_shape(
        &checker,
        &a,
        &ShapeEnum::Circle(Circle::new(2.1, 0.0, 1.0))
    ));
}

#[test]
fn test_aabb_vs_circle_corner() {
    let checker = SatCollisionChecker::new();
    let aabb = ShapeEnum::Aabb(Aabb::new(0.0, 0.0, 2.0, 2.0));
    // Corner at (1,1); the circle center sits on the diagonal beyond it.
    let touching = ShapeEnum::Circle(Circle::new(1.5, 1.5, 0.8));
    let apart = ShapeEnum::Circle(Circle::new(1.5, 1.5, 0.5));
    assert!(shape_shape(&checker, &aabb, &touching));
    assert!(!shape_shape(&checker, &aabb, &apart));
}

#[test]
fn test_circle_vs_polygon() {
    let checker = SatCollisionChecker::new();
    let square = square_polygon(0.0, 0.0, 1.0);
    // Center inside.
    assert!(shape_shape(
        &checker,
        &ShapeEnum::Circle(Circle::new(0.5, 0.5, 0.1)),
        &square
    ));
    // Center outside, rim reaching the edge.
    assert!(shape_shape(
        &checker,
        &ShapeEnum::Circle(Circle::new(2.0, 0.0, 1.0)),
        &square
    ));
    assert!(!shape_shape(
        &checker,
        &ShapeEnum::Circle(Circle::new(2.0, 0.0, 0.9)),
        &square
    ));
}

#[test]
fn test_point_containment() {
    let checker = SatCollisionChecker::new();
    let square = square_polygon(0.0, 0.0, 1.0);
    assert!(shape_point(&checker, &square, Point2::new(0.5, -0.5)));
    assert!(shape_point(&checker, &square, Point2::new(1.0, 0.0)));
    assert!(!shape_point(&checker, &square, Point2::new(1.1, 0.0)));

    let aabb = ShapeEnum::Aabb(Aabb::new(0.0, 0.0, 2.0, 2.0));
    assert!(shape_point(&checker, &aabb, Point2::new(1.0, 1.0)));
    assert!(!shape_point(&checker, &aabb, Point2::new(1.0, 1.01)));

    let circle = ShapeEnum::Circle(Circle::new(0.0, 0.0, 1.0));
    assert!(shape_point(&checker, &circle, Point2::new(0.0, 1.0)));
    assert!(!shape_point(&checker, &circle, Point2::new(0.8, 0.8)));
}

#[test]
fn test_aabb_vs_ray() {
    let checker = SatCollisionChecker::new();
    let aabb = ShapeEnum::Aabb(Aabb::new(0.0, 0.0, 2.0, 2.0));
    let hit = Ray::new(Point2::new(-5.0, 0.0), Vector2::new(1.0, 0.0), 10.0).unwrap();
    assert!(shape_ray(&checker, &aabb, &hit));
    let above = Ray::new(Point2::new(-5.0, 3.0), Vector2::new(1.0, 0.0), 10.0).unwrap();
    assert!(!shape_ray(&checker, &aabb, &above));
    let short = Ray::new(Point2::new(-5.0, 0.0), Vector2::new(1.0, 0.0), 3.0).unwrap();
    assert!(!shape_ray(&checker, &aabb, &short));
    let diagonal = Ray::from_points(Point2::new(-2.0, 2.0), Point2::new(2.0, -2.0)).unwrap();
    assert!(shape_ray(&checker, &aabb, &diagonal));
}

#[test]
fn test_circle_vs_ray() {
    let checker = SatCollisionChecker::new();
    let circle = ShapeEnum::Circle(Circle::new(0.0, 0.0, 1.0));
    let grazing = Ray::new(Point2::new(-5.0, 0.5), Vector2::new(1.0, 0.0), 10.0).unwrap();
    assert!(shape_ray(&checker, &circle, &grazing));
    let above = Ray::new(Point2::new(-5.0, 2.0), Vector2::new(1.0, 0.0), 10.0).unwrap();
    assert!(!shape_ray(&checker, &circle, &above));
    let short = Ray::new(Point2::new(-5.0, 0.0), Vector2::new(1.0, 0.0), 2.0).unwrap();
    assert!(!shape_ray(&checker, &circle, &short));
}

#[test]
fn test_polygon_vs_ray() {
    let checker = SatCollisionChecker::new();
    let diamond = diamond_polygon(0.0, 0.0, 1.0);
    let through = Ray::new(Point2::new(-3.0, 0.0), Vector2::new(1.0, 0.0), 6.0).unwrap();
    assert!(shape_ray(&checker, &diamond, &through));
    // Passes the bounding box corner but outside the diagonal edge.
    let corner = Ray::new(Point2::new(-3.0, 0.9), Vector2::new(1.0, 0.0), 2.5).unwrap();
    assert!(!shape_ray(&checker, &diamond, &corner));
}

#[test]
fn test_dispatch_is_commutative() {
    let checker = SatCollisionChecker::new();
    let shapes = [
        ShapeEnum::Aabb(Aabb::new(0.5, 0.0, 2.0, 2.0)),
        ShapeEnum::Circle(Circle::new(0.0, 0.5, 1.0)),
        square_polygon(0.25, 0.25, 1.0),
        diamond_polygon(5.0, 5.0, 1.0),
    ];
    for a in &shapes {
        for b in &shapes {
            assert_eq!(
                collide(&checker, Operand::Shape(a), Operand::Shape(b)),
                collide(&checker, Operand::Shape(b), Operand::Shape(a)),
            );
        }
    }
    let point = Point2::new(0.25, 0.25);
    for shape in &shapes {
        assert_eq!(
            collide(&checker, Operand::Shape(shape), Operand::Point(point)),
            collide(&checker, Operand::Point(point), Operand::Shape(shape)),
        );
    }
    let ray = Ray::new(Point2::new(-5.0, 0.0), Vector2::new(1.0, 0.0), 20.0).unwrap();
    for shape in &shapes {
        assert_eq!(
            collide(&checker, Operand::Shape(shape), Operand::Ray(&ray)),
            collide(&checker, Operand::Ray(&ray), Operand::Shape(shape)),
        );
    }
}

#[test]
fn test_unmatched_operand_pairs_report_no_collision() {
    let checker = SatCollisionChecker::new();
    let point = Point2::new(0.0, 0.0);
    let ray = Ray::new(Point2::new(0.0, 0.0), Vector2::new(1.0, 0.0), 1.0).unwrap();
    assert!(!collide(
        &checker,
        Operand::Point(point),
        Operand::Point(point)
    ));
    assert!(!collide(
        &checker,
        Operand::Point(point),
        Operand::Ray(&ray)
    ));
    assert!(!collide(&checker, Operand::Ray(&ray), Operand::Ray(&ray)));
}

struct BareChecker;

impl CollisionChecker for BareChecker {}

#[test]
fn test_default_checker_falls_back_to_no_collision() {
    let checker = BareChecker;
    // Exact default implementations still apply.
    let a = ShapeEnum::Aabb(Aabb::new(0.0, 0.0, 2.0, 2.0));
    let b = ShapeEnum::Aabb(Aabb::new(1.5, 0.0, 2.0, 2.0));
    assert!(shape_shape(&checker, &a, &b));
    // Unimplemented pairs resolve to false even when the shapes overlap.
    let square = square_polygon(0.0, 0.0, 1.0);
    assert!(!shape_shape(&checker, &square, &square_polygon(0.5, 0.0, 1.0)));
    assert!(!shape_shape(&checker, &a, &square));
    assert!(!shape_point(&checker, &square, Point2::new(0.0, 0.0)));
    let ray = Ray::new(Point2::new(-5.0, 0.0), Vector2::new(1.0, 0.0), 10.0).unwrap();
    assert!(!shape_ray(&checker, &a, &ray));
}
