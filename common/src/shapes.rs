use crate::error::{ShapeError, ShapeResult};
use nalgebra::{Point2, Vector2};
use rand::Rng;
use std::fmt::Debug;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShapeKind {
    Aabb,
    Circle,
    Polygon,
}

pub trait Shape: Debug {
    fn kind(&self) -> ShapeKind;
    fn position(&self) -> Point2<f32>;
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn try_new(x: f32, y: f32, width: f32, height: f32) -> ShapeResult<Self> {
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(ShapeError::InvalidAabbDims { width, height });
        }
        Ok(Self::new(x, y, width, height))
    }

    pub fn from_bounds(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            x: (left + right) / 2.0,
            y: (top + bottom) / 2.0,
            width: right - left,
            height: bottom - top,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }

    pub fn left(&self) -> f32 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn top(&self) -> f32 {
        self.y - self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn top_left(&self) -> (f32, f32) {
        (self.left(), self.top())
    }

    pub fn top_right(&self) -> (f32, f32) {
        (self.right(), self.top())
    }

    pub fn bottom_left(&self) -> (f32, f32) {
        (self.left(), self.bottom())
    }

    pub fn bottom_right(&self) -> (f32, f32) {
        (self.right(), self.bottom())
    }

    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
    }

    pub fn distance_sq_to_point(&self, x: f32, y: f32) -> f32 {
        let dx = (x - self.x).abs() - self.width / 2.0;
        let dy = (y - self.y).abs() - self.height / 2.0;
        f32::max(dx, 0.0).powi(2) + f32::max(dy, 0.0).powi(2)
    }

    pub fn expand_to_include(&mut self, other: &Aabb) {
        let left = f32::min(self.left(), other.left());
        let right = f32::max(self.right(), other.right());
        let top = f32::min(self.top(), other.top());
        let bottom = f32::max(self.bottom(), other.bottom());
        self.x = (left + right) / 2.0;
        self.y = (top + bottom) / 2.0;
        self.width = right - left;
        self.height = bottom - top;
    }

    pub fn get_random_point_inside<R: Rng>(&self, margin: f32, rng: &mut R) -> (f32, f32) {
        // Increase the margin by 1 in calculations to keep a minimal gap to the border.
        let margin = margin + 1.0;
        (
            self._safe_randf32(rng, self.left() + margin, self.right() - margin),
            self._safe_randf32(rng, self.top() + margin, self.bottom() - margin),
        )
    }

    fn _safe_randf32<R: Rng>(&self, rng: &mut R, min: f32, max: f32) -> f32 {
        if min > max {
            return min;
        }
        rng.gen_range(min..=max)
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }
}

impl Shape for Aabb {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Aabb
    }

    fn position(&self) -> Point2<f32> {
        Point2::new(self.x, self.y)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Circle {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    pub fn try_new(x: f32, y: f32, radius: f32) -> ShapeResult<Self> {
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(ShapeError::InvalidCircleRadius { radius });
        }
        Ok(Self::new(x, y, radius))
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        let dx = x - self.x;
        let dy = y - self.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            radius: 0.0,
        }
    }
}

impl Shape for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn position(&self) -> Point2<f32> {
        Point2::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    position: Point2<f32>,
    vertices: Vec<Vector2<f32>>,
    world_vertices: Vec<Point2<f32>>,
}

impl Polygon {
    // Vertices are relative to the position: a vertex at (0,0) sits exactly
    // on `position`.
    pub fn new(position: Point2<f32>, vertices: Vec<Vector2<f32>>) -> ShapeResult<Self> {
        if vertices.len() < 3 {
            return Err(ShapeError::TooFewVertices {
                count: vertices.len(),
            });
        }
        for vertex in &vertices {
            if !(vertex.x.is_finite() && vertex.y.is_finite()) {
                return Err(ShapeError::NonFiniteVertex {
                    x: vertex.x,
                    y: vertex.y,
                });
            }
        }
        let mut polygon = Self {
            position,
            vertices,
            world_vertices: Vec::new(),
        };
        polygon.compute_world_vertices();
        Ok(polygon)
    }

    pub fn vertices(&self) -> &[Vector2<f32>] {
        &self.vertices
    }

    pub fn world_vertices(&self) -> &[Point2<f32>] {
        &self.world_vertices
    }

    pub fn set_position(&mut self, position: Point2<f32>) {
        self.position = position;
        self.compute_world_vertices();
    }

    fn compute_world_vertices(&mut self) {
        self.world_vertices.clear();
        for vertex in &self.vertices {
            self.world_vertices.push(self.position + *vertex);
        }
    }
}

impl Shape for Polygon {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Polygon
    }

    fn position(&self) -> Point2<f32> {
        self.position
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ray {
    start: Point2<f32>,
    direction: Vector2<f32>,
    length: f32,
    end: Point2<f32>,
}

impl Ray {
    pub fn new(start: Point2<f32>, direction: Vector2<f32>, length: f32) -> ShapeResult<Self> {
        let norm = direction.norm();
        if !(norm.is_finite() && norm > 0.0) {
            return Err(ShapeError::ZeroLengthDirection);
        }
        if !(length.is_finite() && length >= 0.0) {
            return Err(ShapeError::InvalidRayLength { length });
        }
        let direction = direction / norm;
        let end = start + direction * length;
        Ok(Self {
            start,
            direction,
            length,
            end,
        })
    }

    pub fn from_points(start: Point2<f32>, end: Point2<f32>) -> ShapeResult<Self> {
        let delta = end - start;
        Self::new(start, delta, delta.norm())
    }

    pub fn start(&self) -> Point2<f32> {
        self.start
    }

    pub fn direction(&self) -> Vector2<f32> {
        self.direction
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn end(&self) -> Point2<f32> {
        self.end
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeEnum {
    Aabb(Aabb),
    Circle(Circle),
    Polygon(Polygon),
}

impl ShapeEnum {
    pub fn set_position(&mut self, position: Point2<f32>) {
        match self {
            ShapeEnum::Aabb(aabb) => {
                aabb.x = position.x;
                aabb.y = position.y;
            }
            ShapeEnum::Circle(circle) => {
                circle.x = position.x;
                circle.y = position.y;
            }
            ShapeEnum::Polygon(polygon) => polygon.set_position(position),
        }
    }

    pub fn translate(&mut self, delta: Vector2<f32>) {
        let position = self.position() + delta;
        self.set_position(position);
    }
}

impl Shape for ShapeEnum {
    fn kind(&self) -> ShapeKind {
        match self {
            ShapeEnum::Aabb(aabb) => aabb.kind(),
            ShapeEnum::Circle(circle) => circle.kind(),
            ShapeEnum::Polygon(polygon) => polygon.kind(),
        }
    }

    fn position(&self) -> Point2<f32> {
        match self {
            ShapeEnum::Aabb(aabb) => aabb.position(),
            ShapeEnum::Circle(circle) => circle.position(),
            ShapeEnum::Polygon(polygon) => polygon.position(),
        }
    }
}
