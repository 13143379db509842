pub mod checker;
pub mod dispatcher;
pub mod sat;

pub use checker::CollisionChecker;
pub use dispatcher::{collide, shape_point, shape_ray, shape_shape, Operand};
pub use sat::SatCollisionChecker;
