pub mod appointment;
pub mod location;
pub mod query_shape;
