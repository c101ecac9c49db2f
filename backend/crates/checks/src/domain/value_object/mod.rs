//! Value Object Module

pub mod credentials;
pub mod triangle_sides;

pub use credentials::Credentials;
pub use triangle_sides::TriangleSides;
