//! Bezel scenes: object grouping, shared parent transforms, and export.

pub mod composed;
pub mod export;
pub mod object;

pub use composed::Composed;
pub use object::SceneObject;
