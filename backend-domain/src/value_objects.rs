// Domain value objects
pub mod identifiers;
pub mod payload_format;
pub mod resolution;

pub use identifiers::*;
pub use payload_format::*;
pub use resolution::*;
