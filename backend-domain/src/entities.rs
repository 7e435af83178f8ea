// Domain entities

pub mod address;
pub mod dashboard;
pub mod event;
pub mod model;
pub mod registration;
pub mod scan_log;
pub mod speaker;

pub use address::*;
pub use dashboard::*;
pub use event::*;
pub use model::*;
pub use registration::*;
pub use scan_log::*;
pub use speaker::*;
