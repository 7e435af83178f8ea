pub mod address_handlers;
pub mod dashboard_handlers;
pub mod event_handlers;
pub mod ops_handlers;
pub mod registration_handlers;
pub mod scan_handlers;
pub mod speaker_handlers;

pub use address_handlers::*;
pub use dashboard_handlers::*;
pub use event_handlers::*;
pub use ops_handlers::*;
pub use registration_handlers::*;
pub use scan_handlers::*;
pub use speaker_handlers::*;
