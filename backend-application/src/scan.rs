// Scan session state

pub mod session;

pub use session::*;
