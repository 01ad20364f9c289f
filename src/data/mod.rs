pub mod channel;
pub mod cursors;
pub mod gain;
pub mod loader;
pub mod measurement;
pub mod pga;
pub mod registry;
pub mod session;
pub mod snapshot;
pub mod synthetic;
