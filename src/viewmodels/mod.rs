pub mod regions_viewmodel;
pub mod map_viewmodel;
pub mod forms;
pub mod address;
pub mod messages;
pub mod people;
pub mod navigation;
pub mod revision;

pub use regions_viewmodel::{DerivedStats, FetchTicket, PollerAction, PollerState};
pub use navigation::Page;
pub use revision::{Bump, Revision};
