pub mod use_session;
pub mod use_notifications;
pub mod use_regions_poller;
pub mod use_viewport;

pub use use_session::{use_session, SessionProvider, UseSessionHandle};
pub use use_notifications::{use_notifications, use_notifier, NotificationProvider, Notifier};
pub use use_regions_poller::{use_regions_poller, UseRegionsPollerHandle};
pub use use_viewport::use_viewport_width;
