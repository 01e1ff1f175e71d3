pub mod form_field;
pub mod region_map;
pub mod ranked_list;
pub mod notifications;
pub mod header;
pub mod side_menu;
pub mod address_modal;

pub use form_field::{SelectField, TextAreaField, TextField};
pub use region_map::RegionMap;
pub use ranked_list::RankedList;
pub use notifications::NotificationList;
pub use header::Header;
pub use side_menu::SideMenu;
pub use address_modal::AddressModal;
