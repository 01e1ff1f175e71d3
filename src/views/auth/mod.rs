pub mod login_form;
pub mod register_form;
pub mod login_register;

pub use login_register::LoginRegisterPage;
