pub mod home;
pub mod dashboard;
pub mod auth;
pub mod settings;
pub mod economy_calculator;
pub mod pluvial_calculator;
pub mod success_stories;
pub mod user_list;

pub use home::HomePage;
pub use dashboard::DashboardPage;
pub use auth::LoginRegisterPage;
pub use settings::SettingsPage;
pub use economy_calculator::EconomyCalculatorPage;
pub use pluvial_calculator::PluvialCalculatorPage;
pub use success_stories::SuccessStoriesPage;
pub use user_list::UserListPage;
