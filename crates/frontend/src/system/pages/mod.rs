pub mod home;
pub mod login;
pub mod logout;
pub mod overview;
pub mod signup;

pub use home::HomePage;
pub use login::LoginPage;
pub use logout::LogoutPage;
pub use overview::OverviewPage;
pub use signup::SignupPage;
