//! Blog Pages
//!
//! One component per route.

mod home;
mod login;
mod post_detail;
mod post_editor;
mod profile;
mod register;

pub use home::HomePage;
pub use login::LoginPage;
pub use post_detail::PostDetailPage;
pub use post_editor::PostEditorPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;
