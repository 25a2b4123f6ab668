//! Screen collaborators.
//!
//! Leaf screens mounted by the shell. Each takes exactly the props the shell
//! hands it and nothing else.

mod chat;
mod community;
mod home;
mod login;
mod record;

pub use chat::ChatScreen;
pub use community::CommunityScreen;
pub use home::HomeScreen;
pub use login::LoginScreen;
pub use record::RecordScreen;
