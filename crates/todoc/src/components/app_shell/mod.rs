//! App shell components: Header, DialNavigation, Toaster
//!
//! These form the persistent frame around the active screen.

mod dial_navigation;
mod header;
mod toaster;

pub use dial_navigation::DialNavigation;
pub use header::Header;
pub use toaster::Toaster;
