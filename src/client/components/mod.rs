pub mod navbar;
pub mod notice;

pub use navbar::Navbar;
pub use notice::ResponseNotice;
