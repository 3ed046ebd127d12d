pub mod home;
pub mod login;
pub mod not_found;
pub mod page;
pub mod profile;
pub mod search;
pub mod signup;
pub mod update;

pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use page::Page;
pub use profile::Profile;
pub use search::Search;
pub use signup::Signup;
pub use update::Update;
