pub mod constant;
pub mod error;
pub mod factory;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{constant::*, factory, TestError, TestSetup};
}
