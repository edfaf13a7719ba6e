pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{
            TEST_AUTH_CLIENT_ID, TEST_AUTH_CLIENT_SECRET, TEST_CALLBACK_URL, TEST_JWT_SECRET,
            TEST_OTHER_USER_ID, TEST_USER_ID,
        },
        fixtures::factory,
        TestBuilder, TestContext, TestError,
    };
}
