#![allow(unused_imports)]

pub use devlaunch_test_utils::{init_tracing, with_timeout};
