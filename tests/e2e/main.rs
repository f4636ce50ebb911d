mod harness;
pub use harness::*;

mod quote_lifecycle_tests;
