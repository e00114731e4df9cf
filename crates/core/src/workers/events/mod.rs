pub mod capture_failed;

pub use capture_failed::*;
