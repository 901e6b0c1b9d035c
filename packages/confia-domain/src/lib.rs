pub mod catalog;
pub mod intent;
pub mod professional;
pub mod trust;
