pub mod check;
pub mod dump;
pub mod rules;
pub mod run_common;
pub mod source_loader;
