//! Command workflow, decoupled from argument parsing

pub mod orchestration;
