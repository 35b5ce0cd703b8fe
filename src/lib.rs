pub mod config;
pub mod evaluator;
pub mod history;
pub mod output;
pub mod run;
pub mod scoring;
