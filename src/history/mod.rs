pub mod storage;
pub mod types;

pub use storage::{get_prior_score_path, load_prior_score, save_prior_score};
pub use types::{PriorScore, ScoreDelta};
