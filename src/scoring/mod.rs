pub mod allocator;
pub mod engine;
pub mod resolver;
pub mod state;

pub use allocator::{allocate_points, Allocation, FALLBACK_POINTS, POINT_TARGET};
pub use engine::run_scoring_pass;
pub use resolver::resolve_check;
pub use state::{ScoreItem, ScoreState};
