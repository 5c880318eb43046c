// Application layer: the use cases running over the domain

pub mod model_builder;
pub mod pattern_generator;
pub mod planner;
pub mod solution_extractor;

pub use model_builder::ModelBuilder;
pub use pattern_generator::PatternGenerator;
pub use planner::{CuttingStockPlanner, PlanError, PlannerConfig};
pub use solution_extractor::{CuttingPlan, PatternUsage, SolutionExtractor};
