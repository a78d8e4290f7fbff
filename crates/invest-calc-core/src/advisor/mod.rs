pub mod catalog;
pub mod engine;
pub mod profile;

pub use catalog::{catalog, AllocationLine, AssetCategory, PortfolioTemplate, TemplateAllocation};
pub use engine::{recommend, score_candidates, CandidateScore, PortfolioRecommendation};
pub use profile::{Experience, Goal, InvestorProfile, RiskTolerance, TimeHorizon};
