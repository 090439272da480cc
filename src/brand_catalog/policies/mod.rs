pub mod match_policy;

pub use match_policy::MatchPolicy;
