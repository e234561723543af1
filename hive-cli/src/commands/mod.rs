pub mod agents;
pub mod serve;
