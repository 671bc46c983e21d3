//! Route handlers organized by resource

pub mod agent_tools;
pub mod agents;
pub mod conversations;
pub mod health;
pub mod messages;
pub mod stats;
