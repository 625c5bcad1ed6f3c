pub mod message;
pub mod profile;

pub use message::{Condition, Message, MessageRole, RiskLevel};
pub use profile::{Gender, UserProfile};
