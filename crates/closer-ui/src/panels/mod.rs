pub mod briefing;
pub mod chat;
pub mod timer;
pub mod verdict;
