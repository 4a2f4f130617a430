//! AI request pipeline
//!
//! validate → identify caller → rate limit → prompt → provider chain under a
//! deadline → shape the response. There are no pipeline-level retries; the
//! chain's candidate list is the only fallback.

mod chat;
mod identity;
mod orchestrator;
mod prompts;
mod status;


pub use chat::{ChatContext, ChatRequest, ChatResponse};
pub use identity::CallerIdentity;
pub use orchestrator::AiPipeline;
pub use prompts::build_chat_system_prompt;
pub use status::{QuotaStatus, RateLimitStatus};
