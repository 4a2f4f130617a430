//! Contact form leads

mod store;
mod types;

pub use store::LeadStore;
pub use types::{Lead, LeadSubmission};
