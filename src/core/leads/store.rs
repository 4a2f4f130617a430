use std::collections::VecDeque;

use parking_lot::RwLock;
use tracing::{info, warn};

use super::types::Lead;

const DEFAULT_CAPACITY: usize = 10_000;

/// In-process lead table, newest first. The oldest lead is dropped once
/// `capacity` is reached.
#[derive(Debug)]
pub struct LeadStore {
    leads: RwLock<VecDeque<Lead>>,
    capacity: usize,
}

impl Default for LeadStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl LeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            leads: RwLock::new(VecDeque::new()),
            capacity: capacity.max(1),
        }
    }

    pub fn insert(&self, lead: Lead) {
        let mut leads = self.leads.write();
        if leads.len() >= self.capacity {
            if let Some(dropped) = leads.pop_back() {
                warn!(lead_id = %dropped.id, "Lead store full, dropping oldest lead");
            }
        }
        info!(lead_id = %lead.id, "New lead received");
        leads.push_front(lead);
    }

    /// All leads, newest first
    pub fn list(&self) -> Vec<Lead> {
        self.leads.read().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.leads.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
