use std::collections::VecDeque;

use tablestakes_engine::history::ActionRecord;
use tablestakes_engine::provider::{ActionProvider, ActionRequest, Observation, ProviderError};

/// Replays a fixed sequence of requests, then folds.
///
/// Every observation it is shown is kept, so tests can assert on what the
/// seat saw.
#[derive(Debug, Clone, Default)]
pub struct ScriptedProvider {
    name: String,
    queue: VecDeque<ActionRequest>,
    observed: Vec<Observation>,
}

impl ScriptedProvider {
    pub fn new(name: impl Into<String>, requests: impl IntoIterator<Item = ActionRequest>) -> Self {
        Self {
            name: name.into(),
            queue: requests.into_iter().collect(),
            observed: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    pub fn observed(&self) -> &[Observation] {
        &self.observed
    }
}

impl ActionProvider for ScriptedProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn decide(&mut self, state: &Observation, _: &[ActionRecord]) -> Result<ActionRequest, ProviderError> {
        self.observed.push(state.clone());
        Ok(self.queue.pop_front().unwrap_or_else(ActionRequest::fold))
    }
}
