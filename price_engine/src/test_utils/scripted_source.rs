use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
    Mutex,
};

use fx_common::{RateSource, RateTable};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct ScriptedSourceError(pub String);

/// A rate source whose answer can be changed at any time, and which counts how often it is asked.
///
/// Clones share state, so a test can hand one clone to a [`RatesApi`](crate::RatesApi) and keep the other to script
/// it and inspect the call count.
#[derive(Debug, Clone)]
pub struct ScriptedRateSource {
    name: String,
    response: Arc<Mutex<Result<RateTable, String>>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedRateSource {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            response: Arc::new(Mutex::new(Err(format!("{name} has not been scripted")))),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn succeed_with(&self, rates: RateTable) {
        self.script(Ok(rates));
    }

    pub fn fail_with(&self, message: &str) {
        self.script(Err(message.to_string()));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn script(&self, response: Result<RateTable, String>) {
        match self.response.lock() {
            Ok(mut r) => *r = response,
            Err(poisoned) => *poisoned.into_inner() = response,
        }
    }
}

impl RateSource for ScriptedRateSource {
    type Error = ScriptedSourceError;

    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_latest(&self) -> Result<RateTable, Self::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let response = match self.response.lock() {
            Ok(r) => r.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };
        response.map_err(ScriptedSourceError)
    }
}
