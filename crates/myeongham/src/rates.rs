//! Live earnings-rate fetching for the mogul meter.
//!
//! The built-in rates are rough public estimates, so the meter can
//! optionally poll a JSON endpoint for fresher numbers. The poller runs in
//! a background thread and publishes into a shared table; the built-in
//! table stays authoritative whenever the feed has nothing.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::thread;
use std::time::{Duration, Instant};

use serde::Deserialize;

/// Timeout for HTTP requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// How often the fetch loop wakes to check the interval and the stop flag.
const POLL_SLEEP: Duration = Duration::from_secs(60);

/// Rates document served by the configured endpoint.
#[derive(Debug, Deserialize)]
struct RatesDocument {
    rates: Vec<RateEntry>,
}

#[derive(Debug, Deserialize)]
struct RateEntry {
    id: String,
    usd_per_second: f64,
}

/// Background poller publishing live earnings rates.
#[derive(Debug)]
pub struct RatesMonitor {
    /// Fetched rates keyed by figure id.
    rates: Arc<RwLock<HashMap<String, f64>>>,
    url: String,
    refresh: Duration,
    /// Flag to signal thread termination.
    running: Arc<RwLock<bool>>,
}

impl RatesMonitor {
    pub fn new(url: String, refresh_minutes: u64) -> Self {
        Self {
            rates: Arc::new(RwLock::new(HashMap::new())),
            url,
            refresh: Duration::from_secs(refresh_minutes.max(1) * 60),
            running: Arc::new(RwLock::new(false)),
        }
    }

    /// Start the background fetching thread.
    pub fn start(&self) {
        if let Ok(mut running) = self.running.write() {
            if *running {
                return; // Already running
            }
            *running = true;
        }

        let rates = self.rates.clone();
        let url = self.url.clone();
        let refresh = self.refresh;
        let running = self.running.clone();

        thread::spawn(move || {
            // Fetch immediately on start
            fetch_and_update(&url, &rates);
            let mut last_fetch = Instant::now();

            loop {
                if let Ok(is_running) = running.read()
                    && !*is_running
                {
                    break;
                }

                if last_fetch.elapsed() >= refresh {
                    fetch_and_update(&url, &rates);
                    last_fetch = Instant::now();
                }

                thread::sleep(POLL_SLEEP);
            }
        });
    }

    /// Stop the background thread.
    pub fn stop(&self) {
        if let Ok(mut running) = self.running.write() {
            *running = false;
        }
    }

    /// Live rate for a figure id. Non-blocking; `None` when the feed has
    /// nothing yet, so callers fall back to the built-in table.
    pub fn rate_for(&self, id: &str) -> Option<f64> {
        self.rates.try_read().ok()?.get(id).copied()
    }
}

impl Drop for RatesMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Fetch the document and replace the shared table. Errors keep the
/// previous table.
fn fetch_and_update(url: &str, rates: &Arc<RwLock<HashMap<String, f64>>>) {
    if let Ok(fetched) = fetch_rates(url)
        && let Ok(mut table) = rates.write()
    {
        *table = fetched;
    }
}

/// Fetch the rates document from the configured endpoint.
fn fetch_rates(url: &str) -> Result<HashMap<String, f64>, String> {
    let agent = ureq::Agent::config_builder()
        .timeout_global(Some(REQUEST_TIMEOUT))
        .build()
        .new_agent();

    let document: RatesDocument = agent
        .get(url)
        .call()
        .map_err(|e| format!("HTTP error: {e}"))?
        .body_mut()
        .read_json()
        .map_err(|e| format!("JSON parse error: {e}"))?;

    Ok(parse_document(document))
}

/// Keep only usable rates: finite and non-negative.
fn parse_document(document: RatesDocument) -> HashMap<String, f64> {
    document
        .rates
        .into_iter()
        .filter(|entry| entry.usd_per_second.is_finite() && entry.usd_per_second >= 0.0)
        .map(|entry| (entry.id, entry.usd_per_second))
        .collect()
}
