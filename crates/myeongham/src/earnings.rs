//! The mogul earnings meter.
//!
//! One figure is selected at a time; the meter shows rate × whole seconds
//! since selection and restarts from zero whenever the selection changes.

use std::time::Instant;

use myeongham_content::{MOGULS, Mogul};

/// Earnings meter state.
#[derive(Debug)]
pub struct EarningsMeter {
    selected: usize,
    selected_at: Instant,
}

impl EarningsMeter {
    pub fn new() -> Self {
        Self {
            selected: 0,
            selected_at: Instant::now(),
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> &'static Mogul {
        &MOGULS[self.selected % MOGULS.len()]
    }

    /// Move to the next figure; the accumulator restarts.
    pub fn cycle(&mut self) {
        self.select(self.selected + 1);
    }

    /// Select a figure by index. Reselecting the current one also restarts
    /// the accumulator.
    pub fn select(&mut self, index: usize) {
        self.selected = index % MOGULS.len();
        self.selected_at = Instant::now();
    }

    /// Whole seconds since the current figure was selected.
    pub fn elapsed_secs(&self) -> u64 {
        self.selected_at.elapsed().as_secs()
    }

    /// USD accrued by the current figure at the given per-second rate.
    pub fn accrued(&self, rate: f64) -> f64 {
        accrued_for(rate, self.elapsed_secs())
    }
}

impl Default for EarningsMeter {
    fn default() -> Self {
        Self::new()
    }
}

/// Earnings over a whole number of seconds. The meter ticks per second
/// rather than continuously.
pub fn accrued_for(rate: f64, elapsed_secs: u64) -> f64 {
    rate * elapsed_secs as f64
}

/// Format a USD amount with thousands separators and cents.
pub fn format_usd(amount: f64) -> String {
    let cents = (amount.max(0.0) * 100.0).round() as u128;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${grouped}.{frac:02}")
}
