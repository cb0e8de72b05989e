//! Scroll-reveal bookkeeping for elements tagged `reveal`.
//!
//! DESIGN
//! ======
//! Each observed element moves from hidden to revealed at most once. Samples
//! from the host observer are treated as independent, idempotent transitions
//! so delivery order and repeat callbacks do not matter. After `disconnect`
//! the set stops accepting samples entirely.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashMap;
use std::hash::Hash;

/// Class marking an element for scroll reveal.
pub const REVEAL_CLASS: &str = "reveal";

/// Class added once an element has been revealed.
pub const ACTIVE_CLASS: &str = "active";

/// Browsers may report a crossing ratio a hair under the threshold.
const RATIO_TOLERANCE: f64 = 1e-3;

/// Intersection observer configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    /// Pixels the viewport's bottom edge is pulled up by.
    pub bottom_margin_px: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { threshold: 0.1, bottom_margin_px: 50 }
    }
}

impl RevealOptions {
    /// CSS margin string for `IntersectionObserverInit.rootMargin`.
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }
}

/// One intersection report for one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionSample {
    #[must_use]
    pub fn meets(&self, options: &RevealOptions) -> bool {
        self.is_intersecting && self.ratio + RATIO_TOLERANCE >= options.threshold
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Hidden,
    Revealed,
}

/// Reveal state for a set of observed elements.
#[derive(Debug)]
pub struct RevealSet<K> {
    options: RevealOptions,
    phases: HashMap<K, Phase>,
    connected: bool,
}

impl<K: Eq + Hash> RevealSet<K> {
    #[must_use]
    pub fn new(options: RevealOptions) -> Self {
        Self { options, phases: HashMap::new(), connected: true }
    }

    /// Start tracking `key`. Re-observing keeps its current phase.
    pub fn observe(&mut self, key: K) {
        if self.connected {
            self.phases.entry(key).or_insert(Phase::Hidden);
        }
    }

    /// Feed a sample. Returns `true` only on the first reveal of `key`.
    pub fn record(&mut self, key: &K, sample: IntersectionSample) -> bool {
        if !self.connected || !sample.meets(&self.options) {
            return false;
        }
        match self.phases.get_mut(key) {
            Some(phase @ Phase::Hidden) => {
                *phase = Phase::Revealed;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_revealed(&self, key: &K) -> bool {
        self.phases.get(key) == Some(&Phase::Revealed)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.phases.values().filter(|p| **p == Phase::Revealed).count()
    }

    #[must_use]
    pub fn observed_count(&self) -> usize {
        self.phases.len()
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Drop every pending observation. Later samples and observes are
    /// ignored; elements already revealed stay revealed.
    pub fn disconnect(&mut self) {
        self.connected = false;
        self.phases.retain(|_, phase| *phase == Phase::Revealed);
    }
}
