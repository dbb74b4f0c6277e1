//! A single grid position.

use crate::option_set::OptionSet;

/// One grid cell.
///
/// `domain` is the set of options still legal here. `base_domain` is what
/// a recovery reset restores; it starts full and is narrowed by persistent
/// pins and face constraints, so those survive clearing.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    /// Options still legal.
    pub domain: OptionSet,
    /// Options restored by a reset.
    pub base_domain: OptionSet,
    /// Heat at the time of `heated_at`.
    pub temperature: f32,
    /// Tick at which `temperature` was last written.
    pub heated_at: u64,
    /// Set by a persistent pin. Recovery never clears such a cell.
    pub persistent: bool,
}

impl Cell {
    /// A fresh cell with every one of `n_options` legal.
    pub fn new(n_options: usize) -> Self {
        let full = OptionSet::full(n_options);
        Self {
            domain: full.clone(),
            base_domain: full,
            temperature: 0.0,
            heated_at: 0,
            persistent: false,
        }
    }

    /// A cell is set when exactly one option remains.
    pub fn is_set(&self) -> bool {
        self.domain.len() == 1
    }

    /// The chosen option, if set.
    pub fn chosen(&self) -> Option<usize> {
        self.domain.single()
    }

    /// Whether no option remains.
    pub fn is_contradiction(&self) -> bool {
        self.domain.is_empty()
    }

    /// Number of legal options.
    pub fn n_possibilities(&self) -> usize {
        self.domain.len()
    }

    /// Temperature at tick `now`, cooled geometrically by `decay` per tick
    /// since it was last heated.
    pub fn temperature_at(&self, now: u64, decay: f32) -> f32 {
        if decay <= 0.0 || self.temperature == 0.0 {
            return self.temperature;
        }
        let elapsed = now.saturating_sub(self.heated_at);
        let exponent = i32::try_from(elapsed).unwrap_or(i32::MAX);
        self.temperature * (1.0 - decay).powi(exponent)
    }

    /// Add `amount` heat at tick `now`, folding in any cooling first.
    pub fn heat(&mut self, amount: f32, now: u64, decay: f32) {
        self.temperature = self.temperature_at(now, decay) + amount;
        self.heated_at = now;
    }
}
