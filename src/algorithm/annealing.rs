//! Metropolis annealing over symbol swaps
//!
//! The annealer owns the grid, the schedule and the random source for one
//! run. Each proposal picks two distinct cells, compares the energy of the
//! pair in place against the energy after exchanging them, and keeps the
//! exchange if it helps or if a Boltzmann draw allows it.

use crate::algorithm::energy::swap_energies;
use crate::algorithm::random::RandomSource;
use crate::algorithm::schedule::TemperatureSchedule;
use crate::catalog::Catalog;
use crate::io::error::{Result, invalid_parameter};
use crate::math::boltzmann_factor;
use crate::spatial::{Coordinate, Grid};

/// How a single swap proposal was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapOutcome {
    /// Lowered the pair energy and was taken unconditionally
    Improved,
    /// Did not lower the energy but passed the Boltzmann draw
    Accepted,
    /// Left the grid unchanged
    Rejected,
}

impl SwapOutcome {
    /// Whether the grid was changed
    pub const fn is_swap(self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// Record of one proposal, for inspection and tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapProposal {
    /// First cell
    pub first: Coordinate,
    /// Second cell
    pub second: Coordinate,
    /// Pair energy with the symbols where they were
    pub energy_before: f64,
    /// Pair energy with the symbols exchanged
    pub energy_after: f64,
    /// Resolution of the proposal
    pub outcome: SwapOutcome,
}

/// Tally of proposal outcomes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnealStats {
    /// Swaps taken because they lowered the energy
    pub improved: usize,
    /// Swaps taken through the Boltzmann draw
    pub accepted: usize,
    /// Proposals that left the grid as it was
    pub rejected: usize,
}

impl AnnealStats {
    /// Count one outcome
    pub const fn record(&mut self, outcome: SwapOutcome) {
        match outcome {
            SwapOutcome::Improved => self.improved += 1,
            SwapOutcome::Accepted => self.accepted += 1,
            SwapOutcome::Rejected => self.rejected += 1,
        }
    }

    /// Add another tally into this one
    pub const fn merge(&mut self, other: Self) {
        self.improved += other.improved;
        self.accepted += other.accepted;
        self.rejected += other.rejected;
    }

    /// Total proposals seen
    pub const fn proposals(&self) -> usize {
        self.improved + self.accepted + self.rejected
    }

    /// Proposals that changed the grid
    pub const fn swaps(&self) -> usize {
        self.improved + self.accepted
    }
}

/// Summary of one completed temperature pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureReport {
    /// Position of the temperature in the schedule
    pub index: usize,
    /// Temperature the pass ran at
    pub temperature: f64,
    /// Outcomes during this pass only
    pub stats: AnnealStats,
}

/// One annealing run over a grid
pub struct Annealer<'c> {
    grid: Grid,
    catalog: &'c Catalog,
    schedule: TemperatureSchedule,
    iterations_per_temperature: usize,
    rng: RandomSource,
    next_temperature: usize,
    stats: AnnealStats,
}

impl<'c> Annealer<'c> {
    /// Prepare a run that makes `round(iterations_per_site * cells)` proposals per temperature
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if `iterations_per_site` is negative or not finite
    pub fn new(
        grid: Grid,
        catalog: &'c Catalog,
        schedule: TemperatureSchedule,
        iterations_per_site: f64,
        rng: RandomSource,
    ) -> Result<Self> {
        let iterations_per_temperature = iterations_for(iterations_per_site, grid.len())?;

        Ok(Self {
            grid,
            catalog,
            schedule,
            iterations_per_temperature,
            rng,
            next_temperature: 0,
            stats: AnnealStats::default(),
        })
    }

    /// Current grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Schedule being followed
    pub const fn schedule(&self) -> &TemperatureSchedule {
        &self.schedule
    }

    /// Proposals made at each temperature
    pub const fn iterations_per_temperature(&self) -> usize {
        self.iterations_per_temperature
    }

    /// Outcomes so far across all temperatures
    pub const fn stats(&self) -> AnnealStats {
        self.stats
    }

    /// Whether every temperature has been visited
    pub fn is_finished(&self) -> bool {
        self.next_temperature >= self.schedule.len()
    }

    /// Make one swap proposal at `temperature`
    ///
    /// Returns `None` when the grid has fewer than two cells, in which case no
    /// randomness is consumed.
    pub fn propose(&mut self, temperature: f64) -> Option<SwapProposal> {
        let (i, j) = self.rng.distinct_pair(self.grid.len())?;
        let cols = self.grid.cols();
        let first = Coordinate::from_index(i, cols);
        let second = Coordinate::from_index(j, cols);

        let (energy_before, energy_after) = swap_energies(&self.grid, self.catalog, first, second);

        let outcome = if energy_after < energy_before {
            SwapOutcome::Improved
        } else {
            // The draw is always taken so the random sequence does not depend on T
            let draw = self.rng.uniform();
            if temperature > 0.0
                && boltzmann_factor(energy_after - energy_before, temperature) >= draw
            {
                SwapOutcome::Accepted
            } else {
                SwapOutcome::Rejected
            }
        };

        if outcome.is_swap() {
            self.grid.swap(first, second);
        }
        self.stats.record(outcome);

        Some(SwapProposal {
            first,
            second,
            energy_before,
            energy_after,
            outcome,
        })
    }

    /// Run the full iteration budget at `temperature`
    pub fn anneal_at(&mut self, temperature: f64) -> AnnealStats {
        let mut pass = AnnealStats::default();
        for _ in 0..self.iterations_per_temperature {
            match self.propose(temperature) {
                Some(proposal) => pass.record(proposal.outcome),
                None => break,
            }
        }
        pass
    }

    /// Run the next temperature in the schedule
    ///
    /// Returns `None` once the schedule is exhausted.
    pub fn step_temperature(&mut self) -> Option<TemperatureReport> {
        let index = self.next_temperature;
        let temperature = self.schedule.get(index)?;
        self.next_temperature += 1;

        let stats = self.anneal_at(temperature);
        Some(TemperatureReport {
            index,
            temperature,
            stats,
        })
    }

    /// Run every remaining temperature and return the overall tally
    pub fn run(&mut self) -> AnnealStats {
        while self.step_temperature().is_some() {}
        self.stats
    }

    /// Finish the run and hand back the grid
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

/// Proposals per temperature for a grid of `cells` cells
///
/// # Errors
///
/// Returns an invalid parameter error if `iterations_per_site` is negative or not finite
pub fn iterations_for(iterations_per_site: f64, cells: usize) -> Result<usize> {
    if !iterations_per_site.is_finite() || iterations_per_site < 0.0 {
        return Err(invalid_parameter(
            "iterations_per_site",
            &iterations_per_site,
            &"must be a finite, non-negative number",
        ));
    }
    Ok((iterations_per_site * cells as f64).round() as usize)
}
