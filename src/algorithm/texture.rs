use crate::algorithm::annealing::{Annealer, iterations_for};
use crate::algorithm::random::RandomSource;
use crate::algorithm::sampler::sample_grid;
use crate::algorithm::schedule::TemperatureSchedule;
use crate::catalog::Catalog;
use crate::io::configuration::ITERATIONS_PER_SITE;
use crate::io::error::Result;
use crate::math::probability::ProbabilityTable;
use crate::spatial::Grid;

/// Sampling and annealing configuration for producing textures
#[derive(Debug, Clone)]
pub struct TextureGenerator {
    catalog: Catalog,
    table: ProbabilityTable,
    schedule: TemperatureSchedule,
    iterations_per_site: f64,
}

impl TextureGenerator {
    /// Combine a catalog, probability table and schedule
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if `iterations_per_site` is negative or not finite
    pub fn new(
        catalog: Catalog,
        table: ProbabilityTable,
        schedule: TemperatureSchedule,
        iterations_per_site: f64,
    ) -> Result<Self> {
        iterations_for(iterations_per_site, 0)?;
        Ok(Self {
            catalog,
            table,
            schedule,
            iterations_per_site,
        })
    }

    /// The fixed snow configuration
    ///
    /// # Errors
    ///
    /// Fails only if the built-in catalog, frequencies or schedule are inconsistent
    pub fn standard() -> Result<Self> {
        let catalog = Catalog::standard()?;
        let table = ProbabilityTable::standard(&catalog)?;
        let schedule = TemperatureSchedule::standard()?;
        Self::new(catalog, table, schedule, ITERATIONS_PER_SITE)
    }

    /// Replace the temperature schedule
    #[must_use]
    pub fn with_schedule(mut self, schedule: TemperatureSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Replace the per-site iteration budget
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if `iterations_per_site` is negative or not finite
    pub fn with_iterations_per_site(mut self, iterations_per_site: f64) -> Result<Self> {
        iterations_for(iterations_per_site, 0)?;
        self.iterations_per_site = iterations_per_site;
        Ok(self)
    }

    /// Symbol catalog in use
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Probability table in use
    pub const fn table(&self) -> &ProbabilityTable {
        &self.table
    }

    /// Temperature schedule in use
    pub const fn schedule(&self) -> &TemperatureSchedule {
        &self.schedule
    }

    /// Sample a fresh grid from `seed` and return an annealer ready to run on it
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid or sampling fails
    pub fn annealer(&self, seed: u64, rows: usize, cols: usize) -> Result<Annealer<'_>> {
        let mut rng = RandomSource::new(seed);
        let grid = sample_grid(&self.table, rows, cols, &mut rng)?;
        Annealer::new(
            grid,
            &self.catalog,
            self.schedule.clone(),
            self.iterations_per_site,
            rng,
        )
    }

    /// Sample and fully anneal a `rows x cols` texture
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid or sampling fails
    pub fn generate(&self, seed: u64, rows: usize, cols: usize) -> Result<Grid> {
        let mut annealer = self.annealer(seed, rows, cols)?;
        annealer.run();
        Ok(annealer.into_grid())
    }
}

/// Annealed snow texture for `seed` using the fixed configuration
///
/// # Errors
///
/// Returns [`crate::SnowError::InvalidDimensions`] if `rows` or `cols` is zero
pub fn generate_texture(seed: u64, rows: usize, cols: usize) -> Result<Grid> {
    TextureGenerator::standard()?.generate(seed, rows, cols)
}
