//! Orchestration of the density pipeline.
//!
//! [`compute`] is the whole engine as one pure function of its five
//! inputs. [`DensityController`] wraps it for hosts that change one input
//! at a time: every effective change reruns [`compute`] from scratch,
//! and boundary fetches are sequenced with [`LoadTicket`]s so a slow,
//! stale fetch can never overwrite a newer dataset.

use station_density_boundary::BoundaryDataset;
use station_density_models::{
    AdminLevel, Color, LegendStop, Palette, PointEntity, RegionAggregate, SummaryStats,
};

use crate::aggregate::{Aggregation, aggregate};
use crate::catalog::RegionCatalog;
use crate::scale::ColorScale;
use crate::stats::summarize;

/// Everything the pipeline depends on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DensityInputs {
    /// Stations to count.
    pub points: Vec<PointEntity>,
    /// Boundary dataset, `None` until one has been loaded.
    pub boundary: Option<BoundaryDataset>,
    /// Admin level to aggregate at.
    pub level: AdminLevel,
    /// Property key to read region names from instead of the level
    /// default.
    pub region_key: Option<String>,
    /// Fill palette.
    pub palette: Palette,
}

impl DensityInputs {
    /// Property key the catalog reads region names from.
    #[must_use]
    pub fn effective_region_key(&self) -> &str {
        self.region_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .unwrap_or_else(|| self.level.default_region_key())
    }
}

/// Output of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityView {
    level: AdminLevel,
    region_key: String,
    aggregation: Aggregation,
    scale: ColorScale,
    stats: SummaryStats,
}

impl DensityView {
    /// Admin level the view was computed at.
    #[must_use]
    pub const fn level(&self) -> AdminLevel {
        self.level
    }

    /// Property key region names were read from.
    #[must_use]
    pub fn region_key(&self) -> &str {
        &self.region_key
    }

    /// Region buckets and unmatched tally.
    #[must_use]
    pub const fn aggregation(&self) -> &Aggregation {
        &self.aggregation
    }

    /// Regions in boundary-dataset order.
    pub fn regions(&self) -> impl Iterator<Item = &RegionAggregate> {
        self.aggregation.regions().iter()
    }

    /// Looks up a region by exact name (for hover and click handlers).
    #[must_use]
    pub fn region(&self, name: &str) -> Option<&RegionAggregate> {
        self.aggregation.get(name)
    }

    /// Regions with data, busiest first.
    #[must_use]
    pub fn ranked(&self) -> Vec<&RegionAggregate> {
        self.aggregation.ranked()
    }

    /// Count-to-color scale.
    #[must_use]
    pub const fn scale(&self) -> &ColorScale {
        &self.scale
    }

    /// Fill color for a count.
    #[must_use]
    pub fn color_of(&self, count: u64) -> Color {
        self.scale.color_of(count)
    }

    /// Legend stops for the current palette.
    #[must_use]
    pub fn legend_gradient(&self) -> Vec<LegendStop> {
        self.scale.legend_gradient()
    }

    /// Summary statistics.
    #[must_use]
    pub const fn stats(&self) -> &SummaryStats {
        &self.stats
    }
}

/// Pipeline state.
#[derive(Debug, Clone, PartialEq)]
pub enum DensityState {
    /// No boundary dataset yet. The view has no regions, every station
    /// counts as unmatched, and the scale is neutral-only.
    NotReady(DensityView),
    /// Catalog, aggregates, and scale are computed.
    Ready(DensityView),
}

impl DensityState {
    /// The current view, ready or not.
    #[must_use]
    pub const fn view(&self) -> &DensityView {
        match self {
            Self::NotReady(view) | Self::Ready(view) => view,
        }
    }

    /// Whether a boundary dataset has been applied.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Runs the full pipeline.
///
/// Builds the region catalog from the boundary dataset, folds every
/// station into it, derives the color scale, and summarizes. Without a
/// boundary dataset the result is [`DensityState::NotReady`].
#[must_use]
pub fn compute(inputs: &DensityInputs) -> DensityState {
    let level = inputs.level;
    let region_key = inputs.effective_region_key().to_string();

    let Some(boundary) = &inputs.boundary else {
        let aggregation = Aggregation::unmatched_only(inputs.points.len() as u64);
        let stats = summarize(&aggregation);
        return DensityState::NotReady(DensityView {
            level,
            region_key,
            aggregation,
            scale: ColorScale::neutral(inputs.palette),
            stats,
        });
    };

    let catalog = RegionCatalog::build(boundary, level, Some(&region_key));
    let aggregation = aggregate(&catalog, &inputs.points, level);
    let scale = ColorScale::build(&aggregation, inputs.palette);
    let stats = summarize(&aggregation);

    log::debug!(
        "Computed {level} density: {} regions, {} with data, domain max {}, {} unmatched",
        catalog.len(),
        stats.total_regions_with_data,
        scale.domain_max(),
        stats.unmatched_points
    );

    DensityState::Ready(DensityView {
        level,
        region_key,
        aggregation,
        scale,
        stats,
    })
}

/// Handle for one boundary fetch. Only the most recently issued ticket
/// may install its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

/// Holds the pipeline inputs and the latest result.
#[derive(Debug, Clone)]
pub struct DensityController {
    inputs: DensityInputs,
    state: DensityState,
    latest_ticket: u64,
    recomputations: u64,
}

impl Default for DensityController {
    fn default() -> Self {
        Self::new(DensityInputs::default())
    }
}

impl DensityController {
    /// Creates a controller and computes the initial state.
    #[must_use]
    pub fn new(inputs: DensityInputs) -> Self {
        let state = compute(&inputs);
        Self {
            inputs,
            state,
            latest_ticket: 0,
            recomputations: 1,
        }
    }

    /// Current inputs.
    #[must_use]
    pub const fn inputs(&self) -> &DensityInputs {
        &self.inputs
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &DensityState {
        &self.state
    }

    /// Current view (empty and neutral while not ready).
    #[must_use]
    pub const fn view(&self) -> &DensityView {
        self.state.view()
    }

    /// Number of pipeline runs so far, including the initial one.
    #[must_use]
    pub const fn recomputations(&self) -> u64 {
        self.recomputations
    }

    fn recompute(&mut self) {
        self.state = compute(&self.inputs);
        self.recomputations += 1;
    }

    /// Replaces the station list.
    pub fn set_points(&mut self, points: Vec<PointEntity>) {
        if self.inputs.points == points {
            return;
        }
        self.inputs.points = points;
        self.recompute();
    }

    /// Switches the admin level.
    ///
    /// Any region-key override is dropped, since a key chosen for one
    /// level rarely names regions at another.
    pub fn set_level(&mut self, level: AdminLevel) {
        if self.inputs.level == level {
            return;
        }
        self.inputs.level = level;
        self.inputs.region_key = None;
        self.recompute();
    }

    /// Sets or clears the region-key override.
    pub fn set_region_key(&mut self, region_key: Option<String>) {
        if self.inputs.region_key == region_key {
            return;
        }
        self.inputs.region_key = region_key;
        self.recompute();
    }

    /// Switches the palette.
    pub fn set_palette(&mut self, palette: Palette) {
        if self.inputs.palette == palette {
            return;
        }
        self.inputs.palette = palette;
        self.recompute();
    }

    /// Installs a boundary dataset directly (e.g. one supplied by the
    /// host rather than fetched). Any fetch still in flight becomes
    /// stale.
    pub fn set_boundary(&mut self, dataset: BoundaryDataset) {
        self.latest_ticket += 1;
        if self.inputs.boundary.as_ref() == Some(&dataset) {
            return;
        }
        self.inputs.boundary = Some(dataset);
        self.recompute();
    }

    /// Drops the boundary dataset, returning to
    /// [`DensityState::NotReady`].
    pub fn invalidate_boundary(&mut self) {
        if self.inputs.boundary.is_none() {
            return;
        }
        self.inputs.boundary = None;
        self.recompute();
    }

    /// Registers a new boundary fetch. Earlier tickets become stale.
    pub const fn begin_boundary_load(&mut self) -> LoadTicket {
        self.latest_ticket += 1;
        LoadTicket(self.latest_ticket)
    }

    /// Applies the result of a boundary fetch.
    ///
    /// A failed fetch (`None`) clears the dataset. Each ticket completes
    /// at most once; results for stale or already-completed tickets are
    /// discarded and `false` is returned.
    pub fn complete_boundary_load(
        &mut self,
        ticket: LoadTicket,
        dataset: Option<BoundaryDataset>,
    ) -> bool {
        if ticket.0 != self.latest_ticket {
            log::debug!(
                "Discarding stale boundary load {} (latest is {})",
                ticket.0,
                self.latest_ticket
            );
            return false;
        }
        self.latest_ticket += 1;

        match dataset {
            Some(dataset) => {
                if self.inputs.boundary.as_ref() != Some(&dataset) {
                    self.inputs.boundary = Some(dataset);
                    self.recompute();
                }
            }
            None => self.invalidate_boundary(),
        }
        true
    }
}
