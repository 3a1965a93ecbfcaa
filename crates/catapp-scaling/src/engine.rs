use catapp_core::errors::{CatError, ErrorInfo};
use catapp_core::{EnergyType, RecordStore};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fit::compute_fit;
use crate::pairing::normalize;
use crate::plot::{PlotPayload, ScalingPlot};
use crate::retrieval::{fetch, ScalingQuery};
use crate::wrap::DEFAULT_LINE_WRAP;

fn default_line_wrap() -> usize {
    DEFAULT_LINE_WRAP
}

/// Presentation knobs for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalingOptions {
    /// Characters per tooltip reference line.
    #[serde(default = "default_line_wrap")]
    pub line_wrap: usize,
}

impl Default for ScalingOptions {
    fn default() -> Self {
        Self {
            line_wrap: default_line_wrap(),
        }
    }
}

impl ScalingOptions {
    pub fn validate(&self) -> Result<(), CatError> {
        if self.line_wrap == 0 {
            return Err(CatError::Config(
                ErrorInfo::new("line_wrap", "tooltip line wrap must be positive")
                    .with_context("line_wrap", self.line_wrap.to_string()),
            ));
        }
        Ok(())
    }
}

/// Computes scaling relations against an injected store.
///
/// Holds no mutable state; one call is one request.
#[derive(Debug)]
pub struct ScalingEngine<'a, S: RecordStore + ?Sized> {
    store: &'a S,
    options: ScalingOptions,
}

impl<'a, S: RecordStore + ?Sized> ScalingEngine<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            options: ScalingOptions::default(),
        }
    }

    pub fn with_options(store: &'a S, options: ScalingOptions) -> Result<Self, CatError> {
        options.validate()?;
        Ok(Self { store, options })
    }

    pub fn options(&self) -> &ScalingOptions {
        &self.options
    }

    /// Retrieval, pairing and fit for one pair of `AB|A|B` keys.
    pub fn scaling_xy(
        &self,
        x_reaction: &str,
        y_reaction: &str,
        out_x: EnergyType,
        out_y: EnergyType,
    ) -> Result<ScalingPlot, CatError> {
        let query = ScalingQuery::parse(x_reaction, y_reaction, out_x, out_y)?;
        self.run(&query)
    }

    pub fn run(&self, query: &ScalingQuery) -> Result<ScalingPlot, CatError> {
        let rows = fetch(self.store, query)?;
        let pairs = normalize(&rows, self.options.line_wrap)?;
        let xs: Vec<f64> = pairs.iter().map(|pair| pair.x).collect();
        let ys: Vec<f64> = pairs.iter().map(|pair| pair.y).collect();
        let fit = compute_fit(&xs, &ys)?;
        debug!(points = pairs.len(), fitted = fit.is_some(), "scaling relation computed");
        Ok(ScalingPlot::assemble(query, pairs, fit))
    }

    /// [`Self::scaling_xy`] encoded for the presentation layer.
    pub fn scaling_payload(
        &self,
        x_reaction: &str,
        y_reaction: &str,
        out_x: EnergyType,
        out_y: EnergyType,
    ) -> Result<PlotPayload, CatError> {
        self.scaling_xy(x_reaction, y_reaction, out_x, out_y)?
            .to_payload()
    }
}
