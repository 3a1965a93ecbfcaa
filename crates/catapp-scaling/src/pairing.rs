use catapp_core::errors::{CatError, ErrorInfo};
use catapp_core::{ScalingRow, SurfaceContext};
use serde::{Deserialize, Serialize};

use crate::wrap::{paired_reference_block, reference_block, LINE_BREAK};

/// One plotted point and its tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationPair {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub context: SurfaceContext,
}

fn parse_energy(raw: &str, axis: &str, context: &SurfaceContext) -> Result<f64, CatError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| {
            CatError::MalformedRecord(
                ErrorInfo::new("energy_not_numeric", format!("stored energy {raw:?} is not a number"))
                    .with_context("axis", axis)
                    .with_context("context", context.label()),
            )
        })
}

/// Tooltip text: surface heading followed by the reference block.
pub fn data_label(context: &SurfaceContext, references: &str) -> String {
    format!(
        "{heading} {br}{br}References:{br}{references}",
        heading = context.label(),
        br = LINE_BREAK,
    )
}

/// Turns raw rows into observation pairs, one per row, preserving order.
///
/// Legacy terminations are normalized before any label is built. A stored
/// energy that is not a finite number aborts the whole batch.
pub fn normalize(rows: &[ScalingRow], line_wrap: usize) -> Result<Vec<ObservationPair>, CatError> {
    rows.iter()
        .map(|row| {
            let context = SurfaceContext::new(row.surface(), row.termination());
            let (x_raw, y_raw, references) = match row {
                ScalingRow::Single(single) => (
                    &single.x_energy,
                    &single.y_energy,
                    reference_block(&single.reference, line_wrap),
                ),
                ScalingRow::Joined(joined) => (
                    &joined.x_energy,
                    &joined.y_energy,
                    paired_reference_block(&joined.x_reference, &joined.y_reference, line_wrap),
                ),
            };
            Ok(ObservationPair {
                x: parse_energy(x_raw, "x", &context)?,
                y: parse_energy(y_raw, "y", &context)?,
                label: data_label(&context, &references),
                context,
            })
        })
        .collect()
}
