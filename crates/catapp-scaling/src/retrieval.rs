use catapp_core::errors::CatError;
use catapp_core::{EnergyType, ReactionDescriptor, RecordStore, ScalingRow};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The two axes of a scaling plot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalingQuery {
    pub x_reaction: ReactionDescriptor,
    pub y_reaction: ReactionDescriptor,
    pub out_x: EnergyType,
    pub out_y: EnergyType,
}

impl ScalingQuery {
    /// Parses both `AB|A|B` keys. Fails before any store access.
    pub fn parse(
        x_reaction: &str,
        y_reaction: &str,
        out_x: EnergyType,
        out_y: EnergyType,
    ) -> Result<Self, CatError> {
        Ok(Self {
            x_reaction: x_reaction.parse()?,
            y_reaction: y_reaction.parse()?,
            out_x,
            out_y,
        })
    }

    /// Both axes plot the same reaction (identical keys, fragment order included).
    pub fn is_same_reaction(&self) -> bool {
        self.x_reaction == self.y_reaction
    }
}

/// Runs the retrieval path matching `query` and tags the rows accordingly.
pub fn fetch<S>(store: &S, query: &ScalingQuery) -> Result<Vec<ScalingRow>, CatError>
where
    S: RecordStore + ?Sized,
{
    let rows: Vec<ScalingRow> = if query.is_same_reaction() {
        store
            .same_reaction_rows(&query.x_reaction, query.out_x, query.out_y)?
            .into_iter()
            .map(ScalingRow::Single)
            .collect()
    } else {
        store
            .joined_reaction_rows(
                &query.x_reaction,
                &query.y_reaction,
                query.out_x,
                query.out_y,
            )?
            .into_iter()
            .map(ScalingRow::Joined)
            .collect()
    };
    debug!(
        same_reaction = query.is_same_reaction(),
        rows = rows.len(),
        "retrieved scaling candidates"
    );
    Ok(rows)
}
