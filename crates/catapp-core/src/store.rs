//! The record store capability and the row shapes it returns.

use serde::{Deserialize, Serialize};

use crate::errors::CatError;
use crate::reaction::{EnergyType, ReactionDescriptor};

/// One full row of the reaction-energy store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyRecord {
    /// Compound identifier.
    #[serde(rename = "AB")]
    pub ab: String,
    /// First fragment.
    #[serde(rename = "A")]
    pub a: String,
    /// Second fragment.
    #[serde(rename = "B")]
    pub b: String,
    /// Surface identifier.
    #[serde(rename = "Surface")]
    pub surface: String,
    /// Raw termination as stored, legacy spellings included.
    #[serde(rename = "Termination")]
    pub termination: String,
    /// Reaction energy in eV, kept in its stored text form.
    #[serde(rename = "Reaction_Energy", default)]
    pub reaction_energy: Option<String>,
    /// Activation energy in eV, kept in its stored text form.
    #[serde(rename = "Activation_Energy", default)]
    pub activation_energy: Option<String>,
    /// Bibliographic reference.
    #[serde(rename = "Reference", default)]
    pub reference: String,
    /// Source URL for the reference.
    #[serde(rename = "Url", default)]
    pub url: String,
}

impl EnergyRecord {
    /// Stored text of the selected energy, if present and non-empty.
    pub fn energy(&self, kind: EnergyType) -> Option<&str> {
        let value = match kind {
            EnergyType::ReactionEnergy => self.reaction_energy.as_deref(),
            EnergyType::ActivationEnergy => self.activation_energy.as_deref(),
        };
        value.filter(|text| !text.is_empty())
    }

    /// The reaction this record belongs to, fragments as stored.
    pub fn reaction(&self) -> ReactionDescriptor {
        ReactionDescriptor {
            ab: self.ab.clone(),
            a: self.a.clone(),
            b: self.b.clone(),
        }
    }
}

/// A row from the same-reaction query: both energies come from one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleReactionRow {
    /// Stored text of the x-axis energy.
    pub x_energy: String,
    /// Stored text of the y-axis energy.
    pub y_energy: String,
    /// Surface identifier.
    pub surface: String,
    /// Raw termination.
    pub termination: String,
    /// Bibliographic reference.
    pub reference: String,
    /// Source URL.
    pub url: String,
}

/// A row from the cross-reaction self-join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinedReactionRow {
    /// Stored text of the x-side energy.
    pub x_energy: String,
    /// Stored text of the y-side energy.
    pub y_energy: String,
    /// Surface shared by both sides.
    pub surface: String,
    /// Raw termination of the x side.
    pub termination: String,
    /// Reference of the x-side record.
    pub x_reference: String,
    /// URL of the x-side record.
    pub x_url: String,
    /// Reference of the y-side record.
    pub y_reference: String,
    /// URL of the y-side record.
    pub y_url: String,
}

/// Raw retrieval output, tagged by the query path that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalingRow {
    /// Produced when both axes use the same reaction.
    Single(SingleReactionRow),
    /// Produced by the cross-reaction join.
    Joined(JoinedReactionRow),
}

impl ScalingRow {
    /// Surface identifier of the row.
    pub fn surface(&self) -> &str {
        match self {
            ScalingRow::Single(row) => &row.surface,
            ScalingRow::Joined(row) => &row.surface,
        }
    }

    /// Raw termination of the row.
    pub fn termination(&self) -> &str {
        match self {
            ScalingRow::Single(row) => &row.termination,
            ScalingRow::Joined(row) => &row.termination,
        }
    }
}

/// Read access to the reaction-energy store.
///
/// Implementations are passed to the engine by reference; the engine never
/// holds a global handle. Every method is a read.
pub trait RecordStore {
    /// Rows of exactly `reaction` where both selected energies are non-empty.
    fn same_reaction_rows(
        &self,
        reaction: &ReactionDescriptor,
        out_x: EnergyType,
        out_y: EnergyType,
    ) -> Result<Vec<SingleReactionRow>, CatError>;

    /// Pairs of an `x_reaction` record and a `y_reaction` record (either
    /// fragment order on each side) sharing a surface context, where the
    /// selected energy of each side is non-empty.
    fn joined_reaction_rows(
        &self,
        x_reaction: &ReactionDescriptor,
        y_reaction: &ReactionDescriptor,
        out_x: EnergyType,
        out_y: EnergyType,
    ) -> Result<Vec<JoinedReactionRow>, CatError>;

    /// Every distinct reaction in the store.
    fn unique_reactions(&self) -> Result<Vec<ReactionDescriptor>, CatError>;

    /// Free-text match over all columns, ordered by surface.
    fn search(&self, query: &str) -> Result<Vec<EnergyRecord>, CatError>;
}
