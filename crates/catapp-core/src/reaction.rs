//! Reaction descriptors and energy type selectors.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CatError, ErrorInfo};

/// Separator used by the pipe-delimited `AB|A|B` reaction key.
pub const DESCRIPTOR_SEPARATOR: char = '|';

/// A reaction `AB → A + B`: the compound and its two fragments.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReactionDescriptor {
    /// Compound (initial state) identifier.
    pub ab: String,
    /// First fragment.
    pub a: String,
    /// Second fragment.
    pub b: String,
}

impl ReactionDescriptor {
    /// Builds a descriptor from its three components, rejecting empty parts.
    pub fn new(
        ab: impl Into<String>,
        a: impl Into<String>,
        b: impl Into<String>,
    ) -> Result<Self, CatError> {
        let descriptor = Self {
            ab: ab.into(),
            a: a.into(),
            b: b.into(),
        };
        if descriptor.ab.is_empty() || descriptor.a.is_empty() || descriptor.b.is_empty() {
            return Err(CatError::InvalidDescriptor(
                ErrorInfo::new("descriptor_empty_part", "reaction components must be non-empty")
                    .with_context("descriptor", descriptor.to_string()),
            ));
        }
        Ok(descriptor)
    }

    /// The same reaction with its fragments in the opposite order.
    pub fn swapped(&self) -> Self {
        Self {
            ab: self.ab.clone(),
            a: self.b.clone(),
            b: self.a.clone(),
        }
    }

    /// True when both descriptors name the same reaction regardless of fragment order.
    pub fn is_commutative_with(&self, other: &ReactionDescriptor) -> bool {
        self == other || *self == other.swapped()
    }

    /// Axis title for plots, e.g. `N2 → N* N* (eV)`.
    pub fn axis_label(&self) -> String {
        format!("{} \u{2192} {} {} (eV)", self.ab, self.a, self.b)
    }
}

impl Display for ReactionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.ab,
            self.a,
            self.b,
            sep = DESCRIPTOR_SEPARATOR
        )
    }
}

impl FromStr for ReactionDescriptor {
    type Err = CatError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = raw.split(DESCRIPTOR_SEPARATOR).collect();
        match parts.as_slice() {
            [ab, a, b] => Self::new(*ab, *a, *b).map_err(|_| {
                CatError::InvalidDescriptor(
                    ErrorInfo::new("descriptor_empty_part", "reaction components must be non-empty")
                        .with_context("descriptor", raw),
                )
            }),
            _ => Err(CatError::InvalidDescriptor(
                ErrorInfo::new(
                    "descriptor_parts",
                    format!("expected 3 '|' separated parts, found {}", parts.len()),
                )
                .with_context("descriptor", raw)
                .with_hint("use the form AB|A|B"),
            )),
        }
    }
}

/// Which energy measurement of a record feeds an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnergyType {
    /// The `Reaction_Energy` column.
    #[serde(rename = "Reaction_Energy")]
    ReactionEnergy,
    /// The `Activation_Energy` column.
    #[serde(rename = "Activation_Energy")]
    ActivationEnergy,
}

impl EnergyType {
    /// All supported selectors.
    pub const ALL: [EnergyType; 2] = [EnergyType::ReactionEnergy, EnergyType::ActivationEnergy];

    /// Store column holding this measurement. The only identifier ever spliced into SQL.
    pub fn column(&self) -> &'static str {
        match self {
            EnergyType::ReactionEnergy => "Reaction_Energy",
            EnergyType::ActivationEnergy => "Activation_Energy",
        }
    }
}

impl Display for EnergyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for EnergyType {
    type Err = CatError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        EnergyType::ALL
            .into_iter()
            .find(|kind| kind.column() == raw)
            .ok_or_else(|| {
                CatError::InvalidSelector(
                    ErrorInfo::new("energy_type", format!("unsupported energy type {raw:?}"))
                        .with_hint("expected Reaction_Energy or Activation_Energy"),
                )
            })
    }
}
