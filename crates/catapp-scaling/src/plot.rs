use catapp_core::errors::CatError;
use catapp_core::serde::to_json_array;
use serde::{Deserialize, Serialize};

use crate::fit::LinearFit;
use crate::pairing::ObservationPair;
use crate::retrieval::ScalingQuery;

/// Chart-ready scaling relation before encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingPlot {
    pub x_data: Vec<f64>,
    pub y_data: Vec<f64>,
    pub x_label: String,
    pub y_label: String,
    pub data_labels: Vec<String>,
    /// Empty when there is no fit.
    pub fit_label: String,
    /// Empty when there is no fit.
    pub x_fit: Vec<f64>,
    /// Empty when there is no fit.
    pub y_fit: Vec<f64>,
    #[serde(skip)]
    pub fit: Option<LinearFit>,
}

impl ScalingPlot {
    pub fn assemble(query: &ScalingQuery, pairs: Vec<ObservationPair>, fit: Option<LinearFit>) -> Self {
        let x_label = query.x_reaction.axis_label();
        let y_label = if query.is_same_reaction() {
            x_label.clone()
        } else {
            query.y_reaction.axis_label()
        };
        let mut x_data = Vec::with_capacity(pairs.len());
        let mut y_data = Vec::with_capacity(pairs.len());
        let mut data_labels = Vec::with_capacity(pairs.len());
        for pair in pairs {
            x_data.push(pair.x);
            y_data.push(pair.y);
            data_labels.push(pair.label);
        }
        let (fit_label, x_fit, y_fit) = match &fit {
            Some(line) => (
                line.label(),
                line.x_endpoints.to_vec(),
                line.y_endpoints.to_vec(),
            ),
            None => (String::new(), Vec::new(), Vec::new()),
        };
        Self {
            x_data,
            y_data,
            x_label,
            y_label,
            data_labels,
            fit_label,
            x_fit,
            y_fit,
            fit,
        }
    }

    pub fn has_fit(&self) -> bool {
        self.fit.is_some()
    }

    /// Encodes every sequence as a JSON array string; labels stay plain text.
    pub fn to_payload(&self) -> Result<PlotPayload, CatError> {
        Ok(PlotPayload {
            x_data: to_json_array(&self.x_data)?,
            y_data: to_json_array(&self.y_data)?,
            x_label: self.x_label.clone(),
            y_label: self.y_label.clone(),
            data_labels: to_json_array(&self.data_labels)?,
            fit_label: self.fit_label.clone(),
            x_fit: to_json_array(&self.x_fit)?,
            y_fit: to_json_array(&self.y_fit)?,
        })
    }
}

/// The eight values handed to the page template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotPayload {
    pub x_data: String,
    pub y_data: String,
    pub x_label: String,
    pub y_label: String,
    pub data_labels: String,
    pub fit_label: String,
    pub x_fit: String,
    pub y_fit: String,
}
