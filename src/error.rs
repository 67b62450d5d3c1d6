use std::{borrow::Cow, string::FromUtf8Error};

use thiserror::Error;

use crate::icosahedron::StripColor;

// Any of these means the compiled-in tables are corrupt; there is no partial
// layout worth emitting.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("hub index {index} in {table} is out of range (only {hubs} hubs)")]
    HubOutOfRange {
        table: Cow<'static, str>,
        index: usize,
        hubs: usize,
    },

    #[error("{color} strip step {step} runs along {edge:?}, which is not an edge of the solid")]
    UnknownEdge {
        color: StripColor,
        step: usize,
        edge: (usize, usize),
    },

    #[error("{color} strip step {step} crosses {triangle:?}, which is not a face of the solid")]
    UnknownFace {
        color: StripColor,
        step: usize,
        triangle: (usize, usize, usize),
    },

    #[error("failed to encode pixel data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("pixel data is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}
