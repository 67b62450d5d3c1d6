pub mod error;
pub mod export;
pub mod helper;
pub mod icosahedron;
pub mod layout;

use tracing_subscriber::EnvFilter;

use crate::{
    error::LayoutError,
    export::{assignment_line, IcosahedronData, DATA_IDENTIFIER},
    icosahedron::GeometryTable,
    layout::{assemble, LayoutParams},
};

// Diagnostics go to stderr so stdout carries nothing but the data line.
// RUST_LOG overrides the default level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// Checks the tables, lays out every strip and renders the line the renderer loads.
pub fn generate(table: &GeometryTable, params: &LayoutParams) -> Result<String, LayoutError> {
    table.validate()?;
    let layout = assemble(table, params)?;
    assignment_line(DATA_IDENTIFIER, &IcosahedronData::from(&layout))
}
