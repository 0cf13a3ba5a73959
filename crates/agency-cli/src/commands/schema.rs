use agency_core::entities::Workflow;
use agency_core::responses::WorkflowStatusResponse;
use agency_core::trail::TrailOperation;
use anyhow::bail;
use schemars::schema_for;

use crate::cli::root_commands::SchemaArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `agy schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name.as_str() {
        "workflow" => schema_for!(Workflow),
        "trail" => schema_for!(TrailOperation),
        "status" => schema_for!(WorkflowStatusResponse),
        other => bail!("unknown schema type '{other}' (expected workflow, trail, or status)"),
    };

    // A schema has no useful table shape.
    let format = match flags.format {
        OutputFormat::Table => OutputFormat::Json,
        format => format,
    };
    output(&schema, format)
}
