use serde::Serialize;
use veloz_core::enums::Section;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RouteArgs;
use crate::output::output;

#[derive(Debug, PartialEq, Eq, Serialize)]
struct RouteResponse {
    path: String,
    section: Section,
    section_path: &'static str,
    /// False when the path is unknown and fell back to the dashboard.
    exact: bool,
}

fn resolve(path: &str) -> RouteResponse {
    let section = Section::from_path(path);
    RouteResponse {
        path: path.to_string(),
        section,
        section_path: section.path(),
        exact: section.path() == path.trim_end_matches('/'),
    }
}

/// Handle `veloz route`.
pub fn handle(args: &RouteArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&resolve(&args.path), flags.format)
}
