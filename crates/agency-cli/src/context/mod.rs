mod app_context;
mod project_root;
mod snapshot;
mod trail_writer;

pub use app_context::AppContext;
pub use project_root::{AGENCY_DIR, find_project_root};
pub use snapshot::{load_workflow, save_workflow};
pub use trail_writer::TrailWriter;
