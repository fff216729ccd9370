//! Page-load commands
//!
//! One command per screen navigation. Each wrapper times the service
//! call, logs the outcome, and applies the redirect policies that
//! belong at the application edge.

pub mod dashboard;
pub mod discovery;
pub mod dumps;
pub mod library;
pub mod settings;

pub use dashboard::{load_dashboard, load_dashboard_at};
pub use discovery::{get_random_top_games, get_similar_games, search_games};
pub use dumps::{
    complete_dump_check, download_dumps, get_all_dump_info, get_local_dump_versions, import_dumps,
};
pub use library::{get_log_detail, get_log_edit_form, get_logs};
pub use settings::get_settings_form;
