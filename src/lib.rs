pub mod args;
pub mod cookies;
pub mod error;
pub mod paths;
pub mod reconcile;
pub mod rules;
pub mod sweep;
pub mod utils;

pub use args::Args;
pub use cookies::CookieStore;
pub use error::Error;
pub use reconcile::{Classification, ReconcileOutcome};
pub use rules::Decision;
pub use sweep::{print_summary, run_sweep};
