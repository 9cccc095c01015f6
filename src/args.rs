use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cookiesweep",
    about = "Reconcile a browser cookie database against a keep/delete rule file",
    version,
    long_about = None
)]
pub struct Args {
    /// Path to the rules CSV file (host,decision per line)
    #[arg(short, long, default_value = "Cookies.csv")]
    pub rules: PathBuf,

    /// Browser whose cookie database to sweep
    #[arg(short, long, default_value = "Chrome")]
    pub browser: String,

    /// Browser profile directory name
    #[arg(short, long, default_value = "Default")]
    pub profile: String,

    /// Explicit cookie database path, overriding browser/profile lookup
    #[arg(long)]
    pub cookies_path: Option<PathBuf>,

    /// Classify and report without deleting cookies or updating the rule file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
