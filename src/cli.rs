use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "cornercast",
    version,
    about = "Browse the Joey's Acoustic Corner session catalog and hand playback to the YouTube player"
)]
pub struct Cli {
    /// Plugin-style request, e.g. "action=list&mode=queue"; omit for the root menu
    pub request: Option<String>,

    /// Catalog document endpoint override
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Catalog fetch timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}
