use anyhow::{Context, Result};

use evlist::config::Settings;
use evlist::listing::Listing;
use evlist::App;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new().context("Failed to load settings")?;
    let listing = Listing::load(&settings.events_path)
        .with_context(|| format!("Failed to load events from {}", settings.events_path.display()))?
        .hide_past_events(settings.hide_past_events);

    // Logging is initialized in App::run() once the terminal is ours
    App::new(listing, settings).run().await?;

    Ok(())
}
