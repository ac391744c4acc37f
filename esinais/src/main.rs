use anyhow::Result;

use esinais::{App, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;
    settings.validate().map_err(anyhow::Error::msg)?;

    // Logging is initialized in App::run() once the settings are known
    App::new(settings).run().await?;

    Ok(())
}
