use anyhow::Result;
use dashterm::{config::Config, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("❌ Error: invalid configuration: {:#}", err);
            if let Some(path) = Config::get_default_config_path() {
                eprintln!("\n💡 Check {} or unset DASHTERM_API_URL", path.display());
            }
            return Err(err);
        }
    };

    if let Some(path) = logger::init_file_logging(&config.logging)? {
        log::info!("dashterm starting, logging to {}", path.display());
    }

    // Run the TUI application
    ui::run_app(config).await?;

    Ok(())
}
