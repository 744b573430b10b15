use crate::error::Result;
use crate::settings::{load_settings, save_settings, Settings};

/// Show the configured service origin, or persist a new one.
pub fn run(url: Option<&str>) -> Result<()> {
    match url {
        Some(url) => {
            let settings = Settings {
                api_url: url.trim_end_matches('/').to_string(),
            };
            save_settings(&settings)?;
            println!("Service origin set to {}", settings.api_url);
        }
        None => {
            let settings = load_settings();
            println!("Service origin: {}", settings.api_url);
        }
    }
    Ok(())
}
