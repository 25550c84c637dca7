//! Config subcommands handler

use anyhow::Result;

use deskcon::tui::current_theme;
use deskcon::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(toml_str.trim_end()));
    Ok(())
}

/// Print the config file path.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write the default configuration unless a file already exists.
#[cfg(not(tarpaulin_include))]
pub fn handle_init() -> Result<()> {
    let config_path = Config::config_path()?;
    let theme = current_theme();

    if config_path.exists() {
        println!(
            "{}",
            theme.primary_text(&format!("Config already exists: {}", config_path.display()))
        );
        return Ok(());
    }

    Config::default().save()?;
    println!(
        "{}",
        theme.success_text(&format!("Wrote default config: {}", config_path.display()))
    );
    Ok(())
}
