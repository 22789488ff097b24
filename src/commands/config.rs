//! Config subcommands handler

use anyhow::Result;

use wego::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("# {}", Config::config_path()?.display());
    print!("{}", toml_str);
    Ok(())
}

/// Print the config file location.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write the default configuration, leaving an existing file alone.
#[cfg(not(tarpaulin_include))]
pub fn handle_init() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        println!("Config file already exists: {}", config_path.display());
        return Ok(());
    }

    Config::default().save_to(&config_path)?;
    println!("Created {}", config_path.display());
    Ok(())
}
