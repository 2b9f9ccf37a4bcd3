//! Effective configuration output

use anyhow::Result;

use pedview::theme::Theme;
use pedview::Config;

/// Print the effective configuration (file plus command line) as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    let toml_str = config.to_toml()?;
    let theme = Theme::from_name(config.render.theme);
    println!("{}", theme.primary_text(toml_str.trim_end()));
    Ok(())
}
