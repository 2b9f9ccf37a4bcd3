//! Play command handler

use std::path::Path;

use anyhow::Result;

use pedview::player::{play_file, PlaybackResult};
use pedview::theme::Theme;
use pedview::Config;

/// Play a record file in the terminal.
#[cfg(not(tarpaulin_include))]
pub fn handle_play(file: &Path, config: &Config) -> Result<()> {
    let theme = Theme::from_name(config.render.theme);
    match play_file(file, config)? {
        PlaybackResult::Finished(frames) => {
            println!(
                "{}",
                theme.secondary_text(&format!("Played {} frames from {}", frames, file.display()))
            );
        }
        PlaybackResult::Interrupted => {
            println!("{}", theme.secondary_text("Playback stopped"));
        }
    }
    Ok(())
}
