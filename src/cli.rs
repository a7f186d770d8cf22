// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::GalleryConfig;
use crate::projects::ProjectRegistry;

#[derive(Parser, Debug, Clone)]
#[command(name = "gallery-walk")]
#[command(about = "First-person walk through a project gallery", long_about = None)]
pub struct Cli {
    /// JSON file overriding movement, door, glide and spotlight tuning
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON project list to hang instead of the bundled one
    #[arg(long)]
    pub projects: Option<PathBuf>,

    /// Run the guided visit without a window, for at most this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub headless: Option<f32>,

    /// Advance the door swing by a fixed step per frame
    #[arg(long = "frame-coupled-door", default_value = "false")]
    pub frame_coupled_door: bool,
}

impl Cli {
    pub fn load_config(&self) -> Result<GalleryConfig> {
        let mut config = match &self.config {
            Some(path) => GalleryConfig::load(path)?,
            None => GalleryConfig::default(),
        };
        config.frame_coupled_door |= self.frame_coupled_door;
        config.validate()?;
        Ok(config)
    }

    pub fn load_projects(&self) -> Result<ProjectRegistry> {
        match &self.projects {
            Some(path) => ProjectRegistry::load(path),
            None => ProjectRegistry::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_arguments() {
        let cli = Cli::parse_from(["gallery-walk"]);
        assert!(cli.headless.is_none());
        let config = cli.load_config().unwrap();
        assert!(!config.frame_coupled_door);
        assert!(!cli.load_projects().unwrap().is_empty());
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::parse_from(["gallery-walk", "--headless", "3.5", "--frame-coupled-door"]);
        assert_eq!(cli.headless, Some(3.5));
        assert!(cli.load_config().unwrap().frame_coupled_door);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let cli = Cli::parse_from(["gallery-walk", "--config", "/nonexistent/gallery.json"]);
        assert!(cli.load_config().is_err());
    }
}
