use anyhow::{Result, anyhow, bail};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored tree grouped by component
    Tree,
    /// Pretty-printed JSON array
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "cssdeps")]
#[command(about = "Find the style sheets React components depend on without importing them")]
pub struct Config {
    /// Directory to analyze
    pub directory: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value = "tree")]
    pub format: OutputFormat,

    /// Exit with status 1 when any component has missing style-sheet imports
    #[arg(long)]
    pub check: bool,

    /// Honour .gitignore and .ignore files while walking the tree
    #[arg(long)]
    pub respect_gitignore: bool,

    #[clap(skip)]
    root: Option<PathBuf>,
}

impl Config {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            format: OutputFormat::Tree,
            check: false,
            respect_gitignore: false,
            root: None,
        }
    }

    /// Initialize the config by validating and canonicalizing the target directory
    pub fn initialize(&mut self) -> Result<()> {
        let dir = &self.directory;
        debug!("Using provided directory: {:?}", dir);
        if !dir.exists() {
            bail!("Directory {} does not exist.", dir.display());
        }
        if !dir.is_dir() {
            bail!("{} is not a directory.", dir.display());
        }

        let root = dir.canonicalize().unwrap_or_else(|_| dir.clone());
        info!("Using root directory: {}", root.display());
        self.root = Some(root);
        Ok(())
    }

    /// Get the root directory, returning an error if not initialized
    pub fn root(&self) -> Result<&PathBuf> {
        self.root
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_positional_directory() {
        let cfg = Config::try_parse_from(["cssdeps", "./web"]).unwrap();
        assert_eq!(cfg.directory, PathBuf::from("./web"));
        assert_eq!(cfg.format, OutputFormat::Tree);
        assert!(!cfg.check);
        assert!(!cfg.respect_gitignore);
    }

    #[test]
    fn test_parse_flags() {
        let cfg = Config::try_parse_from([
            "cssdeps",
            "--format",
            "json",
            "--check",
            "--respect-gitignore",
            "web",
        ])
        .unwrap();
        assert_eq!(cfg.format, OutputFormat::Json);
        assert!(cfg.check);
        assert!(cfg.respect_gitignore);
    }

    #[test]
    fn test_missing_directory_argument_is_rejected() {
        assert!(Config::try_parse_from(["cssdeps"]).is_err());
    }

    #[test]
    fn test_initialize_canonicalizes_root() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("app");
        fs::create_dir_all(&nested).unwrap();

        let mut cfg = Config::new(nested.join("..").join("app"));
        cfg.initialize().unwrap();
        assert_eq!(cfg.root().unwrap(), &nested.canonicalize().unwrap());
    }

    #[test]
    fn test_initialize_rejects_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let mut cfg = Config::new(temp_dir.path().join("nope"));
        let err = cfg.initialize().unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_initialize_rejects_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("App.tsx");
        fs::write(&file, "").unwrap();

        let mut cfg = Config::new(&file);
        assert!(cfg.initialize().is_err());
    }

    #[test]
    fn test_root_requires_initialize() {
        let cfg = Config::new("anywhere");
        assert!(cfg.root().is_err());
    }
}
