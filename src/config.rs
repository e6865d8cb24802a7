use crate::error::LoadError;
use crate::models::QuestionSource;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub const DEFAULT_GENERAL_FILE: &str = "general.csv";
pub const DEFAULT_EXTRA_FILE: &str = "extra.csv";
pub const DEFAULT_LOG_FILE: &str = "flashcard_viewer.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Pool {
    General,
    Extra,
}

impl Pool {
    pub fn label(self) -> &'static str {
        match self {
            Pool::General => "General",
            Pool::Extra => "Extra",
        }
    }
}

/// Ham radio question pool viewer.
///
/// Space/→ = Next, ← = Previous, Esc = Quit.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    /// CSV file with the General class pool
    #[arg(long, default_value = DEFAULT_GENERAL_FILE)]
    pub general: PathBuf,

    /// CSV file with the Amateur Extra pool
    #[arg(long, default_value = DEFAULT_EXTRA_FILE)]
    pub extra: PathBuf,

    /// Pools to load, shown General first then Extra
    #[arg(long, value_enum, value_delimiter = ',', default_values = ["general", "extra"])]
    pub pools: Vec<Pool>,

    /// Where to write the debug log
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub general: PathBuf,
    pub extra: PathBuf,
    pub pools: Vec<Pool>,
    pub log_file: PathBuf,
}

impl From<Cli> for ViewerConfig {
    fn from(cli: Cli) -> Self {
        let mut pools = Vec::new();
        for pool in [Pool::General, Pool::Extra] {
            if cli.pools.contains(&pool) {
                pools.push(pool);
            }
        }

        Self {
            general: cli.general,
            extra: cli.extra,
            pools,
            log_file: cli.log_file,
        }
    }
}

impl ViewerConfig {
    /// Both pool files must be present even if only one is selected.
    pub fn check_files(&self) -> Result<(), LoadError> {
        for path in [&self.general, &self.extra] {
            if !path.exists() {
                return Err(LoadError::FileNotFound { path: path.clone() });
            }
        }
        Ok(())
    }

    pub fn sources(&self) -> Vec<QuestionSource> {
        self.pools
            .iter()
            .map(|&pool| {
                let path = match pool {
                    Pool::General => &self.general,
                    Pool::Extra => &self.extra,
                };
                QuestionSource::new(path, pool.label())
            })
            .collect()
    }
}
