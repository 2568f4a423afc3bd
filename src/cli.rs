use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "macrotab")]
#[command(about = "Generate ranked aggregate reports from CSV data files")]
#[command(version)]
pub struct CliArgs {
    /// Input CSV files, read in order into one row sequence
    /// Can specify multiple: --files q1.csv q2.csv
    #[arg(long, short = 'f', value_name = "PATH", num_args = 1.., required = true)]
    pub files: Vec<PathBuf>,

    /// Report to generate (e.g. "average-gdp")
    #[arg(long, short = 'r', value_name = "NAME")]
    pub report: String,

    /// Output the report as pretty-printed JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Omit the leading index column from the table
    #[arg(long)]
    pub no_index: bool,

    /// Override console width for testing (default: auto-detect)
    #[arg(long, value_name = "COLUMNS")]
    pub console_width: Option<usize>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if let Some(width) = self.console_width
            && width < 20
        {
            return Err(format!("Console width {} is too narrow to render a table", width));
        }

        Ok(())
    }
}
