use crate::calendar::derive;
use crate::database::{Database, DimensionOperations};
use crate::errors::{AppError, AppResult};
use crate::types::record::{CalendarDateRecord, COLUMNS};
use crate::utils::time::{date_key, parse_iso_date};
use clap::{Args, ValueEnum};
use serde_json::Value;
use std::path::PathBuf;
use tracing::info;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One column per line
    #[default]
    Table,
    /// Pretty-printed JSON object
    Json,
}

#[derive(Args)]
#[command(author, version, about, long_about = None)]
pub struct ShowCommand {
    /// Date to show, YYYY-MM-DD
    date: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Read the stored row from this database instead of deriving it
    #[arg(long)]
    database: Option<PathBuf>,

    /// Table to read when --database is given
    #[arg(long, default_value = "dim_calendar_date")]
    table: String,
}

impl ShowCommand {
    pub fn run(&self) -> AppResult<()> {
        let date = parse_iso_date(&self.date)?;

        let record = match &self.database {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "Database does not exist: {}",
                        path.display()
                    )));
                }
                info!("Reading {} from {}:{}", date, path.display(), self.table);
                let database = Database::new(&path.to_string_lossy())?;
                database
                    .fetch_record(&self.table, date_key(date))?
                    .ok_or_else(|| {
                        AppError::InvalidData(format!(
                            "No row for {} in {}:{}",
                            date,
                            path.display(),
                            self.table
                        ))
                    })?
            }
            None => derive(date),
        };

        println!("{}", render(&record, self.format)?);
        Ok(())
    }
}

/// Render a record in column order
pub fn render(record: &CalendarDateRecord, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Table => {
            let value = serde_json::to_value(record)?;
            let width = COLUMNS.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
            let lines: Vec<String> = COLUMNS
                .iter()
                .map(|(name, _)| {
                    let cell = match value.get(*name) {
                        Some(Value::String(s)) => s.clone(),
                        Some(other) => other.to_string(),
                        None => String::new(),
                    };
                    format!("{:<width$}  {}", name, cell, width = width)
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}
