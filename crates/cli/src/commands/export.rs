use allevo_analysis::StatisticsSeries;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::args::OutputFormat;

const CSV_HEADER: &str =
    "generation,hom_dom_pct,het_pct,hom_rec_pct,dominant_pct,recessive_pct,total";

/// Render the statistic series in the requested format.
pub fn format_series(series: &StatisticsSeries, format: OutputFormat) -> Result<String> {
    let content = match format {
        OutputFormat::Csv => {
            let mut content = String::from(CSV_HEADER);
            content.push('\n');
            for row in series {
                content.push_str(&format!(
                    "{},{},{},{},{},{},{}\n",
                    row.generation,
                    row.hom_dom_pct,
                    row.het_pct,
                    row.hom_rec_pct,
                    row.dominant_pct,
                    row.recessive_pct,
                    row.total
                ));
            }
            content
        }
        OutputFormat::Json => serde_json::to_string_pretty(series.rows())
            .context("Failed to serialize statistics")?,
    };
    Ok(content)
}

pub fn export_series(series: &StatisticsSeries, format: OutputFormat, output: &Path) -> Result<()> {
    let content = format_series(series, format)?;
    fs::write(output, content)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    tracing::info!(path = %output.display(), rows = series.len(), "statistics exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use allevo_analysis::GenotypeStatistics;

    fn sample() -> StatisticsSeries {
        StatisticsSeries::new(vec![
            GenotypeStatistics::from_counts(0, 0, 4, 0),
            GenotypeStatistics::from_counts(1, 0, 0, 0),
        ])
    }

    #[test]
    fn test_format_csv() {
        let csv = format_series(&sample(), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "0,0,100,0,50,50,4");
        assert_eq!(lines[2], "1,0,0,0,0,0,0");
    }

    #[test]
    fn test_format_json() {
        let json = format_series(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["total"], 0);
        assert_eq!(rows[0]["het_pct"], 100.0);
    }
}
