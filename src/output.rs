// src/output.rs
//! Rendering of run results in the supported formats.

use std::fs::File;
use std::io::{self, Write};

use serde_json::json;

use crate::config::Config;
use crate::engine::DocumentReport;
use crate::error::{Result, SyllableError};
use crate::lyrics::LineKind;
use crate::options::{OutputFormat, OutputMode};

/// Width of the density bars in summary tables.
const BAR_WIDTH: usize = 32;

/// Print reports to stdout or to the configured `--output` file.
pub fn print_results(reports: &[DocumentReport], config: &Config) -> Result<()> {
    let mut writer: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };
    write_results(&mut writer, reports, config)
}

fn write_results(w: &mut dyn Write, reports: &[DocumentReport], config: &Config) -> Result<()> {
    match config.format {
        OutputFormat::Table => write_table(w, reports, config),
        OutputFormat::Csv => write_sv(w, reports, config, ","),
        OutputFormat::Tsv => write_sv(w, reports, config, "\t"),
        OutputFormat::Json => write_json(w, reports, config),
        OutputFormat::Jsonl => write_jsonl(w, reports, config),
        OutputFormat::Yaml => write_yaml(w, reports, config),
    }
}

fn grand_total(reports: &[DocumentReport]) -> usize {
    reports.iter().map(|r| r.stats.total).sum()
}

fn write_table(w: &mut dyn Write, reports: &[DocumentReport], config: &Config) -> Result<()> {
    writeln!(w, "count_syllables v{}", crate::VERSION)?;
    writeln!(w)?;

    if config.output_mode == OutputMode::TotalOnly {
        writeln!(w, "{:>9}      TOTAL", grand_total(reports))?;
        return Ok(());
    }

    for report in reports {
        writeln!(w, "== {}", report.file)?;
        match config.output_mode {
            OutputMode::Full => {
                writeln!(w, "     LINE       SYLLABLES     TEXT")?;
                writeln!(w, "----------------------------------------------")?;
                for line in &report.stats.lines {
                    match line.kind {
                        LineKind::Header => {
                            writeln!(w, "{:>9}{:>16}     {}", line.index + 1, "-", line.text)?;
                        }
                        LineKind::Lyric => {
                            writeln!(
                                w,
                                "{:>9}{:>16}     {}",
                                line.index + 1,
                                line.syllables,
                                line.text
                            )?;
                        }
                    }
                }
                writeln!(w, "---")?;
                writeln!(
                    w,
                    "{:>9}{:>16}      TOTAL (max {}, mean {:.1})",
                    report.stats.lines.len(),
                    report.stats.total,
                    report.stats.max,
                    report.stats.mean
                )?;
            }
            OutputMode::Summary | OutputMode::TotalOnly => {
                writeln!(
                    w,
                    "total {} · max {} · mean {:.1}",
                    report.stats.total, report.stats.max, report.stats.mean
                )?;
                for (line, height) in report
                    .stats
                    .lines
                    .iter()
                    .filter(|l| l.kind == LineKind::Lyric)
                    .zip(report.stats.density())
                {
                    let bar = "#".repeat((height * BAR_WIDTH as f64).round() as usize);
                    writeln!(
                        w,
                        "{:>9}  {bar:<width$}  {}",
                        line.index + 1,
                        line.syllables,
                        width = BAR_WIDTH
                    )?;
                }
            }
        }
        writeln!(w)?;
    }

    writeln!(
        w,
        "[count_syllables] Completed: {} sources, {} syllables.",
        reports.len(),
        grand_total(reports)
    )?;
    Ok(())
}

fn write_sv(
    w: &mut dyn Write,
    reports: &[DocumentReport],
    config: &Config,
    sep: &str,
) -> Result<()> {
    if config.output_mode == OutputMode::TotalOnly {
        writeln!(w, "total")?;
        writeln!(w, "{}", grand_total(reports))?;
        return Ok(());
    }
    if config.output_mode == OutputMode::Summary {
        writeln!(w, "file{sep}total{sep}max{sep}mean")?;
        for r in reports {
            writeln!(
                w,
                "{}{sep}{}{sep}{}{sep}{:.3}",
                quote_field(&r.file, sep),
                r.stats.total,
                r.stats.max,
                r.stats.mean
            )?;
        }
        return Ok(());
    }

    writeln!(w, "file{sep}line{sep}type{sep}syllables{sep}text")?;
    for r in reports {
        for line in &r.stats.lines {
            let kind = match line.kind {
                LineKind::Header => "header",
                LineKind::Lyric => "lyric",
            };
            writeln!(
                w,
                "{}{sep}{}{sep}{kind}{sep}{}{sep}{}",
                quote_field(&r.file, sep),
                line.index + 1,
                line.syllables,
                quote_field(&line.text, sep)
            )?;
        }
    }
    Ok(())
}

fn quote_field(field: &str, sep: &str) -> String {
    if field.contains(sep) || field.contains('"') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_json(w: &mut dyn Write, reports: &[DocumentReport], config: &Config) -> Result<()> {
    let value = match config.output_mode {
        OutputMode::Full => json!({ "files": reports }),
        OutputMode::Summary => json!({ "files": summaries(reports) }),
        OutputMode::TotalOnly => json!({ "total": grand_total(reports) }),
    };
    let text = serde_json::to_string_pretty(&value)
        .map_err(|e| SyllableError::Serialize(e.to_string()))?;
    writeln!(w, "{text}")?;
    Ok(())
}

fn write_jsonl(w: &mut dyn Write, reports: &[DocumentReport], config: &Config) -> Result<()> {
    if config.output_mode == OutputMode::TotalOnly {
        writeln!(w, "{}", json!({ "type": "total", "total": grand_total(reports) }))?;
        return Ok(());
    }
    for r in reports {
        if config.output_mode == OutputMode::Full {
            for line in &r.stats.lines {
                let mut v = serde_json::to_value(line)
                    .map_err(|e| SyllableError::Serialize(e.to_string()))?;
                if let Some(obj) = v.as_object_mut() {
                    obj.insert("file".to_string(), r.file.clone().into());
                }
                writeln!(w, "{v}")?;
            }
        }
        writeln!(
            w,
            "{}",
            json!({
                "type": "summary",
                "file": r.file,
                "total": r.stats.total,
                "max": r.stats.max,
                "mean": r.stats.mean,
            })
        )?;
    }
    Ok(())
}

fn write_yaml(w: &mut dyn Write, reports: &[DocumentReport], config: &Config) -> Result<()> {
    let text = match config.output_mode {
        OutputMode::Full => serde_yaml::to_string(reports),
        OutputMode::Summary => serde_yaml::to_string(&summaries(reports)),
        OutputMode::TotalOnly => {
            serde_yaml::to_string(&json!({ "total": grand_total(reports) }))
        }
    }
    .map_err(|e| SyllableError::Serialize(e.to_string()))?;
    write!(w, "{text}")?;
    Ok(())
}

fn summaries(reports: &[DocumentReport]) -> Vec<serde_json::Value> {
    reports
        .iter()
        .map(|r| {
            json!({
                "file": r.file,
                "total": r.stats.total,
                "max": r.stats.max,
                "mean": r.stats.mean,
                "density": r.stats.density(),
            })
        })
        .collect()
}
