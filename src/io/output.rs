//! Output writers for estimates and profile listings.
//!
//! The engine itself never formats anything; these writers render a computed
//! breakdown for the CLI. JSON output is the raw serialized breakdown,
//! suitable for piping.

use std::io::Write;

use clap::ValueEnum;
use colored::*;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use crate::aggregate::PaybackBucket;
use crate::calculator::SavingsBreakdown;
use crate::profile::{IndustrySummary, UnitKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_breakdown(&mut self, breakdown: &SavingsBreakdown) -> anyhow::Result<()>;
    fn write_industries(&mut self, industries: &[IndustrySummary]) -> anyhow::Result<()>;
}

pub fn create_writer(writer: Box<dyn Write>, format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

/// Whole-dollar currency rendering with thousands separators.
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = value.abs().round() as u64;
    let digits = rounded.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

fn payback_line(breakdown: &SavingsBreakdown) -> String {
    match breakdown.payback_months {
        Some(months) => PaybackBucket::classify(months).to_string(),
        None => "no payback".to_string(),
    }
}

fn unit_name(unit: UnitKind) -> &'static str {
    match unit {
        UnitKind::Count => "count",
        UnitKind::Currency => "currency",
        UnitKind::Percent => "percent",
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_breakdown(&mut self, breakdown: &SavingsBreakdown) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(breakdown)?;
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }

    fn write_industries(&mut self, industries: &[IndustrySummary]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(industries)?;
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_breakdown(&mut self, breakdown: &SavingsBreakdown) -> anyhow::Result<()> {
        writeln!(self.writer, "# ROI Estimate ({})", breakdown.industry)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Savings Category | Annual Value |")?;
        writeln!(self.writer, "|------------------|--------------|")?;
        for item in &breakdown.items {
            writeln!(
                self.writer,
                "| {} | {} |",
                item.label,
                format_currency(item.value)
            )?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "| Summary | Value |")?;
        writeln!(self.writer, "|---------|-------|")?;
        writeln!(
            self.writer,
            "| Security posture score | {}/6 |",
            breakdown.security_score
        )?;
        writeln!(
            self.writer,
            "| Vendor annual cost | {} |",
            format_currency(breakdown.vendor_annual_cost)
        )?;
        writeln!(
            self.writer,
            "| Total gross savings | {} |",
            format_currency(breakdown.total_gross_savings)
        )?;
        writeln!(
            self.writer,
            "| Net annual savings | {} |",
            format_currency(breakdown.net_savings)
        )?;
        writeln!(self.writer, "| ROI | {:.0}% |", breakdown.roi_percent)?;
        writeln!(self.writer, "| Payback period | {} |", payback_line(breakdown))?;
        Ok(())
    }

    fn write_industries(&mut self, industries: &[IndustrySummary]) -> anyhow::Result<()> {
        writeln!(self.writer, "# Industry Profiles")?;
        for summary in industries {
            writeln!(self.writer)?;
            writeln!(self.writer, "## {} (`{}`)", summary.name, summary.key)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Metric | Range | Default | Unit |")?;
            writeln!(self.writer, "|--------|-------|---------|------|")?;
            for spec in &summary.metrics {
                writeln!(
                    self.writer,
                    "| {} | {}..{} | {} | {} |",
                    spec.label,
                    spec.min,
                    spec.max,
                    spec.default,
                    unit_name(spec.unit)
                )?;
            }
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_breakdown(&mut self, breakdown: &SavingsBreakdown) -> anyhow::Result<()> {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Savings Category", "Annual Value"]);
        for item in &breakdown.items {
            table.add_row(vec![item.label.clone(), format_currency(item.value)]);
        }
        writeln!(self.writer, "{}", table)?;
        writeln!(self.writer)?;

        writeln!(
            self.writer,
            "Security posture score: {}/6",
            breakdown.security_score
        )?;
        writeln!(
            self.writer,
            "Vendor annual cost:     {}",
            format_currency(breakdown.vendor_annual_cost)
        )?;
        writeln!(
            self.writer,
            "Total gross savings:    {}",
            format_currency(breakdown.total_gross_savings)
        )?;

        let net = format_currency(breakdown.net_savings);
        let net_colored = if breakdown.net_savings >= 0.0 {
            net.green().bold()
        } else {
            net.red().bold()
        };
        writeln!(self.writer, "Net annual savings:     {}", net_colored)?;
        writeln!(self.writer, "ROI:                    {:.0}%", breakdown.roi_percent)?;

        let payback = match breakdown.payback_months {
            Some(months) => {
                let bucket = PaybackBucket::classify(months);
                match bucket {
                    PaybackBucket::Months(_) => bucket.to_string().normal(),
                    PaybackBucket::WarningMonths(_) => bucket.to_string().yellow(),
                    _ => bucket.to_string().red(),
                }
            }
            None => "no payback".red(),
        };
        writeln!(self.writer, "Payback period:         {}", payback)?;
        Ok(())
    }

    fn write_industries(&mut self, industries: &[IndustrySummary]) -> anyhow::Result<()> {
        for summary in industries {
            writeln!(
                self.writer,
                "{} ({})",
                summary.name.bold(),
                summary.key.cyan()
            )?;
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["Metric", "Label", "Range", "Default", "Unit"]);
            for spec in &summary.metrics {
                table.add_row(vec![
                    spec.key.clone(),
                    spec.label.clone(),
                    format!("{}..{}", spec.min, spec.max),
                    spec.default.to_string(),
                    unit_name(spec.unit).to_string(),
                ]);
            }
            writeln!(self.writer, "{}", table)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }
}
