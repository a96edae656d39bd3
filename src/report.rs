use chrono::{DateTime, Utc};
use serde_json::{json, Map, Value};
use std::str::FromStr;

use crate::analysis::{Insights, RankingSession};
use crate::error::{Error, Result};
use crate::models::{Column, RankedCandidate, ScoredCandidate};
use crate::scoring::Weights;

pub const FINAL_SCORE_HEADER: &str = "final_score";

/// Longest histogram bar in text reports.
pub const MAX_BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Markdown,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(Error::InvalidArgument(format!(
                "unknown output format '{}' (expected text, markdown, json or csv)",
                other
            ))),
        }
    }
}

/// Everything needed to render one ranking.
pub struct RankingReport<'a> {
    pub ranked: &'a [RankedCandidate],
    pub columns: Vec<Column>,
    pub weights: Weights,
    pub insights: Insights,
    pub total_candidates: usize,
    pub generated_at: DateTime<Utc>,
}

impl<'a> RankingReport<'a> {
    pub fn new(session: &RankingSession, ranked: &'a [RankedCandidate]) -> Self {
        Self {
            ranked,
            columns: session.table().columns.display_columns(),
            weights: session.weights(),
            insights: session.insights(),
            total_candidates: session.table().len(),
            generated_at: Utc::now(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.format_text()),
            OutputFormat::Markdown => Ok(self.format_markdown()),
            OutputFormat::Json => self.format_json(),
            OutputFormat::Csv => self.format_csv(),
        }
    }

    fn headers(&self) -> Vec<String> {
        let mut headers: Vec<String> = vec!["#".to_string()];
        headers.extend(self.columns.iter().map(|c| c.header().to_string()));
        headers.push(FINAL_SCORE_HEADER.to_string());
        headers
    }

    fn display_rows(&self) -> Vec<Vec<String>> {
        self.ranked
            .iter()
            .map(|r| {
                let mut row = vec![r.rank.to_string()];
                row.extend(
                    self.columns
                        .iter()
                        .map(|c| r.scored.candidate.display_value(*c).unwrap_or_default()),
                );
                row.push(format!("{:.4}", r.scored.final_score));
                row
            })
            .collect()
    }

    pub fn format_text(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n=== Top {} of {} Candidates ===\n\n",
            self.ranked.len(),
            self.total_candidates
        ));
        output.push_str(&format!("Normalized Weights: {}\n\n", self.weights));
        output.push_str(&format_table(&self.headers(), &self.display_rows()));

        if let Some(ref degrees) = self.insights.degree_distribution {
            output.push_str("\nDegree Distribution:\n");
            let widest = degrees.iter().map(|d| d.degree.len()).max().unwrap_or(0);
            let most = degrees.iter().map(|d| d.count).max().unwrap_or(0);
            for entry in degrees {
                output.push_str(&format!(
                    "  {:<width$}  {} {}\n",
                    entry.degree,
                    histogram_bar(entry.count, most, MAX_BAR_WIDTH),
                    entry.count,
                    width = widest
                ));
            }
        }

        if let Some(ref points) = self.insights.experience_vs_test {
            output.push_str("\nExperience vs Test Score:\n");
            for point in points {
                output.push_str(&format!(
                    "  {}: {} yrs, {}\n",
                    point.name,
                    crate::models::format_number(point.years_of_experience),
                    crate::models::format_number(point.test_score)
                ));
            }
        }

        output.push_str(&format!(
            "\nRanked on: {}\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output
    }

    pub fn format_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str("# Top Candidates\n\n");
        output.push_str(&format!(
            "Showing **{}** of {} candidates.\n\n",
            self.ranked.len(),
            self.total_candidates
        ));

        output.push_str("## Weights\n\n");
        output.push_str("| Component | Weight |\n|-----------|--------|\n");
        for (name, value) in [
            ("Test", self.weights.test),
            ("Interview", self.weights.interview),
            ("Experience", self.weights.experience),
            ("Tier", self.weights.tier),
        ] {
            output.push_str(&format!("| {} | {:.2} |\n", name, value));
        }

        output.push_str("\n## Ranking\n\n");
        let headers = self.headers();
        output.push_str(&format!("| {} |\n", headers.join(" | ")));
        output.push_str(&format!(
            "|{}|\n",
            headers.iter().map(|_| "---").collect::<Vec<_>>().join("|")
        ));
        for row in self.display_rows() {
            output.push_str(&format!("| {} |\n", row.join(" | ")));
        }

        if let Some(ref degrees) = self.insights.degree_distribution {
            output.push_str("\n## Degree Distribution\n\n");
            output.push_str("| Degree | Count |\n|--------|-------|\n");
            for entry in degrees {
                output.push_str(&format!("| {} | {} |\n", entry.degree, entry.count));
            }
        }

        if let Some(ref points) = self.insights.experience_vs_test {
            output.push_str("\n## Experience vs Test Score\n\n");
            output.push_str("| Name | Years of Experience | Test Score |\n|------|------|------|\n");
            for point in points {
                output.push_str(&format!(
                    "| {} | {} | {} |\n",
                    point.name,
                    crate::models::format_number(point.years_of_experience),
                    crate::models::format_number(point.test_score)
                ));
            }
        }

        output.push_str(&format!(
            "\n---\n*Ranked on {}*\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output
    }

    pub fn format_json(&self) -> Result<String> {
        let candidates: Vec<Value> = self
            .ranked
            .iter()
            .map(|r| {
                let mut row = Map::new();
                row.insert("rank".to_string(), json!(r.rank));
                for column in &self.columns {
                    let value = match column {
                        Column::Name | Column::Degree | Column::LocationPreference => {
                            json!(r.scored.candidate.display_value(*column))
                        }
                        _ => json!(r.scored.candidate.numeric(*column)),
                    };
                    row.insert(column.header().to_string(), value);
                }
                row.insert("skills_list".to_string(), json!(r.scored.candidate.skills_list));
                row.insert("skill_bonus".to_string(), json!(r.scored.skill_bonus));
                row.insert(FINAL_SCORE_HEADER.to_string(), json!(r.scored.final_score));
                Value::Object(row)
            })
            .collect();

        let report = json!({
            "generated_at": self.generated_at,
            "total_candidates": self.total_candidates,
            "weights": self.weights,
            "top_candidates": candidates,
            "insights": self.insights,
        });

        Ok(serde_json::to_string_pretty(&report)?)
    }

    pub fn format_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        let mut headers: Vec<&str> = self.columns.iter().map(|c| c.header()).collect();
        headers.push(FINAL_SCORE_HEADER);
        writer.write_record(&headers)?;

        for r in self.ranked {
            let mut record: Vec<String> = self
                .columns
                .iter()
                .map(|c| r.scored.candidate.display_value(*c).unwrap_or_default())
                .collect();
            record.push(r.scored.final_score.to_string());
            writer.write_record(&record)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| Error::Io(std::io::Error::new(e.error().kind(), e.error().to_string())))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Scored rows with their sub-scores, in input order.
pub fn format_preview(candidates: &[ScoredCandidate], columns: &[Column]) -> String {
    let mut headers = vec!["row".to_string()];
    headers.extend(columns.iter().map(|c| c.header().to_string()));
    headers.extend(
        [
            "test_norm",
            "interview_norm",
            "exp_norm",
            "tier_norm",
            "skill_bonus",
            FINAL_SCORE_HEADER,
        ]
        .iter()
        .map(|h| h.to_string()),
    );

    let score = |v: Option<f64>| v.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".to_string());

    let rows: Vec<Vec<String>> = candidates
        .iter()
        .map(|c| {
            let mut row = vec![c.candidate.row_index.to_string()];
            row.extend(
                columns
                    .iter()
                    .map(|col| c.candidate.display_value(*col).unwrap_or_default()),
            );
            row.push(score(c.scores.test_norm));
            row.push(score(c.scores.interview_norm));
            row.push(score(c.scores.exp_norm));
            row.push(score(c.scores.tier_norm));
            row.push(format!("{:.2}", c.skill_bonus));
            row.push(format!("{:.4}", c.final_score));
            row
        })
        .collect();

    format_table(&headers, &rows)
}

/// Bar of `#` scaled so `max` fills `width`. Non-zero counts get at least one.
pub fn histogram_bar(count: usize, max: usize, width: usize) -> String {
    if count == 0 || max == 0 {
        return String::new();
    }
    let len = if max <= width {
        count
    } else {
        ((count * width + max - 1) / max).max(1)
    };
    "#".repeat(len.min(width))
}

/// Left-aligned plain-text table.
pub fn format_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut output = String::new();
    output.push_str(&line(headers));
    output.push('\n');
    output.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    output.push('\n');
    for row in rows {
        output.push_str(&line(row));
        output.push('\n');
    }

    output
}
