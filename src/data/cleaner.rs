use crate::models::{Candidate, CleanedTable, Column, ColumnPresence, RawTable};
use crate::taxonomy::normalize_skill_name;

pub const UNKNOWN_DEGREE: &str = "Unknown";
pub const UNSPECIFIED_LOCATION: &str = "Not Specified";

/// Fill value for a numeric column with no parseable cell at all.
pub const ALL_MISSING_FILL: f64 = 0.0;

/// Coerces numeric columns, fills gaps and derives each candidate's skills list.
pub fn clean(table: &RawTable) -> CleanedTable {
    let columns = ColumnPresence::from_headers(table.headers());
    let index = |column: Column| table.column_index(column.header());

    let name_idx = index(Column::Name);
    let degree_idx = index(Column::Degree);
    let location_idx = index(Column::LocationPreference);
    let skills_idx = index(Column::TechnicalSkills);

    let mut candidates: Vec<Candidate> = table
        .rows()
        .iter()
        .enumerate()
        .map(|(row_index, row)| {
            let technical_skills = cell(row, skills_idx).unwrap_or_default().to_string();
            let skills_list = normalize_skills(&technical_skills);

            Candidate {
                row_index,
                name: cell(row, name_idx).map(str::to_string),
                degree: degree_idx
                    .map(|_| cell(row, degree_idx).unwrap_or(UNKNOWN_DEGREE).to_string()),
                location_preference: location_idx.map(|_| {
                    cell(row, location_idx)
                        .unwrap_or(UNSPECIFIED_LOCATION)
                        .to_string()
                }),
                technical_skills,
                skills_list,
                ..Default::default()
            }
        })
        .collect();

    for column in Column::NUMERIC {
        let Some(idx) = index(column) else {
            tracing::debug!("Column '{}' not present, skipping", column);
            continue;
        };

        let parsed: Vec<Option<f64>> = table
            .rows()
            .iter()
            .map(|row| cell(row, Some(idx)).and_then(parse_numeric))
            .collect();

        let observed: Vec<f64> = parsed.iter().flatten().copied().collect();
        let fill = median(&observed).unwrap_or_else(|| {
            tracing::warn!(
                "Column '{}' has no numeric values, filling with {}",
                column,
                ALL_MISSING_FILL
            );
            ALL_MISSING_FILL
        });

        let missing = parsed.len() - observed.len();
        if missing > 0 {
            tracing::debug!(
                "Filled {} missing value(s) in '{}' with median {}",
                missing,
                column,
                fill
            );
        }

        for (candidate, value) in candidates.iter_mut().zip(parsed) {
            if let Some(slot) = candidate.numeric_mut(column) {
                *slot = Some(value.unwrap_or(fill));
            }
        }
    }

    tracing::info!("Cleaned {} candidate records", candidates.len());
    CleanedTable {
        columns,
        candidates,
    }
}

/// Cell values read as missing, matching the usual CSV null markers.
pub const MISSING_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_missing(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || MISSING_MARKERS.contains(&trimmed)
}

/// Trimmed cell text, or `None` when the column is absent or the cell is
/// blank or a missing marker.
fn cell(row: &[String], idx: Option<usize>) -> Option<&str> {
    idx.and_then(|i| row.get(i))
        .map(|s| s.trim())
        .filter(|s| !is_missing(s))
}

/// Parses a numeric cell. Unparseable or non-finite text counts as missing.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Median of the given values; mean of the two middle values for even counts.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Splits free-text skills on commas into normalized tokens. Order and
/// duplicates are kept; empty tokens are dropped.
pub fn normalize_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(normalize_skill_name)
        .filter(|s| !s.is_empty())
        .collect()
}
