use serde::{Deserialize, Serialize};

/// Input columns the pipeline understands. Anything else in the CSV is carried
/// in the raw table and ignored by scoring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    Age,
    YearsOfExperience,
    TestScore,
    InterviewScore,
    PastCompanyTier,
    Degree,
    LocationPreference,
    TechnicalSkills,
}

impl Column {
    pub const ALL: [Column; 9] = [
        Column::Name,
        Column::Age,
        Column::YearsOfExperience,
        Column::TestScore,
        Column::InterviewScore,
        Column::PastCompanyTier,
        Column::Degree,
        Column::LocationPreference,
        Column::TechnicalSkills,
    ];

    pub const NUMERIC: [Column; 5] = [
        Column::Age,
        Column::YearsOfExperience,
        Column::TestScore,
        Column::InterviewScore,
        Column::PastCompanyTier,
    ];

    /// Columns shown in ranked output, in display order.
    pub const DISPLAY: [Column; 7] = [
        Column::Name,
        Column::Degree,
        Column::YearsOfExperience,
        Column::TestScore,
        Column::InterviewScore,
        Column::PastCompanyTier,
        Column::LocationPreference,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Age => "Age",
            Column::YearsOfExperience => "Years of Experience",
            Column::TestScore => "Test Score",
            Column::InterviewScore => "Interview Score",
            Column::PastCompanyTier => "Past Company Tier",
            Column::Degree => "Degree",
            Column::LocationPreference => "Location Preference",
            Column::TechnicalSkills => "Technical Skills",
        }
    }

    pub fn from_header(header: &str) -> Option<Column> {
        let header = header.trim();
        Column::ALL.iter().copied().find(|c| c.header() == header)
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.header())
    }
}

/// Which recognized columns were present in the source file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ColumnPresence {
    present: Vec<Column>,
}

impl ColumnPresence {
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Self {
        let mut present = Vec::new();
        for header in headers {
            if let Some(column) = Column::from_header(header.as_ref()) {
                if !present.contains(&column) {
                    present.push(column);
                }
            }
        }
        Self { present }
    }

    pub fn contains(&self, column: Column) -> bool {
        self.present.contains(&column)
    }

    pub fn display_columns(&self) -> Vec<Column> {
        Column::DISPLAY
            .iter()
            .copied()
            .filter(|c| self.contains(*c))
            .collect()
    }
}
