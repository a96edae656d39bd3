use std::collections::HashSet;

/// A set of interchangeable skills that earns one additive bonus when any of
/// them is listed.
#[derive(Debug, Clone)]
pub struct BonusGroup {
    pub skills: Vec<String>,
    pub bonus: f64,
}

pub struct SkillTaxonomy {
    groups: Vec<BonusGroup>,
}

impl SkillTaxonomy {
    pub fn new() -> Self {
        let mut taxonomy = Self { groups: Vec::new() };

        taxonomy.init_languages();
        taxonomy.init_bi_tools();

        taxonomy
    }

    fn init_languages(&mut self) {
        self.add_group(&["python"], 0.03);
        self.add_group(&["sql"], 0.03);
    }

    fn init_bi_tools(&mut self) {
        // Pays out once no matter how many of these are listed
        self.add_group(&["excel", "power bi", "tableau"], 0.02);
    }

    fn add_group(&mut self, skills: &[&str], bonus: f64) {
        self.groups.push(BonusGroup {
            skills: skills.iter().map(|s| normalize_skill_name(s)).collect(),
            bonus,
        });
    }

    /// Sum of group bonuses matched by `skills`. Tokens are re-normalized and
    /// treated as a set, so duplicates and case variants count once.
    pub fn bonus_for<S: AsRef<str>>(&self, skills: &[S]) -> f64 {
        let skills: HashSet<String> = skills
            .iter()
            .map(|s| normalize_skill_name(s.as_ref()))
            .filter(|s| !s.is_empty())
            .collect();

        self.groups
            .iter()
            .filter(|g| g.skills.iter().any(|s| skills.contains(s)))
            .map(|g| g.bonus)
            .sum()
    }
}

impl Default for SkillTaxonomy {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercases, collapses whitespace runs to one space, and trims.
pub fn normalize_skill_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
