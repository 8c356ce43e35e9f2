use std::collections::HashMap;

use serde::Serialize;

use crate::ExtractedVariables;

/// Which extracted variables to cross-tabulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableQuery<'a> {
    /// Boolean field splitting records into yes/no.
    pub flag: &'a str,
    /// Categorical field grouped for records where `flag` is true.
    pub category: &'a str,
    /// Free-text field collected per category.
    pub reason: &'a str,
}

impl Default for VariableQuery<'static> {
    fn default() -> Self {
        Self { flag: "is_woman", category: "favorite_food", reason: "food_reason" }
    }
}

/// One normalized category value and the reasons given for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub count: usize,
    pub reasons: Vec<String>,
}

/// Yes/no tally of the flag plus the categorical breakdown of the yes group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableSummary {
    pub flag: String,
    pub yes: usize,
    pub no: usize,
    /// Records where the flag is absent; excluded from both percentages.
    pub unanswered: usize,
    pub yes_percent: u32,
    pub no_percent: u32,
    pub categories: Vec<CategoryBreakdown>,
}

impl VariableSummary {
    /// `false` means the caller should render "no data".
    pub fn has_categories(&self) -> bool {
        !self.categories.is_empty()
    }
}

/// Aggregates extracted variables across all records.
///
/// Category values are compared trimmed and lower-cased. Categories come
/// back most frequent first, ties in order of first appearance.
pub fn aggregate_variables<'a, I>(records: I, query: &VariableQuery<'_>) -> VariableSummary
where
    I: IntoIterator<Item = Option<&'a ExtractedVariables>>,
{
    let mut yes = 0usize;
    let mut no = 0usize;
    let mut unanswered = 0usize;
    let mut categories: Vec<CategoryBreakdown> = Vec::new();
    let mut index_of: HashMap<String, usize> = HashMap::new();

    for vars in records {
        match vars.and_then(|v| v.flag(query.flag)) {
            Some(true) => yes += 1,
            Some(false) => {
                no += 1;
                continue;
            },
            None => {
                unanswered += 1;
                continue;
            },
        }
        let Some(vars) = vars else { continue };

        let Some(category) = vars
            .text(query.category)
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
        else {
            continue;
        };

        let slot = *index_of.entry(category.clone()).or_insert_with(|| {
            categories.push(CategoryBreakdown { category, count: 0, reasons: Vec::new() });
            categories.len() - 1
        });
        let entry = &mut categories[slot];
        entry.count += 1;
        if let Some(reason) = vars.text(query.reason).map(str::trim).filter(|r| !r.is_empty()) {
            entry.reasons.push(reason.to_owned());
        }
    }

    categories.sort_by(|a, b| b.count.cmp(&a.count));

    VariableSummary {
        flag: query.flag.to_owned(),
        yes,
        no,
        unanswered,
        yes_percent: percent(yes, yes + no),
        no_percent: percent(no, yes + no),
        categories,
    }
}

fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    u32::try_from((part * 100 + whole / 2) / whole).unwrap_or(100)
}
