use serde::Serialize;

/// How a sector resolved against a benchmark table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BenchmarkMatch<'a> {
    /// The collaborator supplied a taxonomy key that names a row exactly.
    Explicit { key: &'a str, baseline: f64 },
    /// The free-text label matched a row exactly or by substring containment.
    Label { key: &'a str, baseline: f64 },
    Default { baseline: f64 },
}

impl BenchmarkMatch<'_> {
    pub fn baseline(&self) -> f64 {
        match self {
            BenchmarkMatch::Explicit { baseline, .. }
            | BenchmarkMatch::Label { baseline, .. }
            | BenchmarkMatch::Default { baseline } => *baseline,
        }
    }
}

/// Ordered sector → adoption-baseline table.
///
/// Label matching is case-insensitive containment in either direction and
/// the first row in declaration order wins, so specific keys must be
/// declared before the generic keys they contain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkTable {
    rows: Vec<(String, f64)>,
    default_baseline: f64,
}

impl BenchmarkTable {
    pub fn new(default_baseline: f64) -> Self {
        Self {
            rows: Vec::new(),
            default_baseline: default_baseline.clamp(0.0, 100.0),
        }
    }

    pub fn with_row(mut self, key: &str, baseline: f64) -> Self {
        self.rows
            .push((key.trim().to_lowercase(), baseline.clamp(0.0, 100.0)));
        self
    }

    pub fn from_rows(default_baseline: f64, rows: &[(&str, f64)]) -> Self {
        rows.iter()
            .fold(Self::new(default_baseline), |table, (key, baseline)| {
                table.with_row(key, *baseline)
            })
    }

    pub fn default_baseline(&self) -> f64 {
        self.default_baseline
    }

    pub fn rows(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rows.iter().map(|(key, baseline)| (key.as_str(), *baseline))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Resolve an organization's sector. An explicit taxonomy key wins over
    /// the free-text label; an unknown key falls through to label matching.
    /// A label equal to a row key selects that row before any containment
    /// match is considered.
    pub fn resolve(
        &self,
        sector_key: Option<&str>,
        sector_label: Option<&str>,
    ) -> BenchmarkMatch<'_> {
        if let Some(key) = sector_key.map(|k| k.trim().to_lowercase()) {
            if let Some((row_key, baseline)) = self.find_exact(&key) {
                return BenchmarkMatch::Explicit { key: row_key, baseline };
            }
        }

        if let Some(label) = sector_label.map(|l| l.trim().to_lowercase()) {
            if !label.is_empty() {
                let hit = self.find_exact(&label).or_else(|| {
                    self.rows
                        .iter()
                        .find(|(row, _)| {
                            label.contains(row.as_str()) || row.contains(label.as_str())
                        })
                        .map(|(row, baseline)| (row.as_str(), *baseline))
                });
                if let Some((row_key, baseline)) = hit {
                    return BenchmarkMatch::Label { key: row_key, baseline };
                }
            }
        }

        BenchmarkMatch::Default {
            baseline: self.default_baseline,
        }
    }

    fn find_exact(&self, key: &str) -> Option<(&str, f64)> {
        self.rows
            .iter()
            .find(|(row, _)| row == key)
            .map(|(row, baseline)| (row.as_str(), *baseline))
    }

    /// Rows declared after a generic row they contain. Labels mentioning the
    /// specific row would resolve to the generic one instead. Returned as
    /// `(specific, generic)` pairs.
    pub fn ordering_conflicts(&self) -> Vec<(&str, &str)> {
        let mut conflicts = Vec::new();
        for (index, (key, _)) in self.rows.iter().enumerate() {
            let generic = self.rows[..index]
                .iter()
                .find(|(prior, _)| key.contains(prior.as_str()));
            if let Some((prior, _)) = generic {
                conflicts.push((key.as_str(), prior.as_str()));
            }
        }
        conflicts
    }
}

/// Sector table for the general profile.
pub fn general_benchmarks() -> BenchmarkTable {
    BenchmarkTable::from_rows(
        50.0,
        &[
            ("artificial intelligence", 95.0),
            ("technology", 85.0),
            ("internet", 80.0),
            ("software", 75.0),
            ("e-commerce", 75.0),
            ("investment banking", 70.0),
            ("financial services", 70.0),
            ("consulting", 70.0),
            ("banking", 65.0),
            ("healthcare", 60.0),
            ("insurance", 60.0),
            ("retail", 55.0),
            ("manufacturing", 50.0),
            ("energy", 50.0),
            ("education", 45.0),
            ("government", 40.0),
            ("non-profit", 35.0),
        ],
    )
}

/// Financial sub-sector table for the financial-services profile.
pub fn financial_benchmarks() -> BenchmarkTable {
    BenchmarkTable::from_rows(
        55.0,
        &[
            ("fintech", 90.0),
            ("hedge fund", 85.0),
            ("payment processor", 80.0),
            ("investment banking", 75.0),
            ("trading firm", 75.0),
            ("asset management", 70.0),
            ("wealth management", 70.0),
            ("private equity", 68.0),
            ("retail banking", 65.0),
            ("commercial banking", 65.0),
            ("reinsurance", 58.0),
            ("insurance", 60.0),
            ("regional bank", 55.0),
            ("community bank", 50.0),
            ("credit union", 45.0),
            ("financial services", 65.0),
            ("banking", 65.0),
            ("finance", 60.0),
        ],
    )
}
