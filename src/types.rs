use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord {
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub migration: f64,
}

/// Countries with a known migration value, in file order.
///
/// Built once at startup and only ever read afterwards, so it is shared
/// between requests behind an `Arc` without locking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<CountryRecord>,
}

impl Dataset {
    pub fn new(records: Vec<CountryRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records for `country`. The loader does not enforce uniqueness,
    /// so a duplicated name yields more than one record.
    pub fn matching<'a>(&'a self, country: &'a str) -> impl Iterator<Item = &'a CountryRecord> + 'a {
        self.records.iter().filter(move |r| r.country == country)
    }
}

/// Country names chosen in the dropdown. Ordered set: duplicates collapse and
/// iteration is alphabetical regardless of the order the UI sent them in.
pub type Selection = BTreeSet<String>;

#[cfg(test)]
mod tests {
    use super::*;

    fn record(country: &str, migration: f64) -> CountryRecord {
        CountryRecord { country: country.to_string(), lat: 0.0, lon: 0.0, migration }
    }

    #[test]
    fn matching_returns_only_named_country() {
        let dataset = Dataset::new(vec![record("Aruba", 1.0), record("Zambia", -0.5)]);
        let found: Vec<_> = dataset.matching("Zambia").collect();
        assert_eq!(found, vec![&record("Zambia", -0.5)]);
        assert_eq!(dataset.matching("Atlantis").count(), 0);
    }

    #[test]
    fn selection_collapses_duplicates_and_sorts() {
        let selection: Selection = ["Zambia", "Aruba", "Zambia"].iter().map(|s| s.to_string()).collect();
        let names: Vec<_> = selection.iter().map(String::as_str).collect();
        assert_eq!(names, vec!["Aruba", "Zambia"]);
    }
}
