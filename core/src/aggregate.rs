use crate::error::Result;
use crate::types::{PrivateAttribute, PrivateDictionaries, RawRecord};
use log::{info, warn};

/// Outcome of folding parsed records into dictionaries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    pub dictionaries: PrivateDictionaries,

    /// Number of records folded in, including ones later overwritten
    pub records: usize,

    /// Number of records that replaced an earlier creator+tag entry
    pub overwrites: usize,
}

impl Aggregation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single record under its creator and composed tag
    ///
    /// A later record with the same creator and tag replaces the earlier one.
    pub fn add(&mut self, record: &RawRecord) {
        let tag = record.tag_key();
        let attribute = PrivateAttribute::from_record(record);
        self.records += 1;

        if let Some(previous) = self.dictionaries.insert(&record.creator, tag.clone(), attribute) {
            self.overwrites += 1;
            warn!(
                "Duplicate tag {} for creator {:?}: {:?} replaced by {:?}",
                tag, record.creator, previous.name, record.name
            );
        }
    }
}

/// Folds a stream of parsed records into private dictionaries
///
/// Stops at the first error; nothing partial is returned.
pub fn aggregate<I>(records: I) -> Result<Aggregation>
where
    I: IntoIterator<Item = Result<RawRecord>>,
{
    let mut aggregation = Aggregation::new();
    for record in records {
        aggregation.add(&record?);
    }

    info!(
        "Aggregated {} records into {} creators ({} attributes)",
        aggregation.records,
        aggregation.dictionaries.creator_count(),
        aggregation.dictionaries.attribute_count()
    );
    Ok(aggregation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrivateDictError;
    use crate::input::parse_line;

    fn parsed(lines: &[&str]) -> Vec<Result<RawRecord>> {
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| parse_line(i + 1, line))
            .collect()
    }

    #[test]
    fn test_single_creator() {
        let agg = aggregate(parsed(&[
            "0009\t0010\tLO\t1\tPrivate Creator\t\tACME",
            "0009\t0011\tSH\t1\tAcme Code\t\tACME",
        ]))
        .unwrap();

        let acme = agg.dictionaries.creator("ACME").unwrap();
        assert_eq!(agg.dictionaries.creator_count(), 1);
        assert_eq!(acme.len(), 2);
        assert_eq!(
            acme.get("00090010").unwrap().fields(),
            ["LO", "", "Private Creator", ""]
        );
        assert_eq!(
            acme.get("00090011").unwrap().fields(),
            ["SH", "", "Acme Code", ""]
        );
    }

    #[test]
    fn test_creators_kept_separate() {
        let agg = aggregate(parsed(&[
            "0009\t0010\tLO\t1\tAcme One\t\tACME",
            "0019\t0010\tDS\t1\tGems One\t\tGEMS",
            "0009\t0011\tSH\t1\tAcme Two\t\tACME",
        ]))
        .unwrap();

        let acme = agg.dictionaries.creator("ACME").unwrap();
        let gems = agg.dictionaries.creator("GEMS").unwrap();
        assert_eq!(agg.dictionaries.creator_count(), 2);
        assert_eq!(acme.len(), 2);
        assert_eq!(gems.len(), 1);
        assert!(acme.get("00190010").is_none());
        assert!(gems.get("00090010").is_none());
    }

    #[test]
    fn test_later_duplicate_wins() {
        let agg = aggregate(parsed(&[
            "0009\t0010\tLO\t1\tOld Name\t\tACME",
            "0009\t0010\tUS\t1\tNew Name\t\tACME",
        ]))
        .unwrap();

        let acme = agg.dictionaries.creator("ACME").unwrap();
        assert_eq!(acme.len(), 1);
        assert_eq!(acme.get("00090010").unwrap().fields(), ["US", "", "New Name", ""]);
        assert_eq!(agg.records, 2);
        assert_eq!(agg.overwrites, 1);
    }

    #[test]
    fn test_stops_on_first_error() {
        let result = aggregate(parsed(&[
            "0009\t0010\tLO\t1\tName\t\tACME",
            "0009\t0011\tLO\t1\tName\tACME",
        ]));

        assert!(matches!(
            result,
            Err(PrivateDictError::MalformedRecord { line_number: 2, .. })
        ));
    }

    #[test]
    fn test_empty_input() {
        let agg = aggregate(Vec::new()).unwrap();
        assert!(agg.dictionaries.is_empty());
        assert_eq!(agg.records, 0);
    }
}
