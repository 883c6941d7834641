/// Number of tab-separated fields in a private.dic line
pub const FIELD_COUNT: usize = 7;

/// One parsed line of a private dictionary source file
///
/// Field order follows the mdcm layout:
/// `group \t element \t VR \t VM \t name \t <unused> \t creator`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub group: String,
    pub element: String,
    pub value_representation: String,
    pub value_multiplicity: String,
    pub name: String,
    pub placeholder: String,
    pub creator: String,
}

impl RawRecord {
    /// Builds a record from exactly [`FIELD_COUNT`] fields
    ///
    /// Returns `None` when the field count is wrong.
    pub fn from_fields(fields: &[&str]) -> Option<Self> {
        match fields {
            [group, element, vr, vm, name, placeholder, creator] => Some(Self {
                group: group.to_string(),
                element: element.to_string(),
                value_representation: vr.to_string(),
                value_multiplicity: vm.to_string(),
                name: name.to_string(),
                placeholder: placeholder.to_string(),
                creator: creator.to_string(),
            }),
            _ => None,
        }
    }

    /// Composes the tag key from the trimmed group and element text
    ///
    /// The hex text is kept as written (including `xx` masks), no numeric
    /// conversion takes place.
    pub fn tag_key(&self) -> String {
        format!("{}{}", self.group.trim(), self.element.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(group: &str, element: &str) -> RawRecord {
        RawRecord::from_fields(&[group, element, "LO", "1", "Name", "", "ACME"]).unwrap()
    }

    #[rstest]
    #[case("0009", "0010", "00090010")]
    #[case(" 0009", "0010 ", "00090010")]
    #[case("0019", "xx10", "0019xx10")]
    #[case("7fe1", "1001", "7fe11001")]
    fn test_tag_key(#[case] group: &str, #[case] element: &str, #[case] expected: &str) {
        assert_eq!(record(group, element).tag_key(), expected);
    }

    #[test]
    fn test_from_fields_wrong_count() {
        assert!(RawRecord::from_fields(&["0009", "0010", "LO", "1", "Name", "ACME"]).is_none());
        assert!(RawRecord::from_fields(&[]).is_none());
    }

    #[test]
    fn test_from_fields_order() {
        let rec = RawRecord::from_fields(&["0009", "0010", "LO", "1", "Name", "x", "ACME"]).unwrap();
        assert_eq!(rec.value_representation, "LO");
        assert_eq!(rec.value_multiplicity, "1");
        assert_eq!(rec.name, "Name");
        assert_eq!(rec.placeholder, "x");
        assert_eq!(rec.creator, "ACME");
    }
}
