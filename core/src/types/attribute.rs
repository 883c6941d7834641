use super::record::RawRecord;

/// A single private attribute definition
///
/// Mirrors the shape of the standard dictionary entries used downstream:
/// `(VR, VM, name, isRetired)`. The generator only knows VR and name, so
/// multiplicity and the retired flag are always written blank.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct PrivateAttribute {
    pub value_representation: String,
    pub value_multiplicity: String,
    pub name: String,
    pub is_retired: String,
}

impl PrivateAttribute {
    /// Creates a new PrivateAttribute
    pub fn new(
        value_representation: String,
        value_multiplicity: String,
        name: String,
        is_retired: String,
    ) -> Self {
        Self {
            value_representation,
            value_multiplicity,
            name,
            is_retired,
        }
    }

    /// Normalizes a parsed line into `(VR, "", name, "")`
    pub fn from_record(record: &RawRecord) -> Self {
        Self::new(
            record.value_representation.clone(),
            String::new(),
            record.name.clone(),
            String::new(),
        )
    }

    /// Returns the four fields in output order
    pub fn fields(&self) -> [&str; 4] {
        [
            self.value_representation.as_str(),
            self.value_multiplicity.as_str(),
            self.name.as_str(),
            self.is_retired.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_record_blanks_vm_and_retired() {
        let record =
            RawRecord::from_fields(&["0009", "0010", "LO", "1-n", "Private Creator", "", "ACME"])
                .unwrap();
        let attr = PrivateAttribute::from_record(&record);

        assert_eq!(attr.fields(), ["LO", "", "Private Creator", ""]);
    }
}
