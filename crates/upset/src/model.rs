//! Input data model for UpSet plots.
//!
//! Base sets are identified by position: the first [`SoloSet`] is set `A`,
//! the second `B`, and so on up to `Z`. An [`IntersectionRecord`] names the
//! sets it combines by listing their letters, e.g. `"AC"` for the
//! intersection of the first and third set.
//!
//! # Example
//!
//! ```
//! # use upset::{IntersectionRecord, SoloSet};
//! let solo_sets = vec![SoloSet::new("Reads", 5), SoloSet::new("Writes", 3)];
//! let record = IntersectionRecord::new("AB", 2);
//!
//! assert_eq!(record.set_count(), 2);
//! assert!(record.is_multi_set());
//! assert_eq!(record.display_label(&solo_sets), "Reads ∩ Writes");
//! ```

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::UpsetError;

/// Highest number of base sets a plot can show, one per letter `A..=Z`.
pub const MAX_SETS: usize = 26;

/// Separator placed between set names in derived intersection labels.
pub const INTERSECTION_SEPARATOR: &str = " ∩ ";

/// Returns the zero-based set position encoded by `letter`, if it is `A..=Z`.
pub fn letter_index(letter: char) -> Option<usize> {
    letter
        .is_ascii_uppercase()
        .then(|| (letter as u8 - b'A') as usize)
}

/// Returns the letter assigned to the set at `index`, if within [`MAX_SETS`].
pub fn set_letter(index: usize) -> Option<char> {
    (index < MAX_SETS).then(|| (b'A' + index as u8) as char)
}

/// One combination of base sets and its element count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntersectionRecord {
    set_name: String,
    num: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl IntersectionRecord {
    /// Creates a record for the sets whose letters appear in `set_name`.
    pub fn new(set_name: impl Into<String>, num: u64) -> Self {
        Self {
            set_name: set_name.into(),
            num,
            name: None,
        }
    }

    /// Sets an explicit display label, used instead of the derived one.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the set letters, in the order given.
    pub fn set_name(&self) -> &str {
        &self.set_name
    }

    /// Returns the element count.
    pub fn num(&self) -> u64 {
        self.num
    }

    /// Returns the explicit display label, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns true if the set at `index` takes part in this intersection.
    pub fn contains_set(&self, index: usize) -> bool {
        set_letter(index).is_some_and(|letter| self.set_name.contains(letter))
    }

    /// Returns the positions of the participating sets, in name order, without
    /// duplicates. Characters that are not set letters are skipped.
    pub fn set_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = Vec::new();
        for index in self.set_name.chars().filter_map(letter_index) {
            if !indices.contains(&index) {
                indices.push(index);
            }
        }
        indices
    }

    /// Returns the number of distinct sets combined by this record.
    pub fn set_count(&self) -> usize {
        self.set_indices().len()
    }

    /// Returns true if this record combines more than one set.
    pub fn is_multi_set(&self) -> bool {
        self.set_count() > 1
    }

    /// Returns the set positions of the first and last letter of the name.
    ///
    /// The name is not sorted first, so the span follows the letters exactly
    /// as written. Returns `None` for an empty name or a non-letter at either end.
    pub fn letter_span(&self) -> Option<(usize, usize)> {
        let first = letter_index(self.set_name.chars().next()?)?;
        let last = letter_index(self.set_name.chars().next_back()?)?;
        Some((first, last))
    }

    /// Returns the label shown in tooltips.
    ///
    /// Uses the explicit name when present, otherwise joins the names of the
    /// participating solo sets with `" ∩ "`.
    pub fn display_label(&self, solo_sets: &[SoloSet]) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        let names: Vec<&str> = self
            .set_indices()
            .into_iter()
            .map(|index| solo_sets.get(index).map_or("?", |set| set.name()))
            .collect();
        names.join(INTERSECTION_SEPARATOR)
    }
}

/// One base set and the count of elements unique to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoloSet {
    name: String,
    num: u64,
}

impl SoloSet {
    pub fn new(name: impl Into<String>, num: u64) -> Self {
        Self {
            name: name.into(),
            num,
        }
    }

    /// Returns the set label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the element count.
    pub fn num(&self) -> u64 {
        self.num
    }
}

/// Complete plot input as read from a JSON document.
///
/// ```json
/// {
///   "data": [{ "setName": "AB", "num": 2 }, { "setName": "A", "num": 3 }],
///   "soloSets": [{ "name": "A", "num": 5 }, { "name": "B", "num": 3 }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsetData {
    #[serde(default)]
    data: Vec<IntersectionRecord>,
    #[serde(default)]
    solo_sets: Vec<SoloSet>,
}

impl UpsetData {
    pub fn new(data: Vec<IntersectionRecord>, solo_sets: Vec<SoloSet>) -> Self {
        Self { data, solo_sets }
    }

    /// Parses plot input from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`UpsetError::Json`] if the document does not match the
    /// expected shape.
    pub fn from_json(source: &str) -> Result<Self, UpsetError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parses plot input from a JSON reader.
    ///
    /// # Errors
    ///
    /// Returns [`UpsetError::Json`] on malformed input or read failures.
    pub fn from_reader(reader: impl Read) -> Result<Self, UpsetError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Returns the intersection records.
    pub fn data(&self) -> &[IntersectionRecord] {
        &self.data
    }

    /// Returns the solo-set records.
    pub fn solo_sets(&self) -> &[SoloSet] {
        &self.solo_sets
    }
}

/// Checks that every record only references known base sets.
///
/// # Errors
///
/// Returns [`UpsetError::InvalidInput`] when there are more than
/// [`MAX_SETS`] solo sets, when a record has an empty set name, or when a
/// record uses a character that is not the letter of one of the solo sets.
pub fn validate(data: &[IntersectionRecord], solo_sets: &[SoloSet]) -> Result<(), UpsetError> {
    if solo_sets.len() > MAX_SETS {
        return Err(UpsetError::invalid_input(format!(
            "at most {MAX_SETS} base sets are supported, got {}",
            solo_sets.len()
        )));
    }

    for (position, record) in data.iter().enumerate() {
        if record.set_name().is_empty() {
            return Err(UpsetError::invalid_input(format!(
                "intersection record {position} has an empty set name"
            )));
        }

        for letter in record.set_name().chars() {
            match letter_index(letter) {
                Some(index) if index < solo_sets.len() => {}
                _ => {
                    return Err(UpsetError::invalid_input(format!(
                        "intersection `{}` references unknown set `{letter}`",
                        record.set_name()
                    )));
                }
            }
        }
    }

    Ok(())
}

/// Returns the records ordered by descending count.
///
/// Ties keep their input order. The input slice is left untouched.
pub fn sorted_by_count(data: &[IntersectionRecord]) -> Vec<&IntersectionRecord> {
    let mut sorted: Vec<&IntersectionRecord> = data.iter().collect();
    sorted.sort_by(|a, b| b.num().cmp(&a.num()));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solo_sets() -> Vec<SoloSet> {
        vec![
            SoloSet::new("Set1", 5),
            SoloSet::new("Set2", 3),
            SoloSet::new("Set3", 1),
        ]
    }

    #[test]
    fn test_letter_mapping() {
        assert_eq!(letter_index('A'), Some(0));
        assert_eq!(letter_index('Z'), Some(25));
        assert_eq!(letter_index('a'), None);
        assert_eq!(letter_index('∩'), None);

        assert_eq!(set_letter(0), Some('A'));
        assert_eq!(set_letter(25), Some('Z'));
        assert_eq!(set_letter(26), None);
    }

    #[test]
    fn test_membership() {
        let record = IntersectionRecord::new("AC", 4);
        assert!(record.contains_set(0));
        assert!(!record.contains_set(1));
        assert!(record.contains_set(2));
        assert!(!record.contains_set(40));
        assert_eq!(record.set_indices(), vec![0, 2]);
    }

    #[test]
    fn test_set_count_ignores_duplicates() {
        assert_eq!(IntersectionRecord::new("ABA", 1).set_count(), 2);
        assert_eq!(IntersectionRecord::new("B", 1).set_count(), 1);
        assert!(!IntersectionRecord::new("B", 1).is_multi_set());
    }

    #[test]
    fn test_letter_span_follows_written_order() {
        assert_eq!(IntersectionRecord::new("AC", 1).letter_span(), Some((0, 2)));
        assert_eq!(IntersectionRecord::new("CA", 1).letter_span(), Some((2, 0)));
        assert_eq!(IntersectionRecord::new("B", 1).letter_span(), Some((1, 1)));
        assert_eq!(IntersectionRecord::new("", 1).letter_span(), None);
    }

    #[test]
    fn test_display_label() {
        let sets = solo_sets();
        assert_eq!(
            IntersectionRecord::new("AC", 1).display_label(&sets),
            "Set1 ∩ Set3"
        );
        assert_eq!(IntersectionRecord::new("B", 1).display_label(&sets), "Set2");
        assert_eq!(
            IntersectionRecord::new("AB", 1)
                .with_name("custom")
                .display_label(&sets),
            "custom"
        );
    }

    #[test]
    fn test_validate_accepts_known_letters() {
        let data = vec![
            IntersectionRecord::new("ABC", 1),
            IntersectionRecord::new("B", 2),
        ];
        assert!(validate(&data, &solo_sets()).is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_letter() {
        let data = vec![IntersectionRecord::new("AD", 1)];
        let err = validate(&data, &solo_sets()).unwrap_err();
        assert!(matches!(err, UpsetError::InvalidInput(_)));
        assert!(err.to_string().contains("`D`"));
    }

    #[test]
    fn test_validate_rejects_lowercase_and_empty() {
        let lowercase = vec![IntersectionRecord::new("a", 1)];
        assert!(validate(&lowercase, &solo_sets()).is_err());

        let empty = vec![IntersectionRecord::new("", 1)];
        assert!(validate(&empty, &solo_sets()).is_err());
    }

    #[test]
    fn test_validate_rejects_too_many_sets() {
        let sets: Vec<SoloSet> = (0..27).map(|i| SoloSet::new(format!("s{i}"), 1)).collect();
        let err = validate(&[], &sets).unwrap_err();
        assert!(err.to_string().contains("26"));
    }

    #[test]
    fn test_sorted_by_count_is_stable_and_leaves_input() {
        let data = vec![
            IntersectionRecord::new("AB", 2),
            IntersectionRecord::new("A", 3),
            IntersectionRecord::new("B", 2),
            IntersectionRecord::new("C", 7),
        ];
        let sorted = sorted_by_count(&data);
        let names: Vec<&str> = sorted.iter().map(|record| record.set_name()).collect();
        assert_eq!(names, vec!["C", "A", "AB", "B"]);

        // Caller's order is untouched
        assert_eq!(data[0].set_name(), "AB");
    }

    #[test]
    fn test_upset_data_from_json() {
        let source = r#"{
            "data": [
                { "setName": "AB", "num": 2, "name": "A ∩ B" },
                { "setName": "A", "num": 3 }
            ],
            "soloSets": [{ "name": "A", "num": 5 }, { "name": "B", "num": 3 }]
        }"#;
        let data = UpsetData::from_json(source).unwrap();
        assert_eq!(data.data().len(), 2);
        assert_eq!(data.data()[0].name(), Some("A ∩ B"));
        assert_eq!(data.data()[1].name(), None);
        assert_eq!(data.solo_sets()[1], SoloSet::new("B", 3));
    }

    #[test]
    fn test_upset_data_rejects_negative_counts() {
        let source = r#"{ "data": [{ "setName": "A", "num": -1 }], "soloSets": [] }"#;
        assert!(matches!(
            UpsetData::from_json(source),
            Err(UpsetError::Json(_))
        ));
    }

    #[test]
    fn test_upset_data_from_reader() {
        let source = br#"{ "soloSets": [{ "name": "A", "num": 1 }] }"#;
        let data = UpsetData::from_reader(&source[..]).unwrap();
        assert!(data.data().is_empty());
        assert_eq!(data.solo_sets().len(), 1);
    }
}
