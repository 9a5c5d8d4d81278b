//! Province wage registry.
//!
//! This module provides the [`WageRegistry`], an immutable in-memory table of
//! minimum-wage records resolved by composite province key.

use crate::config::WageRecord;
use crate::error::{EngineError, EngineResult};

/// The literal separator between province and note in a composite key.
pub const KEY_SEPARATOR: &str = "--";

/// Normalizes a note for matching: strips all whitespace and lowercases.
///
/// Applied symmetrically to the note stored on a record and to the note
/// portion of a lookup key, so `"Ko Samui"` matches `"kosamui"` and
/// `" KO SAMUI "`.
pub fn normalize_note(note: &str) -> String {
    note.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// An immutable table of minimum-wage records keyed by `(province, note)`.
///
/// Built once at startup from the loaded dataset and shared read-only by all
/// calculation requests. Lookup is a linear scan over a small, bounded
/// provincial table.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use wage_engine::config::WageRecord;
/// use wage_engine::registry::WageRegistry;
///
/// let registry = WageRegistry::new(vec![WageRecord {
///     province: "Phuket".to_string(),
///     note: None,
///     min_daily_wage: Decimal::from(400),
/// }])
/// .unwrap();
///
/// let record = registry.resolve("Phuket").unwrap();
/// assert_eq!(record.min_daily_wage, Decimal::from(400));
/// ```
#[derive(Debug, Clone)]
pub struct WageRegistry {
    records: Vec<WageRecord>,
}

impl WageRegistry {
    /// Builds a registry from wage records, preserving dataset order.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateWageRecord` if two records share the same
    /// `(province, normalized note)` key. Rejecting duplicates at load time
    /// keeps resolution independent of iteration order.
    pub fn new(records: Vec<WageRecord>) -> EngineResult<Self> {
        for (i, record) in records.iter().enumerate() {
            let key = Self::record_key(record);
            if records[..i].iter().any(|r| Self::record_key(r) == key) {
                return Err(EngineError::DuplicateWageRecord {
                    province: record.province.clone(),
                    note: record.note.as_deref().map(normalize_note),
                });
            }
        }

        Ok(Self { records })
    }

    /// Resolves a composite province key to its wage record.
    ///
    /// The key is split on the literal `"--"` separator into a province base
    /// and an optional note code; a missing separator means no note. A record
    /// matches when its province equals the base and its normalized note
    /// equals the normalized note code. A record with no note matches only
    /// when the key carries no note.
    ///
    /// # Errors
    ///
    /// Returns `ProvinceNotFound` for an empty key (without scanning) or when
    /// no record matches.
    pub fn resolve(&self, province_key: &str) -> EngineResult<&WageRecord> {
        if province_key.is_empty() {
            return Err(EngineError::ProvinceNotFound {
                key: province_key.to_string(),
            });
        }

        let (base, note_code) = match province_key.split_once(KEY_SEPARATOR) {
            Some((base, note)) => (base, note),
            None => (province_key, ""),
        };
        let wanted_note = normalize_note(note_code);

        self.records
            .iter()
            .find(|record| {
                record.province == base
                    && match &record.note {
                        Some(note) => normalize_note(note) == wanted_note,
                        None => wanted_note.is_empty(),
                    }
            })
            .ok_or_else(|| EngineError::ProvinceNotFound {
                key: province_key.to_string(),
            })
    }

    /// Returns the records in registry order.
    pub fn records(&self) -> &[WageRecord] {
        &self.records
    }

    /// Returns the number of records in the registry.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn record_key(record: &WageRecord) -> (String, String) {
        (
            record.province.clone(),
            record.note.as_deref().map(normalize_note).unwrap_or_default(),
        )
    }
}
