use record_types::{NameQuery, RecordType};
use std::collections::HashMap;
use thiserror::Error;

const MAX_LABEL_LEN: usize = 63;

const MAX_NAME_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("record type {0} cannot be served from the static table")]
    UnsupportedType(RecordType),

    #[error("PTR target '{target}' is not a valid host name: {reason}")]
    InvalidTarget { target: String, reason: &'static str },
}

/// Static record table, frozen once built.
///
/// Values are kept as text: addresses for A/AAAA, a host name for PTR. They
/// are only interpreted when a question asks for them.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: HashMap<NameQuery, String>,
}

impl RecordStore {
    pub fn builder() -> RecordStoreBuilder {
        RecordStoreBuilder::default()
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str, q_type: RecordType) -> Option<&str> {
        self.records
            .get(&NameQuery::new(name, q_type))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All entries ordered by name, then type.
    pub fn iter(&self) -> impl Iterator<Item = (&NameQuery, &str)> {
        let mut entries: Vec<(&NameQuery, &str)> = self
            .records
            .iter()
            .map(|(k, v)| (k, v.as_str()))
            .collect();
        entries.sort();

        entries.into_iter()
    }
}

#[derive(Debug, Default)]
pub struct RecordStoreBuilder {
    records: HashMap<NameQuery, String>,
}

impl RecordStoreBuilder {
    /// Adds an entry, replacing any earlier value for the same name and type.
    pub fn insert(
        mut self,
        name: &str,
        q_type: RecordType,
        value: &str,
    ) -> Result<Self, StoreError> {
        if !q_type.is_supported() {
            return Err(StoreError::UnsupportedType(q_type));
        }

        let value = value.trim();
        if q_type == RecordType::PTR {
            check_host_name(value)?;
        }

        let key = NameQuery::new(name.trim_end_matches('.'), q_type);
        self.records.insert(key, value.to_string());

        Ok(self)
    }

    pub fn build(self) -> RecordStore {
        RecordStore {
            records: self.records,
        }
    }
}

// https://datatracker.ietf.org/doc/html/rfc1035#section-2.3.4
fn check_host_name(target: &str) -> Result<(), StoreError> {
    let invalid = |reason| StoreError::InvalidTarget {
        target: target.to_string(),
        reason,
    };

    let labels = target.strip_suffix('.').unwrap_or(target);
    if labels.is_empty() {
        return Err(invalid("name has no labels"));
    }

    // the terminating zero octet
    let mut wire_len = 1;
    for label in labels.split('.') {
        if label.is_empty() || label.len() > MAX_LABEL_LEN {
            return Err(invalid("labels must be 1 to 63 octets"));
        }
        wire_len += label.len() + 1;
    }

    if wire_len > MAX_NAME_LEN {
        return Err(invalid("name exceeds 255 octets"));
    }

    Ok(())
}
