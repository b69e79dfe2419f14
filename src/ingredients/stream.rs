//! Pull-based reading of one array inside a large JSON document.
//!
//! The document is driven through serde's visitor machinery, so only the
//! record currently being handled is ever materialized. Sibling keys are
//! skipped with [`IgnoredAny`] without building values.

use crate::error::SiftError;
use crate::types::ProductRecord;
use serde::de::{self, DeserializeSeed, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde_json::Value;
use std::fmt;
use std::io::Read;

/// Feed each object of the array under `records_key` to `handler`.
///
/// Returns the number of array elements visited. An absent key yields
/// zero records. Malformed JSON, a non-object element, or an error from
/// `handler` stops the parse and is returned.
pub fn for_each_record<R, F>(reader: R, records_key: &str, mut handler: F) -> anyhow::Result<u64>
where
    R: Read,
    F: FnMut(ProductRecord) -> anyhow::Result<()>,
{
    let mut state = StreamState {
        handler: &mut handler,
        failure: None,
        visited: 0,
        found: false,
    };

    let mut de = serde_json::Deserializer::from_reader(reader);
    let parsed = Document {
        key: records_key,
        state: &mut state,
    }
    .deserialize(&mut de)
    .and_then(|()| de.end());

    if let Some(failure) = state.failure.take() {
        return Err(failure);
    }
    parsed.map_err(SiftError::Json)?;

    if !state.found {
        tracing::warn!(key = records_key, "records key not found in document");
    }

    Ok(state.visited)
}

struct StreamState<'h, F> {
    handler: &'h mut F,
    /// Error raised outside serde (handler or shape), reported instead of the parse error
    failure: Option<anyhow::Error>,
    visited: u64,
    found: bool,
}

/// Top-level object: find `key`, skip everything else
struct Document<'a, 'h, F> {
    key: &'a str,
    state: &'a mut StreamState<'h, F>,
}

impl<'de, 'a, 'h, F> DeserializeSeed<'de> for Document<'a, 'h, F>
where
    F: FnMut(ProductRecord) -> anyhow::Result<()>,
{
    type Value = ();

    fn deserialize<D>(self, deserializer: D) -> Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }
}

impl<'de, 'a, 'h, F> Visitor<'de> for Document<'a, 'h, F>
where
    F: FnMut(ProductRecord) -> anyhow::Result<()>,
{
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a JSON object containing `{}`", self.key)
    }

    fn visit_map<A>(self, mut map: A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        while let Some(key) = map.next_key::<String>()? {
            if key == self.key {
                self.state.found = true;
                map.next_value_seed(Records {
                    key: self.key,
                    state: &mut *self.state,
                })?;
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(())
    }
}

/// The record array itself
struct Records<'a, 'h, F> {
    key: &'a str,
    state: &'a mut StreamState<'h, F>,
}

impl<'de, 'a, 'h, F> DeserializeSeed<'de> for Records<'a, 'h, F>
where
    F: FnMut(ProductRecord) -> anyhow::Result<()>,
{
    type Value = ();

    fn deserialize<D>(self, deserializer: D) -> Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(self)
    }
}

impl<'de, 'a, 'h, F> Visitor<'de> for Records<'a, 'h, F>
where
    F: FnMut(ProductRecord) -> anyhow::Result<()>,
{
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "an array of product objects under `{}`", self.key)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<(), A::Error>
    where
        A: SeqAccess<'de>,
    {
        while let Some(value) = seq.next_element::<Value>()? {
            let index = self.state.visited;
            self.state.visited += 1;

            let record = match value {
                Value::Object(record) => record,
                _ => {
                    self.state.failure = Some(
                        SiftError::NotAnObject {
                            key: self.key.to_string(),
                            index,
                        }
                        .into(),
                    );
                    return Err(de::Error::custom("record is not an object"));
                }
            };

            if let Err(e) = (self.state.handler)(record) {
                self.state.failure = Some(e);
                return Err(de::Error::custom("record handler failed"));
            }
        }
        Ok(())
    }
}
