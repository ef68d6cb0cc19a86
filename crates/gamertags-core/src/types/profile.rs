//! Profile State - the tag entered for every platform
//!
//! A `ProfileState` always holds exactly one tag per [`Platform`]: the tags
//! live in a fixed-size array indexed by platform, so no operation can add
//! or drop a key. An empty string means "not set".

use std::collections::HashMap;

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use super::Platform;
use crate::error::Result;

/// Mapping from every platform to its (possibly empty) tag
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileState {
    tags: [String; Platform::COUNT],
}

impl ProfileState {
    /// State with every platform mapped to the empty string.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Tag for `platform` ("" when not set).
    pub fn get(&self, platform: Platform) -> &str {
        &self.tags[platform.index()]
    }

    /// Returns a copy of this state with `platform` mapped to `value`.
    ///
    /// Any string is accepted, including the empty string.
    #[must_use]
    pub fn set(&self, platform: Platform, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.tags[platform.index()] = value.into();
        next
    }

    /// All six `(platform, tag)` pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (Platform, &str)> + '_ {
        Platform::ALL
            .into_iter()
            .map(move |platform| (platform, self.get(platform)))
    }

    /// Only the pairs whose tag is non-empty, in display order.
    pub fn filled(&self) -> impl Iterator<Item = (Platform, &str)> + '_ {
        self.entries().filter(|(_, tag)| !tag.is_empty())
    }

    /// True when no platform has a tag.
    pub fn is_empty(&self) -> bool {
        self.tags.iter().all(String::is_empty)
    }

    /// Serialize to the persisted JSON object (all six keys present).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a persisted JSON object.
    ///
    /// Missing keys and non-string values become empty tags and unknown keys
    /// are ignored. Anything that is not a JSON object is an error.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Serialize for ProfileState {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Platform::COUNT))?;
        for (platform, tag) in self.entries() {
            map.serialize_entry(platform.key(), tag)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ProfileState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = HashMap::<String, serde_json::Value>::deserialize(deserializer)?;
        let mut state = ProfileState::empty();
        for platform in Platform::ALL {
            if let Some(serde_json::Value::String(tag)) = raw.get(platform.key()) {
                state.tags[platform.index()] = tag.clone();
            }
        }
        Ok(state)
    }
}
