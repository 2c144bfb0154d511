//! Plain data handed from a [`MediaFile`](crate::MediaFile) to whoever prints it.

use indexmap::map::{Iter, Keys};
use indexmap::IndexMap;
use std::iter::FromIterator;

/// The generic tag fields shared by every tag format.
///
/// Unset strings are empty and unset numbers are zero, so a reader never has to
/// distinguish between "missing" and "blank".
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BasicTag {
    pub artist: String,
    pub album: String,
    pub title: String,
    pub year: u32,
    pub genre: String,
    pub track: u32,
    pub comment: String,
}

/// Stream-level properties of a file.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AudioProperties {
    /// Bitrate in kb/s
    pub bitrate: u32,
    /// Sample rate in Hz
    pub sample_rate: u32,
    pub channels: u32,
    pub length_ms: u64,
}

/// An ordered mapping of property keys to one or more values.
///
/// Keys keep the position they were first added at, and values keep the order they were
/// added in. This mirrors how the tag itself is laid out on disk.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PropertyMap {
    map: IndexMap<String, Vec<String>>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value to `key`, creating the key at the end of the map if it's new.
    pub fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.map
            .entry(key.into())
            .or_insert_with(Vec::new)
            .push(value.into());
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.map.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> Keys<'_, String, Vec<String>> {
        self.map.keys()
    }

    pub fn iter(&self) -> Iter<'_, String, Vec<String>> {
        self.map.iter()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The length of the longest key in characters, or zero if the map is empty.
    pub fn longest_key(&self) -> usize {
        self.keys().map(|key| key.chars().count()).max().unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a PropertyMap {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();

        for (key, value) in iter {
            map.add(key, value);
        }

        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_keeps_first_key_position() {
        let map: PropertyMap = vec![
            ("TITLE", "Song"),
            ("ARTIST", "A"),
            ("GENRE", "Rock"),
            ("ARTIST", "B"),
        ]
        .into_iter()
        .collect();

        let keys: Vec<&String> = map.keys().collect();

        assert_eq!(keys, ["TITLE", "ARTIST", "GENRE"]);
        assert_eq!(map.get("ARTIST").unwrap(), ["A", "B"]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn longest_key() {
        let map: PropertyMap = vec![("DATE", "2001"), ("ALBUMARTIST", "X"), ("TITLE", "Y")]
            .into_iter()
            .collect();

        assert_eq!(map.longest_key(), 11);
        assert_eq!(PropertyMap::new().longest_key(), 0);
    }

    #[test]
    fn longest_key_counts_chars() {
        let map: PropertyMap = vec![("ÄÖÜ", "umlauts")].into_iter().collect();

        assert_eq!(map.longest_key(), 3);
    }

    #[test]
    fn missing_key() {
        let map = PropertyMap::new();

        assert!(map.is_empty());
        assert_eq!(map.get("TITLE"), None);
    }
}
