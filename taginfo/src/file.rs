//! Opening files and pulling their metadata out.
//!
//! Everything that touches the tag-reading backend lives behind [`TagReader`] and
//! [`MediaFile`], so that the rest of the program can be driven by fixtures instead of
//! real audio files.

use crate::err::{Error, Result};
use crate::tag::{AudioProperties, BasicTag, PropertyMap};
use log::debug;
use lofty::file::{AudioFile, TaggedFile, TaggedFileExt};
use lofty::tag::{Accessor, ItemKey, ItemValue, Tag, TagType};
use std::borrow::Cow;
use std::convert::TryFrom;
use std::path::Path;

/// Something that can turn a path into a [`MediaFile`].
pub trait TagReader {
    type File: MediaFile;

    fn open(&self, path: &Path) -> Result<Self::File>;
}

/// The metadata of a single opened file.
pub trait MediaFile {
    /// The generic tag of this file. A file that could carry a tag but has none yields an
    /// empty tag, `None` is reserved for formats that can't be tagged at all.
    fn basic_tag(&self) -> Option<BasicTag>;

    /// Every text item of the file's tag, keyed by its property name.
    fn properties(&self) -> PropertyMap;

    /// Stream properties, or `None` if the backend could not determine them.
    fn audio_properties(&self) -> Option<AudioProperties>;

    /// Whether the file contains an ID3v1 or ID3v2 tag.
    fn has_legacy_tag(&self) -> bool;
}

/// A [`TagReader`] backed by lofty.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoftyReader;

impl TagReader for LoftyReader {
    type File = LoftyFile;

    fn open(&self, path: &Path) -> Result<LoftyFile> {
        let metadata = path.metadata()?;

        // Directories aren't supported
        if metadata.is_dir() {
            return Err(Error::IsDirectory);
        }

        let inner = lofty::read_from_path(path)?;

        debug!(
            "{}: opened as {:?} with {} tag(s)",
            path.display(),
            inner.file_type(),
            inner.tags().len()
        );

        Ok(LoftyFile { inner })
    }
}

pub struct LoftyFile {
    inner: TaggedFile,
}

impl LoftyFile {
    /// The tag we read from, which is the format's preferred tag if it exists and
    /// whatever tag comes first otherwise.
    fn tag(&self) -> Option<&Tag> {
        let tag = self
            .inner
            .primary_tag()
            .or_else(|| self.inner.first_tag())?;

        debug!("reading from {:?} tag", tag.tag_type());

        Some(tag)
    }
}

impl MediaFile for LoftyFile {
    fn basic_tag(&self) -> Option<BasicTag> {
        let tag = match self.tag() {
            Some(tag) => tag,
            None if self.inner.supports_tag_type(self.inner.primary_tag_type()) => {
                return Some(BasicTag::default())
            }
            None => return None,
        };

        Some(BasicTag {
            artist: owned(tag.artist()),
            album: owned(tag.album()),
            title: owned(tag.title()),
            year: tag.year().unwrap_or(0),
            genre: owned(tag.genre()),
            track: tag.track().unwrap_or(0),
            comment: owned(tag.comment()),
        })
    }

    fn properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();

        let tag = match self.tag() {
            Some(tag) => tag,
            None => return map,
        };

        for item in tag.items() {
            let value = match item.value() {
                ItemValue::Text(text) | ItemValue::Locator(text) => text,
                ItemValue::Binary(_) => continue,
            };

            map.add(property_name(item.key()), value.as_str());
        }

        map
    }

    fn audio_properties(&self) -> Option<AudioProperties> {
        let props = self.inner.properties();

        // Lofty hands out default properties when it couldn't read any.
        if props.sample_rate().is_none() && props.duration().as_millis() == 0 {
            return None;
        }

        Some(AudioProperties {
            bitrate: props
                .audio_bitrate()
                .or_else(|| props.overall_bitrate())
                .unwrap_or(0),
            sample_rate: props.sample_rate().unwrap_or(0),
            channels: props.channels().map(u32::from).unwrap_or(0),
            length_ms: u64::try_from(props.duration().as_millis()).unwrap_or(u64::MAX),
        })
    }

    fn has_legacy_tag(&self) -> bool {
        self.inner.tag(TagType::Id3v1).is_some() || self.inner.tag(TagType::Id3v2).is_some()
    }
}

fn owned(value: Option<Cow<str>>) -> String {
    value.map(Cow::into_owned).unwrap_or_default()
}

/// Maps an item key to the uppercase property name commonly used for it.
///
/// Unknown items keep the key they were stored under, and anything we don't have a
/// name for falls back to the uppercased key variant.
fn property_name(key: &ItemKey) -> String {
    let name = match key {
        ItemKey::TrackTitle => "TITLE",
        ItemKey::TrackArtist => "ARTIST",
        ItemKey::AlbumTitle => "ALBUM",
        ItemKey::AlbumArtist => "ALBUMARTIST",
        ItemKey::RecordingDate | ItemKey::Year => "DATE",
        ItemKey::TrackNumber => "TRACKNUMBER",
        ItemKey::TrackTotal => "TRACKTOTAL",
        ItemKey::DiscNumber => "DISCNUMBER",
        ItemKey::DiscTotal => "DISCTOTAL",
        ItemKey::Genre => "GENRE",
        ItemKey::Comment => "COMMENT",
        ItemKey::Composer => "COMPOSER",
        ItemKey::Lyrics => "LYRICS",
        ItemKey::EncoderSoftware => "ENCODING",
        ItemKey::Bpm => "BPM",
        ItemKey::Unknown(raw) => return raw.clone(),
        other => return format!("{:?}", other).to_uppercase(),
    };

    String::from(name)
}
