use crate::args::Options;
use crate::stdout;
use crate::time::Clock;

use log::debug;
use std::error;
use std::fmt::{self, Display, Formatter};
use std::io::{self, Write};
use std::path::Path;
use taginfo::{genre, MediaFile, TagReader};
use termcolor::WriteColor;

/// Width of the names in the basic tag section, i.e "comment" plus padding.
const BASIC_WIDTH: usize = 10;

/// Width of the names in the audio section, i.e "sample rate".
const AUDIO_WIDTH: usize = 11;

/// Durations are printed as two-digit hours.
const MAX_HOURS: u64 = 99;

#[derive(Debug)]
pub enum ShowError {
    Unreadable(String),
    NoBasicTags,
    NoAudioProperties,
    DurationOverflow(u64),
    Incomplete { failed: usize, total: usize },
    IoError(io::Error),
}

impl Display for ShowError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Unreadable(path) => write![f, "file \"{}\" is not readable", path],
            Self::NoBasicTags => write![f, "cannot read basic tags"],
            Self::NoAudioProperties => write![f, "cannot read audio properties"],
            Self::DurationOverflow(hours) => {
                write![f, "duration of {} hours exceeds {} hours", hours, MAX_HOURS]
            }
            Self::Incomplete { failed, total } => {
                write![f, "{} of {} files could not be shown", failed, total]
            }
            Self::IoError(err) => write![f, "{}", err],
        }
    }
}

impl error::Error for ShowError {
    // Nothing to implement
}

impl From<io::Error> for ShowError {
    fn from(other: io::Error) -> Self {
        Self::IoError(other)
    }
}

pub type ShowResult = Result<(), ShowError>;

/// Prints the report of every file in `options`, in order.
///
/// The first failing file ends the run and its error is returned. With `keep_going`,
/// failures are written to `err` as they happen and the run only fails at the end.
pub fn show<R, O, E>(reader: &R, options: &Options, out: &mut O, err: &mut E) -> ShowResult
where
    R: TagReader,
    O: WriteColor,
    E: WriteColor,
{
    let mut failed = 0;
    let mut printed = false;

    for path in &options.paths {
        if let Err(file_err) = show_file(reader, path, &mut printed, options, out) {
            if !options.keep_going {
                return Err(file_err);
            }

            stdout::write_error(err, &file_err)?;
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(ShowError::Incomplete {
            failed,
            total: options.paths.len(),
        });
    }

    Ok(())
}

/// Prints the report of a single file. `printed` tracks whether an earlier report made
/// it to `out`, which is what the header separator depends on.
fn show_file<R, W>(
    reader: &R,
    path: &Path,
    printed: &mut bool,
    options: &Options,
    out: &mut W,
) -> ShowResult
where
    R: TagReader,
    W: WriteColor,
{
    let file = reader.open(path).map_err(|err| {
        debug!("{}: {}", path.display(), err);
        ShowError::Unreadable(path.display().to_string())
    })?;

    if options.paths.len() > 1 {
        if *printed {
            write![out, "\n\n"]?;
        }

        stdout::write_header(out, &file_name(path))?;
    }

    *printed = true;

    let legacy_genre = options.legacy_genre && file.has_legacy_tag();

    if options.sections.basic {
        show_basic(&file, legacy_genre, out)?;
    }

    if options.sections.codec {
        show_codec(&file, legacy_genre, out)?;
    }

    if options.sections.audio {
        show_audio(&file, out)?;
    }

    out.flush()?;

    Ok(())
}

fn show_basic<F: MediaFile, W: WriteColor>(file: &F, legacy_genre: bool, out: &mut W) -> ShowResult {
    let tag = file.basic_tag().ok_or(ShowError::NoBasicTags)?;

    let shown_genre = if legacy_genre {
        genre::to_legacy(&tag.genre)
    } else {
        tag.genre.as_str()
    };

    let year = zero_padded(tag.year, 4);
    let track = zero_padded(tag.track, 3);

    let entries = [
        ("artist", tag.artist.as_str()),
        ("album", tag.album.as_str()),
        ("title", tag.title.as_str()),
        ("year", year.as_str()),
        ("genre", shown_genre),
        ("track", track.as_str()),
        ("comment", tag.comment.as_str()),
    ];

    stdout::write_heading(out, "basic tags")?;

    for (name, value) in entries.iter() {
        stdout::write_entry(out, name, BASIC_WIDTH)?;
        writeln![out, "\"{}\"", value]?;
    }

    Ok(())
}

fn show_codec<F: MediaFile, W: WriteColor>(file: &F, legacy_genre: bool, out: &mut W) -> ShowResult {
    let properties = file.properties();

    stdout::write_heading(out, "codec specific tags")?;

    if properties.is_empty() {
        writeln![out, "no tags found in audio file"]?;
        return Ok(());
    }

    let width = properties.longest_key();

    for (key, values) in &properties {
        for value in values {
            let value = if legacy_genre && key == "GENRE" {
                genre::to_legacy(value)
            } else {
                value.as_str()
            };

            stdout::write_entry(out, key, width)?;
            writeln![out, "\"{}\"", value]?;
        }
    }

    Ok(())
}

fn show_audio<F: MediaFile, W: WriteColor>(file: &F, out: &mut W) -> ShowResult {
    let props = file.audio_properties().ok_or(ShowError::NoAudioProperties)?;

    let exact = Clock::from_millis(props.length_ms);
    let rounded = exact.rounded();

    if rounded.hours() > MAX_HOURS {
        return Err(ShowError::DurationOverflow(rounded.hours()));
    }

    stdout::write_heading(out, "audio stream info")?;

    stdout::write_entry(out, "bitrate", AUDIO_WIDTH)?;
    writeln![out, "{} kb/s", props.bitrate]?;

    stdout::write_entry(out, "sample rate", AUDIO_WIDTH)?;
    writeln![out, "{} Hz", props.sample_rate]?;

    stdout::write_entry(out, "channels", AUDIO_WIDTH)?;
    writeln![out, "{}", props.channels]?;

    stdout::write_entry(out, "duration", AUDIO_WIDTH)?;
    writeln![out, "{} ({})", rounded.hms(), exact.hms_millis()]?;

    Ok(())
}

/// Zero-pads `value` to `width` digits, with an unset value of 0 becoming empty.
fn zero_padded(value: u32, width: usize) -> String {
    if value == 0 {
        return String::new();
    }

    format!["{:0w$}", value, w = width]
}

fn file_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}
