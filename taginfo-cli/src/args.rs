use clap::{App, AppSettings, Arg};
use std::error;
use std::ffi::OsString;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use termcolor::ColorChoice;

/// The report sections that can be printed for each file.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Sections {
    pub audio: bool,
    pub basic: bool,
    pub codec: bool,
}

#[derive(Debug)]
pub struct Options {
    pub sections: Sections,
    pub legacy_genre: bool,
    pub keep_going: bool,
    pub color: ColorChoice,
    pub paths: Vec<PathBuf>,
}

#[derive(Debug)]
pub enum ArgsError {
    /// Usage errors, but also help and version requests. `clap::Error::use_stderr` tells
    /// them apart.
    Clap(clap::Error),
    NoInput,
}

impl Display for ArgsError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            // clap leads with its own "error: " prefix, which we replace with ours.
            Self::Clap(err) => {
                let msg = err.message.trim_end();
                write![f, "{}", msg.strip_prefix("error: ").unwrap_or(msg)]
            }
            Self::NoInput => write![f, "no input file given"],
        }
    }
}

impl error::Error for ArgsError {
    // Nothing to implement
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("taginfo")
        .version(env!("CARGO_PKG_VERSION"))
        .version_short("v")
        .about("Print the tags and audio properties of music files")
        .setting(AppSettings::ColorNever)
        .arg(
            Arg::with_name("audio")
                .short("a")
                .long("audio")
                .help("Show audio stream info"),
        )
        .arg(
            Arg::with_name("basic")
                .short("b")
                .long("basic")
                .help("Show basic tag info"),
        )
        .arg(
            Arg::with_name("codec")
                .short("c")
                .long("codec")
                .help("Show codec specific tag info (default)"),
        )
        .arg(
            Arg::with_name("legacy-genre")
                .short("l")
                .long("legacy-genre")
                .help("Show genres of ID3 tagged files with their legacy spelling"),
        )
        .arg(
            Arg::with_name("keep-going")
                .short("k")
                .long("keep-going")
                .help("Continue with the next file when a file fails"),
        )
        .arg(
            Arg::with_name("color")
                .long("color")
                .value_name("WHEN")
                .possible_values(&["auto", "always", "never"])
                .default_value("auto")
                .help("When to color the output"),
        )
        .arg(Arg::with_name("files").value_name("FILE").multiple(true))
}

pub fn parse<I, T>(args: I) -> Result<Options, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = app().get_matches_from_safe(args).map_err(ArgsError::Clap)?;

    let paths: Vec<PathBuf> = match matches.values_of_os("files") {
        Some(files) => files.map(PathBuf::from).collect(),
        None => Vec::new(),
    };

    if paths.is_empty() {
        return Err(ArgsError::NoInput);
    }

    let mut sections = Sections {
        audio: matches.is_present("audio"),
        basic: matches.is_present("basic"),
        codec: matches.is_present("codec"),
    };

    // Codec tags are what most people want to see.
    if sections == Sections::default() {
        sections.codec = true;
    }

    let color = match matches.value_of("color") {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    };

    Ok(Options {
        sections,
        legacy_genre: matches.is_present("legacy-genre"),
        keep_going: matches.is_present("keep-going"),
        color,
        paths,
    })
}
