use std::fmt::Display;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, WriteColor};

/// Narrows `ColorChoice::Auto` down to `Never` when the output isn't a terminal.
///
/// termcolor only looks at `TERM` and `NO_COLOR` on its own, which would leave escape
/// codes in piped output.
pub fn resolve_color(choice: ColorChoice, is_terminal: bool) -> ColorChoice {
    match choice {
        ColorChoice::Auto if !is_terminal => ColorChoice::Never,
        choice => choice,
    }
}

/// Resolves the color choice of stdout and stderr separately, since either one may be
/// redirected while the other stays on a terminal.
pub fn stream_colors(
    choice: ColorChoice,
    stdout_is_terminal: bool,
    stderr_is_terminal: bool,
) -> (ColorChoice, ColorChoice) {
    (
        resolve_color(choice, stdout_is_terminal),
        resolve_color(choice, stderr_is_terminal),
    )
}

/// Writes the `## name ###` line that separates the reports of multiple files.
pub fn write_header<W: WriteColor>(out: &mut W, name: &str) -> io::Result<()> {
    out.set_color(
        ColorSpec::new()
            .set_bold(true)
            .set_intense(true)
            .set_fg(Some(Color::Blue)),
    )?;

    write![out, "## {} ###", name]?;
    out.reset()?;
    writeln![out]
}

/// Writes a section heading, underlined and preceded by a blank line.
pub fn write_heading<W: WriteColor>(out: &mut W, title: &str) -> io::Result<()> {
    writeln![out]?;

    out.set_color(ColorSpec::new().set_bold(true))?;
    write![out, "{}", title]?;
    out.reset()?;

    writeln![out]?;
    writeln![out, "{}", "=".repeat(title.chars().count())]
}

/// Writes the `name : ` part of an entry, with the name padded to `width` characters.
pub fn write_entry<W: WriteColor>(out: &mut W, name: &str, width: usize) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write![out, "{:<w$}", name, w = width]?;
    out.reset()?;

    write![out, " : "]
}

pub fn write_error<W: WriteColor>(out: &mut W, err: &dyn Display) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write![out, "ERROR"]?;
    out.reset()?;

    writeln![out, ": {}", err]?;
    out.flush()
}

#[macro_export]
macro_rules! errorln {
    ($choice:expr, $($arg:tt)+) => {
        let mut stderr = termcolor::StandardStream::stderr($choice);

        // Nowhere left to report a failure to write to stderr.
        $crate::stdout::write_error(&mut stderr, &format_args![$($arg)+]).ok();
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::Buffer;

    fn render<F: FnOnce(&mut Buffer) -> io::Result<()>>(f: F) -> String {
        let mut buf = Buffer::no_color();
        f(&mut buf).unwrap();
        String::from_utf8(buf.into_inner()).unwrap()
    }

    #[test]
    fn header() {
        assert_eq!(render(|out| write_header(out, "a.mp3")), "## a.mp3 ###\n");
    }

    #[test]
    fn heading() {
        assert_eq!(
            render(|out| write_heading(out, "basic tags")),
            "\nbasic tags\n==========\n"
        );
    }

    #[test]
    fn entry_padding() {
        assert_eq!(render(|out| write_entry(out, "year", 10)), "year       : ");
        assert_eq!(render(|out| write_entry(out, "sample rate", 11)), "sample rate : ");
    }

    #[test]
    fn entry_wider_than_width() {
        assert_eq!(render(|out| write_entry(out, "LONGKEY", 3)), "LONGKEY : ");
    }

    #[test]
    fn error_prefix() {
        assert_eq!(
            render(|out| write_error(out, &"cannot read basic tags")),
            "ERROR: cannot read basic tags\n"
        );
    }

    #[test]
    fn colored_output_has_same_text() {
        let mut buf = Buffer::ansi();
        write_header(&mut buf, "a.mp3").unwrap();
        let text = String::from_utf8(buf.into_inner()).unwrap();

        assert!(text.contains("## a.mp3 ###"));
        assert!(text.starts_with('\x1b'));
    }

    #[test]
    fn resolve_auto() {
        assert_eq!(resolve_color(ColorChoice::Auto, false), ColorChoice::Never);
        assert_eq!(resolve_color(ColorChoice::Auto, true), ColorChoice::Auto);
        assert_eq!(resolve_color(ColorChoice::Always, false), ColorChoice::Always);
        assert_eq!(resolve_color(ColorChoice::Never, true), ColorChoice::Never);
    }

    #[test]
    fn resolve_streams_separately() {
        assert_eq!(
            stream_colors(ColorChoice::Auto, false, true),
            (ColorChoice::Never, ColorChoice::Auto)
        );
        assert_eq!(
            stream_colors(ColorChoice::Auto, true, false),
            (ColorChoice::Auto, ColorChoice::Never)
        );
        assert_eq!(
            stream_colors(ColorChoice::Always, false, false),
            (ColorChoice::Always, ColorChoice::Always)
        );
    }
}
