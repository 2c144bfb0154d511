#![forbid(unsafe_code)]

mod args;
mod logger;
mod show;
mod stdout;
mod time;

use args::ArgsError;
use logger::PedanticLogger;
use std::env;
use std::io::{self, IsTerminal};
use std::process;
use taginfo::LoftyReader;
use termcolor::{ColorChoice, StandardStream};

fn main() {
    PedanticLogger::setup();

    let options = match args::parse(env::args_os()) {
        Ok(options) => options,
        // Help and version go to stdout and exit successfully.
        Err(ArgsError::Clap(ref err)) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let color = stdout::resolve_color(ColorChoice::Auto, io::stderr().is_terminal());
            errorln!(color, "{}", err);
            process::exit(1);
        }
    };

    let (out_color, err_color) = stdout::stream_colors(
        options.color,
        io::stdout().is_terminal(),
        io::stderr().is_terminal(),
    );

    let mut out = StandardStream::stdout(out_color);
    let mut err = StandardStream::stderr(err_color);

    if let Err(show_err) = show::show(&LoftyReader, &options, &mut out, &mut err) {
        errorln!(err_color, "{}", show_err);
        process::exit(1);
    }
}
