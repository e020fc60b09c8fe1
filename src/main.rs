extern crate docopt;
#[macro_use]
extern crate serde_derive;
extern crate textune;
extern crate tracing;
extern crate tracing_subscriber;

use std::fs;
use std::io::{self, Write};
use std::process;

use docopt::Docopt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use textune::{
    dur_to_millis, make_sinks, simulate, unique_filename, Config, Error, Journal, Playback, Session,
};

const USAGE: &str = "
Textune.

Turns any text file into a performance.

Usage:
  textune [options] <file>
  textune (-h | --help)
  textune --version

Options:
  -h --help          Show this screen.
  --version          Show version.
  --config=FILE      Read settings from a JSON file.
  --sink=NAMES       Where to send messages: 'console', 'null' or 'memory',
                     or several separated by commas.
  --realtime         Send messages at their scheduled time.
  --json             Print the rendered events as JSON instead of playing.
  --journal          Write every event to a textune.log file.
  --seed=N           Seed for random notes and instruments.
";

#[derive(Debug, Deserialize)]
struct Args {
    flag_config: Option<String>,
    flag_sink: String,
    flag_realtime: bool,
    flag_json: bool,
    flag_journal: bool,
    flag_seed: Option<u64>,
    arg_file: String,
}

fn run_app(args: &Args) -> Result<(), Error> {
    let mut config = match args.flag_config {
        Some(ref path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if args.flag_seed.is_some() {
        config.seed = args.flag_seed;
    }

    if args.flag_json {
        let txt = fs::read_to_string(&args.arg_file)?;
        println!("{}", simulate(&txt, &config)?);
        return Ok(());
    }

    let resolution = config.resolution;
    let mut session = Session::new(config);
    let res = session.read_from(fs::File::open(&args.arg_file)?);
    let timeline = session.finish();
    res?;

    info!(
        "rendered {} events, {} dropped, ending at tick {}",
        timeline.len(),
        timeline.dropped(),
        timeline.cursor()
    );

    if args.flag_journal {
        let file = fs::File::create(unique_filename("textune.log"))?;
        Journal::new(io::BufWriter::new(file)).log_timeline(&timeline)?;
    }

    let mut sink = make_sinks(&args.flag_sink)?;
    let mut playback = Playback::new(&timeline, resolution);
    info!(
        "playing {}ms to {}",
        dur_to_millis(playback.duration()),
        sink.name()
    );
    playback.run(&mut *sink, args.flag_realtime);
    Ok(())
}

fn main() {
    let args: Args = Docopt::new(USAGE)
        .and_then(|d| d.version(Some(String::from("v0.1.0"))).deserialize())
        .unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let code = match run_app(&args) {
        Ok(_) => 0,
        Err(err) => {
            writeln!(io::stderr(), "Error: {}", err).unwrap();
            1
        }
    };

    process::exit(code);
}
