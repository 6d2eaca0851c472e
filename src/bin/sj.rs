extern crate sojourn as lib;

use flexi_logger::{FileSpec, Logger};
use lib::events::Dispatcher;
use lib::ui::App;
use nix::sys::termios;
use std::io::stdout;
use std::path::PathBuf;
use structopt::StructOpt;
use unsegen::base::Terminal;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "sj",
    author = "Julian Bigge <j.reedts@gmail.com>",
    about = "Sojourn - a check-in/check-out date picker for the terminal."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(
        short = "s",
        long = "show",
        help = "only show calendar non-interactively"
    )]
    pub show: bool,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &'static str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    logger.start()?;

    const STDIN: std::os::unix::io::RawFd = 0;
    let orig_attr = std::sync::Mutex::new(
        termios::tcgetattr(STDIN).expect("Failed to get terminal attributes"),
    );

    std::panic::set_hook(Box::new(move |info| {
        // Switch to main terminal screen
        println!("{}{}", termion::screen::ToMainScreen, termion::cursor::Show);

        let _ = termios::tcsetattr(STDIN, termios::SetArg::TCSANOW, &orig_attr.lock().unwrap());

        println!("Sojourn ran into a fatal error!");
        println!(
            "Consider filing an issue with a log file and the backtrace below at {}",
            env!("CARGO_PKG_REPOSITORY")
        );

        println!("{}", info);
        println!("{:?}", backtrace::Backtrace::new());
    }));

    let config = lib::config::load_suitable_config(args.configfile.as_deref())?;

    let dispatcher = Dispatcher::from_config(&config);

    // Setup unsegen terminal
    let stdout = stdout();
    let term = Terminal::new(stdout.lock())?;

    let mut app = App::new(&config);

    if args.show {
        app.render_once(term)
    } else {
        app.run(dispatcher, term)
    }
}
