extern crate messbook as lib;

use flexi_logger::{FileSpec, Logger};
use lib::config;
use lib::context::Context;
use lib::events::Dispatcher;
use lib::ui::App;
use nix::sys::termios;
use std::io::{stdout, Write};
use std::path::PathBuf;
use structopt::StructOpt;
use termion::raw::IntoRawMode;
use termion::screen::AlternateScreen;

#[derive(Debug, StructOpt)]
#[structopt(name = "mb", about = "Messbook - a TUI dinner register.")]
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
        help = "only show the current month non-interactively"
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

    let config = config::load_suitable_config(args.configfile.as_deref())?;
    let context = Context::new(&config);

    if args.show {
        let mut stdout = stdout().into_raw_mode()?;
        let app = App::new(&config, context);

        app.draw(&mut stdout)?;
        write!(stdout, "{}", termion::cursor::Goto(1, 17))?;

        return Ok(());
    }

    const STDOUT_FD: std::os::unix::io::RawFd = 1;
    let orig_attr = std::sync::Mutex::new(
        termios::tcgetattr(STDOUT_FD).expect("Failed to get terminal attributes"),
    );

    std::panic::set_hook(Box::new(move |info| {
        // Switch to main terminal screen
        println!("{}{}", termion::screen::ToMainScreen, termion::cursor::Show);

        let _ = termios::tcsetattr(
            STDOUT_FD,
            termios::SetArg::TCSANOW,
            &orig_attr.lock().unwrap(),
        );

        println!("Messbook ran into a fatal error!");
        println!("{}", info);
        println!("{:?}", backtrace::Backtrace::new());
    }));

    let dispatcher = Dispatcher::from_config(&config);

    let stdout = stdout().into_raw_mode()?;
    let mut screen = AlternateScreen::from(stdout);
    write!(screen, "{}", termion::cursor::Hide)?;

    let mut app = App::new(&config, context);
    let result = app.run(dispatcher, &mut screen);

    write!(screen, "{}", termion::cursor::Show)?;

    result
}
