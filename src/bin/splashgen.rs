//! Splashgen CLI binary

use clap::Parser;
use splashgen::exit_codes::{
    EXIT_DESCRIPTOR_ERROR, EXIT_ERROR, EXIT_GENERATION_ERROR, EXIT_IO_ERROR, EXIT_PANIC,
    EXIT_PRECONDITION_ERROR, EXIT_REGISTRY_ERROR, EXIT_SUCCESS,
};
use splashgen::{Settings, SplashError, generate_splashes};
use std::{env, panic, process};

const VERSION: &str = splashgen::version::VERSION;

#[derive(Parser, Debug)]
#[command(
    version = VERSION,
    about = "Generate cordova splashscreens from a single source image"
)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    // Set up panic handler to return specific exit code
    panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC: {}", panic_info);
        process::exit(EXIT_PANIC);
    }));

    let result = panic::catch_unwind(run);

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(_) => {
            eprintln!("Fatal: Unhandled panic in splashgen");
            process::exit(EXIT_PANIC);
        }
    }
}

fn run() -> i32 {
    // Handle --version before clap to include build information
    if env::args().nth(1).as_deref() == Some("--version") {
        println!("splashgen {}", splashgen::version::full_version());
        return EXIT_SUCCESS;
    }

    let args = Args::parse();

    if let Some(ref level) = args.log_level {
        splashgen::logger::init_with_level(level);
    } else {
        splashgen::logger::init();
    }

    // The tool always runs against the current working directory, the same
    // contract as 'cordova platform add'
    let settings = Settings::default();

    match generate_splashes(&settings) {
        Ok(summary) => {
            println!();
            if summary.failed() > 0 {
                eprintln!(
                    "{} of {} splashscreens failed",
                    summary.failed(),
                    summary.failed() + summary.generated()
                );
                EXIT_GENERATION_ERROR
            } else {
                EXIT_SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            match e {
                SplashError::MissingPlatform
                | SplashError::MissingSourceImage(_)
                | SplashError::MissingDescriptor(_) => EXIT_PRECONDITION_ERROR,
                SplashError::DescriptorParse(_) | SplashError::MissingNameField => {
                    EXIT_DESCRIPTOR_ERROR
                }
                SplashError::Registry(_) => EXIT_REGISTRY_ERROR,
                SplashError::Resize { .. } => EXIT_GENERATION_ERROR,
                SplashError::Io(_) => EXIT_IO_ERROR,
                SplashError::Generic(_) => EXIT_ERROR,
            }
        }
    }
}
