use env_logger::Env;
use favicon_gen::{Error, FaviconGenerator};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let project_root = match env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("Failed to determine the project root: {err}");
            return ExitCode::FAILURE;
        }
    };

    match FaviconGenerator::new(project_root).generate(|written| println!("{written}")) {
        Ok(_) => {
            println!(
                "\nDone. Add these files to your repo and refresh your browser to see the new favicon."
            );
            ExitCode::SUCCESS
        }
        Err(err @ Error::MissingSource { .. }) => {
            println!("{err}");
            ExitCode::from(1)
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
