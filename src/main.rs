use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use quillmark::{render, strip_leading_title};

mod cli;
use cli::{Cli, Commands};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            file,
            strip_title,
            output,
        } => {
            let input = match read_all(file.as_ref()) {
                Ok(content) => content,
                Err(err) => {
                    eprintln!("error: failed to read input: {err}");
                    return ExitCode::FAILURE;
                }
            };

            let body = if strip_title {
                let (title, body) = strip_leading_title(&input);
                if let Some(title) = title {
                    log::debug!("stripped leading title: {title}");
                }
                body.to_string()
            } else {
                input
            };

            let html = render(&body);

            match output {
                Some(path) => {
                    if let Err(err) = fs::write(&path, &html) {
                        eprintln!("error: failed to write {}: {err}", path.display());
                        return ExitCode::FAILURE;
                    }
                }
                None => println!("{html}"),
            }

            ExitCode::SUCCESS
        }
    }
}
