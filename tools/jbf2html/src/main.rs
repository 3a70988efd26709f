use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{error, info};

use jbf2html::{JbfError, OpenOptions, RenderOptions};

const BUILD_VERSION: &str = env!("JBF2HTML_VERSION");
const BUILD_TIME: &str = env!("JBF2HTML_BUILD_TIME");
const DEFAULT_OUTPUT: &str = "index.html";
const USAGE_EXIT: i32 = 64;

fn usage() -> &'static str {
    "jbf2html [-h|-z|-V|-o <file>] input\n\
     \n\
     Transforms Paint Shop Pro 7 jbf files to complete html pages\n\
     with embedded thumbnails.\n\
     \n\
     \x20-h          show this help\n\
     \x20-V          show version\n\
     \x20-z          include entries with 0-byte thumbnails\n\
     \x20            (skipped by default)\n\
     \x20-o <file>   direct output to <file>\n\
     \x20            If not supplied, index.html is used.\n\
     \x20input       jbf file or directory where a jbf file is stored.\n\
     \x20            If none is given, current working directory is\n\
     \x20            searched for a file named pspbrwse.jbf"
}

#[derive(Debug, Default)]
struct Args {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    include_empty_thumbnails: bool,
}

enum Command {
    Help,
    Version,
    Run(Args),
}

fn parse_args(raw: &[String]) -> Result<Command, String> {
    let mut args = Args::default();
    let mut i = 0;
    while i < raw.len() {
        match raw[i].as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "-z" => args.include_empty_thumbnails = true,
            "-o" => {
                i += 1;
                let value = raw.get(i).ok_or("-o requires a file name")?;
                args.output = Some(PathBuf::from(value));
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("unknown option {flag}"));
            }
            value => {
                if args.input.is_none() {
                    args.input = Some(PathBuf::from(value));
                }
            }
        }
        i += 1;
    }
    Ok(Command::Run(args))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let raw = env::args().skip(1).collect::<Vec<_>>();
    let args = match parse_args(&raw) {
        Ok(Command::Help) => {
            println!("{}", usage());
            return;
        }
        Ok(Command::Version) => {
            println!("jbf2html {BUILD_VERSION} ({BUILD_TIME})");
            return;
        }
        Ok(Command::Run(args)) => args,
        Err(message) => {
            eprintln!("error: {message}\n\n{}", usage());
            std::process::exit(USAGE_EXIT);
        }
    };

    if let Err(err) = run(&args) {
        error!("{err}");
        std::process::exit(err.exit_code());
    }
}

fn run(args: &Args) -> Result<(), JbfError> {
    let candidates = jbf2html::candidate_paths(args.input.as_deref());
    let (source, catalog) = jbf2html::open_first(candidates, &OpenOptions::default())?;

    let output = match &args.output {
        Some(path) => path.clone(),
        None => {
            let path = PathBuf::from(DEFAULT_OUTPUT);
            if path.exists() {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("{DEFAULT_OUTPUT} exists"),
                )
                .into());
            }
            path
        }
    };

    let options = RenderOptions {
        include_empty_thumbnails: args.include_empty_thumbnails,
        ..RenderOptions::default()
    };
    let mut out = create_output(&output)?;
    jbf2html::render_html(&mut out, &catalog, &options)?;
    out.flush()?;
    info!("wrote {} from {}", output.display(), source.display());

    jbf2html::close(Some(catalog));
    Ok(())
}

fn create_output(path: &Path) -> Result<BufWriter<File>, JbfError> {
    let file = File::create(path).map_err(|err| {
        io::Error::new(err.kind(), format!("can not open {}: {err}", path.display()))
    })?;
    Ok(BufWriter::new(file))
}
