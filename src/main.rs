use clap::CommandFactory;
use clap::Parser;
use env_logger::{Builder, Env, Target};
use log::info;
use mpgrep::cli::Cli;
use mpgrep::error::{MpgrepError, Result as MpgrepResult};
use mpgrep::options::Invocation;
use mpgrep::scanner::Scanner;
use std::fs;
use std::io::{self, Write};

fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "mpgrep", &mut io::stdout());
        return;
    }

    if let Err(e) = setup_logging(&cli) {
        eprintln!("mpgrep: {e}");
    }

    let code = match run(&cli) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(MpgrepError::Usage) => {
            eprintln!("{}", MpgrepError::Usage);
            2
        }
        Err(e) => {
            if !cli.no_messages {
                eprintln!("mpgrep: {e}");
            }
            1
        }
    };
    std::process::exit(code);
}

/// Resolves the invocation, compiles patterns and runs the scan. Returns
/// whether every file was scanned without error.
fn run(cli: &Cli) -> MpgrepResult<bool> {
    let invocation = Invocation::from_cli(cli)?;
    info!(
        "scanning {} file(s) with {} pattern(s)",
        invocation.filenames.len(),
        invocation.patterns.len()
    );
    let scanner = Scanner::new(&invocation)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stderr = io::stderr();
    let mut err = stderr.lock();
    let summary = scanner.run(&mut out, &mut err)?;
    out.flush()?;
    Ok(summary.is_success())
}

/// Logging is diagnostic-only and defaults to errors so it never leaks
/// into the stderr contract; `RUST_LOG` raises the filter, `--log`
/// redirects it to a file.
fn setup_logging(cli: &Cli) -> MpgrepResult<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("error"));

    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    });

    if let Some(log_path) = &cli.log {
        if let Some(parent_dir) = log_path.parent() {
            if !parent_dir.exists() {
                fs::create_dir_all(parent_dir).map_err(MpgrepError::Io)?;
            }
        }
        let log_file = fs::File::create(log_path).map_err(MpgrepError::Io)?;
        builder.target(Target::Pipe(Box::new(log_file)));
    } else {
        builder.target(Target::Stderr);
    }

    builder
        .try_init()
        .map_err(|e| MpgrepError::Other(e.to_string()))?;
    Ok(())
}
