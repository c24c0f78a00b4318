use std::{
    fs::read_to_string,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    rc::Rc,
    time::Instant,
};

use anyhow::Context;
use clap::Parser;
use ifwhile::{
    compiler::compiler::Compiler, display_error, lexer::lexer::tokenize, parser::parser::parse,
    report_error, Config,
};

/// Parse if/while expressions and print their lowered form
#[derive(Debug, Parser)]
#[command(name = "ifwhile", author, version)]
struct Args {
    /// Source file to read; stdin when omitted
    file: Option<PathBuf>,

    /// Parse `name(args)` as a call instead of a variable followed by a group
    #[arg(long)]
    calls: bool,

    /// Render calls as `callee(args)` instead of nothing
    #[arg(long)]
    stitch_calls: bool,

    /// Show the offending source line under each error
    #[arg(long)]
    context: bool,

    /// Enable verbose logging
    #[arg(short = 'V', long)]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(io::stderr)
        .init();

    let config = Config {
        call_expressions: args.calls,
        stitch_calls: args.stitch_calls,
    };

    let (file_name, source) = match &args.file {
        Some(path) => {
            let source = read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            (name, source)
        }
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("failed to read stdin")?;
            (String::from("shell"), source)
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => {
            emit(&error, &source, args.context);
            return Ok(ExitCode::FAILURE);
        }
    };

    tracing::debug!("tokenized in {:?}", start.elapsed());

    let (_, items) = parse(tokens, Rc::new(file_name), config);
    let compiler = Compiler::new(config);
    let mut failed = false;

    for item in items {
        match item {
            Ok(expr) => println!("{}", compiler.lower(&expr)),
            Err(error) => {
                emit(&error, &source, args.context);
                failed = true;
            }
        }
    }

    tracing::debug!("finished in {:?}", start.elapsed());

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn emit(error: &ifwhile::errors::errors::Error, source: &str, context: bool) {
    if context {
        eprintln!("{}", display_error(error, source));
    } else {
        report_error(error);
    }
}
