use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use markdown2html_config::Config;
use markdown2html_engine::conformance::{self, ConformanceReport, ConformanceRunner};
use markdown2html_engine::{MarkdownEngine, io};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "markdown2html")]
#[command(about = "Convert Markdown to HTML and check it against CommonMark examples")]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to use instead of ~/.config/markdown2html/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a Markdown file to HTML
    Convert {
        /// Markdown file to convert
        input: PathBuf,

        /// Output file (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write next to the input, using the configured extension
        #[arg(long, conflicts_with = "output")]
        in_place: bool,
    },
    /// Run CommonMark JSON examples and report pass rates
    Conformance {
        /// JSON test cases (defaults to the configured spec_tests_path)
        #[arg(long)]
        tests: Option<PathBuf>,

        /// Run a single example and show its output
        #[arg(long)]
        example: Option<u32>,

        /// Only run examples from this section
        #[arg(long)]
        section: Option<String>,

        /// Write myout{N}/out{N} files into this directory
        #[arg(long)]
        debug_dir: Option<PathBuf>,
    },
    /// Write a config file holding the default settings
    InitConfig {
        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("config file not found: {}", path.display()))?,
        None => Config::load_or_default()?,
    };
    log::debug!("using config: {config:?}");
    Ok(config)
}

fn init_config(path: PathBuf, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "config file already exists: {} (use --force to replace it)",
            path.display()
        );
    }
    Config::default().save_to_path(&path)?;
    println!("wrote {}", path.display());
    Ok(())
}

fn convert(
    engine: &MarkdownEngine,
    config: &Config,
    input: PathBuf,
    output: Option<PathBuf>,
    in_place: bool,
) -> Result<()> {
    let markdown = io::read_markdown(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let html = engine.markdown_to_html(&markdown);

    let output = if in_place {
        Some(io::default_output_path(&input, &config.output_extension))
    } else {
        output
    };
    match output {
        Some(path) => {
            io::write_html(&path, &html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => print!("{html}"),
    }
    Ok(())
}

fn print_report(report: &ConformanceReport) {
    for (section, (passed, total)) in report.by_section() {
        println!("{section}: {passed}/{total}");
    }
    println!(
        "passed {}/{} examples ({} failed)",
        report.passed(),
        report.total(),
        report.failed()
    );
}

fn run_conformance(
    engine: &MarkdownEngine,
    config: &Config,
    tests: Option<PathBuf>,
    example: Option<u32>,
    section: Option<String>,
    debug_dir: Option<PathBuf>,
) -> Result<()> {
    let tests = tests.unwrap_or_else(|| config.spec_tests_path.clone());
    let cases = conformance::load_cases(&tests)?;
    log::info!("loaded {} examples from {}", cases.len(), tests.display());

    let mut runner = ConformanceRunner::new(engine);
    if let Some(dir) = debug_dir.or_else(|| config.debug_output_dir.clone()) {
        runner = runner.with_debug_dir(dir);
    }

    if let Some(example) = example {
        let outcome = runner.run_example(&cases, example)?;
        println!("example {} ({})", outcome.example, outcome.section);
        println!("--- expected\n{}", outcome.expected);
        println!("--- actual\n{}", outcome.actual);
        if !outcome.passed {
            bail!("example {example} failed");
        }
        println!("pass");
        return Ok(());
    }

    let report = runner.run(&cases, section.as_deref())?;
    if report.total() == 0 {
        bail!("no examples matched");
    }
    for failure in report.failures() {
        log::debug!("example {} failed", failure.example);
    }
    print_report(&report);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let engine = MarkdownEngine::standard();
    match cli.command {
        Command::Convert {
            input,
            output,
            in_place,
        } => {
            let config = load_config(cli.config.as_ref())?;
            convert(&engine, &config, input, output, in_place)
        }
        Command::Conformance {
            tests,
            example,
            section,
            debug_dir,
        } => {
            let config = load_config(cli.config.as_ref())?;
            run_conformance(&engine, &config, tests, example, section, debug_dir)
        }
        Command::InitConfig { force } => {
            init_config(cli.config.unwrap_or_else(Config::default_path), force)
        }
    }
}
