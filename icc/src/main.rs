use clap::Parser;
use color_print::{cformat, cprintln};
use icc::msg::{Loc, Msg};
use icc::source::statements;
use icc::{Assignment, Backend, Compiler, Config, Listing};
use serde::Serialize;
use std::process::ExitCode;
use strum::{Display, EnumString};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, Clone, Copy, PartialEq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
enum Format {
    Text,
    Yaml,
}

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input files
    #[clap(default_value = "main.ops")]
    input: Vec<String>,

    /// Back end to run: quad, triple or pcode (repeatable, overrides the config)
    #[clap(short, long)]
    backend: Vec<Backend>,

    /// YAML config file
    #[clap(short, long)]
    config: Option<String>,

    /// Output format: text or yaml
    #[clap(short, long, default_value = "text")]
    format: Format,

    /// Print the grouping of every statement
    #[clap(short, long)]
    verbose: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    file: String,
    line: usize,
    stmt: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    listings: Vec<Listing>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let text = args.format == Format::Text;

    // 1. Load config
    let mut config = match &args.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                cprintln!("<red,bold>error</>: {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };
    if !args.backend.is_empty() {
        config.backends = args.backend.clone();
    }
    let backends = config.backends.clone();
    let compiler = Compiler::new(config);

    // 2. Read files and compile statement by statement
    let mut reports = Vec::new();
    let mut failed = 0;
    for path in &args.input {
        if text {
            println!("  < {}", path);
        }
        let code = match std::fs::read_to_string(path) {
            Ok(code) => code,
            Err(e) => {
                cprintln!("<red,bold>error</>: Failed to open file: {}: {}", path, e);
                failed += 1;
                continue;
            }
        };

        let stmts = statements(&code);
        if stmts.is_empty() && text {
            Msg::Warn("No statements found".to_string())
                .diag(&Loc { file: path, line: 0, raw: "", col: None });
        }

        for (idx, stmt) in stmts.iter().enumerate() {
            let assign = Assignment::parse(&stmt.text);
            if text {
                cprintln!("<bold>Statement {}</>: {}", idx + 1, stmt.text);
                if args.verbose {
                    if let Ok(tree) = compiler.tree(&assign.rhs) {
                        println!("  grouping: {}", tree.grouping());
                    }
                }
            }

            let mut report = Report {
                file: path.clone(),
                line: stmt.line + 1,
                stmt: stmt.text.clone(),
                listings: Vec::new(),
                errors: Vec::new(),
            };
            let loc = Loc {
                file: path,
                line: stmt.line,
                raw: &stmt.text,
                col: None,
            };
            match compiler.compile_each(&assign, &backends) {
                Ok(results) => {
                    for result in results {
                        match result {
                            Ok(listing) => {
                                if text {
                                    print_listing(&listing, args.verbose);
                                }
                                report.listings.push(listing);
                            }
                            Err(e) => {
                                if text {
                                    Msg::Error(e.to_string()).diag(&loc);
                                }
                                report.errors.push(format!("{}: {}", e.kind(), e));
                            }
                        }
                    }
                    if !report.errors.is_empty() {
                        failed += 1;
                    }
                }
                Err(e) => {
                    failed += 1;
                    if text {
                        let col = e.column().map(|col| col + assign.offset);
                        Msg::Error(e.to_string()).diag(&Loc { col, ..loc });
                        Msg::Note(format!("{}: statement skipped", e.kind())).diag(&loc);
                    }
                    report.errors.push(format!("{}: {}", e.kind(), e));
                }
            }
            if text {
                println!();
            }
            reports.push(report);
        }
    }

    // 3. Emit machine readable output
    if args.format == Format::Yaml {
        match serde_yaml::to_string(&reports) {
            Ok(yaml) => print!("{}", yaml),
            Err(e) => {
                cprintln!("<red,bold>error</>: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    if failed > 0 {
        if text {
            cprintln!("<red,bold>{} statement(s) failed</>", failed);
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_listing(listing: &Listing, verbose: bool) {
    println!("  {}", cformat!("<u>{}</>", listing.backend()));
    let rows = if verbose {
        listing.cformat()
    } else {
        listing.lines()
    };
    for row in rows {
        println!("    {}", row);
    }
}
