use clap::Parser;
use hotsheet::{CheatSheetGenerator, Orientation, PaperSize, PipelineError, SheetParser};
use std::path::PathBuf;
use std::process::ExitCode;

/// Generate a cheat sheet PDF from a hotkey definition file.
#[derive(Parser, Debug)]
#[command(name = "hotsheet", version, about, long_about = None)]
struct Args {
    /// Hotkey definition file (YAML, or JSON with a .json extension)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output PDF path (default: the input path with a .pdf extension)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Only validate the input file
    #[arg(short, long)]
    validate: bool,

    /// Print the estimated number of pages and exit
    #[arg(short, long)]
    estimate_pages: bool,

    /// Paper size: letter or a4
    #[arg(short, long, value_name = "SIZE")]
    paper_size: Option<PaperSize>,

    /// Page orientation: portrait or landscape
    #[arg(short = 'r', long, value_name = "ORIENTATION")]
    orientation: Option<Orientation>,

    /// Fill the top half of each page first (two rows of columns)
    #[arg(short = 't', long)]
    fill_top_half: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode, PipelineError> {
    let problems = SheetParser::validate_file(&args.input)?;
    if !problems.is_empty() {
        eprintln!("Input validation errors:");
        for problem in &problems {
            eprintln!("  - {}", problem);
        }
        return Ok(ExitCode::FAILURE);
    }

    if args.validate {
        println!("✓ Input file is valid");
        return Ok(ExitCode::SUCCESS);
    }

    let mut sheet = SheetParser::parse_file(&args.input)?;
    if let Some(paper_size) = args.paper_size {
        sheet.config.paper_size = paper_size;
    }
    if let Some(orientation) = args.orientation {
        sheet.config.orientation = orientation;
    }
    if args.fill_top_half {
        sheet.config.fill_top_half = true;
    }

    println!(
        "Parsed {} hotkeys from {}",
        sheet.hotkeys.len(),
        args.input.display()
    );

    let generator = CheatSheetGenerator::new(&sheet)?;
    if args.estimate_pages {
        println!("Estimated pages: {}", generator.estimate_pages());
        return Ok(ExitCode::SUCCESS);
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("pdf"));
    let report = generator.generate(&output)?;

    println!("✓ Generated cheat sheet: {}", output.display());
    println!("  - Title: {}", sheet.title);
    println!("  - Hotkeys: {}", sheet.hotkeys.len());
    println!("  - Estimated pages: {}", report.estimated_pages);
    println!("  - Pages: {}", report.pages);
    Ok(ExitCode::SUCCESS)
}
