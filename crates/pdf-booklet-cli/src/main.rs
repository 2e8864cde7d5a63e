use anyhow::Result;
use clap::{Parser, ValueEnum};
use pdf_booklet::{BookletOptions, Orientation, PaperFormat, SignatureSize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pdfbook",
    about = "Impose PDF pages into a printable booklet",
    version
)]
struct Cli {
    /// Input PDF file
    input: PathBuf,

    /// Output PDF file
    #[arg(short, long)]
    output: PathBuf,

    /// Rasterization resolution
    #[arg(long, default_value = "600")]
    dpi: u16,

    /// Sub-pages per physical sheet (4, 8, 12, 16, 24, 32 or 64)
    #[arg(long, default_value = "8", value_parser = parse_signature)]
    signature: SignatureSize,

    /// Finished sub-page format
    #[arg(long, default_value = "a6", value_enum)]
    leaf_format: PaperArg,

    /// Physical sheet format
    #[arg(long, default_value = "a4", value_enum)]
    sheet_format: PaperArg,

    /// Lay the sheet out in landscape orientation
    #[arg(long)]
    landscape: bool,

    /// Directory for intermediate sheet files (temp dir when omitted)
    #[arg(long)]
    work_dir: Option<PathBuf>,

    /// Keep intermediate sheet files after merging (requires --work-dir)
    #[arg(long)]
    keep_sheets: bool,

    /// Show statistics only, don't generate the booklet
    #[arg(long)]
    stats_only: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A0,
    A1,
    A2,
    A3,
    A4,
    A5,
    A6,
    A7,
    A8,
    A9,
    A10,
    UsInvoice,
    UsExecutive,
    UsLegal,
    AnsiA,
    AnsiB,
    AnsiC,
    AnsiD,
    AnsiE,
    AnsiF,
}

impl From<PaperArg> for PaperFormat {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A0 => Self::A0,
            PaperArg::A1 => Self::A1,
            PaperArg::A2 => Self::A2,
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::A6 => Self::A6,
            PaperArg::A7 => Self::A7,
            PaperArg::A8 => Self::A8,
            PaperArg::A9 => Self::A9,
            PaperArg::A10 => Self::A10,
            PaperArg::UsInvoice => Self::UsInvoice,
            PaperArg::UsExecutive => Self::UsExecutive,
            PaperArg::UsLegal => Self::UsLegal,
            PaperArg::AnsiA => Self::AnsiA,
            PaperArg::AnsiB => Self::AnsiB,
            PaperArg::AnsiC => Self::AnsiC,
            PaperArg::AnsiD => Self::AnsiD,
            PaperArg::AnsiE => Self::AnsiE,
            PaperArg::AnsiF => Self::AnsiF,
        }
    }
}

fn parse_signature(s: &str) -> Result<SignatureSize, String> {
    let pages: usize = s.parse().map_err(|_| format!("invalid number: {s}"))?;
    SignatureSize::from_pages(pages).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let options = BookletOptions {
        input: cli.input.clone(),
        output: cli.output.clone(),
        dpi: cli.dpi,
        signature: cli.signature,
        leaf_format: cli.leaf_format.into(),
        sheet_format: cli.sheet_format.into(),
        orientation: if cli.landscape {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        },
        work_dir: cli.work_dir.clone(),
        keep_sheets: cli.keep_sheets,
    };
    options.validate()?;

    if cli.stats_only {
        let doc = lopdf::Document::load(&cli.input)?;
        let stats = pdf_booklet::calculate_statistics(doc.get_pages().len(), cli.signature)?;
        print_stats(&stats);
        return Ok(());
    }

    let stats = pdf_booklet::make_booklet(options).await?;
    print_stats(&stats);
    println!("Wrote {}", cli.output.display());

    Ok(())
}

fn print_stats(stats: &pdf_booklet::BookletStatistics) {
    println!("Imposition statistics:");
    println!("  Source pages: {}", stats.source_pages);
    println!("  Signatures: {}", stats.signatures);
    println!("  Sheet sides: {}", stats.sheet_sides);
    println!("  Blank pages added: {}", stats.blank_pages_added);
}
