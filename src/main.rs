use clap::{CommandFactory, Parser};
use print_gal::{output, process};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "print-gal")]
#[command(about = "Printable HTML galleries from folders of scanned images")]
#[command(long_about = "\
Printable HTML galleries from folders of scanned images

Each image-bearing subfolder of ROOT becomes one self-contained HTML
document written next to it, with one full-page sheet per image — open it
in a browser and print. Images are ordered by the first number in their
filename; a nested folder orders by the number in its own name and keeps
its internal order.

Content structure:

  Book/
  ├── Ch1/                 → Book/Ch1.html
  │   ├── b.png            # no digits — sorts first (key 0)
  │   ├── a1.png           # key 1
  │   └── 3_extra/         # whole subfolder sorts at key 3
  │       └── x.png
  ├── Ch2/                 → Book/Ch2.html
  └── __MACOSX/            # platform artifact, ignored at any depth

Subfolders with no images produce no document. Existing documents are
overwritten. Supported extensions: jpg, jpeg, png, gif.")]
#[command(version)]
struct Cli {
    /// Root folder; each image-bearing subfolder becomes one gallery document
    root: Option<PathBuf>,

    /// Scan and report without writing any documents
    #[arg(long)]
    check: bool,

    /// Emit the run report as JSON instead of the tree view
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let Some(root) = cli.root else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let report = process::run(&root, cli.check)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_run_report(&report);
    }

    Ok(())
}
