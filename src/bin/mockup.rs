use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mockup", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a product mockup from a photo and write it as PNG.
    Render(RenderArgs),
    /// Parse a directive and print the typed product as JSON.
    Describe(DescribeArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input photo (any format the `image` crate decodes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Product directive, e.g. `product(S,16,20,PB,150DW,2)`.
    #[arg(long)]
    directive: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Scene template directory (defaults to the bundled scenes).
    #[arg(long)]
    scenes: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct DescribeArgs {
    /// Product directive.
    #[arg(long)]
    directive: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Describe(args) => cmd_describe(args),
    }
}

fn load_catalog(dir: Option<&Path>) -> anyhow::Result<mockup::SceneCatalog> {
    let catalog = match dir {
        Some(dir) => mockup::SceneCatalog::load(dir)
            .with_context(|| format!("load scenes from '{}'", dir.display()))?,
        None => mockup::SceneCatalog::bundled().context("load bundled scenes")?,
    };
    Ok(catalog)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let photo = image::open(&args.in_path)
        .with_context(|| format!("read photo '{}'", args.in_path.display()))?
        .to_rgba8();

    let catalog = load_catalog(args.scenes.as_deref())?;
    let filter = mockup::ProductFilter::new(Arc::new(catalog));

    let (image, error) = filter.apply(&args.directive, photo).into_parts();
    if let Some(error) = error {
        return Err(anyhow::Error::new(error).context(format!(
            "render '{}' from '{}'",
            args.directive,
            args.in_path.display()
        )));
    }

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image
        .save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_describe(args: DescribeArgs) -> anyhow::Result<()> {
    let product = mockup::Product::parse(&args.directive)?;
    let json = serde_json::to_string_pretty(&product).context("serialize product")?;
    println!("{json}");
    Ok(())
}
