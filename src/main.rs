use blog_ssg::logging::init_logging;
use blog_ssg::site::{build_index, DEFAULT_INDEX_TEMPLATE};
use blog_ssg::{SiteConfig, Ssg, SsgResult};
use clap::Parser;
use std::path::PathBuf;

/// Render a directory of markdown posts into JSON documents and an
/// article index page.
#[derive(Debug, Parser)]
#[command(name = "blog-ssg", version)]
struct Args {
    /// Source directory of markdown files
    source_dir: PathBuf,

    /// Destination directory
    dest_dir: PathBuf,

    /// Site configuration (TOML)
    #[arg(short, long, env = "BLOG_SSG_CONFIG")]
    config: Option<PathBuf>,

    /// Index page template with `{{ latest }}` and `{{ popular }}` slots
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> SsgResult<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::default(),
    };
    let template = match &args.template {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEFAULT_INDEX_TEMPLATE.to_string(),
    };

    let ssg = Ssg::new(args.source_dir, args.dest_dir, &config)?;
    let index = ssg.process(PathBuf::from(""))?;
    build_index(&index, &config, &template, ssg.dest())?;

    Ok(())
}
