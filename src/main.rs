use anyhow::{Context, Result};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;
use wikipress::{BuildArgs, Command, Config, Manifest, RewriteArgs};

fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(config.verbose)?;
    config.validate().context("Invalid configuration")?;

    match &config.command {
        Command::Build(args) => build(args),
        Command::Rewrite(args) => rewrite(args),
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install log subscriber")?;
    Ok(())
}

fn build(args: &BuildArgs) -> Result<()> {
    let manifest = Manifest::load(&args.manifest)?;
    let source_dir = args.source_dir();

    let report = wikipress::build_site(&manifest, &source_dir, &args.output)
        .context("Failed to build site")?;

    info!(output = %args.output.display(), "build finished: {report}");
    Ok(())
}

fn rewrite(args: &RewriteArgs) -> Result<()> {
    let report = wikipress::rewrite_pages(&args.fragments, &args.pages)
        .context("Failed to rewrite pages")?;

    info!(pages = %args.pages.display(), "rewrite finished: {report}");
    Ok(())
}
