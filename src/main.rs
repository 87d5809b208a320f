use clap::Parser;
use flaggen::{
    cli::Cli,
    codegen::{self, GenerationRequest},
    config::Config,
    descriptor,
    logging::init_logging,
    output,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color);

    let config = Config::from_cli(cli)?;

    log::debug!("Configuration: {:?}", config);

    let flags = descriptor::load_path(&config.input)?;

    log::debug!(
        "Loaded {} flag descriptors from {}",
        flags.len(),
        config.input.display()
    );

    let request = GenerationRequest {
        package_name: config.package,
        flags,
    };

    let source = codegen::render(&request);

    log::debug!("Rendered {} bytes of generated source", source.len());

    output::write_source(&config.output, &source)?;

    Ok(())
}
