use clap::Parser;
use icon_resizer::constants::ERROR_PREFIX;
use icon_resizer::{generate_icons, logger, Args, IconOptions};

fn main() {
    let args = Args::parse();

    logger::set_quiet_mode(args.quiet);
    logger::set_verbose_mode(args.verbose);

    // Every failure ends up here as one line; the exit status stays 0.
    if let Err(e) = run(args) {
        println!("{} {}", ERROR_PREFIX, e);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let options = IconOptions::new(
        args.source,
        args.output_dir,
        args.sizes,
        args.prefix,
        args.filter.into(),
        args.optimize,
    )?;

    generate_icons(&options)?;
    Ok(())
}
