use clap::Parser;
use metricbridge::adapter::inbound::cli::command::Cli;
use metricbridge::adapter::inbound::cli::{output, run};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::set_color(&cli.color);
    output::configure(output::OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            output::error(&format!("Failed to start runtime: {e}"));
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run::execute(cli)) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
