use anyhow::Result;
use clap::Parser;
use dyck_data::cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dyck_data=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
