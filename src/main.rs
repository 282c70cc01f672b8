use clap::Parser;
use ds_audit::{
    Cli,
    handlers::{handle_classify, handle_init_config, handle_list_vocabulary},
};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "ds_audit=debug" } else { "ds_audit=warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir().ok();

    if cli.init {
        return handle_init_config(cwd.as_deref().unwrap_or(std::path::Path::new(".")));
    }

    if cli.list_vocabulary {
        return handle_list_vocabulary();
    }

    handle_classify(&cli, cwd.as_deref())
}
