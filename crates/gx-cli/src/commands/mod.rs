pub mod export;

use gx_config::GradexConfig;

use crate::cli::Commands;

pub async fn dispatch(command: Commands, config: &GradexConfig) -> anyhow::Result<()> {
    match command {
        Commands::Export(args) => export::handle(&args, config).await,
    }
}
