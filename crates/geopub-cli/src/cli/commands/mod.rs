use super::args::*;

pub(crate) mod connect;
pub mod layers;
pub mod publish;

use crate::exit_codes::SUCCESS;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Publish(args) => publish::run(args).await,
        Command::Layers(args) => layers::run(args).await,
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(SUCCESS)
        }
    }
}
