// twitter-cli/src/commands/blocks.rs
use super::{Client, UserTarget};
use crate::output::{print_outcome, ExitCode};
use anyhow::Result;
use twitter_client::{BlockIdsParams, BlockListParams, BlockParams};

#[derive(clap::Subcommand, Clone, Debug)]
pub enum BlocksCommands {
    /// List blocked users
    List {
        #[arg(long)]
        include_entities: Option<bool>,
        #[arg(long)]
        skip_status: Option<bool>,
        /// Page cursor, -1 for the first page
        #[arg(long, allow_hyphen_values = true)]
        cursor: Option<i64>,
    },
    /// List blocked user ids
    Ids {
        #[arg(long, allow_hyphen_values = true)]
        cursor: Option<i64>,
    },
    /// Block a user
    Create {
        #[command(flatten)]
        target: UserTarget,
    },
    /// Unblock a user
    Destroy {
        #[command(flatten)]
        target: UserTarget,
    },
}

pub async fn handle_blocks_command(client: &Client, cmd: BlocksCommands) -> Result<ExitCode> {
    let blocks = client.blocks();
    match cmd {
        BlocksCommands::List {
            include_entities,
            skip_status,
            cursor,
        } => {
            let params = BlockListParams {
                include_entities,
                skip_status,
                cursor,
            };
            print_outcome(blocks.list(&params).await)
        }
        BlocksCommands::Ids { cursor } => {
            let params = BlockIdsParams {
                cursor,
                ..Default::default()
            };
            print_outcome(blocks.ids(&params).await)
        }
        BlocksCommands::Create { target } => {
            print_outcome(blocks.create(&block_params(target)).await)
        }
        BlocksCommands::Destroy { target } => {
            print_outcome(blocks.destroy(&block_params(target)).await)
        }
    }
}

fn block_params(target: UserTarget) -> BlockParams {
    BlockParams {
        screen_name: target.screen_name,
        user_id: target.user_id,
        skip_status: Some(true),
        ..Default::default()
    }
}
