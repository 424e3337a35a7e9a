// twitter-cli/src/commands/mod.rs
pub mod account;
pub mod blocks;
pub mod friendships;
pub mod setup;

pub use account::{handle_account_command, AccountCommands};
pub use blocks::{handle_blocks_command, BlocksCommands};
pub use friendships::{handle_friendships_command, FriendshipsCommands};
pub use setup::run_setup;

use twitter_client::{ReqwestClient, TwitterClient};

pub type Client = TwitterClient<ReqwestClient>;

/// Exactly one of `--screen-name` / `--user-id` identifies a target user
#[derive(clap::Args, Clone, Debug)]
#[group(required = true, multiple = false)]
pub struct UserTarget {
    /// Screen name, without the leading @
    #[arg(long)]
    pub screen_name: Option<String>,
    /// Numeric user id
    #[arg(long)]
    pub user_id: Option<String>,
}
