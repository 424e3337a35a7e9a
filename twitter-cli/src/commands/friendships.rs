// twitter-cli/src/commands/friendships.rs
use super::{Client, UserTarget};
use crate::output::{print_outcome, print_response, ErrorResponse, ExitCode, Response};
use anyhow::Result;
use twitter_client::{
    FriendshipLookupParams, FriendshipPendingParams, FriendshipShowParams, FriendshipUpdateParams,
};

#[derive(clap::Subcommand, Clone, Debug)]
pub enum FriendshipsCommands {
    /// Relationship to up to 100 users
    Lookup {
        /// Screen names (comma-separated)
        #[arg(long, value_delimiter = ',')]
        screen_names: Vec<String>,
        /// User ids (comma-separated)
        #[arg(long, value_delimiter = ',')]
        user_ids: Vec<String>,
    },
    /// Relationship between two users
    Show {
        #[arg(long)]
        source_screen_name: Option<String>,
        #[arg(long)]
        source_id: Option<String>,
        #[arg(long)]
        target_screen_name: Option<String>,
        #[arg(long)]
        target_id: Option<String>,
    },
    /// Pending follow requests to you
    Incoming {
        #[arg(long, allow_hyphen_values = true)]
        cursor: Option<i64>,
    },
    /// Your pending follow requests
    Outgoing {
        #[arg(long, allow_hyphen_values = true)]
        cursor: Option<i64>,
    },
    /// Users whose retweets you have turned off
    NoRetweets,
    /// Follow a user
    Follow {
        #[command(flatten)]
        target: UserTarget,
    },
    /// Unfollow a user
    Unfollow {
        #[command(flatten)]
        target: UserTarget,
    },
    /// Toggle retweets and device notifications from a user
    Update {
        #[command(flatten)]
        target: UserTarget,
        #[arg(long)]
        retweets: Option<bool>,
        #[arg(long)]
        device: Option<bool>,
    },
}

pub async fn handle_friendships_command(
    client: &Client,
    cmd: FriendshipsCommands,
) -> Result<ExitCode> {
    let friendships = client.friendships();
    match cmd {
        FriendshipsCommands::Lookup {
            screen_names,
            user_ids,
        } => {
            if screen_names.is_empty() && user_ids.is_empty() {
                let resp = Response::<()>::error(
                    ErrorResponse::validation_failed(
                        "lookup needs --screen-names or --user-ids".to_string(),
                    ),
                    None,
                );
                print_response(&resp)?;
                return Ok(ExitCode::PermanentError);
            }
            let params = FriendshipLookupParams {
                screen_name: join_non_empty(&screen_names),
                user_id: join_non_empty(&user_ids),
            };
            print_outcome(friendships.lookup(&params).await)
        }
        FriendshipsCommands::Show {
            source_screen_name,
            source_id,
            target_screen_name,
            target_id,
        } => {
            let params = FriendshipShowParams {
                source_screen_name,
                source_id,
                target_screen_name,
                target_id,
            };
            print_outcome(friendships.show(&params).await)
        }
        FriendshipsCommands::Incoming { cursor } => {
            let params = FriendshipPendingParams {
                cursor,
                ..Default::default()
            };
            print_outcome(friendships.incoming(&params).await)
        }
        FriendshipsCommands::Outgoing { cursor } => {
            let params = FriendshipPendingParams {
                cursor,
                ..Default::default()
            };
            print_outcome(friendships.outgoing(&params).await)
        }
        FriendshipsCommands::NoRetweets => print_outcome(friendships.no_retweets().await),
        FriendshipsCommands::Follow { target } => {
            print_outcome(friendships.create(&lookup_params(target)).await)
        }
        FriendshipsCommands::Unfollow { target } => {
            print_outcome(friendships.destroy(&lookup_params(target)).await)
        }
        FriendshipsCommands::Update {
            target,
            retweets,
            device,
        } => {
            let params = FriendshipUpdateParams {
                screen_name: target.screen_name,
                user_id: target.user_id,
                device,
                retweets,
            };
            print_outcome(friendships.update(&params).await)
        }
    }
}

fn lookup_params(target: UserTarget) -> FriendshipLookupParams {
    FriendshipLookupParams {
        screen_name: target.screen_name,
        user_id: target.user_id,
    }
}

fn join_non_empty(values: &[String]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}
