// twitter-cli/src/commands/account.rs
use super::Client;
use crate::output::{print_outcome, ExitCode};
use anyhow::Result;
use twitter_client::{AccountSettingsParams, AccountUpdateProfileParams, AccountVerifyParams};

#[derive(clap::Subcommand, Clone, Debug)]
pub enum AccountCommands {
    /// Verify credentials and show the authenticated user
    Verify {
        #[arg(long)]
        include_entities: Option<bool>,
        #[arg(long)]
        skip_status: Option<bool>,
        #[arg(long)]
        include_email: Option<bool>,
    },
    /// Show account settings
    Settings,
    /// Update account settings
    UpdateSettings(SettingsArgs),
    /// Update profile fields; unset fields are left alone
    UpdateProfile(ProfileArgs),
}

#[derive(clap::Args, Clone, Debug)]
pub struct SettingsArgs {
    #[arg(long)]
    lang: Option<String>,
    /// Rails time zone name
    #[arg(long)]
    time_zone: Option<String>,
    #[arg(long)]
    sleep_time_enabled: Option<bool>,
    /// Hour (00-23) sleep time starts
    #[arg(long)]
    start_sleep_time: Option<String>,
    /// Hour (00-23) sleep time ends
    #[arg(long)]
    end_sleep_time: Option<String>,
    /// Yahoo! Where On Earth id of the trend location
    #[arg(long)]
    trend_location_woeid: Option<i64>,
}

impl SettingsArgs {
    fn into_params(self) -> AccountSettingsParams {
        AccountSettingsParams {
            lang: self.lang,
            time_zone: self.time_zone,
            sleep_time_enabled: self.sleep_time_enabled,
            start_sleep_time: self.start_sleep_time,
            end_sleep_time: self.end_sleep_time,
            trend_location_woeid: self.trend_location_woeid,
            ..Default::default()
        }
    }
}

#[derive(clap::Args, Clone, Debug)]
pub struct ProfileArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    url: Option<String>,
    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// Hex colour without the leading #
    #[arg(long)]
    profile_link_color: Option<String>,
}

impl ProfileArgs {
    fn into_params(self) -> AccountUpdateProfileParams {
        AccountUpdateProfileParams {
            name: self.name,
            url: self.url,
            location: self.location,
            description: self.description,
            profile_link_color: self.profile_link_color,
            ..Default::default()
        }
    }
}

pub async fn handle_account_command(client: &Client, cmd: AccountCommands) -> Result<ExitCode> {
    let accounts = client.accounts();
    match cmd {
        AccountCommands::Verify {
            include_entities,
            skip_status,
            include_email,
        } => {
            let params = AccountVerifyParams {
                include_entities,
                skip_status,
                include_email,
            };
            print_outcome(accounts.verify_credentials(&params).await)
        }
        AccountCommands::Settings => print_outcome(accounts.settings().await),
        AccountCommands::UpdateSettings(args) => {
            print_outcome(accounts.update_settings(&args.into_params()).await)
        }
        AccountCommands::UpdateProfile(args) => {
            print_outcome(accounts.update_profile(&args.into_params()).await)
        }
    }
}
