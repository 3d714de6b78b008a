//! Subcommand definitions and dispatch

use chrono::NaiveDate;
use clap::{ArgAction, Args, Subcommand, ValueEnum};
use serde::Serialize;

use challonge_client::{
    AuthScheme, ChallongeClient, MatchFilter, MatchParams, MatchStateFilter, ParticipantParams,
    SetScore, TournamentFilter, TournamentParams, TournamentRef, TournamentStateFilter,
    TournamentType,
};
use challonge_core::{SettingsManager, UsernamePolicy};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Tournament operations
    #[command(subcommand)]
    Tournaments(TournamentCommand),
    /// Participant operations
    #[command(subcommand)]
    Participants(ParticipantCommand),
    /// Match operations
    #[command(subcommand)]
    Matches(MatchCommand),
    /// Show or change stored settings
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
pub enum TournamentCommand {
    /// List tournaments
    List {
        #[arg(long, value_enum, default_value = "all")]
        state: StateArg,
        /// e.g. "single elimination", "round_robin"
        #[arg(long = "type")]
        tournament_type: Option<TournamentType>,
        /// Only tournaments created on or after this date (YYYY-MM-DD)
        #[arg(long)]
        created_after: Option<NaiveDate>,
        #[arg(long)]
        subdomain: Option<String>,
    },
    /// Show one tournament
    Show {
        tournament: TournamentRef,
        #[arg(long)]
        participants: bool,
        #[arg(long)]
        matches: bool,
    },
    /// Create a tournament
    Create(CreateTournament),
    /// Start a pending tournament
    Start { tournament: TournamentRef },
    /// Finalize a completed tournament
    Finalize { tournament: TournamentRef },
    /// Reset a tournament to pending
    Reset { tournament: TournamentRef },
    /// Delete a tournament
    Delete { tournament: TournamentRef },
}

#[derive(Args, Debug)]
pub struct CreateTournament {
    #[arg(long)]
    name: String,
    /// URL slug (letters, numbers and underscores)
    #[arg(long)]
    url: String,
    #[arg(long = "type")]
    tournament_type: Option<TournamentType>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    subdomain: Option<String>,
    #[arg(long)]
    private: bool,
}

#[derive(Subcommand, Debug)]
pub enum ParticipantCommand {
    /// List participants
    List { tournament: TournamentRef },
    /// Add one or more participants by name
    Add {
        tournament: TournamentRef,
        #[arg(required = true)]
        names: Vec<String>,
        /// Seed for a single added participant
        #[arg(long)]
        seed: Option<u32>,
    },
    /// Remove a participant
    Remove { tournament: TournamentRef, id: u64 },
    /// Check a participant in
    CheckIn { tournament: TournamentRef, id: u64 },
    /// Shuffle seeds
    Randomize { tournament: TournamentRef },
}

#[derive(Subcommand, Debug)]
pub enum MatchCommand {
    /// List matches
    List {
        tournament: TournamentRef,
        #[arg(long, value_enum, default_value = "all")]
        state: MatchStateArg,
        #[arg(long)]
        participant: Option<u64>,
    },
    /// Report a match result
    Report {
        tournament: TournamentRef,
        id: u64,
        /// Set scores, player 1 first, e.g. "3-1,2-3,3-0"
        #[arg(long)]
        scores: String,
        /// Participant id of the winner
        #[arg(long)]
        winner: u64,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print current settings
    Show,
    /// Set the API base URL
    SetBaseUrl { url: String },
    /// Choose how the API key is sent
    SetScheme {
        #[arg(value_enum)]
        scheme: SchemeArg,
        /// Query parameter or header name for the query/header schemes
        #[arg(long)]
        name: Option<String>,
    },
    /// Allow or forbid key-only credentials
    SetKeyOnly {
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
    /// Restore defaults
    Reset,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum StateArg {
    All,
    Pending,
    InProgress,
    Ended,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum MatchStateArg {
    All,
    Pending,
    Open,
    Complete,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemeArg {
    Basic,
    Query,
    Header,
}

impl From<StateArg> for TournamentStateFilter {
    fn from(state: StateArg) -> Self {
        match state {
            StateArg::All => TournamentStateFilter::All,
            StateArg::Pending => TournamentStateFilter::Pending,
            StateArg::InProgress => TournamentStateFilter::InProgress,
            StateArg::Ended => TournamentStateFilter::Ended,
        }
    }
}

impl From<MatchStateArg> for MatchStateFilter {
    fn from(state: MatchStateArg) -> Self {
        match state {
            MatchStateArg::All => MatchStateFilter::All,
            MatchStateArg::Pending => MatchStateFilter::Pending,
            MatchStateArg::Open => MatchStateFilter::Open,
            MatchStateArg::Complete => MatchStateFilter::Complete,
        }
    }
}

/// Build the auth scheme selected on the command line
pub fn scheme_from_args(scheme: SchemeArg, name: Option<String>) -> AuthScheme {
    match scheme {
        SchemeArg::Basic => AuthScheme::Basic,
        SchemeArg::Query => match name {
            Some(param) => AuthScheme::QueryKey { param },
            None => AuthScheme::query_key(),
        },
        SchemeArg::Header => AuthScheme::Header {
            name: name.unwrap_or_else(|| "Authorization".to_string()),
        },
    }
}

/// Run an API command and render its result as pretty JSON
pub async fn run(client: &ChallongeClient, command: Command) -> CliResult<String> {
    match command {
        Command::Tournaments(cmd) => run_tournaments(client, cmd).await,
        Command::Participants(cmd) => run_participants(client, cmd).await,
        Command::Matches(cmd) => run_matches(client, cmd).await,
        Command::Config(_) => Err("config commands do not use the API".into()),
    }
}

async fn run_tournaments(client: &ChallongeClient, cmd: TournamentCommand) -> CliResult<String> {
    let tournaments = client.tournaments();
    match cmd {
        TournamentCommand::List {
            state,
            tournament_type,
            created_after,
            subdomain,
        } => {
            let filter = TournamentFilter {
                state: state.into(),
                tournament_type,
                created_after,
                subdomain,
                ..TournamentFilter::default()
            };
            render(&tournaments.list(&filter).await?)
        }
        TournamentCommand::Show {
            tournament,
            participants,
            matches,
        } => render(&tournaments.get(&tournament, participants, matches).await?),
        TournamentCommand::Create(create) => {
            let params = TournamentParams {
                tournament_type: create.tournament_type,
                description: create.description,
                subdomain: create.subdomain,
                private: create.private.then_some(true),
                ..TournamentParams::new(create.name, create.url)
            };
            render(&tournaments.create(&params).await?)
        }
        TournamentCommand::Start { tournament } => render(&tournaments.start(&tournament).await?),
        TournamentCommand::Finalize { tournament } => {
            render(&tournaments.finalize(&tournament).await?)
        }
        TournamentCommand::Reset { tournament } => render(&tournaments.reset(&tournament).await?),
        TournamentCommand::Delete { tournament } => {
            render(&tournaments.delete(&tournament).await?)
        }
    }
}

async fn run_participants(client: &ChallongeClient, cmd: ParticipantCommand) -> CliResult<String> {
    let participants = client.participants();
    match cmd {
        ParticipantCommand::List { tournament } => render(&participants.list(&tournament).await?),
        ParticipantCommand::Add {
            tournament,
            names,
            seed,
        } => {
            if names.len() == 1 {
                let params = ParticipantParams {
                    seed,
                    ..ParticipantParams::named(names[0].clone())
                };
                render(&participants.create(&tournament, &params).await?)
            } else {
                if seed.is_some() {
                    return Err("--seed only applies when adding a single participant".into());
                }
                let params: Vec<ParticipantParams> =
                    names.into_iter().map(ParticipantParams::named).collect();
                render(&participants.bulk_add(&tournament, &params).await?)
            }
        }
        ParticipantCommand::Remove { tournament, id } => {
            render(&participants.delete(&tournament, id).await?)
        }
        ParticipantCommand::CheckIn { tournament, id } => {
            render(&participants.check_in(&tournament, id).await?)
        }
        ParticipantCommand::Randomize { tournament } => {
            render(&participants.randomize(&tournament).await?)
        }
    }
}

async fn run_matches(client: &ChallongeClient, cmd: MatchCommand) -> CliResult<String> {
    let matches = client.matches();
    match cmd {
        MatchCommand::List {
            tournament,
            state,
            participant,
        } => {
            let filter = MatchFilter {
                state: state.into(),
                participant_id: participant,
            };
            render(&matches.list(&tournament, &filter).await?)
        }
        MatchCommand::Report {
            tournament,
            id,
            scores,
            winner,
        } => {
            let sets = SetScore::parse_csv(&scores)?;
            let params = MatchParams::report(&sets, winner);
            render(&matches.update(&tournament, id, &params).await?)
        }
    }
}

/// Apply a config command to the stored settings
pub async fn run_config(cmd: &ConfigCommand, manager: &mut SettingsManager) -> CliResult<()> {
    match cmd {
        ConfigCommand::Show => {
            println!("{}", render(manager.get())?);
            return Ok(());
        }
        ConfigCommand::SetBaseUrl { url } => {
            let mut settings = manager.get().clone();
            settings.base_url = url.clone();
            manager.update(settings).await?;
        }
        ConfigCommand::SetScheme { scheme, name } => {
            let mut settings = manager.get().clone();
            settings.auth_scheme = scheme_from_args(*scheme, name.clone());
            manager.update(settings).await?;
        }
        ConfigCommand::SetKeyOnly { enabled } => {
            let mut settings = manager.get().clone();
            settings.username_policy = if *enabled {
                UsernamePolicy::Optional
            } else {
                UsernamePolicy::Required
            };
            manager.update(settings).await?;
        }
        ConfigCommand::Reset => manager.reset().await?,
    }

    eprintln!("Settings saved to {}", manager.path().display());
    Ok(())
}

fn render<T: Serialize + ?Sized>(value: &T) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
