//! Tournament endpoints

use reqwest::Method;
use tracing::info;

use crate::client::ChallongeClient;
use crate::error::Result;
use crate::models::{
    envelope, Resource, Tournament, TournamentFilter, TournamentParams, TournamentRef,
};
use crate::transport::ApiRequest;

/// Tournament operations, obtained from [`ChallongeClient::tournaments`]
pub struct Tournaments<'a> {
    client: &'a ChallongeClient,
}

impl<'a> Tournaments<'a> {
    pub(crate) fn new(client: &'a ChallongeClient) -> Self {
        Self { client }
    }

    /// List tournaments visible to the account
    pub async fn list(&self, filter: &TournamentFilter) -> Result<Vec<Tournament>> {
        let request = ApiRequest::new(Method::GET, "tournaments.json").query(filter.to_query());
        self.client.fetch_list(request).await
    }

    /// Fetch one tournament, optionally with its participants and matches
    pub async fn get(
        &self,
        tournament: &TournamentRef,
        include_participants: bool,
        include_matches: bool,
    ) -> Result<Tournament> {
        let request = ApiRequest::new(Method::GET, path(tournament))
            .query(includes(include_participants, include_matches));
        self.client.fetch_one(request).await
    }

    pub async fn create(&self, params: &TournamentParams) -> Result<Tournament> {
        params.validate_new()?;
        let request = ApiRequest::new(Method::POST, "tournaments.json")
            .body(envelope(Tournament::KEY, params)?);
        let tournament: Tournament = self.client.fetch_one(request).await?;
        info!("Created tournament {} ({})", tournament.url, tournament.id);
        Ok(tournament)
    }

    pub async fn update(
        &self,
        tournament: &TournamentRef,
        params: &TournamentParams,
    ) -> Result<Tournament> {
        let request = ApiRequest::new(Method::PUT, path(tournament))
            .body(envelope(Tournament::KEY, params)?);
        self.client.fetch_one(request).await
    }

    /// Delete a tournament and everything in it
    pub async fn delete(&self, tournament: &TournamentRef) -> Result<Tournament> {
        let request = ApiRequest::new(Method::DELETE, path(tournament));
        let deleted: Tournament = self.client.fetch_one(request).await?;
        info!("Deleted tournament {}", tournament);
        Ok(deleted)
    }

    /// Start a pending tournament; requires at least two participants
    pub async fn start(&self, tournament: &TournamentRef) -> Result<Tournament> {
        self.action(tournament, "start").await
    }

    /// Finalize results once every match is complete
    pub async fn finalize(&self, tournament: &TournamentRef) -> Result<Tournament> {
        self.action(tournament, "finalize").await
    }

    /// Reset to pending, clearing all match results
    pub async fn reset(&self, tournament: &TournamentRef) -> Result<Tournament> {
        self.action(tournament, "reset").await
    }

    pub async fn open_for_predictions(&self, tournament: &TournamentRef) -> Result<Tournament> {
        self.action(tournament, "open_for_predictions").await
    }

    /// Drop participants who did not check in
    pub async fn process_check_ins(&self, tournament: &TournamentRef) -> Result<Tournament> {
        self.action(tournament, "process_check_ins").await
    }

    pub async fn abort_check_in(&self, tournament: &TournamentRef) -> Result<Tournament> {
        self.action(tournament, "abort_check_in").await
    }

    async fn action(&self, tournament: &TournamentRef, action: &str) -> Result<Tournament> {
        let request = ApiRequest::new(
            Method::POST,
            format!("tournaments/{}/{}.json", tournament, action),
        );
        let result: Tournament = self.client.fetch_one(request).await?;
        info!("Tournament {} {} -> {:?}", tournament, action, result.state);
        Ok(result)
    }
}

fn path(tournament: &TournamentRef) -> String {
    format!("tournaments/{}.json", tournament)
}

fn includes(participants: bool, matches: bool) -> Vec<(String, String)> {
    let flag = |on: bool| (if on { "1" } else { "0" }).to_string();
    vec![
        ("include_participants".to_string(), flag(participants)),
        ("include_matches".to_string(), flag(matches)),
    ]
}
