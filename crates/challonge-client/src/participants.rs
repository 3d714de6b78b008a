//! Participant endpoints

use reqwest::Method;
use tracing::info;

use crate::client::ChallongeClient;
use crate::error::{ClientError, Result};
use crate::models::{envelope, Participant, ParticipantParams, Resource, TournamentRef};
use crate::transport::ApiRequest;

/// Participant operations, obtained from [`ChallongeClient::participants`]
pub struct Participants<'a> {
    client: &'a ChallongeClient,
}

impl<'a> Participants<'a> {
    pub(crate) fn new(client: &'a ChallongeClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, tournament: &TournamentRef) -> Result<Vec<Participant>> {
        let request = ApiRequest::new(Method::GET, collection(tournament));
        self.client.fetch_list(request).await
    }

    pub async fn get(&self, tournament: &TournamentRef, id: u64) -> Result<Participant> {
        let request = ApiRequest::new(Method::GET, member(tournament, id));
        self.client.fetch_one(request).await
    }

    /// Add a participant to a pending tournament
    pub async fn create(
        &self,
        tournament: &TournamentRef,
        params: &ParticipantParams,
    ) -> Result<Participant> {
        let request = ApiRequest::new(Method::POST, collection(tournament))
            .body(envelope(Participant::KEY, params)?);
        let participant: Participant = self.client.fetch_one(request).await?;
        info!("Added participant {} to {}", participant.id, tournament);
        Ok(participant)
    }

    /// Add several participants in one request
    pub async fn bulk_add(
        &self,
        tournament: &TournamentRef,
        params: &[ParticipantParams],
    ) -> Result<Vec<Participant>> {
        if params.is_empty() {
            return Err(ClientError::Validation(vec![
                "at least one participant is required".to_string(),
            ]));
        }

        let request = ApiRequest::new(
            Method::POST,
            format!("tournaments/{}/participants/bulk_add.json", tournament),
        )
        .body(envelope("participants", &params)?);
        let added: Vec<Participant> = self.client.fetch_list(request).await?;
        info!("Added {} participants to {}", added.len(), tournament);
        Ok(added)
    }

    pub async fn update(
        &self,
        tournament: &TournamentRef,
        id: u64,
        params: &ParticipantParams,
    ) -> Result<Participant> {
        let request = ApiRequest::new(Method::PUT, member(tournament, id))
            .body(envelope(Participant::KEY, params)?);
        self.client.fetch_one(request).await
    }

    /// Remove a participant; once underway the service marks them inactive instead
    pub async fn delete(&self, tournament: &TournamentRef, id: u64) -> Result<Participant> {
        let request = ApiRequest::new(Method::DELETE, member(tournament, id));
        self.client.fetch_one(request).await
    }

    pub async fn check_in(&self, tournament: &TournamentRef, id: u64) -> Result<Participant> {
        self.action(tournament, id, "check_in").await
    }

    pub async fn undo_check_in(&self, tournament: &TournamentRef, id: u64) -> Result<Participant> {
        self.action(tournament, id, "undo_check_in").await
    }

    /// Shuffle seeds; only valid before the tournament starts
    pub async fn randomize(&self, tournament: &TournamentRef) -> Result<Vec<Participant>> {
        let request = ApiRequest::new(
            Method::POST,
            format!("tournaments/{}/participants/randomize.json", tournament),
        );
        self.client.fetch_list(request).await
    }

    async fn action(
        &self,
        tournament: &TournamentRef,
        id: u64,
        action: &str,
    ) -> Result<Participant> {
        let request = ApiRequest::new(
            Method::POST,
            format!("tournaments/{}/participants/{}/{}.json", tournament, id, action),
        );
        self.client.fetch_one(request).await
    }
}

fn collection(tournament: &TournamentRef) -> String {
    format!("tournaments/{}/participants.json", tournament)
}

fn member(tournament: &TournamentRef, id: u64) -> String {
    format!("tournaments/{}/participants/{}.json", tournament, id)
}
