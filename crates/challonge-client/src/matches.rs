//! Match endpoints

use reqwest::Method;
use tracing::info;

use crate::client::ChallongeClient;
use crate::error::{ClientError, Result};
use crate::models::{envelope, Match, MatchFilter, MatchParams, Resource, TournamentRef};
use crate::transport::ApiRequest;

/// Match operations, obtained from [`ChallongeClient::matches`]
pub struct Matches<'a> {
    client: &'a ChallongeClient,
}

impl<'a> Matches<'a> {
    pub(crate) fn new(client: &'a ChallongeClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        tournament: &TournamentRef,
        filter: &MatchFilter,
    ) -> Result<Vec<Match>> {
        let request = ApiRequest::new(
            Method::GET,
            format!("tournaments/{}/matches.json", tournament),
        )
        .query(filter.to_query());
        self.client.fetch_list(request).await
    }

    pub async fn get(&self, tournament: &TournamentRef, id: u64) -> Result<Match> {
        let request = ApiRequest::new(Method::GET, member(tournament, id));
        self.client.fetch_one(request).await
    }

    /// Update scores, winner or votes of a match
    pub async fn update(
        &self,
        tournament: &TournamentRef,
        id: u64,
        params: &MatchParams,
    ) -> Result<Match> {
        if params.winner_id.is_some() && params.scores_csv.is_none() {
            return Err(ClientError::Validation(vec![
                "scores_csv is required when reporting a winner".to_string(),
            ]));
        }

        let request = ApiRequest::new(Method::PUT, member(tournament, id))
            .body(envelope(Match::KEY, params)?);
        let updated: Match = self.client.fetch_one(request).await?;
        info!("Updated match {} in {} -> {:?}", id, tournament, updated.state);
        Ok(updated)
    }

    /// Reopen a completed match, resetting matches that follow it
    pub async fn reopen(&self, tournament: &TournamentRef, id: u64) -> Result<Match> {
        self.action(tournament, id, "reopen").await
    }

    pub async fn mark_as_underway(&self, tournament: &TournamentRef, id: u64) -> Result<Match> {
        self.action(tournament, id, "mark_as_underway").await
    }

    pub async fn unmark_as_underway(&self, tournament: &TournamentRef, id: u64) -> Result<Match> {
        self.action(tournament, id, "unmark_as_underway").await
    }

    async fn action(&self, tournament: &TournamentRef, id: u64, action: &str) -> Result<Match> {
        let request = ApiRequest::new(
            Method::POST,
            format!("tournaments/{}/matches/{}/{}.json", tournament, id, action),
        );
        self.client.fetch_one(request).await
    }
}

fn member(tournament: &TournamentRef, id: u64) -> String {
    format!("tournaments/{}/matches/{}.json", tournament, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;
    use crate::models::{MatchState, MatchStateFilter, SetScore};
    use challonge_core::{AuthScheme, Credential};
    use serde_json::json;
    use std::sync::Arc;

    fn client(transport: Arc<MockTransport>) -> ChallongeClient {
        let credential = Credential::new("alice", "sk_live_123").unwrap();
        ChallongeClient::with_transport(credential, AuthScheme::Basic, transport).unwrap()
    }

    fn open_match() -> String {
        json!({"match": {
            "id": 9, "tournament_id": 42, "state": "open", "round": 1,
            "player1_id": 1, "player2_id": 2, "scores_csv": ""
        }})
        .to_string()
    }

    #[tokio::test]
    async fn test_list_with_filter() {
        let transport = MockTransport::new();
        transport.push(200, &format!("[{}]", open_match())).await;

        let filter = MatchFilter {
            state: MatchStateFilter::Open,
            participant_id: Some(2),
        };
        let matches = client(transport.clone())
            .matches()
            .list(&TournamentRef::id(42), &filter)
            .await
            .unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].state, MatchState::Open);

        let request = transport.last_request().await;
        assert_eq!(request.path, "tournaments/42/matches.json");
        assert_eq!(
            request.query,
            vec![
                ("state".to_string(), "open".to_string()),
                ("participant_id".to_string(), "2".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_report_result() {
        let transport = MockTransport::new();
        transport
            .push(
                200,
                &json!({"match": {
                    "id": 9, "tournament_id": 42, "state": "complete", "round": 1,
                    "player1_id": 1, "player2_id": 2, "winner_id": 1, "loser_id": 2,
                    "scores_csv": "3-1,3-2"
                }})
                .to_string(),
            )
            .await;

        let params = MatchParams::report(&[SetScore::new(3, 1), SetScore::new(3, 2)], 1);
        let updated = client(transport.clone())
            .matches()
            .update(&TournamentRef::id(42), 9, &params)
            .await
            .unwrap();

        assert_eq!(updated.state, MatchState::Complete);
        assert_eq!(updated.winner_id, Some(1));
        assert_eq!(updated.scores().unwrap().len(), 2);

        let request = transport.last_request().await;
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.path, "tournaments/42/matches/9.json");
        assert_eq!(
            request.body,
            Some(json!({"match": {"scores_csv": "3-1,3-2", "winner_id": 1}}))
        );
    }

    #[tokio::test]
    async fn test_winner_without_scores_rejected() {
        let transport = MockTransport::new();
        let params = MatchParams {
            winner_id: Some(1),
            ..MatchParams::default()
        };

        let err = client(transport.clone())
            .matches()
            .update(&TournamentRef::id(42), 9, &params)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert!(transport.requests().await.is_empty());
    }

    #[tokio::test]
    async fn test_reopen_and_underway() {
        let transport = MockTransport::new();
        for _ in 0..3 {
            transport.push(200, &open_match()).await;
        }
        let client = client(transport.clone());
        let t = TournamentRef::url("spring_cup").unwrap();

        client.matches().mark_as_underway(&t, 9).await.unwrap();
        client.matches().unmark_as_underway(&t, 9).await.unwrap();
        client.matches().reopen(&t, 9).await.unwrap();

        let paths: Vec<String> = transport
            .requests()
            .await
            .into_iter()
            .map(|r| r.path)
            .collect();
        assert_eq!(
            paths,
            vec![
                "tournaments/spring_cup/matches/9/mark_as_underway.json",
                "tournaments/spring_cup/matches/9/unmark_as_underway.json",
                "tournaments/spring_cup/matches/9/reopen.json",
            ]
        );
    }
}
