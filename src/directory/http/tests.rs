//! Unit tests for the HTTP player directory

use super::*;
use crate::models::{Position, TeamId};
use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path, query_param, query_param_is_missing},
    Mock, MockServer, ResponseTemplate,
};

fn directory_for(server: &MockServer, token: Option<&str>) -> HttpPlayerDirectory {
    let mut config = ClientConfig::new(format!("{}/api", server.uri())).unwrap();
    if let Some(token) = token {
        config = config.with_token(token);
    }
    HttpPlayerDirectory::new(config).unwrap()
}

fn karim_json(id: u64) -> serde_json::Value {
    json!({
        "id": id,
        "first_name": "Karim",
        "last_name": "Gharbi",
        "jersey_number": 10,
        "position": "forward",
        "category": "Seniors",
        "created_at": "2024-05-01T10:00:00",
        "updated_at": "2024-05-01T10:00:00"
    })
}

#[cfg(test)]
mod list_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_without_filter_sends_no_params() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/players"))
            .and(query_param_is_missing("category"))
            .and(query_param_is_missing("team_id"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([karim_json(1)])))
            .expect(1)
            .mount(&server)
            .await;

        let directory = directory_for(&server, None);
        let players = directory.list(&PlayerFilter::default()).await.unwrap();

        assert_eq!(players.len(), 1);
        assert_eq!(players[0].full_name(), "Karim Gharbi");
        assert_eq!(players[0].position, Some(Position::Forward));
    }

    #[tokio::test]
    async fn test_list_with_category_and_team() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/players"))
            .and(query_param("category", "U19"))
            .and(query_param("team_id", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let directory = directory_for(&server, None);
        let filter = PlayerFilter::default()
            .with_category(Some("U19".to_string()))
            .with_team(Some(TeamId::new(2)));
        let players = directory.list(&filter).await.unwrap();

        assert!(players.is_empty());
    }

    #[tokio::test]
    async fn test_list_server_error_is_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/players"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"message": "database down"})),
            )
            .mount(&server)
            .await;

        let directory = directory_for(&server, None);
        match directory.list(&PlayerFilter::default()).await {
            Err(RosterError::Api { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "database down");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_keeps_roster_with_negative_jersey() {
        let server = MockServer::start().await;

        let mut odd = karim_json(2);
        odd["jersey_number"] = json!(-1);
        Mock::given(method("GET"))
            .and(path("/api/players"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([karim_json(1), odd])))
            .mount(&server)
            .await;

        let directory = directory_for(&server, None);
        let players = directory.list(&PlayerFilter::default()).await.unwrap();

        assert_eq!(players.len(), 2);
        assert_eq!(players[1].jersey_number, Some(-1));
    }

    #[tokio::test]
    async fn test_list_malformed_body_is_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/players"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let directory = directory_for(&server, None);
        match directory.list(&PlayerFilter::default()).await {
            Err(RosterError::Decode(_)) => (),
            other => panic!("Expected Decode error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_unreachable_server_is_network_error() {
        // Nothing listens on port 1.
        let config = ClientConfig::new("http://127.0.0.1:1/api").unwrap();
        let directory = HttpPlayerDirectory::new(config).unwrap();

        let err = directory.list(&PlayerFilter::default()).await.unwrap_err();
        assert!(
            matches!(err, RosterError::Network(_)),
            "expected network error, got {:?}",
            err
        );
    }
}

#[cfg(test)]
mod single_record_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_player() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/players/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(karim_json(1)))
            .mount(&server)
            .await;

        let directory = directory_for(&server, None);
        let player = directory.get(PlayerId::new(1)).await.unwrap();

        assert_eq!(player.id, Some(PlayerId::new(1)));
        assert_eq!(player.jersey_number, Some(10));
    }

    #[tokio::test]
    async fn test_get_missing_player_is_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/players/99"))
            .respond_with(ResponseTemplate::new(404).set_body_string("<h1>Not Found</h1>"))
            .mount(&server)
            .await;

        let directory = directory_for(&server, None);
        match directory.get(PlayerId::new(99)).await {
            Err(RosterError::NotFound { id }) => assert_eq!(id, PlayerId::new(99)),
            other => panic!("Expected NotFound error, got {:?}", other),
        }
    }
}

#[cfg(test)]
mod write_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_sends_token_and_omits_unset_fields() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/players"))
            .and(header("authorization", "Bearer secret-jwt"))
            .and(body_json(json!({
                "first_name": "Karim",
                "last_name": "Gharbi",
                "jersey_number": 10,
                "category": "Seniors"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "message": "Player created successfully",
                "player": karim_json(12)
            })))
            .expect(1)
            .mount(&server)
            .await;

        let directory = directory_for(&server, Some("secret-jwt"));
        let mut draft = Draft::named("Karim", "Gharbi");
        draft.jersey_number = Some(10);

        let saved = directory.create(&draft).await.unwrap();
        assert_eq!(saved.message, "Player created successfully");
        assert_eq!(saved.player.id, Some(PlayerId::new(12)));
        assert!(saved.player.created_at.is_some());
    }

    #[tokio::test]
    async fn test_create_validation_error_carries_server_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/players"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "errors": {
                    "first_name": ["Missing data for required field."],
                    "position": ["Must be one of: goalkeeper, defender, midfielder, forward."]
                }
            })))
            .mount(&server)
            .await;

        let directory = directory_for(&server, Some("secret-jwt"));
        match directory.create(&Draft::named("Karim", "Gharbi")).await {
            Err(RosterError::Api { status, message }) => {
                assert_eq!(status, 400);
                assert!(message.contains("first_name: Missing data for required field."));
                assert!(message.contains("position: Must be one of"));
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_without_token_is_rejected_by_server() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/players"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"msg": "Missing Authorization Header"})),
            )
            .mount(&server)
            .await;

        let directory = directory_for(&server, None);
        match directory.create(&Draft::named("Karim", "Gharbi")).await {
            Err(RosterError::Api { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "Missing Authorization Header");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_puts_full_draft_to_id_path() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/players/7"))
            .and(header("authorization", "Bearer secret-jwt"))
            .and(body_json(json!({
                "first_name": "Karim",
                "last_name": "Gharbi",
                "jersey_number": 9,
                "position": null,
                "birth_date": null,
                "nationality": null,
                "photo_url": null,
                "bio": null,
                "height": null,
                "weight": null,
                "team_id": null,
                "category": "Seniors"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Player updated successfully",
                "player": karim_json(7)
            })))
            .expect(1)
            .mount(&server)
            .await;

        let directory = directory_for(&server, Some("secret-jwt"));
        let mut draft = Draft::named("Karim", "Gharbi");
        draft.id = Some(PlayerId::new(7));
        draft.jersey_number = Some(9);

        let saved = directory.update(PlayerId::new(7), &draft).await.unwrap();
        assert_eq!(saved.message, "Player updated successfully");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/players/404"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let directory = directory_for(&server, Some("secret-jwt"));
        match directory
            .update(PlayerId::new(404), &Draft::named("Karim", "Gharbi"))
            .await
        {
            Err(RosterError::NotFound { id }) => assert_eq!(id, PlayerId::new(404)),
            other => panic!("Expected NotFound error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_returns_message() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/players/3"))
            .and(header("authorization", "Bearer secret-jwt"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"message": "Player deleted successfully"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let directory = directory_for(&server, Some("secret-jwt"));
        let message = directory.delete(PlayerId::new(3)).await.unwrap();
        assert_eq!(message, "Player deleted successfully");
    }
}

#[cfg(test)]
mod error_message_tests {
    use super::*;

    #[test]
    fn test_api_error_message_sources() {
        assert_eq!(
            api_error_message(StatusCode::BAD_REQUEST, r#"{"message": "Invalid data"}"#),
            "Invalid data"
        );
        assert_eq!(
            api_error_message(StatusCode::UNAUTHORIZED, r#"{"msg": "Token has expired"}"#),
            "Token has expired"
        );
        assert_eq!(
            api_error_message(
                StatusCode::BAD_REQUEST,
                r#"{"errors": {"last_name": ["Missing data for required field."]}}"#
            ),
            "last_name: Missing data for required field."
        );
        assert_eq!(
            api_error_message(StatusCode::BAD_GATEWAY, "  upstream timed out \n"),
            "upstream timed out"
        );
        assert_eq!(
            api_error_message(StatusCode::SERVICE_UNAVAILABLE, ""),
            "Service Unavailable"
        );
    }

    #[test]
    fn test_create_body_drops_nulls() {
        let mut draft = Draft::named("Karim", "Gharbi");
        draft.category = None;
        draft.height = Some(180.0);

        let body = create_body(&draft).unwrap();
        assert_eq!(
            body,
            json!({"first_name": "Karim", "last_name": "Gharbi", "height": 180.0})
        );
    }
}
