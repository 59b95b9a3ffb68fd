// FTCScout GraphQL search.

use crate::config::Config;
use crate::constants::ftc_search::{MIN_QUERY_CHARS, RESULT_LIMIT};
use crate::data_fetcher::models::{
    FtcSearchData, FtcSearchResults, GraphQlRequest, GraphQlResponse, SearchVariables,
};
use crate::error::AppError;
use reqwest::Client;
use tracing::{error, info, instrument, warn};

use super::fetch_utils::post_json;

const SEARCH_QUERY: &str = r#"
query TeamEventSearch($searchText: String, $limit: Int, $season: Int!) {
  teamsSearch(searchText: $searchText, limit: $limit) {
    name
    number
    location {
      city
      state
      country
    }
    quickStats(season: $season) {
      auto { rank value }
      eg { rank value }
      tot { rank value }
      dc { rank value }
    }
  }
  eventsSearch(searchText: $searchText, season: $season, limit: $limit) {
    name
    start
    end
    code
  }
}"#;

/// Returns whether `text` is long enough to be sent to FTCScout.
///
/// An empty query is sent as-is; one or two characters are not. Length is
/// counted in UTF-16 code units, the way the search box measures it.
///
/// # Example
/// ```
/// use robostats::data_fetcher::api::should_search;
///
/// assert!(should_search(""));
/// assert!(!should_search("ro"));
/// assert!(should_search("rob"));
/// ```
pub fn should_search(text: &str) -> bool {
    let len = text.encode_utf16().count();
    len == 0 || len >= MIN_QUERY_CHARS
}

/// Runs the team and event search. Any `errors` field, even an empty list,
/// is returned as [`AppError::GraphQl`]; a response without data is an
/// empty result.
#[instrument(skip(client, config))]
pub async fn search_ftc(
    client: &Client,
    config: &Config,
    text: &str,
    season: i32,
) -> Result<FtcSearchResults, AppError> {
    let url = config.ftcscout_api_url.as_str();
    let request = GraphQlRequest {
        query: SEARCH_QUERY,
        variables: SearchVariables {
            search_text: text,
            limit: RESULT_LIMIT,
            season,
        },
    };

    let response: GraphQlResponse<FtcSearchData> = post_json(client, url, &request).await?;

    if let Some(errors) = response.errors {
        let message = if errors.is_empty() {
            "response reported an empty error list".to_string()
        } else {
            errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ")
        };
        return Err(AppError::graphql(message, url));
    }

    let Some(data) = response.data else {
        warn!("FTCScout response carried no data for '{text}'");
        return Ok(FtcSearchResults::default());
    };

    let mut teams = data.teams_search.unwrap_or_default();
    let mut events = data.events_search.unwrap_or_default();
    teams.truncate(RESULT_LIMIT);
    events.truncate(RESULT_LIMIT);

    info!("FTCScout search '{}' found {} teams and {} events", text, teams.len(), events.len());
    Ok(FtcSearchResults { teams, events })
}

/// Search as the `ftc-search` command runs it: `None` when the text is too
/// short to search, otherwise the results, with any failure logged and
/// treated as an empty result.
pub async fn search_ftc_or_empty(
    client: &Client,
    config: &Config,
    text: &str,
    season: i32,
) -> Option<FtcSearchResults> {
    if !should_search(text) {
        info!("Search text '{text}' too short, not searching");
        return None;
    }

    match search_ftc(client, config, text, season).await {
        Ok(results) => Some(results),
        Err(e) => {
            error!("FTC search failed: {e}");
            Some(FtcSearchResults::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_partial_json, method, path},
    };

    fn create_mock_config(server: &MockServer) -> Config {
        Config {
            ftcscout_api_url: format!("{}/graphql", server.uri()),
            ..Config::default()
        }
    }

    fn team_json(number: i32) -> serde_json::Value {
        json!({
            "name": format!("Team {number}"),
            "number": number,
            "location": {"city": "Austin", "state": "TX", "country": "USA"},
            "quickStats": {
                "tot": {"rank": 5, "value": 120.456},
                "auto": null, "dc": null, "eg": null
            }
        })
    }

    #[test]
    fn test_should_search_boundaries() {
        assert!(should_search(""));
        assert!(!should_search("a"));
        assert!(!should_search("ab"));
        assert!(should_search("abc"));
        // counted in UTF-16 units, not bytes
        assert!(!should_search("éé"));
        assert!(!should_search("🤖"));
        assert!(should_search("a🤖"));
    }

    #[tokio::test]
    async fn test_search_sends_variables_and_parses_results() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(body_partial_json(json!({
                "variables": {"searchText": "robo", "limit": 10, "season": 2024}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "teamsSearch": [team_json(16236)],
                    "eventsSearch": [{"name": "Texas Qualifier", "code": "USTXHOQ",
                                      "start": "2024-11-02", "end": "2024-11-02"}]
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = create_mock_config(&mock_server);
        let client = create_test_http_client();
        let results = search_ftc(&client, &config, "robo", 2024).await.unwrap();
        assert_eq!(results.teams.len(), 1);
        assert_eq!(results.teams[0].number, 16236);
        assert_eq!(results.events[0].code, "USTXHOQ");
    }

    #[tokio::test]
    async fn test_search_truncates_to_limit() {
        let mock_server = MockServer::start().await;
        let teams: Vec<_> = (1..=15).map(team_json).collect();
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": {"teamsSearch": teams, "eventsSearch": null}})),
            )
            .mount(&mock_server)
            .await;

        let config = create_mock_config(&mock_server);
        let client = create_test_http_client();
        let results = search_ftc(&client, &config, "team", 2024).await.unwrap();
        assert_eq!(results.teams.len(), 10);
        assert!(results.events.is_empty());
    }

    #[tokio::test]
    async fn test_graphql_errors_become_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "errors": [{"message": "Cannot query field \"foo\""}]
            })))
            .mount(&mock_server)
            .await;

        let config = create_mock_config(&mock_server);
        let client = create_test_http_client();
        let result = search_ftc(&client, &config, "robo", 2024).await;
        assert!(matches!(result, Err(AppError::GraphQl { .. })));

        let lenient = search_ftc_or_empty(&client, &config, "robo", 2024).await;
        assert!(lenient.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_error_list_is_still_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"teamsSearch": [team_json(16236)], "eventsSearch": []},
                "errors": []
            })))
            .mount(&mock_server)
            .await;

        let config = create_mock_config(&mock_server);
        let client = create_test_http_client();
        let result = search_ftc(&client, &config, "robo", 2024).await;
        assert!(matches!(result, Err(AppError::GraphQl { .. })));
    }

    #[tokio::test]
    async fn test_null_errors_is_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"teamsSearch": [team_json(16236)], "eventsSearch": []},
                "errors": null
            })))
            .mount(&mock_server)
            .await;

        let config = create_mock_config(&mock_server);
        let client = create_test_http_client();
        let results = search_ftc(&client, &config, "robo", 2024).await.unwrap();
        assert_eq!(results.teams.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_data_is_empty() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
            .mount(&mock_server)
            .await;

        let config = create_mock_config(&mock_server);
        let client = create_test_http_client();
        let results = search_ftc(&client, &config, "robo", 2024).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_short_text_makes_no_request() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let config = create_mock_config(&mock_server);
        let client = create_test_http_client();
        assert!(search_ftc_or_empty(&client, &config, "ro", 2024).await.is_none());
    }

    #[tokio::test]
    async fn test_server_error_is_empty_result() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let config = create_mock_config(&mock_server);
        let client = create_test_http_client();
        let results = search_ftc_or_empty(&client, &config, "robo", 2024).await;
        assert!(results.unwrap().is_empty());
    }
}
