use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default public endpoint of the Yandex Speller text-check API.
pub const DEFAULT_SPELLER_URL: &str =
    "https://speller.yandex.net/services/spellservice.json/checkText";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// One misspelled word reported by the speller, with correction suggestions.
/// The wire format names the suggestion list `s`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellIssue {
    pub word: String,
    #[serde(alias = "s", default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug)]
pub enum SpellerError {
    Request(reqwest::Error),
    Status(reqwest::StatusCode),
}

impl From<reqwest::Error> for SpellerError {
    fn from(inner: reqwest::Error) -> Self {
        SpellerError::Request(inner)
    }
}

/// Pass-through client for an external spellchecking endpoint. No caching,
/// no retries; a single request with a fixed timeout.
#[derive(Clone)]
pub struct SpellerClient {
    client: reqwest::Client,
    url: String,
}

impl SpellerClient {
    pub fn new(url: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// Sends the text to the speller as a form-encoded POST and returns the
    /// reported issues. A non-200 status or an unparseable body are both
    /// adapter failures.
    pub async fn check_text(
        &self,
        text: &str,
        lang: &str,
        options: u32,
    ) -> Result<Vec<SpellIssue>, SpellerError> {
        let options = options.to_string();
        let params = [
            ("text", text),
            ("lang", lang),
            ("options", options.as_str()),
            ("format", "plain"),
        ];

        let response = self.client.post(&self.url).form(&params).send().await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(SpellerError::Status(status));
        }

        let issues = response.json::<Vec<SpellIssue>>().await?;
        Ok(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SpellerClient {
        SpellerClient::new(&format!("{}/checkText", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn clean_text_yields_no_issues() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/checkText"))
            .and(body_string_contains("format=plain"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let issues = client.check_text("hello world", "en", 0).await.unwrap();
        assert!(issues.is_empty());
    }

    #[tokio::test]
    async fn issues_are_decoded_from_wire_format() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/checkText"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"code": 1, "pos": 0, "len": 4, "word": "helo", "s": ["hello", "halo"]}
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let issues = client.check_text("helo", "en", 0).await.unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].word, "helo");
        assert_eq!(issues[0].suggestions, vec!["hello", "halo"]);
    }

    #[tokio::test]
    async fn non_200_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/checkText"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.check_text("hello", "en", 0).await.unwrap_err();
        assert!(
            matches!(err, SpellerError::Status(s) if s == reqwest::StatusCode::SERVICE_UNAVAILABLE)
        );
    }

    #[tokio::test]
    async fn malformed_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/checkText"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.check_text("hello", "en", 0).await.unwrap_err();
        assert!(matches!(err, SpellerError::Request(_)));
    }
}
