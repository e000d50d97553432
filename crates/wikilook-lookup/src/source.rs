use reqwest::blocking::Client;
use reqwest::header;
use wikilook_config::lookup::LookupConfig;

use crate::error::LookupError;
use crate::response::QueryResponse;

/// Where page summaries and thumbnails come from
pub trait PageSource {
    /// Run the summary query for one exact page title
    fn query(&self, term: &str) -> Result<QueryResponse, LookupError>;

    /// Download a resource such as a thumbnail
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, LookupError>;
}

/// MediaWiki `api.php` over blocking HTTP
pub struct WikipediaSource {
    client: Client,
    endpoint: String,
    thumbnail_size: u32,
}

impl WikipediaSource {
    pub fn new(config: &LookupConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .user_agent(config.user_agent())
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            thumbnail_size: config.thumbnail_size,
        })
    }

    fn query_params<'a>(
        &self,
        term: &'a str,
        thumbnail_size: &'a str,
    ) -> [(&'static str, &'a str); 8] {
        [
            ("action", "query"),
            ("format", "json"),
            ("prop", "extracts|info|pageimages"),
            ("titles", term),
            ("redirects", "1"),
            ("inprop", "url"),
            ("exintro", "1"),
            ("pithumbsize", thumbnail_size),
        ]
    }
}

impl PageSource for WikipediaSource {
    fn query(&self, term: &str) -> Result<QueryResponse, LookupError> {
        let thumbnail_size = self.thumbnail_size.to_string();
        let params = self.query_params(term, &thumbnail_size);

        let response = self
            .client
            .get(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .query(&params)
            .send()?
            .error_for_status()?;

        let body = response.text()?;
        QueryResponse::from_json(&body)
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, LookupError> {
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }
}
