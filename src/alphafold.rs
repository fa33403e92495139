use std::fs::File;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::domain::{ModelVersion, UniprotId};
use crate::error::AfError;

/// Access to the AlphaFold file archive.
///
/// `probe` answers whether a structure exists for a given model release;
/// `download` fetches it. The two are separate requests on purpose: the
/// resolution pass only looks at statuses, the download pass takes the body.
pub trait AlphafoldClient: Send + Sync {
    fn probe(&self, id: &UniprotId, version: ModelVersion) -> Result<bool, AfError>;
    fn download(
        &self,
        id: &UniprotId,
        version: ModelVersion,
        destination: &Path,
    ) -> Result<(), AfError>;
}

#[derive(Clone)]
pub struct AlphafoldHttpClient {
    client: Client,
}

impl AlphafoldHttpClient {
    pub fn new() -> Result<Self, AfError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("af-fetch/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| AfError::Http(err.to_string()))?,
        );
        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|err| AfError::Http(err.to_string()))?;
        Ok(Self { client })
    }

    pub fn structure_url(id: &UniprotId, version: ModelVersion) -> String {
        format!(
            "https://alphafold.ebi.ac.uk/files/AF-{}-F1-model_{}.pdb",
            id.as_str(),
            version
        )
    }
}

impl AlphafoldClient for AlphafoldHttpClient {
    fn probe(&self, id: &UniprotId, version: ModelVersion) -> Result<bool, AfError> {
        let url = Self::structure_url(id, version);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|err| AfError::Http(err.to_string()))?;
        Ok(response.status().is_success())
    }

    fn download(
        &self,
        id: &UniprotId,
        version: ModelVersion,
        destination: &Path,
    ) -> Result<(), AfError> {
        let url = Self::structure_url(id, version);
        let mut response = self
            .client
            .get(&url)
            .send()
            .map_err(|err| AfError::Http(err.to_string()))?;
        // The body is written even for a non-success status: when no release
        // resolved, the archive's error page ends up in the file rather than
        // nothing at all.
        let mut file =
            File::create(destination).map_err(|err| AfError::Filesystem(err.to_string()))?;
        std::io::copy(&mut response, &mut file)
            .map_err(|err| AfError::Filesystem(err.to_string()))?;
        Ok(())
    }
}
