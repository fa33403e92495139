use std::fs;
use std::path::Path;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::alphafold::AlphafoldClient;
use crate::domain::{ModelVersion, UniprotId};
use crate::error::AfError;

#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub fetched: Vec<FetchedItem>,
    pub failed: Vec<FailedItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FetchedItem {
    pub id: UniprotId,
    pub version: ModelVersion,
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FailedItem {
    pub id: UniprotId,
    pub kind: FailureKind,
    pub error: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    Network,
    Filesystem,
}

fn failure_kind(error: &AfError) -> FailureKind {
    match error {
        AfError::Http(_) | AfError::Unavailable => FailureKind::Network,
        _ => FailureKind::Filesystem,
    }
}

/// Downloads one structure file per identifier into a target directory.
///
/// Identifiers are processed independently on a worker pool; a failure on
/// one identifier is logged and recorded in the summary but never stops the
/// rest of the batch.
pub struct BatchFetcher<C: AlphafoldClient> {
    client: C,
}

impl<C: AlphafoldClient> BatchFetcher<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Runs the whole batch. Only setup can fail here: creating the output
    /// directory or starting the worker pool. Everything per-identifier is
    /// contained and reported through the returned summary.
    pub fn run(
        &self,
        ids: &[UniprotId],
        output_dir: &Path,
        concurrency: usize,
    ) -> Result<BatchSummary, AfError> {
        ensure_output_dir(output_dir)?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(concurrency.max(1))
            .build()
            .map_err(|err| AfError::Pool(err.to_string()))?;

        info!(
            identifiers = ids.len(),
            workers = concurrency.max(1),
            "starting structure download batch"
        );

        let outcomes: Vec<Result<FetchedItem, FailedItem>> = pool.install(|| {
            ids.par_iter()
                .map(|id| match self.fetch_one(id, output_dir) {
                    Ok(item) => Ok(item),
                    Err(err) => {
                        warn!("error downloading structure for {id}: {err}");
                        Err(FailedItem {
                            id: id.clone(),
                            kind: failure_kind(&err),
                            error: err.to_string(),
                        })
                    }
                })
                .collect()
        });

        let mut summary = BatchSummary {
            fetched: Vec::new(),
            failed: Vec::new(),
        };
        for outcome in outcomes {
            match outcome {
                Ok(item) => summary.fetched.push(item),
                Err(item) => summary.failed.push(item),
            }
        }

        info!(
            fetched = summary.fetched.len(),
            failed = summary.failed.len(),
            "batch complete"
        );
        Ok(summary)
    }

    fn fetch_one(&self, id: &UniprotId, output_dir: &Path) -> Result<FetchedItem, AfError> {
        let resolved = self.resolve_version(id)?;
        // With no resolvable release the download still runs against the last
        // candidate, v1, and whatever the archive answers (an error page,
        // usually) lands in the file. The identifier is then reported as
        // failed so the gap is visible in the log.
        let version = resolved.unwrap_or(ModelVersion::V1);
        let destination = output_dir.join(format!("{}.pdb", id.as_str()));
        debug!("downloading {id} ({version}) to {}", destination.display());
        self.client.download(id, version, &destination)?;
        match resolved {
            Some(version) => Ok(FetchedItem {
                id: id.clone(),
                version,
                path: destination.display().to_string(),
            }),
            None => Err(AfError::Unavailable),
        }
    }

    /// Picks which model release to download for an identifier.
    ///
    /// The latest release short-circuits. Otherwise every fallback is probed
    /// and each hit overwrites the selection, so the oldest available release
    /// wins (v1 over v2 over v3).
    fn resolve_version(&self, id: &UniprotId) -> Result<Option<ModelVersion>, AfError> {
        if self.client.probe(id, ModelVersion::LATEST)? {
            return Ok(Some(ModelVersion::LATEST));
        }
        let mut selected = None;
        for version in ModelVersion::FALLBACKS {
            if self.client.probe(id, version)? {
                selected = Some(version);
            }
        }
        Ok(selected)
    }
}

fn ensure_output_dir(output_dir: &Path) -> Result<(), AfError> {
    if output_dir.exists() {
        return Ok(());
    }
    fs::create_dir(output_dir).map_err(|err| {
        AfError::Filesystem(format!("create {}: {err}", output_dir.display()))
    })
}
