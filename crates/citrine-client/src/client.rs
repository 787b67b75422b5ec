//! The search client: encodes queries, posts them and decodes the results.

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info_span};

use citrine_config::SearchSettings;
use citrine_query::{
    DatasetReturningQuery, FileReturningQuery, MultiQuery, PifQuery, ReturningQuery,
};
use citrine_result::{DatasetSearchResult, FileSearchResult, MultiSearchResult, PifSearchResult};

use crate::{error::ClientError, transport::Transport};

/// PIF search endpoint.
pub const PIF_SEARCH_PATH: &str = "/api/search/pif_search";

/// Batched PIF search endpoint.
pub const PIF_MULTI_SEARCH_PATH: &str = "/api/search/pif/multi_pif_search";

/// Dataset search endpoint.
pub const DATASET_SEARCH_PATH: &str = "/api/search/dataset";

/// File search endpoint.
pub const FILE_SEARCH_PATH: &str = "/api/search/file";

/// Runs searches over a [`Transport`].
pub struct SearchClient<T> {
    /// Where requests go.
    transport: T,
    /// Paging defaults.
    search: SearchSettings,
}

impl<T: Transport> SearchClient<T> {
    /// Creates a client with default paging settings.
    pub fn new(transport: T) -> Self {
        Self::with_settings(transport, SearchSettings::default())
    }

    /// Creates a client with the given paging settings.
    pub fn with_settings(transport: T, search: SearchSettings) -> Self {
        Self { transport, search }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Searches PIF records.
    pub fn pif_search(&self, query: &PifQuery) -> Result<PifSearchResult, ClientError> {
        self.post(PIF_SEARCH_PATH, query)
    }

    /// Runs several PIF searches in one round trip.
    ///
    /// Each element of the answer carries its own status; a failed sub-query does
    /// not fail the call.
    pub fn pif_multi_search(
        &self,
        queries: &MultiQuery<PifQuery>,
    ) -> Result<MultiSearchResult<PifSearchResult>, ClientError> {
        self.post(PIF_MULTI_SEARCH_PATH, queries)
    }

    /// Searches datasets.
    pub fn dataset_search(
        &self,
        query: &DatasetReturningQuery,
    ) -> Result<DatasetSearchResult, ClientError> {
        self.post(DATASET_SEARCH_PATH, query)
    }

    /// Searches dataset files.
    pub fn file_search(&self, query: &FileReturningQuery) -> Result<FileSearchResult, ClientError> {
        self.post(FILE_SEARCH_PATH, query)
    }

    /// Pages through PIF results, folding the pages into one result.
    ///
    /// A query without a size uses the configured page size, and `max_hits`
    /// defaults to the configured limit. Paging stops on an empty page, once the
    /// reported total is collected, or once `max_hits` hits are held. At most
    /// `max_hits` hits are returned.
    pub fn pif_search_pages(
        &self,
        query: &PifQuery,
        max_hits: Option<u64>,
    ) -> Result<PifSearchResult, ClientError> {
        let max_hits = max_hits.unwrap_or(self.search.max_hits);
        let limit = usize::try_from(max_hits).unwrap_or(usize::MAX);
        let _span = info_span!("pif_search_pages", max_hits).entered();

        let mut page = query.clone();
        if page.base().size().is_none() {
            page = page.with_size(self.search.page_size.min(max_hits));
        }

        let mut collected = PifSearchResult::default();
        loop {
            let result = self.pif_search(&page)?;
            let fetched = result.len();
            collected.merge(result);

            let held = collected.len();
            debug!(
                from = page.base().from().unwrap_or(0),
                fetched,
                held,
                total = collected.total_num_hits(),
                "fetched page"
            );

            let total_reached = collected
                .total_num_hits()
                .is_some_and(|total| held as u64 >= total);
            if fetched == 0 || held >= limit || total_reached {
                break;
            }
            match page.next_page() {
                Some(next) => page = next,
                None => break,
            }
        }

        collected.truncate(limit);
        Ok(collected)
    }

    /// Encodes `body`, posts it to `endpoint` and decodes the answer.
    fn post<B, R>(&self, endpoint: &'static str, body: &B) -> Result<R, ClientError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let encoded = serde_json::to_string(body).map_err(ClientError::Encode)?;
        let response = self
            .transport
            .post_json(endpoint, &encoded)
            .map_err(|source| ClientError::Transport { endpoint, source })?;
        serde_json::from_str(&response).map_err(|source| ClientError::Decode { endpoint, source })
    }
}
