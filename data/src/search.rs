use crate::{Photo, SearchError, SearchParams, SearchResponse};
use log::{debug, error};

/// Anything that can answer a photo search, the HTTP client in production.
#[allow(async_fn_in_trait)]
pub trait PhotoSource {
    async fn search_photos(&self, params: &SearchParams) -> Result<SearchResponse, SearchError>;
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(SearchError),
}

/// A submitted search that has not been applied to the session yet.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTicket {
    generation: u64,
    params: SearchParams,
}

impl SearchTicket {
    /// Issues exactly one request for this ticket's params.
    pub async fn execute<S: PhotoSource>(self, source: &S) -> SearchOutcome {
        let result = source.search_photos(&self.params).await;
        SearchOutcome {
            ticket: self,
            result,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub ticket: SearchTicket,
    pub result: Result<SearchResponse, SearchError>,
}

/// Current result list plus the status of the most recent search.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchSession {
    generation: u64,
    per_page: Option<u32>,
    status: SearchStatus,
    results: Vec<Photo>,
    total: u64,
}

impl SearchSession {
    pub fn new(per_page: u32) -> Self {
        Self {
            per_page: Some(per_page),
            ..Self::default()
        }
    }

    pub fn status(&self) -> &SearchStatus {
        &self.status
    }

    pub fn results(&self) -> &[Photo] {
        &self.results
    }

    /// Total number of matches the service reported for the last search.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }

    /// Starts a search for `term`, sent exactly as typed. Only an empty
    /// term is ignored.
    ///
    /// Every call supersedes the tickets handed out before it.
    pub fn begin(&mut self, term: &str) -> Option<SearchTicket> {
        if term.is_empty() {
            debug!("Ignoring empty search term");
            return None;
        }
        self.generation += 1;
        self.status = SearchStatus::Loading;
        let mut params = SearchParams::new(term);
        if let Some(per_page) = self.per_page {
            params = params.with_per_page(per_page);
        }
        debug!("Search #{} for {:?}", self.generation, params.query);
        Some(SearchTicket {
            generation: self.generation,
            params,
        })
    }

    /// Applies a finished search. Returns `false` when a newer search was
    /// started in the meantime and the outcome was dropped.
    pub fn complete(&mut self, outcome: SearchOutcome) -> bool {
        if outcome.ticket.generation != self.generation {
            debug!(
                "Dropping stale result of search #{} (current #{})",
                outcome.ticket.generation, self.generation
            );
            return false;
        }
        match outcome.result {
            Ok(response) => {
                self.total = response.total;
                self.results = response.results;
                self.status = SearchStatus::Loaded;
            }
            Err(err) => {
                error!("Search for {:?} failed: {}", outcome.ticket.params.query, err);
                self.total = 0;
                self.results.clear();
                self.status = SearchStatus::Failed(err);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PhotoUrls;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeSource {
        requests: RefCell<Vec<SearchParams>>,
        photos: Vec<Photo>,
        fail_with: Option<SearchError>,
    }

    impl FakeSource {
        fn with_photos(ids: &[&str]) -> Self {
            Self {
                photos: ids.iter().map(|id| photo(id)).collect(),
                ..Self::default()
            }
        }
    }

    impl PhotoSource for FakeSource {
        async fn search_photos(
            &self,
            params: &SearchParams,
        ) -> Result<SearchResponse, SearchError> {
            self.requests.borrow_mut().push(params.clone());
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(SearchResponse {
                    total: self.photos.len() as u64,
                    total_pages: 1,
                    results: self.photos.clone(),
                }),
            }
        }
    }

    fn photo(id: &str) -> Photo {
        Photo {
            id: id.to_string(),
            description: Some(format!("photo {id}")),
            alt_description: None,
            urls: PhotoUrls {
                regular: format!("https://images.example/{id}?w=1080"),
                ..PhotoUrls::default()
            },
            width: None,
            height: None,
            color: None,
        }
    }

    fn ids(session: &SearchSession) -> Vec<&str> {
        session.results().iter().map(|p| p.id.as_str()).collect()
    }

    fn run(session: &mut SearchSession, source: &FakeSource, term: &str) -> bool {
        let ticket = session.begin(term).unwrap();
        let outcome = block_on(ticket.execute(source));
        session.complete(outcome)
    }

    #[test]
    fn one_request_per_submission_with_exact_term() {
        let source = FakeSource::with_photos(&["a", "b", "c"]);
        let mut session = SearchSession::new(30);

        assert!(run(&mut session, &source, "mountains"));

        let requests = source.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].query, "mountains");
        assert_eq!(requests[0].per_page, Some(30));
        assert_eq!(ids(&session), ["a", "b", "c"]);
        assert_eq!(session.status(), &SearchStatus::Loaded);
        assert_eq!(session.total(), 3);
    }

    #[test]
    fn empty_term_is_not_submitted() {
        let mut session = SearchSession::default();
        assert_eq!(session.begin(""), None);
        assert_eq!(session.status(), &SearchStatus::Idle);
    }

    #[test]
    fn whitespace_term_is_submitted_unchanged() {
        let source = FakeSource::with_photos(&["a"]);
        let mut session = SearchSession::new(30);

        assert!(run(&mut session, &source, "   "));

        let requests = source.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].query, "   ");
        assert_eq!(ids(&session), ["a"]);
    }

    #[test]
    fn term_is_passed_through_untrimmed() {
        let source = FakeSource::with_photos(&[]);
        let mut session = SearchSession::default();
        run(&mut session, &source, " red fox ");
        assert_eq!(source.requests.borrow()[0].query, " red fox ");
    }

    #[test]
    fn repeated_term_replaces_results() {
        let mut source = FakeSource::with_photos(&["a", "b", "c"]);
        let mut session = SearchSession::new(30);

        run(&mut session, &source, "mountains");
        source.photos = vec![photo("d"), photo("e")];
        run(&mut session, &source, "mountains");

        assert_eq!(source.requests.borrow().len(), 2);
        assert_eq!(ids(&session), ["d", "e"]);
    }

    #[test]
    fn loading_until_completed() {
        let source = FakeSource::with_photos(&["a"]);
        let mut session = SearchSession::default();

        let ticket = session.begin("cats").unwrap();
        assert!(session.is_loading());

        session.complete(block_on(ticket.execute(&source)));
        assert!(!session.is_loading());
    }

    #[test]
    fn stale_outcome_is_dropped() {
        let old_source = FakeSource::with_photos(&["old"]);
        let new_source = FakeSource::with_photos(&["new"]);
        let mut session = SearchSession::default();

        let first = session.begin("forest").unwrap();
        let second = session.begin("ocean").unwrap();

        // The newer search finishes first.
        assert!(session.complete(block_on(second.execute(&new_source))));
        assert!(!session.complete(block_on(first.execute(&old_source))));

        assert_eq!(ids(&session), ["new"]);
        assert_eq!(session.status(), &SearchStatus::Loaded);
    }

    #[test]
    fn failure_clears_results_and_records_error() {
        let mut source = FakeSource::with_photos(&["a", "b"]);
        let mut session = SearchSession::default();
        run(&mut session, &source, "mountains");

        let err = SearchError::Status {
            status: 401,
            message: "OAuth error: The access token is invalid".into(),
        };
        source.fail_with = Some(err.clone());
        assert!(run(&mut session, &source, "mountains"));

        assert!(session.results().is_empty());
        assert_eq!(session.total(), 0);
        assert_eq!(session.status(), &SearchStatus::Failed(err));
    }

    #[test]
    fn recovers_after_failure() {
        let mut source = FakeSource {
            fail_with: Some(SearchError::Network("offline".into())),
            ..FakeSource::with_photos(&["a"])
        };
        let mut session = SearchSession::default();
        run(&mut session, &source, "mountains");
        assert!(matches!(session.status(), SearchStatus::Failed(_)));

        source.fail_with = None;
        run(&mut session, &source, "mountains");
        assert_eq!(ids(&session), ["a"]);
        assert_eq!(session.status(), &SearchStatus::Loaded);
    }
}
