use crate::application::dto::SearchResults;
use crate::ports::outbound::{PackageRegistry, ProgressReporter};
use crate::stats_analysis::domain::SearchHit;

/// SearchPackagesUseCase - registry search for the package picker
///
/// Never fails: blank queries and registry errors both yield no hits.
pub struct SearchPackagesUseCase<R, P> {
    registry: R,
    progress_reporter: P,
}

impl<R, P> SearchPackagesUseCase<R, P>
where
    R: PackageRegistry,
    P: ProgressReporter,
{
    pub fn new(registry: R, progress_reporter: P) -> Self {
        Self {
            registry,
            progress_reporter,
        }
    }

    pub async fn execute(&self, query: &str, size: usize) -> SearchResults {
        let query = query.trim();
        let hits = if query.is_empty() || size == 0 {
            Vec::new()
        } else {
            self.search(query, size).await
        };

        SearchResults {
            query: query.to_string(),
            hits,
        }
    }

    async fn search(&self, query: &str, size: usize) -> Vec<SearchHit> {
        match self.registry.search(query, size).await {
            Ok(hits) => hits,
            Err(e) => {
                self.progress_reporter
                    .report_error(&format!("⚠️  Warning: Search failed: {}", e));
                Vec::new()
            }
        }
    }
}
