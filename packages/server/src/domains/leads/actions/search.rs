use tracing::info;

use crate::domains::leads::models::SearchContext;
use crate::domains::leads::store::LeadStore;
use crate::kernel::BaseSearchService;

/// Search context for a company, or an empty context if the search failed.
pub async fn fetch_search_context(
    company_name: &str,
    search: &dyn BaseSearchService,
    store: &LeadStore,
) -> SearchContext {
    match search.search(company_name).await {
        Ok(context) => {
            info!(
                company = company_name,
                results = context.organic_results.len(),
                "Fetched search context"
            );
            context
        }
        Err(e) => {
            store
                .record_error(format!("Error fetching search data for {company_name}"), &e)
                .await;
            SearchContext::empty()
        }
    }
}
