use super::{DetailRequest, ListFetch, ListRequest};
use crate::api::CatalogApi;
use crate::error::CatalogError;
use crate::model::Product;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    List(ListRequest),
    Detail(DetailRequest),
}

#[derive(Debug)]
pub enum FetchOutcome {
    List {
        request: ListRequest,
        result: Result<Vec<Product>, CatalogError>,
    },
    Detail {
        request: DetailRequest,
        result: Result<Product, CatalogError>,
    },
}

/// Runs one request against the catalog. Errors are carried in the outcome so
/// the owning screen decides how to surface them.
pub async fn execute(api: &dyn CatalogApi, request: FetchRequest) -> FetchOutcome {
    match request {
        FetchRequest::List(request) => {
            let result = match &request.fetch {
                ListFetch::All | ListFetch::Refresh => api.list_products().await,
                ListFetch::Search(query) => api.search_products(query).await,
            };
            FetchOutcome::List { request, result }
        }
        FetchRequest::Detail(request) => {
            let result = api.get_product(request.product_id).await;
            FetchOutcome::Detail { request, result }
        }
    }
}
