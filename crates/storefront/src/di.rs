use crate::{
    abstract_trait::{DynProductQueryRepository, DynProductQueryService},
    repository::ProductQueryRepository,
    service::ProductQueryService,
};
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"ProductQueryService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let product_query_repo: DynProductQueryRepository =
            Arc::new(ProductQueryRepository::new(pool));

        let product_query: DynProductQueryService =
            Arc::new(ProductQueryService::new(product_query_repo));

        Self { product_query }
    }
}
