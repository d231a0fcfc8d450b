use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::response::product::ProductResponse,
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        info!("🔍 Finding all products");

        let products = match self.query.find_all().await {
            Ok(products) => {
                info!("✅ Retrieved {} products from DB", products.len());
                products
            }
            Err(e) => {
                error!("❌ Failed to retrieve products: {e:?}");
                return Err(ServiceError::from(e));
            }
        };

        Ok(products.into_iter().map(ProductResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{abstract_trait::ProductQueryRepositoryTrait, model::product::Product};
    use chrono::NaiveDate;
    use shared::errors::RepositoryError;
    use std::sync::Arc;

    struct StubProductRepository {
        rows: Result<Vec<Product>, RepositoryError>,
    }

    #[async_trait]
    impl ProductQueryRepositoryTrait for StubProductRepository {
        async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
            match &self.rows {
                Ok(rows) => Ok(rows.clone()),
                Err(_) => Err(RepositoryError::Custom("connection refused".to_string())),
            }
        }
    }

    fn product(id: i32, name: &str, price: f64) -> Product {
        Product {
            product_id: id,
            name: name.to_string(),
            description: None,
            price,
            image_url: None,
            created_at: NaiveDate::from_ymd_opt(2025, 8, 15)
                .unwrap()
                .and_hms_opt(9, 0, 0),
        }
    }

    #[tokio::test]
    async fn find_all_maps_rows_preserving_order() {
        let repo = StubProductRepository {
            rows: Ok(vec![product(2, "Mocha", 4.25), product(1, "Latte", 3.5)]),
        };
        let service = ProductQueryService::new(Arc::new(repo));

        let responses = service.find_all().await.unwrap();

        let ids: Vec<i32> = responses.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(responses[1].name, "Latte");
        assert_eq!(responses[1].price, 3.5);
    }

    #[tokio::test]
    async fn find_all_surfaces_repository_failure() {
        let repo = StubProductRepository {
            rows: Err(RepositoryError::Custom("connection refused".to_string())),
        };
        let service = ProductQueryService::new(Arc::new(repo));

        let err = service.find_all().await.unwrap_err();

        assert!(matches!(err, ServiceError::Repo(_)));
    }

    #[tokio::test]
    async fn find_all_returns_empty_vec_for_empty_catalog() {
        let repo = StubProductRepository { rows: Ok(vec![]) };
        let service = ProductQueryService::new(Arc::new(repo));

        let responses = service.find_all().await.unwrap();

        assert!(responses.is_empty());
    }
}
