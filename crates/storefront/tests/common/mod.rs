#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use chrono::{NaiveDate, NaiveDateTime};
use shared::errors::RepositoryError;
use std::sync::Arc;
use storefront::{
    abstract_trait::{DynProductQueryRepository, ProductQueryRepositoryTrait},
    di::DependenciesInject,
    handler::AppRouter,
    model::product::Product,
    service::ProductQueryService,
    state::AppState,
};

/// Backing store double that honors the repository contract of returning
/// rows newest first, whatever order they were inserted in.
pub struct InMemoryProductRepository {
    rows: Vec<Product>,
}

impl InMemoryProductRepository {
    pub fn new(rows: Vec<Product>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }
}

pub struct FailingProductRepository;

#[async_trait]
impl ProductQueryRepositoryTrait for FailingProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut))
    }
}

pub fn product(id: i32, name: &str, price: f64, created_at: NaiveDateTime) -> Product {
    Product {
        product_id: id,
        name: name.to_string(),
        description: None,
        price,
        image_url: None,
        created_at: Some(created_at),
    }
}

pub fn at_day(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, day)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

pub fn test_app(repo: DynProductQueryRepository) -> Router {
    let state = AppState {
        di_container: DependenciesInject {
            product_query: Arc::new(ProductQueryService::new(repo)),
        },
    };

    AppRouter::build(Arc::new(state))
}
