mod product;

pub use self::product::{
    DynProductQueryRepository, DynProductQueryService, ProductQueryRepositoryTrait,
    ProductQueryServiceTrait,
};
