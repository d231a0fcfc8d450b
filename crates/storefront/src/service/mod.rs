mod product;

pub use self::product::ProductQueryService;
