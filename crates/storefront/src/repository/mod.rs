mod product;

pub use self::product::ProductQueryRepository;
