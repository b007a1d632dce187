pub mod app_config;
pub mod discount_repo;

pub use discount_repo::ConfigDiscountService;
