pub mod conversion_service;
pub mod index_service;
pub mod pricing_service;
pub mod rate_cache;
