use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::utils::date::{SystemYear, YearSource};

pub fn create_catalog_service(config: &Configuration) -> Box<dyn CatalogService> {
    create_catalog_service_with_year(config, Box::new(SystemYear))
}

pub fn create_catalog_service_with_year(config: &Configuration, year_source: Box<dyn YearSource>) -> Box<dyn CatalogService> {
    let book_repo = factory::create_book_repository();
    Box::new(CatalogServiceImpl::new(config, book_repo, year_source))
}
