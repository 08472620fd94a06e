use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::CartLineRepositoryPostgres;
use persistence::pie::repository::PieRepositoryPostgres;

use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get_items::GetCartItemsUseCaseImpl;
use business::application::cart::get_total::GetCartTotalUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::pie::get_all::GetAllPiesUseCaseImpl;
use business::application::pie::get_by_id::GetPieByIdUseCaseImpl;
use business::application::pie::get_of_the_week::GetPiesOfTheWeekUseCaseImpl;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub pie_api: crate::api::pie::routes::PieApi,
    pub cart_api: crate::api::cart::routes::CartApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let pie_repository = Arc::new(PieRepositoryPostgres::new(pool.clone()));
        let cart_repository = Arc::new(CartLineRepositoryPostgres::new(pool));

        // Pie use cases
        let get_all_pies_use_case = Arc::new(GetAllPiesUseCaseImpl {
            repository: pie_repository.clone(),
            logger: logger.clone(),
        });
        let get_pie_by_id_use_case = Arc::new(GetPieByIdUseCaseImpl {
            repository: pie_repository.clone(),
            logger: logger.clone(),
        });
        let get_pies_of_the_week_use_case = Arc::new(GetPiesOfTheWeekUseCaseImpl {
            repository: pie_repository.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let add_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let remove_item_use_case = Arc::new(RemoveCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let get_items_use_case = Arc::new(GetCartItemsUseCaseImpl {
            cart_repository: cart_repository.clone(),
            pie_repository: pie_repository.clone(),
            logger: logger.clone(),
        });
        let clear_use_case = Arc::new(ClearCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let get_total_use_case = Arc::new(GetCartTotalUseCaseImpl {
            repository: cart_repository,
            logger,
        });

        let pie_api = crate::api::pie::routes::PieApi::new(
            get_all_pies_use_case,
            get_pie_by_id_use_case,
            get_pies_of_the_week_use_case,
        );

        let cart_api = crate::api::cart::routes::CartApi::new(
            add_item_use_case,
            remove_item_use_case,
            get_items_use_case,
            clear_use_case,
            get_total_use_case,
        );

        Self {
            health_api,
            pie_api,
            cart_api,
        }
    }
}
