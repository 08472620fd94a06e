//! End-to-end cart engine tests against an in-memory store fake, covering
//! the add/remove/list/clear/total flows and their pricing arithmetic.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use num_traits::Zero;
use uuid::Uuid;

use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get_items::GetCartItemsUseCaseImpl;
use business::application::cart::get_total::GetCartTotalUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::domain::cart::model::CartLine;
use business::domain::cart::repository::CartLineRepository;
use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::get_items::{GetCartItemsParams, GetCartItemsUseCase};
use business::domain::cart::use_cases::get_total::{GetCartTotalParams, GetCartTotalUseCase};
use business::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use business::domain::errors::RepositoryError;
use business::domain::logger::Logger;
use business::domain::pie::model::{Pie, PieProps};
use business::domain::pie::repository::PieRepository;
use business::domain::shared::value_objects::CartId;

struct NoopLogger;

impl Logger for NoopLogger {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}

/// Store fake backing both ports: a fixed pie catalog and a mutable set of
/// cart lines with the same upsert/aggregate semantics as the SQL adapter.
struct InMemoryStore {
    pies: HashMap<Uuid, Pie>,
    lines: Mutex<Vec<CartLine>>,
}

impl InMemoryStore {
    fn new(pies: Vec<Pie>) -> Self {
        Self {
            pies: pies.into_iter().map(|p| (p.id, p)).collect(),
            lines: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PieRepository for InMemoryStore {
    async fn get_all(&self) -> Result<Vec<Pie>, RepositoryError> {
        Ok(self.pies.values().cloned().collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Pie, RepositoryError> {
        self.pies.get(&id).cloned().ok_or(RepositoryError::NotFound)
    }

    async fn get_pies_of_the_week(&self) -> Result<Vec<Pie>, RepositoryError> {
        Ok(self
            .pies
            .values()
            .filter(|p| p.is_pie_of_the_week)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CartLineRepository for InMemoryStore {
    async fn get_all(&self, cart_id: &CartId) -> Result<Vec<CartLine>, RepositoryError> {
        let lines = self.lines.lock().unwrap();
        Ok(lines
            .iter()
            .filter(|l| &l.cart_id == cart_id)
            .cloned()
            .collect())
    }

    async fn find_by_pie_id(
        &self,
        cart_id: &CartId,
        pie_id: Uuid,
    ) -> Result<Option<CartLine>, RepositoryError> {
        let lines = self.lines.lock().unwrap();
        Ok(lines
            .iter()
            .find(|l| &l.cart_id == cart_id && l.pie_id == pie_id)
            .cloned())
    }

    async fn save(&self, line: &CartLine) -> Result<(), RepositoryError> {
        let mut lines = self.lines.lock().unwrap();
        match lines
            .iter_mut()
            .find(|l| l.cart_id == line.cart_id && l.pie_id == line.pie_id)
        {
            Some(existing) => *existing = line.clone(),
            None => lines.push(line.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut lines = self.lines.lock().unwrap();
        lines.retain(|l| l.id != id);
        Ok(())
    }

    async fn delete_by_cart_id(&self, cart_id: &CartId) -> Result<u64, RepositoryError> {
        let mut lines = self.lines.lock().unwrap();
        let before = lines.len();
        lines.retain(|l| &l.cart_id != cart_id);
        Ok((before - lines.len()) as u64)
    }

    async fn total(&self, cart_id: &CartId) -> Result<BigDecimal, RepositoryError> {
        let lines = self.lines.lock().unwrap();
        let mut total = BigDecimal::zero();
        for line in lines.iter().filter(|l| &l.cart_id == cart_id) {
            let pie = self.pies.get(&line.pie_id).ok_or(RepositoryError::NotFound)?;
            total += &pie.price * BigDecimal::from(line.quantity);
        }
        Ok(total)
    }
}

fn pie(name: &str, price: &str, featured: bool) -> Pie {
    Pie::from_repository(PieProps {
        id: Uuid::new_v4(),
        name: name.to_string(),
        short_description: format!("{} (short)", name),
        long_description: format!("{} (long)", name),
        allergy_information: "Contains gluten".to_string(),
        price: price.parse().unwrap(),
        image_url: "/images/pie.jpg".to_string(),
        image_thumbnail_url: "/images/thumbs/pie.jpg".to_string(),
        is_pie_of_the_week: featured,
        in_stock: true,
    })
}

struct Engine {
    add: AddCartItemUseCaseImpl,
    remove: RemoveCartItemUseCaseImpl,
    items: GetCartItemsUseCaseImpl,
    clear: ClearCartUseCaseImpl,
    total: GetCartTotalUseCaseImpl,
}

fn engine(store: &Arc<InMemoryStore>) -> Engine {
    let logger: Arc<dyn Logger> = Arc::new(NoopLogger);
    let cart_repo: Arc<dyn CartLineRepository> = store.clone();
    let pie_repo: Arc<dyn PieRepository> = store.clone();
    Engine {
        add: AddCartItemUseCaseImpl {
            repository: cart_repo.clone(),
            logger: logger.clone(),
        },
        remove: RemoveCartItemUseCaseImpl {
            repository: cart_repo.clone(),
            logger: logger.clone(),
        },
        items: GetCartItemsUseCaseImpl {
            cart_repository: cart_repo.clone(),
            pie_repository: pie_repo,
            logger: logger.clone(),
        },
        clear: ClearCartUseCaseImpl {
            repository: cart_repo.clone(),
            logger: logger.clone(),
        },
        total: GetCartTotalUseCaseImpl {
            repository: cart_repo,
            logger,
        },
    }
}

fn decimal(s: &str) -> BigDecimal {
    s.parse().unwrap()
}

async fn quantities(engine: &Engine, cart_id: &CartId) -> HashMap<Uuid, i32> {
    engine
        .items
        .execute(GetCartItemsParams {
            cart_id: cart_id.clone(),
        })
        .await
        .unwrap()
        .into_iter()
        .map(|item| (item.pie.id, item.line.quantity))
        .collect()
}

#[tokio::test]
async fn storefront_scenario_add_remove_clear() {
    let strawberry = pie("Strawberry Pie", "15.95", true);
    let cheese_cake = pie("Cheese Cake", "18.95", false);
    let (a, b) = (strawberry.id, cheese_cake.id);
    let store = Arc::new(InMemoryStore::new(vec![strawberry, cheese_cake]));
    let engine = engine(&store);
    let cart_id = CartId::mint();

    // A twice, B once.
    for pie_id in [a, a, b] {
        engine
            .add
            .execute(AddCartItemParams {
                cart_id: cart_id.clone(),
                pie_id,
            })
            .await
            .unwrap();
    }

    let qty = quantities(&engine, &cart_id).await;
    assert_eq!(qty.len(), 2);
    assert_eq!(qty[&a], 2);
    assert_eq!(qty[&b], 1);
    let total = engine
        .total
        .execute(GetCartTotalParams {
            cart_id: cart_id.clone(),
        })
        .await
        .unwrap();
    assert_eq!(total, decimal("50.85"));

    // One unit of A off.
    let remaining = engine
        .remove
        .execute(RemoveCartItemParams {
            cart_id: cart_id.clone(),
            pie_id: a,
        })
        .await
        .unwrap();
    assert_eq!(remaining, 1);
    let qty = quantities(&engine, &cart_id).await;
    assert_eq!(qty[&a], 1);
    assert_eq!(qty[&b], 1);
    let total = engine
        .total
        .execute(GetCartTotalParams {
            cart_id: cart_id.clone(),
        })
        .await
        .unwrap();
    assert_eq!(total, decimal("34.90"));

    // Last unit of A deletes the line.
    let remaining = engine
        .remove
        .execute(RemoveCartItemParams {
            cart_id: cart_id.clone(),
            pie_id: a,
        })
        .await
        .unwrap();
    assert_eq!(remaining, 0);
    let qty = quantities(&engine, &cart_id).await;
    assert_eq!(qty.len(), 1);
    assert_eq!(qty[&b], 1);
    let total = engine
        .total
        .execute(GetCartTotalParams {
            cart_id: cart_id.clone(),
        })
        .await
        .unwrap();
    assert_eq!(total, decimal("18.95"));

    // Clear empties the cart; a second clear is a no-op.
    let removed = engine
        .clear
        .execute(ClearCartParams {
            cart_id: cart_id.clone(),
        })
        .await
        .unwrap();
    assert_eq!(removed, 1);
    assert!(quantities(&engine, &cart_id).await.is_empty());
    let removed = engine
        .clear
        .execute(ClearCartParams {
            cart_id: cart_id.clone(),
        })
        .await
        .unwrap();
    assert_eq!(removed, 0);
    let total = engine
        .total
        .execute(GetCartTotalParams {
            cart_id: cart_id.clone(),
        })
        .await
        .unwrap();
    assert!(total.is_zero());
}

#[tokio::test]
async fn removing_an_absent_pie_leaves_the_cart_unchanged() {
    let strawberry = pie("Strawberry Pie", "15.95", true);
    let rhubarb = pie("Rhubarb Pie", "15.95", false);
    let (present, absent) = (strawberry.id, rhubarb.id);
    let store = Arc::new(InMemoryStore::new(vec![strawberry, rhubarb]));
    let engine = engine(&store);
    let cart_id = CartId::mint();

    engine
        .add
        .execute(AddCartItemParams {
            cart_id: cart_id.clone(),
            pie_id: present,
        })
        .await
        .unwrap();

    let remaining = engine
        .remove
        .execute(RemoveCartItemParams {
            cart_id: cart_id.clone(),
            pie_id: absent,
        })
        .await
        .unwrap();

    assert_eq!(remaining, 0);
    let qty = quantities(&engine, &cart_id).await;
    assert_eq!(qty.len(), 1);
    assert_eq!(qty[&present], 1);
}

#[tokio::test]
async fn carts_do_not_observe_each_other() {
    let strawberry = pie("Strawberry Pie", "15.95", true);
    let pie_id = strawberry.id;
    let store = Arc::new(InMemoryStore::new(vec![strawberry]));
    let engine = engine(&store);
    let first = CartId::mint();
    let second = CartId::mint();

    engine
        .add
        .execute(AddCartItemParams {
            cart_id: first.clone(),
            pie_id,
        })
        .await
        .unwrap();

    assert!(quantities(&engine, &second).await.is_empty());
    let total = engine
        .total
        .execute(GetCartTotalParams { cart_id: second })
        .await
        .unwrap();
    assert!(total.is_zero());
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    // Random add/remove interleavings against the engine, checked against a
    // plain counter model: one line per pie, quantity at least 1, total
    // equals the model's price sum.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]
        #[test]
        fn engine_matches_counter_model(ops in proptest::collection::vec((any::<bool>(), 0usize..3), 0..40)) {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async move {
                let pies = vec![
                    pie("Strawberry Pie", "15.95", true),
                    pie("Cheese Cake", "18.95", false),
                    pie("Pumpkin Pie", "12.95", false),
                ];
                let ids: Vec<Uuid> = pies.iter().map(|p| p.id).collect();
                let prices: HashMap<Uuid, BigDecimal> =
                    pies.iter().map(|p| (p.id, p.price.clone())).collect();
                let store = Arc::new(InMemoryStore::new(pies));
                let engine = engine(&store);
                let cart_id = CartId::mint();
                let mut model: HashMap<Uuid, i32> = HashMap::new();

                for (is_add, index) in ops {
                    let pie_id = ids[index];
                    if is_add {
                        let line = engine
                            .add
                            .execute(AddCartItemParams {
                                cart_id: cart_id.clone(),
                                pie_id,
                            })
                            .await
                            .unwrap();
                        let expected = model.entry(pie_id).or_insert(0);
                        *expected += 1;
                        assert_eq!(line.quantity, *expected);
                    } else {
                        let remaining = engine
                            .remove
                            .execute(RemoveCartItemParams {
                                cart_id: cart_id.clone(),
                                pie_id,
                            })
                            .await
                            .unwrap();
                        match model.get_mut(&pie_id) {
                            Some(count) if *count > 1 => {
                                *count -= 1;
                                assert_eq!(remaining, *count);
                            }
                            Some(_) => {
                                model.remove(&pie_id);
                                assert_eq!(remaining, 0);
                            }
                            None => assert_eq!(remaining, 0),
                        }
                    }

                    let observed = quantities(&engine, &cart_id).await;
                    assert_eq!(observed, model);
                    for quantity in observed.values() {
                        assert!(*quantity >= 1);
                    }
                }

                let expected_total: BigDecimal = model
                    .iter()
                    .map(|(pie_id, quantity)| &prices[pie_id] * BigDecimal::from(*quantity))
                    .sum();
                let total = engine
                    .total
                    .execute(GetCartTotalParams { cart_id })
                    .await
                    .unwrap();
                assert_eq!(total, expected_total);
            });
        }
    }
}
