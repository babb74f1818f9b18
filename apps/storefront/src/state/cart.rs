//! # Cart Store
//!
//! Owns the shopper's cart: checks stock before every change, persists after
//! every successful one, and turns every fault into a toast.
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Locking                                   │
//! │                                                                         │
//! │  gate: tokio::sync::Mutex<()>   held across stock fetch + commit +     │
//! │                                 persist, so mutations run one at a     │
//! │                                 time and storage sees them in order    │
//! │                                                                         │
//! │  cart: std::sync::RwLock<Cart>  short guards only, never held across   │
//! │                                 an .await; reads don't wait on the     │
//! │                                 network                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UI Action            Store Operation            Network                │
//! │  ─────────            ───────────────            ───────                │
//! │                                                                         │
//! │  "Adicionar" ───────► add_product(id) ─────────► GET /stock/{id}       │
//! │                                          (new) ─► GET /products/{id}    │
//! │                                                                         │
//! │  Quantity +/- ──────► update_product_amount() ─► GET /stock/{id}       │
//! │                                                                         │
//! │  Trash icon ────────► remove_product(id)          (none)                │
//! │                                                                         │
//! │  Cart page ─────────► cart() / totals()           (none)                │
//! │                                                                         │
//! │  success ─► storage.set_item(key, json)                                 │
//! │  failure ─► warn! + toast, cart unchanged                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use shoecart_catalog::CatalogApi;
use shoecart_core::validation::requested_amount;
use shoecart_core::{Cart, CartTotals, CoreError, LineItem, ProductId, CART_STORAGE_KEY};
use shoecart_db::LocalStorage;

use crate::error::{CartError, CartOp, CartResult};
use crate::messages::Messages;
use crate::toast::ToastSink;

/// Store settings that aren't collaborators.
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Local storage key holding the cart JSON.
    pub storage_key: String,

    /// Toast texts.
    pub messages: Messages,
}

impl Default for StoreOptions {
    fn default() -> Self {
        StoreOptions {
            storage_key: CART_STORAGE_KEY.to_string(),
            messages: Messages::default(),
        }
    }
}

/// The cart state container.
pub struct CartStore {
    catalog: Arc<dyn CatalogApi>,
    storage: Arc<dyn LocalStorage>,
    toasts: Arc<dyn ToastSink>,
    options: StoreOptions,
    cart: RwLock<Cart>,
    gate: Mutex<()>,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("options", &self.options)
            .field("cart", &*self.read_cart())
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Builds a store, restoring the cart persisted under the storage key.
    ///
    /// ## Hydration
    /// - key missing → empty cart
    /// - storage unreadable or value not a cart → empty cart, `warn!`
    ///
    /// A bad stored value is left alone until the next successful mutation
    /// overwrites it.
    pub async fn hydrate(
        catalog: Arc<dyn CatalogApi>,
        storage: Arc<dyn LocalStorage>,
        toasts: Arc<dyn ToastSink>,
        options: StoreOptions,
    ) -> Self {
        let cart = load_cart(storage.as_ref(), &options.storage_key).await;
        info!(
            key = %options.storage_key,
            items = cart.len(),
            "Cart hydrated from local storage"
        );

        CartStore {
            catalog,
            storage,
            toasts,
            options,
            cart: RwLock::new(cart),
            gate: Mutex::new(()),
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Snapshot of the line items, in insertion order.
    pub fn cart(&self) -> Vec<LineItem> {
        self.read_cart().items().to_vec()
    }

    /// Item count, unit count and subtotal of the current cart.
    pub fn totals(&self) -> CartTotals {
        self.read_cart().totals()
    }

    /// Runs `f` against the current cart under a read guard.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        f(&self.read_cart())
    }

    pub fn messages(&self) -> &Messages {
        &self.options.messages
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds one unit of `id`.
    ///
    /// Returns whether the cart changed. Failures are toasted, not returned.
    pub async fn add_product(&self, id: ProductId) -> bool {
        debug!(product_id = %id, "add_product");
        let _gate = self.gate.lock().await;

        let result = self.try_add(id).await;
        self.settle(CartOp::Add, id, result)
    }

    /// Removes the line for `id`.
    pub async fn remove_product(&self, id: ProductId) -> bool {
        debug!(product_id = %id, "remove_product");
        let _gate = self.gate.lock().await;

        let result = self.try_remove(id).await;
        self.settle(CartOp::Remove, id, result)
    }

    /// Sets the quantity of `id` to `amount`.
    ///
    /// `amount <= 0` is ignored without a network call or a toast.
    pub async fn update_product_amount(&self, id: ProductId, amount: i64) -> bool {
        let Some(amount) = requested_amount(amount) else {
            debug!(product_id = %id, amount, "Ignoring non-positive quantity");
            return false;
        };

        debug!(product_id = %id, amount, "update_product_amount");
        let _gate = self.gate.lock().await;

        let result = self.try_update(id, amount).await;
        self.settle(CartOp::Update, id, result)
    }

    /// Shows the toast for a fault raised outside the store (bad CLI input).
    pub fn report(&self, op: CartOp, err: &CartError) {
        warn!(op = %op, error = %err, "Cart operation rejected");
        self.toasts.show(err.toast(op, &self.options.messages));
    }

    async fn try_add(&self, id: ProductId) -> CartResult<()> {
        let stock = self.catalog.stock(id).await?;
        let in_cart = self.read_cart().contains(id);

        let snapshot = if in_cart {
            let mut cart = self.write_cart();
            let amount = cart.increment(id, stock)?;
            debug!(product_id = %id, amount, "Incremented cart line");
            cart.clone()
        } else {
            if stock.is_empty() {
                return Err(CoreError::Unavailable(id).into());
            }

            let details = self.catalog.product(id).await?;
            let mut cart = self.write_cart();
            cart.insert(&details, stock)?;
            debug!(product_id = %id, title = %details.title, "Added cart line");
            cart.clone()
        };

        self.persist(&snapshot).await;
        Ok(())
    }

    async fn try_remove(&self, id: ProductId) -> CartResult<()> {
        let snapshot = {
            let mut cart = self.write_cart();
            cart.remove(id)?;
            cart.clone()
        };

        self.persist(&snapshot).await;
        Ok(())
    }

    async fn try_update(&self, id: ProductId, amount: u32) -> CartResult<()> {
        let stock = self.catalog.stock(id).await?;

        let snapshot = {
            let mut cart = self.write_cart();
            cart.set_amount(id, amount, stock)?;
            cart.clone()
        };

        self.persist(&snapshot).await;
        Ok(())
    }

    /// Logs and toasts a failed mutation. Returns whether it succeeded.
    fn settle(&self, op: CartOp, id: ProductId, result: CartResult<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(err) => {
                warn!(op = %op, product_id = %id, error = %err, "Cart operation failed");
                self.toasts.show(err.toast(op, &self.options.messages));
                false
            }
        }
    }

    /// Writes the cart to local storage. Failures are logged only.
    async fn persist(&self, cart: &Cart) {
        let value = match serde_json::to_string(cart) {
            Ok(value) => value,
            Err(e) => {
                error!(error = %e, "Failed to serialize cart");
                return;
            }
        };

        if let Err(e) = self
            .storage
            .set_item(&self.options.storage_key, &value)
            .await
        {
            warn!(
                key = %self.options.storage_key,
                error = %e,
                "Failed to persist cart, keeping in-memory state"
            );
        }
    }

    fn read_cart(&self) -> RwLockReadGuard<'_, Cart> {
        self.cart.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_cart(&self) -> RwLockWriteGuard<'_, Cart> {
        self.cart.write().unwrap_or_else(PoisonError::into_inner)
    }
}

async fn load_cart(storage: &dyn LocalStorage, key: &str) -> Cart {
    let raw = match storage.get_item(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return Cart::new(),
        Err(e) => {
            warn!(key = %key, error = %e, "Could not read stored cart, starting empty");
            return Cart::new();
        }
    };

    // `null` is what a cleared web storefront leaves behind
    match serde_json::from_str::<Option<Cart>>(&raw) {
        Ok(cart) => cart.unwrap_or_default(),
        Err(e) => {
            warn!(key = %key, error = %e, "Stored cart is not valid, starting empty");
            Cart::new()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shoecart_catalog::{CatalogError, CatalogResult};
    use shoecart_core::{Money, ProductDetails, Stock};
    use shoecart_db::{Database, DbConfig, MemoryStorage};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU64, Ordering};

    use crate::toast::{Toast, ToastLog};

    const KEY: &str = "@RocketShoes:cart";

    /// In-process stand-in for the stock service.
    #[derive(Default)]
    struct FakeCatalog {
        stock: tokio::sync::Mutex<HashMap<u32, u32>>,
        products: HashMap<u32, ProductDetails>,
        offline: bool,
        stock_calls: AtomicU64,
        product_calls: AtomicU64,
    }

    impl FakeCatalog {
        fn with_products() -> Self {
            let mut products = HashMap::new();
            for (id, title, cents) in [
                (1, "Tênis de Caminhada Leve Confortável", 17990),
                (2, "Tênis VR Caminhada Confortável Detalhes Couro Masculino", 13990),
                (3, "Tênis Adidas Duramo Lite 2.0", 21990),
            ] {
                products.insert(
                    id,
                    ProductDetails {
                        id: ProductId::new(id),
                        title: title.to_string(),
                        price: Money::from_cents(cents),
                        image: format!("https://cdn.test/tenis{}.jpg", id),
                    },
                );
            }

            let stock = HashMap::from([(1, 3), (2, 5), (3, 0)]);
            FakeCatalog {
                stock: tokio::sync::Mutex::new(stock),
                products,
                ..Default::default()
            }
        }

        fn offline() -> Self {
            FakeCatalog {
                offline: true,
                ..Self::with_products()
            }
        }

        async fn set_stock(&self, id: u32, amount: u32) {
            self.stock.lock().await.insert(id, amount);
        }

        fn stock_calls(&self) -> u64 {
            self.stock_calls.load(Ordering::SeqCst)
        }

        fn product_calls(&self) -> u64 {
            self.product_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CatalogApi for FakeCatalog {
        async fn stock(&self, id: ProductId) -> CatalogResult<Stock> {
            self.stock_calls.fetch_add(1, Ordering::SeqCst);
            if self.offline {
                return Err(CatalogError::Request("connection refused".to_string()));
            }
            // Yield so concurrent callers interleave at the network boundary.
            tokio::task::yield_now().await;

            self.stock
                .lock()
                .await
                .get(&id.get())
                .map(|amount| Stock::new(*amount))
                .ok_or(CatalogError::NotFound {
                    resource: "stock",
                    id: id.get(),
                })
        }

        async fn product(&self, id: ProductId) -> CatalogResult<ProductDetails> {
            self.product_calls.fetch_add(1, Ordering::SeqCst);
            if self.offline {
                return Err(CatalogError::Request("connection refused".to_string()));
            }

            self.products
                .get(&id.get())
                .cloned()
                .ok_or(CatalogError::NotFound {
                    resource: "product",
                    id: id.get(),
                })
        }
    }

    struct Harness {
        store: CartStore,
        catalog: Arc<FakeCatalog>,
        storage: Arc<dyn LocalStorage>,
        toasts: ToastLog,
    }

    impl Harness {
        async fn new() -> Self {
            Self::with(FakeCatalog::with_products(), Arc::new(MemoryStorage::new())).await
        }

        async fn with(catalog: FakeCatalog, storage: Arc<dyn LocalStorage>) -> Self {
            let catalog = Arc::new(catalog);
            let toasts = ToastLog::new();
            let store = CartStore::hydrate(
                catalog.clone(),
                storage.clone(),
                Arc::new(toasts.clone()),
                StoreOptions::default(),
            )
            .await;

            Harness {
                store,
                catalog,
                storage,
                toasts,
            }
        }

        async fn stored(&self) -> Option<Vec<LineItem>> {
            self.storage
                .get_item(KEY)
                .await
                .unwrap()
                .map(|raw| serde_json::from_str(&raw).unwrap())
        }
    }

    fn id(raw: u32) -> ProductId {
        ProductId::new(raw)
    }

    // -------------------------------------------------------------------------
    // add_product
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_add_new_product() {
        let h = Harness::new().await;

        assert!(h.store.add_product(id(1)).await);

        let cart = h.store.cart();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].id, id(1));
        assert_eq!(cart[0].amount, 1);
        assert_eq!(cart[0].price, Money::from_cents(17990));
        assert!(h.toasts.is_empty());
        assert_eq!(h.catalog.product_calls(), 1);
    }

    #[tokio::test]
    async fn test_add_existing_product_increments_without_product_fetch() {
        let h = Harness::new().await;
        h.store.add_product(id(1)).await;

        assert!(h.store.add_product(id(1)).await);

        let cart = h.store.cart();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].amount, 2);
        assert_eq!(h.catalog.stock_calls(), 2);
        assert_eq!(h.catalog.product_calls(), 1);
    }

    #[tokio::test]
    async fn test_add_keeps_insertion_order() {
        let h = Harness::new().await;
        h.store.add_product(id(2)).await;
        h.store.add_product(id(1)).await;
        h.store.add_product(id(2)).await;

        let ids: Vec<_> = h.store.cart().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![id(2), id(1)]);
    }

    #[tokio::test]
    async fn test_add_zero_stock_product_fails() {
        let h = Harness::new().await;

        assert!(!h.store.add_product(id(3)).await);

        assert!(h.store.cart().is_empty());
        assert_eq!(
            h.toasts.snapshot(),
            vec![Toast::error("Erro na adição do produto")]
        );
        assert_eq!(h.catalog.product_calls(), 0);
        assert_eq!(h.stored().await, None);
    }

    #[tokio::test]
    async fn test_add_at_stock_limit_warns() {
        let h = Harness::new().await;
        for _ in 0..3 {
            assert!(h.store.add_product(id(1)).await);
        }

        assert!(!h.store.add_product(id(1)).await);

        assert_eq!(h.store.cart()[0].amount, 3);
        assert_eq!(
            h.toasts.snapshot(),
            vec![Toast::warning("Quantidade solicitada fora de estoque")]
        );
    }

    #[tokio::test]
    async fn test_add_when_stock_drops_to_zero_warns() {
        let h = Harness::new().await;
        h.store.add_product(id(2)).await;
        h.catalog.set_stock(2, 0).await;

        assert!(!h.store.add_product(id(2)).await);

        assert_eq!(h.store.cart()[0].amount, 1);
        assert_eq!(
            h.toasts.snapshot(),
            vec![Toast::warning("Quantidade solicitada fora de estoque")]
        );
    }

    #[tokio::test]
    async fn test_add_unknown_product_fails() {
        let h = Harness::new().await;

        assert!(!h.store.add_product(id(99)).await);

        assert!(h.store.cart().is_empty());
        assert_eq!(
            h.toasts.snapshot(),
            vec![Toast::error("Erro na adição do produto")]
        );
    }

    #[tokio::test]
    async fn test_add_while_offline_fails() {
        let h = Harness::with(FakeCatalog::offline(), Arc::new(MemoryStorage::new())).await;

        assert!(!h.store.add_product(id(1)).await);

        assert!(h.store.cart().is_empty());
        assert_eq!(
            h.toasts.snapshot(),
            vec![Toast::error("Erro na adição do produto")]
        );
    }

    // -------------------------------------------------------------------------
    // remove_product
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_remove_product() {
        let h = Harness::new().await;
        h.store.add_product(id(1)).await;
        h.store.add_product(id(2)).await;

        assert!(h.store.remove_product(id(1)).await);

        let cart = h.store.cart();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].id, id(2));
        assert_eq!(h.stored().await.unwrap(), cart);
    }

    #[tokio::test]
    async fn test_remove_missing_product_fails() {
        let h = Harness::new().await;
        h.store.add_product(id(1)).await;
        let stock_calls = h.catalog.stock_calls();

        assert!(!h.store.remove_product(id(2)).await);

        assert_eq!(h.store.cart().len(), 1);
        assert_eq!(
            h.toasts.snapshot(),
            vec![Toast::error("Erro na remoção do produto")]
        );
        assert_eq!(h.catalog.stock_calls(), stock_calls);
    }

    // -------------------------------------------------------------------------
    // update_product_amount
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_update_amount() {
        let h = Harness::new().await;
        h.store.add_product(id(2)).await;

        assert!(h.store.update_product_amount(id(2), 4).await);

        assert_eq!(h.store.cart()[0].amount, 4);
        assert_eq!(h.stored().await.unwrap()[0].amount, 4);
    }

    #[tokio::test]
    async fn test_update_non_positive_amount_is_ignored() {
        let h = Harness::new().await;
        h.store.add_product(id(2)).await;
        let stock_calls = h.catalog.stock_calls();

        assert!(!h.store.update_product_amount(id(2), 0).await);
        assert!(!h.store.update_product_amount(id(2), -3).await);

        assert_eq!(h.store.cart()[0].amount, 1);
        assert!(h.toasts.is_empty());
        assert_eq!(h.catalog.stock_calls(), stock_calls);
    }

    #[tokio::test]
    async fn test_update_above_stock_warns() {
        let h = Harness::new().await;
        h.store.add_product(id(1)).await;

        assert!(!h.store.update_product_amount(id(1), 4).await);

        assert_eq!(h.store.cart()[0].amount, 1);
        assert_eq!(
            h.toasts.snapshot(),
            vec![Toast::warning("Quantidade solicitada fora de estoque")]
        );
    }

    #[tokio::test]
    async fn test_update_reports_missing_product_before_over_stock() {
        let h = Harness::new().await;

        // Above stock and not in the cart: not-in-cart wins.
        assert!(!h.store.update_product_amount(id(1), 10).await);

        assert!(h.store.cart().is_empty());
        assert_eq!(
            h.toasts.snapshot(),
            vec![Toast::error("Erro na alteração de quantidade do produto")]
        );
        assert_eq!(h.catalog.stock_calls(), 1);
    }

    #[tokio::test]
    async fn test_update_while_offline_fails() {
        let h = Harness::with(FakeCatalog::offline(), Arc::new(MemoryStorage::new())).await;

        assert!(!h.store.update_product_amount(id(1), 2).await);

        assert_eq!(
            h.toasts.snapshot(),
            vec![Toast::error("Erro na alteração de quantidade do produto")]
        );
    }

    // -------------------------------------------------------------------------
    // Persistence and hydration
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_storage_matches_cart_after_each_mutation() {
        let h = Harness::new().await;

        h.store.add_product(id(1)).await;
        assert_eq!(h.stored().await.unwrap(), h.store.cart());

        h.store.add_product(id(2)).await;
        assert_eq!(h.stored().await.unwrap(), h.store.cart());

        h.store.update_product_amount(id(2), 3).await;
        assert_eq!(h.stored().await.unwrap(), h.store.cart());

        h.store.remove_product(id(1)).await;
        assert_eq!(h.stored().await.unwrap(), h.store.cart());
    }

    #[tokio::test]
    async fn test_stored_json_shape() {
        let h = Harness::new().await;
        h.store.add_product(id(2)).await;

        let raw = h.storage.get_item(KEY).await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(
            value,
            serde_json::json!([{
                "id": 2,
                "title": "Tênis VR Caminhada Confortável Detalhes Couro Masculino",
                "price": 139.9,
                "image": "https://cdn.test/tenis2.jpg",
                "amount": 1
            }])
        );
    }

    #[tokio::test]
    async fn test_hydrates_persisted_cart() {
        let storage: Arc<dyn LocalStorage> = Arc::new(MemoryStorage::new());
        let first = Harness::with(FakeCatalog::with_products(), storage.clone()).await;
        first.store.add_product(id(1)).await;
        first.store.add_product(id(1)).await;

        let second = Harness::with(FakeCatalog::with_products(), storage).await;

        assert_eq!(second.store.cart(), first.store.cart());
        assert_eq!(second.store.totals().total_quantity, 2);
    }

    #[tokio::test]
    async fn test_hydrates_web_storefront_value() {
        let storage: Arc<dyn LocalStorage> = Arc::new(MemoryStorage::new());
        storage
            .set_item(
                KEY,
                r#"[{"id":1,"title":"Tênis de Caminhada Leve Confortável","price":179.9,"image":"tenis1.jpg","amount":2}]"#,
            )
            .await
            .unwrap();

        let h = Harness::with(FakeCatalog::with_products(), storage).await;

        assert_eq!(h.store.cart()[0].amount, 2);
        assert_eq!(h.store.totals().subtotal, Money::from_cents(35980));
    }

    #[tokio::test]
    async fn test_hydrated_huge_price_totals_saturate() {
        let storage: Arc<dyn LocalStorage> = Arc::new(MemoryStorage::new());
        storage
            .set_item(
                KEY,
                r#"[{"id":1,"title":"x","price":50000000000000000,"image":"i","amount":2}]"#,
            )
            .await
            .unwrap();

        let h = Harness::with(FakeCatalog::with_products(), storage).await;
        let totals = h.store.totals();

        assert_eq!(totals.total_quantity, 2);
        assert_eq!(totals.subtotal, Money::from_cents(i64::MAX));
    }

    #[tokio::test]
    async fn test_corrupt_storage_starts_empty() {
        for raw in ["not json", r#"{"id":1}"#, "null"] {
            let storage: Arc<dyn LocalStorage> = Arc::new(MemoryStorage::new());
            storage.set_item(KEY, raw).await.unwrap();

            let h = Harness::with(FakeCatalog::with_products(), storage).await;

            assert!(h.store.cart().is_empty(), "value {:?}", raw);
            assert!(h.toasts.is_empty());
            // Left in place until the next successful write.
            assert_eq!(h.storage.get_item(KEY).await.unwrap().as_deref(), Some(raw));
        }
    }

    #[tokio::test]
    async fn test_storage_failure_keeps_in_memory_cart() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let storage: Arc<dyn LocalStorage> = Arc::new(db.local_storage());
        db.close().await;

        let h = Harness::with(FakeCatalog::with_products(), storage).await;

        assert!(h.store.add_product(id(1)).await);

        assert_eq!(h.store.cart().len(), 1);
        assert!(h.toasts.is_empty());
    }

    #[tokio::test]
    async fn test_sqlite_backed_store_round_trip() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let storage: Arc<dyn LocalStorage> = Arc::new(db.local_storage());

        let h = Harness::with(FakeCatalog::with_products(), storage.clone()).await;
        h.store.add_product(id(2)).await;
        h.store.update_product_amount(id(2), 2).await;

        let reloaded = Harness::with(FakeCatalog::with_products(), storage).await;
        assert_eq!(reloaded.store.cart(), h.store.cart());
    }

    // -------------------------------------------------------------------------
    // Concurrency and reads
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_concurrent_adds_respect_stock() {
        let h = Harness::new().await;
        h.catalog.set_stock(1, 2).await;

        let (a, b, c) = tokio::join!(
            h.store.add_product(id(1)),
            h.store.add_product(id(1)),
            h.store.add_product(id(1)),
        );

        assert_eq!([a, b, c].iter().filter(|ok| **ok).count(), 2);
        assert_eq!(h.store.cart()[0].amount, 2);
        assert_eq!(h.catalog.product_calls(), 1);
        assert_eq!(
            h.toasts.snapshot(),
            vec![Toast::warning("Quantidade solicitada fora de estoque")]
        );
        assert_eq!(h.stored().await.unwrap(), h.store.cart());
    }

    #[tokio::test]
    async fn test_totals() {
        let h = Harness::new().await;
        h.store.add_product(id(1)).await;
        h.store.add_product(id(2)).await;
        h.store.update_product_amount(id(2), 2).await;

        let totals = h.store.totals();

        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.subtotal, Money::from_cents(17990 + 2 * 13990));
        assert_eq!(h.store.with_cart(|c| c.len()), 2);
    }

    #[tokio::test]
    async fn test_report_toasts_with_operation_message() {
        let h = Harness::new().await;
        let err = CartError::from(shoecart_core::ValidationError::MustBePositive {
            field: "product_id".to_string(),
        });

        h.store.report(CartOp::Remove, &err);

        assert_eq!(
            h.toasts.snapshot(),
            vec![Toast::error("Erro na remoção do produto")]
        );
    }
}
