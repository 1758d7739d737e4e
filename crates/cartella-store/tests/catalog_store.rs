//! Catalog store behaviour against in-process services.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use cartella_commerce::catalog::{ProductDraft, ProductPatch, RemoteProduct};
use cartella_commerce::search::FilterCriteria;
use cartella_commerce::{CommerceError, ProductId};
use cartella_data::{CatalogApi, FetchError, InMemoryCatalogApi};
use cartella_store::{CatalogError, CatalogStore, Storefront};
use tokio::sync::Notify;

fn record(id: &str, name: &str, category: &str, price: f64) -> RemoteProduct {
    serde_json::from_value(serde_json::json!({
        "id": id, "name": name, "price": price, "category": category
    }))
    .unwrap()
}

fn seeded() -> InMemoryCatalogApi {
    InMemoryCatalogApi::with_records(vec![
        record("1", "Phone", "Electronics", 699.0),
        record("2", "Sneakers", "Shoes", 120.0),
        record("3", "Laptop", "Electronics", 1299.0),
    ])
}

fn ids(store: &CatalogStore<impl CatalogApi>) -> Vec<String> {
    store.products().into_iter().map(|p| p.id.into_inner()).collect()
}

#[tokio::test]
async fn test_fetch_all_maps_and_replaces() {
    let store = CatalogStore::new(seeded());
    let products = store.fetch_all().await.unwrap();

    assert_eq!(products.len(), 3);
    assert_eq!(products[0].company, "Unknown");
    assert_eq!(ids(&store), ["1", "2", "3"]);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn test_blank_search_equals_fetch_all() {
    let store = CatalogStore::new(seeded());
    let all = store.fetch_all().await.unwrap();

    store.search("phone").await.unwrap();
    assert_eq!(store.len(), 1);

    let blank = store.search("   ").await.unwrap();
    assert_eq!(blank, all);
    assert_eq!(store.products(), all);
}

#[tokio::test]
async fn test_failed_reads_keep_list() {
    let store = CatalogStore::with_shared_api(Arc::new(seeded()));
    store.fetch_all().await.unwrap();
    let before = store.products();

    store.api().set_unavailable(true);

    let err = store.fetch_all().await.unwrap_err();
    assert!(matches!(err, CatalogError::FetchFailed(_)));
    assert!(err.is_remote());
    assert_eq!(store.products(), before);
    assert!(!store.is_loading());

    let err = store.search("phone").await.unwrap_err();
    assert!(matches!(err, CatalogError::SearchFailed(_)));
    assert_eq!(store.products(), before);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn test_create_prepends() {
    let store = CatalogStore::new(seeded());
    store.fetch_all().await.unwrap();

    let draft = ProductDraft::new("Lamp", "Home", "24.99").with_company("Lumo");
    let created = store.create(&draft).await.unwrap();

    assert_eq!(created.company, "Lumo");
    assert_eq!(created.price, 24.99);
    assert_eq!(store.products()[0], created);
    assert_eq!(store.len(), 4);
}

#[tokio::test]
async fn test_create_failures_leave_list_alone() {
    let store = CatalogStore::with_shared_api(Arc::new(seeded()));
    store.fetch_all().await.unwrap();
    let before = store.products();
    let calls = store.api().call_count();

    let bad = ProductDraft::new("Lamp", "Home", "cheap");
    let err = store.create(&bad).await.unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Validation(CommerceError::ValidationError(_))
    ));
    assert_eq!(store.api().call_count(), calls);

    store.api().set_unavailable(true);
    let err = store
        .create(&ProductDraft::new("Lamp", "Home", 10.0))
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::CreateFailed(_)));
    assert_eq!(store.products(), before);
}

#[tokio::test]
async fn test_local_edits() {
    let store = CatalogStore::new(seeded());
    store.fetch_all().await.unwrap();
    let phone = ProductId::new("1");

    let patch = ProductPatch {
        price: Some(599.0),
        is_sale: Some(true),
        ..Default::default()
    };
    assert!(store.update(&phone, &patch));
    let updated = store.get(&phone).unwrap();
    assert_eq!(updated.price, 599.0);
    assert!(updated.is_sale);
    assert!(updated.updated_at.is_some());
    assert!(!store.update(&ProductId::new("missing"), &patch));

    assert!(store.rate(&phone, 4).unwrap());
    assert!(store.rate(&phone, 4).unwrap());
    assert_eq!(store.get(&phone).unwrap().user_ratings.len(), 2);
    assert!(matches!(
        store.rate(&phone, 9),
        Err(CatalogError::Validation(CommerceError::InvalidRating(9)))
    ));
    assert_eq!(store.get(&phone).unwrap().user_ratings.len(), 2);

    assert!(store.delete(&phone));
    assert!(store.get(&phone).is_none());
    assert!(!store.delete(&phone));
}

#[tokio::test]
async fn test_local_edits_are_lost_on_reload() {
    let store = CatalogStore::new(seeded());
    store.fetch_all().await.unwrap();
    store.delete(&ProductId::new("2"));
    assert_eq!(store.len(), 2);

    store.fetch_all().await.unwrap();
    assert_eq!(store.len(), 3);
}

/// A service whose reads block until the test releases them.
#[derive(Default)]
struct GatedApi {
    list_gate: Notify,
    search_gate: Notify,
    entered: AtomicUsize,
    entered_signal: Notify,
    fail_list: std::sync::atomic::AtomicBool,
}

impl GatedApi {
    async fn wait_entered(&self, n: usize) {
        loop {
            let signal = self.entered_signal.notified();
            if self.entered.load(Ordering::SeqCst) >= n {
                return;
            }
            signal.await;
        }
    }

    fn enter(&self) {
        self.entered.fetch_add(1, Ordering::SeqCst);
        self.entered_signal.notify_waiters();
    }
}

#[async_trait]
impl CatalogApi for GatedApi {
    async fn list_products(&self) -> Result<Vec<RemoteProduct>, FetchError> {
        self.enter();
        self.list_gate.notified().await;
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(FetchError::Timeout);
        }
        Ok(vec![
            record("1", "Phone", "Electronics", 699.0),
            record("2", "Sneakers", "Shoes", 120.0),
        ])
    }

    async fn search_products(&self, _query: &str) -> Result<Vec<RemoteProduct>, FetchError> {
        self.enter();
        self.search_gate.notified().await;
        Ok(vec![record("1", "Phone", "Electronics", 699.0)])
    }

    async fn create_product(&self, product: &RemoteProduct) -> Result<RemoteProduct, FetchError> {
        Ok(product.clone())
    }
}

#[tokio::test]
async fn test_stale_fetch_does_not_overwrite_newer_search() {
    let api = Arc::new(GatedApi::default());
    let store = Arc::new(CatalogStore::with_shared_api(api.clone()));

    let fetch = tokio::spawn({
        let store = store.clone();
        async move { store.fetch_all().await }
    });
    api.wait_entered(1).await;

    let search = tokio::spawn({
        let store = store.clone();
        async move { store.search("phone").await }
    });
    api.wait_entered(2).await;
    assert!(store.is_loading());

    api.search_gate.notify_one();
    let searched = search.await.unwrap().unwrap();
    assert_eq!(searched.len(), 1);
    assert!(store.is_loading());

    api.list_gate.notify_one();
    let fetched = fetch.await.unwrap().unwrap();

    assert_eq!(fetched, searched);
    assert_eq!(ids(&store), ["1"]);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn test_loading_clears_after_failure() {
    let api = Arc::new(GatedApi::default());
    api.fail_list.store(true, Ordering::SeqCst);
    let store = Arc::new(CatalogStore::with_shared_api(api.clone()));

    let fetch = tokio::spawn({
        let store = store.clone();
        async move { store.fetch_all().await }
    });
    api.wait_entered(1).await;
    assert!(store.is_loading());

    api.list_gate.notify_one();
    let err = fetch.await.unwrap().unwrap_err();
    assert!(matches!(err, CatalogError::FetchFailed(FetchError::Timeout)));
    assert!(!store.is_loading());
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_storefront_wires_catalog_and_cart() {
    let storefront = Storefront::new(seeded());
    storefront.catalog().fetch_all().await.unwrap();

    let phone = ProductId::new("1");
    storefront.add_to_cart(&phone).unwrap();
    storefront.add_to_cart(&phone).unwrap();
    assert_eq!(storefront.cart().cart_count(), 2);

    assert!(storefront.add_to_wishlist(&phone).unwrap());
    assert!(!storefront.add_to_wishlist(&phone).unwrap());

    assert!(matches!(
        storefront.add_to_cart(&ProductId::new("nope")),
        Err(CommerceError::ProductNotFound(_))
    ));

    let criteria = FilterCriteria::new(0.0, 1000.0).with_category("Electronics");
    let visible: Vec<_> = storefront
        .visible_products(&criteria)
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(visible, ["Phone"]);
}
