//! End-to-end view scenarios against the in-memory item service.
//!
//! Each test drives `TodoView` the way a user would, waits for the service
//! answer and checks what the view shows.

#![allow(clippy::unwrap_used)] // Integration tests can unwrap
#![allow(clippy::expect_used)] // Integration tests can use expect for setup

use std::time::Duration;
use todo_client::mocks::{MockItemService, ServiceCall};
use todo_client::{Item, ItemFilter, ItemId, NewItem, ServiceOperation, TodoView};
use todo_runtime::EffectHandle;

const WAIT: Duration = Duration::from_secs(5);

fn sample() -> Vec<Item> {
    vec![
        Item::new(ItemId::new(3), "Do 1", true),
        Item::new(ItemId::new(7), "Do 2", false),
    ]
}

async fn settle(handle: Result<EffectHandle, todo_runtime::StoreError>) {
    handle
        .expect("view accepts gestures")
        .wait_with_timeout(WAIT)
        .await
        .expect("service answers in time");
}

async fn mounted_view(service: &MockItemService) -> TodoView<MockItemService> {
    todo_testing::init_test_tracing();
    let view = TodoView::new(service.clone());
    settle(view.mount().await).await;
    view
}

#[tokio::test]
async fn mount_shows_every_item() {
    let service = MockItemService::with_items(sample());
    let view = mounted_view(&service).await;

    let model = view.render().await;

    assert_eq!(model.descriptions(), vec!["Do 1", "Do 2"]);
    assert_eq!(model.status_line(), "1 item left");
    assert_eq!(model.selected_filter(), ItemFilter::All);
}

#[tokio::test]
async fn mount_fetches_only_once() {
    let service = MockItemService::with_items(sample());
    let view = mounted_view(&service).await;

    settle(view.mount().await).await;

    assert_eq!(service.call_count(ServiceOperation::GetAll), 1);
}

#[tokio::test]
async fn filtering_active_then_all() {
    let service = MockItemService::with_items(sample());
    let view = mounted_view(&service).await;

    settle(view.select_filter(ItemFilter::Active).await).await;
    let model = view.render().await;
    assert_eq!(model.descriptions(), vec!["Do 2"]);
    assert_eq!(model.status_line(), "1 item left");
    assert_eq!(model.selected_filter(), ItemFilter::Active);

    settle(view.select_filter(ItemFilter::All).await).await;
    assert_eq!(view.render().await.descriptions(), vec!["Do 1", "Do 2"]);

    assert_eq!(service.calls(), vec![ServiceCall::GetAll]);
}

#[tokio::test]
async fn creating_an_item_prepends_it() {
    let service = MockItemService::with_items(sample()).with_next_item_id(13);
    let view = mounted_view(&service).await;

    settle(view.submit_new_item("Do the other thing").await).await;

    assert_eq!(
        service.calls(),
        vec![
            ServiceCall::GetAll,
            ServiceCall::Create(NewItem {
                description: "Do the other thing".to_string(),
                completed: false,
            }),
        ]
    );

    let model = view.render().await;
    assert_eq!(model.descriptions(), vec!["Do the other thing", "Do 1", "Do 2"]);
    assert_eq!(model.rows[0].id, ItemId::new(13));
    assert!(!model.rows[0].completed);
    assert!(model.rows[1].completed);
    assert_eq!(model.status_line(), "2 items left");
}

#[tokio::test]
async fn empty_text_creates_nothing() {
    let service = MockItemService::with_items(sample());
    let view = mounted_view(&service).await;

    settle(view.submit_new_item("").await).await;

    assert_eq!(service.call_count(ServiceOperation::Create), 0);
    assert_eq!(view.render().await.rows.len(), 2);
}

#[tokio::test]
async fn toggling_a_completed_item() {
    let service = MockItemService::with_items(sample());
    let view = mounted_view(&service).await;

    settle(view.toggle(ItemId::new(3)).await).await;

    assert_eq!(
        service.calls().last(),
        Some(&ServiceCall::Update(Item::new(ItemId::new(3), "Do 1", false)))
    );

    let model = view.render().await;
    assert!(!model.rows[0].completed);
    assert_eq!(model.status_line(), "2 items left");
}

#[tokio::test]
async fn editing_a_description() {
    let service = MockItemService::with_items(sample());
    let view = mounted_view(&service).await;

    settle(view.begin_edit(ItemId::new(7)).await).await;
    assert!(view.render().await.rows[1].editing);

    settle(view.commit_edit(ItemId::new(7), "Do 2 today").await).await;

    let model = view.render().await;
    assert_eq!(model.descriptions(), vec!["Do 1", "Do 2 today"]);
    assert!(model.rows.iter().all(|row| !row.editing));
}

#[tokio::test]
async fn deleting_an_item() {
    let service = MockItemService::with_items(sample());
    let view = mounted_view(&service).await;

    settle(view.delete(ItemId::new(3)).await).await;

    let model = view.render().await;
    assert_eq!(model.descriptions(), vec!["Do 2"]);
    assert_eq!(service.items(), vec![Item::new(ItemId::new(7), "Do 2", false)]);
}

#[tokio::test]
async fn failed_request_keeps_list_and_shows_error() {
    let service = MockItemService::with_items(sample());
    let view = mounted_view(&service).await;
    service.fail(ServiceOperation::Delete);

    settle(view.delete(ItemId::new(3)).await).await;

    let model = view.render().await;
    assert_eq!(model.descriptions(), vec!["Do 1", "Do 2"]);
    assert!(model
        .error
        .as_deref()
        .is_some_and(|error| error.starts_with("Could not delete the item")));

    service.recover(ServiceOperation::Delete);
    settle(view.delete(ItemId::new(3)).await).await;

    let model = view.render().await;
    assert_eq!(model.descriptions(), vec!["Do 2"]);
    assert_eq!(model.error, None);
}

#[tokio::test]
async fn failed_mount_shows_empty_list_with_error() {
    let service = MockItemService::with_items(sample());
    service.fail(ServiceOperation::GetAll);
    let view = mounted_view(&service).await;

    let model = view.render().await;
    assert!(model.rows.is_empty());
    assert_eq!(model.status_line(), "0 items left");
    assert!(model.error.is_some());
}

#[tokio::test]
async fn shutdown_rejects_further_gestures() {
    let service = MockItemService::with_items(sample());
    let view = mounted_view(&service).await;

    view.shutdown(WAIT).await.unwrap();

    assert!(view.toggle(ItemId::new(3)).await.is_err());
}
