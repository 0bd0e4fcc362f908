mod common;

use common::mock_giphy::{fixed_width_url, MockGiphy, MockResponse};
use common::{apply_next_completion, make_app, new_runtime, test_client};
use gif_market::provider::Gif;
use gif_market::ui::search::{run_search, SearchOutcome, SearchStatus};
use gif_market::ui::selectors::{cart_line_count, cart_total, select_gifs};
use rust_decimal::Decimal;

#[tokio::test]
async fn run_search_wraps_results() {
    let mock = MockGiphy::start().await;
    mock.respond_to("cats", MockResponse::gifs(&[("c1", "Cat")])).await;
    let client = test_client(&mock.base_url());

    let outcome = run_search(&client, "cats", None).await;
    assert_eq!(
        outcome,
        SearchOutcome::Found(vec![Gif::new("c1", "Cat", fixed_width_url("c1"))])
    );
}

#[tokio::test]
async fn run_search_turns_http_error_into_empty_failure() {
    let mock = MockGiphy::start().await;
    mock.respond_to_all(MockResponse::error(500, "boom")).await;
    let client = test_client(&mock.base_url());

    let outcome = run_search(&client, "cats", None).await;
    assert_eq!(
        outcome,
        SearchOutcome::Failed {
            reason: "Image provider returned HTTP 500".to_string()
        }
    );
}

#[tokio::test]
async fn run_search_turns_malformed_body_into_empty_failure() {
    let mock = MockGiphy::start().await;
    mock.respond_to_all(MockResponse::raw(200, "{\"data\": 42}")).await;
    let client = test_client(&mock.base_url());

    let outcome = run_search(&client, "cats", None).await;
    match outcome {
        SearchOutcome::Failed { reason } => {
            assert!(reason.starts_with("Malformed provider response"), "{reason}");
        }
        other => panic!("expected a failed search, got {other:?}"),
    }
}

#[test]
fn cats_scenario_search_then_cart() {
    let runtime = new_runtime();
    let mock = runtime.block_on(async {
        let mock = MockGiphy::start().await;
        mock.respond_to("cats", MockResponse::gifs(&[("c1", "Cat one"), ("c2", "Cat two")]))
            .await;
        mock
    });
    let (mut app, rx) = make_app(&runtime, &mock.base_url());
    let price = app.config().shop.promotion_price;

    let request_id = app.search_for("cats").expect("search should start");
    assert!(app.search().is_searching());
    assert_eq!(apply_next_completion(&mut app, &rx), request_id);

    let first = Gif::new("c1", "Cat one", fixed_width_url("c1"));
    let second = Gif::new("c2", "Cat two", fixed_width_url("c2"));
    assert_eq!(select_gifs(app.search()), &[first.clone(), second.clone()]);
    assert_eq!(app.search().status, SearchStatus::Loaded);

    app.add_to_cart(first.clone());
    app.add_to_cart(first.clone());
    app.add_to_cart(second.clone());

    let quantities: Vec<u32> = app.cart().items.iter().map(|i| i.quantity).collect();
    assert_eq!(cart_line_count(app.cart()), 2);
    assert_eq!(quantities, vec![2, 1]);
    assert_eq!(cart_total(app.cart()), price * Decimal::from(3));

    app.remove_from_cart(&first.id);
    assert_eq!(cart_line_count(app.cart()), 1);
    assert_eq!(app.cart().items[0].gif, second);
    assert_eq!(app.cart().items[0].quantity, 1);
}

#[test]
fn provider_failure_leaves_empty_grid_with_reason() {
    let runtime = new_runtime();
    let mock = runtime.block_on(async {
        let mock = MockGiphy::start().await;
        mock.respond_to_all(MockResponse::error(503, "down")).await;
        mock
    });
    let (mut app, rx) = make_app(&runtime, &mock.base_url());

    app.search_for("cats");
    apply_next_completion(&mut app, &rx);

    assert!(app.search().gifs.is_empty());
    assert_eq!(
        app.search().failure_reason(),
        Some("Image provider returned HTTP 503")
    );
}

#[test]
fn newest_issued_search_wins() {
    let runtime = new_runtime();
    let mock = runtime.block_on(async {
        let mock = MockGiphy::start().await;
        mock.respond_to("cats", MockResponse::gifs(&[("c1", "Cat")]).delayed(200))
            .await;
        mock.respond_to("dogs", MockResponse::gifs(&[("d1", "Dog")])).await;
        mock
    });
    let (mut app, rx) = make_app(&runtime, &mock.base_url());

    let cats = app.search_for("cats").unwrap();
    let dogs = app.search_for("dogs").unwrap();
    assert!(dogs > cats);

    // A completion for the superseded search is dropped even if delivered.
    app.on_search_completed(
        cats,
        SearchOutcome::Found(vec![Gif::new("c1", "Cat", fixed_width_url("c1"))]),
    );
    assert_eq!(app.search().status, SearchStatus::Searching { request_id: dogs });

    assert_eq!(apply_next_completion(&mut app, &rx), dogs);
    assert_eq!(
        select_gifs(app.search()),
        &[Gif::new("d1", "Dog", fixed_width_url("d1"))]
    );
    assert_eq!(app.search().query, "dogs");
}

#[test]
fn blank_query_does_not_search() {
    let runtime = new_runtime();
    let (mut app, rx) = common::make_offline_app(&runtime);

    assert_eq!(app.search_for("   "), None);
    assert_eq!(app.search().status, SearchStatus::Idle);
    assert!(rx.try_recv().is_err());
}
