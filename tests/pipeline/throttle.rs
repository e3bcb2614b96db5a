use crate::common;
use httpmock::Method::POST;
use jqdata_rs::{JqClient, Params};
use std::time::{Duration, Instant};

#[test]
fn consecutive_calls_are_spaced_by_min_interval() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST).path(common::API_PATH);
        then.status(200).body("2019-01-02\n");
    });

    let mut client = JqClient::builder()
        .base_url(common::base_url(&server))
        .min_interval(Duration::from_millis(150))
        .token("tok")
        .build()
        .unwrap();

    let start = Instant::now();
    client.invoke_text("get_all_trade_days", Params::new()).unwrap();
    client.invoke_text("get_all_trade_days", Params::new()).unwrap();
    client.invoke_text("get_all_trade_days", Params::new()).unwrap();

    assert_eq!(mock.hits(), 3);
    assert!(
        start.elapsed() >= Duration::from_millis(300),
        "three calls need at least two full intervals, took {:?}",
        start.elapsed()
    );
}

#[test]
fn failed_dispatch_still_counts_for_spacing() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(POST).path(common::API_PATH);
        then.status(500);
    });

    let mut client = JqClient::builder()
        .base_url(common::base_url(&server))
        .min_interval(Duration::from_millis(150))
        .token("tok")
        .build()
        .unwrap();

    let _ = client.invoke_text("get_all_trade_days", Params::new());
    let start = Instant::now();
    let _ = client.invoke_text("get_all_trade_days", Params::new());
    assert!(start.elapsed() >= Duration::from_millis(140));
}

#[test]
fn default_interval_is_two_seconds() {
    let client = JqClient::default();
    assert_eq!(client.min_interval(), Duration::from_secs(2));
    assert_eq!(client.base_url().as_str(), "https://dataapi.joinquant.com/apis");
}
