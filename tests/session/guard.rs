use crate::common;
use httpmock::Method::POST;
use jqdata_rs::{JqError, Params, PriceBuilder};

#[test]
fn unauthenticated_call_makes_no_request() {
    let server = common::setup_server();
    let any = server.mock(|when, then| {
        when.method(POST).path(common::API_PATH);
        then.status(200).body(common::BARS_BODY);
    });

    let mut client = common::client(&server);
    let err = PriceBuilder::new(&mut client, "000001.XSHE")
        .count(1)
        .fetch()
        .unwrap_err();

    assert!(matches!(err, JqError::Unauthenticated), "got {err:?}");
    assert_eq!(any.hits(), 0, "no request may be sent without a token");
}

#[test]
fn cleared_token_blocks_generic_invoke() {
    let server = common::setup_server();
    let any = server.mock(|when, then| {
        when.method(POST).path(common::API_PATH);
        then.status(200).body("");
    });

    let mut client = common::authed_client(&server, "tok");
    client.clear_token();
    let err = client
        .invoke_text("get_all_trade_days", Params::new())
        .unwrap_err();

    assert!(matches!(err, JqError::Unauthenticated));
    assert_eq!(any.hits(), 0);
}

#[test]
fn empty_preset_token_counts_as_absent() {
    let server = common::setup_server();
    let client = common::authed_client(&server, "");
    assert!(matches!(
        client.ensure_authenticated(),
        Err(JqError::Unauthenticated)
    ));
}
