use crate::common;
use chrono::NaiveDate;
use httpmock::Method::POST;
use jqdata_rs::{SecuritiesBuilder, Security, SecurityType};
use serde_json::json;

#[test]
fn listing_scenario_yields_one_record() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(common::API_PATH)
            .header("accept", "application/json")
            .json_body(json!({
                "method": "get_all_securities",
                "token": "tok",
                "code": "stock",
                "date": ""
            }));
        then.status(200).body(common::SECURITIES_BODY);
    });

    let mut client = common::authed_client(&server, "tok");
    let securities = SecuritiesBuilder::new(&mut client).fetch().unwrap();

    mock.assert();
    assert_eq!(
        securities,
        vec![Security {
            code: "000001.XSHE".into(),
            display_name: "PingAn".into(),
            name: "PAYH".into(),
            start_date: "1991-04-03".into(),
            end_date: "2200-01-01".into(),
            kind: "stock".into(),
        }]
    );
}

#[test]
fn listing_with_kind_and_date() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST).path(common::API_PATH).json_body(json!({
            "method": "get_all_securities",
            "token": "tok",
            "code": "futures",
            "date": "2019-03-18"
        }));
        then.status(200).body(
            "code,display_name,name,start_date,end_date,type\n\
             AU1906.XSGE,AU1906,AU1906,2018-05-16,2019-06-17,futures\n\
             A1905.XDCE,A1905,A1905,2018-05-15,2019-05-16,futures\n",
        );
    });

    let mut client = common::authed_client(&server, "tok");
    let securities = SecuritiesBuilder::new(&mut client)
        .kind(SecurityType::Futures)
        .date(NaiveDate::from_ymd_opt(2019, 3, 18).unwrap())
        .fetch()
        .unwrap();

    mock.assert();
    let exchanges: Vec<_> = securities.iter().map(Security::exchange).collect();
    assert_eq!(exchanges, [Some("SHFE"), Some("DCE")]);
}

#[test]
fn header_only_listing_is_empty() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(POST).path(common::API_PATH);
        then.status(200)
            .body("code,display_name,name,start_date,end_date,type\n");
    });

    let mut client = common::authed_client(&server, "tok");
    assert!(SecuritiesBuilder::new(&mut client).fetch().unwrap().is_empty());
}

#[test]
fn security_info_returns_single_record() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST).path(common::API_PATH).json_body(json!({
            "method": "get_security_info",
            "token": "tok",
            "code": "000001.XSHE"
        }));
        then.status(200).body(common::SECURITIES_BODY);
    });

    let mut client = common::authed_client(&server, "tok");
    let info = jqdata_rs::securities::security_info(&mut client, "000001.XSHE")
        .unwrap()
        .expect("one row");

    mock.assert();
    assert_eq!(info.display_name, "PingAn");
}

#[test]
fn security_info_without_rows_is_none() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(POST).path(common::API_PATH);
        then.status(200).body("");
    });

    let mut client = common::authed_client(&server, "tok");
    let info = jqdata_rs::securities::security_info(&mut client, "NOPE.XSHE").unwrap();
    assert!(info.is_none());
}

#[test]
fn offline_listing_uses_recorded_fixture() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST).path(common::API_PATH).json_body(json!({
            "method": "get_all_securities",
            "token": "tok",
            "code": "stock",
            "date": ""
        }));
        then.status(200)
            .body(common::fixture("get_all_securities", "stock"));
    });

    let mut client = common::authed_client(&server, "tok");
    let securities = SecuritiesBuilder::new(&mut client).fetch().unwrap();

    mock.assert();
    assert_eq!(securities.len(), 4);
    assert!(securities.iter().all(|s| s.kind == "stock"));
    let delisted: Vec<_> = securities.iter().filter(|s| !s.is_listed()).collect();
    assert_eq!(delisted.len(), 1);
    assert_eq!(delisted[0].code, "000003.XSHE");
    assert_eq!(securities[3].display_name, "浦发银行");
}

