use crate::common;
use chrono::NaiveDate;
use httpmock::Method::POST;
use jqdata_rs::{PriceBuilder, Unit};
use serde_json::json;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn price_scenario_yields_one_bar() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST).path(common::API_PATH).json_body(json!({
            "method": "get_price",
            "token": "tok",
            "code": "000001.XSHE",
            "count": 1,
            "unit": "1d",
            "end_date": "2018-07-09",
            "fq_ref_date": ""
        }));
        then.status(200).body(common::BARS_BODY);
    });

    let mut client = common::authed_client(&server, "tok");
    let bars = PriceBuilder::new(&mut client, "000001.XSHE")
        .end_date(day(2018, 7, 9))
        .fetch()
        .unwrap();

    mock.assert();
    assert_eq!(bars.len(), 1);
    let b = &bars[0];
    assert_eq!(b.date, "2018-07-09");
    assert_eq!(b.open, 9.27);
    assert_eq!(b.close, 9.50);
    assert_eq!(b.high, 9.53);
    assert_eq!(b.low, 9.27);
    assert_eq!(b.volume, 22_407_527.0);
    assert_eq!(b.money, 212_109_327.00);
}

#[test]
fn period_query_uses_price_period_method() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST).path(common::API_PATH).json_body(json!({
            "method": "get_price_period",
            "token": "tok",
            "code": "A8888.XDCE",
            "unit": "1m",
            "date": "2014-07-30",
            "end_date": "2014-07-31",
            "fq_ref_date": "2014-07-31"
        }));
        then.status(200).body(
            "date,open,close,high,low,volume,money\n\
             2014-07-30 09:01,4600,4601,4603,4598,1200,55224000.00\n\
             2014-07-30 09:02,4601,4599,4602,4597,800,36801600.00\n",
        );
    });

    let mut client = common::authed_client(&server, "tok");
    let bars = PriceBuilder::new(&mut client, "A8888.XDCE")
        .unit(Unit::M1)
        .since(day(2014, 7, 30))
        .end_date(day(2014, 7, 31))
        .fq_ref_date(day(2014, 7, 31))
        .fetch()
        .unwrap();

    mock.assert();
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[1].date, "2014-07-30 09:02");
    assert_eq!(bars[1].close, 4599.0);
}

#[test]
fn header_only_bars_are_empty() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(POST).path(common::API_PATH);
        then.status(200).body("date,open,close,high,low,volume,money");
    });

    let mut client = common::authed_client(&server, "tok");
    let bars = PriceBuilder::new(&mut client, "000001.XSHE")
        .count(5)
        .end_date(day(2018, 7, 9))
        .fetch()
        .unwrap();
    assert!(bars.is_empty());
}

#[test]
fn current_price_joins_codes() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST).path(common::API_PATH).json_body(json!({
            "method": "get_current_price",
            "token": "tok",
            "code": "000001.XSHE,600000.XSHG"
        }));
        then.status(200)
            .body("code,current\n000001.XSHE,10.31\n600000.XSHG,11.02\n");
    });

    let mut client = common::authed_client(&server, "tok");
    let prices =
        jqdata_rs::price::current_price(&mut client, &["000001.XSHE", "600000.XSHG"]).unwrap();

    mock.assert();
    assert_eq!(prices.len(), 2);
    assert_eq!(prices[1].code, "600000.XSHG");
    assert_eq!(prices[1].current, 11.02);
}

#[test]
fn offline_bars_use_recorded_fixture() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(POST).path(common::API_PATH).json_body(json!({
            "method": "get_price",
            "token": "tok",
            "code": "000001.XSHE",
            "count": 5,
            "unit": "1d",
            "end_date": "2019-03-18",
            "fq_ref_date": ""
        }));
        then.status(200)
            .body(common::fixture("get_price", "000001.XSHE"));
    });

    let mut client = common::authed_client(&server, "tok");
    let bars = PriceBuilder::new(&mut client, "000001.XSHE")
        .unit(Unit::D1)
        .count(5)
        .end_date(day(2019, 3, 18))
        .fetch()
        .unwrap();

    mock.assert();
    assert_eq!(bars.len(), 5);
    assert_eq!(bars[0].date, "2019-03-12");
    assert_eq!(bars[4].date, "2019-03-18");
    assert!(bars.windows(2).all(|w| w[0].date < w[1].date));
    assert!(bars.iter().all(|b| b.low <= b.open && b.open <= b.high));
    assert!(bars.iter().all(|b| b.volume > 0.0 && b.money > 0.0));
}

