//! Integration tests using a mock HTTP server
//!
//! Tests the full end-to-end flow: API command → HTTP request → wire-format
//! body → decoded record/table, with fixtures shaped like real responses.

use pretty_assertions::assert_eq;
use rrpproxy_client::decode::{decode, decode_record, Property, Value};
use rrpproxy_client::{ClientConfig, Credentials, RrpClient};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DOMAIN_PRICE_BODY: &str = "\
[RESPONSE]
code = 200
description = Command completed successfully
property[domain][0] = example.com
property[zone][0] = com
property[type][0] = ADD
property[currency][0] = USD
property[price][0] = 9.0200
property[setup][0] = 0.0000
property[period][0] = 1
property[periodtype][0] = YEAR
queuetime = 0
runtime = 0.057
EOF
";

const DOMAIN_LIST_BODY: &str = "\
[RESPONSE]
code = 200
description = Command completed successfully
property[column][0] = domain
property[column][1] = roid
property[column][2] = domain created date
property[column][3] = domain registration expiration date
property[column][4] = renewalmode
property[domain][0] = alpha.com
property[roid][0] = 100001_DOMAIN-KEYSYS
property[domain created date][0] = 2019-03-02 08:15:00
property[domain registration expiration date][0] = 2026-03-02 08:15:00
property[renewalmode][0] = DEFAULT
property[domain][1] = beta.net
property[roid][1] = 100002_DOMAIN-KEYSYS
property[domain created date][1] = 2021-11-20 17:40:12
property[domain registration expiration date][1] = 2025-11-20 17:40:12
property[renewalmode][1] = AUTORENEW
property[total][0] = 2
queuetime = 0
runtime = 0.191
EOF
";

async fn client_for(mock_server: &MockServer) -> RrpClient {
    let config =
        ClientConfig::new(Credentials::new("user", "secret")).base_url(mock_server.uri());
    RrpClient::new(config).unwrap()
}

// ============================================================================
// End-to-End Command Tests
// ============================================================================

#[tokio::test]
async fn test_domain_price_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/call"))
        .and(query_param("s_login", "user"))
        .and(query_param("command", "DomainPrice"))
        .and(query_param("domain", "example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DOMAIN_PRICE_BODY))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let record = client.domain_price("example.com", &[]).await.unwrap();

    let record_json = serde_json::to_value(&record).unwrap();
    assert_eq!(
        record_json,
        json!({
            "code": "200",
            "description": "Command completed successfully",
            "queuetime": "0",
            "runtime": "0.057",
            "properties": {
                "domain": "example.com",
                "zone": "com",
                "type": "ADD",
                "currency": "USD",
                "price": "9.0200",
                "setup": "0.0000",
                "period": "1",
                "periodtype": "YEAR",
            },
        })
    );
}

#[tokio::test]
async fn test_query_domain_list_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/call"))
        .and(query_param("command", "QueryDomainList"))
        .and(query_param("orderby", "DOMAINREGISTRATIONEXPIRATIONDATE"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DOMAIN_LIST_BODY))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let table = client.query_domain_list().await.unwrap();

    assert_eq!(table.envelope.code(), Some(200));
    assert_eq!(
        table.columns,
        vec![
            "domain",
            "roid",
            "domain created date",
            "domain registration expiration date",
            "renewalmode",
        ]
    );
    assert_eq!(table.rows.len(), 2);

    // total is not a declared column: filtered from every row.
    assert!(table.rows.iter().all(|row| !row.contains_key("total")));

    assert_eq!(table.rows[0]["domain"], Value::Text("alpha.com".into()));
    assert_eq!(table.rows[1]["renewalmode"], Value::Text("AUTORENEW".into()));
    assert!(table.rows[0]["domain created date"].as_timestamp().is_some());
}

// ============================================================================
// Decoder Property Checks on Full Fixtures
// ============================================================================

#[test]
fn test_fixture_decode_is_idempotent() {
    assert_eq!(decode(DOMAIN_LIST_BODY), decode(DOMAIN_LIST_BODY));
    assert_eq!(decode(DOMAIN_PRICE_BODY), decode(DOMAIN_PRICE_BODY));
}

#[test]
fn test_fixture_mode_inference() {
    assert!(decode(DOMAIN_LIST_BODY).as_table().is_some());
    assert!(decode(DOMAIN_PRICE_BODY).as_record().is_some());
}

#[test]
fn test_fixture_record_view_of_domain_list() {
    // The record view of a tabular body keeps the manifest as an
    // ordinary multi-valued property, the way older clients exposed it.
    let record = decode_record(DOMAIN_LIST_BODY);
    let columns = record.property("column").unwrap().as_list().unwrap();
    assert_eq!(columns.len(), 5);
    assert_eq!(columns[0], Value::Text("domain".into()));
    assert_eq!(
        record.property("total"),
        Some(&Property::Scalar(Value::Text("2".into())))
    );
}

#[test]
fn test_fixture_with_windows_line_endings() {
    let body = DOMAIN_PRICE_BODY.replace('\n', "\r\n");
    let record = decode_record(&body);
    assert_eq!(record.envelope.code(), Some(200));
    assert_eq!(
        record.property("domain"),
        Some(&Property::Scalar(Value::Text("example.com".into())))
    );
}
