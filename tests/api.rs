use std::time::Duration;

use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use xrocket_pay::api::RocketClient;
use xrocket_pay::config::ClientConfig;
use xrocket_pay::http::{ClientError, Failure};
use xrocket_pay::models::{
    ChequeState, HealthStatus, MultiChequeUpdate, Network, NewInvoice, NewMultiCheque, TransferRequest,
    WithdrawalLinkRequest, WithdrawalRequest, WithdrawalStatus,
};

fn rocket(server: &MockServer) -> RocketClient {
    let config = ClientConfig::new("api-key")
        .with_base_url(server.uri())
        .with_backoff_base(Duration::from_millis(5));
    RocketClient::new(config).unwrap()
}

fn ok(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": data}))
}

#[tokio::test]
async fn version_without_field_is_none_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    assert_eq!(rocket(&server).version().await.unwrap(), "None");
}

#[tokio::test]
async fn health_reads_top_level_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .and(header("rocket-pay-key", "api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "OK"})))
        .mount(&server)
        .await;

    assert_eq!(rocket(&server).check_health().await.unwrap(), HealthStatus::Ok);
}

#[tokio::test]
async fn health_without_status_is_unknown() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    assert_eq!(rocket(&server).check_health().await.unwrap(), HealthStatus::Unknown);
}

#[tokio::test]
async fn info_decodes_with_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/app/info"))
        .respond_with(ok(json!({
            "name": "shop",
            "balances": [{"currency": "TONCOIN", "balance": 12.5}, {"currency": "USDT", "balance": null}]
        })))
        .mount(&server)
        .await;

    let info = rocket(&server).get_info().await.unwrap();
    assert_eq!(info.name, "shop");
    assert_eq!(info.fee_percents, 1.5);
    assert_eq!(info.balance_of("TONCOIN"), Some(12.5));
    assert_eq!(info.balance_of("USDT"), Some(0.0));
}

#[tokio::test]
async fn transfer_posts_camel_case_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/app/transfer"))
        .and(body_json(json!({
            "tgUserId": 87209764,
            "currency": "TONCOIN",
            "amount": 0.5,
            "transferId": "abc-1",
            "description": "tip"
        })))
        .respond_with(ok(json!({
            "id": 9, "tgUserId": 87209764, "currency": "TONCOIN", "amount": 0.5, "description": "tip"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = TransferRequest::new(87209764, "TONCOIN", 0.5, "abc-1").with_description("tip");
    let transfer = rocket(&server).send_transfer(&request).await.unwrap();
    assert_eq!(transfer.id, 9);
    assert_eq!(transfer.amount, 0.5);
}

#[tokio::test]
async fn withdrawal_status_follows_get_withdrawal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/app/withdrawal/status/w-7"))
        .respond_with(ok(json!({
            "network": "TON", "address": "EQB1", "currency": "TONCOIN", "amount": 3,
            "withdrawalId": "w-7", "status": "COMPLETED", "txHash": "abc"
        })))
        .mount(&server)
        .await;

    let client = rocket(&server);
    let withdrawal = client.get_withdrawal("w-7").await.unwrap();
    assert_eq!(withdrawal.network, Network::Ton);
    assert_eq!(withdrawal.tx_hash.as_deref(), Some("abc"));
    assert_eq!(client.get_withdrawal_status("w-7").await.unwrap(), WithdrawalStatus::Completed);
}

#[tokio::test]
async fn create_withdrawal_sends_network_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/app/withdrawal"))
        .and(body_json(json!({
            "network": "BSC", "address": "0xabc", "currency": "USDT", "amount": 10.0, "withdrawalId": "w-1"
        })))
        .respond_with(ok(json!({"network": "BSC", "status": "CREATED", "withdrawalId": "w-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let request = WithdrawalRequest::new(Network::Bsc, "0xabc", "USDT", 10.0, "w-1");
    let withdrawal = rocket(&server).create_withdrawal(&request).await.unwrap();
    assert_eq!(withdrawal.status, WithdrawalStatus::Created);
}

#[tokio::test]
async fn withdrawal_fees_filter_by_currency() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/app/withdrawal/fees"))
        .and(query_param("currency", "TONCOIN"))
        .respond_with(ok(json!([{
            "code": "TONCOIN",
            "minWithdrawal": 0.5,
            "fees": [{"networkCode": "TON", "feeWithdraw": {"fee": 0.01, "currency": "TONCOIN"}}]
        }])))
        .mount(&server)
        .await;

    let coins = rocket(&server).get_withdrawal_fees(Some("TONCOIN")).await.unwrap();
    assert_eq!(coins.len(), 1);
    assert_eq!(coins[0].fee_for(Network::Ton).unwrap().fee, 0.01);
}

#[tokio::test]
async fn multi_cheque_lifecycle() {
    let server = MockServer::start().await;
    let cheque = json!({
        "id": 5, "currency": "TONCOIN", "total": 10, "perUser": 1, "users": 10,
        "state": "active", "tgResources": [{"telegramId": -100, "name": "news"}], "activations": 4
    });
    Mock::given(method("POST"))
        .and(path("/multi-cheque"))
        .respond_with(ok(cheque.clone()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/multi-cheque"))
        .and(query_param("limit", "10"))
        .and(query_param("offset", "0"))
        .respond_with(ok(json!({"total": 1, "limit": 10, "offset": 0, "results": [cheque.clone()]})))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/multi-cheque/5"))
        .and(body_json(json!({"description": "updated"})))
        .respond_with(ok(cheque.clone()))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/multi-cheque/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let client = rocket(&server);
    let created = client
        .create_multi_cheque(&NewMultiCheque::new("TONCOIN", 1.0, 10, 0))
        .await
        .unwrap();
    assert_eq!(created.state, ChequeState::Active);
    assert_eq!(created.share_per_user, 1.0);
    assert_eq!(created.tg_resources[0].telegram_id, -100);

    let page = client.get_multi_cheques(10, 0).await.unwrap();
    assert_eq!(page.results.len(), 1);
    assert!(!page.has_more());

    let update = MultiChequeUpdate {
        description: Some("updated".to_string()),
        ..Default::default()
    };
    assert_eq!(client.edit_multi_cheque(5, &update).await.unwrap().id, 5);
    assert!(client.delete_multi_cheque(5).await.unwrap());
}

#[tokio::test]
async fn missing_cheque_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/multi-cheque/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"success": false, "message": "Not found"})))
        .expect(1)
        .mount(&server)
        .await;

    let err = rocket(&server).get_multi_cheque(404).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn invoices() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tg-invoices"))
        .and(body_json(json!({
            "amount": 2.0, "numPayments": 1, "currency": "USDT", "commentsEnabled": false, "expiredIn": 0
        })))
        .respond_with(ok(json!({"id": 11, "amount": 2, "currency": "USDT", "status": "active"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tg-invoices/11"))
        .respond_with(ok(json!({"id": 11, "status": "paid", "paid": "2024-01-01T00:00:00Z"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tg-invoices"))
        .respond_with(ok(json!({"total": 3, "limit": 1, "offset": 0, "results": [{"id": 11}]})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/tg-invoices/11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let client = rocket(&server);
    let invoice = client.create_invoice(&NewInvoice::new("USDT", 2.0)).await.unwrap();
    assert_eq!(invoice.id, 11);
    assert!(client.get_invoice(11).await.unwrap().is_paid());

    let page = client.get_invoices(1, 0).await.unwrap();
    assert!(page.has_more());
    assert!(client.delete_invoice(11).await.unwrap());
}

#[tokio::test]
async fn currencies_come_from_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/currencies/available"))
        .respond_with(ok(json!({"results": [
            {"currency": "TONCOIN", "name": "TON", "minTransfer": 0.01},
            {"currency": "USDT", "name": "USDT", "minTransfer": null}
        ]})))
        .mount(&server)
        .await;

    let currencies = rocket(&server).get_available_currencies().await.unwrap();
    assert_eq!(currencies.len(), 2);
    assert_eq!(currencies[0].ticker, "TON");
    assert_eq!(currencies[1].min_transfer, 0.0);

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("rocket-pay-key"));
}

#[tokio::test]
async fn withdrawal_link_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/withdrawal-link"))
        .and(query_param("network", "TON"))
        .and(query_param("address", "EQB1"))
        .respond_with(ok(json!({"telegramAppLink": "https://t.me/xrocket?startapp=w"})))
        .mount(&server)
        .await;

    let request = WithdrawalLinkRequest::new("TONCOIN", Network::Ton, "EQB1");
    let link = rocket(&server).get_withdrawal_link(&request).await.unwrap();
    assert_eq!(link, "https://t.me/xrocket?startapp=w");
}

#[tokio::test]
async fn missing_withdrawal_link_is_an_api_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/withdrawal-link"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true, "message": "no link", "data": {}})))
        .mount(&server)
        .await;

    let request = WithdrawalLinkRequest::new("TONCOIN", Network::Ton, "EQB1");
    let err = rocket(&server).get_withdrawal_link(&request).await.unwrap_err();
    match err {
        ClientError::Failure(Failure::Api { envelope, .. }) => {
            assert!(envelope.is_success());
            assert_eq!(envelope.message.as_deref(), Some("no link"));
        },
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn structurally_wrong_data_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/app/info"))
        .respond_with(ok(json!({"name": "shop", "balances": {"TONCOIN": 1}})))
        .expect(1)
        .mount(&server)
        .await;

    let err = rocket(&server).get_info().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode { .. }));
}

#[tokio::test]
async fn closed_client_rejects_calls() {
    let server = MockServer::start().await;
    let client = rocket(&server);
    client.close().await;
    client.close().await;
    assert!(matches!(client.get_info().await, Err(ClientError::SessionClosed)));
}
