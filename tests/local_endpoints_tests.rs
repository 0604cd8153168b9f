//! HTTP clients against a local stand-in for the faucet and JSON-RPC
//! endpoints.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use xrp_faucets::{
    FaucetClient, FaucetError, FaucetInfo, FundingApi, JsonRpcClient, LedgerClient, PollPolicy,
    Session, Stage,
};

#[derive(Default)]
struct Stub {
    /// Lookups of a funded account that still answer `actNotFound`
    lag: u32,
    reject: bool,
    funded: Mutex<Vec<String>>,
    lookups: AtomicU32,
    last_fund_body: Mutex<Option<Value>>,
}

async fn fund(State(stub): State<Arc<Stub>>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    *stub.last_fund_body.lock().unwrap() = Some(body.clone());
    if stub.reject {
        return (StatusCode::SERVICE_UNAVAILABLE, Json(json!({"error": "busy"})));
    }
    let address = body["destination"].as_str().unwrap_or_default().to_string();
    stub.funded.lock().unwrap().push(address.clone());
    (
        StatusCode::OK,
        Json(json!({
            "account": {"xAddress": "T-ignored", "classicAddress": address, "address": address},
            "amount": 100,
            "transactionHash": "5F0E0A7F0A1A"
        })),
    )
}

async fn rpc(State(stub): State<Arc<Stub>>, Json(body): Json<Value>) -> Json<Value> {
    let method = body["method"].as_str().unwrap_or_default();
    let params = &body["params"][0];
    match method {
        "server_info" => Json(json!({"result": {"info": {"server_state": "full"}, "status": "success"}})),
        "account_info" => {
            let account = params["account"].as_str().unwrap_or_default();
            assert_eq!(params["ledger_index"], "validated");
            let known = stub.funded.lock().unwrap().iter().any(|a| a == account);
            let n = stub.lookups.fetch_add(1, Ordering::SeqCst);
            if !known || n < stub.lag {
                return Json(json!({"result": {"error": "actNotFound", "status": "error"}}));
            }
            Json(json!({
                "result": {
                    "account_data": {
                        "Account": account,
                        "Balance": "100000000",
                        "Flags": 0,
                        "LedgerEntryType": "AccountRoot",
                        "Sequence": 777
                    },
                    "status": "success",
                    "validated": true
                }
            }))
        }
        _ => Json(json!({"result": {"error": "unknownCmd", "status": "error"}})),
    }
}

async fn spawn_stub(stub: Arc<Stub>) -> SocketAddr {
    let app = Router::new()
        .route("/", post(rpc))
        .route("/accounts", post(fund))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn local_network(addr: SocketAddr) -> FaucetInfo {
    FaucetInfo {
        id: "faucet-select-local".to_string(),
        ws_url: format!("ws://{}/", addr),
        json_rpc_url: format!("http://{}/", addr),
        faucet_url: format!("http://{}", addr),
        short_name: "Localnet".to_string(),
        desc: "Local stand-in".to_string(),
    }
}

#[tokio::test]
async fn test_end_to_end_over_http() {
    let stub = Arc::new(Stub { lag: 2, ..Stub::default() });
    let addr = spawn_stub(Arc::clone(&stub)).await;
    let network = local_network(addr);

    let ledger = JsonRpcClient::new(&network.json_rpc_url, Duration::from_secs(5)).unwrap();
    let faucet = FaucetClient::new(&network.faucet_url, "xrpl.org-faucet", Duration::from_secs(5)).unwrap();
    let mut session = Session::new(network)
        .with_poll_policy(PollPolicy { interval: Duration::from_millis(5), max_attempts: Some(50) });

    let creds = session.generate_credentials(&ledger, &faucet).await.unwrap();

    assert_eq!(creds.sequence, 777);
    assert_eq!(creds.balance, "100000000");
    assert_eq!(session.stage(), Stage::Complete);
    assert_eq!(stub.lookups.load(Ordering::SeqCst), 3);

    let body = stub.last_fund_body.lock().unwrap().clone().unwrap();
    assert_eq!(body["destination"], creds.address.as_str());
    assert_eq!(body["userAgent"], "xrpl.js");
    assert_eq!(body["usageContext"], "xrpl.org-faucet");
}

#[tokio::test]
async fn test_faucet_error_status_is_reported() {
    let stub = Arc::new(Stub { reject: true, ..Stub::default() });
    let addr = spawn_stub(stub).await;
    let faucet = FaucetClient::new(&format!("http://{}", addr), "xrpl.org-faucet", Duration::from_secs(5)).unwrap();

    let err = faucet.fund("rrrrrrrrrrrrrrrrrrrrrhoLvTp").await.unwrap_err();
    match err {
        FaucetError::FaucetRejected { status, body } => {
            assert_eq!(status, 503);
            assert!(body.contains("busy"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_account_not_found_maps_to_rpc_error() {
    let stub = Arc::new(Stub::default());
    let addr = spawn_stub(stub).await;
    let ledger = JsonRpcClient::new(&format!("http://{}/", addr), Duration::from_secs(5)).unwrap();

    ledger.connect().await.unwrap();
    let err = ledger.account_info("rrrrrrrrrrrrrrrrrrrrrhoLvTp").await.unwrap_err();
    assert!(matches!(err, FaucetError::Rpc { method: "account_info", ref code } if code == "actNotFound"));
}

#[tokio::test]
async fn test_unreachable_endpoint_fails_connect() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let ledger = JsonRpcClient::new(&format!("http://{}/", addr), Duration::from_secs(2)).unwrap();
    assert!(matches!(ledger.connect().await, Err(FaucetError::Network { .. })));
}
