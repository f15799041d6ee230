use super::{HEALTHY_RUNTIME, TestContext};
use crate::DockerMcpClient;
use serde_json::{Value, json};

fn sent_requests(ctx: &TestContext) -> Vec<Value> {
    ctx.log("stdin.log")
        .iter()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
async fn test_ids_start_at_one_and_increase() {
    let ctx = TestContext::new().unwrap();
    let mut client = DockerMcpClient::new(ctx.config(HEALTHY_RUNTIME).unwrap());
    assert_eq!(client.next_id(), 1);

    let initialize = client.test_initialize().await;
    let list = client.test_list_tools().await;
    let search = client.test_search().await;

    assert_eq!(initialize.request.id, 1);
    assert_eq!(list.request.id, 2);
    assert_eq!(search.request.id, 3);
    assert_eq!(client.next_id(), 4);

    let ids: Vec<_> = sent_requests(&ctx).iter().map(|r| r["id"].clone()).collect();
    assert_eq!(ids, [json!(1), json!(2), json!(3)]);
}

#[tokio::test]
async fn test_counter_ignores_which_test_runs() {
    let ctx = TestContext::new().unwrap();
    let mut client = DockerMcpClient::new(ctx.config(HEALTHY_RUNTIME).unwrap());

    assert_eq!(client.test_search().await.request.id, 1);
    assert_eq!(client.test_search().await.request.id, 2);
    assert_eq!(client.test_initialize().await.request.id, 3);
    assert_eq!(client.test_list_tools().await.request.id, 4);
}

#[tokio::test]
async fn test_counter_advances_when_send_fails() {
    let ctx = TestContext::new().unwrap();
    let mut config = ctx.config(HEALTHY_RUNTIME).unwrap();
    config.runtime.program = "/nonexistent/container-runtime".to_string();
    let mut client = DockerMcpClient::new(config);

    let first = client.test_initialize().await;
    assert!(first.outcome.stdout().is_none());

    let second = client.test_list_tools().await;
    assert_eq!(second.request.id, 2);
}

#[tokio::test]
async fn test_initialize_wire_format() {
    let ctx = TestContext::new().unwrap();
    let mut client = DockerMcpClient::new(ctx.config(HEALTHY_RUNTIME).unwrap());

    let exchange = client.test_initialize().await;
    let (stdout, stderr) = exchange.outcome.into_pair();
    assert_eq!(stdout.as_deref(), Some(r#"{"jsonrpc":"2.0","id":1,"result":{}}"#));
    assert_eq!(stderr, "");

    let sent = ctx.read("stdin.log").unwrap();
    insta::assert_snapshot!(sent.trim_end(), @r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"test-client","version":"1.0.0"}}}"#);
}

#[tokio::test]
async fn test_search_after_two_sends() {
    let ctx = TestContext::new().unwrap();
    let mut client = DockerMcpClient::new(ctx.config(HEALTHY_RUNTIME).unwrap());

    client.test_initialize().await;
    client.test_list_tools().await;
    client.test_search().await;

    let sent = sent_requests(&ctx);
    assert_eq!(sent.len(), 3);

    let search = &sent[2];
    assert_eq!(search["jsonrpc"], "2.0");
    assert_eq!(search["id"], 3);
    assert_eq!(search["method"], "tools/call");
    assert_eq!(search["params"]["name"], "tavily-search");
    assert_eq!(search["params"]["arguments"]["query"], "Что такое LangChain?");
    assert_eq!(search["params"]["arguments"]["search_depth"], "basic");
    assert_eq!(search["params"]["arguments"]["topic"], "general");
    assert_eq!(search["params"]["arguments"]["max_results"], 5);

    assert_eq!(sent[1]["method"], "tools/list");
    assert_eq!(sent[1]["params"], json!({}));
}
