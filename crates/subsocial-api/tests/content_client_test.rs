//! Reading documents through the HTTP content client
//!
//! An offchain stub on a local port answers every batch with the same
//! documents, so classification runs against real HTTP responses.

#![cfg(feature = "client")]

use serde_json::{json, Value};
use std::sync::Arc;
use subsocial_api::{
    ApiError, ContentClient, ContentClientConfig, ContentId, ContentStore, MemoryStructSource, PostId, PostStruct,
    SubsocialApi,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

const CID_A: &str = "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG";
const CID_B: &str = "bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi";

async fn offchain_stub(status: u16, reply: Value) -> (String, mpsc::UnboundedReceiver<Value>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let _ = tx.send(read_body(&mut socket).await);

            let payload = reply.to_string();
            let response = format!(
                "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                payload.len(),
                payload
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (url, rx)
}

async fn read_body(socket: &mut TcpStream) -> Value {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = socket.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            return Value::Null;
        }
        buf.extend_from_slice(&chunk[..n]);

        let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
        let len = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);

        let start = end + 4;
        if buf.len() >= start + len {
            return serde_json::from_slice(&buf[start..start + len]).unwrap_or(Value::Null);
        }
    }
}

fn post_ids<T>(items: &[T], id: impl Fn(&T) -> PostId) -> Vec<PostId> {
    items.iter().map(id).collect()
}

#[tokio::test]
async fn test_content_store_bridge_keys_by_content_id() {
    let (url, mut requests) = offchain_stub(200, json!({ CID_A: {"body": "a"} })).await;
    let client = ContentClient::new(ContentClientConfig::offchain(url)).unwrap();

    let padded = ContentId::from(format!("{} ", CID_A));
    let cids = vec![ContentId::from(CID_A), padded.clone(), ContentId::from(CID_B)];
    let docs = ContentStore::get_contents(&client, &cids).await.unwrap();

    assert_eq!(requests.recv().await.unwrap(), json!({"cids": [CID_A, CID_B]}));
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[&ContentId::from(CID_A)], json!({"body": "a"}));
    assert_eq!(docs[&padded], json!({"body": "a"}));
}

#[tokio::test]
async fn test_classification_over_http() {
    let (url, _requests) = offchain_stub(
        200,
        json!({
            CID_A: {"title": "A", "body": "first"},
            CID_B: ["not", "a", "post"],
        }),
    )
    .await;

    let structs = MemoryStructSource::new()
        .with_post(PostStruct::new(1, "alice").with_content(CID_A))
        // Same document, CID stored with trailing whitespace
        .with_post(PostStruct::new(2, "alice").with_content(format!("{}\n", CID_A)))
        .with_post(PostStruct::new(3, "alice").with_content(CID_B))
        .with_post(PostStruct::new(4, "alice").with_content("not-a-cid"))
        .with_post(PostStruct::new(5, "alice").with_content(CID_A).as_hidden());
    let api = SubsocialApi::with_content_client(Arc::new(structs), ContentClientConfig::offchain(url)).unwrap();

    let ids = [1, 2, 3, 4, 5];
    let public = api.find_public_posts(&ids).await.unwrap();
    assert_eq!(post_ids(&public, |p| p.id), vec![1, 2]);
    assert_eq!(public[1].content.as_ref().unwrap().title.as_deref(), Some("A"));

    let unlisted = api.find_unlisted_posts(&ids).await.unwrap();
    assert_eq!(post_ids(&unlisted, |p| p.id), vec![3, 4, 5]);
}

#[tokio::test]
async fn test_server_error_surfaces_as_content_store_error() {
    let (url, _requests) = offchain_stub(500, json!({"error": "boom"})).await;
    let structs = MemoryStructSource::new().with_post(PostStruct::new(1, "alice").with_content(CID_A));
    let api = SubsocialApi::with_content_client(Arc::new(structs), ContentClientConfig::offchain(url)).unwrap();

    let err = api.find_public_posts(&[1]).await.unwrap_err();
    assert!(matches!(err, ApiError::ContentStore(_)));
}
