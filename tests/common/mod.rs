//! Shared utilities for integration tests: a scriptable mock manager.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use sort_config_sync::config::ManagerConfig;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Request line and lower-cased headers of one received request.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct RecordedRequest {
    pub path_and_query: String,
    pub headers: Vec<(String, String)>,
}

#[allow(dead_code)]
impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn query_param(&self, name: &str) -> Option<String> {
        let url = url::Url::parse(&format!("http://mock{}", self.path_and_query)).ok()?;
        url.query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }
}

pub type Recorder = Arc<Mutex<Vec<RecordedRequest>>>;

/// Start a mock manager on an ephemeral port. `f` picks the HTTP status and
/// body for each request.
pub async fn start_mock_manager<F, Fut>(f: F) -> (SocketAddr, Recorder)
where
    F: Fn(RecordedRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let recorder: Recorder = Arc::new(Mutex::new(Vec::new()));
    let f = Arc::new(f);

    let rec = recorder.clone();
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    let rec = rec.clone();
                    tokio::spawn(async move {
                        let Some(request) = read_request(&mut socket).await else {
                            return;
                        };
                        rec.lock().unwrap().push(request.clone());

                        let (status, body) = f(request).await;
                        let status_text = match status {
                            200 => "200 OK",
                            400 => "400 Bad Request",
                            500 => "500 Internal Server Error",
                            _ => "200 OK",
                        };
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, recorder)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let head = String::from_utf8_lossy(&buf).into_owned();
    let mut lines = head.split("\r\n");
    let path_and_query = lines.next()?.split_whitespace().nth(1)?.to_string();
    let headers = lines
        .take_while(|line| !line.is_empty())
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
        .collect();

    Some(RecordedRequest {
        path_and_query,
        headers,
    })
}

/// Manager config pointing at a mock manager.
pub fn manager_config(addr: SocketAddr) -> ManagerConfig {
    ManagerConfig {
        api_url: format!("http://{}/inlong/manager/api/sort/getCacheZoneConfig", addr),
        api_version: "1.0".to_string(),
        sort_cluster_name: "sort-cluster".to_string(),
        sort_task_id: "task1".to_string(),
        request_timeout_secs: 2,
        user_agent: "sort-config-sync-test".to_string(),
        use_system_proxy: false,
    }
}

#[allow(dead_code)]
pub const UPDATED_BODY: &str = r#"{
    "errCode": 0,
    "md5": "abc",
    "data": {
        "sortClusterName": "sort-cluster",
        "sortTaskId": "task1",
        "cacheZones": {
            "task1": {
                "zoneName": "z1",
                "serviceUrl": "u1",
                "authentication": "a1",
                "zoneType": "PULSAR",
                "topics": [{"topic": "t1"}, {"topic": "t2"}]
            }
        }
    }
}"#;
