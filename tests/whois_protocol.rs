//! Integration tests for the raw WHOIS client against a local TCP server.
//!
//! The fixture implements the full RFC 3912 exchange: read one CRLF-terminated
//! query line, write a scripted body, close the connection. Responses are keyed
//! on connection order so a single listener can play both the IANA root and the
//! referred registry server.

use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use domain_trust::WhoisClient;

/// Starts a server that answers its nth connection with `responses[n]`
/// (repeating the last entry) and records every query line received.
async fn start_whois_server(responses: Vec<String>) -> (u16, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    let queries = Arc::new(Mutex::new(Vec::new()));
    let server_queries = queries.clone();

    tokio::spawn(async move {
        let mut served = 0usize;
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };

            let mut buf = Vec::new();
            let mut chunk = [0u8; 256];
            loop {
                let Ok(n) = stream.read(&mut chunk).await else {
                    break;
                };
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                if buf.windows(2).any(|w| w == b"\r\n") {
                    break;
                }
            }
            let query = String::from_utf8_lossy(&buf).trim_end().to_string();
            server_queries.lock().unwrap().push(query);

            let body = responses
                .get(served.min(responses.len().saturating_sub(1)))
                .cloned()
                .unwrap_or_default();
            served += 1;
            let _ = stream.write_all(body.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    (port, queries)
}

#[tokio::test]
async fn query_server_sends_crlf_terminated_hostname_and_reads_to_eof() {
    let body = "Domain Name: EXAMPLE.ZZ\r\nCreation Date: 1999-08-03T04:00:00Z\r\n";
    let (port, queries) = start_whois_server(vec![body.to_string()]).await;

    let client = WhoisClient::new().with_port(port);
    let response = client
        .query_server("example.zz", "127.0.0.1")
        .await
        .expect("query succeeds");

    assert_eq!(response, body);
    assert_eq!(queries.lock().unwrap().as_slice(), ["example.zz"]);
}

#[tokio::test]
async fn unknown_tld_follows_iana_referral() {
    // Connection 1 plays the IANA root and refers back to this listener;
    // connection 2 plays the referred registry server.
    let iana = "% IANA WHOIS server\r\n\r\ndomain:       ZZ\r\nwhois:        127.0.0.1\r\n";
    let registry = "Domain Name: example.zz\r\ncreated: 2011-04-20\r\n";
    let (port, queries) = start_whois_server(vec![iana.to_string(), registry.to_string()]).await;

    let client = WhoisClient::new()
        .with_port(port)
        .with_iana_server("127.0.0.1");
    let response = client
        .lookup("example.zz", "zz")
        .await
        .expect("referral lookup succeeds");

    assert!(response.contains("created: 2011-04-20"));
    assert_eq!(
        queries.lock().unwrap().as_slice(),
        ["example.zz", "example.zz"]
    );
}

#[tokio::test]
async fn missing_referral_is_an_error() {
    let iana = "% IANA WHOIS server\r\n\r\ndomain:       ZZ\r\nstatus: ACTIVE\r\n";
    let (port, _) = start_whois_server(vec![iana.to_string()]).await;

    let client = WhoisClient::new()
        .with_port(port)
        .with_iana_server("127.0.0.1");
    let err = client
        .lookup("example.zz", "zz")
        .await
        .expect_err("no referral line");

    assert!(err.to_string().contains("referral"));
}

#[tokio::test]
async fn connection_refused_is_reported_as_unavailable() {
    // Bind then drop to obtain a port nothing is listening on.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        listener.local_addr().expect("local addr").port()
    };

    let client = WhoisClient::new()
        .with_port(port)
        .with_iana_server("127.0.0.1");
    let err = client
        .lookup("example.zz", "zz")
        .await
        .expect_err("nothing listening");

    assert!(err.to_string().contains("connect"));
}
