//! # register-smoke
//!
//! Ad-hoc smoke test for the user-registration endpoint. Sends one POST with
//! a fresh throwaway payload and prints the status and raw body verbatim for
//! manual diagnosis. A non-200 or a transport error is diagnostic output,
//! not a process failure.

use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn register_url() -> String {
    std::env::var("REGISTER_URL")
        .unwrap_or_else(|_| "http://localhost:54321/functions/v1/register-user".into())
}

fn bearer_token() -> String {
    std::env::var("REGISTER_TOKEN").unwrap_or_default()
}

fn test_payload() -> serde_json::Value {
    // Timestamped email so repeated runs never collide on a unique column
    serde_json::json!({
        "email": format!("test-{}@example.com", chrono::Utc::now().timestamp_millis()),
        "fullName": "Test User",
        "password": "TestPassword123",
        "departmentId": "test-dept-id",
    })
}

async fn post_registration(
    url: &str,
    token: &str,
    payload: &serde_json::Value,
) -> reqwest::Result<(reqwest::StatusCode, String)> {
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let response = client
        .post(url)
        .json(payload)
        .header("Authorization", format!("Bearer {token}"))
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    Ok((status, body))
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let url = register_url();
    let payload = test_payload();

    println!("Testing registration endpoint...");
    println!("URL: {url}");
    println!("Payload: {}", serde_json::to_string_pretty(&payload).unwrap_or_default());
    println!("{}", "-".repeat(80));

    match post_registration(&url, &bearer_token(), &payload).await {
        Ok((status, body)) => {
            println!("Status Code: {status}");
            println!("Response Body: {body}");
            if status == reqwest::StatusCode::OK {
                println!("\nSUCCESS");
            } else {
                println!("\nERROR: got {status}");
            }
        }
        Err(e) => {
            println!("ERROR: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        // port 9 (discard) is closed on any sane test host
        let err = post_registration("http://127.0.0.1:9/register", "", &test_payload())
            .await
            .unwrap_err();
        assert!(err.is_connect() || err.is_timeout());
    }

    #[test]
    fn payload_carries_the_wire_field_names() {
        let payload = test_payload();
        for key in ["email", "fullName", "password", "departmentId"] {
            assert!(payload.get(key).is_some());
        }
    }
}
