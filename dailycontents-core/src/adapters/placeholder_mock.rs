//! Mock placeholder API server for testing
//!
//! Serves the same response shapes as the public API:
//! - GET /users returns a JSON array of users
//! - GET /posts returns a JSON array of posts

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use serde_json::json;

/// Mock placeholder server for testing
pub struct MockPlaceholderServer {
    port: u16,
    running: Arc<AtomicBool>,
    thread_handle: Option<thread::JoinHandle<()>>,
}

/// Configuration for mock data generation
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Number of users served by /users
    pub num_users: usize,
    /// Number of posts served by /posts
    pub num_posts: usize,
    /// Answer every request with this status instead of data
    pub fail_status: Option<u16>,
    /// Answer with a JSON object instead of an array
    pub malformed: bool,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            num_users: 10,
            num_posts: 20,
            fail_status: None,
            malformed: false,
        }
    }
}

impl MockPlaceholderServer {
    /// Start a new mock server on a random available port
    pub fn start(config: MockConfig) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();

        listener.set_nonblocking(true)?;

        let thread_handle = thread::spawn(move || {
            while running_clone.load(Ordering::SeqCst) {
                match listener.accept() {
                    Ok((stream, _)) => {
                        let cfg = config.clone();
                        thread::spawn(move || {
                            handle_connection(stream, &cfg);
                        });
                    }
                    Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                        thread::sleep(std::time::Duration::from_millis(10));
                    }
                    Err(_) => break,
                }
            }
        });

        Ok(Self {
            port,
            running,
            thread_handle: Some(thread_handle),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for MockPlaceholderServer {
    fn drop(&mut self) {
        self.stop();
    }
}

fn handle_connection(mut stream: TcpStream, config: &MockConfig) {
    // Accepted sockets inherit non-blocking mode on some platforms
    let _ = stream.set_nonblocking(false);
    let mut buffer = [0; 4096];

    let Ok(n) = stream.read(&mut buffer) else {
        return;
    };
    let request = String::from_utf8_lossy(&buffer[..n]);

    let first_line = request.lines().next().unwrap_or("");
    let parts: Vec<&str> = first_line.split_whitespace().collect();
    if parts.len() < 2 {
        send_response(&mut stream, 400, "Bad Request", r#"{"error": "Invalid request"}"#);
        return;
    }

    if let Some(status) = config.fail_status {
        send_response(&mut stream, status, "Error", r#"{"error": "Mock failure"}"#);
        return;
    }

    if config.malformed {
        send_response(&mut stream, 200, "OK", r#"{"error": "not a list"}"#);
        return;
    }

    let path = parts[1].split('?').next().unwrap_or(parts[1]);
    match (parts[0], path) {
        ("GET", "/users") => {
            let body = serde_json::to_string(&generate_mock_users(config.num_users)).unwrap();
            send_response(&mut stream, 200, "OK", &body);
        }
        ("GET", "/posts") => {
            let body = serde_json::to_string(&generate_mock_posts(config.num_posts)).unwrap();
            send_response(&mut stream, 200, "OK", &body);
        }
        ("GET", _) => {
            send_response(&mut stream, 404, "Not Found", "{}");
        }
        _ => {
            send_response(&mut stream, 405, "Method Not Allowed", "{}");
        }
    }
}

fn send_response(stream: &mut TcpStream, status: u16, status_text: &str, body: &str) {
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        status_text,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

fn generate_mock_users(count: usize) -> Vec<serde_json::Value> {
    (1..=count)
        .map(|id| {
            json!({
                "id": id,
                "name": format!("Mock User {}", id),
                "username": format!("mock{}", id),
                "email": format!("mock{}@example.com", id),
                "address": {
                    "street": format!("{} Mock Street", id),
                    "suite": format!("Suite {}", id * 100),
                    "city": "Mockville",
                    "zipcode": format!("{:05}", id),
                    "geo": { "lat": format!("{}.5", id), "lng": format!("-{}.25", id) }
                },
                "phone": format!("555-01{:02}", id),
                "website": format!("mock{}.example.com", id),
                "company": {
                    "name": format!("Mock Co {}", id),
                    "catchPhrase": "Mocked end-to-end paradigms",
                    "bs": "stub scalable fixtures"
                }
            })
        })
        .collect()
}

fn generate_mock_posts(count: usize) -> Vec<serde_json::Value> {
    (1..=count)
        .map(|id| {
            json!({
                "userId": (id - 1) / 10 + 1,
                "id": id,
                "title": format!("Mock post {}", id),
                "body": format!("Body of mock post {}", id)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_starts_on_random_port() {
        let server = MockPlaceholderServer::start(MockConfig::default()).unwrap();
        assert!(server.port() > 0);
        assert!(server.base_url().starts_with("http://127.0.0.1:"));
    }

    #[test]
    fn test_mock_users_have_full_shape() {
        let users = generate_mock_users(2);
        assert_eq!(users.len(), 2);
        assert_eq!(users[1]["id"], 2);
        assert_eq!(users[1]["address"]["geo"]["lat"], "2.5");
        assert_eq!(users[0]["company"]["catchPhrase"], "Mocked end-to-end paradigms");
    }

    #[test]
    fn test_mock_posts_group_by_user() {
        let posts = generate_mock_posts(11);
        assert_eq!(posts[0]["userId"], 1);
        assert_eq!(posts[10]["userId"], 2);
    }
}
