use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct DayView {
    day: usize,
    steps: Option<u64>,
    outcome: String,
}

#[derive(Debug, Deserialize)]
struct StatsResponse {
    completed: usize,
    missed: usize,
    open: usize,
    incentive_max: f64,
    incentive_earned_display: String,
}

#[derive(Debug, Deserialize)]
struct ChallengeResponse {
    current_day: usize,
    current_steps: u64,
    goal: u64,
    device: String,
    history: Vec<DayView>,
    stats: StatsResponse,
}

#[derive(Debug, Deserialize)]
struct ShareResponse {
    message: String,
    url: String,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/challenge")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_step_challenge"))
        .env("PORT", port.to_string())
        .env("CHALLENGE_DEVICE", "RunningPad Pro")
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

/// Puts the shared server back on day 1 with the default device.
async fn fresh_challenge(client: &Client, server: &TestServer) -> ChallengeResponse {
    let response = client
        .put(format!("{}/api/profile", server.base_url))
        .json(&serde_json::json!({ "name": "RunningPad Pro" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    client
        .post(format!("{}/api/reset", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn put_steps(client: &Client, server: &TestServer, steps: i64) -> reqwest::Response {
    client
        .put(format!("{}/api/steps", server.base_url))
        .json(&serde_json::json!({ "steps": steps }))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_submit_records_met_day_and_advances() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = fresh_challenge(&client, &server).await;
    assert_eq!(before.current_day, 1);
    assert_eq!(before.goal, 7000);
    assert_eq!(before.history.len(), 21);

    assert!(put_steps(&client, &server, 7200).await.status().is_success());

    let after: ChallengeResponse = client
        .post(format!("{}/api/submit", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(after.current_day, 2);
    assert_eq!(after.current_steps, 0);
    assert_eq!(after.history[0].day, 1);
    assert_eq!(after.history[0].steps, Some(7200));
    assert_eq!(after.history[0].outcome, "met");
    assert_eq!(after.stats.completed, 1);
    assert_eq!(after.stats.open, 20);
}

#[tokio::test]
async fn http_submit_below_goal_is_conflict() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    fresh_challenge(&client, &server).await;
    put_steps(&client, &server, 6999).await;

    let response = client
        .post(format!("{}/api/submit", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let state: ChallengeResponse = client
        .get(format!("{}/api/challenge", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(state.current_day, 1);
    assert_eq!(state.current_steps, 6999);
    assert_eq!(state.history[0].outcome, "unset");
}

#[tokio::test]
async fn http_skip_then_edit_keeps_day_pointer() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    fresh_challenge(&client, &server).await;
    put_steps(&client, &server, 500).await;

    let skipped: ChallengeResponse = client
        .post(format!("{}/api/skip", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(skipped.current_day, 2);
    assert_eq!(skipped.history[0].steps, Some(0));
    assert_eq!(skipped.history[0].outcome, "missed");
    assert_eq!(skipped.stats.missed, 1);

    let edited: ChallengeResponse = client
        .put(format!("{}/api/days/0", server.base_url))
        .json(&serde_json::json!({ "steps": 8000 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(edited.current_day, 2);
    assert_eq!(edited.history[0].steps, Some(8000));
    assert_eq!(edited.history[0].outcome, "met");
    assert_eq!(edited.stats.completed, 1);
    assert_eq!(edited.stats.missed, 0);
}

#[tokio::test]
async fn http_rejects_bad_input() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    fresh_challenge(&client, &server).await;

    let response = client
        .put(format!("{}/api/days/21", server.base_url))
        .json(&serde_json::json!({ "steps": 8000 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_steps(&client, &server, -5).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = client
        .put(format!("{}/api/profile", server.base_url))
        .json(&serde_json::json!({ "name": "Treadmill 3000" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.text().await.unwrap().contains("Treadmill 3000"));
}

#[tokio::test]
async fn http_incentive_follows_profile() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    fresh_challenge(&client, &server).await;
    for _ in 0..3 {
        put_steps(&client, &server, 7000).await;
        let response = client
            .post(format!("{}/api/submit", server.base_url))
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
    }

    let state: ChallengeResponse = client
        .get(format!("{}/api/challenge", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(state.stats.incentive_max, 125.0);
    assert_eq!(state.stats.incentive_earned_display, "17.86");

    let switched: ChallengeResponse = client
        .put(format!("{}/api/profile", server.base_url))
        .json(&serde_json::json!({ "name": "WALKR Pro" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(switched.device, "WALKR Pro");
    assert_eq!(switched.current_day, 4);
    assert_eq!(switched.stats.incentive_earned_display, "12.00");
}

#[tokio::test]
async fn http_share_and_index() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    fresh_challenge(&client, &server).await;
    put_steps(&client, &server, 1234).await;

    let share: ShareResponse = client
        .get(format!("{}/api/share", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        share.message,
        "I'm on day 1 of the 21-day challenge with 1234 steps! (RunningPad Pro)"
    );
    assert!(share.url.starts_with("https://api.whatsapp.com/send?text="));

    let page = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("21-Day Challenge"));
    assert!(!page.contains("{{"));
}

#[tokio::test]
async fn http_form_submit_redirects_home() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    fresh_challenge(&client, &server).await;

    let response = client
        .post(format!("{}/submit", server.base_url))
        .form(&[("steps", "7500")])
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    assert!(response.text().await.unwrap().contains(r#"<span id="day">2</span>"#));

    let response = client
        .post(format!("{}/submit", server.base_url))
        .form(&[("steps", "-3")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = client
        .post(format!("{}/skip", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let state: ChallengeResponse = client
        .get(format!("{}/api/challenge", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(state.current_day, 3);
    assert_eq!(state.history[0].steps, Some(7500));
    assert_eq!(state.history[1].outcome, "missed");
}
