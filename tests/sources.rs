//! Record sources against a mock HTTP server and temporary files, and the
//! full load path through the worker into the reducer.

use adminui::storage::{FileSource, HttpSource, RecordSource};
use adminui::worker::{RecordWorker, WorkerMessage, WorkerResponse};
use adminui::{handle_event, AdminError, Config, Event};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MEMBERS: &str = r#"[
    {"id":"1","name":"Aaron Miles","email":"aaron@mailinator.com","role":"member"},
    {"id":"2","name":"Aishwarya Naik","email":"aishwarya@mailinator.com","role":"member"},
    {"id":"3","name":"Arvind Kumar","email":"arvind@mailinator.com","role":"admin"}
]"#;

async fn serve(status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/members.json"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn http_source_parses_members() {
    let server = serve(200, MEMBERS).await;
    let source = HttpSource::new(format!("{}/members.json", server.uri()));

    let records = source.fetch().await.unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[2].role, "admin");
}

#[tokio::test]
async fn http_error_status_is_reported() {
    let server = serve(500, "oops").await;
    let url = format!("{}/members.json", server.uri());

    let err = HttpSource::new(url.clone()).fetch().await.unwrap_err();
    match err {
        AdminError::HttpStatus { status, url: got } => {
            assert_eq!(status, 500);
            assert_eq!(got, url);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn http_non_array_body_is_parse_error() {
    let server = serve(200, r#"{"members": []}"#).await;
    let err = HttpSource::new(format!("{}/members.json", server.uri()))
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, AdminError::Parse(_)));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn unreachable_endpoint_is_fetch_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let url = format!("http://127.0.0.1:{port}/members.json");

    let err = HttpSource::new(url).fetch().await.unwrap_err();
    assert!(matches!(err, AdminError::Fetch(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn file_source_reads_members() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("members.json");
    std::fs::write(&file, MEMBERS).unwrap();

    let records = FileSource::new(&file).fetch().await.unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].name, "Aaron Miles");
}

#[tokio::test]
async fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = FileSource::new(dir.path().join("absent.json"))
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, AdminError::Io(_)));
}

#[tokio::test]
async fn worker_load_flows_into_state() {
    let server = serve(200, MEMBERS).await;
    let config = Config {
        endpoint: format!("{}/members.json", server.uri()),
        ..Config::default()
    };

    let mut handle = RecordWorker::new(adminui::storage::source_from_config(&config)).spawn();
    handle.post(WorkerMessage::load_records()).unwrap();
    let response = handle.responses.recv().await.unwrap();
    assert!(matches!(response, WorkerResponse::RecordsLoaded { ref records } if records.len() == 3));

    let mut state = adminui::initialize(&config);
    handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
    handle_event(&mut state, &Event::SearchInput("ARVIND".to_string())).unwrap();
    assert_eq!(state.filtered_len(), 1);

    handle.shutdown().await;
}

#[tokio::test]
async fn worker_reports_failure_and_retry_recovers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(MEMBERS))
        .mount(&server)
        .await;

    let source = HttpSource::new(format!("{}/members.json", server.uri()));
    let mut handle = RecordWorker::new(Box::new(source)).spawn();
    let mut state = adminui::initialize(&Config::default());

    handle.post(WorkerMessage::load_records()).unwrap();
    let failed = handle.responses.recv().await.unwrap();
    assert!(matches!(failed, WorkerResponse::FetchFailed { .. }));
    handle_event(&mut state, &Event::WorkerResponse(failed)).unwrap();

    let (_, actions) = handle_event(&mut state, &Event::Retry).unwrap();
    for action in actions {
        if let adminui::Action::PostToWorker(message) = action {
            handle.post(message).unwrap();
        }
    }
    let loaded = handle.responses.recv().await.unwrap();
    handle_event(&mut state, &Event::WorkerResponse(loaded)).unwrap();
    assert_eq!(state.total_count(), 3);

    handle.shutdown().await;
}
