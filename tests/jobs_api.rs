use job_search::types::Job;
use job_search::web::{build_listing_service, build_rocket};
use job_search::ConfigManager;
use rocket::http::Status;
use rocket::local::asynchronous::Client;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(config: &ConfigManager) -> Client {
    let listing = build_listing_service(config).expect("listing service");
    Client::tracked(build_rocket(listing, config.port))
        .await
        .expect("valid rocket instance")
}

async fn offline_client() -> Client {
    client_for(&ConfigManager::default()).await
}

async fn live_client(server: &MockServer) -> Client {
    let mut config = ConfigManager::default();
    config.upstream.api_key = Some("test-key".to_string());
    config.upstream.base_url = server.uri();
    client_for(&config).await
}

fn upstream_page(company: &str, count: usize) -> Value {
    let data: Vec<Value> = (0..count)
        .map(|n| {
            json!({
                "job_title": format!("Engineer {}", n),
                "employer_name": company,
                "job_city": null,
                "job_country": "IN",
                "job_description": "Ship things",
                "job_apply_link": format!("https://{}.test/jobs/{}", company.to_lowercase(), n),
                "job_min_salary": null,
                "job_max_salary": null,
                "job_employment_type": "FULLTIME",
                "job_highlights": { "Qualifications": ["Rust"] }
            })
        })
        .collect();
    json!({ "status": "OK", "data": data })
}

async fn mount_page(server: &MockServer, page: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("page", page))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_offline_company_filter() {
    let client = offline_client().await;
    let response = client.get("/jobs?company=acme").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.headers().get_one("X-Has-More"), Some("false"));
    assert_eq!(response.headers().get_one("X-Total-Count"), Some("1"));

    let jobs: Vec<Job> = response.into_json().await.expect("job list");
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].company, "Acme Corp");
}

#[tokio::test]
async fn test_offline_salary_min_compares_native_units() {
    let client = offline_client().await;
    let response = client.get("/jobs?salaryMin=130000").dispatch().await;

    let jobs: Vec<Job> = response.into_json().await.expect("job list");
    let companies: Vec<_> = jobs.iter().map(|j| j.company.as_str()).collect();
    assert_eq!(companies, vec!["Acme Corp", "Globex"]);
}

#[tokio::test]
async fn test_offline_salary_max_excludes_high_native_amounts() {
    let client = offline_client().await;
    let response = client.get("/jobs?salaryMax=130000").dispatch().await;

    let jobs: Vec<Job> = response.into_json().await.expect("job list");
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].company, "Acme Corp");
}

#[tokio::test]
async fn test_offline_pagination_headers() {
    let client = offline_client().await;
    let response = client.get("/jobs?pageSize=1&page=1").dispatch().await;

    assert_eq!(response.headers().get_one("X-Has-More"), Some("true"));
    assert_eq!(response.headers().get_one("X-Total-Count"), Some("2"));
    let jobs: Vec<Job> = response.into_json().await.expect("job list");
    assert_eq!(jobs.len(), 1);
}

#[tokio::test]
async fn test_malformed_numbers_use_defaults() {
    let client = offline_client().await;
    let response = client
        .get("/jobs?page=abc&pageSize=-3&salaryMin=lots&aggregatePages=zero")
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    let jobs: Vec<Job> = response.into_json().await.expect("job list");
    assert_eq!(jobs.len(), 1);
}

#[tokio::test]
async fn test_cors_exposes_paging_headers() {
    let client = offline_client().await;
    let response = client.get("/jobs").dispatch().await;

    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some("*")
    );
    let exposed = response
        .headers()
        .get_one("Access-Control-Expose-Headers")
        .unwrap_or_default();
    assert!(exposed.contains("X-Has-More"));
    assert!(exposed.contains("X-Total-Count"));
}

#[tokio::test]
async fn test_health_and_preflight() {
    let client = offline_client().await;

    let health = client.get("/health").dispatch().await;
    assert_eq!(health.status(), Status::Ok);
    assert_eq!(health.into_string().await.as_deref(), Some("\"OK\""));

    let preflight = client.options("/jobs").dispatch().await;
    assert_eq!(preflight.status(), Status::Ok);
}

#[tokio::test]
async fn test_unknown_route_returns_json_error() {
    let client = offline_client().await;
    let response = client.get("/nope").dispatch().await;

    assert_eq!(response.status(), Status::NotFound);
    let body: Value = response.into_json().await.expect("error body");
    assert_eq!(body["error_code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_live_page_uses_aggregate_count() {
    let server = MockServer::start().await;
    mount_page(&server, "1", upstream_page("Acme", 10)).await;
    mount_page(&server, "2", upstream_page("Globex", 10)).await;
    mount_page(&server, "3", upstream_page("Initech", 10)).await;

    let client = live_client(&server).await;
    let response = client.get("/jobs?page=2").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.headers().get_one("X-Has-More"), Some("true"));
    assert_eq!(response.headers().get_one("X-Total-Count"), Some("30"));

    let jobs: Vec<Job> = response.into_json().await.expect("job list");
    assert_eq!(jobs.len(), 10);
    assert!(jobs.iter().all(|j| j.company == "Globex"));
    assert_eq!(jobs[0].location, "IN");
    assert_eq!(jobs[0].skills, vec!["Rust"]);
    assert_eq!(jobs[0].salary_min, None);
}

#[tokio::test]
async fn test_live_no_more_when_aggregate_reached() {
    let server = MockServer::start().await;
    mount_page(&server, "1", upstream_page("Acme", 10)).await;
    mount_page(&server, "2", upstream_page("Globex", 10)).await;

    let client = live_client(&server).await;
    let response = client
        .get("/jobs?page=2&aggregatePages=2")
        .dispatch()
        .await;

    assert_eq!(response.headers().get_one("X-Has-More"), Some("false"));
    assert_eq!(response.headers().get_one("X-Total-Count"), Some("20"));
}

#[tokio::test]
async fn test_live_count_is_cached_between_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upstream_page("Acme", 4)))
        .expect(3)
        .mount(&server)
        .await;

    let client = live_client(&server).await;
    for _ in 0..2 {
        let response = client.get("/jobs?company=acme").dispatch().await;
        assert_eq!(response.headers().get_one("X-Total-Count"), Some("4"));
        assert_eq!(response.headers().get_one("X-Has-More"), Some("false"));
    }
}

#[tokio::test]
async fn test_live_upstream_failure_serves_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = live_client(&server).await;
    let response = client.get("/jobs").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.headers().get_one("X-Has-More"), Some("false"));
    assert_eq!(response.headers().get_one("X-Total-Count"), Some("1"));

    let jobs: Vec<Job> = response.into_json().await.expect("job list");
    assert_eq!(jobs.len(), 1);
}
