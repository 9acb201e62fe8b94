//! Wire-contract tests for the function engine client, driven against a
//! local mock server. Each test pins one request-building or decoding
//! rule: bare collection URLs, filter query strings, JSON vs multipart
//! bodies, typed error mapping, and raw (undecoded) fetches.

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use faasctl::client::{
    AliasCreate, ApiError, Client, ExecutionCreate, FunctionCode, FunctionSpec, JobCreate,
    WebhookUpdate,
};
use faasctl::config::{AuthConfig, ProfileConfig};

fn client_for(server: &MockServer) -> Client {
    let profile = ProfileConfig {
        name: "test".to_string(),
        endpoint: server.uri(),
        auth: AuthConfig::None,
    };
    Client::new(&profile).unwrap()
}

#[tokio::test]
async fn test_list_without_filters_hits_bare_collection_url() {
    let server = MockServer::start().await;
    let rt1 = json!({"id": "r1", "name": "py3", "image": "python3:latest"});
    let rt2 = json!({"id": "r2", "name": "node", "image": "node:18"});
    Mock::given(method("GET"))
        .and(path("/v1/runtimes"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"runtimes": [rt1.clone(), rt2.clone()]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let runtimes = client.runtimes().list(&[]).await.unwrap();

    // Server order is preserved and fields come through untouched.
    assert_eq!(runtimes.len(), 2);
    assert_eq!(runtimes[0].get("id").unwrap(), "r1");
    assert_eq!(runtimes[1].get("id").unwrap(), "r2");
    assert_eq!(runtimes[1].get("image").unwrap(), "node:18");
    assert_eq!(&runtimes[0].to_map(), rt1.as_object().unwrap());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_list_with_filters_sends_exactly_those_pairs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/functions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"functions": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let filters = vec![
        ("name".to_string(), "eq:hello".to_string()),
        ("status".to_string(), "has:run".to_string()),
    ];
    client.functions().list(&filters).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("name=eq:hello&status=has:run"));
}

#[tokio::test]
async fn test_http_errors_map_to_typed_variants_with_faultstring() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/runtimes/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"faultstring": "Runtime not found."})),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/runtimes"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"faultstring": "image is required"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/runtimes/boom"))
        .respond_with(ResponseTemplate::new(500).set_body_string("orchestrator exploded"))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let err = client.runtimes().get("missing").await.unwrap_err();
    assert!(matches!(&err, ApiError::NotFound(msg) if msg == "Runtime not found."));

    let err = client
        .runtimes()
        .create(&faasctl::client::RuntimeCreate::new(""))
        .await
        .unwrap_err();
    assert!(matches!(&err, ApiError::BadRequest(msg) if msg == "image is required"));

    // No faultstring: the raw body is the message.
    let err = client.runtimes().get("boom").await.unwrap_err();
    assert!(matches!(&err, ApiError::InternalServerError(msg) if msg == "orchestrator exploded"));
}

#[tokio::test]
async fn test_job_create_sends_exact_body() {
    let server = MockServer::start().await;
    let expected = json!({
        "function_alias": null,
        "function_id": "F1",
        "function_version": 0,
        "name": null,
        "first_execution_time": null,
        "pattern": null,
        "function_input": null,
        "count": null
    });
    Mock::given(method("POST"))
        .and(path("/v1/jobs"))
        .and(body_json(&expected))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": "j1", "function_id": "F1"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let job = client
        .jobs()
        .create(&JobCreate {
            function_id: Some("F1".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(job.get("id").unwrap(), "j1");

    // Byte-for-byte: every unset field travels as null, in wire order.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        String::from_utf8_lossy(&requests[0].body),
        r#"{"function_alias":null,"function_id":"F1","function_version":0,"name":null,"first_execution_time":null,"pattern":null,"function_input":null,"count":null}"#
    );
}

#[tokio::test]
async fn test_function_create_with_package_is_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/functions"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "f1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let code = FunctionCode::Package {
        md5sum: Some("5d41402abc4b2a76b9719d911017c592".to_string()),
    };
    let spec = FunctionSpec {
        name: Some("hello".to_string()),
        ..Default::default()
    };
    client
        .functions()
        .create(Some("rt1"), &code, Some(b"PK\x03\x04zipbytes".to_vec()), &spec)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&requests[0].body).to_string();
    // Fixed field name doubling as the synthetic filename.
    assert!(body.contains(r#"name="package"; filename="package""#));
    // Text parts: plain strings plus the pre-serialized code document.
    assert!(body.contains(r#"name="runtime_id""#));
    assert!(body.contains("rt1"));
    assert!(body.contains(r#"{"source":"package","md5sum":"5d41402abc4b2a76b9719d911017c592"}"#));
    assert!(body.contains(r#"name="name""#));
}

#[tokio::test]
async fn test_function_create_without_package_is_json() {
    let server = MockServer::start().await;
    let expected = json!({
        "runtime_id": null,
        "code": "{\"source\":\"image\",\"image\":\"nginx:latest\"}"
    });
    Mock::given(method("POST"))
        .and(path("/v1/functions"))
        .and(body_json(&expected))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "f2"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let code = FunctionCode::Image {
        image: "nginx:latest".to_string(),
    };
    let function = client
        .functions()
        .create(None, &code, None, &FunctionSpec::default())
        .await
        .unwrap();
    assert_eq!(function.get("id").unwrap(), "f2");
}

#[tokio::test]
async fn test_function_update_merges_code_keys_into_top_level() {
    let server = MockServer::start().await;
    let expected = json!({
        "source": "swift",
        "swift": {"container": "c1", "object": "o1"},
        "entry": "main.handle"
    });
    Mock::given(method("PUT"))
        .and(path("/v1/functions/f1"))
        .and(body_json(&expected))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "f1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let code = FunctionCode::Swift {
        swift: faasctl::client::SwiftObject {
            container: Some("c1".to_string()),
            object: Some("o1".to_string()),
        },
    };
    let spec = FunctionSpec {
        entry: Some("main.handle".to_string()),
        ..Default::default()
    };
    client
        .functions()
        .update("f1", Some(&code), None, &spec)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_scale_up_and_down_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/functions/f1/scale_up"))
        .and(body_json(json!({"count": 1})))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/functions/f1/scale_down"))
        .and(body_json(json!({"count": 3})))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.functions().scaleup("f1", 1).await.unwrap();
    client.functions().scaledown("f1", 3).await.unwrap();
}

#[tokio::test]
async fn test_function_download_fetches_raw_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/functions/f1"))
        .and(query_param("download", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"PK\x03\x04content".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let content = client.functions().download("f1").await.unwrap();
    assert_eq!(content.as_ref(), b"PK\x03\x04content");
}

#[tokio::test]
async fn test_execution_log_skips_json_decoding() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/executions/e1/log"))
        .respond_with(ResponseTemplate::new(200).set_body_string("line one\nline two\n"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let log = client.executions().get_log("e1").await.unwrap();
    assert_eq!(log.as_ref(), b"line one\nline two\n");
}

#[tokio::test]
async fn test_execution_create_carries_explicit_nulls() {
    let server = MockServer::start().await;
    let expected = json!({
        "function_id": "f1",
        "function_version": 0,
        "function_alias": null,
        "sync": true,
        "input": {}
    });
    Mock::given(method("POST"))
        .and(path("/v1/executions"))
        .and(body_json(&expected))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "e1", "sync": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let execution = client
        .executions()
        .create(&ExecutionCreate {
            function_id: Some("f1".to_string()),
            function_version: 0,
            function_alias: None,
            sync: true,
            input: Some(json!({})),
        })
        .await
        .unwrap();
    assert_eq!(execution.get("sync").unwrap(), &json!(true));
}

#[tokio::test]
async fn test_alias_create_and_version_create_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/aliases"))
        .and(body_json(json!({
            "name": "prod",
            "function_id": "f1",
            "function_version": 2,
            "description": ""
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"name": "prod"})))
        .expect(1)
        .mount(&server)
        .await;
    // Version create always carries the description, null when unset.
    Mock::given(method("POST"))
        .and(path("/v1/functions/f1/versions"))
        .and(body_json(json!({"description": null})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"version_number": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .aliases()
        .create(&AliasCreate {
            name: "prod".to_string(),
            function_id: "f1".to_string(),
            function_version: 2,
            description: String::new(),
        })
        .await
        .unwrap();
    client
        .function_versions()
        .create("f1", None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_webhook_update_keeps_null_for_unset_field() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1/webhooks/w1"))
        .and(body_json(json!({"function_id": "f9", "description": null})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "w1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .webhooks()
        .update(
            "w1",
            &WebhookUpdate {
                function_id: Some("f9".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_succeeds_on_2xx_ignoring_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/webhooks/w1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.webhooks().delete("w1").await.unwrap();
}

#[tokio::test]
async fn test_find_by_name_outcomes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/runtimes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "runtimes": [
                {"id": "r1", "name": "py3"},
                {"id": "r2", "name": "node"},
                {"id": "r3", "name": "node"}
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let found = client.runtimes().find("py3").await.unwrap();
    assert_eq!(found.get("id").unwrap(), "r1");

    let err = client.runtimes().find("golang").await.unwrap_err();
    assert!(matches!(err, ApiError::NoMatch { kind: "runtime", .. }));

    let err = client.runtimes().find("node").await.unwrap_err();
    assert!(matches!(err, ApiError::MultipleMatches { kind: "runtime", .. }));
}

#[tokio::test]
async fn test_worker_list_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/functions/f1/workers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "workers": [{"function_id": "f1", "worker_name": "worker-0"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let workers = client.workers().list("f1", &[]).await.unwrap();
    assert_eq!(workers[0].get("worker_name").unwrap(), "worker-0");
}

#[tokio::test]
async fn test_runtime_pool_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/runtimes/r1/pool"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"name": "r1", "capacity": 5})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let pool = client.runtimes().get_pool("r1").await.unwrap();
    assert_eq!(pool.get("capacity").unwrap(), &json!(5));
}

#[tokio::test]
async fn test_bulk_delete_attempts_every_id_and_aggregates() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/jobs/j1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/jobs/j2"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"faultstring": "job is running"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/jobs/j3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let api = client.jobs();
    let ids = vec!["j1".to_string(), "j2".to_string(), "j3".to_string()];

    // The middle failure must not short-circuit the third delete; the
    // .expect(1) on every mock verifies each call happened exactly once.
    let err = faasctl::commands::delete_each("job", &ids, |id| api.delete(id))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Unable to delete the specified job(s).");
}
