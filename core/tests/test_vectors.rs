//! Verify build/parse methods against JSON test vectors stored in
//! `test-vectors/`.
//!
//! Each vector file describes parameters, the expected request, a simulated
//! response, and the expected parse result or error. Expected results are
//! deserialized into the typed DTOs before comparing, so field-ordering
//! differences cannot cause false negatives.

use lifelog_core::{
    ApiError, GetLifelogsParams, HttpMethod, HttpRequest, HttpResponse, Lifelog, LifelogClient,
    LifelogsResponse,
};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> LifelogClient {
    LifelogClient::new("test-api-key").with_base_url(BASE_URL)
}

/// Assert the built request matches the vector's `expected_request`.
fn check_request(name: &str, req: &HttpRequest, expected: &serde_json::Value) {
    assert_eq!(expected["method"].as_str().unwrap(), "GET", "{name}: method");
    assert_eq!(req.method, HttpMethod::Get, "{name}: method");
    assert_eq!(
        req.url,
        format!("{BASE_URL}{}", expected["path"].as_str().unwrap()),
        "{name}: url"
    );

    let expected_headers: Vec<(String, String)> = expected["headers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let arr = h.as_array().unwrap();
            (
                arr[0].as_str().unwrap().to_string(),
                arr[1].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(req.headers, expected_headers, "{name}: headers");
}

fn simulated_response(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

/// Assert a parse error matches the vector's `expected_error` kind.
fn check_error(name: &str, err: ApiError, case: &serde_json::Value) {
    match case["expected_error"].as_str().unwrap() {
        "api" => {
            let expected_status = case["expected_status"].as_u64().unwrap() as u16;
            match err {
                ApiError::Api { status, .. } => {
                    assert_eq!(status, expected_status, "{name}: status")
                }
                other => panic!("{name}: expected Api error, got {other:?}"),
            }
        }
        "decode" => assert!(
            matches!(err, ApiError::Decode(_)),
            "{name}: expected Decode error"
        ),
        other => panic!("{name}: unknown expected_error: {other}"),
    }
}

#[test]
fn list_test_vectors() {
    let raw = include_str!("../../test-vectors/list.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let params: Option<GetLifelogsParams> =
            serde_json::from_value(case["params"].clone()).unwrap();

        let req = c.build_list_lifelogs(params.as_ref());
        check_request(name, &req, &case["expected_request"]);

        let result = c.parse_list_lifelogs(simulated_response(case));
        if case.get("expected_error").is_some() {
            check_error(name, result.unwrap_err(), case);
        } else {
            let expected: LifelogsResponse =
                serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

#[test]
fn get_test_vectors() {
    let raw = include_str!("../../test-vectors/get.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_str().unwrap();

        let req = c.build_get_lifelog(id);
        check_request(name, &req, &case["expected_request"]);

        let result = c.parse_get_lifelog(simulated_response(case));
        if case.get("expected_error").is_some() {
            check_error(name, result.unwrap_err(), case);
        } else {
            let expected: Lifelog =
                serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}
