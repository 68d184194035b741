mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::Duration;
use common::{gql, query, send, test_app};
use dvga::infrastructure::auth::tokens::{TokenKind, TokenService};
use serde_json::json;

fn titles(value: &serde_json::Value, field: &str) -> Vec<String> {
    value["data"][field]
        .as_array()
        .unwrap_or_else(|| panic!("no {field} in {value}"))
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn lists_public_pastes_newest_first() {
    let t = test_app().await;
    let res = query(&t.app, "{ pastes(public: true) { title } }").await;
    assert_eq!(titles(&res, "pastes"), vec!["Testing", "Welcome"]);
}

#[tokio::test]
async fn filter_argument_is_injectable() {
    let t = test_app().await;
    let res = query(&t.app, r#"{ pastes(filter: "x' OR '1'='1") { title } }"#).await;
    // Private pastes leak through the injected clause.
    let got = titles(&res, "pastes");
    assert_eq!(got.len(), 4);
    assert!(got.contains(&"Operator notes".to_string()));
}

/// `paste(title:)` followed by `fields` alternating `owner` / `pastes` links.
fn owner_chain(title: &str, fields: usize) -> String {
    let mut q = format!(r#"{{ paste(title: "{title}") {{ "#);
    for i in 0..fields {
        q.push_str(if i % 2 == 0 { "owner { " } else { "pastes { " });
    }
    q.push_str("id");
    for _ in 0..=fields {
        q.push_str(" }");
    }
    q.push_str(" }");
    q
}

/// An owner with exactly one paste, so the owner/pastes cycle never fans out.
async fn single_paste_owner(t: &common::TestApp) {
    query(
        &t.app,
        r#"mutation { createUser(username: "solo", password: "solo") { id } }"#,
    )
    .await;
    let token = t.ctx.tokens().issue("solo", TokenKind::Access).unwrap();
    let bearer = format!("Bearer {token}");
    let (_, res) = gql(
        &t.app,
        json!({ "query": r#"mutation { createPaste(title: "solo", content: "only one") { owner { name } } }"# }),
        &[("Authorization", bearer.as_str())],
    )
    .await;
    assert_eq!(res["data"]["createPaste"]["owner"]["name"], "solo", "{res}");
}

#[tokio::test]
async fn beginner_mode_accepts_nesting_past_the_default_limit() {
    let t = test_app().await;
    single_paste_owner(&t).await;

    // 41 nested selection sets: above async-graphql's default of 32.
    let res = query(&t.app, &owner_chain("solo", 39)).await;
    assert!(res.get("errors").is_none(), "{res}");
    let mut node = &res["data"]["paste"];
    for i in 0..39 {
        node = if i % 2 == 0 { &node["owner"] } else { &node["pastes"][0] };
    }
    assert!(node["id"].is_i64(), "{res}");
}

#[tokio::test]
async fn nesting_beyond_the_parser_ceiling_is_rejected() {
    let t = test_app().await;
    single_paste_owner(&t).await;

    let res = query(&t.app, &owner_chain("solo", 100)).await;
    let message = res["errors"][0]["message"].as_str().unwrap_or_default();
    assert!(message.contains("recursion limit exceeded"), "{res}");
}

#[tokio::test]
async fn expert_mode_limits_depth_and_introspection() {
    let t = test_app().await;
    let expert = [("X-DVGA-MODE", "Expert")];

    let (_, deep) = gql(
        &t.app,
        json!({ "query": "{ pastes { owner { pastes { title } } } }" }),
        &expert,
    )
    .await;
    assert!(deep["errors"].is_array(), "{deep}");

    let (_, shallow) = gql(
        &t.app,
        json!({ "query": "{ pastes { owner { name } } }" }),
        &expert,
    )
    .await;
    assert!(shallow.get("errors").is_none(), "{shallow}");

    let (status, intro) = gql(
        &t.app,
        json!({ "query": "{ __schema { queryType { name } } }" }),
        &expert,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        intro["errors"][0]["message"],
        "Introspection is disabled in expert mode",
        "{intro}"
    );

    let (status, typed) = gql(
        &t.app,
        json!({ "query": r#"{ __type(name: "PasteObject") { name } }"# }),
        &expert,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{typed}");

    let open = query(&t.app, "{ __schema { queryType { name } } }").await;
    assert_eq!(open["data"]["__schema"]["queryType"]["name"], "QueryRoot");
}

#[tokio::test]
async fn batching_is_accepted_in_beginner_and_rejected_in_expert() {
    let t = test_app().await;
    let batch = json!([
        { "query": "{ systemHealth }" },
        { "query": "{ systemHealth }" },
        { "query": "{ systemHealth }" }
    ]);

    let (status, res) = gql(&t.app, batch.clone(), &[]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(res.as_array().map(Vec::len), Some(3));

    let (status, res) = gql(&t.app, batch, &[("X-DVGA-MODE", "expert")]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(res["errors"][0]["message"]
        .as_str()
        .unwrap()
        .contains("Batch"));
}

#[tokio::test]
async fn difficulty_cookie_switches_mode() {
    let t = test_app().await;
    let req = Request::builder()
        .uri("/difficulty/expert")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send(&t.app, req).await;
    assert_eq!(status, StatusCode::OK);
    let set_cookie = headers
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let cookie = set_cookie.split(';').next().unwrap().to_string();
    assert!(cookie.starts_with("session=expert."));

    let batch = json!([{ "query": "{ systemHealth }" }, { "query": "{ systemHealth }" }]);
    let (status, _) = gql(&t.app, batch.clone(), &[("Cookie", cookie.as_str())]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // A cookie signed by someone else is ignored.
    let (status, _) = gql(&t.app, batch, &[("Cookie", "session=expert.00ff")]).await;
    assert_eq!(status, StatusCode::OK);

    let req = Request::builder()
        .uri("/difficulty/impossible")
        .body(Body::empty())
        .unwrap();
    let (status, _, _) = send(&t.app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_issues_tokens_with_configured_lifetimes() {
    let t = test_app().await;
    let res = query(
        &t.app,
        r#"mutation { login(username: "operator", password: "password123") { accessToken refreshToken } }"#,
    )
    .await;
    let access = res["data"]["login"]["accessToken"].as_str().unwrap();
    let refresh = res["data"]["login"]["refreshToken"].as_str().unwrap();

    let tokens = t.ctx.tokens();
    let claims = tokens.verify(access, TokenKind::Access).unwrap();
    assert_eq!(claims.identity, "operator");
    assert_eq!(claims.exp - claims.iat, 120 * 60);
    let claims = tokens.verify(refresh, TokenKind::Refresh).unwrap();
    assert_eq!(claims.exp - claims.iat, 30 * 24 * 60 * 60);
}

#[tokio::test]
async fn login_with_wrong_password_returns_error() {
    let t = test_app().await;
    let res = query(
        &t.app,
        r#"mutation { login(username: "operator", password: "nope") { accessToken } }"#,
    )
    .await;
    assert_eq!(
        res["errors"][0]["message"],
        "Username or Password is incorrect"
    );
}

#[tokio::test]
async fn me_trusts_forged_tokens() {
    let t = test_app().await;
    let forged = TokenService::new("attacker", Duration::minutes(5), Duration::days(1))
        .issue("admin", TokenKind::Access)
        .unwrap();
    let res = query(
        &t.app,
        &format!(r#"{{ me(token: "{forged}") {{ id username }} }}"#),
    )
    .await;
    assert_eq!(res["data"]["me"]["username"], "admin");
}

#[tokio::test]
async fn create_paste_is_attributed_to_bearer_or_anonymous() {
    let t = test_app().await;
    let token = t.ctx.tokens().issue("operator", TokenKind::Access).unwrap();
    let bearer = format!("Bearer {token}");

    let (_, res) = gql(
        &t.app,
        json!({ "query": r#"mutation { createPaste(title: "mine", content: "c") { title userAgent owner { name } } }"# }),
        &[("Authorization", bearer.as_str()), ("User-Agent", "test-agent/1.0")],
    )
    .await;
    let paste = &res["data"]["createPaste"];
    assert_eq!(paste["owner"]["name"], "operator", "{res}");
    assert_eq!(paste["userAgent"], "test-agent/1.0");

    let res = query(
        &t.app,
        r#"mutation { createPaste(title: "anon", content: "c", public: false) { public owner { name } } }"#,
    )
    .await;
    assert_eq!(res["data"]["createPaste"]["owner"]["name"], "DVGAUser");
    assert_eq!(res["data"]["createPaste"]["public"], false);
}

#[tokio::test]
async fn edit_and_delete_need_no_ownership() {
    let t = test_app().await;
    let res = query(&t.app, r#"{ paste(title: "Operator notes") { id } }"#).await;
    let id = res["data"]["paste"]["id"].as_i64().unwrap();

    let res = query(
        &t.app,
        &format!(r#"mutation {{ editPaste(id: {id}, content: "defaced") {{ title content }} }}"#),
    )
    .await;
    assert_eq!(res["data"]["editPaste"]["title"], "Operator notes");
    assert_eq!(res["data"]["editPaste"]["content"], "defaced");

    let res = query(&t.app, &format!("mutation {{ deletePaste(id: {id}) }}")).await;
    assert_eq!(res["data"]["deletePaste"], true);
    let res = query(&t.app, &format!("{{ paste(id: {id}) {{ id }} }}")).await;
    assert!(res["data"]["paste"].is_null());
}

#[tokio::test]
async fn read_and_burn_deletes_burn_pastes() {
    let t = test_app().await;
    let res = query(&t.app, r#"{ paste(title: "Read once") { id } }"#).await;
    let id = res["data"]["paste"]["id"].as_i64().unwrap();

    let res = query(&t.app, &format!("{{ readAndBurn(id: {id}) {{ content burn }} }}")).await;
    assert_eq!(res["data"]["readAndBurn"]["burn"], true);

    let res = query(&t.app, &format!("{{ readAndBurn(id: {id}) {{ content }} }}")).await;
    assert!(res["data"]["readAndBurn"].is_null());
}

#[tokio::test]
async fn upload_paste_writes_into_upload_dir() {
    let t = test_app().await;
    let res = query(
        &t.app,
        r#"mutation { uploadPaste(filename: "notes/first.txt", content: "uploaded body") }"#,
    )
    .await;
    assert_eq!(res["data"]["uploadPaste"], "uploaded body");
    let written = std::fs::read_to_string(t.upload_dir().join("notes/first.txt")).unwrap();
    assert_eq!(written, "uploaded body");

    let res = query(&t.app, r#"{ search(keyword: "uploaded body") { title public } }"#).await;
    assert_eq!(
        res["data"]["search"][0]["title"],
        "Imported Paste from File - notes/first.txt"
    );
    assert_eq!(res["data"]["search"][0]["public"], false);
}

#[tokio::test]
async fn users_and_audits_are_exposed() {
    let t = test_app().await;
    let (_, _) = gql(
        &t.app,
        json!({ "query": "query Heartbeat { systemHealth }", "operationName": "Heartbeat" }),
        &[],
    )
    .await;

    let res = query(&t.app, "{ users { username } }").await;
    let names: Vec<&str> = res["data"]["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["username"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["admin", "operator", "DVGAUser"]);

    let res = query(&t.app, "{ audits { gqloperation gqlquery } }").await;
    let audits = res["data"]["audits"].as_array().unwrap();
    assert!(audits
        .iter()
        .any(|a| a["gqloperation"] == "Heartbeat" && a["gqlquery"] == "query Heartbeat { systemHealth }"));
}

#[tokio::test]
async fn create_user_stores_new_account() {
    let t = test_app().await;
    let res = query(
        &t.app,
        r#"mutation { createUser(username: "mallory", password: "hunter2") { id username } }"#,
    )
    .await;
    assert_eq!(res["data"]["createUser"]["username"], "mallory");

    let res = query(
        &t.app,
        r#"mutation { createUser(username: "mallory", password: "again") { id } }"#,
    )
    .await;
    assert!(res["errors"].is_array());

    let res = query(
        &t.app,
        r#"mutation { login(username: "mallory", password: "hunter2") { accessToken } }"#,
    )
    .await;
    assert!(res["data"]["login"]["accessToken"].is_string());
}

#[tokio::test]
async fn static_files_and_health() {
    let t = test_app().await;

    let req = Request::builder().uri("/static/hello.txt").body(Body::empty()).unwrap();
    let (status, _, body) = send(&t.app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"hello from static");

    let req = Request::builder().uri("/static/missing.txt").body(Body::empty()).unwrap();
    let (status, _, _) = send(&t.app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, _, body) = send(&t.app, req).await;
    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn graphiql_page_points_at_both_endpoints() {
    let t = test_app().await;
    let req = Request::builder().uri("/graphiql").body(Body::empty()).unwrap();
    let (status, _, body) = send(&t.app, req).await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("/graphql"));
    assert!(html.contains("/subscriptions"));
}
