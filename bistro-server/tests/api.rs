//! HTTP API 集成测试
//!
//! 每个测试用 mem:// 引擎初始化独立的服务器状态，
//! 将路由器作为 tower Service 在进程内调用，不监听端口。

use axum::{Router, body::Body};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::Service;

use bistro_server::auth::JwtConfig;
use bistro_server::core::{Config, ServerState, build_router};
use bistro_server::db::models::{MenuItemCreate, UserCreate};
use bistro_server::db::repository::{MenuRepository, PaymentRepository, UserRepository};

const TEST_SECRET: &str = "integration-test-secret-key-0123456789";

fn test_config() -> Config {
    Config {
        http_port: 0,
        db_addr: "mem://".to_string(),
        db_namespace: "bistro".to_string(),
        db_database: "test".to_string(),
        db_user: None,
        db_pass: None,
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            expiration_minutes: 60,
        },
        payment_secret_key: "sk_test_dummy".to_string(),
        // 不可达地址：支付网关仅在显式测试里触发，且只验证本地校验路径
        payment_api_url: "http://127.0.0.1:9".to_string(),
        enable_payments: true,
    }
}

async fn test_app() -> (Router, ServerState) {
    let state = ServerState::initialize(&test_config()).await;
    (build_router(state.clone()), state)
}

fn token_for(state: &ServerState, email: &str) -> String {
    state
        .get_jwt_service()
        .issue_token(email, None)
        .expect("failed to issue test token")
}

/// 建档 + 提权，返回管理员令牌
async fn seed_admin(state: &ServerState, email: &str) -> String {
    let repo = UserRepository::new(state.get_db());
    let user = repo
        .create(UserCreate {
            email: email.to_string(),
            name: None,
        })
        .await
        .expect("failed to seed admin user");
    let id = user.id.expect("created user has no id").to_string();
    repo.promote_to_admin(&id)
        .await
        .expect("failed to promote admin");
    token_for(state, email)
}

async fn seed_menu_item(state: &ServerState, name: &str, category: &str, price: f64) -> String {
    let repo = MenuRepository::new(state.get_db());
    let item = repo
        .create(MenuItemCreate {
            name: name.to_string(),
            category: category.to_string(),
            price,
            recipe: None,
            image: None,
        })
        .await
        .expect("failed to seed menu item");
    item.id.expect("created menu item has no id").to_string()
}

async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (http::StatusCode, Value) {
    let mut builder = http::Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(http::header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("failed to build request"),
        None => builder.body(Body::empty()).expect("failed to build request"),
    };

    let mut service = app.clone();
    let response = service.call(request).await.expect("request failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    (status, value)
}

// ============================================================================
// Liveness & token issuance
// ============================================================================

#[tokio::test]
async fn liveness_is_public() {
    let (app, _state) = test_app().await;
    let (status, body) = request(&app, "GET", "/", None, None).await;
    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(body, Value::String("bistro is running".to_string()));
}

#[tokio::test]
async fn jwt_endpoint_issues_usable_token() {
    let (app, _state) = test_app().await;

    let (status, body) = request(
        &app,
        "POST",
        "/jwt",
        None,
        Some(json!({"email": "guest@bistro.test"})),
    )
    .await;
    assert_eq!(status, http::StatusCode::OK);
    let token = body["token"].as_str().expect("no token in response").to_string();

    // 签发的令牌可以通过受保护接口的验证
    let (status, body) = request(&app, "GET", "/carts", Some(&token), None).await;
    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn garbage_token_is_unauthorized() {
    let (app, _state) = test_app().await;
    let (status, body) = request(&app, "GET", "/carts", Some("not.a.jwt"), None).await;
    assert_eq!(status, http::StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!(true));
}

#[tokio::test]
async fn expired_token_is_unauthorized() {
    let (app, state) = test_app().await;

    // 同一密钥、已过期两分钟的令牌
    let expired_service = bistro_server::JwtService::with_config(JwtConfig {
        secret: state.config.jwt.secret.clone(),
        expiration_minutes: -2,
    });
    let token = expired_service
        .issue_token("late@bistro.test", None)
        .expect("failed to issue expired token");

    let (status, body) = request(&app, "GET", "/carts", Some(&token), None).await;
    assert_eq!(status, http::StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!(true));
}

// ============================================================================
// Admin gating
// ============================================================================

#[tokio::test]
async fn admin_endpoints_require_token() {
    let (app, _state) = test_app().await;

    for uri in ["/users", "/admin-stats", "/order-stats"] {
        let (status, body) = request(&app, "GET", uri, None, None).await;
        assert_eq!(status, http::StatusCode::UNAUTHORIZED, "GET {uri}");
        assert_eq!(body["error"], json!(true), "GET {uri}");
    }
}

#[tokio::test]
async fn admin_endpoints_forbid_non_admin() {
    let (app, state) = test_app().await;

    // 普通用户：有档案但无 admin 角色
    request(
        &app,
        "POST",
        "/users",
        None,
        Some(json!({"email": "waiter@bistro.test"})),
    )
    .await;
    let token = token_for(&state, "waiter@bistro.test");

    for uri in ["/users", "/admin-stats", "/order-stats"] {
        let (status, body) = request(&app, "GET", uri, Some(&token), None).await;
        assert_eq!(status, http::StatusCode::FORBIDDEN, "GET {uri}");
        assert_eq!(body["error"], json!(true), "GET {uri}");
    }

    // 令牌有效但没有任何用户档案：同样禁止
    let ghost = token_for(&state, "ghost@bistro.test");
    let (status, _) = request(&app, "GET", "/users", Some(&ghost), None).await;
    assert_eq!(status, http::StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_can_list_users() {
    let (app, state) = test_app().await;
    let token = seed_admin(&state, "boss@bistro.test").await;

    let (status, body) = request(&app, "GET", "/users", Some(&token), None).await;
    assert_eq!(status, http::StatusCode::OK);
    let users = body.as_array().expect("expected a user array");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["email"], json!("boss@bistro.test"));
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn duplicate_user_is_not_inserted() {
    let (app, state) = test_app().await;
    let payload = json!({"email": "repeat@bistro.test", "name": "Repeat"});

    let (status, body) = request(&app, "POST", "/users", None, Some(payload.clone())).await;
    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(body["email"], json!("repeat@bistro.test"));

    let (status, body) = request(&app, "POST", "/users", None, Some(payload)).await;
    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(body["message"], json!("user already exists"));

    let count = UserRepository::new(state.get_db())
        .count()
        .await
        .expect("count failed");
    assert_eq!(count, 1);
}

#[tokio::test]
async fn promote_then_check_admin_status() {
    let (app, state) = test_app().await;

    let (_, created) = request(
        &app,
        "POST",
        "/users",
        None,
        Some(json!({"email": "chef@bistro.test"})),
    )
    .await;
    let id = created["id"].as_str().expect("created user has no id");

    let (status, promoted) =
        request(&app, "PATCH", &format!("/users/admin/{id}"), None, None).await;
    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(promoted["role"], json!("admin"));

    // 本人查询：admin = true
    let token = token_for(&state, "chef@bistro.test");
    let (status, body) = request(
        &app,
        "GET",
        "/users/admin/chef@bistro.test",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(body["admin"], json!(true));

    // 他人身份的令牌查询：不回查数据库，直接 false
    let other = token_for(&state, "stranger@bistro.test");
    let (status, body) = request(
        &app,
        "GET",
        "/users/admin/chef@bistro.test",
        Some(&other),
        None,
    )
    .await;
    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(body["admin"], json!(false));

    // 提权不存在的用户: 404
    let (status, _) = request(&app, "PATCH", "/users/admin/user:missing", None, None).await;
    assert_eq!(status, http::StatusCode::NOT_FOUND);
}

// ============================================================================
// Menu
// ============================================================================

#[tokio::test]
async fn menu_read_is_public_but_mutation_is_admin_only() {
    let (app, state) = test_app().await;

    let (status, body) = request(&app, "GET", "/menu", None, None).await;
    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(body, json!([]));

    let item = json!({"name": "Margherita", "category": "pizza", "price": 10.5});

    // 无令牌 → 401
    let (status, _) = request(&app, "POST", "/menu", None, Some(item.clone())).await;
    assert_eq!(status, http::StatusCode::UNAUTHORIZED);

    // 非管理员 → 403
    request(
        &app,
        "POST",
        "/users",
        None,
        Some(json!({"email": "waiter@bistro.test"})),
    )
    .await;
    let waiter = token_for(&state, "waiter@bistro.test");
    let (status, _) = request(&app, "POST", "/menu", Some(&waiter), Some(item.clone())).await;
    assert_eq!(status, http::StatusCode::FORBIDDEN);

    // 管理员创建和删除
    let admin = seed_admin(&state, "boss@bistro.test").await;
    let (status, created) = request(&app, "POST", "/menu", Some(&admin), Some(item)).await;
    assert_eq!(status, http::StatusCode::OK);
    let id = created["id"].as_str().expect("created menu item has no id");

    let (status, deleted) =
        request(&app, "DELETE", &format!("/menu/{id}"), Some(&admin), None).await;
    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(deleted, json!(true));

    let (_, body) = request(&app, "GET", "/menu", None, None).await;
    assert_eq!(body, json!([]));
}

// ============================================================================
// Carts
// ============================================================================

#[tokio::test]
async fn carts_without_email_returns_empty_list() {
    let (app, state) = test_app().await;
    let token = token_for(&state, "guest@bistro.test");

    let (status, body) = request(&app, "GET", "/carts", Some(&token), None).await;
    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn carts_owner_mismatch_is_forbidden() {
    let (app, state) = test_app().await;
    let token = token_for(&state, "userB@bistro.test");

    let (status, body) = request(
        &app,
        "GET",
        "/carts?email=userA@bistro.test",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, http::StatusCode::FORBIDDEN);
    assert_eq!(body["error"], json!(true));
}

#[tokio::test]
async fn cart_add_list_remove_flow() {
    let (app, state) = test_app().await;
    let menu_id = seed_menu_item(&state, "Caesar", "salad", 6.2).await;
    let email = "hungry@bistro.test";

    let (status, created) = request(
        &app,
        "POST",
        "/carts",
        None,
        Some(json!({
            "email": email,
            "menu_item_id": menu_id,
            "name": "Caesar",
            "price": 6.2
        })),
    )
    .await;
    assert_eq!(status, http::StatusCode::OK);
    let cart_id = created["id"].as_str().expect("cart item has no id").to_string();

    let token = token_for(&state, email);
    let (status, body) = request(
        &app,
        "GET",
        &format!("/carts?email={email}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(body.as_array().map(|a| a.len()), Some(1));

    let (status, deleted) =
        request(&app, "DELETE", &format!("/carts/{cart_id}"), None, None).await;
    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(deleted, json!(true));

    let (_, body) = request(
        &app,
        "GET",
        &format!("/carts?email={email}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(body, json!([]));
}

// ============================================================================
// Payments
// ============================================================================

#[tokio::test]
async fn payment_intent_rejects_invalid_price() {
    let (app, state) = test_app().await;
    let token = token_for(&state, "guest@bistro.test");

    for price in [json!(-5.0), json!(0.0)] {
        let (status, body) = request(
            &app,
            "POST",
            "/create-payment-intent",
            Some(&token),
            Some(json!({"price": price})),
        )
        .await;
        assert_eq!(status, http::StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!(true));
    }
}

#[tokio::test]
async fn payment_intent_requires_token() {
    let (app, _state) = test_app().await;
    let (status, _) = request(
        &app,
        "POST",
        "/create-payment-intent",
        None,
        Some(json!({"price": 10.0})),
    )
    .await;
    assert_eq!(status, http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn payment_persists_record_and_clears_cart() {
    let (app, state) = test_app().await;
    let email = "diner@bistro.test";

    let pizza = seed_menu_item(&state, "Margherita", "pizza", 10.5).await;
    let salad = seed_menu_item(&state, "Caesar", "salad", 6.2).await;

    // 两个购物车条目
    let mut cart_ids = Vec::new();
    for (menu_id, name, price) in [(&pizza, "Margherita", 10.5), (&salad, "Caesar", 6.2)] {
        let (_, created) = request(
            &app,
            "POST",
            "/carts",
            None,
            Some(json!({
                "email": email,
                "menu_item_id": menu_id,
                "name": name,
                "price": price
            })),
        )
        .await;
        cart_ids.push(created["id"].as_str().expect("no cart id").to_string());
    }

    let token = token_for(&state, email);
    let (status, outcome) = request(
        &app,
        "POST",
        "/payments",
        Some(&token),
        Some(json!({
            "email": email,
            "price": 16.7,
            "transaction_id": "tx_test_001",
            "status": "succeeded",
            "cart_item_ids": cart_ids,
            "menu_item_ids": [pizza, salad]
        })),
    )
    .await;
    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(outcome["cleared_cart_items"], json!(2));
    assert_eq!(outcome["payment"]["price"], json!(16.7));
    assert_eq!(outcome["payment"]["transaction_id"], json!("tx_test_001"));

    // 支付引用的购物车条目全部消失
    let (_, body) = request(
        &app,
        "GET",
        &format!("/carts?email={email}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(body, json!([]));

    // 支付记录存在且金额一致
    let payments = PaymentRepository::new(state.get_db())
        .find_all()
        .await
        .expect("find_all failed");
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].price, 16.7);
}

// ============================================================================
// Statistics
// ============================================================================

#[tokio::test]
async fn admin_stats_counts_and_revenue() {
    let (app, state) = test_app().await;
    let admin = seed_admin(&state, "boss@bistro.test").await;

    let pizza = seed_menu_item(&state, "Margherita", "pizza", 10.5).await;
    seed_menu_item(&state, "Caesar", "salad", 6.2).await;

    let diner = token_for(&state, "diner@bistro.test");
    for (tx, price) in [("tx_1", 10.5), ("tx_2", 21.0)] {
        let (status, _) = request(
            &app,
            "POST",
            "/payments",
            Some(&diner),
            Some(json!({
                "email": "diner@bistro.test",
                "price": price,
                "transaction_id": tx,
                "cart_item_ids": [],
                "menu_item_ids": [pizza.as_str()]
            })),
        )
        .await;
        assert_eq!(status, http::StatusCode::OK);
    }

    let (status, stats) = request(&app, "GET", "/admin-stats", Some(&admin), None).await;
    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(stats["users"], json!(1));
    assert_eq!(stats["products"], json!(2));
    assert_eq!(stats["orders"], json!(2));
    assert_eq!(stats["revenue"], json!(31.5));
}

#[tokio::test]
async fn order_stats_groups_by_category() {
    let (app, state) = test_app().await;
    let admin = seed_admin(&state, "boss@bistro.test").await;

    let margherita = seed_menu_item(&state, "Margherita", "pizza", 10.5).await;
    let pepperoni = seed_menu_item(&state, "Pepperoni", "pizza", 4.5).await;
    let caesar = seed_menu_item(&state, "Caesar", "salad", 6.2).await;

    let diner = token_for(&state, "diner@bistro.test");
    for menu_ids in [
        json!([&margherita, &pepperoni]),
        json!([&margherita, &caesar]),
    ] {
        let (status, _) = request(
            &app,
            "POST",
            "/payments",
            Some(&diner),
            Some(json!({
                "email": "diner@bistro.test",
                "price": 0.0,
                "transaction_id": "tx",
                "cart_item_ids": [],
                "menu_item_ids": menu_ids
            })),
        )
        .await;
        assert_eq!(status, http::StatusCode::OK);
    }

    let (status, stats) = request(&app, "GET", "/order-stats", Some(&admin), None).await;
    assert_eq!(status, http::StatusCode::OK);
    assert_eq!(
        stats,
        json!([
            {"category": "pizza", "count": 3, "total": 25.5},
            {"category": "salad", "count": 1, "total": 6.2}
        ])
    );
}

// ============================================================================
// Feature flag
// ============================================================================

#[tokio::test]
async fn payments_disabled_removes_payment_and_stats_routes() {
    let mut config = test_config();
    config.enable_payments = false;
    let state = ServerState::initialize(&config).await;
    let app = build_router(state.clone());
    let admin = seed_admin(&state, "boss@bistro.test").await;

    let (status, _) = request(
        &app,
        "POST",
        "/payments",
        Some(&admin),
        Some(json!({
            "email": "boss@bistro.test",
            "price": 1.0,
            "transaction_id": "tx",
            "cart_item_ids": [],
            "menu_item_ids": []
        })),
    )
    .await;
    assert_eq!(status, http::StatusCode::NOT_FOUND);

    for uri in ["/admin-stats", "/order-stats"] {
        let (status, _) = request(&app, "GET", uri, Some(&admin), None).await;
        assert_eq!(status, http::StatusCode::NOT_FOUND, "GET {uri}");
    }

    // 其余接口不受影响
    let (status, _) = request(&app, "GET", "/users", Some(&admin), None).await;
    assert_eq!(status, http::StatusCode::OK);
}
