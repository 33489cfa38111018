//! End-to-end tests for the sanction engine RPC surface

use chrono::{Duration, Utc};
use herald_core::entities::{UserStatus, User};
use herald_core::traits::{
    AuditLogRepository, MembershipRepository, RoomMessageRepository, RoomRepository,
    SanctionRepository, UserRepository,
};
use herald_core::value_objects::ActorRole;
use integration_tests::fixtures::{seed_report, seed_room_with_contents, seed_user_with_role};
use integration_tests::helpers::TestApp;
use serde_json::json;

#[tokio::test]
async fn health_check_responds_ok() {
    let app = TestApp::spawn().await.unwrap();
    let response = app.get("/health").await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn moderator_mute_with_zero_duration_uses_default() {
    let app = TestApp::spawn().await.unwrap();
    seed_user_with_role(&app.store, "mod1", "Mod One", ActorRole::Moderator).await;
    seed_user_with_role(&app.store, "u9", "Target", ActorRole::Member).await;

    let token = app.token_for("mod1", "Mod One", false, true);
    let before = Utc::now();
    let response = app
        .post_json(
            "/api/v1/admin/users/mute",
            Some(&token),
            &json!({ "userId": "u9", "durationMinutes": 0 }),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);

    let user = UserRepository::find_by_id(app.store.as_ref(), "u9")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.status, UserStatus::Muted);
    assert_eq!(user.sanction_count, 1);

    let muted_until = user.muted_until.expect("mutedUntil set");
    let expected = before + Duration::minutes(30);
    assert!((muted_until - expected).num_seconds().abs() < 10);

    let sanctions = SanctionRepository::find_by_user(app.store.as_ref(), "u9")
        .await
        .unwrap();
    assert_eq!(sanctions.len(), 1);
    assert_eq!(sanctions[0].kind.as_str(), "mute");

    let audit = AuditLogRepository::recent(app.store.as_ref(), 10)
        .await
        .unwrap();
    assert_eq!(audit.len(), 1);
    assert_eq!(audit[0].action, "mute_user");
    assert_eq!(audit[0].object_id, "u9");
}

#[tokio::test]
async fn ban_by_plain_member_is_rejected_without_writes() {
    let app = TestApp::spawn().await.unwrap();
    seed_user_with_role(&app.store, "pleb", "Pleb", ActorRole::Member).await;
    seed_user_with_role(&app.store, "u9", "Target", ActorRole::Member).await;

    let token = app.token_for("pleb", "Pleb", false, false);
    let response = app
        .post_json(
            "/api/v1/admin/users/ban",
            Some(&token),
            &json!({ "userId": "u9" }),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 403);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "PERMISSION_DENIED");

    let user = UserRepository::find_by_id(app.store.as_ref(), "u9")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.status, UserStatus::Active);
    assert_eq!(user.sanction_count, 0);
    assert!(
        SanctionRepository::find_by_user(app.store.as_ref(), "u9")
            .await
            .unwrap()
            .is_empty()
    );
    assert!(
        AuditLogRepository::recent(app.store.as_ref(), 10)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn missing_token_is_unauthenticated() {
    let app = TestApp::spawn().await.unwrap();
    let response = app
        .post_json("/api/v1/admin/users/mute", None, &json!({ "userId": "u9" }))
        .await
        .unwrap();
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn empty_target_id_is_invalid_argument() {
    let app = TestApp::spawn().await.unwrap();
    seed_user_with_role(&app.store, "mod1", "Mod One", ActorRole::Moderator).await;

    let token = app.token_for("mod1", "Mod One", false, true);
    let response = app
        .post_json(
            "/api/v1/admin/users/mute",
            Some(&token),
            &json!({ "userId": "" }),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn stored_role_beats_stale_admin_claims() {
    let app = TestApp::spawn().await.unwrap();
    // Demoted: the stored record says member, the token still claims admin.
    seed_user_with_role(&app.store, "demoted", "Demoted", ActorRole::Member).await;
    seed_user_with_role(&app.store, "u9", "Target", ActorRole::Member).await;

    let token = app.token_for("demoted", "Demoted", true, true);
    let response = app
        .post_json(
            "/api/v1/admin/users/ban",
            Some(&token),
            &json!({ "userId": "u9" }),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 403);
}

#[tokio::test]
async fn claims_grant_access_when_record_is_absent() {
    let app = TestApp::spawn().await.unwrap();
    seed_user_with_role(&app.store, "u9", "Target", ActorRole::Member).await;

    // No stored record for this caller; the admin claim carries it.
    let token = app.token_for("ghost-admin", "Ghost", true, false);
    let response = app
        .post_json(
            "/api/v1/admin/users/ban",
            Some(&token),
            &json!({ "userId": "u9", "durationMinutes": 60 }),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let user = UserRepository::find_by_id(app.store.as_ref(), "u9")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.status, UserStatus::Banned);
    assert!(user.claims.banned);
    assert!(user.banned_until.is_some());
}

#[tokio::test]
async fn indefinite_ban_has_no_expiry() {
    let app = TestApp::spawn().await.unwrap();
    seed_user_with_role(&app.store, "admin1", "Admin", ActorRole::Admin).await;
    seed_user_with_role(&app.store, "u9", "Target", ActorRole::Member).await;

    let token = app.token_for("admin1", "Admin", true, false);
    let response = app
        .post_json(
            "/api/v1/admin/users/ban",
            Some(&token),
            &json!({ "userId": "u9", "reason": "abuse" }),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let user = UserRepository::find_by_id(app.store.as_ref(), "u9")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.status, UserStatus::Banned);
    assert!(user.banned_until.is_none());
}

#[tokio::test]
async fn invalid_ban_duration_falls_back_to_default() {
    let app = TestApp::spawn().await.unwrap();
    seed_user_with_role(&app.store, "admin1", "Admin", ActorRole::Admin).await;
    seed_user_with_role(&app.store, "u9", "Target", ActorRole::Member).await;

    let token = app.token_for("admin1", "Admin", true, false);
    let before = Utc::now();
    app.post_json(
        "/api/v1/admin/users/ban",
        Some(&token),
        &json!({ "userId": "u9", "durationMinutes": -1 }),
    )
    .await
    .unwrap();

    let user = UserRepository::find_by_id(app.store.as_ref(), "u9")
        .await
        .unwrap()
        .unwrap();
    let banned_until = user.banned_until.expect("bannedUntil set");
    let expected = before + Duration::minutes(1440);
    assert!((banned_until - expected).num_seconds().abs() < 10);
}

#[tokio::test]
async fn deleted_room_leaves_no_messages_or_members() {
    let app = TestApp::spawn().await.unwrap();
    seed_user_with_role(&app.store, "admin1", "Admin", ActorRole::Admin).await;
    // More documents than one delete page (test batch size is 3)
    seed_room_with_contents(&app.store, "r1", 8, 5).await;

    let token = app.token_for("admin1", "Admin", true, false);
    let response = app
        .post_json(
            "/api/v1/admin/rooms/delete",
            Some(&token),
            &json!({ "roomId": "r1" }),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    assert!(
        RoomRepository::find_by_id(app.store.as_ref(), "r1")
            .await
            .unwrap()
            .is_none()
    );
    assert_eq!(
        RoomMessageRepository::delete_page(app.store.as_ref(), "r1", 100)
            .await
            .unwrap(),
        0
    );
    assert_eq!(
        MembershipRepository::delete_page(app.store.as_ref(), "r1", 100)
            .await
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn report_lifecycle_assign_then_resolve() {
    let app = TestApp::spawn().await.unwrap();
    seed_user_with_role(&app.store, "mod1", "Mod One", ActorRole::Moderator).await;
    seed_report(&app.store, "rep1", "u1").await;

    let token = app.token_for("mod1", "Mod One", false, true);
    let response = app
        .post_json(
            "/api/v1/admin/reports/assign",
            Some(&token),
            &json!({ "reportId": "rep1" }),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    // Unrecognized resolution status falls back to resolved.
    let response = app
        .post_json(
            "/api/v1/admin/reports/resolve",
            Some(&token),
            &json!({ "reportId": "rep1", "status": "escalated", "notes": "done" }),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let audit = AuditLogRepository::recent(app.store.as_ref(), 10)
        .await
        .unwrap();
    assert_eq!(audit.len(), 2);
    assert_eq!(audit[0].action, "resolve_report");
    assert_eq!(audit[0].details["status"], "resolved");
}

#[tokio::test]
async fn resolving_missing_report_is_not_found() {
    let app = TestApp::spawn().await.unwrap();
    seed_user_with_role(&app.store, "mod1", "Mod One", ActorRole::Moderator).await;

    let token = app.token_for("mod1", "Mod One", false, true);
    let response = app
        .post_json(
            "/api/v1/admin/reports/resolve",
            Some(&token),
            &json!({ "reportId": "ghost" }),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn backfill_fills_missing_last_seen_once() {
    let app = TestApp::spawn().await.unwrap();
    UserRepository::upsert(app.store.as_ref(), &User::new("u1", "a"))
        .await
        .unwrap();
    UserRepository::upsert(app.store.as_ref(), &User::new("u2", "b"))
        .await
        .unwrap();
    let mut seen = User::new("u3", "c");
    seen.last_seen = Some(Utc::now());
    UserRepository::upsert(app.store.as_ref(), &seen).await.unwrap();

    let response = app
        .post_json("/api/v1/backfill/last-seen", None, &json!({}))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["updated"], 2);

    // Idempotent: a second run has nothing to fill.
    let response = app
        .post_json("/api/v1/backfill/last-seen", None, &json!({}))
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["updated"], 0);
}

#[tokio::test]
async fn demotion_takes_effect_immediately() {
    let app = TestApp::spawn().await.unwrap();
    seed_user_with_role(&app.store, "admin1", "Admin", ActorRole::Admin).await;
    seed_user_with_role(&app.store, "mod2", "Mod Two", ActorRole::Moderator).await;
    seed_user_with_role(&app.store, "u9", "Target", ActorRole::Member).await;

    let admin_token = app.token_for("admin1", "Admin", true, false);
    let mod_token = app.token_for("mod2", "Mod Two", false, true);

    // mod2 can mute before the demotion.
    let response = app
        .post_json(
            "/api/v1/admin/users/mute",
            Some(&mod_token),
            &json!({ "userId": "u9" }),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    // Demote mod2; the stored role changes immediately.
    let response = app
        .post_json(
            "/api/v1/admin/users/role",
            Some(&admin_token),
            &json!({ "userId": "mod2", "role": "member" }),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    // The same (still valid) token no longer carries authority.
    let response = app
        .post_json(
            "/api/v1/admin/users/mute",
            Some(&mod_token),
            &json!({ "userId": "u9" }),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 403);
}
