//! End-to-end tests for the notification fan-out path

use herald_core::entities::User;
use herald_core::traits::{NotificationRepository, SendErrorKind, SendOutcome, UserRepository};
use integration_tests::fixtures::{
    seed_chat, seed_comment, seed_mention_notice, seed_user,
};
use integration_tests::helpers::TestApp;
use serde_json::json;

#[tokio::test]
async fn message_fans_out_to_participants_except_sender() {
    let app = TestApp::spawn().await.unwrap();
    seed_chat(&app.store, "c1", &["u1", "u2", "u3"], "Alice").await;
    seed_user(&app.store, "u2", "Bob", &["tok-2"]).await;
    seed_user(&app.store, "u3", "Carol", &["tok-3"]).await;

    let response = app
        .post_json(
            "/api/v1/triggers/chat-messages",
            None,
            &json!({ "chatId": "c1", "senderId": "u1", "text": "hi" }),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let ack: serde_json::Value = response.json().await.unwrap();
    assert_eq!(ack["success"], true);
    assert_eq!(ack["attempts"], 2);

    let sent = app.gateway.sent_messages();
    assert_eq!(sent.len(), 2);
    assert!(sent.iter().all(|m| m.body == "hi"));
    assert!(sent.iter().all(|m| m.collapse_tag == "c1"));
    assert!(sent.iter().all(|m| m.channel_id == "chat_channel"));
    assert!(sent.iter().all(|m| m.data["type"] == "dm"));
    assert!(sent.iter().all(|m| m.data["senderName"] == "Alice"));

    let mut recipients: Vec<String> = sent.iter().flat_map(|m| m.tokens.clone()).collect();
    recipients.sort();
    assert_eq!(recipients, vec!["tok-2", "tok-3"]);
}

#[tokio::test]
async fn missing_chat_is_acknowledged_without_deliveries() {
    let app = TestApp::spawn().await.unwrap();

    let response = app
        .post_json(
            "/api/v1/triggers/chat-messages",
            None,
            &json!({ "chatId": "ghost", "senderId": "u1", "text": "hi" }),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let ack: serde_json::Value = response.json().await.unwrap();
    assert_eq!(ack["success"], true);
    assert_eq!(ack["attempts"], 0);
    assert!(app.gateway.sent_messages().is_empty());
}

#[tokio::test]
async fn legacy_and_multi_tokens_are_merged_without_duplicates() {
    let app = TestApp::spawn().await.unwrap();
    let mut user = User::new("u2", "Bob");
    user.device_token = Some("tok-x".to_string());
    user.device_tokens = vec!["tok-x".to_string(), "tok-y".to_string()];
    UserRepository::upsert(app.store.as_ref(), &user).await.unwrap();

    let response = app
        .post_json(
            "/api/v1/triggers/follows",
            None,
            &json!({ "followerId": "u1", "followingId": "u2" }),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let sent = app.gateway.sent_messages();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].tokens, vec!["tok-x", "tok-y"]);
    assert_eq!(sent[0].data["type"], "follow");
    assert_eq!(sent[0].data["followerId"], "u1");
}

#[tokio::test]
async fn self_follow_produces_no_notifications() {
    let app = TestApp::spawn().await.unwrap();
    seed_user(&app.store, "u1", "Alice", &["tok-1"]).await;

    let response = app
        .post_json(
            "/api/v1/triggers/follows",
            None,
            &json!({ "followerId": "u1", "followingId": "u1" }),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let ack: serde_json::Value = response.json().await.unwrap();
    assert_eq!(ack["attempts"], 0);
    assert!(app.gateway.sent_messages().is_empty());

    // No store writes either: the user record is untouched.
    let user = UserRepository::find_by_id(app.store.as_ref(), "u1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.device_tokens, vec!["tok-1"]);
}

#[tokio::test]
async fn self_like_produces_no_notifications() {
    let app = TestApp::spawn().await.unwrap();
    seed_comment(&app.store, "cm1", "u1", "t9").await;
    seed_user(&app.store, "u1", "Alice", &["tok-1"]).await;

    let response = app
        .post_json(
            "/api/v1/triggers/comment-likes",
            None,
            &json!({ "commentId": "cm1", "userId": "u1" }),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let ack: serde_json::Value = response.json().await.unwrap();
    assert_eq!(ack["attempts"], 0);
    assert!(app.gateway.sent_messages().is_empty());
}

#[tokio::test]
async fn dead_tokens_are_removed_only_for_their_owner() {
    let app = TestApp::spawn().await.unwrap();
    seed_comment(&app.store, "cm1", "u2", "t9").await;
    seed_user(&app.store, "u2", "Bob", &["tok-live", "tok-dead"]).await;
    seed_user(&app.store, "u3", "Carol", &["tok-other"]).await;

    app.gateway.push_script(Ok(vec![
        SendOutcome::ok("tok-live"),
        SendOutcome::failed("tok-dead", SendErrorKind::Unregistered),
    ]));

    let response = app
        .post_json(
            "/api/v1/triggers/comment-likes",
            None,
            &json!({ "commentId": "cm1", "userId": "u9" }),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let owner = UserRepository::find_by_id(app.store.as_ref(), "u2")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(owner.device_tokens, vec!["tok-live"]);

    let bystander = UserRepository::find_by_id(app.store.as_ref(), "u3")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(bystander.device_tokens, vec!["tok-other"]);
}

#[tokio::test]
async fn mention_delivers_and_marks_notice_sent() {
    let app = TestApp::spawn().await.unwrap();
    seed_user(&app.store, "u2", "Bob", &["tok-2"]).await;
    seed_mention_notice(&app.store, "n1", "u2").await;

    let response = app
        .post_json(
            "/api/v1/triggers/notifications",
            None,
            &json!({
                "notificationId": "n1",
                "type": "mention",
                "recipientUid": "u2",
                "senderUid": "u1",
                "senderName": "Alice",
                "forumId": "f1",
                "forumName": "General",
                "message": "hey @Bob"
            }),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let ack: serde_json::Value = response.json().await.unwrap();
    assert_eq!(ack["attempts"], 1);

    let sent = app.gateway.sent_messages();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].title, "Alice mentioned you in General");
    assert_eq!(sent[0].body, "hey @Bob");
    assert_eq!(sent[0].collapse_tag, "f1");
    assert_eq!(sent[0].data["forumId"], "f1");

    let notice = NotificationRepository::find_by_id(app.store.as_ref(), "n1")
        .await
        .unwrap()
        .unwrap();
    assert!(notice.sent);
    assert!(notice.sent_at.is_some());
}

#[tokio::test]
async fn non_mention_notifications_are_ignored() {
    let app = TestApp::spawn().await.unwrap();
    seed_user(&app.store, "u2", "Bob", &["tok-2"]).await;

    let response = app
        .post_json(
            "/api/v1/triggers/notifications",
            None,
            &json!({ "notificationId": "n1", "type": "digest", "recipientUid": "u2" }),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let ack: serde_json::Value = response.json().await.unwrap();
    assert_eq!(ack["attempts"], 0);
    assert!(app.gateway.sent_messages().is_empty());
}

#[tokio::test]
async fn gateway_failure_never_fails_the_trigger() {
    let app = TestApp::spawn().await.unwrap();
    seed_comment(&app.store, "cm1", "u2", "t9").await;
    seed_user(&app.store, "u2", "Bob", &["tok-2"]).await;

    app.gateway
        .push_script(Err(herald_core::DomainError::GatewayError(
            "connection refused".to_string(),
        )));

    let response = app
        .post_json(
            "/api/v1/triggers/comment-likes",
            None,
            &json!({ "commentId": "cm1", "userId": "u9" }),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let ack: serde_json::Value = response.json().await.unwrap();
    assert_eq!(ack["success"], true);
}
