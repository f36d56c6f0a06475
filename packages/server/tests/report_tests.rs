//! Integration tests for report submission and the moderation notifier.

mod common;

use common::*;
use test_context::test_context;

use server_core::common::UserId;
use server_core::domains::reports::actions::{list_reports, submit_report, ReportError};

#[test_context(TestHarness)]
#[tokio::test]
async fn test_submit_report_persists_and_notifies(ctx: &mut TestHarness) {
    let alice = create_test_profile(&ctx.db_pool, "alice").await.unwrap();
    let bob = create_test_profile(&ctx.db_pool, "bob").await.unwrap();

    let report = submit_report(alice, bob, "inappropriate messages", &ctx.deps)
        .await
        .unwrap();

    assert_eq!(report.reporter_id, alice);
    assert_eq!(report.reported_user_id, bob);
    assert_eq!(report.reported_username, "bob");
    assert_eq!(report.reason, "inappropriate messages");

    let captured = ctx.notifier.captured();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].report_id, report.id);
    assert_eq!(captured[0].reported_user_id, bob);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_notifier_failure_does_not_fail_submission(ctx: &mut TestHarness) {
    let alice = create_test_profile(&ctx.db_pool, "alice").await.unwrap();
    let bob = create_test_profile(&ctx.db_pool, "bob").await.unwrap();

    ctx.notifier.fail_next();

    // The report row is the source of truth; delivery failure only logs
    let report = submit_report(alice, bob, "spam", &ctx.deps).await.unwrap();

    assert!(ctx.notifier.captured().is_empty());

    let reports = list_reports(alice, true, 10, &ctx.deps).await.unwrap();
    assert!(reports.iter().any(|r| r.id == report.id));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_report_validation(ctx: &mut TestHarness) {
    let alice = create_test_profile(&ctx.db_pool, "alice").await.unwrap();
    let bob = create_test_profile(&ctx.db_pool, "bob").await.unwrap();

    let err = submit_report(alice, alice, "reason", &ctx.deps)
        .await
        .unwrap_err();
    assert!(matches!(err, ReportError::SelfReport));

    let err = submit_report(alice, bob, "   ", &ctx.deps).await.unwrap_err();
    assert!(matches!(err, ReportError::EmptyReason));

    let err = submit_report(alice, UserId::new(), "reason", &ctx.deps)
        .await
        .unwrap_err();
    assert!(matches!(err, ReportError::TargetNotFound));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_report_listing_requires_admin(ctx: &mut TestHarness) {
    let alice = create_test_profile(&ctx.db_pool, "alice").await.unwrap();
    let bob = create_test_profile(&ctx.db_pool, "bob").await.unwrap();

    submit_report(alice, bob, "abuse", &ctx.deps).await.unwrap();

    assert!(list_reports(alice, false, 10, &ctx.deps).await.is_err());

    let client = ctx.graphql_as(alice.into_uuid(), false);
    let result = client
        .execute("query { recentReports(limit: 10) { reason } }")
        .await;
    assert!(!result.is_ok());

    let admin_client = ctx.graphql_as(alice.into_uuid(), true);
    let result = admin_client
        .execute("query { recentReports(limit: 10) { reason reportedUsername } }")
        .await;
    assert!(result.is_ok(), "errors: {:?}", result.errors);
    assert_eq!(
        result.get("recentReports"),
        serde_json::json!([{ "reason": "abuse", "reportedUsername": "bob" }])
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_submit_report_via_graphql(ctx: &mut TestHarness) {
    let alice = create_test_profile(&ctx.db_pool, "alice").await.unwrap();
    let bob = create_test_profile(&ctx.db_pool, "bob").await.unwrap();

    let client = ctx.graphql_as(alice.into_uuid(), false);
    let result = client
        .execute(&format!(
            r#"mutation {{ submitReport(userId: "{}", reason: "fake profile") {{
                reportedUsername reason
            }} }}"#,
            bob
        ))
        .await;
    assert!(result.is_ok(), "errors: {:?}", result.errors);
    assert_eq!(
        result.get("submitReport.reportedUsername"),
        serde_json::json!("bob")
    );
}
