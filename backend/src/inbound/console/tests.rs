//! Console sessions against the seeded in-memory stores.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;
use crate::domain::UserId;
use crate::domain::ports::{
    MockCatalogueQuery, MockComplaintCommand, MockComplaintQuery, MockLoginService,
    MockUserProfileQuery, MockUserRegistration,
};
use crate::server::{MemoryStores, build_console_state};

struct FixtureClock;

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 21, 10, 0, 0)
            .single()
            .expect("valid timestamp")
    }
}

#[fixture]
async fn console() -> Console {
    let stores = MemoryStores::new();
    let registry = example_data::SeedRegistry::builtin().expect("builtin registry");
    stores
        .seeder()
        .seed_from_registry(&registry, example_data::DEFAULT_DATASET)
        .await
        .expect("demo seeds");
    Console::new(build_console_state(&stores, Arc::new(FixtureClock)))
}

async fn reply(console: &mut Console, line: &str) -> Reply {
    match console.handle_line(line).await {
        Outcome::Reply(reply) | Outcome::Quit(reply) => reply,
        Outcome::Silent => panic!("expected a reply for {line:?}"),
    }
}

async fn data(console: &mut Console, line: &str) -> Value {
    let reply = reply(console, line).await;
    assert!(reply.is_ok(), "{line:?} failed: {:?}", reply.error());
    reply.data().cloned().expect("success carries data")
}

async fn error_code(console: &mut Console, line: &str) -> ErrorCode {
    let reply = reply(console, line).await;
    reply.error().map(Error::code).expect("command should fail")
}

#[rstest]
#[tokio::test]
async fn customer_login_persists_session(#[future] console: Console) {
    let mut console = console.await;
    let session = data(&mut console, "login customer customer@test.com 123456").await;

    assert_eq!(
        session,
        json!({"userId": 1, "role": "customer", "displayName": "Terish Babu"})
    );
    assert_eq!(
        console.session().current(),
        Some((UserId::new(1), Role::Customer))
    );
}

#[rstest]
#[case("login customer customer@test.com wrong-password")]
#[case("login employee customer@test.com 123456")]
#[tokio::test]
async fn bad_logins_are_rejected(#[future] console: Console, #[case] line: &str) {
    let mut console = console.await;
    assert_eq!(
        error_code(&mut console, line).await,
        ErrorCode::InvalidCredentials
    );
    assert_eq!(console.session().current(), None);
}

#[rstest]
#[tokio::test]
async fn customer_files_and_lists_complaints(#[future] console: Console) {
    let mut console = console.await;
    data(&mut console, "login customer customer@test.com 123456").await;

    let filed = data(&mut console, "file 3 Left earcup crackles").await;
    assert_eq!(filed["id"], json!(3));
    assert_eq!(filed["productName"], json!("Wireless Headphones"));
    assert_eq!(filed["status"], json!("New"));
    assert_eq!(filed["reportedDate"], json!("2024-07-21"));
    assert_eq!(filed["assignedEmployeeId"], Value::Null);

    let listed = data(&mut console, "complaints").await;
    let ids: Vec<_> = listed
        .as_array()
        .expect("complaint list")
        .iter()
        .map(|complaint| complaint["id"].clone())
        .collect();
    assert_eq!(ids, vec![json!(3), json!(1), json!(2)]);

    let dashboard = data(&mut console, "dashboard").await;
    assert_eq!(dashboard["productCount"], json!(3));
    assert_eq!(dashboard["complaintCount"], json!(3));
}

#[rstest]
#[tokio::test]
async fn filing_against_unknown_product_is_invalid(#[future] console: Console) {
    let mut console = console.await;
    data(&mut console, "login customer customer@test.com 123456").await;
    assert_eq!(
        error_code(&mut console, "file 99 It broke").await,
        ErrorCode::InvalidInput
    );
}

#[rstest]
#[tokio::test]
async fn employee_claims_and_advances(#[future] console: Console) {
    let mut console = console.await;
    data(&mut console, "login employee employee@test.com 123456").await;

    let queues = data(&mut console, "queue").await;
    assert_eq!(queues["assignedCount"], json!(1));
    assert_eq!(queues["unassignedCount"], json!(1));

    let claimed = data(&mut console, "claim 1").await;
    assert_eq!(claimed["status"], json!("Assigned"));
    assert_eq!(claimed["assignedEmployeeId"], json!(2));

    let progressing = data(&mut console, r#"advance 1 "In Progress""#).await;
    assert_eq!(progressing["status"], json!("In Progress"));

    let closed = data(&mut console, "advance 1 closed").await;
    assert_eq!(closed["status"], json!("Closed"));

    assert_eq!(
        error_code(&mut console, "advance 1 in_progress").await,
        ErrorCode::InvalidTransition
    );
    assert_eq!(
        error_code(&mut console, "claim 1").await,
        ErrorCode::AlreadyClaimed
    );
}

#[rstest]
#[case("products")]
#[case("complaints")]
#[case("queue")]
#[case("claim 1")]
#[case("whoami")]
#[tokio::test]
async fn commands_require_login(#[future] console: Console, #[case] line: &str) {
    let mut console = console.await;
    assert_eq!(
        error_code(&mut console, line).await,
        ErrorCode::InvalidCredentials
    );
}

#[rstest]
#[case("login customer customer@test.com 123456", "claim 1")]
#[case("login customer customer@test.com 123456", "queue")]
#[case("login employee employee@test.com 123456", "file 1 Broken hinge")]
#[case("login employee employee@test.com 123456", "dashboard")]
#[tokio::test]
async fn commands_require_the_matching_role(
    #[future] console: Console,
    #[case] login: &str,
    #[case] line: &str,
) {
    let mut console = console.await;
    data(&mut console, login).await;
    assert_eq!(error_code(&mut console, line).await, ErrorCode::Forbidden);
}

#[rstest]
#[tokio::test]
async fn registration_then_login(#[future] console: Console) {
    let mut console = console.await;
    let registered = data(
        &mut console,
        r#"register employee "Ann Lee" ann@test.com secret1 secret1"#,
    )
    .await;
    assert_eq!(registered["userId"], json!(3));
    assert_eq!(console.session().current(), None);

    assert_eq!(
        error_code(
            &mut console,
            r#"register employee "Ann Lee" ann@test.com secret1 secret1"#
        )
        .await,
        ErrorCode::DuplicateIdentity
    );

    let session = data(&mut console, "login employee ann@test.com secret1").await;
    assert_eq!(session["displayName"], json!("Ann Lee"));
}

#[rstest]
#[tokio::test]
async fn logout_clears_the_session(#[future] console: Console) {
    let mut console = console.await;
    data(&mut console, "login customer customer@test.com 123456").await;

    assert_eq!(
        data(&mut console, "logout").await,
        json!({"message": "logged out"})
    );
    assert_eq!(
        data(&mut console, "logout").await,
        json!({"message": "not logged in"})
    );
}

#[rstest]
#[tokio::test]
async fn comments_are_silent_and_quit_stops(#[future] console: Console) {
    let mut console = console.await;
    assert_eq!(console.handle_line("# walkthrough").await, Outcome::Silent);
    assert!(matches!(
        console.handle_line("quit").await,
        Outcome::Quit(reply) if reply.is_ok()
    ));
}

#[rstest]
#[tokio::test]
async fn run_writes_one_line_per_reply(#[future] console: Console) {
    let mut console = console.await;
    let input = b"# demo\nlogin customer customer@test.com 123456\n\nproducts\nquit\nwhoami\n";
    let mut output = Vec::new();

    console
        .run(&input[..], &mut output)
        .await
        .expect("console runs");

    let text = String::from_utf8(output).expect("utf-8 output");
    let lines: Vec<Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).expect("JSON line"))
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1]["data"][0]["name"], json!("Laptop Pro X1"));
    assert_eq!(lines[2], json!({"ok": true, "data": {"message": "goodbye"}}));
}

#[rstest]
#[tokio::test]
async fn internal_failures_become_error_replies() {
    let mut login = MockLoginService::new();
    login
        .expect_authenticate()
        .returning(|_| Ok(UserId::new(7)));
    let mut profile = MockUserProfileQuery::new();
    profile
        .expect_fetch_profile()
        .returning(|_| Err(Error::internal("identity store lock poisoned")));

    let mut console = Console::new(ConsoleState {
        login: Arc::new(login),
        registration: Arc::new(MockUserRegistration::new()),
        profile: Arc::new(profile),
        catalogue: Arc::new(MockCatalogueQuery::new()),
        complaints: Arc::new(MockComplaintCommand::new()),
        complaints_query: Arc::new(MockComplaintQuery::new()),
    });

    assert_eq!(
        error_code(&mut console, "login employee ops@test.com secret1").await,
        ErrorCode::InternalError
    );
    assert_eq!(console.session().current(), None);
}
