mod common;

use academy_tracker::store::{Collection, memory::StoreOp};
use common::{get, get_json, post, seeded_store, spawn};

#[tokio::test]
async fn pages_wait_for_the_first_load() {
    let addr = spawn(seeded_store().await, false).await;

    let (status, body) = get(addr, "/").await;
    assert_eq!(status, 200);
    assert!(body.contains("Loading..."));

    let (status, body) = get(addr, "/health").await;
    assert_eq!(status, 200);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn dashboard_shows_goal_and_upcoming_cohorts() {
    let addr = spawn(seeded_store().await, true).await;

    let (status, body) = get(addr, "/dashboard").await;
    assert_eq!(status, 200);
    assert!(body.contains("Leadership EMEA"));
    assert!(body.contains("Leadership NAMER"));
    assert!(!body.contains("Leadership Spring"));

    let overview = get_json(addr, "/api/overview").await;
    assert_eq!(overview["goal"]["confirmed"], 1);
    assert_eq!(overview["goal"]["invited"], 1);
    assert_eq!(overview["cohorts"].as_array().unwrap().len(), 2);
    assert_eq!(overview["cohorts"][0]["confirmed"], 1);
}

#[tokio::test]
async fn incomplete_submission_is_rejected_before_the_store() {
    let store = seeded_store().await;
    let addr = spawn(store.clone(), true).await;

    let (status, _) = post(addr, "/invitations/form/open", "").await;
    assert_eq!(status, 303);
    let (status, _) = post(addr, "/invitations", "company=Umbrella&name=&sales_rep=Jane").await;
    assert_eq!(status, 303);

    assert_eq!(store.count_calls(StoreOp::Insert).await, 0);
    let (_, body) = get(addr, "/invitations").await;
    assert!(body.contains("Please fill in Company, Name, and Sales Rep"));
    assert!(body.contains(r#"value="Umbrella""#));
}

#[tokio::test]
async fn valid_submission_inserts_and_reloads() {
    let store = seeded_store().await;
    let addr = spawn(store.clone(), true).await;

    post(addr, "/invitations/form/open", "").await;
    post(
        addr,
        "/invitations/form",
        "company=Umbrella&name=Uma&sales_rep=Omar&cohort_date=2099-04-01",
    )
    .await;
    let (_, form) = get(addr, "/invitations").await;
    assert!(form.contains(r#"<option value="NAMER" selected>NAMER</option>"#));

    let (status, _) = post(
        addr,
        "/invitations",
        "company=Umbrella&name=Uma&sales_rep=Omar&course=LEAD&region=NAMER&cohort_date=2099-04-01&status=Invited",
    )
    .await;
    assert_eq!(status, 303);
    assert_eq!(store.count_calls(StoreOp::Insert).await, 1);

    let list = get_json(addr, "/api/invitations").await;
    assert_eq!(list["total"], 4);
    let added = list["invitations"]
        .as_array()
        .unwrap()
        .iter()
        .find(|inv| inv["company"] == "Umbrella")
        .cloned()
        .unwrap();
    assert_eq!(added["course"], "LEAD");
    assert_eq!(added["region"], "NAMER");
    assert_eq!(added["status"], "Invited");

    let (_, body) = get(addr, "/invitations").await;
    assert!(!body.contains("modal-overlay"));
}

#[tokio::test]
async fn filters_combine_and_clear() {
    let addr = spawn(seeded_store().await, true).await;

    let (status, _) = post(
        addr,
        "/invitations/filters",
        "sales_rep=Jane&status=Confirmed&course=&cohort_date=",
    )
    .await;
    assert_eq!(status, 303);
    let list = get_json(addr, "/api/invitations").await;
    assert_eq!(list["shown"], 1);
    assert_eq!(list["total"], 3);
    assert_eq!(list["invitations"][0]["company"], "Initech");

    let (_, body) = get(addr, "/invitations").await;
    assert!(body.contains("Showing 1 of 3 invitations"));

    post(addr, "/invitations/filters/clear", "").await;
    let list = get_json(addr, "/api/invitations").await;
    assert_eq!(list["shown"], 3);

    let (status, _) = post(addr, "/invitations/filters", "status=Maybe").await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn failed_collection_loads_empty_and_others_survive() {
    let store = seeded_store().await;
    store.fail(Collection::Cohorts, StoreOp::FetchAll).await;
    let addr = spawn(store.clone(), true).await;

    let overview = get_json(addr, "/api/overview").await;
    assert!(overview["cohorts"].as_array().unwrap().is_empty());
    let list = get_json(addr, "/api/invitations").await;
    assert_eq!(list["total"], 3);

    store.recover(Collection::Cohorts, StoreOp::FetchAll).await;
    let (status, _) = post(addr, "/refresh", "").await;
    assert_eq!(status, 303);
    let overview = get_json(addr, "/api/overview").await;
    assert_eq!(overview["cohorts"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn refresh_without_changes_is_idempotent() {
    let addr = spawn(seeded_store().await, true).await;

    let overview = get_json(addr, "/api/overview").await;
    let boards = get_json(addr, "/api/leaderboards").await;
    post(addr, "/refresh", "").await;
    assert_eq!(get_json(addr, "/api/overview").await, overview);
    assert_eq!(get_json(addr, "/api/leaderboards").await, boards);
}

#[tokio::test]
async fn delete_goes_through_confirmation() {
    let store = seeded_store().await;
    let addr = spawn(store.clone(), true).await;

    post(addr, "/invitations/inv-1/delete", "").await;
    assert_eq!(store.count_calls(StoreOp::Delete).await, 0);

    let (status, body) = get(addr, "/invitations/inv-1/delete").await;
    assert_eq!(status, 200);
    assert!(body.contains("Are you sure you want to delete this invitation?"));

    post(addr, "/invitations/delete/cancel", "").await;
    post(addr, "/invitations/inv-1/delete", "").await;
    assert_eq!(store.count_calls(StoreOp::Delete).await, 0);

    get(addr, "/invitations/inv-1/delete").await;
    post(addr, "/invitations/inv-1/delete", "").await;
    assert_eq!(store.count_calls(StoreOp::Delete).await, 1);
    let list = get_json(addr, "/api/invitations").await;
    assert_eq!(list["total"], 2);

    let (status, _) = get(addr, "/invitations/missing/delete").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn status_change_updates_the_row() {
    let store = seeded_store().await;
    let addr = spawn(store.clone(), true).await;

    let (status, _) = post(addr, "/invitations/inv-1/status", "status=Confirmed").await;
    assert_eq!(status, 303);
    let overview = get_json(addr, "/api/overview").await;
    assert_eq!(overview["goal"]["confirmed"], 2);

    let (status, _) = post(addr, "/invitations/inv-1/status", "status=Maybe").await;
    assert_eq!(status, 400);
    assert_eq!(store.count_calls(StoreOp::UpdateField).await, 1);
}

#[tokio::test]
async fn leaderboard_sort_is_per_board() {
    let addr = spawn(seeded_store().await, true).await;

    let boards = get_json(addr, "/api/leaderboards").await;
    assert_eq!(boards[1]["rows"][0]["name"], "Jane");

    let (status, _) = post(addr, "/leaderboards/all-time/sort", "key=total&order=asc").await;
    assert_eq!(status, 303);
    let boards = get_json(addr, "/api/leaderboards").await;
    assert_eq!(boards[1]["rows"][0]["name"], "Omar");
    assert_eq!(boards[1]["sort"]["order"], "asc");
    assert_eq!(boards[0]["sort"]["order"], "desc");

    let (status, _) = post(addr, "/leaderboards/apac/sort", "key=total&order=asc").await;
    assert_eq!(status, 404);
}
