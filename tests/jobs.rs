//! Orchestrators end to end against a scripted transport.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

mod common;

use std::io::Cursor;

use common::*;
use pco_tools::confirm::Prompt;
use pco_tools::error::Error;
use pco_tools::jobs::delete_people::DeletePeopleOptions;
use pco_tools::jobs::field_report::FieldReport;
use pco_tools::jobs::parse_pickups::PickupOptions;
use pco_tools::jobs::{clear_birthdays, delete_field_data, delete_people, episode, field_report, parse_pickups};
use pco_tools::planning_center::{Method, PlanningCenterClient};
use serde_json::{json, Value};

const PER_PAGE: (&str, &str) = ("per_page", "100");

fn answer(text: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
    Prompt::new(Cursor::new(text.as_bytes().to_vec()), Vec::new())
}

fn definitions(transport: FakeTransport, named: &[(&str, &str)]) -> FakeTransport {
    named.iter().fold(transport, |t, &(name, id)| {
        t.get(
            &format!("{PEOPLE}/field_definitions"),
            &[("where[name]", name)],
            page(vec![definition(id)], None),
        )
    })
}

fn people(transport: FakeTransport, ids: &[&str]) -> FakeTransport {
    transport.get(
        &format!("{PEOPLE}/people"),
        &[PER_PAGE],
        page(ids.iter().map(|id| person(id)).collect(), None),
    )
}

fn known_person(transport: FakeTransport, name: &str, id: &str, mail: &str, number: &str) -> FakeTransport {
    transport
        .get(&format!("{PEOPLE}/people"), &[("where[search_name]", name)], page(vec![person(id)], None))
        .get(&format!("{PEOPLE}/people/{id}/emails"), &[], page(vec![email(mail)], None))
        .get(&format!("{PEOPLE}/people/{id}/phone_numbers"), &[], page(vec![phone(number)], None))
}

fn posted_value(request: &pco_tools::planning_center::ApiRequest) -> (String, Value) {
    let body = request.body.clone().unwrap();
    (request.url.clone(), body["data"]["attributes"].clone())
}

#[tokio::test]
async fn pickups_are_enriched_and_stored_per_person() {
    let transport = definitions(
        FakeTransport::new(),
        &[("Authorized Pickups", "10"), ("Authorized Pickups Parsed", "11")],
    )
    .get(
        &format!("{PEOPLE}/field_data"),
        &[("where[field_definition_id]", "10"), PER_PAGE],
        page(
            vec![
                field_datum("900", "1", "Jane Doe,Bob Smith,"),
                field_datum("901", "2", "Solo Person"),
                field_datum("902", "3", "Jane Doe"),
            ],
            None,
        ),
    )
    .get(&format!("{PEOPLE}/people"), &[("where[search_name]", "Solo Person")], page(vec![], None))
    .reply(Method::Post, &format!("{PEOPLE}/people/1/field_data"), &[], 200, json!({"data": {}}))
    .reply(Method::Post, &format!("{PEOPLE}/people/2/field_data"), &[], 200, json!({"data": {}}))
    .reply(Method::Post, &format!("{PEOPLE}/people/3/field_data"), &[], 422, json!({"errors": []}));
    let transport = known_person(transport, "Jane Doe", "5", "jane@example.com", "555-0100");
    let transport = known_person(transport, "Bob Smith", "8", "bob@example.com", "555-0101");
    let client = client(transport);

    let report = parse_pickups::run(&client, &PickupOptions::default()).await.unwrap();

    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed, 1);
    assert!(!report.incomplete);

    let posts: Vec<_> = client
        .transport()
        .requests_with(Method::Post)
        .iter()
        .map(posted_value)
        .collect();
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0].0, format!("{PEOPLE}/people/1/field_data"));
    assert_eq!(
        posts[0].1["value"],
        "Jane Doe;jane@example.com;555-0100|Bob Smith;bob@example.com;555-0101"
    );
    assert_eq!(posts[0].1["field_definition_id"], "11");
    assert_eq!(posts[1].1["value"], "Solo Person;0;0|");
    assert_eq!(posts[2].1["value"], "Jane Doe;jane@example.com;555-0100|");
}

#[tokio::test]
async fn pickups_in_place_patch_the_source_datum() {
    let transport = definitions(FakeTransport::new(), &[("Authorized Pickups", "10")])
        .get(
            &format!("{PEOPLE}/field_data"),
            &[("where[field_definition_id]", "10"), PER_PAGE],
            page(vec![field_datum("900", "1", "Solo Person")], None),
        )
        .get(&format!("{PEOPLE}/people"), &[("where[search_name]", "Solo Person")], page(vec![], None))
        .reply(Method::Patch, &format!("{PEOPLE}/field_data/900"), &[], 200, json!({"data": {}}));
    let client = client(transport);
    let options = PickupOptions { in_place: true, ..PickupOptions::default() };

    let report = parse_pickups::run(&client, &options).await.unwrap();

    assert_eq!(report.succeeded, 1);
    let patches = client.transport().requests_with(Method::Patch);
    let (_, attributes) = posted_value(&patches[0]);
    assert_eq!(attributes["field_definition_id"], "10");
    assert_eq!(attributes["value"], "Solo Person;0;0|");
}

#[tokio::test]
async fn missing_field_definition_fails_before_any_write() {
    let transport = definitions(FakeTransport::new(), &[("Authorized Pickups", "10")]).get(
        &format!("{PEOPLE}/field_definitions"),
        &[("where[name]", "Authorized Pickups Parsed")],
        page(vec![], None),
    );
    let client = client(transport);

    let err = parse_pickups::run(&client, &PickupOptions::default()).await.unwrap_err();

    assert!(matches!(err, Error::NotFound(_)));
    let requests = client.transport().requests();
    assert!(requests.iter().all(|r| r.method == Method::Get));
    assert!(!requests.iter().any(|r| r.url.ends_with("/field_data")));
}

#[tokio::test]
async fn declined_delete_makes_no_changes() {
    let client = client(people(FakeTransport::new(), &["1", "2"]));
    let mut prompt = answer("no\n");

    let report = delete_people::run(&client, &DeletePeopleOptions::default(), &mut prompt).await.unwrap();

    assert!(report.aborted);
    assert_eq!(report.processed(), 0);
    assert!(client.transport().requests_with(Method::Delete).is_empty());
    let asked = String::from_utf8(prompt.into_output()).unwrap();
    assert!(asked.contains("delete all 2 people"));
}

#[tokio::test]
async fn confirmed_delete_skips_and_continues_past_failures() {
    let transport = people(FakeTransport::new(), &["1", "2", "3"])
        .reply(Method::Delete, &format!("{PEOPLE}/people/1"), &[], 204, Value::Null)
        .reply(Method::Delete, &format!("{PEOPLE}/people/3"), &[], 500, json!({"errors": []}));
    let client = client(transport);
    let options = DeletePeopleOptions { skip: vec!["2".to_string()], person: None };

    let report = delete_people::run(&client, &options, &mut answer("yes\n")).await.unwrap();

    assert_eq!(report.succeeded, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(report.skipped, 1);
    let deleted: Vec<_> = client
        .transport()
        .requests_with(Method::Delete)
        .into_iter()
        .map(|r| r.url)
        .collect();
    assert_eq!(deleted, [format!("{PEOPLE}/people/1"), format!("{PEOPLE}/people/3")]);
}

#[tokio::test]
async fn single_person_delete_skips_the_listing() {
    let transport =
        FakeTransport::new().reply(Method::Delete, &format!("{PEOPLE}/people/42"), &[], 204, Value::Null);
    let client = client(transport);
    let options = DeletePeopleOptions { skip: Vec::new(), person: Some("42".to_string()) };
    let mut prompt = answer("yes\n");

    let report = delete_people::run(&client, &options, &mut prompt).await.unwrap();

    assert_eq!(report.succeeded, 1);
    assert!(client.transport().requests_with(Method::Get).is_empty());
    let asked = String::from_utf8(prompt.into_output()).unwrap();
    assert!(asked.starts_with("Are you sure you want to delete person 42?"));
    assert!(!asked.contains("all"));
}

#[tokio::test]
async fn delete_without_credentials_is_refused_locally() {
    let mut config = common::config();
    config.pco_secret.clear();
    let client = PlanningCenterClient::with_transport(&config, FakeTransport::new());

    let err = delete_people::run(&client, &DeletePeopleOptions::default(), &mut answer("yes\n"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Config { .. }));
    assert!(client.transport().requests().is_empty());
}

#[tokio::test]
async fn field_data_is_fetched_before_it_is_deleted() {
    let transport = definitions(FakeTransport::new(), &[("Grade", "12")])
        .get(
            &format!("{PEOPLE}/field_data"),
            &[("where[field_definition_id]", "12"), PER_PAGE],
            page(vec![field_datum("700", "1", "3"), field_datum("701", "2", "4")], None),
        )
        .reply(Method::Delete, &format!("{PEOPLE}/field_data/700"), &[], 204, Value::Null)
        .reply(Method::Delete, &format!("{PEOPLE}/field_data/701"), &[], 204, Value::Null);
    let client = client(transport);

    let report = delete_field_data::run(&client, "Grade", &mut answer("yes\n")).await.unwrap();

    assert_eq!(report.succeeded, 2);
    let methods: Vec<_> = client.transport().requests().iter().map(|r| r.method).collect();
    assert_eq!(methods, [Method::Get, Method::Get, Method::Delete, Method::Delete]);
}

#[tokio::test]
async fn unknown_field_cannot_be_deleted() {
    let transport = FakeTransport::new().get(
        &format!("{PEOPLE}/field_definitions"),
        &[("where[name]", "Shoe Size")],
        page(vec![], None),
    );
    let client = client(transport);

    let err = delete_field_data::run(&client, "Shoe Size", &mut answer("yes\n")).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn birthdays_are_cleared_after_confirmation() {
    let transport = people(FakeTransport::new(), &["1", "2"])
        .reply(Method::Patch, &format!("{PEOPLE}/people/1"), &[], 200, json!({"data": person("1")}))
        .reply(Method::Patch, &format!("{PEOPLE}/people/2"), &[], 200, json!({"data": person("2")}));
    let client = client(transport);

    let report = clear_birthdays::run(&client, &mut answer("yes\n")).await.unwrap();

    assert_eq!(report.succeeded, 2);
    assert_eq!(client.transport().requests_with(Method::Patch).len(), 2);
}

#[tokio::test]
async fn nothing_to_clear_asks_nothing() {
    let client = client(people(FakeTransport::new(), &[]));
    let mut prompt = answer("");

    let report = clear_birthdays::run(&client, &mut prompt).await.unwrap();

    assert_eq!(report.processed(), 0);
    assert!(!report.aborted);
    assert!(prompt.into_output().is_empty());
}

#[tokio::test]
async fn field_report_lists_people_or_field_data() {
    let transport = definitions(people(FakeTransport::new(), &["1", "2", "3"]), &[("Grade", "12")]).get(
        &format!("{PEOPLE}/field_data"),
        &[("where[field_definition_id]", "12"), PER_PAGE],
        page(vec![field_datum("700", "1", "3")], None),
    );
    let client = client(transport);

    match field_report::run(&client, None).await.unwrap() {
        FieldReport::People(ids) => assert_eq!(ids.len(), 3),
        FieldReport::FieldData { .. } => panic!("expected people"),
    }

    match field_report::run(&client, Some("Grade")).await.unwrap() {
        FieldReport::FieldData { definition, data, .. } => {
            assert_eq!(definition.0, "12");
            assert_eq!(data.records[0].value, "3");
        }
        FieldReport::People(_) => panic!("expected field data"),
    }
}

#[tokio::test]
async fn episode_is_created_on_first_channel() {
    let transport = FakeTransport::new()
        .get(
            &format!("{PUBLISHING}/channels"),
            &[("order", "name")],
            page(vec![json!({"type": "Channel", "id": "c1", "attributes": {}})], None),
        )
        .reply(
            Method::Post,
            &format!("{PUBLISHING}/channels/c1/episodes"),
            &[],
            201,
            json!({"data": {"type": "Episode", "id": "e9", "attributes": {"title": "Easter"}}}),
        );
    let client = client(transport);

    let created = episode::run(&client, "Easter").await.unwrap();

    assert_eq!(created["data"]["id"], "e9");
    let post = &client.transport().requests_with(Method::Post)[0];
    assert_eq!(post.body.as_ref().unwrap()["data"]["attributes"]["title"], "Easter");
}

#[tokio::test]
async fn episode_needs_a_channel() {
    let transport =
        FakeTransport::new().get(&format!("{PUBLISHING}/channels"), &[("order", "name")], page(vec![], None));

    let err = episode::run(&client(transport), "Easter").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}
