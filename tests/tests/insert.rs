use tests::prelude::*;

use pretty_assertions::assert_eq;

use jiff::Timestamp;

#[derive(Debug, Record)]
#[object("Contact")]
struct Contact {
    #[field("Id")]
    id: Option<String>,

    #[field("FirstName")]
    first_name: String,

    #[field("LastName")]
    last_name: String,

    #[field("Email")]
    email: Option<String>,

    #[field("LastModifiedDate")]
    last_modified: Option<Timestamp>,

    #[field("Birthdate")]
    birthdate: Option<Timestamp>,

    #[field("Nickname__c")]
    nickname: String,

    #[field(skip)]
    #[allow(dead_code)]
    notes: String,
}

fn contact() -> Contact {
    Contact {
        id: Some("003abc".to_string()),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: None,
        last_modified: Some(Timestamp::from_second(1_700_000_000).unwrap()),
        birthdate: None,
        nickname: "Countess".to_string(),
        notes: "not mapped".to_string(),
    }
}

#[tokio::test]
async fn insert_keeps_writable_schema_fields() {
    let (mapper, _) = mapper();

    let attributes = assert_ok!(mapper.map_attributes(&contact(), None, Mode::Insert).await);

    let expected: AttributeSet = [
        ("FirstName", Value::from("Ada")),
        ("LastName", Value::from("Lovelace")),
    ]
    .into_iter()
    .collect();
    assert_eq!(attributes, expected);
}

#[tokio::test]
async fn update_matches_insert() {
    let (mapper, _) = mapper();

    let insert = assert_ok!(mapper.map_attributes(&contact(), None, Mode::Insert).await);
    let update = assert_ok!(mapper.map_attributes(&contact(), None, Mode::Update).await);
    assert_eq!(insert, update);
}

#[tokio::test]
async fn read_only_fields_never_written() {
    let (mapper, _) = mapper();

    for mode in [Mode::Insert, Mode::Update] {
        let attributes = assert_ok!(mapper.map_attributes(&contact(), None, mode).await);
        assert!(!attributes.contains_key("Id"));
        assert!(!attributes.contains_key("LastModifiedDate"));
    }
}

#[tokio::test]
async fn date_field_written_as_calendar_date() {
    let (mapper, _) = mapper();

    let mut contact = contact();
    contact.birthdate = Some("1815-12-10T08:30:00Z".parse().unwrap());

    let attributes = assert_ok!(mapper.map_attributes(&contact, None, Mode::Insert).await);
    assert_eq!(attributes.get("Birthdate"), Some(&Value::from("1815-12-10")));
}

#[tokio::test]
async fn attributes_serialize_to_request_body() {
    let (mapper, _) = mapper();

    let attributes = assert_ok!(mapper.map_attributes(&contact(), None, Mode::Insert).await);
    assert_eq!(
        serde_json::to_value(&attributes).unwrap(),
        serde_json::json!({ "FirstName": "Ada", "LastName": "Lovelace" })
    );
}

#[tokio::test]
async fn unknown_object_fails() {
    #[derive(Debug, Record)]
    #[object("Widget__c")]
    struct Widget {
        #[field("Name")]
        name: String,
    }

    let (mapper, _) = mapper();

    let widget = Widget {
        name: "sprocket".to_string(),
    };
    let err = assert_err!(mapper.map_attributes(&widget, None, Mode::Insert).await);
    assert!(err.is_schema_fetch());
    assert!(err.root_cause().is_unknown_object());
}
