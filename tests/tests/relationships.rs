use tests::prelude::*;

use pretty_assertions::assert_eq;

#[derive(Debug, Clone, Record)]
#[object("Account")]
struct Account {
    #[field("Id")]
    id: Option<String>,

    #[field("Name")]
    name: String,
}

#[derive(Debug, Record)]
#[object("Opportunity")]
struct Opportunity {
    #[field("Id")]
    id: Option<String>,

    #[field("Name")]
    name: String,

    #[field("Account")]
    account: Option<Account>,
}

fn opportunity(account_id: Option<&str>) -> Opportunity {
    Opportunity {
        id: None,
        name: "Renewal".to_string(),
        account: Some(Account {
            id: account_id.map(str::to_string),
            name: "Acme".to_string(),
        }),
    }
}

#[tokio::test]
async fn related_record_written_as_identifier() {
    let (mapper, _) = mapper();

    let attributes = assert_ok!(
        mapper
            .map_attributes(&opportunity(Some("001xyz")), None, Mode::Insert)
            .await
    );

    let expected: AttributeSet = [
        ("Name", Value::from("Renewal")),
        ("AccountId", Value::from("001xyz")),
    ]
    .into_iter()
    .collect();
    assert_eq!(attributes, expected);
}

#[tokio::test]
async fn related_record_without_identifier_is_omitted() {
    let (mapper, _) = mapper();

    let attributes = assert_ok!(
        mapper
            .map_attributes(&opportunity(None), None, Mode::Insert)
            .await
    );
    assert!(!attributes.contains_key("AccountId"));
    assert!(!attributes.contains_key("Account"));
}

#[tokio::test]
async fn selective_read_names_relationship_id() {
    let (mapper, _) = mapper();

    let attributes = assert_ok!(
        mapper
            .map_attributes(&opportunity(Some("001xyz")), None, Mode::SelectiveRead)
            .await
    );

    let expected: AttributeSet = [
        ("Id", Value::Null),
        ("Name", Value::from("Renewal")),
        ("Account.Id", Value::from("001xyz")),
    ]
    .into_iter()
    .collect();
    assert_eq!(attributes, expected);
}

#[tokio::test]
async fn select_fields_in_schema_order() {
    let (mapper, _) = mapper();

    let fields = assert_ok!(
        mapper
            .select_fields(&opportunity(Some("001xyz")), None)
            .await
    );
    assert_eq!(fields.to_param(), "Id,Name,Account.Id");
    assert!(fields.contains("Account.Id"));
}

#[tokio::test]
async fn record_reads_as_value() {
    let account = Account {
        id: Some("001xyz".to_string()),
        name: "Acme".to_string(),
    };

    let Value::Record(record) = forcemap::IntoValue::to_value(&account) else {
        panic!("expected a record value");
    };
    assert_eq!(record.ty(), "Account");
    assert_eq!(record.get("name"), Some(&Value::from("Acme")));
    assert_eq!(record.id(), Some(&Value::from("001xyz")));
}
