use tests::prelude::*;

use pretty_assertions::assert_eq;

use jiff::Timestamp;
use std::collections::HashMap;

#[derive(Debug, Source)]
struct Charge {
    id: String,
    amount: i64,
    currency: String,
    created: i64,
    description: String,
    customer: Customer,
    metadata: HashMap<String, String>,
}

#[derive(Debug, Source)]
struct Customer {
    #[id]
    id: String,
    name: String,
    email: Option<String>,
}

#[derive(Debug, Record)]
#[object("Opportunity")]
struct Opportunity {
    #[field("Name")]
    #[source("description")]
    name: String,

    #[field("Amount")]
    #[source("amount")]
    amount: f64,

    #[field("CloseDate")]
    #[source("created")]
    close_date: Option<Timestamp>,

    #[field("CurrencyIsoCode")]
    #[source("currency")]
    currency: String,

    #[field("Charge_Ref__c")]
    #[source("metadata.crm.ref")]
    charge_ref: Option<String>,
}

fn charge() -> Charge {
    Charge {
        id: "ch_1".to_string(),
        amount: 12345,
        currency: "eur".to_string(),
        created: 1_700_000_000,
        description: "Annual plan".to_string(),
        customer: Customer {
            id: "cus_1".to_string(),
            name: "Ada".to_string(),
            email: None,
        },
        metadata: [("crm.ref".to_string(), "R-7".to_string())]
            .into_iter()
            .collect(),
    }
}

fn opportunity() -> Opportunity {
    Opportunity {
        name: "Draft".to_string(),
        amount: 99.0,
        close_date: None,
        currency: "usd".to_string(),
        charge_ref: None,
    }
}

#[tokio::test]
async fn source_values_override_record_values() {
    let (mapper, _) = mapper();

    let charge = charge();
    let attributes = assert_ok!(
        mapper
            .map_attributes(&opportunity(), Some(&charge), Mode::Insert)
            .await
    );

    let expected: AttributeSet = [
        ("Name", Value::from("Annual plan")),
        ("Amount", Value::F64(123.45)),
        ("CloseDate", Value::from("2023-11-14")),
        ("CurrencyIsoCode", Value::from("EUR")),
        ("Charge_Ref__c", Value::from("R-7")),
    ]
    .into_iter()
    .collect();
    assert_eq!(attributes, expected);
}

#[tokio::test]
async fn currency_set_on_record_is_not_divided() {
    let (mapper, _) = mapper();

    let mut opportunity = opportunity();
    opportunity.amount = 12345.0;

    let attributes = assert_ok!(mapper.map_attributes(&opportunity, None, Mode::Insert).await);
    assert_eq!(attributes.get("Amount"), Some(&Value::F64(12345.0)));
}

#[tokio::test]
async fn empty_source_values_fall_back_to_record() {
    let (mapper, _) = mapper();

    let mut charge = charge();
    charge.amount = 0;
    charge.description = String::new();
    charge.metadata.clear();

    let attributes = assert_ok!(
        mapper
            .map_attributes(&opportunity(), Some(&charge), Mode::Insert)
            .await
    );
    assert_eq!(attributes.get("Name"), Some(&Value::from("Draft")));
    assert_eq!(attributes.get("Amount"), Some(&Value::F64(99.0)));
    assert!(!attributes.contains_key("Charge_Ref__c"));
}

#[tokio::test]
async fn integer_source_value_becomes_timestamp() {
    #[derive(Debug, Record)]
    #[object("Contact")]
    struct Contact {
        #[field("LastName")]
        last_name: String,

        #[field("Birthdate")]
        #[source("created")]
        birthdate: Timestamp,
    }

    let (mapper, _) = mapper();

    let contact = Contact {
        last_name: "Lovelace".to_string(),
        birthdate: Timestamp::UNIX_EPOCH,
    };
    let attributes = assert_ok!(
        mapper
            .map_attributes(&contact, Some(&charge()), Mode::Insert)
            .await
    );
    assert_eq!(attributes.get("Birthdate"), Some(&Value::from("2023-11-14")));
}

#[tokio::test]
async fn nested_record_paths() {
    #[derive(Debug, Record)]
    #[object("Contact")]
    struct Contact {
        #[field("LastName")]
        #[source("customer.name")]
        last_name: String,

        #[field("Email")]
        #[source("customer.email")]
        email: String,
    }

    let (mapper, _) = mapper();

    let contact = Contact {
        last_name: String::new(),
        email: "ada@example.com".to_string(),
    };
    let attributes = assert_ok!(
        mapper
            .map_attributes(&contact, Some(&charge()), Mode::Insert)
            .await
    );

    let expected: AttributeSet = [
        ("LastName", Value::from("Ada")),
        ("Email", Value::from("ada@example.com")),
    ]
    .into_iter()
    .collect();
    assert_eq!(attributes, expected);
}

#[tokio::test]
async fn missing_record_field_is_an_error() {
    #[derive(Debug, Record)]
    #[object("Contact")]
    struct Contact {
        #[field("LastName")]
        #[source("customer.phone")]
        last_name: String,
    }

    let (mapper, log) = mapper();

    let contact = Contact {
        last_name: "Lovelace".to_string(),
    };
    let err = assert_err!(
        mapper
            .map_attributes(&contact, Some(&charge()), Mode::Insert)
            .await
    );
    assert!(err.root_cause().is_field_access());
    assert_eq!(
        err.to_string(),
        "resolving source path `customer.phone` for `Contact.LastName`: \
         field access failed: `Customer` has no field `phone`"
    );

    // Mapping fails before the schema is needed
    assert!(log.is_empty());
}

#[tokio::test]
async fn json_source_looks_up_whole_keys() {
    let (mapper, _) = mapper();

    let source = serde_json::json!({
        "description": "From JSON",
        "amount": 5000,
        "metadata.crm.ref": "R-9",
    });

    let attributes = assert_ok!(
        mapper
            .map_attributes(&opportunity(), Some(&source), Mode::Update)
            .await
    );
    assert_eq!(attributes.get("Name"), Some(&Value::from("From JSON")));
    assert_eq!(attributes.get("Amount"), Some(&Value::F64(50.0)));
    assert_eq!(attributes.get("Charge_Ref__c"), Some(&Value::from("R-9")));
}
