use tests::prelude::*;

use pretty_assertions::assert_eq;

use forcemap::SchemaCache;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Record)]
#[object("Contact")]
struct Contact {
    #[field("LastName")]
    last_name: String,
}

#[tokio::test]
async fn schema_fetched_once_per_object() {
    let (mapper, log) = mapper();

    let contact = Contact {
        last_name: "Lovelace".to_string(),
    };

    for _ in 0..3 {
        assert_ok!(mapper.map_attributes(&contact, None, Mode::Insert).await);
    }
    assert_ok!(mapper.select_fields(&contact, None).await);
    assert_ok!(mapper.describe("Opportunity").await);

    assert_eq!(log.count("Contact"), 1);
    assert_eq!(log.names(), vec!["Contact", "Opportunity"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_first_use_fetches_once() {
    init_tracing();

    let source = LoggingSource::new(fixtures::source()).with_delay(Duration::from_millis(20));
    let log = source.fetch_log();
    let mapper = Mapper::new(source);

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let mapper = mapper.clone();
            tokio::spawn(async move { mapper.describe("Contact").await })
        })
        .collect();

    let mut schemas = vec![];
    for task in tasks {
        schemas.push(assert_ok!(task.await.unwrap()));
    }

    assert_eq!(log.count("Contact"), 1);
    assert!(schemas.iter().all(|schema| Arc::ptr_eq(schema, &schemas[0])));
}

#[tokio::test]
async fn mappers_can_share_a_cache() {
    init_tracing();

    let source = LoggingSource::new(fixtures::source());
    let log = source.fetch_log();
    let cache = Arc::new(SchemaCache::new(source));

    let first = Mapper::builder().build_with_cache(cache.clone());
    let second = Mapper::builder()
        .currency_code_field("Currency__c")
        .build_with_cache(cache.clone());

    let contact = Contact {
        last_name: "Lovelace".to_string(),
    };
    assert_ok!(first.map_attributes(&contact, None, Mode::Insert).await);
    assert_ok!(second.map_attributes(&contact, None, Mode::Update).await);

    assert_eq!(log.len(), 1);
    assert!(cache.cached("Contact").is_some());
}

#[tokio::test]
async fn all_fields_skips_location_fields() {
    let (mapper, _) = mapper();

    let all_fields = assert_ok!(mapper.all_fields::<Contact>().await);
    assert_eq!(
        all_fields,
        "Id, FirstName, LastName, Email, AccountId, MailingCountry, MailingCountryCode, \
         MailingState, Birthdate, LastModifiedDate, Ext_Id__c"
    );
}

#[tokio::test]
async fn failed_describe_is_retried() {
    let (mapper, log) = mapper();

    assert_err!(mapper.describe("Widget__c").await);
    assert_err!(mapper.describe("Widget__c").await);
    assert_eq!(log.count("Widget__c"), 2);
}
