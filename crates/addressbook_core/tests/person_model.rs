mod common;

use addressbook_core::{AddressBook, AddressBookError, Model, Person, PersonFilter};
use common::{alice, amy, benson, bob, typical_model, PersonBuilder};
use serde_json::json;

#[test]
fn person_serializes_with_plain_string_fields() {
    let value = serde_json::to_value(benson()).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "Benson Meier",
            "phone": "98765432",
            "email": "johnd@example.com",
            "address": "311, Clementi Ave 2, #02-25",
            "remark": "He can't take beer!",
            "tags": ["friends", "owesMoney"],
        })
    );
}

#[test]
fn person_deserialization_validates_fields() {
    let bad_email = json!({
        "name": "Amy Bee",
        "phone": "11111111",
        "email": "not-an-email",
        "address": "Somewhere",
        "tags": [],
    });
    assert!(serde_json::from_value::<Person>(bad_email).is_err());

    let bad_tag = json!({
        "name": "Amy Bee",
        "phone": "11111111",
        "email": "amy@example.com",
        "address": "Somewhere",
        "tags": ["two words"],
    });
    assert!(serde_json::from_value::<Person>(bad_tag).is_err());
}

#[test]
fn missing_remark_defaults_to_empty() {
    let person: Person = serde_json::from_value(json!({
        "name": "Amy Bee",
        "phone": "11111111",
        "email": "amy@example.com",
        "address": "Block 312, Amy Street 1",
        "tags": ["friend"],
    }))
    .unwrap();
    assert_eq!(person, amy());
    assert!(person.remark.is_empty());
}

#[test]
fn same_person_ignores_case_spacing_and_other_fields() {
    let variant = PersonBuilder::from_person(&alice())
        .name("ALICE   pauline")
        .phone("999")
        .email("other@example.com")
        .tags(&[])
        .build();
    assert!(alice().is_same_person(&variant));
    assert_ne!(alice(), variant);
    assert!(!alice().is_same_person(&PersonBuilder::default().name("Alice").build()));
}

#[test]
fn person_display_lists_every_field() {
    assert_eq!(
        benson().to_string(),
        "Benson Meier; Phone: 98765432; Email: johnd@example.com; \
Address: 311, Clementi Ave 2, #02-25; Remark: He can't take beer!; Tags: [friends][owesMoney]"
    );
}

#[test]
fn address_book_keeps_identities_unique() {
    let mut book = AddressBook::new();
    book.add_person(amy()).unwrap();
    book.add_person(bob()).unwrap();

    let twin = PersonBuilder::from_person(&amy()).phone("123").build();
    assert_eq!(book.add_person(twin.clone()), Err(AddressBookError::DuplicatePerson));
    assert_eq!(
        book.set_person(&bob(), twin),
        Err(AddressBookError::DuplicatePerson)
    );
    assert_eq!(
        book.remove_person(&alice()),
        Err(AddressBookError::PersonNotFound)
    );

    let updated = PersonBuilder::from_person(&amy()).phone("123").build();
    book.set_person(&amy(), updated.clone()).unwrap();
    assert_eq!(book.persons(), &[updated, bob()]);
}

#[test]
fn replacing_all_persons_rejects_duplicates_atomically() {
    let mut book = AddressBook::from_persons(vec![amy()]).unwrap();
    let err = book.set_persons(vec![bob(), PersonBuilder::from_person(&bob()).build()]);
    assert_eq!(err, Err(AddressBookError::DuplicatePerson));
    assert_eq!(book.persons(), &[amy()]);
}

#[test]
fn filter_matches_whole_words_case_insensitively() {
    let mut model = typical_model();

    model.update_filtered_person_list(PersonFilter::NameContainsKeywords(vec![
        "meier".to_string(),
    ]));
    assert_eq!(model.filtered_person_list().len(), 2);

    model.update_filtered_person_list(PersonFilter::NameContainsKeywords(vec![
        "Mei".to_string(),
    ]));
    assert!(model.filtered_person_list().is_empty());
    assert_eq!(model.address_book().len(), 7);
}

#[test]
fn adding_a_person_resets_the_filter() {
    let mut model = typical_model();
    model.update_filtered_person_list(PersonFilter::NameContainsKeywords(vec![
        "Carl".to_string(),
    ]));

    model.add_person(amy()).unwrap();

    assert_eq!(model.person_filter(), &PersonFilter::All);
    assert_eq!(model.filtered_person_list().len(), 8);
}

#[test]
fn address_book_file_path_lives_in_user_prefs() {
    let mut model = typical_model();
    model.set_address_book_file_path("other/book.sqlite3".into());
    assert_eq!(
        model.user_prefs().address_book_file_path,
        std::path::PathBuf::from("other/book.sqlite3")
    );
    assert_eq!(
        model.address_book_file_path(),
        std::path::Path::new("other/book.sqlite3")
    );
}
