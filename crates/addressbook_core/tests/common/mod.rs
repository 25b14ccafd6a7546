#![allow(dead_code)]

use addressbook_core::{
    Address, AddressBook, Email, Index, ModelManager, Name, Person, Phone, Remark, Tag, UserPrefs,
};

pub const INDEX_FIRST_PERSON: usize = 1;
pub const INDEX_SECOND_PERSON: usize = 2;

/// Fluent builder for person fixtures.
#[derive(Debug, Clone)]
pub struct PersonBuilder {
    name: String,
    phone: String,
    email: String,
    address: String,
    remark: String,
    tags: Vec<String>,
}

impl Default for PersonBuilder {
    fn default() -> Self {
        Self {
            name: "Amy Bee".to_string(),
            phone: "85355255".to_string(),
            email: "amy@gmail.com".to_string(),
            address: "123, Jurong West Ave 6, #08-111".to_string(),
            remark: String::new(),
            tags: Vec::new(),
        }
    }
}

impl PersonBuilder {
    pub fn from_person(person: &Person) -> Self {
        Self {
            name: person.name.to_string(),
            phone: person.phone.to_string(),
            email: person.email.to_string(),
            address: person.address.to_string(),
            remark: person.remark.to_string(),
            tags: person.tags.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn name(mut self, value: &str) -> Self {
        self.name = value.to_string();
        self
    }

    pub fn phone(mut self, value: &str) -> Self {
        self.phone = value.to_string();
        self
    }

    pub fn email(mut self, value: &str) -> Self {
        self.email = value.to_string();
        self
    }

    pub fn address(mut self, value: &str) -> Self {
        self.address = value.to_string();
        self
    }

    pub fn remark(mut self, value: &str) -> Self {
        self.remark = value.to_string();
        self
    }

    pub fn tags(mut self, values: &[&str]) -> Self {
        self.tags = values.iter().map(|value| value.to_string()).collect();
        self
    }

    pub fn build(self) -> Person {
        let mut person = Person::new(
            Name::parse(self.name).unwrap(),
            Phone::parse(self.phone).unwrap(),
            Email::parse(self.email).unwrap(),
            Address::parse(self.address).unwrap(),
            self.tags.into_iter().map(|tag| Tag::parse(tag).unwrap()),
        );
        person.remark = Remark::new(self.remark);
        person
    }
}

pub fn alice() -> Person {
    PersonBuilder::default()
        .name("Alice Pauline")
        .phone("94351253")
        .email("alice@example.com")
        .address("123, Jurong West Ave 6, #08-111")
        .remark("She likes aardvarks.")
        .tags(&["friends"])
        .build()
}

pub fn benson() -> Person {
    PersonBuilder::default()
        .name("Benson Meier")
        .phone("98765432")
        .email("johnd@example.com")
        .address("311, Clementi Ave 2, #02-25")
        .remark("He can't take beer!")
        .tags(&["owesMoney", "friends"])
        .build()
}

pub fn carl() -> Person {
    PersonBuilder::default()
        .name("Carl Kurz")
        .phone("95352563")
        .email("heinz@example.com")
        .address("wall street")
        .build()
}

pub fn daniel() -> Person {
    PersonBuilder::default()
        .name("Daniel Meier")
        .phone("87652533")
        .email("cornelia@example.com")
        .address("10th street")
        .tags(&["friends"])
        .build()
}

pub fn elle() -> Person {
    PersonBuilder::default()
        .name("Elle Meyer")
        .phone("9482224")
        .email("werner@example.com")
        .address("michegan ave")
        .build()
}

pub fn fiona() -> Person {
    PersonBuilder::default()
        .name("Fiona Kunz")
        .phone("9482427")
        .email("lydia@example.com")
        .address("little tokyo")
        .build()
}

pub fn george() -> Person {
    PersonBuilder::default()
        .name("George Best")
        .phone("9482442")
        .email("anna@example.com")
        .address("4th street")
        .build()
}

/// Not part of the typical address book.
pub fn amy() -> Person {
    PersonBuilder::default()
        .name("Amy Bee")
        .phone("11111111")
        .email("amy@example.com")
        .address("Block 312, Amy Street 1")
        .tags(&["friend"])
        .build()
}

/// Not part of the typical address book.
pub fn bob() -> Person {
    PersonBuilder::default()
        .name("Bob Choo")
        .phone("22222222")
        .email("bob@example.com")
        .address("Block 123, Bobby Street 3")
        .tags(&["husband", "friend"])
        .build()
}

pub fn typical_persons() -> Vec<Person> {
    vec![
        alice(),
        benson(),
        carl(),
        daniel(),
        elle(),
        fiona(),
        george(),
    ]
}

pub fn typical_address_book() -> AddressBook {
    AddressBook::from_persons(typical_persons()).unwrap()
}

pub fn typical_model() -> ModelManager {
    ModelManager::new(typical_address_book(), UserPrefs::default())
}

pub fn index(one_based: usize) -> Index {
    Index::from_one_based(one_based).unwrap()
}
