//! Sample contacts used to seed an address book that has never been saved.

use crate::model::address_book::AddressBook;
use crate::model::person::{Address, Email, Name, Person, PersonValidationError, Phone, Tag};
use log::warn;

struct SampleRow {
    name: &'static str,
    phone: &'static str,
    email: &'static str,
    address: &'static str,
    tags: &'static [&'static str],
}

const SAMPLE_ROWS: &[SampleRow] = &[
    SampleRow {
        name: "Alex Yeoh",
        phone: "87438807",
        email: "alexyeoh@example.com",
        address: "Blk 30 Geylang Street 29, #06-40",
        tags: &["friends"],
    },
    SampleRow {
        name: "Bernice Yu",
        phone: "99272758",
        email: "berniceyu@example.com",
        address: "Blk 30 Lorong 3 Serangoon Gardens, #07-18",
        tags: &["colleagues", "friends"],
    },
    SampleRow {
        name: "Charlotte Oliveiro",
        phone: "93210283",
        email: "charlotte@example.com",
        address: "Blk 11 Ang Mo Kio Street 74, #11-04",
        tags: &["neighbours"],
    },
    SampleRow {
        name: "David Li",
        phone: "91031282",
        email: "lidavid@example.com",
        address: "Blk 436 Serangoon Gardens Street 26, #16-43",
        tags: &["family"],
    },
    SampleRow {
        name: "Irfan Ibrahim",
        phone: "92492021",
        email: "irfan@example.com",
        address: "Blk 47 Tampines Street 20, #17-35",
        tags: &["classmates"],
    },
    SampleRow {
        name: "Roy Balakrishnan",
        phone: "92624417",
        email: "royb@example.com",
        address: "Blk 45 Aljunied Street 85, #11-31",
        tags: &["colleagues"],
    },
];

impl SampleRow {
    fn to_person(&self) -> Result<Person, PersonValidationError> {
        let tags = self
            .tags
            .iter()
            .map(|tag| Tag::parse(*tag))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Person::new(
            Name::parse(self.name)?,
            Phone::parse(self.phone)?,
            Email::parse(self.email)?,
            Address::parse(self.address)?,
            tags,
        ))
    }
}

/// Builds the sample address book.
pub fn sample_address_book() -> AddressBook {
    let mut book = AddressBook::new();
    for row in SAMPLE_ROWS {
        let added = row
            .to_person()
            .map_err(|err| err.to_string())
            .and_then(|person| book.add_person(person).map_err(|err| err.to_string()));
        if let Err(err) = added {
            warn!("event=sample_data module=model status=skipped error={err}");
        }
    }
    book
}

#[cfg(test)]
mod tests {
    use super::{sample_address_book, SAMPLE_ROWS};

    #[test]
    fn every_sample_row_is_loaded() {
        let book = sample_address_book();
        assert_eq!(book.len(), SAMPLE_ROWS.len());
        assert!(book.persons().iter().all(|person| person.remark.is_empty()));
    }
}
