use chrono::DateTime;
use fake::Fake;
use fake::faker::address::en::{CityName, CountryName, StateName, StreetName, ZipCode};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::{DomainSuffix, IPv4, Password, SafeEmail, Username};
use fake::faker::job::en::Title as JobTitle;
use fake::faker::lorem::en::{Paragraph, Sentence, Word, Words};
use fake::faker::name::en::{FirstName, LastName, Name, Suffix, Title};
use fake::faker::phone_number::en::PhoneNumber;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::Value;
use uuid::Builder;

use crate::application::ports::FieldProvider;

/// Generator names understood by [`FakeFieldProvider`].
pub const SUPPORTED_FIELDS: &[&str] = &[
    "uuid",
    "city",
    "state",
    "country",
    "zip",
    "street",
    "latitude",
    "longitude",
    "name",
    "name_prefix",
    "name_suffix",
    "first_name",
    "last_name",
    "gender",
    "ssn",
    "hobby",
    "email",
    "phone",
    "username",
    "password",
    "company",
    "job_title",
    "paragraph",
    "sentence",
    "phrase",
    "quote",
    "word",
    "date",
    "second",
    "minute",
    "hour",
    "month",
    "day",
    "year",
    "url",
    "domain",
    "ip",
    "int",
    "float",
    "bool",
];

const GENDERS: &[&str] = &["male", "female"];

const HOBBIES: &[&str] = &[
    "Reading",
    "Hiking",
    "Cooking",
    "Photography",
    "Gardening",
    "Chess",
    "Cycling",
    "Painting",
    "Fishing",
    "Knitting",
    "Climbing",
    "Birdwatching",
];

const QUOTES: &[&str] = &[
    "\"The only way to do great work is to love what you do.\" - Steve Jobs",
    "\"Simplicity is prerequisite for reliability.\" - Edsger Dijkstra",
    "\"Talk is cheap. Show me the code.\" - Linus Torvalds",
    "\"Premature optimization is the root of all evil.\" - Donald Knuth",
    "\"Stay hungry, stay foolish.\" - Stewart Brand",
    "\"Well begun is half done.\" - Aristotle",
];

// 2033-05-18T03:33:20Z
const MAX_TIMESTAMP: i64 = 2_000_000_000;

/// [`FieldProvider`] backed by the `fake` crate.
///
/// The random source is injected at construction; two providers created from
/// the same seed produce the same sequence of values.
pub struct FakeFieldProvider {
    rng: Mutex<StdRng>,
}

impl FakeFieldProvider {
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl FieldProvider for FakeFieldProvider {
    fn generate_field(&self, kind: &str) -> Option<Value> {
        let mut guard = self.rng.lock();
        let rng = &mut *guard;

        let value = match kind {
            // id
            "uuid" => Value::String(
                Builder::from_random_bytes(rng.r#gen())
                    .into_uuid()
                    .to_string(),
            ),
            // geography
            "city" => Value::String(CityName().fake_with_rng(rng)),
            "state" => Value::String(StateName().fake_with_rng(rng)),
            "country" => Value::String(CountryName().fake_with_rng(rng)),
            "zip" => Value::String(ZipCode().fake_with_rng(rng)),
            "street" => Value::String(StreetName().fake_with_rng(rng)),
            "latitude" => Value::from(rng.gen_range(-90.0..=90.0_f64)),
            "longitude" => Value::from(rng.gen_range(-180.0..=180.0_f64)),
            // person
            "name" => Value::String(Name().fake_with_rng(rng)),
            "name_prefix" => Value::String(Title().fake_with_rng(rng)),
            "name_suffix" => Value::String(Suffix().fake_with_rng(rng)),
            "first_name" => Value::String(FirstName().fake_with_rng(rng)),
            "last_name" => Value::String(LastName().fake_with_rng(rng)),
            "gender" => Value::from(pick(rng, GENDERS)),
            "ssn" => Value::String(format!(
                "{:03}-{:02}-{:04}",
                rng.gen_range(100..900_u32),
                rng.gen_range(10..100_u32),
                rng.gen_range(1000..10000_u32)
            )),
            "hobby" => Value::from(pick(rng, HOBBIES)),
            "email" => Value::String(SafeEmail().fake_with_rng(rng)),
            "phone" => Value::String(PhoneNumber().fake_with_rng(rng)),
            "username" => Value::String(Username().fake_with_rng(rng)),
            "password" => Value::String(Password(8..17).fake_with_rng(rng)),
            "company" => Value::String(CompanyName().fake_with_rng(rng)),
            "job_title" => Value::String(JobTitle().fake_with_rng(rng)),
            // text
            "paragraph" => Value::String(Paragraph(3..6).fake_with_rng(rng)),
            "sentence" => Value::String(Sentence(5..10).fake_with_rng(rng)),
            "phrase" => {
                let words: Vec<String> = Words(2..5).fake_with_rng(rng);
                Value::String(words.join(" "))
            }
            "quote" => Value::from(pick(rng, QUOTES)),
            "word" => Value::String(Word().fake_with_rng(rng)),
            // date and time
            "date" => Value::String(
                DateTime::from_timestamp(rng.gen_range(0..MAX_TIMESTAMP), 0)
                    .map(|date| date.to_rfc3339())
                    .unwrap_or_default(),
            ),
            "second" => Value::from(rng.gen_range(0..60_i32)),
            "minute" => Value::from(rng.gen_range(0..60_i32)),
            "hour" => Value::from(rng.gen_range(0..24_i32)),
            "month" => Value::from(rng.gen_range(1..=12_i32)),
            "day" => Value::from(rng.gen_range(1..=31_i32)),
            "year" => Value::from(rng.gen_range(1900..=2030_i32)),
            // internet
            "url" => {
                let host: String = Word().fake_with_rng(rng);
                let suffix: String = DomainSuffix().fake_with_rng(rng);
                let path: String = Word().fake_with_rng(rng);
                Value::String(format!("https://www.{}.{}/{}", host, suffix, path))
            }
            "domain" => {
                let host: String = Word().fake_with_rng(rng);
                let suffix: String = DomainSuffix().fake_with_rng(rng);
                Value::String(format!("{}.{}", host, suffix))
            }
            "ip" => Value::String(IPv4().fake_with_rng(rng)),
            // numbers
            "int" => Value::from(rng.r#gen::<i32>()),
            "float" => Value::from(f64::from(rng.r#gen::<f32>()) * 1000.0),
            "bool" => Value::Bool(rng.r#gen()),
            _ => return None,
        };

        Some(value)
    }
}

fn pick(rng: &mut StdRng, choices: &[&'static str]) -> &'static str {
    choices.choose(rng).copied().unwrap_or_default()
}
