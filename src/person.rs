use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

static NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{Alphabetic}\p{N}]+( [\p{Alphabetic}\p{N}]+)*$").unwrap());
static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3,}$").unwrap());
static AMOUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\$?(\d{1,12})(?:\.(\d{1,2}))?$").unwrap());

/// Amount of money a student owes, kept in cents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MoneyOwed(u64);

impl MoneyOwed {
    pub fn from_cents(cents: u64) -> Self {
        MoneyOwed(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }
}

impl FromStr for MoneyOwed {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some(captures) = AMOUNT.captures(s.trim()) else {
            bail!("Amount owed should be a non-negative number with at most 2 decimal places: {:?}", s);
        };
        let dollars: u64 = captures[1].parse()?;
        let cents: u64 = match captures.get(2) {
            Some(c) if c.as_str().len() == 1 => c.as_str().parse::<u64>()? * 10,
            Some(c) => c.as_str().parse()?,
            None => 0,
        };
        Ok(MoneyOwed(dollars * 100 + cents))
    }
}

impl Display for MoneyOwed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.cents() / 100, self.cents() % 100)
    }
}

/// A student entry as written in a roster file.
#[derive(Deserialize, Debug)]
pub struct PersonEntry {
    pub name: String,
    pub class: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub owed: OwedEntry,
}

/// Rosters may write the amount either as `"12.50"` or `12.5`.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum OwedEntry {
    Text(String),
    Number(serde_json::Number),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    name: String,
    class: String,
    phone: Option<String>,
    owed: MoneyOwed,
}

impl Person {
    pub fn new(name: &str, class: &str, phone: Option<&str>, owed: MoneyOwed) -> Result<Self> {
        let name = name.trim();
        if !NAME.is_match(name) {
            bail!("Names should only contain alphanumeric characters and spaces, and it should not be blank: {:?}", name);
        }
        let class = class.trim();
        if class.is_empty() {
            bail!("Class of {} should not be blank", name);
        }
        let phone = phone.map(str::trim).filter(|p| !p.is_empty());
        if let Some(phone) = phone {
            if !PHONE.is_match(phone) {
                bail!("Phone numbers should only contain digits, and be at least 3 digits long: {:?}", phone);
            }
        }

        Ok(Person {
            name: name.to_string(),
            class: class.to_string(),
            phone: phone.map(str::to_string),
            owed,
        })
    }

    pub fn from_entry(entry: &PersonEntry) -> Result<Self> {
        let owed = match &entry.owed {
            OwedEntry::Text(text) => text.parse()?,
            OwedEntry::Number(number) => number.to_string().parse()?,
        };
        Self::new(&entry.name, &entry.class, entry.phone.as_deref(), owed)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn owed(&self) -> MoneyOwed {
        self.owed
    }

    /// Two entries describe the same student when their names match.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }

    pub fn compare_by_name_asc(&self, other: &Person) -> Ordering {
        self.name.cmp(&other.name)
    }

    pub fn compare_by_name_desc(&self, other: &Person) -> Ordering {
        other.name.cmp(&self.name)
    }

    pub fn compare_by_class_asc(&self, other: &Person) -> Ordering {
        self.class.cmp(&other.class)
    }

    pub fn compare_by_class_desc(&self, other: &Person) -> Ordering {
        other.class.cmp(&self.class)
    }

    pub fn compare_by_owed_asc(&self, other: &Person) -> Ordering {
        self.owed.cmp(&other.owed)
    }

    pub fn compare_by_owed_desc(&self, other: &Person) -> Ordering {
        other.owed.cmp(&self.owed)
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name(), self.class())?;
        if let Some(phone) = self.phone() {
            write!(f, " Phone: {}", phone)?;
        }
        write!(f, " Owes: {}", self.owed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owed(s: &str) -> MoneyOwed {
        s.parse().unwrap()
    }

    #[test]
    fn parses_amounts() {
        assert_eq!(owed("12").cents(), 1200);
        assert_eq!(owed("12.5").cents(), 1250);
        assert_eq!(owed("$12.05").cents(), 1205);
        assert_eq!(owed(" 0.99 ").cents(), 99);
        assert!("-1".parse::<MoneyOwed>().is_err());
        assert!("1.234".parse::<MoneyOwed>().is_err());
        assert!("abc".parse::<MoneyOwed>().is_err());
        assert!("".parse::<MoneyOwed>().is_err());
    }

    #[test]
    fn displays_amount_with_cents() {
        assert_eq!(MoneyOwed::from_cents(1205).to_string(), "$12.05");
        assert_eq!(MoneyOwed::from_cents(0).to_string(), "$0.00");
    }

    #[test]
    fn validates_fields() {
        assert!(Person::new("Alex Yeoh", "Sec 3", Some("87438807"), owed("1")).is_ok());
        assert!(Person::new("", "Sec 3", None, owed("1")).is_err());
        assert!(Person::new("Alex  Yeoh", "Sec 3", None, owed("1")).is_err());
        assert!(Person::new("Alex*", "Sec 3", None, owed("1")).is_err());
        assert!(Person::new("Alex", " ", None, owed("1")).is_err());
        assert!(Person::new("Alex", "Sec 3", Some("12"), owed("1")).is_err());
        assert!(Person::new("Alex", "Sec 3", Some("12a45"), owed("1")).is_err());
    }

    #[test]
    fn blank_phone_is_absent() {
        let person = Person::new("Alex", "Sec 3", Some("  "), owed("1")).unwrap();
        assert_eq!(person.phone(), None);
    }

    #[test]
    fn reads_entry_with_numeric_amount() {
        let entry: PersonEntry =
            serde_json::from_str(r#"{"name": "Bernice Yu", "class": "Sec 2", "owed": 7.5}"#).unwrap();
        let person = Person::from_entry(&entry).unwrap();
        assert_eq!(person.owed().cents(), 750);
        assert_eq!(person.phone(), None);
    }

    #[test]
    fn name_comparison_is_case_sensitive() {
        let upper = Person::new("Zed", "A", None, owed("1")).unwrap();
        let lower = Person::new("alice", "A", None, owed("1")).unwrap();
        assert_eq!(upper.compare_by_name_asc(&lower), Ordering::Less);
        assert_eq!(upper.compare_by_name_desc(&lower), Ordering::Greater);
    }

    #[test]
    fn owed_compares_numerically() {
        let small = Person::new("A", "X", None, owed("9")).unwrap();
        let big = Person::new("B", "X", None, owed("10")).unwrap();
        assert_eq!(small.compare_by_owed_asc(&big), Ordering::Less);
        assert_eq!(small.compare_by_owed_desc(&big), Ordering::Greater);
        assert_eq!(small.compare_by_class_asc(&big), Ordering::Equal);
    }

    #[test]
    fn display_lists_attributes() {
        let person = Person::new("Alex Yeoh", "Sec 3", Some("87438807"), owed("12.5")).unwrap();
        assert_eq!(person.to_string(), "Alex Yeoh [Sec 3] Phone: 87438807 Owes: $12.50");
    }
}
