use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::{debug, info};
use serde::Deserialize;

use crate::order::OrderingRule;
use crate::person::{MoneyOwed, Person, PersonEntry};

/// What commands are allowed to do with the managed students.
pub trait Model {
    fn persons(&self) -> &[Person];

    /// Reorders every managed student in place. Students that compare
    /// equal under `rule` keep their relative order.
    fn sort_persons(&mut self, rule: &OrderingRule);
}

#[derive(Deserialize, Debug)]
struct Roster {
    students: Vec<PersonEntry>,
}

/// In-memory store of the students loaded for this session.
#[derive(Debug, Default)]
pub struct ModelManager {
    persons: Vec<Person>,
}

impl ModelManager {
    pub fn new(persons: Vec<Person>) -> Result<Self> {
        for (i, person) in persons.iter().enumerate() {
            if persons[..i].iter().any(|p| p.is_same_person(person)) {
                bail!("Roster lists {} more than once", person.name());
            }
        }
        Ok(ModelManager { persons })
    }

    pub fn from_roster_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read roster {:?}", path))?;
        let model = Self::from_roster_str(&content)
            .with_context(|| format!("Invalid roster {:?}", path))?;
        info!("Loaded {} students from {:?}", model.persons.len(), path);
        Ok(model)
    }

    pub fn from_roster_str(content: &str) -> Result<Self> {
        let roster: Roster = serde_json::from_str(content)?;
        let persons = roster
            .students
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                Person::from_entry(entry).with_context(|| format!("Student #{} is invalid", i + 1))
            })
            .collect::<Result<Vec<Person>>>()?;
        Self::new(persons)
    }

    pub fn with_sample_data() -> Result<Self> {
        debug!("No roster configured, using sample students");
        Self::new(sample_persons()?)
    }
}

impl Model for ModelManager {
    fn persons(&self) -> &[Person] {
        &self.persons
    }

    fn sort_persons(&mut self, rule: &OrderingRule) {
        debug!("Sorting {} students with {:?}", self.persons.len(), rule);
        // slice::sort_by is stable
        self.persons.sort_by(|a, b| rule.compare(a, b));
    }
}

fn sample_persons() -> Result<Vec<Person>> {
    [
        ("Alex Yeoh", "Sec 3 Math", Some("87438807"), 1250),
        ("Bernice Yu", "Sec 2 Science", Some("99272758"), 0),
        ("Charlotte Oliveiro", "Sec 3 Math", Some("93210283"), 4000),
        ("David Li", "JC 1 Physics", Some("91031282"), 550),
        ("Irfan Ibrahim", "Sec 2 Science", Some("92492021"), 12000),
        ("Roy Balakrishnan", "JC 1 Physics", None, 550),
    ]
    .into_iter()
    .map(|(name, class, phone, cents)| Person::new(name, class, phone, MoneyOwed::from_cents(cents)))
    .collect()
}
