use std::cmp::Ordering;
use std::fmt;

use strum::{Display, EnumIter, EnumString};

use crate::person::Person;

/// Attribute of a student used as the sort key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Field {
    Name,
    Class,
    Owed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

type Compare = fn(&Person, &Person) -> Ordering;

/// A resolved comparison over two students.
///
/// Rules are compared by the (field, direction) pair they were resolved
/// to, not by the address of the comparison function.
#[derive(Clone, Copy)]
pub struct OrderingRule {
    field: Field,
    direction: Direction,
    compare: Compare,
}

impl OrderingRule {
    fn new(field: Field, direction: Direction, compare: Compare) -> Self {
        OrderingRule { field, direction, compare }
    }

    pub fn compare(&self, a: &Person, b: &Person) -> Ordering {
        (self.compare)(a, b)
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl PartialEq for OrderingRule {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.direction == other.direction
    }
}

impl Eq for OrderingRule {}

impl fmt::Debug for OrderingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderingRule")
            .field("field", &self.field)
            .field("direction", &self.direction)
            .finish()
    }
}

impl Default for OrderingRule {
    fn default() -> Self {
        OrderingRule::new(Field::Name, Direction::Asc, Person::compare_by_name_asc)
    }
}

pub fn resolve(field: Field, direction: Direction) -> OrderingRule {
    let compare: Compare = match (field, direction) {
        (Field::Name, Direction::Asc) => Person::compare_by_name_asc,
        (Field::Name, Direction::Desc) => Person::compare_by_name_desc,
        (Field::Class, Direction::Asc) => Person::compare_by_class_asc,
        (Field::Class, Direction::Desc) => Person::compare_by_class_desc,
        (Field::Owed, Direction::Asc) => Person::compare_by_owed_asc,
        (Field::Owed, Direction::Desc) => Person::compare_by_owed_desc,
    };
    OrderingRule::new(field, direction, compare)
}

/// Like [`resolve`], but an unrecognized field silently sorts by name
/// ascending, whatever the direction asked for.
pub fn resolve_or_default(field: Option<Field>, direction: Direction) -> OrderingRule {
    match field {
        Some(field) => resolve(field, direction),
        // intentional: unknown fields never fail, they fall back to name asc
        None => OrderingRule::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn student(name: &str, class: &str, owed: u64) -> Person {
        Person::new(name, class, None, crate::person::MoneyOwed::from_cents(owed)).unwrap()
    }

    fn students() -> Vec<Person> {
        vec![
            student("Charlotte Oliveiro", "Sec 1", 1500),
            student("Alex Yeoh", "Sec 4", 0),
            student("David Li", "Sec 2", 99),
            student("Bernice Yu", "Sec 3", 12050),
            student("Irfan Ibrahim", "JC 1", 4000),
        ]
    }

    fn sorted(rule: &OrderingRule) -> Vec<String> {
        let mut persons = students();
        persons.sort_by(|a, b| rule.compare(a, b));
        persons.iter().map(|p| p.name().to_string()).collect()
    }

    #[test]
    fn descending_is_reverse_of_ascending() {
        for field in Field::iter() {
            let asc = sorted(&resolve(field, Direction::Asc));
            let mut desc = sorted(&resolve(field, Direction::Desc));
            desc.reverse();
            assert_eq!(asc, desc, "field {}", field);
        }
    }

    #[test]
    fn resolves_each_field() {
        assert_eq!(sorted(&resolve(Field::Name, Direction::Asc))[0], "Alex Yeoh");
        assert_eq!(sorted(&resolve(Field::Class, Direction::Asc))[0], "Irfan Ibrahim");
        assert_eq!(sorted(&resolve(Field::Owed, Direction::Desc))[0], "Bernice Yu");
    }

    #[test]
    fn rule_remembers_its_key() {
        let rule = resolve(Field::Owed, Direction::Desc);
        assert_eq!(rule.field(), Field::Owed);
        assert_eq!(rule.direction(), Direction::Desc);
    }

    #[test]
    fn rules_compare_by_key() {
        assert_eq!(resolve(Field::Name, Direction::Asc), resolve(Field::Name, Direction::Asc));
        assert_ne!(resolve(Field::Name, Direction::Asc), resolve(Field::Name, Direction::Desc));
        assert_ne!(resolve(Field::Name, Direction::Asc), resolve(Field::Class, Direction::Asc));
    }

    #[test]
    fn unknown_field_falls_back_to_name_ascending() {
        let rule = resolve_or_default(None, Direction::Desc);
        assert_eq!(rule, resolve(Field::Name, Direction::Asc));
        assert_eq!(sorted(&rule)[0], "Alex Yeoh");
        assert_eq!(resolve_or_default(Some(Field::Owed), Direction::Desc), resolve(Field::Owed, Direction::Desc));
    }

    #[test]
    fn keywords_ignore_case() {
        assert_eq!("owed".parse::<Field>().unwrap(), Field::Owed);
        assert_eq!("CLASS".parse::<Field>().unwrap(), Field::Class);
        assert_eq!("Desc".parse::<Direction>().unwrap(), Direction::Desc);
        assert!("age".parse::<Field>().is_err());
        assert!("up".parse::<Direction>().is_err());
        assert_eq!(Field::Owed.to_string(), "OWED");
    }
}
