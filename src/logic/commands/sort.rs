use anyhow::Result;

use crate::logic::commands::{Command, CommandResult};
use crate::model::Model;
use crate::order::{self, Direction, Field, OrderingRule};

pub const COMMAND_WORD: &str = "sort";

pub const MESSAGE_SUCCESS: &str = "Sorted all students with the given order";
pub const MESSAGE_USAGE: &str = "sort: Sorts the students by the given argument type and order. \
Parameters: ARGUMENT ORDER\n\
ARGUMENT can be either 'NAME', 'CLASS' and 'OWED'\n\
ORDER can be either 'ASC' OR 'DESC'\n\
Example: sort NAME ASC";
pub const MESSAGE_UNKNOWN_ORDER_KEYWORD: &str = "The order of Sort Command should be 'ASC' or 'DESC' or left empty.";
pub const MESSAGE_UNKNOWN_TYPE_KEYWORD: &str = "You may sort by 'name', 'class' or 'owed' amount, \
followed by 'asc' or 'desc' order.\n\
Example: sort owed asc";

/// Reorders every student by one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortCommand {
    rule: OrderingRule,
}

impl SortCommand {
    pub fn new(field: Field, direction: Direction) -> Self {
        SortCommand {
            rule: order::resolve(field, direction),
        }
    }

    pub fn rule(&self) -> &OrderingRule {
        &self.rule
    }
}

impl Command for SortCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult> {
        model.sort_persons(&self.rule);
        Ok(CommandResult::new(MESSAGE_SUCCESS))
    }

    fn lists_students(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelManager;
    use crate::person::Person;

    /// Records every rule it is asked to sort with, and nothing else.
    #[derive(Default)]
    struct ModelStub {
        persons: Vec<Person>,
        rules: Vec<OrderingRule>,
    }

    impl Model for ModelStub {
        fn persons(&self) -> &[Person] {
            &self.persons
        }

        fn sort_persons(&mut self, rule: &OrderingRule) {
            self.rules.push(*rule);
        }
    }

    #[test]
    fn execute_hands_rule_to_model() {
        let mut model = ModelStub::default();
        let result = SortCommand::new(Field::Owed, Direction::Desc).execute(&mut model).unwrap();
        assert_eq!(result, CommandResult::new(MESSAGE_SUCCESS));
        assert_eq!(model.rules, vec![order::resolve(Field::Owed, Direction::Desc)]);
    }

    #[test]
    fn execute_orders_model() {
        let mut model = ModelManager::with_sample_data().unwrap();
        let command = SortCommand::new(Field::Name, Direction::Desc);
        let result = command.execute(&mut model).unwrap();
        assert_eq!(result.feedback, MESSAGE_SUCCESS);
        assert!(!result.exit);
        assert!(model
            .persons()
            .windows(2)
            .all(|pair| command.rule().compare(&pair[0], &pair[1]).is_le()));
        assert_eq!(model.persons()[0].name(), "Roy Balakrishnan");
    }

    #[test]
    fn equality_follows_rule() {
        let name_asc = SortCommand::new(Field::Name, Direction::Asc);
        assert_eq!(name_asc, SortCommand::new(Field::Name, Direction::Asc));
        assert_ne!(name_asc, SortCommand::new(Field::Name, Direction::Desc));
        assert_ne!(name_asc, SortCommand::new(Field::Owed, Direction::Asc));
    }
}
