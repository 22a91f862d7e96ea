//! An owning, insertion-ordered store of employee records.

use crate::domain::Employee;

/// An owning, insertion-ordered store of employee records.
///
/// Ids are not enforced to be unique; [`find_by_id`](Self::find_by_id)
/// returns the earliest matching record.
#[derive(Debug, Default)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            employees: Vec::new(),
        }
    }

    /// Returns the number of employees in the roster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns `true` if the roster holds no employees.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Appends an employee record.
    pub fn add(&mut self, employee: Employee) {
        tracing::debug!(id = employee.id(), name = %employee.name(), "added employee");
        self.employees.push(employee);
    }

    /// Finds the first employee with the given id.
    ///
    /// Linear scan in insertion order; duplicate ids are permitted and the
    /// earliest entry wins.
    #[must_use]
    pub fn find_by_id(&self, id: u32) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id() == id)
    }

    /// Iterates over the employees in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    fn employee(name: &str, id: u32, monthly_salary: f64) -> Employee {
        Employee::new(
            name.parse().unwrap(),
            id,
            Role::Professional {
                monthly_salary,
                vacation_days: 10,
            },
        )
    }

    #[test]
    fn new_roster_is_empty() {
        let roster = Roster::new();
        assert!(roster.is_empty());
        assert_eq!(roster.len(), 0);
        assert_eq!(roster.find_by_id(1), None);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut roster = Roster::new();
        roster.add(employee("Ann", 1, 4000.0));
        roster.add(employee("Bo", 2, 3000.0));

        let names: Vec<&str> = roster.iter().map(|e| e.name().as_str()).collect();
        assert_eq!(names, ["Ann", "Bo"]);
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn find_by_id_returns_match() {
        let mut roster = Roster::new();
        roster.add(employee("Ann", 1, 4000.0));
        roster.add(employee("Bo", 2, 3000.0));

        let found = roster.find_by_id(2).unwrap();
        assert_eq!(found.name().as_str(), "Bo");
    }

    #[test]
    fn duplicate_ids_resolve_to_earliest_entry() {
        let mut roster = Roster::new();
        roster.add(employee("First", 7, 4000.0));
        roster.add(employee("Second", 7, 5000.0));

        let found = roster.find_by_id(7).unwrap();
        assert_eq!(found.name().as_str(), "First");
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn find_by_id_missing_returns_none() {
        let mut roster = Roster::new();
        roster.add(employee("Ann", 1, 4000.0));
        assert_eq!(roster.find_by_id(99), None);
    }
}
