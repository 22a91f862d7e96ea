//! Employee records and payroll arithmetic.
//!
//! An [`Employee`] is a name, a numeric id, and a [`Role`] carrying the
//! variant-specific pay terms. The payroll formulas live here so the menu
//! layer only formats.

use std::{fmt, str::FromStr};

use non_empty_string::NonEmptyString;

/// A validated, non-empty employee name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(NonEmptyString);

impl Name {
    /// Creates a new `Name` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidNameError`] if the string is empty.
    pub fn new(s: String) -> Result<Self, InvalidNameError> {
        let non_empty = NonEmptyString::new(s).map_err(|_| InvalidNameError)?;
        Ok(Self(non_empty))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Name {
    type Err = InvalidNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

/// Error returned when an employee name is empty.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("employee name must not be empty")]
pub struct InvalidNameError;

/// Employment terms for an employee.
///
/// The two variants carry the fields their payroll formulas need; all case
/// analysis happens in the [`Employee`] methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Role {
    /// Salaried staff paid monthly with a fixed vacation allowance.
    Professional {
        /// Gross monthly salary, in dollars.
        monthly_salary: f64,
        /// Fixed annual vacation allowance, in days.
        vacation_days: u32,
    },
    /// Hourly staff paid weekly for the hours they work.
    Nonprofessional {
        /// Pay per hour worked, in dollars.
        hourly_rate: f64,
        /// Hours worked per week.
        hours_worked: u32,
    },
}

/// An employee record.
///
/// Ids are plain integers and are not required to be unique; lookups through
/// [`Roster`](crate::Roster) return the earliest match.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    name: Name,
    id: u32,
    role: Role,
}

impl Employee {
    /// Creates a new employee record.
    #[must_use]
    pub const fn new(name: Name, id: u32, role: Role) -> Self {
        Self { name, id, role }
    }

    /// Returns the employee's name.
    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the employee's id.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Pay for one week, in dollars.
    ///
    /// Professionals are paid a quarter of their monthly salary (four pay
    /// weeks to the month); nonprofessionals their hourly rate times the
    /// hours worked.
    #[must_use]
    pub fn weekly_salary(&self) -> f64 {
        match self.role {
            Role::Professional { monthly_salary, .. } => monthly_salary / 4.0,
            Role::Nonprofessional {
                hourly_rate,
                hours_worked,
            } => hourly_rate * f64::from(hours_worked),
        }
    }

    /// Weekly healthcare contribution, in dollars.
    ///
    /// 20% of the monthly salary for professionals, 10% of the weekly salary
    /// for nonprofessionals.
    #[must_use]
    pub fn healthcare_contributions(&self) -> f64 {
        match self.role {
            Role::Professional { monthly_salary, .. } => 0.20 * monthly_salary,
            Role::Nonprofessional { .. } => 0.10 * self.weekly_salary(),
        }
    }

    /// Annual vacation allowance, in days.
    ///
    /// Professionals have a fixed allowance; nonprofessionals accrue one day
    /// per ten hours worked (integer division).
    #[must_use]
    pub const fn vacation_days(&self) -> u32 {
        match self.role {
            Role::Professional { vacation_days, .. } => vacation_days,
            Role::Nonprofessional { hours_worked, .. } => hours_worked / 10,
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "ID: {}", self.id)?;
        match self.role {
            Role::Professional { monthly_salary, .. } => {
                writeln!(f, "Salary: ${monthly_salary} per month")?;
            }
            Role::Nonprofessional {
                hourly_rate,
                hours_worked,
            } => {
                writeln!(f, "Hourly rate: ${hourly_rate} per hour")?;
                writeln!(f, "Hours worked: {hours_worked} hours per week")?;
                writeln!(f, "Salary: ${} per week", self.weekly_salary())?;
            }
        }
        writeln!(
            f,
            "Healthcare contributions: ${} per week",
            self.healthcare_contributions()
        )?;
        write!(f, "Vacation days: {} days per year", self.vacation_days())
    }
}
