//! The numbered menu loop and its actions.

use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use roster::{Employee, Role, Roster, Sequence};
use tracing::instrument;

use super::{prompt, terminal::Colorize};

const MENU: &str = "\
Menu:
1. Add an integer to the list
2. Remove an integer from the list
3. Display the list
4. Add a professional employee
5. Add a nonprofessional employee
6. Display employee information
7. Exit";

/// One interactive session: the sequence and roster being edited, plus the
/// streams driving the menu.
pub struct Session<R, W> {
    reader: R,
    writer: W,
    sequence: Sequence<i64>,
    roster: Roster,
}

/// Whether the loop continues after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    AddInteger,
    RemoveInteger,
    DisplayList,
    AddProfessional,
    AddNonprofessional,
    DisplayEmployee,
    Exit,
}

struct UnknownChoice;

impl FromStr for Choice {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Self::AddInteger),
            "2" => Ok(Self::RemoveInteger),
            "3" => Ok(Self::DisplayList),
            "4" => Ok(Self::AddProfessional),
            "5" => Ok(Self::AddNonprofessional),
            "6" => Ok(Self::DisplayEmployee),
            "7" => Ok(Self::Exit),
            _ => Err(UnknownChoice),
        }
    }
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with an empty sequence and roster.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            sequence: Sequence::new(),
            roster: Roster::new(),
        }
    }

    /// Shows the menu and dispatches choices until exit or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            writeln!(self.writer, "{MENU}")?;
            write!(self.writer, "Enter your choice: ")?;
            self.writer.flush()?;

            let Some(line) = prompt::read_line(&mut self.reader)? else {
                break;
            };
            let flow = match line.parse() {
                Ok(choice) => self.dispatch(choice)?,
                Err(UnknownChoice) => {
                    writeln!(self.writer, "{}", "Invalid choice. Try again.".error())?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: Choice) -> anyhow::Result<Flow> {
        match choice {
            Choice::AddInteger => self.add_integer(),
            Choice::RemoveInteger => self.remove_integer(),
            Choice::DisplayList => self.display_list(),
            Choice::AddProfessional => self.add_professional(),
            Choice::AddNonprofessional => self.add_nonprofessional(),
            Choice::DisplayEmployee => self.display_employee(),
            Choice::Exit => Ok(Flow::Exit),
        }
    }

    #[instrument(level = "debug", skip(self))]
    fn add_integer(&mut self) -> anyhow::Result<Flow> {
        let Some(value) = prompt::parsed(
            &mut self.reader,
            &mut self.writer,
            "Enter an integer to add to the list",
        )?
        else {
            return Ok(Flow::Exit);
        };
        self.sequence.push_back(value);
        Ok(Flow::Continue)
    }

    #[instrument(level = "debug", skip(self))]
    fn remove_integer(&mut self) -> anyhow::Result<Flow> {
        let Some(index) = prompt::parsed(
            &mut self.reader,
            &mut self.writer,
            "Enter the index of the integer to remove",
        )?
        else {
            return Ok(Flow::Exit);
        };
        if self.sequence.remove(index) {
            writeln!(self.writer, "{}", "Integer removed successfully.".success())?;
        } else {
            writeln!(self.writer, "{}", "Invalid index or list is empty.".error())?;
        }
        Ok(Flow::Continue)
    }

    #[instrument(level = "debug", skip(self))]
    fn display_list(&mut self) -> anyhow::Result<Flow> {
        let rendered = self
            .sequence
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(self.writer, "List contents: {rendered}")?;
        Ok(Flow::Continue)
    }

    #[instrument(level = "debug", skip(self))]
    fn add_professional(&mut self) -> anyhow::Result<Flow> {
        writeln!(self.writer, "Enter professional employee details:")?;
        let Some(name) = prompt::name(&mut self.reader, &mut self.writer)? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = prompt::parsed(&mut self.reader, &mut self.writer, "ID")? else {
            return Ok(Flow::Exit);
        };
        let Some(monthly_salary) =
            prompt::parsed(&mut self.reader, &mut self.writer, "Monthly salary")?
        else {
            return Ok(Flow::Exit);
        };
        let Some(vacation_days) =
            prompt::parsed(&mut self.reader, &mut self.writer, "Vacation days")?
        else {
            return Ok(Flow::Exit);
        };

        self.roster.add(Employee::new(
            name,
            id,
            Role::Professional {
                monthly_salary,
                vacation_days,
            },
        ));
        Ok(Flow::Continue)
    }

    #[instrument(level = "debug", skip(self))]
    fn add_nonprofessional(&mut self) -> anyhow::Result<Flow> {
        writeln!(self.writer, "Enter nonprofessional employee details:")?;
        let Some(name) = prompt::name(&mut self.reader, &mut self.writer)? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = prompt::parsed(&mut self.reader, &mut self.writer, "ID")? else {
            return Ok(Flow::Exit);
        };
        let Some(hourly_rate) =
            prompt::parsed(&mut self.reader, &mut self.writer, "Hourly rate")?
        else {
            return Ok(Flow::Exit);
        };
        let Some(hours_worked) =
            prompt::parsed(&mut self.reader, &mut self.writer, "Hours worked")?
        else {
            return Ok(Flow::Exit);
        };

        self.roster.add(Employee::new(
            name,
            id,
            Role::Nonprofessional {
                hourly_rate,
                hours_worked,
            },
        ));
        Ok(Flow::Continue)
    }

    #[instrument(level = "debug", skip(self))]
    fn display_employee(&mut self) -> anyhow::Result<Flow> {
        let Some(id) = prompt::parsed(
            &mut self.reader,
            &mut self.writer,
            "Enter employee ID to display information",
        )?
        else {
            return Ok(Flow::Exit);
        };
        match self.roster.find_by_id(id) {
            Some(employee) => writeln!(self.writer, "{employee}")?,
            None => writeln!(self.writer, "{}", "Employee not found.".error())?,
        }
        Ok(Flow::Continue)
    }
}
