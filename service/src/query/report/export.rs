//! [`Export`] definition.

use std::collections::HashMap;

use common::operations::{By, Select};
use itertools::Itertools as _;
use time::Date;
use tracerr::Traced;

use crate::{
    domain::{leave, Employee},
    infra::{database, Database},
    Query, Service,
};

/// Header row of an [`Export`].
pub const HEADERS: [&str; 8] = [
    "Employee Name",
    "Employee Email",
    "Start Date",
    "End Date",
    "Leave Type",
    "Duration",
    "Status",
    "Submitted At",
];

/// [`Query`] exporting all the leave [`Request`]s as CSV.
///
/// [`Request`]: leave::Request
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Export;

impl<Db> Query<Export> for Service<Db>
where
    Db: Database<
            Select<By<Vec<Employee>, ()>>,
            Ok = Vec<Employee>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<leave::Request>, ()>>,
            Ok = Vec<leave::Request>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = String;
    type Err = Traced<database::Error>;

    fn execute(&self, _: Export) -> Result<Self::Ok, Self::Err> {
        let employees = self
            .database()
            .execute(Select(By::<Vec<Employee>, _>::new(())))
            .map_err(tracerr::wrap!())?;
        let requests = self
            .database()
            .execute(Select(By::<Vec<leave::Request>, _>::new(())))
            .map_err(tracerr::wrap!())?;

        Ok(render(&requests, &employees))
    }
}

/// Renders the provided leave [`Request`]s as CSV, one row per [`Request`]
/// in the provided order, preceded by the [`HEADERS`].
///
/// Every field is double-quoted. Rows are separated by `\n` without a
/// trailing one.
///
/// [`Request`]: leave::Request
#[must_use]
pub fn render(requests: &[leave::Request], employees: &[Employee]) -> String {
    let by_id = employees
        .iter()
        .map(|e| (e.id, e))
        .collect::<HashMap<_, _>>();

    let header = HEADERS.iter().copied().map(quote).join(",");
    let rows = requests.iter().map(|r| {
        let (name, email) = by_id.get(&r.employee_id).map_or_else(
            || ("Unknown".to_owned(), String::new()),
            |e| (e.name.to_string(), e.email.to_string()),
        );
        [
            name,
            email,
            r.period.start().to_string(),
            r.period.end().to_string(),
            r.kind.to_string(),
            r.duration.to_string(),
            r.status.to_string(),
            r.submitted_at.date().to_string(),
        ]
        .iter()
        .map(String::as_str)
        .map(quote)
        .join(",")
    });

    std::iter::once(header).chain(rows).join("\n")
}

/// Returns the conventional file name of an [`Export`] made on the provided
/// [`Date`].
#[must_use]
pub fn default_filename(date: Date) -> String {
    format!("leave-data-{date}.csv")
}

/// Double-quotes the provided CSV field, doubling its embedded quotes.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
