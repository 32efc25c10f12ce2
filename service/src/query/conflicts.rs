//! [`Query`] for [`Conflicts`] of a leave [`Request`].
//!
//! [`Request`]: leave::Request

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{leave, Employee},
    infra::{database, Database},
    read::Conflicts,
    Query, Service,
};

/// [`Query`] for approved leaves of other [`Employee`]s overlapping a leave
/// [`Request`].
///
/// [`None`] is returned for unknown leave [`Request`]s.
///
/// [`Request`]: leave::Request
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConflictsOf {
    /// ID of the inspected leave [`Request`].
    ///
    /// [`Request`]: leave::Request
    pub leave_id: leave::Id,
}

impl<Db> Query<ConflictsOf> for Service<Db>
where
    Db: Database<
            Select<By<Option<leave::Request>, leave::Id>>,
            Ok = Option<leave::Request>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Employee>, ()>>,
            Ok = Vec<Employee>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<leave::Request>, ()>>,
            Ok = Vec<leave::Request>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Option<Conflicts>;
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        ConflictsOf { leave_id }: ConflictsOf,
    ) -> Result<Self::Ok, Self::Err> {
        let Some(inspected) = self
            .database()
            .execute(Select(By::<Option<leave::Request>, _>::new(leave_id)))
            .map_err(tracerr::wrap!())?
        else {
            return Ok(None);
        };

        let employees = self
            .database()
            .execute(Select(By::<Vec<Employee>, _>::new(())))
            .map_err(tracerr::wrap!())?;
        let requests = self
            .database()
            .execute(Select(By::<Vec<leave::Request>, _>::new(())))
            .map_err(tracerr::wrap!())?;

        Ok(Some(Conflicts::find(&inspected, &employees, &requests)))
    }
}
