//! Leave [`Request`]-related [`Database`] implementations.
//!
//! [`Request`]: leave::Request

use common::operations::{By, Delete, Insert, Modify, Select};
use tracerr::Traced;

use crate::{
    domain::{employee, leave},
    infra::{
        database::{self, Memory},
        Database,
    },
    read::leave::Pending,
};

impl Database<Insert<leave::Request>> for Memory {
    type Ok = ();
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        Insert(request): Insert<leave::Request>,
    ) -> Result<Self::Ok, Self::Err> {
        tracing::debug!(
            leave_id = %request.id,
            employee_id = %request.employee_id,
            status = %request.status,
            "storing leave `Request`",
        );
        let mut state = self.write().map_err(tracerr::wrap!())?;
        super::upsert(&mut state.leaves, request, |r| r.id);
        Ok(())
    }
}

impl Database<Select<By<Option<leave::Request>, leave::Id>>> for Memory {
    type Ok = Option<leave::Request>;
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        Select(by): Select<By<Option<leave::Request>, leave::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .read()
            .map_err(tracerr::wrap!())?
            .leaves
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }
}

impl Database<Select<By<Vec<leave::Request>, employee::Id>>> for Memory {
    type Ok = Vec<leave::Request>;
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        Select(by): Select<By<Vec<leave::Request>, employee::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let employee_id = by.into_inner();
        Ok(self
            .read()
            .map_err(tracerr::wrap!())?
            .leaves
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect())
    }
}

impl Database<Select<By<Vec<leave::Request>, leave::Status>>> for Memory {
    type Ok = Vec<leave::Request>;
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        Select(by): Select<By<Vec<leave::Request>, leave::Status>>,
    ) -> Result<Self::Ok, Self::Err> {
        let status = by.into_inner();
        Ok(self
            .read()
            .map_err(tracerr::wrap!())?
            .leaves
            .iter()
            .filter(|r| r.status == status)
            .cloned()
            .collect())
    }
}

impl Database<Select<By<Vec<leave::Request>, ()>>> for Memory {
    type Ok = Vec<leave::Request>;
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        _: Select<By<Vec<leave::Request>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.read().map_err(tracerr::wrap!())?.leaves.clone())
    }
}

impl<F, R> Database<Modify<By<leave::Request, leave::Id>, F>> for Memory
where
    F: FnOnce(&mut leave::Request) -> R,
{
    type Ok = Option<R>;
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        Modify(by, modify): Modify<By<leave::Request, leave::Id>, F>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        let mut state = self.write().map_err(tracerr::wrap!())?;
        Ok(state.leaves.iter_mut().find(|r| r.id == id).map(modify))
    }
}

impl Database<Delete<By<Pending<leave::Request>, leave::Id>>> for Memory {
    /// Found leave [`leave::Request`], removed only if it was
    /// [`leave::Status::Pending`].
    type Ok = Option<leave::Request>;
    type Err = Traced<database::Error>;

    fn execute(
        &self,
        Delete(by): Delete<By<Pending<leave::Request>, leave::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        let mut state = self.write().map_err(tracerr::wrap!())?;
        let Some(pos) = state.leaves.iter().position(|r| r.id == id) else {
            return Ok(None);
        };
        if !state.leaves[pos].is_pending() {
            return Ok(Some(state.leaves[pos].clone()));
        }

        tracing::debug!(leave_id = %id, "removing pending leave `Request`");
        Ok(Some(state.leaves.remove(pos)))
    }
}

#[cfg(test)]
mod spec {
    use common::{
        operations::{By, Delete, Insert, Modify, Select},
        DateTime,
    };
    use time::macros::date;

    use crate::{
        domain::{
            employee,
            leave::{self, Decision, Duration, Period, Status, Type},
        },
        infra::{Database as _, Memory},
        read::leave::Pending,
    };

    fn pending(employee_id: employee::Id) -> leave::Request {
        leave::Request {
            id: leave::Id::new(),
            employee_id,
            period: Period::day(date!(2026 - 02 - 02)),
            kind: Type::Personal,
            duration: Duration::HalfDayAm,
            status: Status::Pending,
            submitted_at: DateTime::midnight_of(date!(2026 - 01 - 20)).coerce(),
            notes: None,
            reject_reason: None,
        }
    }

    fn seeded() -> (Memory, [leave::Request; 3]) {
        let (alice, bob) = (employee::Id::new(), employee::Id::new());
        let reqs = [pending(alice), pending(bob), pending(alice)];
        let db = Memory::new();
        for r in &reqs {
            db.execute(Insert(r.clone())).unwrap();
        }
        (db, reqs)
    }

    #[test]
    fn selects_by_employee_and_status() {
        let (db, reqs) = seeded();

        let of_alice = db
            .execute(Select(By::<Vec<leave::Request>, _>::new(
                reqs[0].employee_id,
            )))
            .unwrap();
        assert_eq!(of_alice, [reqs[0].clone(), reqs[2].clone()]);

        let pending = db
            .execute(Select(By::<Vec<leave::Request>, _>::new(
                Status::Pending,
            )))
            .unwrap();
        assert_eq!(pending.len(), 3);

        let all = db
            .execute(Select(By::<Vec<leave::Request>, _>::new(())))
            .unwrap();
        assert_eq!(all, reqs);
    }

    #[test]
    fn modifies_in_place() {
        let (db, reqs) = seeded();

        let decided = db
            .execute(Modify(
                By::<leave::Request, _>::new(reqs[1].id),
                |r: &mut leave::Request| r.decide(Decision::Approve),
            ))
            .unwrap();
        assert_eq!(decided, Some(Ok(())));

        let again = db
            .execute(Modify(
                By::<leave::Request, _>::new(reqs[1].id),
                |r: &mut leave::Request| r.decide(Decision::Reject(None)),
            ))
            .unwrap();
        assert_eq!(again, Some(Err(Status::Approved)));

        let missing = db
            .execute(Modify(
                By::<leave::Request, _>::new(leave::Id::new()),
                |r: &mut leave::Request| r.decide(Decision::Approve),
            ))
            .unwrap();
        assert_eq!(missing, None);

        let all = db
            .execute(Select(By::<Vec<leave::Request>, _>::new(())))
            .unwrap();
        assert_eq!(all[1].status, Status::Approved);
        assert_eq!(all[1].id, reqs[1].id);
    }

    #[test]
    fn deletes_only_pending() {
        let (db, reqs) = seeded();
        _ = db
            .execute(Modify(
                By::<leave::Request, _>::new(reqs[0].id),
                |r: &mut leave::Request| r.decide(Decision::Approve),
            ))
            .unwrap();

        let kept = db
            .execute(Delete(By::<Pending<leave::Request>, _>::new(
                reqs[0].id,
            )))
            .unwrap()
            .unwrap();
        assert_eq!(kept.status, Status::Approved);

        let removed = db
            .execute(Delete(By::<Pending<leave::Request>, _>::new(
                reqs[2].id,
            )))
            .unwrap();
        assert_eq!(removed, Some(reqs[2].clone()));

        let ids = db
            .execute(Select(By::<Vec<leave::Request>, _>::new(())))
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, [reqs[0].id, reqs[1].id]);
    }
}
