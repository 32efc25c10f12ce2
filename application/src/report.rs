//! Plain text rendering of [`Service`] outputs.
//!
//! Rows are tab-separated.
//!
//! [`Service`]: service::Service

use std::io;

use itertools::Itertools as _;
use service::{
    domain::{leave, Employee},
    query::report::analytics,
    read::{Admission, Balance, Conflicts, Estimate},
};
use time::Date;

/// Renders the provided [`Employee`]s, one per row.
///
/// # Errors
///
/// Errors if writing to the `out`put fails.
pub fn employees(
    out: &mut impl io::Write,
    employees: &[Employee],
) -> io::Result<()> {
    for e in employees {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}",
            e.id, e.name, e.email, e.grade, e.department, e.first_day_of_work,
        )?;
    }
    Ok(())
}

/// Renders the [`Balance`] of an [`Employee`] as of the provided [`Date`].
///
/// # Errors
///
/// Errors if writing to the `out`put fails.
pub fn balance(
    out: &mut impl io::Write,
    employee: Option<&Employee>,
    balance: &Balance,
    as_of: Date,
) -> io::Result<()> {
    match employee {
        Some(e) => writeln!(out, "{} ({}) as of {as_of}", e.name, e.grade)?,
        None => writeln!(out, "Unknown employee as of {as_of}")?,
    }
    writeln!(out, "Annual entitlement\t{}", balance.annual_entitlement)?;
    writeln!(out, "Annual used\t{}", balance.annual_used)?;
    writeln!(out, "Annual remaining\t{}", balance.annual_remaining)?;
    writeln!(out, "Non-annual used\t{}", balance.non_annual_used)
}

/// Renders the provided leave [`Request`]s, one per row.
///
/// # Errors
///
/// Errors if writing to the `out`put fails.
///
/// [`Request`]: leave::Request
pub fn leaves(
    out: &mut impl io::Write,
    requests: &[leave::Request],
) -> io::Result<()> {
    for r in requests {
        writeln!(out, "{}", request(r))?;
    }
    Ok(())
}

/// Renders the [`Admission`] of a submitted leave [`Request`].
///
/// # Errors
///
/// Errors if writing to the `out`put fails.
///
/// [`Request`]: leave::Request
pub fn admission(
    out: &mut impl io::Write,
    submitted: &leave::Request,
    admission: &Admission,
) -> io::Result<()> {
    writeln!(out, "{}", request(submitted))?;
    writeln!(out, "Requested days\t{}", admission.requested)?;
    writeln!(
        out,
        "Projected remaining\t{}",
        admission.projected_remaining,
    )?;
    if !admission.sufficient_balance {
        writeln!(out, "Warning\tinsufficient annual leave balance")?;
    }
    if admission.overlapping {
        writeln!(out, "Warning\toverlaps an approved leave")?;
    }
    Ok(())
}

/// Renders the [`Conflicts`] of a leave [`Request`].
///
/// # Errors
///
/// Errors if writing to the `out`put fails.
///
/// [`Request`]: leave::Request
pub fn conflicts(
    out: &mut impl io::Write,
    conflicts: &Conflicts,
) -> io::Result<()> {
    for (title, found) in [
        ("Same department", &conflicts.same_department),
        ("Other departments", &conflicts.other_departments),
    ] {
        writeln!(out, "{title}: {}", found.len())?;
        for c in found {
            writeln!(
                out,
                "\t{}\t{}\t{}\t{}",
                c.employee.name,
                c.employee.department,
                c.request.period,
                c.request.kind,
            )?;
        }
    }
    Ok(())
}

/// Renders the [`Estimate`] of a future annual leave balance.
///
/// # Errors
///
/// Errors if writing to the `out`put fails.
pub fn estimate(
    out: &mut impl io::Write,
    estimate: &Estimate,
) -> io::Result<()> {
    writeln!(
        out,
        "Estimated annual remaining on {}\t{}",
        estimate.target, estimate.balance,
    )?;
    writeln!(out, "Public holidays until then: {}", estimate.holidays.len())?;
    for h in &estimate.holidays {
        writeln!(out, "\t{h}")?;
    }
    Ok(())
}

/// Renders the [`analytics::Report`].
///
/// # Errors
///
/// Errors if writing to the `out`put fails.
pub fn analytics(
    out: &mut impl io::Write,
    report: &analytics::Report,
) -> io::Result<()> {
    writeln!(out, "Utilization (%)")?;
    for u in &report.utilization {
        writeln!(out, "\t{}\t{}", u.name, u.rate)?;
    }

    writeln!(out, "Approved days by type")?;
    for t in &report.by_type {
        writeln!(out, "\t{}\t{}", t.kind, t.days)?;
    }

    writeln!(out, "Approved days by month")?;
    for m in &report.monthly {
        writeln!(
            out,
            "\t{:02}/{:02}\t{}",
            u8::from(m.month),
            m.year.rem_euclid(100),
            m.days,
        )?;
    }

    writeln!(out, "Averages by grade (used / entitlement)")?;
    for g in &report.by_grade {
        writeln!(
            out,
            "\t{}\t{} / {}",
            g.grade, g.avg_used, g.avg_entitlement,
        )?;
    }
    Ok(())
}

/// Renders a single leave [`Request`] row.
///
/// [`Request`]: leave::Request
fn request(r: &leave::Request) -> String {
    [
        r.id.to_string(),
        r.period.to_string(),
        r.kind.to_string(),
        r.duration.to_string(),
        r.status.to_string(),
        r.notes.as_ref().map(ToString::to_string).unwrap_or_default(),
        r.reject_reason
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default(),
    ]
    .iter()
    .join("\t")
}
