use crate::cli::parser::Commands;
use crate::core::add::{AddLogic, NewEntry};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::attachment::Attachment;
use crate::models::department::Department;
use crate::models::metrics::Metrics;
use crate::models::status::Status;
use crate::utils::date;

/// Record a worklog entry.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        owner,
        role,
        title,
        details,
        status,
        project,
        project_code,
        blockers,
        plan,
        reach,
        engage,
        convert,
        budget,
        attach,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        //
        // 2. Parse department label
        //
        let role_final = Department::from_label(role)
            .ok_or_else(|| AppError::InvalidRole(role.to_string()))?;

        //
        // 3. Parse status (default comes from the config file)
        //
        let status_raw = status.as_deref().unwrap_or(&cfg.default_status);
        let status_final = Status::from_label(status_raw)
            .ok_or_else(|| AppError::InvalidStatus(status_raw.to_string()))?;

        //
        // 4. Metrics: any flag present → record exists, missing fields are 0
        //
        let metrics_final = parse_metrics(*reach, *engage, *convert, *budget)?;

        //
        // 5. Attachments (LABEL=URL, order preserved)
        //
        let attachments_final = parse_attachments(attach)?;

        //
        // 6. Open DB and execute logic
        //
        let mut pool = DbPool::new(&cfg.database)?;

        AddLogic::apply(
            &mut pool,
            &NewEntry {
                date: d,
                owner: owner.clone(),
                role: role_final,
                project: project.clone(),
                project_code: project_code.clone(),
                title: title.clone(),
                details: details.clone().unwrap_or_default(),
                status: status_final,
                blockers: blockers.clone().unwrap_or_default(),
                plan_tomorrow: plan.clone().unwrap_or_default(),
                metrics: metrics_final,
                attachments: attachments_final,
            },
        )?;
    }

    Ok(())
}

fn parse_metrics(
    reach: Option<i64>,
    engage: Option<i64>,
    convert: Option<i64>,
    budget: Option<i64>,
) -> AppResult<Option<Metrics>> {
    if reach.is_none() && engage.is_none() && convert.is_none() && budget.is_none() {
        return Ok(None);
    }

    for (name, value) in [
        ("reach", reach),
        ("engage", engage),
        ("convert", convert),
        ("budget", budget),
    ] {
        if let Some(v) = value
            && v < 0
        {
            return Err(AppError::InvalidMetric(format!("{name} = {v}")));
        }
    }

    Ok(Some(Metrics {
        reach: reach.unwrap_or(0),
        engage: engage.unwrap_or(0),
        convert: convert.unwrap_or(0),
        budget: budget.unwrap_or(0),
    }))
}

fn parse_attachments(raw: &[String]) -> AppResult<Vec<Attachment>> {
    let mut out = Vec::with_capacity(raw.len());

    for item in raw {
        let (label, url) = item
            .split_once('=')
            .ok_or_else(|| AppError::InvalidAttachment(item.clone()))?;

        if label.trim().is_empty() || url.trim().is_empty() {
            return Err(AppError::InvalidAttachment(item.clone()));
        }

        out.push(Attachment {
            label: label.trim().to_string(),
            url: url.trim().to_string(),
        });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_metric_flag_means_no_record() {
        assert_eq!(parse_metrics(None, None, None, None).unwrap(), None);
    }

    #[test]
    fn partial_metric_flags_default_to_zero() {
        let m = parse_metrics(Some(100), None, None, None).unwrap().unwrap();
        assert_eq!(m.reach, 100);
        assert_eq!(m.engage, 0);
        assert_eq!(m.convert, 0);
        assert_eq!(m.budget, 0);
    }

    #[test]
    fn negative_metric_is_rejected() {
        let err = parse_metrics(None, Some(-1), None, None).unwrap_err();
        assert!(matches!(err, AppError::InvalidMetric(_)));
    }

    #[test]
    fn attachment_needs_label_and_url() {
        assert!(parse_attachments(&["brief=https://e.co/x".to_string()]).is_ok());
        assert!(parse_attachments(&["no-separator".to_string()]).is_err());
        assert!(parse_attachments(&["=https://e.co/x".to_string()]).is_err());
    }
}
