//! Cross-field rules for inputs, conditions and predicates

use super::ValidationError;
use super::constraints::{
    check_name, check_opt_description, check_opt_name, check_single_line,
};
use crate::models::catalog::{DatabaseInput, PartitionInput, TableInput};
use crate::models::connection::ConnectionInput;
use crate::models::trigger::{Condition, Predicate};

pub fn validate_database_input(input: &DatabaseInput) -> Result<(), ValidationError> {
    check_name("Name", &input.name)?;
    check_opt_description("Description", input.description.as_ref())?;
    for (key, value) in &input.parameters {
        check_single_line("Parameters", key)?;
        check_single_line("Parameters", value)?;
    }
    Ok(())
}

pub fn validate_table_input(input: &TableInput) -> Result<(), ValidationError> {
    check_name("Name", &input.name)?;
    check_opt_description("Description", input.description.as_ref())?;
    check_opt_name("Owner", input.owner.as_ref())?;
    for key in &input.partition_keys {
        check_name("PartitionKeys", &key.name)?;
    }
    if let Some(sd) = &input.storage_descriptor {
        for column in &sd.columns {
            check_name("Columns", &column.name)?;
        }
    }
    Ok(())
}

pub fn validate_partition_input(input: &PartitionInput) -> Result<(), ValidationError> {
    if input.values.is_empty() {
        return Err(ValidationError::Invalid {
            field: "Values",
            message: "a partition needs at least one key value".to_string(),
        });
    }
    for value in &input.values {
        check_single_line("Values", value)?;
    }
    Ok(())
}

pub fn validate_connection_input(input: &ConnectionInput) -> Result<(), ValidationError> {
    check_name("Name", &input.name)?;
    check_opt_description("Description", input.description.as_ref())?;
    if input.connection_type.is_none() {
        return Err(ValidationError::Invalid {
            field: "ConnectionType",
            message: "a connection type is required".to_string(),
        });
    }
    for criterion in &input.match_criteria {
        check_name("MatchCriteria", criterion)?;
    }
    Ok(())
}

/// A condition watches exactly one job or one crawler.
pub fn validate_condition(condition: &Condition) -> Result<(), ValidationError> {
    let watches_job = condition.job_name.is_some() || condition.state.is_some();
    let watches_crawler = condition.crawler_name.is_some() || condition.crawl_state.is_some();
    if watches_job && watches_crawler {
        return Err(ValidationError::Invalid {
            field: "Conditions",
            message: "a condition cannot name both a job and a crawler".to_string(),
        });
    }
    if !watches_job && !watches_crawler {
        return Err(ValidationError::Invalid {
            field: "Conditions",
            message: "a condition must name a job or a crawler".to_string(),
        });
    }
    if condition.state.is_some() && condition.job_name.is_none() {
        return Err(ValidationError::Invalid {
            field: "Conditions",
            message: "a job-run state requires a job name".to_string(),
        });
    }
    if condition.crawl_state.is_some() && condition.crawler_name.is_none() {
        return Err(ValidationError::Invalid {
            field: "Conditions",
            message: "a crawl state requires a crawler name".to_string(),
        });
    }
    check_opt_name("JobName", condition.job_name.as_ref())?;
    check_opt_name("CrawlerName", condition.crawler_name.as_ref())
}

/// A predicate needs at least one condition, each of which must be valid.
pub fn validate_predicate(predicate: &Predicate) -> Result<(), ValidationError> {
    if predicate.conditions.is_empty() {
        return Err(ValidationError::Invalid {
            field: "Predicate",
            message: "a predicate needs at least one condition".to_string(),
        });
    }
    for condition in &predicate.conditions {
        validate_condition(condition)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{CrawlState, JobRunState};

    #[test]
    fn test_condition_must_pick_one_side() {
        let both = Condition::new()
            .with_job_name("nightly")
            .with_crawler_name("scanner");
        assert!(validate_condition(&both).is_err());

        let neither = Condition::new();
        assert!(validate_condition(&neither).is_err());

        let job = Condition::new()
            .with_job_name("nightly")
            .with_state(JobRunState::Succeeded);
        assert!(validate_condition(&job).is_ok());

        let crawler = Condition::new()
            .with_crawler_name("scanner")
            .with_crawl_state(CrawlState::Succeeded);
        assert!(validate_condition(&crawler).is_ok());
    }

    #[test]
    fn test_state_without_name_rejected() {
        let dangling = Condition::new().with_state(JobRunState::Failed);
        assert!(validate_condition(&dangling).is_err());
    }

    #[test]
    fn test_predicate_needs_conditions() {
        assert!(validate_predicate(&Predicate::new()).is_err());
        let p = Predicate::new()
            .with_condition(Condition::new().with_job_name("nightly"));
        assert!(validate_predicate(&p).is_ok());
    }
}
