//! Boundary validation tests for requests and graphs

use data_catalog_sdk::models::catalog::{DatabaseInput, PartitionInput, TableInput};
use data_catalog_sdk::models::crawler::{CrawlerTargets, S3Target};
use data_catalog_sdk::models::enums::{JobRunState, TriggerType};
use data_catalog_sdk::models::job::JobCommand;
use data_catalog_sdk::models::trigger::{Action, Condition, Predicate};
use data_catalog_sdk::models::workflow::{Edge, Node, WorkflowGraph};
use data_catalog_sdk::ops::catalog::{
    BATCH_CREATE_PARTITION_MAX, BatchCreatePartitionRequest, CreateDatabaseRequest,
    CreateTableRequest, GetDatabasesRequest, UpdateTableRequest,
};
use data_catalog_sdk::ops::crawlers::CreateCrawlerRequest;
use data_catalog_sdk::ops::dev_endpoints::CreateDevEndpointRequest;
use data_catalog_sdk::ops::jobs::{CreateJobRequest, StartJobRunRequest};
use data_catalog_sdk::ops::triggers::CreateTriggerRequest;
use data_catalog_sdk::ops::workflows::CreateWorkflowRequest;
use data_catalog_sdk::validation::{GraphError, ValidationError, validate_workflow_graph};

fn partition(values: &[&str]) -> PartitionInput {
    let mut input = PartitionInput::new();
    for value in values {
        input = input.with_value(*value);
    }
    input
}

mod catalog_validation_tests {
    use super::*;

    #[test]
    fn test_valid_create_database() {
        let request = CreateDatabaseRequest::new(
            DatabaseInput::new("sales_db").with_description("quarterly sales"),
        )
        .with_catalog_id("123456789012");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_database_name_rejected() {
        let request = CreateDatabaseRequest::new(DatabaseInput::new(""));
        assert!(matches!(
            request.validate(),
            Err(ValidationError::Length { field: "Name", .. })
        ));
    }

    #[test]
    fn test_multiline_description_rejected() {
        let request =
            CreateDatabaseRequest::new(DatabaseInput::new("d").with_description("two\nlines"));
        assert!(matches!(
            request.validate(),
            Err(ValidationError::Pattern { field: "Description" })
        ));
    }

    #[test]
    fn test_catalog_id_alphabet_enforced() {
        let request =
            CreateDatabaseRequest::new(DatabaseInput::new("d")).with_catalog_id("not a catalog");
        assert!(matches!(
            request.validate(),
            Err(ValidationError::Pattern { field: "CatalogId" })
        ));
    }

    #[test]
    fn test_oversized_name_rejected() {
        let request = CreateTableRequest::new("db", TableInput::new("t".repeat(256)));
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_table_validates_input() {
        let request = UpdateTableRequest::new("db", TableInput::new("orders"))
            .with_skip_archive(true);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_page_size_bounds() {
        assert!(GetDatabasesRequest::new().with_max_results(0).validate().is_err());
        assert!(GetDatabasesRequest::new().with_max_results(1000).validate().is_ok());
    }
}

mod partition_validation_tests {
    use super::*;

    #[test]
    fn test_batch_within_limit_accepted() {
        let mut request = BatchCreatePartitionRequest::new("db", "orders");
        for i in 0..BATCH_CREATE_PARTITION_MAX {
            request = request.with_partition_input(partition(&[&format!("{i}")]));
        }
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_batch_over_limit_rejected() {
        let mut request = BatchCreatePartitionRequest::new("db", "orders");
        for i in 0..(BATCH_CREATE_PARTITION_MAX + 1) {
            request = request.with_partition_input(partition(&[&format!("{i}")]));
        }
        assert!(matches!(
            request.validate(),
            Err(ValidationError::TooManyItems { field: "PartitionInputList", .. })
        ));
    }

    #[test]
    fn test_partition_without_values_rejected() {
        let request =
            BatchCreatePartitionRequest::new("db", "orders").with_partition_input(partition(&[]));
        assert!(request.validate().is_err());
    }
}

mod trigger_validation_tests {
    use super::*;

    fn run_job(job: &str) -> Action {
        Action::new().with_job_name(job)
    }

    #[test]
    fn test_scheduled_trigger_needs_schedule() {
        let request = CreateTriggerRequest::new("nightly", TriggerType::Scheduled)
            .with_action(run_job("load"));
        assert!(request.validate().is_err());

        let request = request.with_schedule("cron(0 3 * * ? *)");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_conditional_trigger_needs_predicate() {
        let request = CreateTriggerRequest::new("after-load", TriggerType::Conditional)
            .with_action(run_job("report"));
        assert!(request.validate().is_err());

        let predicate = Predicate::new().with_condition(
            Condition::new()
                .with_job_name("load")
                .with_state(JobRunState::Succeeded),
        );
        let request = request.with_predicate(predicate);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_condition_watching_both_sides_rejected() {
        let predicate = Predicate::new().with_condition(
            Condition::new()
                .with_job_name("load")
                .with_crawler_name("scanner"),
        );
        let request = CreateTriggerRequest::new("bad", TriggerType::Conditional)
            .with_action(run_job("report"))
            .with_predicate(predicate);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_on_demand_trigger_cannot_start_on_creation() {
        let request = CreateTriggerRequest::new("manual", TriggerType::OnDemand)
            .with_action(run_job("load"))
            .with_start_on_creation(true);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_trigger_without_actions_rejected() {
        let request = CreateTriggerRequest::new("noop", TriggerType::OnDemand);
        assert!(matches!(
            request.validate(),
            Err(ValidationError::Invalid { field: "Actions", .. })
        ));
    }
}

mod job_validation_tests {
    use super::*;

    fn base_request() -> CreateJobRequest {
        CreateJobRequest::new(
            "nightly-load",
            "arn:aws:iam::123456789012:role/etl",
            JobCommand::new()
                .with_name("batchetl")
                .with_script_location("s3://scripts/load.py"),
        )
    }

    #[test]
    fn test_valid_job() {
        assert!(base_request().validate().is_ok());
    }

    #[test]
    fn test_capacity_and_workers_conflict() {
        let request = base_request().with_max_capacity(10.0).with_number_of_workers(4);
        assert!(matches!(
            request.validate(),
            Err(ValidationError::Invalid { field: "MaxCapacity", .. })
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(base_request().with_timeout(0).validate().is_err());
    }

    #[test]
    fn test_start_job_run_capacity_conflict() {
        let request = StartJobRunRequest::new("nightly-load")
            .with_max_capacity(2.0)
            .with_number_of_workers(2);
        assert!(request.validate().is_err());
    }
}

mod crawler_validation_tests {
    use super::*;

    #[test]
    fn test_crawler_needs_a_target() {
        let request = CreateCrawlerRequest::new("scanner", "etl-role", CrawlerTargets::new());
        assert!(matches!(
            request.validate(),
            Err(ValidationError::Invalid { field: "Targets", .. })
        ));
    }

    #[test]
    fn test_crawler_with_target_accepted() {
        let targets =
            CrawlerTargets::new().with_s3_target(S3Target::new().with_path("s3://bucket/raw/"));
        let request = CreateCrawlerRequest::new("scanner", "etl-role", targets)
            .with_database_name("raw_zone");
        assert!(request.validate().is_ok());
    }
}

mod dev_endpoint_validation_tests {
    use super::*;

    #[test]
    fn test_single_key_and_key_list_conflict() {
        let request = CreateDevEndpointRequest::new("dev", "etl-role")
            .with_public_key("ssh-rsa AAAA")
            .with_public_keys(vec!["ssh-rsa BBBB".to_string()]);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_key_list_alone_accepted() {
        let request = CreateDevEndpointRequest::new("dev", "etl-role")
            .with_public_keys(vec!["ssh-rsa BBBB".to_string()]);
        assert!(request.validate().is_ok());
    }
}

mod workflow_validation_tests {
    use super::*;

    #[test]
    fn test_create_workflow_checks_run_properties() {
        let request = CreateWorkflowRequest::new("ingest")
            .add_default_run_properties_entry("environment", "staging")
            .unwrap();
        assert!(request.validate().is_ok());

        let request = CreateWorkflowRequest::new("ingest")
            .add_default_run_properties_entry("notes", "line one\nline two")
            .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_graph_cycle_reported() {
        let graph = WorkflowGraph::new()
            .with_nodes(vec![
                Node::new().with_unique_id("t1"),
                Node::new().with_unique_id("j1"),
            ])
            .with_edges(vec![
                Edge::new().with_source_id("t1").with_destination_id("j1"),
                Edge::new().with_source_id("j1").with_destination_id("t1"),
            ]);
        assert!(matches!(
            validate_workflow_graph(&graph),
            Err(GraphError::Cycle { .. })
        ));
    }

    #[test]
    fn test_fan_out_graph_accepted() {
        let graph = WorkflowGraph::new()
            .with_nodes(vec![
                Node::new().with_unique_id("start"),
                Node::new().with_unique_id("load-a"),
                Node::new().with_unique_id("load-b"),
                Node::new().with_unique_id("report"),
            ])
            .with_edges(vec![
                Edge::new().with_source_id("start").with_destination_id("load-a"),
                Edge::new().with_source_id("start").with_destination_id("load-b"),
                Edge::new().with_source_id("load-a").with_destination_id("report"),
                Edge::new().with_source_id("load-b").with_destination_id("report"),
            ]);
        assert!(validate_workflow_graph(&graph).is_ok());
    }
}
