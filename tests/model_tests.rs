//! Model layer tests: builders, rendering, property bags, serde round trips

use chrono::{TimeZone, Utc};
use data_catalog_sdk::models::ModelError;
use data_catalog_sdk::models::catalog::{
    Column, DataLakePrincipal, Database, Order, PartitionInput, PrincipalPermissions, SerDeInfo,
    StorageDescriptor, TableInput,
};
use data_catalog_sdk::models::connection::{Connection, PhysicalConnectionRequirements};
use data_catalog_sdk::models::dev_endpoint::DevEndpoint;
use data_catalog_sdk::models::enums::{
    ConnectionType, CrawlState, JobRunState, Permission, TaskStatusType, TaskType, TriggerType,
    WorkerType,
};
use data_catalog_sdk::models::job::JobRun;
use data_catalog_sdk::models::task_run::{
    ImportLabelsTaskRunProperties, TaskRun, TaskRunProperties,
};
use data_catalog_sdk::models::trigger::Trigger;
use data_catalog_sdk::models::workflow::Workflow;
use std::collections::HashMap;

mod display_tests {
    use super::*;

    #[test]
    fn test_database_renders_only_populated_fields() {
        let db = Database::new("sales_db")
            .with_description("quarterly sales")
            .with_parameters(HashMap::new());
        assert_eq!(db.to_string(), "{Name: sales_db,Description: quarterly sales}");
    }

    #[test]
    fn test_fields_render_in_declared_order() {
        let db = Database::new("sales_db")
            .with_location_uri("s3://warehouse/sales/")
            .with_description("quarterly sales");
        assert_eq!(
            db.to_string(),
            "{Name: sales_db,Description: quarterly sales,LocationUri: s3://warehouse/sales/}"
        );
    }

    #[test]
    fn test_nested_types_render_recursively() {
        let sd = StorageDescriptor::new()
            .with_column(Column::new("id").with_column_type("bigint"))
            .with_location("s3://warehouse/sales/orders/");
        assert_eq!(
            sd.to_string(),
            "{Columns: [{Name: id,Type: bigint}],Location: s3://warehouse/sales/orders/}"
        );
    }

    #[test]
    fn test_map_renders_sorted_by_key() {
        let db = Database::new("d")
            .add_parameters_entry("zone", "eu-1")
            .unwrap()
            .add_parameters_entry("owner", "etl-team")
            .unwrap();
        assert_eq!(db.to_string(), "{Name: d,Parameters: {owner=etl-team, zone=eu-1}}");
    }

    #[test]
    fn test_timestamps_render_with_chrono_default() {
        let created = Utc.with_ymd_and_hms(2020, 5, 1, 12, 0, 0).unwrap();
        let db = Database::new("d").with_create_time(created);
        assert_eq!(db.to_string(), "{Name: d,CreateTime: 2020-05-01 12:00:00 UTC}");
    }

    #[test]
    fn test_enum_fields_render_wire_values() {
        let trigger = Trigger::new()
            .with_name("nightly")
            .with_trigger_type(TriggerType::OnDemand);
        assert_eq!(trigger.to_string(), "{Name: nightly,Type: ON_DEMAND}");
    }
}

mod builder_tests {
    use super::*;

    #[test]
    fn test_bulk_replace_then_append_preserves_order() {
        let sd = StorageDescriptor::new()
            .with_columns(vec![Column::new("a"), Column::new("b")])
            .with_column(Column::new("c"))
            .with_column(Column::new("d"));
        let names: Vec<&str> = sd.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_bulk_replace_discards_previous_items() {
        let sd = StorageDescriptor::new()
            .with_column(Column::new("old"))
            .with_columns(vec![Column::new("new")]);
        assert_eq!(sd.columns.len(), 1);
        assert_eq!(sd.columns[0].name, "new");
    }

    #[test]
    fn test_partition_values_append() {
        let input = PartitionInput::new()
            .with_values(vec!["2020".to_string()])
            .with_value("05")
            .with_value("01");
        assert_eq!(input.values, vec!["2020", "05", "01"]);
    }

    #[test]
    fn test_sort_columns_append() {
        let sd = StorageDescriptor::new()
            .with_sort_columns(vec![Order::new("region").with_sort_order(1)])
            .with_sort_column(Order::new("day").with_sort_order(0));
        assert_eq!(sd.sort_columns.len(), 2);
        assert_eq!(sd.sort_columns[1].column, "day");
    }
}

mod property_bag_tests {
    use super::*;

    #[test]
    fn test_duplicate_key_rejected() {
        let result = Database::new("d")
            .add_parameters_entry("owner", "etl-team")
            .unwrap()
            .add_parameters_entry("owner", "someone-else");
        assert_eq!(
            result,
            Err(ModelError::DuplicateKey {
                field: "Parameters",
                key: "owner".to_string()
            })
        );
    }

    #[test]
    fn test_clear_allows_reinsertion() {
        let db = Database::new("d")
            .add_parameters_entry("owner", "etl-team")
            .unwrap()
            .clear_parameters_entries()
            .add_parameters_entry("owner", "someone-else")
            .unwrap();
        assert_eq!(db.parameters.get("owner").map(String::as_str), Some("someone-else"));
    }

    #[test]
    fn test_bulk_replace_never_fails_on_duplicates() {
        let mut parameters = HashMap::new();
        parameters.insert("owner".to_string(), "etl-team".to_string());
        let db = Database::new("d")
            .add_parameters_entry("owner", "original")
            .unwrap()
            .with_parameters(parameters);
        assert_eq!(db.parameters.get("owner").map(String::as_str), Some("etl-team"));
    }

    #[test]
    fn test_workflow_run_properties_bag() {
        let wf = Workflow::new()
            .with_name("ingest")
            .add_default_run_properties_entry("environment", "staging")
            .unwrap();
        assert!(
            wf.clone()
                .add_default_run_properties_entry("environment", "prod")
                .is_err()
        );
        assert_eq!(wf.default_run_properties.len(), 1);
    }
}

mod serde_tests {
    use super::*;

    #[test]
    fn test_wire_names_are_pascal_case() {
        let table = TableInput::new("orders")
            .with_table_type("EXTERNAL_TABLE")
            .with_storage_descriptor(
                StorageDescriptor::new().with_column(Column::new("id").with_column_type("bigint")),
            );
        let json = serde_json::to_value(&table).unwrap();
        assert!(json.get("Name").is_some());
        assert!(json.get("TableType").is_some());
        let columns = &json["StorageDescriptor"]["Columns"];
        assert_eq!(columns[0]["Type"], "bigint");
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let db = Database::new("sales_db");
        let json = serde_json::to_value(&db).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 1);
        assert!(json.get("Description").is_none());
        assert!(json.get("Parameters").is_none());
    }

    #[test]
    fn test_job_run_round_trip() {
        let started = Utc.with_ymd_and_hms(2020, 5, 1, 3, 30, 0).unwrap();
        let run = JobRun::new()
            .with_id("jr_0001")
            .with_attempt(1)
            .with_job_name("nightly-load")
            .with_started_on(started)
            .with_job_run_state(JobRunState::Running)
            .with_worker_type(WorkerType::G1x)
            .with_max_capacity(10.0)
            .add_arguments_entry("--input", "s3://raw/")
            .unwrap();
        let json = serde_json::to_string(&run).unwrap();
        let back: JobRun = serde_json::from_str(&json).unwrap();
        assert_eq!(back, run);
    }

    #[test]
    fn test_unknown_enum_value_survives_round_trip() {
        let json = r#"{"Name":"nightly","Type":"EVENT"}"#;
        let trigger: Trigger = serde_json::from_str(json).unwrap();
        assert_eq!(
            trigger.trigger_type,
            Some(TriggerType::Other("EVENT".to_string()))
        );
        let out = serde_json::to_value(&trigger).unwrap();
        assert_eq!(out["Type"], "EVENT");
    }

    #[test]
    fn test_missing_collections_deserialize_empty() {
        let db: Database = serde_json::from_str(r#"{"Name":"sales_db"}"#).unwrap();
        assert!(db.parameters.is_empty());
        assert!(db.create_table_default_permissions.is_empty());
    }

    #[test]
    fn test_serde_info_parameters_round_trip() {
        let serde_info = SerDeInfo::new()
            .with_serialization_library("org.apache.hive.hcatalog.data.JsonSerDe")
            .add_parameters_entry("paths", "id,name")
            .unwrap();
        let json = serde_json::to_string(&serde_info).unwrap();
        let back: SerDeInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, serde_info);
    }

    #[test]
    fn test_crawl_state_wire_values() {
        assert_eq!(serde_json::to_string(&CrawlState::Cancelling).unwrap(), "\"CANCELLING\"");
        let state: CrawlState = serde_json::from_str("\"SUCCEEDED\"").unwrap();
        assert_eq!(state, CrawlState::Succeeded);
    }

    #[test]
    fn test_task_run_round_trip() {
        let task_run = TaskRun::new()
            .with_transform_id("tfm-7f3a")
            .with_task_run_id("tr-0001")
            .with_status(TaskStatusType::Running)
            .with_properties(
                TaskRunProperties::new()
                    .with_task_type(TaskType::ImportLabels)
                    .with_import_labels_task_run_properties(
                        ImportLabelsTaskRunProperties::new()
                            .with_input_s3_path("s3://labels/batch-1/")
                            .with_replace(true),
                    ),
            );
        let json = serde_json::to_value(&task_run).unwrap();
        assert_eq!(json["Status"], "RUNNING");
        assert_eq!(
            json["Properties"]["ImportLabelsTaskRunProperties"]["InputS3Path"],
            "s3://labels/batch-1/"
        );
        let back: TaskRun = serde_json::from_str(&json.to_string()).unwrap();
        assert_eq!(back, task_run);
    }

    #[test]
    fn test_connection_round_trip() {
        let connection = Connection::new()
            .with_name("orders-jdbc")
            .with_connection_type(ConnectionType::Jdbc)
            .add_connection_properties_entry("JDBC_CONNECTION_URL", "jdbc:postgresql://db/orders")
            .unwrap()
            .with_physical_connection_requirements(
                PhysicalConnectionRequirements::new()
                    .with_subnet_id("subnet-9c1f")
                    .with_security_group_id("sg-0a21"),
            );
        let json = serde_json::to_string(&connection).unwrap();
        let back: Connection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, connection);
    }

    #[test]
    fn test_dev_endpoint_round_trip() {
        let endpoint = DevEndpoint::new()
            .with_endpoint_name("dev-sandbox")
            .with_worker_type(WorkerType::G2x)
            .with_number_of_workers(2)
            .with_public_keys(vec!["ssh-rsa AAAA".to_string()])
            .add_arguments_entry("--enable-notebook", "true")
            .unwrap();
        let json = serde_json::to_string(&endpoint).unwrap();
        let back: DevEndpoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, endpoint);
    }

    #[test]
    fn test_principal_permissions_wire_shape() {
        let db = Database::new("governed_db").with_create_table_default_permission(
            PrincipalPermissions::new()
                .with_principal(
                    DataLakePrincipal::new()
                        .with_data_lake_principal_identifier("IAM_ALLOWED_PRINCIPALS"),
                )
                .with_permission(Permission::All),
        );
        let json = serde_json::to_value(&db).unwrap();
        assert_eq!(
            json["CreateTableDefaultPermissions"][0]["Permissions"][0],
            "ALL"
        );
    }
}
