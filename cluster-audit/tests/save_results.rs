
use cluster_audit::config::Environment;
use cluster_audit::report::save_results;
use cluster_audit::{AuditResult, ClusterAuditor};
use fake_cluster::{healthy_cluster, Kind};

async fn audit(environment: Environment) -> AuditResult {
    let cluster = healthy_cluster().forbid(Kind::NetworkPolicies);
    ClusterAuditor::new(cluster, environment, "eu-west-1")
        .run_full_audit()
        .await
}

#[tokio::test]
async fn test_saved_report_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let result = audit(Environment::Stg).await;

    let path = save_results(&result, dir.path()).await.unwrap();
    assert_eq!(path.parent().unwrap(), dir.path());

    let contents = std::fs::read_to_string(&path).unwrap();
    let parsed: AuditResult = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed, result);
}

#[tokio::test]
async fn test_saved_report_format() {
    let dir = tempfile::tempdir().unwrap();
    let result = audit(Environment::Prod).await;

    let path = save_results(&result, dir.path()).await.unwrap();

    let file_name = path.file_name().unwrap().to_str().unwrap();
    let stamp = file_name
        .strip_prefix("cluster-audit-prod-")
        .and_then(|rest| rest.strip_suffix(".json"))
        .unwrap();
    assert!(chrono::NaiveDateTime::parse_from_str(stamp, "%Y%m%d-%H%M%S").is_ok());

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("{\n  \"metadata\": {\n    \"environment\": \"prod\""));

    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["metadata"]["region"], "eu-west-1");
    assert_eq!(value["network_policies"]["kind"], "api");
    assert!(value["network_policies"]["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to audit network policies: "));
    assert_eq!(value["nodes"]["ready_nodes"], 3);
}

#[tokio::test]
async fn test_output_dir_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("reports").join("nested");
    let result = audit(Environment::Dev).await;

    let path = save_results(&result, &output_dir).await.unwrap();
    assert!(path.starts_with(&output_dir));
    assert!(path.is_file());
}
