use super::AuditResult;
use crate::audit::BANNER;
use std::io::{self, Write};

pub fn print_summary(result: &AuditResult) {
    let stdout = io::stdout();
    if let Err(err) = write_summary(&mut stdout.lock(), result) {
        tracing::warn!("Failed printing audit summary: {err}");
    }
}

/// Categories that failed are left out, their errors only appear in the saved report.
pub fn write_summary<W: Write>(out: &mut W, result: &AuditResult) -> io::Result<()> {
    writeln!(out, "\n{BANNER}")?;
    writeln!(out, "AUDIT SUMMARY")?;
    writeln!(out, "{BANNER}\n")?;

    if let Some(nodes) = result.nodes.summary() {
        writeln!(out, "Nodes: {}/{} Ready", nodes.ready_nodes, nodes.total_nodes)?;
    }

    if let Some(pods) = result.pods.summary() {
        writeln!(out, "Pods: {} Total", pods.total_pods)?;
        if !pods.problem_pods.is_empty() {
            writeln!(out, "  ⚠️  {} Problem Pods", pods.problem_pods.len())?;
        }
    }

    if let Some(deployments) = result.deployments.summary() {
        writeln!(
            out,
            "Deployments: {}/{} Healthy",
            deployments.healthy_deployments, deployments.total_deployments
        )?;
        if !deployments.unhealthy_deployments.is_empty() {
            writeln!(
                out,
                "  ⚠️  {} Unhealthy Deployments",
                deployments.unhealthy_deployments.len()
            )?;
        }
    }

    if let Some(services) = result.services.summary() {
        writeln!(out, "Services: {} Total", services.total_services)?;
    }

    if let Some(namespaces) = result.namespaces.summary() {
        writeln!(out, "Namespaces: {} Total", namespaces.total_namespaces)?;
    }

    if let Some(rbac) = result.rbac.summary() {
        writeln!(
            out,
            "RBAC: {} Roles, {} ClusterRoles, {} RoleBindings, {} ClusterRoleBindings",
            rbac.total_roles,
            rbac.total_cluster_roles,
            rbac.total_role_bindings,
            rbac.total_cluster_role_bindings
        )?;
    }

    if let Some(policies) = result.network_policies.summary() {
        writeln!(
            out,
            "Network Policies: {} Total",
            policies.total_network_policies
        )?;
    }

    writeln!(out, "\n{BANNER}\n")
}
