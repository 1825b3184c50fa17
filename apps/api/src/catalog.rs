//! Static topic catalog. Read-only for the lifetime of the process.

use crate::models::topic::{CategoryDef, TopicDef};

const fn topic(id: &'static str, name: &'static str) -> TopicDef {
    TopicDef { id, name }
}

pub static CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        title: "Public Cloud (公有云)",
        topics: &[
            topic("aws", "AWS"),
            topic("azure", "Azure"),
            topic("finops", "FinOps"),
        ],
    },
    CategoryDef {
        title: "Containers & Orchestration (容器与编排)",
        topics: &[
            topic("docker", "Docker"),
            topic("kubernetes", "Kubernetes"),
            topic("eks", "EKS"),
            topic("aks", "AKS"),
        ],
    },
    CategoryDef {
        title: "Middleware (中间件)",
        topics: &[
            topic("elasticsearch", "Elasticsearch"),
            topic("redis", "Redis"),
            topic("kafka", "Kafka"),
            topic("zookeeper", "Zookeeper"),
            topic("elk", "ELK Stack"),
        ],
    },
    CategoryDef {
        title: "Observability (监控与可观测性)",
        topics: &[
            topic("prometheus", "Prometheus"),
            topic("grafana", "Grafana"),
            topic("cloudwatch", "CloudWatch"),
            topic("metrics", "Metrics Concepts"),
            topic("logs", "Logging Strategies"),
            topic("tracing", "Distributed Tracing"),
        ],
    },
    CategoryDef {
        title: "Security & Automation (安全与自动化)",
        topics: &[
            topic("iam", "IAM"),
            topic("waf", "WAF"),
            topic("terraform", "Terraform"),
            topic("ansible", "Ansible"),
            topic("cicd", "CI/CD Pipelines"),
        ],
    },
];

/// Looks up a topic by its stable id.
pub fn find_topic(id: &str) -> Option<&'static TopicDef> {
    CATEGORIES
        .iter()
        .flat_map(|cat| cat.topics.iter())
        .find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_topic_ids_are_unique() {
        let mut seen = HashSet::new();
        for t in CATEGORIES.iter().flat_map(|c| c.topics.iter()) {
            assert!(seen.insert(t.id), "duplicate topic id {}", t.id);
        }
        assert_eq!(seen.len(), 23);
    }

    #[test]
    fn test_find_topic() {
        assert_eq!(find_topic("kubernetes").map(|t| t.name), Some("Kubernetes"));
        assert!(find_topic("mainframe").is_none());
    }
}
