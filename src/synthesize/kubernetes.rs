//! Orchestration output.

use super::{Predicate, Response, Rule};

pub(super) const RULES: &[Rule] = &[
    Rule {
        when: Predicate::Contains("get nodes"),
        then: Response::Text(NODES),
    },
    Rule {
        when: Predicate::Contains("get pods"),
        then: Response::Text(PODS),
    },
    Rule {
        when: Predicate::Contains("describe pod"),
        then: Response::Text(DESCRIBE),
    },
    Rule {
        when: Predicate::Contains("logs"),
        then: Response::Text(LOGS),
    },
    Rule {
        when: Predicate::Contains("delete pod"),
        then: Response::Text("pod \"auth-service\" deleted"),
    },
];

const NODES: &str = "NAME           STATUS   ROLES           AGE   VERSION
node-worker-1  Ready    <none>          24d   v1.24.0
node-worker-2  Ready    <none>          24d   v1.24.0
node-control   Ready    control-plane   24d   v1.24.0";

const PODS: &str = "NAME           READY   STATUS             RESTARTS   AGE
auth-service   0/1     CrashLoopBackOff   4          2m
frontend       1/1     Running            0          45m
db-shard-0     1/1     Running            0          2h";

const DESCRIBE: &str = "Name:         auth-service
Namespace:    default
Node:         node-worker-1/10.0.0.4
Start Time:   Thu, 24 Oct 2024 12:40:00 GMT
Labels:       app=auth
Status:       Running
Containers:
  auth:
    Image:      auth:v2
    State:      Waiting
      Reason:   CrashLoopBackOff
    Last State: Terminated
      Reason:   Error
      Exit Code: 1
Events:
  Type     Reason     Age                From               Message
  ----     ------     ----               ----               -------
  Normal   Scheduled  2m                 default-scheduler  Successfully assigned default/auth-service to node-worker-1
  Normal   Pulled     2m                 kubelet            Container image \"auth:v2\" already present on machine
  Normal   Created    2m                 kubelet            Created container auth
  Normal   Started    2m                 kubelet            Started container auth
  Warning  BackOff    10s (x5 over 2m)   kubelet            Back-off restarting failed container";

const LOGS: &str = "[2024-10-24T12:42:01Z] INFO: Starting Auth Service v2.1
[2024-10-24T12:42:02Z] DEBUG: DB Connection init...
[2024-10-24T12:42:03Z] ERROR: Connection refused (Connection timed out)
[2024-10-24T12:42:03Z] FATAL: Unhandled exception in main.go:42 -> Panic";

#[cfg(test)]
mod tests {
    use crate::model::ExerciseDomain;
    use crate::synthesize::synthesize;

    fn out(input: &str) -> Option<String> {
        synthesize(ExerciseDomain::Kubernetes, input)
    }

    #[test]
    fn listing_verbs() {
        assert!(out("kubectl get nodes").unwrap().contains("node-control"));
        assert!(out("kubectl get pods").unwrap().contains("CrashLoopBackOff"));
    }

    #[test]
    fn logs_verb() {
        assert!(out("kubectl logs auth-service").unwrap().contains("FATAL"));
    }

    #[test]
    fn describe_and_delete() {
        assert!(out("kubectl describe pod auth-service").unwrap().starts_with("Name:"));
        assert_eq!(
            out("kubectl delete pod auth-service").as_deref(),
            Some("pod \"auth-service\" deleted")
        );
    }

    #[test]
    fn unmatched_verb() {
        assert_eq!(out("kubectl apply -f deploy.yaml"), None);
    }
}
