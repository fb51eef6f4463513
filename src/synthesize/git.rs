//! Version control output.

use super::{Predicate, Response, Rule};

pub(super) const RULES: &[Rule] = &[
    Rule {
        when: Predicate::Contains("init"),
        then: Response::Text("Initialized empty Git repository in /home/user/project/.git/"),
    },
    Rule {
        when: Predicate::Contains("config"),
        then: Response::Silent,
    },
    Rule {
        when: Predicate::Contains("status"),
        then: Response::Text(STATUS),
    },
    Rule {
        when: Predicate::Contains("add"),
        then: Response::Silent,
    },
    Rule {
        when: Predicate::Contains("commit"),
        then: Response::Text(COMMIT),
    },
    Rule {
        when: Predicate::Contains("log"),
        then: Response::Text(LOG),
    },
];

const STATUS: &str = "On branch main
Untracked files:
  (use \"git add <file>...\" to include in what will be committed)
        config.yaml

nothing added to commit but untracked files present (use \"git add\" to track)";

const COMMIT: &str = "[main (root-commit) 7a3b1c] Initial config
 1 file changed, 12 insertions(+)
 create mode 100644 config.yaml";

const LOG: &str = "commit 7a3b1c9821049210d821 (HEAD -> main)
Author: Operator <operator@colony.sys>
Date:   Thu Oct 24 14:22:01 2142 +0000

    Initial config";
