//! Core OS command output.

use super::{Predicate, Response, Rule};

pub(super) const RULES: &[Rule] = &[
    Rule {
        when: Predicate::Contains("pwd"),
        then: Response::Text("/home/operator"),
    },
    Rule {
        when: Predicate::AllOf(&[Predicate::Contains("ls"), Predicate::AnyOf(&["-a", "-la"])]),
        then: Response::Text(LISTING_ALL),
    },
    Rule {
        when: Predicate::Contains("ls"),
        then: Response::Text("sys_log.txt"),
    },
    Rule {
        when: Predicate::Contains("mkdir"),
        then: Response::Silent,
    },
    Rule {
        when: Predicate::Contains("mv"),
        then: Response::Silent,
    },
    Rule {
        when: Predicate::Contains("cd"),
        then: Response::Silent,
    },
    Rule {
        when: Predicate::Contains("cat"),
        then: Response::Text(SYS_LOG),
    },
    Rule {
        when: Predicate::Contains("grep"),
        then: Response::Text(GREP_ERRORS),
    },
];

const LISTING_ALL: &str = "drwxr-xr-x  4 root root  4096 Jan 01 00:00 .
drwxr-xr-x 10 root root  4096 Jan 01 00:00 ..
-rw-r--r--  1 root root   220 Jan 01 00:00 .bash_logout
-rw-r--r--  1 root root  3771 Jan 01 00:00 .bashrc
-rw-r--r--  1 root root  24KB Jan 01 12:00 sys_log.txt";

const SYS_LOG: &str = "[SYSTEM BOOT SEQ 9992]
...
[INFO] Service started.
[INFO] Port 80 listening.
[ERROR] Corrupted sector 4 on drive /dev/sda1
[WARN] High temp detected.
...";

const GREP_ERRORS: &str = "[ERROR] Corrupted sector 4 on drive /dev/sda1
[ERROR] Module 'net-adapter' not responding.";
