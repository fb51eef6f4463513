//! Relational query output.

use super::{Predicate, Response, Rule};

pub(super) const RULES: &[Rule] = &[
    Rule {
        when: Predicate::Contains("psql"),
        then: Response::Text(CONNECT),
    },
    Rule {
        when: Predicate::Contains(r"\dt"),
        then: Response::Text(RELATIONS),
    },
    Rule {
        when: Predicate::AllOf(&[Predicate::StartsWith("select"), Predicate::Contains("where")]),
        then: Response::Text(SELECT_ERRORS),
    },
    Rule {
        when: Predicate::StartsWith("select"),
        then: Response::Text(SELECT_ALL),
    },
    Rule {
        when: Predicate::StartsWith("insert"),
        then: Response::Text("INSERT 0 1"),
    },
];

const CONNECT: &str = "psql (13.4)
Type \"help\" for help.

admin=>";

const RELATIONS: &str = "             List of relations
 Schema |       Name       | Type  |  Owner
--------+------------------+-------+----------
 public | colony_logs      | table | admin
 public | crew_manifest    | table | admin
 public | energy_readings  | table | postgres
(3 rows)";

const SELECT_ERRORS: &str = " id |    timestamp     |   event_type   | message
----+------------------+----------------+---------------------
  3 | 2142-01-01 14:30 | ERROR          | Radiation leak detected
  8 | 2142-01-01 15:10 | ERROR          | Shield generator failure
(2 rows)";

const SELECT_ALL: &str = " id |    timestamp     |   event_type   | message
----+------------------+----------------+---------------------
  1 | 2142-01-01 12:00 | SYSTEM_START   | Mainframe boot seq
  2 | 2142-01-01 12:05 | AUTH_ATTEMPT   | User 'Ripley' login
  3 | 2142-01-01 14:30 | ERROR          | Radiation leak detected
  9 | 2142-01-02 09:00 | REPAIR         | System fixed
(4 rows)";

#[cfg(test)]
mod tests {
    use crate::model::ExerciseDomain;
    use crate::synthesize::synthesize;

    fn out(input: &str) -> Option<String> {
        synthesize(ExerciseDomain::PostgreSql, input)
    }

    #[test]
    fn filtered_select_narrows_rows() {
        let text = out("SELECT * FROM colony_logs WHERE event_type = 'ERROR';").unwrap();
        assert!(text.ends_with("(2 rows)"));
        let text = out("SELECT * FROM colony_logs;").unwrap();
        assert!(text.ends_with("(4 rows)"));
    }

    #[test]
    fn select_must_lead() {
        assert_eq!(out("explain select 1"), None);
    }

    #[test]
    fn meta_command_and_insert() {
        assert!(out(r"\dt").unwrap().contains("colony_logs"));
        assert_eq!(
            out("INSERT INTO colony_logs (event_type) VALUES ('REPAIR');").as_deref(),
            Some("INSERT 0 1")
        );
    }

    #[test]
    fn client_banner() {
        assert!(out("psql -U admin").unwrap().ends_with("admin=>"));
    }
}
