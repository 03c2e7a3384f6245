//! Placeholder translation between the two backends.
//!
//! Queries throughout the store layer are written once with `?` placeholders
//! (the SQLite convention). The Postgres backend calls
//! [`rewrite_placeholders`] to turn them into numbered `$1..$n` parameters,
//! and [`with_returning_id`] to recover the auto-increment id that SQLite
//! exposes through `last_insert_rowid()`.

/// Rewrites `?` placeholders to `$1..$n`.
///
/// Question marks inside single-quoted string literals are left untouched,
/// including literals with doubled-quote escapes (`'it''s'`).
pub fn rewrite_placeholders(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len() + 8);
    let mut index = 0usize;
    let mut in_literal = false;

    for ch in sql.chars() {
        match ch {
            '\'' => {
                // A doubled quote inside a literal toggles twice, which
                // leaves the state unchanged. Tracking each quote
                // individually therefore handles escapes as well.
                in_literal = !in_literal;
                out.push(ch);
            }
            '?' if !in_literal => {
                index += 1;
                out.push('$');
                out.push_str(&index.to_string());
            }
            _ => out.push(ch),
        }
    }

    out
}

/// Appends a `RETURNING id` clause for insert-and-fetch-id on Postgres,
/// stripping any trailing semicolon and whitespace first.
pub fn with_returning_id(sql: &str) -> String {
    let trimmed = sql.trim_end().trim_end_matches(';').trim_end();
    format!("{trimmed} RETURNING id")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_placeholders_in_order() {
        assert_eq!(
            rewrite_placeholders("INSERT INTO users (fullname, email) VALUES (?, ?)"),
            "INSERT INTO users (fullname, email) VALUES ($1, $2)"
        );
    }

    #[test]
    fn leaves_sql_without_placeholders_alone() {
        let sql = "SELECT COUNT(*) AS c FROM packages";
        assert_eq!(rewrite_placeholders(sql), sql);
    }

    #[test]
    fn ignores_question_marks_inside_string_literals() {
        assert_eq!(
            rewrite_placeholders("SELECT * FROM feedback WHERE subject = '?' AND message = ?"),
            "SELECT * FROM feedback WHERE subject = '?' AND message = $1"
        );
    }

    #[test]
    fn handles_escaped_quotes_in_literals() {
        assert_eq!(
            rewrite_placeholders("SELECT 'it''s a ?' AS s, ? AS p"),
            "SELECT 'it''s a ?' AS s, $1 AS p"
        );
    }

    #[test]
    fn numbers_many_placeholders_past_nine() {
        let sql = rewrite_placeholders(&"?, ".repeat(11));
        assert!(sql.contains("$10"));
        assert!(sql.contains("$11"));
    }

    #[test]
    fn returning_id_strips_trailing_semicolon() {
        assert_eq!(
            with_returning_id("INSERT INTO packages (title) VALUES (?);"),
            "INSERT INTO packages (title) VALUES (?) RETURNING id"
        );
        assert_eq!(
            with_returning_id("INSERT INTO packages (title) VALUES (?)\n"),
            "INSERT INTO packages (title) VALUES (?) RETURNING id"
        );
    }
}
