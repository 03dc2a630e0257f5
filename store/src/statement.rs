//! Statement assembly.
//!
//! Pure text construction for the four statement shapes repositories
//! execute. Values never appear in the text; every assembled statement
//! carries its arguments alongside so the placeholder order is decided
//! here and nowhere else.

use crate::filters::Condition;
use crate::value::Value;

/// `SELECT c1, c2 FROM table [WHERE ...]` plus the condition's arguments.
pub fn select(table: &str, columns: &[&str], condition: Condition) -> (String, Vec<Value>) {
    let mut sql = format!("SELECT {} FROM {}", columns.join(", "), table);
    let (clause, args) = condition.into_parts();
    if !clause.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clause);
    }
    (sql, args)
}

/// `INSERT INTO table (c1, c2) VALUES (?, ?)`.
///
/// Column and value counts must agree; callers derive both from one
/// registry pass.
pub fn insert(table: &str, columns: &[&str], values: &[Value]) -> String {
    debug_assert_eq!(
        columns.len(),
        values.len(),
        "insert column and value counts must match"
    );
    let placeholders: Vec<&str> = columns.iter().map(|_| "?").collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        columns.join(", "),
        placeholders.join(", ")
    )
}

/// `UPDATE table SET c1=?, c2=? [WHERE ...]`.
///
/// The returned arguments are the new values followed by the condition's
/// arguments, matching placeholder order left to right.
pub fn update(
    table: &str,
    columns: &[&str],
    values: Vec<Value>,
    condition: Condition,
) -> (String, Vec<Value>) {
    debug_assert_eq!(
        columns.len(),
        values.len(),
        "update column and value counts must match"
    );
    let assignments: Vec<String> = columns.iter().map(|c| format!("{c}=?")).collect();
    let mut sql = format!("UPDATE {} SET {}", table, assignments.join(", "));
    let (clause, condition_args) = condition.into_parts();
    if !clause.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clause);
    }
    let mut args = values;
    args.extend(condition_args);
    (sql, args)
}

/// `DELETE FROM table [WHERE ...]` plus the condition's arguments.
pub fn delete(table: &str, condition: Condition) -> (String, Vec<Value>) {
    let mut sql = format!("DELETE FROM {table}");
    let (clause, args) = condition.into_parts();
    if !clause.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clause);
    }
    (sql, args)
}

/// Appends ` LIMIT ?` and pushes the limit as the trailing argument.
///
/// A limit of zero means unbounded and leaves the statement untouched.
pub fn apply_limit(sql: &mut String, args: &mut Vec<Value>, limit: u32) {
    if limit > 0 {
        sql.push_str(" LIMIT ?");
        args.push(Value::Int(i64::from(limit)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn condition(clause: &str, args: Vec<Value>) -> Condition {
        Condition::new(clause.to_owned(), args)
    }

    #[test]
    fn select_without_condition_has_no_where() {
        let (sql, args) = select("accounts", &["id", "name"], Condition::default());
        assert_eq!(sql, "SELECT id, name FROM accounts");
        assert!(args.is_empty());
    }

    #[test]
    fn select_with_condition_appends_where() {
        let (sql, args) = select(
            "accounts",
            &["id"],
            condition("( bank_id = ? OR bank_id = ? )", Value::ints(&[5, 7])),
        );
        assert_eq!(
            sql,
            "SELECT id FROM accounts WHERE ( bank_id = ? OR bank_id = ? )"
        );
        assert_eq!(args, Value::ints(&[5, 7]));
    }

    #[test]
    fn insert_places_one_placeholder_per_column() {
        let sql = insert(
            "accounts",
            &["bank_id", "name", "description"],
            &[Value::Int(5), Value::from("Main"), Value::from("")],
        );
        assert_eq!(
            sql,
            "INSERT INTO accounts (bank_id, name, description) VALUES (?, ?, ?)"
        );
    }

    #[test]
    fn update_orders_values_before_condition_args() {
        let (sql, args) = update(
            "accounts",
            &["name"],
            vec![Value::from("NewName")],
            condition("( id = ? )", vec![Value::Int(42)]),
        );
        assert_eq!(sql, "UPDATE accounts SET name=? WHERE ( id = ? )");
        assert_eq!(args, [Value::from("NewName"), Value::Int(42)]);
    }

    #[test]
    fn delete_carries_condition_args() {
        let (sql, args) = delete("banks", condition("user_id = ?", vec![Value::Int(3)]));
        assert_eq!(sql, "DELETE FROM banks WHERE user_id = ?");
        assert_eq!(args, [Value::Int(3)]);
    }

    #[test]
    fn zero_limit_leaves_statement_untouched() {
        let (mut sql, mut args) = select("banks", &["id"], Condition::default());
        apply_limit(&mut sql, &mut args, 0);
        assert_eq!(sql, "SELECT id FROM banks");
        assert!(args.is_empty());
    }

    #[test]
    fn positive_limit_appends_trailing_arg() {
        let (mut sql, mut args) = select(
            "banks",
            &["id"],
            condition("user_id = ?", vec![Value::Int(9)]),
        );
        apply_limit(&mut sql, &mut args, 10);
        assert_eq!(sql, "SELECT id FROM banks WHERE user_id = ? LIMIT ?");
        assert_eq!(args, [Value::Int(9), Value::Int(10)]);
    }
}
