//! Account entity.

use crate::filters::Predicate;
use crate::models::{Account, AccountFilter, NewAccount};
use crate::registry::{FieldDef, Registry};
use crate::repository::Entity;
use crate::value::Value;

pub struct AccountEntity;

impl Entity for AccountEntity {
    const NAME: &'static str = "account";
    const REQUIRED_REFS: &'static [&'static str] = &["bankId"];

    type Record = Account;
    type Params = NewAccount;
    type Filter = AccountFilter;

    /// Lowering order: ids, names, bank ids.
    fn predicates(filter: &AccountFilter) -> Vec<Predicate> {
        let mut predicates = Vec::new();
        if let Some(ids) = &filter.ids {
            predicates.push(Predicate::AnyOf("id", Value::ints(ids)));
        }
        if let Some(names) = &filter.names {
            predicates.push(Predicate::AnyOf("name", Value::texts(names)));
        }
        if let Some(bank_ids) = &filter.bank_ids {
            predicates.push(Predicate::AnyOf("bankId", Value::ints(bank_ids)));
        }
        predicates
    }

    fn record(id: i64, params: &NewAccount) -> Account {
        Account {
            id,
            bank_id: params.bank_id,
            name: params.name.clone(),
            description: params.description.clone(),
        }
    }
}

pub fn registry() -> Registry<Account, NewAccount> {
    Registry::new(
        "accounts",
        vec![
            FieldDef {
                logical: "id",
                column: "id",
                param: None,
                read: |record, row, idx| {
                    record.id = row.get(idx)?;
                    Ok(())
                },
            },
            FieldDef {
                logical: "bankId",
                column: "bank_id",
                param: Some(|p| Value::Int(p.bank_id)),
                read: |record, row, idx| {
                    record.bank_id = row.get(idx)?;
                    Ok(())
                },
            },
            FieldDef {
                logical: "name",
                column: "name",
                param: Some(|p| Value::Text(p.name.clone())),
                read: |record, row, idx| {
                    record.name = row.get(idx)?;
                    Ok(())
                },
            },
            FieldDef {
                logical: "description",
                column: "description",
                param: Some(|p| Value::Text(p.description.clone())),
                read: |record, row, idx| {
                    record.description = row.get(idx)?;
                    Ok(())
                },
            },
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::build_condition;
    use crate::statement;

    #[test]
    fn bank_id_set_renders_or_group_with_args_in_order() {
        let filter = AccountFilter {
            bank_ids: Some(vec![5, 7]),
            ..AccountFilter::default()
        };
        let cond = build_condition(&AccountEntity::predicates(&filter), &registry()).unwrap();
        assert_eq!(cond.clause(), "( bank_id = ? OR bank_id = ? )");
        assert_eq!(cond.args(), [Value::Int(5), Value::Int(7)]);
    }

    #[test]
    fn full_filter_lowers_ids_names_then_bank_ids() {
        let filter = AccountFilter {
            ids: Some(vec![1]),
            names: Some(vec!["Checking".to_owned()]),
            bank_ids: Some(vec![9]),
        };
        let cond = build_condition(&AccountEntity::predicates(&filter), &registry()).unwrap();
        assert_eq!(
            cond.clause(),
            "( id = ? ) AND ( name = ? ) AND ( bank_id = ? )"
        );
    }

    #[test]
    fn rename_by_id_produces_the_expected_statement() {
        let filter = AccountFilter {
            ids: Some(vec![42]),
            ..AccountFilter::default()
        };
        let cond = build_condition(&AccountEntity::predicates(&filter), &registry()).unwrap();
        let (sql, args) = statement::update(
            registry().table(),
            &["name"],
            vec![Value::from("NewName")],
            cond,
        );
        assert_eq!(sql, "UPDATE accounts SET name=? WHERE ( id = ? )");
        assert_eq!(args, [Value::from("NewName"), Value::Int(42)]);
    }
}
