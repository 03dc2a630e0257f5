//! Bank entity.

use crate::filters::Predicate;
use crate::models::{Bank, BankFilter, NewBank};
use crate::registry::{FieldDef, Registry};
use crate::repository::Entity;
use crate::value::Value;

pub struct BankEntity;

impl Entity for BankEntity {
    const NAME: &'static str = "bank";
    const REQUIRED_REFS: &'static [&'static str] = &["userId"];

    type Record = Bank;
    type Params = NewBank;
    type Filter = BankFilter;

    /// Lowering order: user id, ids, names.
    fn predicates(filter: &BankFilter) -> Vec<Predicate> {
        let mut predicates = Vec::new();
        if let Some(user_id) = filter.user_id {
            predicates.push(Predicate::Eq("userId", Value::Int(user_id)));
        }
        if let Some(ids) = &filter.ids {
            predicates.push(Predicate::AnyOf("id", Value::ints(ids)));
        }
        if let Some(names) = &filter.names {
            predicates.push(Predicate::AnyOf("name", Value::texts(names)));
        }
        predicates
    }

    fn record(id: i64, params: &NewBank) -> Bank {
        Bank {
            id,
            user_id: params.user_id,
            name: params.name.clone(),
            description: params.description.clone(),
        }
    }
}

pub fn registry() -> Registry<Bank, NewBank> {
    Registry::new(
        "banks",
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
                logical: "userId",
                column: "user_id",
                param: Some(|p| Value::Int(p.user_id)),
                read: |record, row, idx| {
                    record.user_id = row.get(idx)?;
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
