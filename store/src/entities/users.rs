//! User entity.
//!
//! The password hash field is exposed under the logical name
//! `passwordHash` but stored in the `password` column; credential
//! handling itself (hashing, salting) lives outside the store.

use crate::filters::Predicate;
use crate::models::{NewUser, User, UserFilter};
use crate::registry::{FieldDef, Registry};
use crate::repository::Entity;
use crate::value::Value;

pub struct UserEntity;

impl Entity for UserEntity {
    const NAME: &'static str = "user";
    const REQUIRED_REFS: &'static [&'static str] = &[];

    type Record = User;
    type Params = NewUser;
    type Filter = UserFilter;

    /// Lowering order: id, name, administrator.
    fn predicates(filter: &UserFilter) -> Vec<Predicate> {
        let mut predicates = Vec::new();
        if let Some(id) = filter.id {
            predicates.push(Predicate::Eq("id", Value::Int(id)));
        }
        if let Some(name) = &filter.name {
            predicates.push(Predicate::Eq("name", Value::Text(name.clone())));
        }
        if let Some(administrator) = filter.administrator {
            predicates.push(Predicate::Eq("administrator", Value::Bool(administrator)));
        }
        predicates
    }

    fn record(id: i64, params: &NewUser) -> User {
        User {
            id,
            name: params.name.clone(),
            password_hash: params.password_hash.clone(),
            salt: params.salt.clone(),
            administrator: params.administrator,
        }
    }
}

pub fn registry() -> Registry<User, NewUser> {
    Registry::new(
        "users",
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
                logical: "name",
                column: "name",
                param: Some(|p| Value::Text(p.name.clone())),
                read: |record, row, idx| {
                    record.name = row.get(idx)?;
                    Ok(())
                },
            },
            FieldDef {
                logical: "passwordHash",
                column: "password",
                param: Some(|p| Value::Text(p.password_hash.clone())),
                read: |record, row, idx| {
                    record.password_hash = row.get(idx)?;
                    Ok(())
                },
            },
            FieldDef {
                logical: "salt",
                column: "salt",
                param: Some(|p| Value::Text(p.salt.clone())),
                read: |record, row, idx| {
                    record.salt = row.get(idx)?;
                    Ok(())
                },
            },
            FieldDef {
                logical: "administrator",
                column: "administrator",
                param: Some(|p| Value::Bool(p.administrator)),
                read: |record, row, idx| {
                    record.administrator = row.get(idx)?;
                    Ok(())
                },
            },
        ],
    )
}
