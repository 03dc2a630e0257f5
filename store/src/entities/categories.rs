//! Category entity.
//!
//! Categories are per-user and form a shallow tree through `parentId`,
//! where zero means top-level.

use crate::filters::Predicate;
use crate::models::{Category, CategoryFilter, NewCategory};
use crate::registry::{FieldDef, Registry};
use crate::repository::Entity;
use crate::value::Value;

pub struct CategoryEntity;

impl Entity for CategoryEntity {
    const NAME: &'static str = "category";
    const REQUIRED_REFS: &'static [&'static str] = &["userId"];

    type Record = Category;
    type Params = NewCategory;
    type Filter = CategoryFilter;

    /// Lowering order: user id, ids, names, parent ids.
    fn predicates(filter: &CategoryFilter) -> Vec<Predicate> {
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
        if let Some(parent_ids) = &filter.parent_ids {
            predicates.push(Predicate::AnyOf("parentId", Value::ints(parent_ids)));
        }
        predicates
    }

    fn record(id: i64, params: &NewCategory) -> Category {
        Category {
            id,
            user_id: params.user_id,
            name: params.name.clone(),
            description: params.description.clone(),
            parent_id: params.parent_id,
        }
    }
}

pub fn registry() -> Registry<Category, NewCategory> {
    Registry::new(
        "categories",
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
            FieldDef {
                logical: "parentId",
                column: "parent_id",
                param: Some(|p| Value::Int(p.parent_id)),
                read: |record, row, idx| {
                    record.parent_id = row.get(idx)?;
                    Ok(())
                },
            },
        ],
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::filters::build_condition;
    use crate::repository::Repository;
    use crate::store::Store;

    fn repo() -> Repository<CategoryEntity> {
        Repository::new(Arc::new(Store::open_in_memory().unwrap()), registry())
    }

    fn category(user_id: i64, name: &str, parent_id: i64) -> NewCategory {
        NewCategory {
            user_id,
            name: name.to_owned(),
            description: String::new(),
            parent_id,
        }
    }

    #[test]
    fn parent_ids_map_to_parent_id_column() {
        let filter = CategoryFilter {
            parent_ids: Some(vec![3]),
            ..CategoryFilter::default()
        };
        let cond = build_condition(&CategoryEntity::predicates(&filter), &registry()).unwrap();
        assert_eq!(cond.clause(), "( parent_id = ? )");
    }

    #[test]
    fn children_are_found_by_parent() {
        let repo = repo();
        let food = repo.add(&category(1, "Food", 0)).unwrap();
        repo.add(&category(1, "Restaurants", food.id)).unwrap();
        repo.add(&category(1, "Groceries", food.id)).unwrap();
        repo.add(&category(1, "Travel", 0)).unwrap();

        let children = repo
            .get(
                &CategoryFilter {
                    parent_ids: Some(vec![food.id]),
                    ..CategoryFilter::default()
                },
                &["id", "name", "parentId"],
                0,
            )
            .unwrap();
        assert_eq!(children.len(), 2);
        assert!(children.iter().all(|c| c.parent_id == food.id));
    }

    #[test]
    fn top_level_categories_have_zero_parent() {
        let repo = repo();
        repo.add(&category(1, "Food", 0)).unwrap();
        let roots = repo
            .get(
                &CategoryFilter {
                    parent_ids: Some(vec![0]),
                    ..CategoryFilter::default()
                },
                &["id", "parentId"],
                0,
            )
            .unwrap();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].parent_id, 0);
    }
}
