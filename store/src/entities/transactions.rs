//! Transaction entity.
//!
//! Carries two timestamps: `transactionDate` is when the movement
//! happened, `recordDate` is when the bank recorded it. Date windows and
//! amount ranges on the filter are inclusive on both ends.

use crate::filters::Predicate;
use crate::models::{NewTransaction, Transaction, TransactionFilter};
use crate::registry::{FieldDef, Registry};
use crate::repository::Entity;
use crate::value::Value;

pub struct TransactionEntity;

impl Entity for TransactionEntity {
    const NAME: &'static str = "transaction";
    const REQUIRED_REFS: &'static [&'static str] = &["accountId"];

    type Record = Transaction;
    type Params = NewTransaction;
    type Filter = TransactionFilter;

    /// Lowering order: the four id/reference sets, then both date
    /// windows, then both amount ranges.
    fn predicates(filter: &TransactionFilter) -> Vec<Predicate> {
        let mut predicates = Vec::new();
        if let Some(ids) = &filter.ids {
            predicates.push(Predicate::AnyOf("id", Value::ints(ids)));
        }
        if let Some(account_ids) = &filter.account_ids {
            predicates.push(Predicate::AnyOf("accountId", Value::ints(account_ids)));
        }
        if let Some(category_ids) = &filter.category_ids {
            predicates.push(Predicate::AnyOf("categoryId", Value::ints(category_ids)));
        }
        if let Some(references) = &filter.references {
            predicates.push(Predicate::AnyOf("reference", Value::texts(references)));
        }
        if let Some(from) = filter.from_transaction_date {
            predicates.push(Predicate::AtLeast("transactionDate", Value::Timestamp(from)));
        }
        if let Some(to) = filter.to_transaction_date {
            predicates.push(Predicate::AtMost("transactionDate", Value::Timestamp(to)));
        }
        if let Some(from) = filter.from_record_date {
            predicates.push(Predicate::AtLeast("recordDate", Value::Timestamp(from)));
        }
        if let Some(to) = filter.to_record_date {
            predicates.push(Predicate::AtMost("recordDate", Value::Timestamp(to)));
        }
        if let Some(min) = filter.min_debit {
            predicates.push(Predicate::AtLeast("debit", Value::Real(min)));
        }
        if let Some(max) = filter.max_debit {
            predicates.push(Predicate::AtMost("debit", Value::Real(max)));
        }
        if let Some(min) = filter.min_credit {
            predicates.push(Predicate::AtLeast("credit", Value::Real(min)));
        }
        if let Some(max) = filter.max_credit {
            predicates.push(Predicate::AtMost("credit", Value::Real(max)));
        }
        predicates
    }

    fn record(id: i64, params: &NewTransaction) -> Transaction {
        Transaction {
            id,
            account_id: params.account_id,
            label: params.label.clone(),
            category_id: params.category_id,
            description: params.description.clone(),
            transaction_date: params.transaction_date,
            record_date: params.record_date,
            debit: params.debit,
            credit: params.credit,
            reference: params.reference.clone(),
        }
    }
}

pub fn registry() -> Registry<Transaction, NewTransaction> {
    Registry::new(
        "transactions",
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
                logical: "accountId",
                column: "account_id",
                param: Some(|p| Value::Int(p.account_id)),
                read: |record, row, idx| {
                    record.account_id = row.get(idx)?;
                    Ok(())
                },
            },
            FieldDef {
                logical: "label",
                column: "label",
                param: Some(|p| Value::Text(p.label.clone())),
                read: |record, row, idx| {
                    record.label = row.get(idx)?;
                    Ok(())
                },
            },
            FieldDef {
                logical: "categoryId",
                column: "category_id",
                param: Some(|p| Value::Int(p.category_id)),
                read: |record, row, idx| {
                    record.category_id = row.get(idx)?;
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
                logical: "transactionDate",
                column: "transaction_date",
                param: Some(|p| Value::Timestamp(p.transaction_date)),
                read: |record, row, idx| {
                    record.transaction_date = row.get(idx)?;
                    Ok(())
                },
            },
            FieldDef {
                logical: "recordDate",
                column: "record_date",
                param: Some(|p| Value::Timestamp(p.record_date)),
                read: |record, row, idx| {
                    record.record_date = row.get(idx)?;
                    Ok(())
                },
            },
            FieldDef {
                logical: "debit",
                column: "debit",
                param: Some(|p| Value::Real(p.debit)),
                read: |record, row, idx| {
                    record.debit = row.get(idx)?;
                    Ok(())
                },
            },
            FieldDef {
                logical: "credit",
                column: "credit",
                param: Some(|p| Value::Real(p.credit)),
                read: |record, row, idx| {
                    record.credit = row.get(idx)?;
                    Ok(())
                },
            },
            FieldDef {
                logical: "reference",
                column: "reference",
                param: Some(|p| Value::Text(p.reference.clone())),
                read: |record, row, idx| {
                    record.reference = row.get(idx)?;
                    Ok(())
                },
            },
        ],
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{DateTime, TimeZone, Utc};

    use super::*;
    use crate::filters::build_condition;
    use crate::repository::Repository;
    use crate::store::Store;

    fn repo() -> Repository<TransactionEntity> {
        Repository::new(Arc::new(Store::open_in_memory().unwrap()), registry())
    }

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2016, 3, d, 0, 0, 0).unwrap()
    }

    fn movement(account_id: i64, label: &str, date: DateTime<Utc>, debit: f64) -> NewTransaction {
        NewTransaction {
            account_id,
            label: label.to_owned(),
            transaction_date: date,
            record_date: date,
            debit,
            ..NewTransaction::default()
        }
    }

    #[test]
    fn date_window_lowers_to_inclusive_range() {
        let filter = TransactionFilter {
            from_transaction_date: Some(day(1)),
            to_transaction_date: Some(day(31)),
            ..TransactionFilter::default()
        };
        let cond = build_condition(&TransactionEntity::predicates(&filter), &registry()).unwrap();
        assert_eq!(
            cond.clause(),
            "transaction_date >= ? AND transaction_date <= ?"
        );
        assert_eq!(
            cond.args(),
            [Value::Timestamp(day(1)), Value::Timestamp(day(31))]
        );
    }

    #[test]
    fn single_sided_amount_bound_stands_alone() {
        let filter = TransactionFilter {
            min_debit: Some(100.0),
            ..TransactionFilter::default()
        };
        let cond = build_condition(&TransactionEntity::predicates(&filter), &registry()).unwrap();
        assert_eq!(cond.clause(), "debit >= ?");
        assert_eq!(cond.args(), [Value::Real(100.0)]);
    }

    #[test]
    fn sets_lower_before_ranges() {
        let filter = TransactionFilter {
            account_ids: Some(vec![3]),
            references: Some(vec!["VIR123".to_owned()]),
            from_record_date: Some(day(2)),
            max_credit: Some(50.0),
            ..TransactionFilter::default()
        };
        let cond = build_condition(&TransactionEntity::predicates(&filter), &registry()).unwrap();
        assert_eq!(
            cond.clause(),
            "( account_id = ? ) AND ( reference = ? ) AND record_date >= ? AND credit <= ?"
        );
    }

    #[test]
    fn empty_id_set_makes_the_filter_unsatisfiable() {
        let filter = TransactionFilter {
            ids: Some(vec![]),
            from_transaction_date: Some(day(1)),
            ..TransactionFilter::default()
        };
        let built = build_condition(&TransactionEntity::predicates(&filter), &registry());
        assert!(built.is_none());

        let repo = repo();
        assert!(repo.get(&filter, &["id"], 0).unwrap().is_empty());
    }

    #[test]
    fn movements_survive_storage_intact() {
        let repo = repo();
        let added = repo
            .add(&NewTransaction {
                account_id: 9,
                label: "Salary".to_owned(),
                category_id: 4,
                description: "march".to_owned(),
                transaction_date: day(28),
                record_date: day(29),
                credit: 2150.0,
                reference: "VIR-0328".to_owned(),
                ..NewTransaction::default()
            })
            .unwrap();

        let fetched = repo
            .get(
                &TransactionFilter {
                    ids: Some(vec![added.id]),
                    ..TransactionFilter::default()
                },
                &registry().logical_names(),
                0,
            )
            .unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0], added);
    }

    #[test]
    fn date_window_selects_only_rows_inside() {
        let repo = repo();
        repo.add(&movement(1, "early", day(1), 10.0)).unwrap();
        repo.add(&movement(1, "inside", day(15), 20.0)).unwrap();
        repo.add(&movement(1, "late", day(30), 30.0)).unwrap();

        let window = repo
            .get(
                &TransactionFilter {
                    from_transaction_date: Some(day(10)),
                    to_transaction_date: Some(day(20)),
                    ..TransactionFilter::default()
                },
                &["id", "label"],
                0,
            )
            .unwrap();
        assert_eq!(window.len(), 1);
        assert_eq!(window[0].label, "inside");
    }

    #[test]
    fn window_ends_are_inclusive() {
        let repo = repo();
        repo.add(&movement(1, "on-edge", day(10), 5.0)).unwrap();
        let hits = repo
            .get(
                &TransactionFilter {
                    from_transaction_date: Some(day(10)),
                    to_transaction_date: Some(day(10)),
                    ..TransactionFilter::default()
                },
                &["id"],
                0,
            )
            .unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn uncategorized_movements_filter_by_zero() {
        let repo = repo();
        repo.add(&movement(2, "untagged", day(3), 12.0)).unwrap();
        repo.add(&NewTransaction {
            account_id: 2,
            label: "tagged".to_owned(),
            category_id: 7,
            transaction_date: day(4),
            record_date: day(4),
            ..NewTransaction::default()
        })
        .unwrap();

        let untagged = repo
            .get(
                &TransactionFilter {
                    category_ids: Some(vec![0]),
                    ..TransactionFilter::default()
                },
                &["id", "label"],
                0,
            )
            .unwrap();
        assert_eq!(untagged.len(), 1);
        assert_eq!(untagged[0].label, "untagged");
    }

    #[test]
    fn amount_range_filters_rows() {
        let repo = repo();
        repo.add(&movement(1, "small", day(1), 9.99)).unwrap();
        repo.add(&movement(1, "medium", day(2), 50.0)).unwrap();
        repo.add(&movement(1, "large", day(3), 500.0)).unwrap();

        let mid = repo
            .get(
                &TransactionFilter {
                    min_debit: Some(10.0),
                    max_debit: Some(100.0),
                    ..TransactionFilter::default()
                },
                &["label"],
                0,
            )
            .unwrap();
        assert_eq!(mid.len(), 1);
        assert_eq!(mid[0].label, "medium");
    }
}
